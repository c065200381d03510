//! Cameraman profile files
//!
//! A profile is plain text with one `name = value` pair per line:
//!
//! ```text
//! path_mode = 2
//! speed_mode = 1
//! delay = 35
//! speed = 140
//! x0 = 1056
//! y0 = -3616
//! ```
//!
//! Parsing is best-effort. Lines that don't look like `name = value` and
//! names that aren't recognised are skipped. Values are always read as
//! floats; integer settings truncate toward zero and flags are set by any
//! non-zero value.

use crate::error::{CmanError, Result};
use crate::params::{AngleMode, ParameterSet, PathMode, SpeedMode, ANGLE_BUFFER_CAPACITY};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default extension tried when a profile path has none
pub const PROFILE_EXTENSION: &str = "cman";

/// Longest parameter name accepted on a line
const MAX_NAME_LEN: usize = 63;

/// Read and parse a profile file.
///
/// A path without an extension falls back to `<path>.cman` when it does
/// not exist as given.
pub fn load_profile(path: impl AsRef<Path>) -> Result<ParameterSet> {
    let path = resolve_profile_path(path.as_ref())?;
    info!("Loading Cameraman profile: {}", path.display());

    let content = fs::read_to_string(&path).map_err(|source| CmanError::Io {
        path: path.clone(),
        source,
    })?;

    parse_profile(&content)
}

fn resolve_profile_path(path: &Path) -> Result<PathBuf> {
    if path.is_file() {
        return Ok(path.to_path_buf());
    }

    if path.extension().is_none() {
        let with_ext = path.with_extension(PROFILE_EXTENSION);
        if with_ext.is_file() {
            return Ok(with_ext);
        }
    }

    Err(CmanError::MissingProfile(path.to_path_buf()))
}

/// Parse profile text on top of the default parameter set
pub fn parse_profile(content: &str) -> Result<ParameterSet> {
    let mut params = ParameterSet::default();

    for line in content.lines() {
        let Some((name, value)) = split_line(line) else {
            continue;
        };
        debug!("Cameraman param: {} = {}", name, value);
        apply_param(&mut params, name, value)?;
    }

    Ok(params)
}

/// Split `name = value`, rejecting anything else
fn split_line(line: &str) -> Option<(&str, f32)> {
    let line = line.trim_start();
    let name_end = line.find(char::is_whitespace)?;
    let (name, rest) = line.split_at(name_end);
    if name.len() > MAX_NAME_LEN {
        return None;
    }

    let rest = rest.trim_start().strip_prefix('=')?;
    let value = rest.split_whitespace().next()?.parse::<f32>().ok()?;

    Some((name, value))
}

fn apply_param(params: &mut ParameterSet, name: &str, value: f32) -> Result<()> {
    let int = value as i32;
    let flag = int != 0;

    match name {
        "path_mode" => match PathMode::from_index(int) {
            Some(mode) => params.path_mode = mode,
            None => warn!("Ignoring unknown path_mode {}", int),
        },
        "speed_mode" => match SpeedMode::from_index(int) {
            Some(mode) => params.speed_mode = mode,
            None => warn!("Ignoring unknown speed_mode {}", int),
        },
        "angle_mode" => match AngleMode::from_index(int) {
            Some(mode) => params.angle_mode = mode,
            None => warn!("Ignoring unknown angle_mode {}", int),
        },
        "delay" => params.delay = int,
        "overshoot" => params.overshoot = flag,
        "warp_player" => params.warp_player = flag,
        "hide_player" => params.hide_player = flag,
        "ga_buffer_len" => {
            params.buffer_length = usize::try_from(int)
                .ok()
                .filter(|len| *len <= ANGLE_BUFFER_CAPACITY)
                .ok_or(CmanError::BufferLength(i64::from(int)))?;
        }
        "speed" => params.speed = value,
        "x0" => params.point0.x = value,
        "y0" => params.point0.y = value,
        "z0" => params.point0.z = value,
        "x1" => params.point1.x = value,
        "y1" => params.point1.y = value,
        "z1" => params.point1.z = value,
        "x2" => params.point2.x = value,
        "y2" => params.point2.y = value,
        "z2" => params.point2.z = value,
        "a0" => params.yaw0 = value,
        "a1" => params.yaw1 = value,
        "p0" => params.pitch0 = value,
        "p1" => params.pitch1 = value,
        "ra0" => params.orbit0 = value,
        "ra1" => params.orbit1 = value,
        "r0" => params.radius0 = value,
        "r1" => params.radius1 = value,
        "cx0" => params.center0.0 = value,
        "cy0" => params.center0.1 = value,
        "cx1" => params.center1.0 = value,
        "cy1" => params.center1.1 = value,
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    #[test]
    fn test_parse_full_profile() {
        let params = parse_profile(
            "path_mode = 2\n\
             speed_mode = 1\n\
             angle_mode = 0\n\
             delay = 35\n\
             overshoot = 1\n\
             ga_buffer_len = 24\n\
             speed = 140.5\n\
             x0 = 1056\n\
             y0 = -3616\n\
             z0 = 41\n\
             x2 = 12\n\
             a1 = 0.25\n\
             p0 = -0.01\n\
             cx1 = 7\n",
        )
        .unwrap();

        assert_eq!(params.path_mode, PathMode::Bezier);
        assert_eq!(params.speed_mode, SpeedMode::Time);
        assert_eq!(params.angle_mode, AngleMode::Relative);
        assert_eq!(params.delay, 35);
        assert!(params.overshoot);
        assert_eq!(params.buffer_length, 24);
        assert_eq!(params.speed, 140.5);
        assert_eq!(params.point0, Vec3::new(1056.0, -3616.0, 41.0));
        assert_eq!(params.point2.x, 12.0);
        assert_eq!(params.yaw1, 0.25);
        assert_eq!(params.pitch0, -0.01);
        assert_eq!(params.center1, (7.0, 0.0));
    }

    #[test]
    fn test_defaults_when_empty() {
        let params = parse_profile("").unwrap();
        assert_eq!(params, ParameterSet::default());
        assert_eq!(params.delay, 0);
        assert_eq!(params.speed, 1.0);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let params = parse_profile(
            "speed=5\n\
             speed : 6\n\
             speed = fast\n\
             speed =\n\
             \n\
             # comment\n\
             unknown_key = 3\n\
             speed = 7 trailing words\n",
        )
        .unwrap();

        assert_eq!(params.speed, 7.0);
    }

    #[test]
    fn test_integers_truncate() {
        let params = parse_profile("delay = 12.9\nwarp_player = 0.5\nhide_player = 2\n").unwrap();
        assert_eq!(params.delay, 12);
        assert!(!params.warp_player);
        assert!(params.hide_player);
    }

    #[test]
    fn test_unknown_mode_keeps_previous() {
        let params = parse_profile("path_mode = 1\npath_mode = 9\n").unwrap();
        assert_eq!(params.path_mode, PathMode::Radial);
    }

    #[test]
    fn test_buffer_length_out_of_range() {
        assert!(matches!(
            parse_profile("ga_buffer_len = 1025\n"),
            Err(CmanError::BufferLength(1025))
        ));
        assert!(matches!(
            parse_profile("ga_buffer_len = -4\n"),
            Err(CmanError::BufferLength(-4))
        ));
        assert_eq!(
            parse_profile("ga_buffer_len = 1024\n").unwrap().buffer_length,
            1024
        );
    }

    #[test]
    fn test_long_names_are_skipped() {
        let line = format!("{} = 1\nspeed = 3\n", "x".repeat(64));
        assert_eq!(parse_profile(&line).unwrap().speed, 3.0);
    }
}
