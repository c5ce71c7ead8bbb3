//! Card background specifiers.
//!
//! A background is one of three shapes:
//! - a solid color (`#RRGGBB`, `RRGGBB`, anything not matched below),
//! - a transparent color (`transparent`, `#0000`, zero-alpha hex),
//! - a gradient: `ANGLE,COLOR1,COLOR2[,...]` with bare hex colors.

use std::fmt::Write as _;

use crate::color::{self, normalize_color};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundKind {
    Solid,
    Transparent,
    Gradient,
}

/// A background specifier ready to be dropped into markup.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedBackground {
    pub kind: BackgroundKind,
    /// Definition markup for the `<defs>` block; empty unless gradient.
    pub defs: String,
    /// Value for the `fill` attribute.
    pub fill: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    /// `#`-prefixed color.
    pub color: String,
    /// Offset in percent, 0–100.
    pub offset: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientInfo {
    pub angle: f64,
    pub stops: Vec<GradientStop>,
}

/// Endpoints of a linear gradient on a 0–100 percentage grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientCoordinates {
    pub x1: String,
    pub y1: String,
    pub x2: String,
    pub y2: String,
}

pub fn is_transparent(color: &str) -> bool {
    let normalized = color.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "#0000" | "#00000000" | "transparent" | "rgba(0,0,0,0)" | "rgba(0, 0, 0, 0)" => true,
        other => {
            let Some(hex) = other.strip_prefix('#') else {
                return false;
            };
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return false;
            }
            match hex.len() {
                4 => hex.ends_with('0'),
                8 => hex.ends_with("00"),
                _ => false,
            }
        }
    }
}

pub fn is_gradient(background: &str) -> bool {
    let parts: Vec<&str> = background.split(',').map(str::trim).collect();
    if parts.len() < 3 {
        return false;
    }
    let Some(angle) = parse_angle(parts[0]) else {
        return false;
    };
    if !angle.is_finite() {
        return false;
    }
    parts[1..].iter().all(|part| color::is_bare_hex_token(part))
}

fn parse_angle(part: &str) -> Option<f64> {
    if part.is_empty() {
        return None;
    }
    part.parse::<f64>().ok()
}

/// Split a gradient specifier into its angle and evenly spaced stops.
///
/// Callers are expected to check [`is_gradient`] first; an unparsable angle
/// reads as 0.
pub fn parse_gradient(background: &str) -> GradientInfo {
    let mut parts = background.split(',').map(str::trim);
    let angle = parts.next().and_then(parse_angle).unwrap_or(0.0);
    let colors: Vec<&str> = parts.collect();
    let n = colors.len();

    let stops = colors
        .into_iter()
        .enumerate()
        .map(|(index, color)| GradientStop {
            color: format!("#{color}"),
            offset: if n == 1 {
                50.0
            } else {
                index as f64 / (n - 1) as f64 * 100.0
            },
        })
        .collect();

    GradientInfo { angle, stops }
}

/// Map a CSS-style gradient angle (0° = bottom to top) onto SVG
/// `linearGradient` endpoints.
pub fn angle_to_coordinates(angle: f64) -> GradientCoordinates {
    let normalized = angle.rem_euclid(360.0);
    let radians = (normalized - 90.0).to_radians();
    let (sin, cos) = radians.sin_cos();

    let pct = |v: f64| format!("{}%", v.round() as i64);
    GradientCoordinates {
        x1: pct(50.0 - cos * 50.0),
        y1: pct(50.0 - sin * 50.0),
        x2: pct(50.0 + cos * 50.0),
        y2: pct(50.0 + sin * 50.0),
    }
}

/// Build the `<linearGradient>` definition for `info` under `gradient_id`.
pub fn generate_gradient_defs(gradient_id: &str, info: &GradientInfo) -> String {
    let coords = angle_to_coordinates(info.angle);
    let mut out = format!(
        "<linearGradient id='{gradient_id}' x1='{}' y1='{}' x2='{}' y2='{}'>",
        coords.x1, coords.y1, coords.x2, coords.y2
    );
    for stop in &info.stops {
        let _ = write!(
            out,
            "\n      <stop offset='{}%' stop-color='{}' stop-opacity='1'/>",
            stop.offset, stop.color
        );
    }
    out.push_str("\n    </linearGradient>");
    out
}

/// Classify `background` and produce the markup pieces needed to paint it.
///
/// Transparent wins over gradient, gradient over solid. Solid colors are
/// passed through with a `#` prefix even when they are not valid hex.
pub fn parse(background: &str, gradient_id: &str) -> ParsedBackground {
    if is_transparent(background) {
        return ParsedBackground {
            kind: BackgroundKind::Transparent,
            defs: String::new(),
            fill: "transparent".to_owned(),
        };
    }

    if is_gradient(background) {
        let info = parse_gradient(background);
        return ParsedBackground {
            kind: BackgroundKind::Gradient,
            defs: generate_gradient_defs(gradient_id, &info),
            fill: format!("url(#{gradient_id})"),
        };
    }

    ParsedBackground {
        kind: BackgroundKind::Solid,
        defs: String::new(),
        fill: normalize_color(background),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_forms() {
        for t in [
            "#0000",
            "#00000000",
            "transparent",
            "TRANSPARENT",
            "rgba(0,0,0,0)",
            "rgba(0, 0, 0, 0)",
            "#abc0",
            "#ff000000",
        ] {
            assert!(is_transparent(t), "{t}");
        }
        for t in ["#000", "#abc1", "#ff0000", "ff000000", "#ff0000ff"] {
            assert!(!is_transparent(t), "{t}");
        }
    }

    #[test]
    fn gradient_shape_checks() {
        assert!(is_gradient("0,ff0000,0000ff"));
        assert!(is_gradient("-45.5, fff, 000a, 123456"));
        assert!(!is_gradient("0,ff0000"));
        assert!(!is_gradient("deg,ff0000,0000ff"));
        assert!(!is_gradient("0,#ff0000,0000ff"));
        assert!(!is_gradient("0,ff000,0000ff"));
        assert!(!is_gradient("inf,ff0000,0000ff"));
    }

    #[test]
    fn stops_are_evenly_spaced() {
        let info = parse_gradient("30,111111,222222,333333");
        assert!((info.angle - 30.0).abs() < f64::EPSILON);
        let offsets: Vec<f64> = info.stops.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 50.0, 100.0]);
        assert_eq!(info.stops[2].color, "#333333");
    }

    #[test]
    fn single_stop_is_centered() {
        let info = parse_gradient("0,abcdef");
        assert_eq!(info.stops.len(), 1);
        assert!((info.stops[0].offset - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn angles_wrap_around() {
        assert_eq!(angle_to_coordinates(45.0), angle_to_coordinates(405.0));
        assert_eq!(angle_to_coordinates(-90.0), angle_to_coordinates(270.0));
    }

    #[test]
    fn defs_reference_id_and_stops() {
        let info = parse_gradient("90,ff0000,0000ff");
        let defs = generate_gradient_defs("card-bg", &info);
        assert!(defs.starts_with("<linearGradient id='card-bg'"));
        assert!(defs.contains("x1='0%' y1='50%' x2='100%' y2='50%'"));
        assert!(defs.contains("<stop offset='0%' stop-color='#ff0000' stop-opacity='1'/>"));
        assert!(defs.contains("<stop offset='100%' stop-color='#0000ff' stop-opacity='1'/>"));
    }
}
