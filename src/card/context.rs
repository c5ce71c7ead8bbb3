use serde::Deserialize;

use crate::background::{self, ParsedBackground};
use crate::card::ColorOverrides;
use crate::color::normalize_color;
use crate::theme::{self, ThemeColors};

/// Reference card geometry.
pub const DEFAULT_DIMENSIONS: CardDimensions = CardDimensions {
    width: 495.0,
    height: 195.0,
    border_radius: 4.5,
    padding: 25.0,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardDimensions {
    pub width: f64,
    pub height: f64,
    pub border_radius: f64,
    pub padding: f64,
}

impl Default for CardDimensions {
    fn default() -> Self {
        DEFAULT_DIMENSIONS
    }
}

/// Per-field geometry overrides; `None` keeps the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DimensionOverrides {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub border_radius: Option<f64>,
    pub padding: Option<f64>,
}

impl CardDimensions {
    /// Overlay `overrides` onto the default geometry.
    ///
    /// Non-finite values are ignored; width and height below zero clamp to zero.
    pub fn with_overrides(overrides: &DimensionOverrides) -> Self {
        let pick = |value: Option<f64>, fallback: f64| {
            value.filter(|v| v.is_finite()).unwrap_or(fallback)
        };
        Self {
            width: pick(overrides.width, DEFAULT_DIMENSIONS.width).max(0.0),
            height: pick(overrides.height, DEFAULT_DIMENSIONS.height).max(0.0),
            border_radius: pick(overrides.border_radius, DEFAULT_DIMENSIONS.border_radius),
            padding: pick(overrides.padding, DEFAULT_DIMENSIONS.padding),
        }
    }
}

/// Final, flattened paint values for every card element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardColors {
    /// Fill value for the background rectangle (`#hex`, `transparent` or `url(#id)`).
    pub background: String,
    pub border: String,
    pub stroke: String,
    pub ring: String,
    pub fire: String,
    pub curr_streak_num: String,
    pub side_nums: String,
    pub curr_streak_label: String,
    pub side_labels: String,
    pub dates: String,
    pub exclude_days_label: String,
}

/// Ids for the definitions a card emits, unique per distinct card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderIds {
    pub gradient: String,
    pub clip: String,
    pub ring_mask: String,
}

impl RenderIds {
    pub fn new(card_id: &str) -> Self {
        Self {
            gradient: format!("{card_id}-bg"),
            clip: format!("{card_id}-clip"),
            ring_mask: format!("{card_id}-ring-mask"),
        }
    }
}

/// Everything the composition step needs, resolved once.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub theme: &'a ThemeColors,
    pub background: ParsedBackground,
    pub dimensions: CardDimensions,
    pub colors: CardColors,
    pub ids: RenderIds,
}

impl RenderContext<'static> {
    /// Resolve `theme_name` and apply every override.
    pub fn build(
        theme_name: &str,
        dimensions: &DimensionOverrides,
        overrides: &ColorOverrides,
        card_id: Option<&str>,
    ) -> Self {
        let theme = theme::resolve(Some(theme_name));
        let card_id = match card_id.map(sanitize_id).filter(|id| !id.is_empty()) {
            Some(id) => id,
            None => derive_card_id(theme_name, dimensions, overrides),
        };
        Self::from_theme(theme, dimensions, overrides, &card_id)
    }
}

impl<'a> RenderContext<'a> {
    /// Build a context around an already resolved (possibly custom) theme.
    ///
    /// Overrides apply in a fixed order: ring (which fire inherits unless
    /// fire is also given), fire, the remaining text and stroke colors, and
    /// finally the background, which is reparsed.
    pub fn from_theme(
        theme: &'a ThemeColors,
        dimensions: &DimensionOverrides,
        overrides: &ColorOverrides,
        card_id: &str,
    ) -> Self {
        let ids = RenderIds::new(card_id);
        let mut background = background::parse(&theme.background, &ids.gradient);

        let mut colors = CardColors {
            background: background.fill.clone(),
            border: normalize_color(&theme.border),
            stroke: normalize_color(&theme.stroke),
            ring: normalize_color(&theme.ring),
            fire: normalize_color(&theme.fire),
            curr_streak_num: normalize_color(&theme.curr_streak_num),
            side_nums: normalize_color(&theme.side_nums),
            curr_streak_label: normalize_color(&theme.curr_streak_label),
            side_labels: normalize_color(&theme.side_labels),
            dates: normalize_color(&theme.dates),
            exclude_days_label: normalize_color(&theme.exclude_days_label),
        };

        if let Some(ring) = present(&overrides.ring) {
            colors.ring = normalize_color(ring);
            if present(&overrides.fire).is_none() {
                colors.fire = colors.ring.clone();
            }
        }
        if let Some(fire) = present(&overrides.fire) {
            colors.fire = normalize_color(fire);
        }

        let remaining = [
            (&overrides.curr_streak_num, &mut colors.curr_streak_num),
            (&overrides.side_nums, &mut colors.side_nums),
            (&overrides.curr_streak_label, &mut colors.curr_streak_label),
            (&overrides.side_labels, &mut colors.side_labels),
            (&overrides.dates, &mut colors.dates),
            (&overrides.stroke, &mut colors.stroke),
        ];
        for (value, slot) in remaining {
            if let Some(value) = present(value) {
                *slot = normalize_color(value);
            }
        }

        if let Some(bg) = present(&overrides.background) {
            background = background::parse(bg, &ids.gradient);
            colors.background = background.fill.clone();
        }

        Self {
            theme,
            background,
            dimensions: CardDimensions::with_overrides(dimensions),
            colors,
            ids,
        }
    }
}

/// Empty strings count as "not given".
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Restrict a caller-supplied id to characters that are safe in `url(#...)`.
fn sanitize_id(id: &str) -> String {
    id.trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn fnv1a(hash: u64, bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(hash, |h, &b| (h ^ u64::from(b)).wrapping_mul(FNV_PRIME))
}

/// Id derived from everything that shapes the emitted definitions, so equal
/// inputs share ids and different ones do not collide.
fn derive_card_id(
    theme_name: &str,
    dimensions: &DimensionOverrides,
    overrides: &ColorOverrides,
) -> String {
    let dims = CardDimensions::with_overrides(dimensions);
    let key = format!(
        "{}\u{1f}{}\u{1f}{}\u{1f}{}\u{1f}{}",
        theme_name.trim().to_lowercase(),
        dims.width,
        dims.height,
        dims.border_radius,
        present(&overrides.background).unwrap_or(""),
    );
    format!("streak-{:016x}", fnv1a(FNV_OFFSET, key.as_bytes()))
}
