use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::background;
use crate::color::Rgb;
use crate::config::builtin_themes;

/// Name of the theme every lookup falls back to.
pub const DEFAULT_THEME: &str = "default";

/// The eleven colors that paint a card.
///
/// `background` accepts the three specifier shapes understood by
/// [`crate::background::parse`]; every other field is a plain color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeColors {
    pub background: Cow<'static, str>,
    pub border: Cow<'static, str>,
    pub stroke: Cow<'static, str>,
    pub ring: Cow<'static, str>,
    pub fire: Cow<'static, str>,
    pub curr_streak_num: Cow<'static, str>,
    pub side_nums: Cow<'static, str>,
    pub curr_streak_label: Cow<'static, str>,
    pub side_labels: Cow<'static, str>,
    pub dates: Cow<'static, str>,
    pub exclude_days_label: Cow<'static, str>,
}

/// Field-wise overrides for [`create_custom`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
    pub background: Option<String>,
    pub border: Option<String>,
    pub stroke: Option<String>,
    pub ring: Option<String>,
    pub fire: Option<String>,
    pub curr_streak_num: Option<String>,
    pub side_nums: Option<String>,
    pub curr_streak_label: Option<String>,
    pub side_labels: Option<String>,
    pub dates: Option<String>,
    pub exclude_days_label: Option<String>,
}

/// Outcome of [`resolve_with_status`].
#[derive(Debug, Clone)]
pub struct ThemeResolution {
    pub theme: &'static ThemeColors,
    /// `false` when the requested name (and its `-`/`_` variants) is unknown.
    pub found: bool,
    pub resolved_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThemeStats {
    pub total: usize,
    pub gradient: Vec<&'static str>,
    pub transparent: Vec<&'static str>,
    pub dark: Vec<&'static str>,
    pub light: Vec<&'static str>,
}

fn default_theme() -> &'static ThemeColors {
    builtin_themes::get(DEFAULT_THEME).unwrap_or(&builtin_themes::DEFAULT)
}

/// Look up `name` as given, then with `-`→`_`, then with `_`→`-`.
fn lookup(normalized: &str) -> Option<(&'static ThemeColors, String)> {
    let candidates = [
        normalized.to_owned(),
        normalized.replace('-', "_"),
        normalized.replace('_', "-"),
    ];
    candidates
        .into_iter()
        .find_map(|candidate| builtin_themes::get(&candidate).map(|theme| (theme, candidate)))
}

/// Resolve a theme by name, case-insensitively, falling back to `default`.
pub fn resolve(name: Option<&str>) -> &'static ThemeColors {
    resolve_with_status(name).theme
}

/// Like [`resolve`], but also report whether the name matched a theme.
pub fn resolve_with_status(name: Option<&str>) -> ThemeResolution {
    let Some(name) = name.filter(|n| !n.is_empty()) else {
        return ThemeResolution {
            theme: default_theme(),
            found: true,
            resolved_name: DEFAULT_THEME.to_owned(),
        };
    };

    let normalized = name.trim().to_lowercase();
    match lookup(&normalized) {
        Some((theme, resolved_name)) => ThemeResolution {
            theme,
            found: true,
            resolved_name,
        },
        None => {
            tracing::debug!("theme {name:?} not found, using {DEFAULT_THEME}");
            ThemeResolution {
                theme: default_theme(),
                found: false,
                resolved_name: DEFAULT_THEME.to_owned(),
            }
        }
    }
}

/// Theme names containing `pattern` (case-insensitive).
pub fn search(pattern: &str) -> Vec<&'static str> {
    let pattern = pattern.trim().to_lowercase();
    builtin_themes::list()
        .into_iter()
        .filter(|name| name.contains(&pattern))
        .collect()
}

/// Theme names starting with `prefix`, e.g. `"catppuccin"`.
pub fn by_category(prefix: &str) -> Vec<&'static str> {
    let prefix = prefix.trim().to_lowercase();
    builtin_themes::list()
        .into_iter()
        .filter(|name| name.starts_with(&prefix))
        .collect()
}

/// Build a new theme from `base` with `overrides` laid on top.
pub fn create_custom(base: &str, overrides: &ThemeOverrides) -> ThemeColors {
    let base = resolve(Some(base));
    let pick = |field: &Option<String>, fallback: &Cow<'static, str>| match field {
        Some(value) => Cow::Owned(value.clone()),
        None => fallback.clone(),
    };

    ThemeColors {
        background: pick(&overrides.background, &base.background),
        border: pick(&overrides.border, &base.border),
        stroke: pick(&overrides.stroke, &base.stroke),
        ring: pick(&overrides.ring, &base.ring),
        fire: pick(&overrides.fire, &base.fire),
        curr_streak_num: pick(&overrides.curr_streak_num, &base.curr_streak_num),
        side_nums: pick(&overrides.side_nums, &base.side_nums),
        curr_streak_label: pick(&overrides.curr_streak_label, &base.curr_streak_label),
        side_labels: pick(&overrides.side_labels, &base.side_labels),
        dates: pick(&overrides.dates, &base.dates),
        exclude_days_label: pick(&overrides.exclude_days_label, &base.exclude_days_label),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Gradient,
    Transparent,
    Dark,
    Light,
}

fn categorize(name: &str, background: &str) -> Option<Category> {
    if let Some((first, _)) = background.split_once(',')
        && first.trim().parse::<f64>().is_ok()
    {
        return Some(Category::Gradient);
    }
    if background::is_transparent(background) {
        return Some(Category::Transparent);
    }
    if name.contains("dark") || name.contains("night") {
        return Some(Category::Dark);
    }
    if name.contains("light") {
        return Some(Category::Light);
    }

    // Shorthand or otherwise odd backgrounds stay uncategorized.
    let hex = background.trim_start_matches('#');
    let rgb = hex.get(..6).and_then(|six| six.parse::<Rgb>().ok())?;
    if rgb.luminance() < 128.0 {
        Some(Category::Dark)
    } else {
        Some(Category::Light)
    }
}

/// Classify every registered theme into at most one category.
pub fn stats() -> ThemeStats {
    let mut stats = ThemeStats {
        total: builtin_themes::count(),
        ..ThemeStats::default()
    };

    for name in builtin_themes::list() {
        let Some(theme) = builtin_themes::get(name) else {
            continue;
        };
        match categorize(name, &theme.background) {
            Some(Category::Gradient) => stats.gradient.push(name),
            Some(Category::Transparent) => stats.transparent.push(name),
            Some(Category::Dark) => stats.dark.push(name),
            Some(Category::Light) => stats.light.push(name),
            None => tracing::debug!("theme {name} left uncategorized"),
        }
    }
    stats
}
