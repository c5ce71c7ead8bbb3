use std::borrow::Cow;

use crate::theme::ThemeColors;

/// Build a [`ThemeColors`] from literals in field order: background, border,
/// stroke, ring, fire, current streak number, side numbers, current streak
/// label, side labels, dates, excluded days label.
macro_rules! theme {
    (
        $background:literal, $border:literal, $stroke:literal, $ring:literal,
        $fire:literal, $curr_streak_num:literal, $side_nums:literal,
        $curr_streak_label:literal, $side_labels:literal, $dates:literal,
        $exclude_days_label:literal $(,)?
    ) => {
        ThemeColors {
            background: Cow::Borrowed($background),
            border: Cow::Borrowed($border),
            stroke: Cow::Borrowed($stroke),
            ring: Cow::Borrowed($ring),
            fire: Cow::Borrowed($fire),
            curr_streak_num: Cow::Borrowed($curr_streak_num),
            side_nums: Cow::Borrowed($side_nums),
            curr_streak_label: Cow::Borrowed($curr_streak_label),
            side_labels: Cow::Borrowed($side_labels),
            dates: Cow::Borrowed($dates),
            exclude_days_label: Cow::Borrowed($exclude_days_label),
        }
    };
}

/// The `default` theme. Registered below under its own name, so the
/// resolver's fallback can never be missing.
pub static DEFAULT: ThemeColors = theme!(
    "#FFFEFE", "#E4E2E2", "#E4E2E2", "#FB8C00", "#FB8C00", "#151515", "#151515", "#FB8C00",
    "#151515", "#464646", "#464646",
);

/// Built-in themes, sorted by name.
static THEMES: &[(&str, &ThemeColors)] = &[
    ("apprentice", &theme!(
        "#262626", "#E4E2E2", "#444444", "#FFFFAF", "#FFFFAF", "#BCBCBC", "#BCBCBC", "#FFFFAF",
        "#BCBCBC", "#87AFAF", "#87AFAF",
    )),
    ("aurora-gradient", &theme!(
        "90,4158D0,C850C0,FFCC70", "#E4E2E2", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
        "#FFFFFF", "#FFFFFF", "#FFFFFF", "#F3F3F3", "#F3F3F3",
    )),
    ("ayu-mirage", &theme!(
        "#1F2430", "#E4E2E2", "#2D3340", "#FFCC66", "#FFCC66", "#CBCCC6", "#CBCCC6", "#FFCC66",
        "#CBCCC6", "#5C6773", "#5C6773",
    )),
    ("blue-green", &theme!(
        "#040F0F", "#E4E2E2", "#2F97C1", "#2F97C1", "#0CF574", "#0CF574", "#2F97C1", "#2F97C1",
        "#0CF574", "#FFFFFF", "#FFFFFF",
    )),
    ("calm", &theme!(
        "#373F51", "#E4E2E2", "#E4E2E2", "#E07A5F", "#E07A5F", "#EBCFB2", "#EBCFB2", "#E07A5F",
        "#EBCFB2", "#EBCFB2", "#EBCFB2",
    )),
    ("catppuccin-latte", &theme!(
        "#EFF1F5", "#DCE0E8", "#BCC0CC", "#FE640B", "#FE640B", "#4C4F69", "#4C4F69", "#FE640B",
        "#5C5F77", "#6C6F85", "#6C6F85",
    )),
    ("catppuccin-mocha", &theme!(
        "#1E1E2E", "#313244", "#45475A", "#FAB387", "#FAB387", "#CDD6F4", "#CDD6F4", "#FAB387",
        "#BAC2DE", "#A6ADC8", "#A6ADC8",
    )),
    ("chartreuse-dark", &theme!(
        "#000000", "#E4E2E2", "#E4E2E2", "#7FFF00", "#7FFF00", "#00AEFF", "#7FFF00", "#00AEFF",
        "#7FFF00", "#FFFFFF", "#FFFFFF",
    )),
    ("clear-glass", &theme!(
        "#FFFFFF00", "#E4E2E2", "#BDBDBD", "#2F80ED", "#2F80ED", "#5A5A5A", "#5A5A5A", "#2F80ED",
        "#5A5A5A", "#858585", "#858585",
    )),
    ("cobalt", &theme!(
        "#193549", "#E4E2E2", "#E4E2E2", "#E683D9", "#E683D9", "#0480EF", "#E683D9", "#0480EF",
        "#E683D9", "#75EEB2", "#75EEB2",
    )),
    ("dark", &theme!(
        "#151515", "#E4E2E2", "#E4E2E2", "#FB8C00", "#FB8C00", "#FEFEFE", "#FEFEFE", "#FB8C00",
        "#FEFEFE", "#9E9E9E", "#9E9E9E",
    )),
    ("default", &DEFAULT),
    ("dracula", &theme!(
        "#282A36", "#E4E2E2", "#E4E2E2", "#FF6E96", "#FF6E96", "#79DAFA", "#FF6E96", "#79DAFA",
        "#FF6E96", "#F8F8F2", "#F8F8F2",
    )),
    ("github-dark", &theme!(
        "#0D1117", "#30363D", "#30363D", "#58A6FF", "#F78166", "#C9D1D9", "#C9D1D9", "#58A6FF",
        "#8B949E", "#8B949E", "#8B949E",
    )),
    ("github_light", &theme!(
        "#FFFFFF", "#D0D7DE", "#D0D7DE", "#0969DA", "#CF222E", "#24292F", "#24292F", "#0969DA",
        "#57606A", "#57606A", "#57606A",
    )),
    ("gotham", &theme!(
        "#0C1014", "#E4E2E2", "#E4E2E2", "#2AA889", "#2AA889", "#599CAB", "#599CAB", "#2AA889",
        "#99D1CE", "#99D1CE", "#99D1CE",
    )),
    ("gruvbox", &theme!(
        "#282828", "#E4E2E2", "#E4E2E2", "#FABD2F", "#FABD2F", "#8EC07C", "#FABD2F", "#8EC07C",
        "#FABD2F", "#FE8019", "#FE8019",
    )),
    ("highcontrast", &theme!(
        "#000000", "#E4E2E2", "#E4E2E2", "#E7F216", "#E7F216", "#FFFFFF", "#FFFFFF", "#E7F216",
        "#FFFFFF", "#C5C5C5", "#C5C5C5",
    )),
    ("kanagawa", &theme!(
        "#1F1F28", "#2A2A37", "#54546D", "#C8C093", "#FF9E3B", "#DCD7BA", "#DCD7BA", "#C8C093",
        "#C8C093", "#727169", "#727169",
    )),
    ("material_palenight", &theme!(
        "#292D3E", "#E4E2E2", "#E4E2E2", "#C792EA", "#C792EA", "#89DDFF", "#C792EA", "#89DDFF",
        "#C792EA", "#A6ACCD", "#A6ACCD",
    )),
    ("midnight-purple", &theme!(
        "#000000", "#E4E2E2", "#E4E2E2", "#9745F5", "#9745F5", "#FFFFFF", "#FFFFFF", "#9745F5",
        "#FFFFFF", "#9E9E9E", "#9E9E9E",
    )),
    ("mono", &theme!(
        "#FFF", "#DDD", "#DDD", "#000", "#000", "#000", "#000", "#000", "#000", "#555", "#555",
    )),
    ("monokai", &theme!(
        "#272822", "#E4E2E2", "#E4E2E2", "#F92672", "#F92672", "#A6E22E", "#F8F8F2", "#A6E22E",
        "#F8F8F2", "#75715E", "#75715E",
    )),
    ("night-owl", &theme!(
        "#011627", "#E4E2E2", "#1D3B53", "#C792EA", "#F78C6C", "#7FDBCA", "#D6DEEB", "#C792EA",
        "#D6DEEB", "#5F7E97", "#5F7E97",
    )),
    ("nord", &theme!(
        "#2E3440", "#E4E2E2", "#4C566A", "#88C0D0", "#88C0D0", "#ECEFF4", "#ECEFF4", "#88C0D0",
        "#D8DEE9", "#81A1C1", "#81A1C1",
    )),
    ("ocean-gradient", &theme!(
        "135,2E3192,1BFFFF", "#E4E2E2", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
        "#FFFFFF", "#FFFFFF", "#E0F7FA", "#E0F7FA",
    )),
    ("onedark", &theme!(
        "#282C34", "#E4E2E2", "#E4E2E2", "#E4BF7A", "#8EB573", "#DF6D74", "#E4BF7A", "#DF6D74",
        "#E4BF7A", "#8EB573", "#8EB573",
    )),
    ("radical", &theme!(
        "#141321", "#E4E2E2", "#E4E2E2", "#FE428E", "#FE428E", "#F8D847", "#FE428E", "#F8D847",
        "#FE428E", "#A9FEF7", "#A9FEF7",
    )),
    ("react", &theme!(
        "#20232A", "#E4E2E2", "#E4E2E2", "#61DAFB", "#61DAFB", "#FFFFFF", "#61DAFB", "#FFFFFF",
        "#61DAFB", "#9E9E9E", "#9E9E9E",
    )),
    ("rose-pine-dawn", &theme!(
        "#FAF4ED", "#DFDAD9", "#CECACD", "#D7827E", "#D7827E", "#575279", "#575279", "#D7827E",
        "#797593", "#9893A5", "#9893A5",
    )),
    ("shades-of-purple", &theme!(
        "#2D2B55", "#E4E2E2", "#E4E2E2", "#FAD000", "#FAD000", "#A599E9", "#FAD000", "#A599E9",
        "#FAD000", "#FFFFFF", "#FFFFFF",
    )),
    ("solarized-dark", &theme!(
        "#002B36", "#E4E2E2", "#586E75", "#B58900", "#CB4B16", "#93A1A1", "#93A1A1", "#B58900",
        "#839496", "#657B83", "#657B83",
    )),
    ("solarized-light", &theme!(
        "#FDF6E3", "#E4E2E2", "#93A1A1", "#B58900", "#CB4B16", "#586E75", "#586E75", "#B58900",
        "#657B83", "#839496", "#839496",
    )),
    ("sunset-gradient", &theme!(
        "45,FF7E5F,FEB47B", "#E4E2E2", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF", "#FFFFFF",
        "#FFFFFF", "#FFFFFF", "#FFF3E0", "#FFF3E0",
    )),
    ("swift", &theme!(
        "#F7F7F7", "#E4E2E2", "#E4E2E2", "#F05138", "#F05138", "#000000", "#000000", "#F05138",
        "#000000", "#5E5E5E", "#5E5E5E",
    )),
    ("synthwave", &theme!(
        "#2B213A", "#E4E2E2", "#E4E2E2", "#E2E9EC", "#E5289E", "#EF8539", "#E5289E", "#EF8539",
        "#E5289E", "#E2E9EC", "#E2E9EC",
    )),
    ("tokyonight", &theme!(
        "#1A1B27", "#E4E2E2", "#E4E2E2", "#70A5FD", "#BF91F3", "#38BDAE", "#70A5FD", "#70A5FD",
        "#70A5FD", "#38BDAE", "#38BDAE",
    )),
    ("tokyonight-duo", &theme!(
        "#1A1B27", "#E4E2E2", "#E4E2E2", "#BF91F3", "#BF91F3", "#70A5FD", "#BF91F3", "#70A5FD",
        "#BF91F3", "#38BDAE", "#38BDAE",
    )),
    ("transparent", &theme!(
        "#0000", "#E4E2E2", "#E4E2E2", "#FB8C00", "#FB8C00", "#858585", "#858585", "#FB8C00",
        "#858585", "#858585", "#858585",
    )),
    ("vue", &theme!(
        "#FFFFFF", "#E4E2E2", "#E4E2E2", "#41B883", "#41B883", "#273849", "#41B883", "#273849",
        "#41B883", "#273849", "#273849",
    )),
    ("vue-dark", &theme!(
        "#273849", "#E4E2E2", "#E4E2E2", "#41B883", "#41B883", "#FFFFFF", "#41B883", "#FFFFFF",
        "#41B883", "#E4E2E2", "#E4E2E2",
    )),
];

/// Look up a built-in theme by exact (already normalized) name.
pub fn get(name: &str) -> Option<&'static ThemeColors> {
    THEMES
        .iter()
        .find(|(theme_name, _)| *theme_name == name)
        .map(|(_, colors)| *colors)
}

/// List all built-in theme names in alphabetical order.
pub fn list() -> Vec<&'static str> {
    THEMES.iter().map(|(name, _)| *name).collect()
}

pub fn count() -> usize {
    THEMES.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_sorted_and_unique() {
        let names = list();
        assert!(names.windows(2).all(|w| w[0] < w[1]), "{names:?}");
    }

    #[test]
    fn every_theme_fills_all_fields() {
        for (name, t) in THEMES {
            let fields = [
                &t.background,
                &t.border,
                &t.stroke,
                &t.ring,
                &t.fire,
                &t.curr_streak_num,
                &t.side_nums,
                &t.curr_streak_label,
                &t.side_labels,
                &t.dates,
                &t.exclude_days_label,
            ];
            assert!(fields.iter().all(|f| !f.is_empty()), "{name}");
        }
    }

    #[test]
    fn default_entry_is_the_default_constant() {
        let found = get("default").expect("default theme registered");
        assert!(std::ptr::eq(found, &DEFAULT));
    }

    #[test]
    fn lookup_is_exact() {
        assert!(get("dracula").is_some());
        assert!(get("Dracula").is_none());
        assert!(get("github-light").is_none());
        assert_eq!(count(), list().len());
    }
}
