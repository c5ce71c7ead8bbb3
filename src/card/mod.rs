//! Streak card composition.
//!
//! [`generate_card`] is the whole pipeline: resolve the theme, apply
//! overrides, lay out the three sections and wrap them in a root element.
//! It never fails; malformed input degrades to defaults.

pub mod context;
pub mod layout;
pub mod svg;

use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::format::{self, DateFormatter, RangeEnd};
use crate::i18n::{self, Translations};
use crate::theme::DEFAULT_THEME;
use crate::types::StreakCardData;

pub use context::{CardDimensions, DimensionOverrides, RenderContext};
use layout::{Layout, delay};
use svg::TextStyle;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NumberFormat {
    /// `1.2K`, `3.4M`, ...
    Short,
    /// Grouped digits, `1,234`.
    #[default]
    Full,
}

/// Line cap of the current-streak ring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StrokeType {
    #[default]
    Round,
    Butt,
}

impl StrokeType {
    pub fn as_str(self) -> &'static str {
        match self {
            StrokeType::Round => "round",
            StrokeType::Butt => "butt",
        }
    }
}

/// Per-field color overrides. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ColorOverrides {
    pub fire: Option<String>,
    pub ring: Option<String>,
    pub curr_streak_num: Option<String>,
    pub side_nums: Option<String>,
    pub curr_streak_label: Option<String>,
    pub side_labels: Option<String>,
    pub dates: Option<String>,
    /// Solid, transparent or gradient specifier.
    pub background: Option<String>,
    /// Separator lines.
    pub stroke: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CardOptions {
    pub theme: String,
    pub hide_border: bool,
    pub animate: bool,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub border_radius: Option<f64>,
    /// Date pattern, e.g. `M j[, Y]` or `d/m[/Y]`.
    pub date_format: Option<String>,
    pub locale: String,
    pub number_format: NumberFormat,
    pub stroke_type: StrokeType,
    pub colors: ColorOverrides,
    /// Prefix for definition ids; derived from the options when absent.
    pub card_id: Option<String>,
    /// Date used for the same-year rule; today (UTC) when absent.
    #[serde(skip)]
    pub today: Option<NaiveDate>,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_owned(),
            hide_border: false,
            animate: true,
            width: None,
            height: None,
            border_radius: None,
            date_format: None,
            locale: "en".to_owned(),
            number_format: NumberFormat::Full,
            stroke_type: StrokeType::Round,
            colors: ColorOverrides::default(),
            card_id: None,
            today: None,
        }
    }
}

impl CardOptions {
    pub fn dimension_overrides(&self) -> DimensionOverrides {
        DimensionOverrides {
            width: self.width,
            height: self.height,
            border_radius: self.border_radius,
            padding: None,
        }
    }
}

/// Render `data` as a complete SVG document.
pub fn generate_card(data: &StreakCardData, options: &CardOptions) -> String {
    let ctx = RenderContext::build(
        &options.theme,
        &options.dimension_overrides(),
        &options.colors,
        options.card_id.as_deref(),
    );
    let translations = i18n::get_translations(&options.locale);
    let direction = if translations.rtl { "rtl" } else { "ltr" };
    let layout = Layout::new(&ctx.dimensions, translations.rtl);

    let content = compose_sections(&ctx, &layout, data, options, &translations);
    let ring_mask = svg::render_ring_mask(&layout, &ctx.ids.ring_mask);

    svg::render_wrapper(
        &ctx,
        &content,
        &svg::WrapperOptions {
            animate: options.animate,
            hide_border: options.hide_border,
            direction,
            extra_defs: &ring_mask,
        },
    )
}

/// Render one card per theme name with otherwise default options.
pub fn generate_theme_preview(data: &StreakCardData, themes: &[&str]) -> Vec<(String, String)> {
    themes
        .iter()
        .map(|&name| {
            let options = CardOptions {
                theme: name.to_owned(),
                ..CardOptions::default()
            };
            (name.to_owned(), generate_card(data, &options))
        })
        .collect()
}

fn compose_sections(
    ctx: &RenderContext<'_>,
    layout: &Layout,
    data: &StreakCardData,
    options: &CardOptions,
    translations: &Translations,
) -> String {
    let colors = &ctx.colors;
    let animate = options.animate;
    let locale = options.locale.as_str();
    let short = options.number_format == NumberFormat::Short;
    let today = options.today.unwrap_or_else(|| Utc::now().date_naive());
    let dates = DateFormatter::for_locale(locale, options.date_format.as_deref(), today);

    let mut parts = Vec::with_capacity(12);

    for x in layout.separators() {
        parts.push(svg::render_line(
            x,
            layout.separator_top,
            x,
            layout.separator_bottom,
            &colors.stroke,
        ));
    }

    // Total contributions
    parts.push(svg::render_text(
        &format::format_number(data.total_contributions, locale, short),
        layout.total_x,
        layout.side_number_y,
        &TextStyle::number(&colors.side_nums, delay::SIDE_NUMBERS),
        animate,
    ));
    parts.push(svg::render_text(
        translations.total_contributions,
        layout.total_x,
        layout.label_y,
        &TextStyle::label(&colors.side_labels, delay::SIDE_LABELS),
        animate,
    ));
    parts.push(svg::render_text(
        &dates.format_range(
            &data.first_contribution_date,
            RangeEnd::Present,
            translations.present,
        ),
        layout.total_x,
        layout.date_y,
        &TextStyle::date(&colors.dates, delay::SIDE_DATES),
        animate,
    ));

    // Current streak
    parts.push(svg::render_ring(
        layout,
        &colors.ring,
        options.stroke_type.as_str(),
        &ctx.ids.ring_mask,
        animate,
    ));
    parts.push(svg::render_fire_icon(layout, &colors.fire, animate));
    parts.push(svg::render_streak_number(
        &format::format_number(u64::from(data.current_streak), locale, short),
        layout.center_x,
        layout.center_number_y,
        &colors.curr_streak_num,
        animate,
    ));
    parts.push(svg::render_text(
        translations.current_streak,
        layout.center_x,
        layout.label_y,
        &TextStyle::label(&colors.curr_streak_label, delay::CURRENT_LABEL),
        animate,
    ));
    parts.push(svg::render_text(
        &dates.format_range(
            &data.streak_start_date,
            RangeEnd::from(data.streak_end_date.as_str()),
            translations.present,
        ),
        layout.center_x,
        layout.date_y,
        &TextStyle::date(&colors.dates, delay::CURRENT_DATES),
        animate,
    ));

    // Longest streak
    parts.push(svg::render_text(
        &format::format_number(u64::from(data.longest_streak), locale, short),
        layout.longest_x,
        layout.side_number_y,
        &TextStyle::number(&colors.side_nums, delay::SIDE_NUMBERS),
        animate,
    ));
    parts.push(svg::render_text(
        translations.longest_streak,
        layout.longest_x,
        layout.label_y,
        &TextStyle::label(&colors.side_labels, delay::SIDE_LABELS),
        animate,
    ));
    if let Some((start, end)) = data.longest_streak_range() {
        parts.push(svg::render_text(
            &dates.format_range(start, RangeEnd::from(end), translations.present),
            layout.longest_x,
            layout.date_y,
            &TextStyle::date(&colors.dates, delay::SIDE_DATES),
            animate,
        ));
    }

    parts.join("\n  ")
}
