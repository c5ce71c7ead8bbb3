//! Markup fragments for card elements.
//!
//! All attributes are single-quoted; text and paint values pass through
//! [`escape_xml`] before they are embedded.

use std::fmt::Write as _;

use crate::card::context::RenderContext;
use crate::card::layout::{self, Layout};

pub const FONT_FAMILY: &str = "\"Segoe UI\", Ubuntu, sans-serif";

pub const FIRE_ICON_PATH: &str = "M 1.5 0.67 C 1.5 0.67 2.24 3.32 2.24 5.47 C 2.24 7.53 0.89 9.2 -1.17 9.2 C -3.23 9.2 -4.79 7.53 -4.79 5.47 L -4.76 5.11 C -6.78 7.51 -8 10.62 -8 13.99 C -8 18.41 -4.42 22 0 22 C 4.42 22 8 18.41 8 13.99 C 8 8.6 5.41 3.79 1.5 0.67 Z M -0.29 19 C -2.07 19 -3.51 17.6 -3.51 15.86 C -3.51 14.24 -2.46 13.1 -0.7 12.74 C 1.07 12.38 2.9 11.53 3.92 10.16 C 4.31 11.45 4.51 12.81 4.51 14.2 C 4.51 16.85 2.36 19 -0.29 19 Z";

const KEYFRAMES: &str = "
  <style>
    @keyframes currstreak {
      0% { font-size: 3px; opacity: 0.2; }
      80% { font-size: 34px; opacity: 1; }
      100% { font-size: 28px; opacity: 1; }
    }
    @keyframes fadein {
      0% { opacity: 0; }
      100% { opacity: 1; }
    }
  </style>";

/// Escape the five XML-reserved characters.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// ` style='...'` for a fade-in starting at `delay`, or nothing when static.
fn fade_style(animate: bool, delay: f64) -> String {
    if animate {
        format!(" style='opacity: 0; animation: fadein 0.5s linear forwards {delay}s'")
    } else {
        String::new()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TextStyle<'a> {
    pub fill: &'a str,
    pub font_size: u32,
    pub font_weight: u32,
    pub delay: f64,
}

impl<'a> TextStyle<'a> {
    pub fn number(fill: &'a str, delay: f64) -> Self {
        Self {
            fill,
            font_size: layout::NUMBER_FONT_SIZE,
            font_weight: 700,
            delay,
        }
    }

    pub fn label(fill: &'a str, delay: f64) -> Self {
        Self {
            fill,
            font_size: layout::LABEL_FONT_SIZE,
            font_weight: 400,
            delay,
        }
    }

    pub fn date(fill: &'a str, delay: f64) -> Self {
        Self {
            fill,
            font_size: layout::DATE_FONT_SIZE,
            font_weight: 400,
            delay,
        }
    }
}

/// A centered `<text>` element. Text containing `\n` is split into stacked
/// `<tspan>` lines around `y`.
pub fn render_text(text: &str, x: f64, y: f64, style: &TextStyle<'_>, animate: bool) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let body = if lines.len() == 1 {
        escape_xml(text)
    } else {
        let first_dy = -8 * (lines.len() as i64 - 1);
        let mut body = String::new();
        for (i, line) in lines.iter().enumerate() {
            let dy = if i == 0 { first_dy } else { 16 };
            let _ = write!(body, "<tspan x='{x}' dy='{dy}'>{}</tspan>", escape_xml(line));
        }
        body
    };

    format!(
        "<text x='{x}' y='{y}' stroke-width='0' text-anchor='middle' fill='{fill}' stroke='none' \
         font-family='{FONT_FAMILY}' font-weight='{weight}' font-size='{size}px' font-style='normal'{anim}>{body}</text>",
        fill = escape_xml(style.fill),
        weight = style.font_weight,
        size = style.font_size,
        anim = fade_style(animate, style.delay),
    )
}

/// The current-streak number, which scales in instead of fading.
pub fn render_streak_number(value: &str, x: f64, y: f64, fill: &str, animate: bool) -> String {
    let anim = if animate {
        " style='animation: currstreak 0.6s linear forwards'"
    } else {
        ""
    };
    format!(
        "<text x='{x}' y='{y}' stroke-width='0' text-anchor='middle' fill='{fill}' stroke='none' \
         font-family='{FONT_FAMILY}' font-weight='700' font-size='{size}px' font-style='normal'{anim}>{value}</text>",
        fill = escape_xml(fill),
        size = layout::NUMBER_FONT_SIZE,
        value = escape_xml(value),
    )
}

pub fn render_line(x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str) -> String {
    format!(
        "<line x1='{x1}' y1='{y1}' x2='{x2}' y2='{y2}' vector-effect='non-scaling-stroke' \
         stroke-width='1' stroke='{}' stroke-linejoin='miter' stroke-linecap='square' stroke-miterlimit='3'/>",
        escape_xml(stroke)
    )
}

/// Ring around the current streak, masked where the flame sits.
pub fn render_ring(
    layout: &Layout,
    color: &str,
    linecap: &str,
    mask_id: &str,
    animate: bool,
) -> String {
    format!(
        "<g{anim}>
    <circle cx='{cx}' cy='{cy}' r='{r}' fill='none' stroke='{color}' stroke-width='{sw}' stroke-linecap='{linecap}' mask='url(#{mask_id})'/>
  </g>",
        anim = fade_style(animate, layout::delay::RING),
        cx = layout.center_x,
        cy = layout.ring_center_y,
        r = layout::RING_RADIUS,
        color = escape_xml(color),
        sw = layout::RING_STROKE_WIDTH,
    )
}

pub fn render_ring_mask(layout: &Layout, mask_id: &str) -> String {
    let (cx, cy) = layout.mask_center();
    format!(
        "<mask id='{mask_id}'>
      <rect x='0' y='0' width='{w}' height='{h}' fill='white'/>
      <ellipse cx='{cx}' cy='{cy}' rx='{rx}' ry='{ry}' fill='black'/>
    </mask>",
        w = layout.width,
        h = layout.height,
        rx = layout::RING_MASK_RX,
        ry = layout::RING_MASK_RY,
    )
}

pub fn render_fire_icon(layout: &Layout, color: &str, animate: bool) -> String {
    format!(
        "<g{anim}>
    <g transform='translate({x}, {y})'>
      <path d='{FIRE_ICON_PATH}' fill='{color}'/>
    </g>
  </g>",
        anim = fade_style(animate, layout::delay::FIRE),
        x = layout.center_x,
        y = layout.fire_icon_y,
        color = escape_xml(color),
    )
}

/// The background rectangle, bordered unless `hide_border`.
pub fn render_background(ctx: &RenderContext<'_>, hide_border: bool) -> String {
    let dims = &ctx.dimensions;
    let (stroke, stroke_width) = if hide_border {
        ("none".to_owned(), 0)
    } else {
        (escape_xml(&ctx.colors.border), 1)
    };
    format!(
        "<rect x='0.5' y='0.5' rx='{r}' ry='{r}' width='{w}' height='{h}' fill='{fill}' stroke='{stroke}' stroke-width='{stroke_width}'/>",
        r = dims.border_radius,
        w = (dims.width - 1.0).max(0.0),
        h = (dims.height - 1.0).max(0.0),
        fill = escape_xml(&ctx.colors.background),
    )
}

#[derive(Debug, Clone, Copy)]
pub struct WrapperOptions<'a> {
    pub animate: bool,
    pub hide_border: bool,
    pub direction: &'a str,
    /// Extra definitions (e.g. the ring mask) placed in `<defs>`.
    pub extra_defs: &'a str,
}

/// Wrap `content` into the root element with clip path, background and
/// optional keyframes.
pub fn render_wrapper(ctx: &RenderContext<'_>, content: &str, opts: &WrapperOptions<'_>) -> String {
    let dims = &ctx.dimensions;
    let mut defs = format!(
        "<clipPath id='{clip}'>
      <rect width='{w}' height='{h}' rx='{r}'/>
    </clipPath>",
        clip = ctx.ids.clip,
        w = dims.width,
        h = dims.height,
        r = dims.border_radius,
    );
    for extra in [ctx.background.defs.as_str(), opts.extra_defs] {
        if !extra.is_empty() {
            defs.push_str("\n    ");
            defs.push_str(extra);
        }
    }

    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' xmlns:xlink='http://www.w3.org/1999/xlink' \
         style='isolation: isolate' viewBox='0 0 {w} {h}' width='{w}px' height='{h}px' direction='{dir}'>{style}
  <defs>
    {defs}
  </defs>
  <g clip-path='url(#{clip})'>
    <g style='isolation: isolate'>
      {background}
    </g>
  {content}
  </g>
</svg>",
        w = dims.width,
        h = dims.height,
        dir = opts.direction,
        style = if opts.animate { KEYFRAMES } else { "" },
        clip = ctx.ids.clip,
        background = render_background(ctx, opts.hide_border),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::context::{DEFAULT_DIMENSIONS, DimensionOverrides};
    use crate::card::ColorOverrides;

    fn style() -> TextStyle<'static> {
        TextStyle::label("#151515", 0.65)
    }

    #[test]
    fn escapes_reserved_characters() {
        assert_eq!(
            escape_xml(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&apos;s&lt;/a&gt;"
        );
    }

    #[test]
    fn text_fades_only_when_animated() {
        let animated = render_text("Label", 10.0, 20.0, &style(), true);
        assert!(animated.contains("animation: fadein 0.5s linear forwards 0.65s"));
        let still = render_text("Label", 10.0, 20.0, &style(), false);
        assert!(!still.contains(" style='"));
        assert!(!still.contains("animation"));
        assert!(still.contains("font-style='normal'"));
        assert!(still.ends_with(">Label</text>"));
    }

    #[test]
    fn multiline_text_uses_tspans() {
        let text = render_text("Total\nContributions", 82.5, 130.0, &style(), false);
        assert!(text.contains("<tspan x='82.5' dy='-8'>Total</tspan>"));
        assert!(text.contains("<tspan x='82.5' dy='16'>Contributions</tspan>"));
    }

    #[test]
    fn hidden_border_has_no_stroke_paint() {
        let ctx = RenderContext::build(
            "default",
            &DimensionOverrides::default(),
            &ColorOverrides::default(),
            Some("t"),
        );
        let rect = render_background(&ctx, true);
        assert!(rect.contains("stroke='none' stroke-width='0'"));
        let rect = render_background(&ctx, false);
        assert!(rect.contains("stroke='#E4E2E2' stroke-width='1'"));
        assert!(rect.contains("width='494' height='194'"));
    }

    #[test]
    fn ring_mask_cuts_under_flame() {
        let l = Layout::new(&DEFAULT_DIMENSIONS, false);
        let mask = render_ring_mask(&l, "m");
        assert!(mask.contains("<ellipse cx='247.5' cy='36' rx='13' ry='18' fill='black'/>"));
        let ring = render_ring(&l, "#fff", "butt", "m", false);
        assert!(ring.contains("stroke-linecap='butt' mask='url(#m)'"));
        assert!(ring.starts_with("<g>"));
    }
}
