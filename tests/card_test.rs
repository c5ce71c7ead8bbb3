use chrono::NaiveDate;

use streak_card::card::{CardOptions, ColorOverrides, NumberFormat, StrokeType};
use streak_card::{StreakCardData, generate_card, generate_theme_preview};

fn sample() -> StreakCardData {
    let json = std::fs::read_to_string("tests/fixtures/streak_data.json").unwrap();
    serde_json::from_str(&json).unwrap()
}

fn options() -> CardOptions {
    CardOptions {
        today: NaiveDate::from_ymd_opt(2024, 6, 1),
        ..CardOptions::default()
    }
}

#[test]
fn dracula_end_to_end() {
    let svg = generate_card(
        &sample(),
        &CardOptions {
            theme: "dracula".to_owned(),
            ..options()
        },
    );
    assert!(svg.starts_with("<svg "));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<svg").count(), 1);
    assert!(svg.contains(">42</text>"));
    assert!(svg.contains(">2,847</text>"));
    assert!(svg.contains(">156</text>"));
    assert!(svg.contains("fill='#282A36'"));
}

#[test]
fn default_labels_and_dates() {
    let svg = generate_card(&sample(), &options());
    assert!(svg.contains(">Total Contributions</text>"));
    assert!(svg.contains(">Current Streak</text>"));
    assert!(svg.contains(">Longest Streak</text>"));
    assert!(svg.contains(">Jun 1, 2015 - Present</text>"));
    assert!(svg.contains(">Jan 1 - Feb 11</text>"));
    assert!(svg.contains(">Mar 5, 2022 - Aug 7, 2022</text>"));
}

#[test]
fn ring_override_paints_fire_too() {
    let svg = generate_card(
        &sample(),
        &CardOptions {
            colors: ColorOverrides {
                ring: Some("#123456".to_owned()),
                ..ColorOverrides::default()
            },
            ..options()
        },
    );
    assert!(svg.contains("stroke='#123456'"));
    assert!(svg.contains("fill='#123456'"));
}

#[test]
fn explicit_fire_wins_over_ring() {
    let svg = generate_card(
        &sample(),
        &CardOptions {
            colors: ColorOverrides {
                ring: Some("#FF0000".to_owned()),
                fire: Some("#00FF00".to_owned()),
                ..ColorOverrides::default()
            },
            ..options()
        },
    );
    assert!(svg.contains("stroke='#FF0000'"));
    assert!(svg.contains("fill='#00FF00'"));
    assert!(!svg.contains("fill='#FF0000'"));
}

#[test]
fn longest_dates_are_omitted_when_missing() {
    let data = StreakCardData {
        longest_streak_start_date: None,
        longest_streak_end_date: None,
        ..sample()
    };
    let svg = generate_card(&data, &options());
    assert!(svg.contains(">156</text>"));
    assert!(svg.contains(">Longest Streak</text>"));
    assert!(!svg.contains("Aug 7"));
    // Two date lines remain: total contributions and current streak.
    assert_eq!(svg.matches("font-size='12px'").count(), 2);
}

#[test]
fn dimensions_reach_viewbox_and_background() {
    let svg = generate_card(
        &sample(),
        &CardOptions {
            width: Some(800.0),
            height: Some(400.0),
            border_radius: Some(20.0),
            ..options()
        },
    );
    assert!(svg.contains("viewBox='0 0 800 400'"));
    assert!(svg.contains("rx='20' ry='20' width='799' height='399'"));
}

#[test]
fn disabled_animation_emits_no_keyframes() {
    let svg = generate_card(
        &sample(),
        &CardOptions {
            animate: false,
            ..options()
        },
    );
    assert!(!svg.contains("@keyframes"));
    assert!(!svg.contains("animation:"));
    assert!(!svg.contains("opacity: 0"));

    let animated = generate_card(&sample(), &options());
    assert!(animated.contains("@keyframes currstreak"));
    assert!(animated.contains("@keyframes fadein"));
    assert!(animated.contains("animation: currstreak 0.6s linear forwards"));
    assert!(animated.contains("animation: fadein 0.5s linear forwards 0.4s"));
}

#[test]
fn hidden_border_and_stroke_type() {
    let svg = generate_card(
        &sample(),
        &CardOptions {
            hide_border: true,
            stroke_type: StrokeType::Butt,
            ..options()
        },
    );
    assert!(svg.contains("stroke='none' stroke-width='0'"));
    assert!(svg.contains("stroke-linecap='butt'"));
}

#[test]
fn short_number_format() {
    let svg = generate_card(
        &sample(),
        &CardOptions {
            number_format: NumberFormat::Short,
            ..options()
        },
    );
    assert!(svg.contains(">2.8K</text>"));
}

#[test]
fn gradient_background_override() {
    let svg = generate_card(
        &sample(),
        &CardOptions {
            card_id: Some("me".to_owned()),
            colors: ColorOverrides {
                background: Some("90,ff0000,0000ff".to_owned()),
                ..ColorOverrides::default()
            },
            ..options()
        },
    );
    assert!(svg.contains("<linearGradient id='me-bg'"));
    assert!(svg.contains("fill='url(#me-bg)'"));
    assert!(svg.contains("clip-path='url(#me-clip)'"));
    assert!(svg.contains("mask='url(#me-ring-mask)'"));
}

#[test]
fn transparent_theme_fill() {
    let svg = generate_card(
        &sample(),
        &CardOptions {
            theme: "transparent".to_owned(),
            ..options()
        },
    );
    assert!(svg.contains("fill='transparent'"));
}

#[test]
fn text_is_escaped() {
    let data = StreakCardData {
        first_contribution_date: "<b>&'\"".to_owned(),
        ..sample()
    };
    let svg = generate_card(&data, &options());
    assert!(svg.contains("&lt;b&gt;&amp;&apos;&quot; - Present"));
    assert!(!svg.contains("<b>"));

    let fr = generate_card(
        &sample(),
        &CardOptions {
            locale: "fr".to_owned(),
            ..options()
        },
    );
    assert!(fr.contains("Aujourd&apos;hui"));
}

#[test]
fn rtl_locale_sets_direction_and_mirrors() {
    let svg = generate_card(
        &sample(),
        &CardOptions {
            locale: "ar".to_owned(),
            ..options()
        },
    );
    assert!(svg.contains("direction='rtl'"));
    // Total contributions move to the right-hand section.
    assert!(svg.contains("<text x='412.5' y='79'"));
    let total = svg.find(">2,847</text>").unwrap();
    let anchor = svg[..total].rfind("<text x='").unwrap();
    assert!(svg[anchor..total].starts_with("<text x='412.5'"));

    let ltr = generate_card(&sample(), &options());
    assert!(ltr.contains("direction='ltr'"));
}

#[test]
fn identical_input_gives_identical_output() {
    let a = generate_card(&sample(), &options());
    let b = generate_card(&sample(), &options());
    assert_eq!(a, b);
}

#[test]
fn unknown_theme_renders_default() {
    let unknown = generate_card(
        &sample(),
        &CardOptions {
            theme: "not-a-real-theme".to_owned(),
            ..options()
        },
    );
    assert!(unknown.contains("fill='#FFFEFE'"));
}

#[test]
fn malformed_input_still_renders() {
    let data = StreakCardData {
        streak_start_date: String::new(),
        streak_end_date: "garbage".to_owned(),
        first_contribution_date: "2024-13-45".to_owned(),
        ..StreakCardData::default()
    };
    let svg = generate_card(
        &data,
        &CardOptions {
            width: Some(0.0),
            height: Some(-50.0),
            date_format: Some(String::new()),
            locale: "xx-invalid-tag".to_owned(),
            colors: ColorOverrides {
                background: Some("45,zz,qq".to_owned()),
                ..ColorOverrides::default()
            },
            ..options()
        },
    );
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains("viewBox='0 0 0 0' width='0px' height='0px'"));
    assert!(svg.contains("fill='#45,zz,qq'"));
    assert!(svg.contains(" - garbage</text>"));
    assert!(svg.contains(">2024-13-45 - Present</text>"));
}

#[test]
fn theme_preview_renders_each_theme() {
    let previews = generate_theme_preview(&sample(), &["dracula", "nord", "nope"]);
    let names: Vec<&str> = previews.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, ["dracula", "nord", "nope"]);
    assert!(previews[0].1.contains("fill='#282A36'"));
    assert!(previews[2].1.contains("fill='#FFFEFE'"));
    assert_ne!(previews[0].1, previews[1].1);
}
