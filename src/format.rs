//! Date and number formatting for card text.
//!
//! Date patterns use single-character tokens:
//!
//! | token | meaning              | example |
//! |-------|----------------------|---------|
//! | `d`   | day, two digits      | `05`    |
//! | `j`   | day                  | `5`     |
//! | `m`   | month, two digits    | `02`    |
//! | `n`   | month                | `2`     |
//! | `M`   | short month name     | `Feb`   |
//! | `F`   | full month name      | `February` |
//! | `Y`   | four-digit year      | `2024`  |
//! | `y`   | two-digit year       | `24`    |
//!
//! A `[...]` segment is only rendered when the date is not in the current
//! year, and `\` escapes the next character. Month names follow the
//! formatter's locale; dates that are not real calendar dates, and locales
//! chrono has no data for, use English names.

use chrono::{DateTime, Datelike, Locale, NaiveDate, Utc};

use crate::i18n;

/// Pattern used when neither the caller nor the locale picks one.
pub const DEFAULT_DATE_FORMAT: &str = "M j[, Y]";

const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const LONG_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const NUMBER_UNITS: [&str; 5] = ["", "K", "M", "B", "T"];

/// Calendar parts of a date; not necessarily a valid calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DateParts {
    year: i32,
    month: u32,
    day: u32,
}

impl From<NaiveDate> for DateParts {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            day: date.day(),
        }
    }
}

fn parse_date(input: &str) -> Option<DateParts> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date.into());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc).date_naive().into());
    }
    if let Some(head) = input.get(..10)
        && let Ok(date) = NaiveDate::parse_from_str(head, "%Y-%m-%d")
    {
        return Some(date.into());
    }
    scrape_date_parts(input)
}

/// Best-effort `year, month, day` extraction for strings chrono rejects,
/// e.g. `2024-02-30` or `2024/7/4`.
fn scrape_date_parts(input: &str) -> Option<DateParts> {
    let mut numbers = input
        .split(|c: char| !c.is_ascii_digit())
        .filter(|s| !s.is_empty());
    let year = numbers.next()?.parse().ok()?;
    let month: u32 = numbers.next()?.parse().ok()?;
    let day: u32 = numbers.next()?.parse().ok()?;
    ((1..=12).contains(&month) && (1..=31).contains(&day)).then_some(DateParts {
        year,
        month,
        day,
    })
}

/// POSIX locale used for month names when a language has no region.
fn default_region(language: &str) -> Option<&'static str> {
    Some(match language {
        "am" => "am_ET",
        "ar" => "ar_SA",
        "bn" => "bn_BD",
        "ca" => "ca_ES",
        "da" => "da_DK",
        "el" => "el_GR",
        "en" => "en_US",
        "fa" => "fa_IR",
        "he" => "he_IL",
        "hi" => "hi_IN",
        "ja" => "ja_JP",
        "ko" => "ko_KR",
        "no" | "nb" => "nb_NO",
        "pt" => "pt_PT",
        "sv" => "sv_SE",
        "uk" => "uk_UA",
        "vi" => "vi_VN",
        "zh" => "zh_CN",
        _ => return None,
    })
}

/// chrono locale for a BCP-47-ish tag, if chrono ships data for it.
fn chrono_locale(locale: &str) -> Option<Locale> {
    let normalized = i18n::normalize_locale_code(locale);
    let language = normalized.split('_').next().unwrap_or("en");
    let mut candidates = vec![match normalized.as_str() {
        "zh_Hans" => "zh_CN".to_owned(),
        "zh_Hant" => "zh_TW".to_owned(),
        _ => normalized.clone(),
    }];
    if let Some(region) = default_region(language) {
        candidates.push(region.to_owned());
    }
    candidates.push(format!("{language}_{}", language.to_ascii_uppercase()));

    candidates
        .iter()
        .find_map(|name| Locale::try_from(name.as_str()).ok())
}

/// Formats dates relative to a fixed "current year".
#[derive(Debug, Clone)]
pub struct DateFormatter {
    pattern: String,
    current_year: i32,
    /// Source of month names; English when `None`.
    locale: Option<Locale>,
}

impl DateFormatter {
    pub fn new(pattern: impl Into<String>, current_year: i32) -> Self {
        Self {
            pattern: pattern.into(),
            current_year,
            locale: None,
        }
    }

    /// Use `locale`'s month names instead of English ones.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Formatter for `locale`: an explicit pattern wins over the locale's
    /// preferred one, which wins over [`DEFAULT_DATE_FORMAT`].
    pub fn for_locale(locale: &str, pattern: Option<&str>, today: NaiveDate) -> Self {
        let pattern = pattern
            .filter(|p| !p.is_empty())
            .or(i18n::get_translations(locale).date_format)
            .unwrap_or(DEFAULT_DATE_FORMAT);
        let formatter = Self::new(pattern, today.year());
        match chrono_locale(locale) {
            Some(chrono_locale) => formatter.with_locale(chrono_locale),
            None => {
                tracing::debug!("no month names for locale {locale:?}, using English");
                formatter
            }
        }
    }

    /// Format `date`; unparsable input is returned unchanged.
    pub fn format(&self, date: &str) -> String {
        match parse_date(date) {
            Some(parts) => self.render(parts),
            None => date.to_owned(),
        }
    }

    pub fn format_range(&self, start: &str, end: RangeEnd<'_>, present: &str) -> String {
        let start = self.format(start);
        let end = match end {
            RangeEnd::Date(date) => self.format(date),
            RangeEnd::Present => present.to_owned(),
        };
        if start == end {
            start
        } else {
            format!("{start} - {end}")
        }
    }

    fn month_name(&self, parts: DateParts, spec: &str, english: &[&str; 12]) -> String {
        if let Some(locale) = self.locale
            && let Some(date) = NaiveDate::from_ymd_opt(parts.year, parts.month, parts.day)
        {
            return date.format_localized(spec, locale).to_string().trim().to_owned();
        }
        english[(parts.month.clamp(1, 12) - 1) as usize].to_owned()
    }

    fn render(&self, parts: DateParts) -> String {
        let same_year = parts.year == self.current_year;
        let mut out = String::with_capacity(self.pattern.len() + 8);
        let mut in_optional = false;
        let mut chars = self.pattern.chars();

        while let Some(c) = chars.next() {
            match c {
                '[' => in_optional = true,
                ']' => in_optional = false,
                _ if in_optional && same_year => {
                    if c == '\\' {
                        chars.next();
                    }
                }
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                'd' => out.push_str(&format!("{:02}", parts.day)),
                'j' => out.push_str(&parts.day.to_string()),
                'm' => out.push_str(&format!("{:02}", parts.month)),
                'n' => out.push_str(&parts.month.to_string()),
                'M' => out.push_str(&self.month_name(parts, "%b", &SHORT_MONTHS)),
                'F' => out.push_str(&self.month_name(parts, "%B", &LONG_MONTHS)),
                'Y' => out.push_str(&parts.year.to_string()),
                'y' => out.push_str(&format!("{:02}", parts.year.rem_euclid(100))),
                other => out.push(other),
            }
        }
        out
    }
}

/// End of a date range: a date, or an ongoing range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEnd<'a> {
    Date(&'a str),
    Present,
}

/// Stored end date that marks a range as ongoing.
pub const PRESENT_SENTINEL: &str = "Present";

impl<'a> From<&'a str> for RangeEnd<'a> {
    fn from(end: &'a str) -> Self {
        if end == PRESENT_SENTINEL {
            RangeEnd::Present
        } else {
            RangeEnd::Date(end)
        }
    }
}

/// Short month and day, plus the year when it differs from today's.
pub fn format_date(date: &str, locale: &str) -> String {
    DateFormatter::for_locale(locale, None, Utc::now().date_naive()).format(date)
}

/// `"start - end"`, with `end` replaced by `present` for an ongoing range and
/// collapsed to one value when both sides format identically.
pub fn format_date_range(start: &str, end: RangeEnd<'_>, locale: &str, present: &str) -> String {
    DateFormatter::for_locale(locale, None, Utc::now().date_naive())
        .format_range(start, end, present)
}

/// Format a count, either grouped (`1,234`) or abbreviated (`1.2K`).
pub fn format_number(n: u64, locale: &str, short: bool) -> String {
    if short {
        return format_short(n);
    }
    group_thousands(n, group_separator(locale))
}

fn format_short(n: u64) -> String {
    let mut value = n as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < NUMBER_UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }
    if unit == 0 {
        return n.to_string();
    }
    let formatted = format!("{value:.1}");
    let trimmed = formatted.strip_suffix(".0").unwrap_or(&formatted);
    format!("{trimmed}{}", NUMBER_UNITS[unit])
}

fn group_separator(locale: &str) -> &'static str {
    let normalized = i18n::normalize_locale_code(locale);
    let language = normalized.split('_').next().unwrap_or("en");
    match language {
        "de" | "es" | "it" | "nl" | "pt" | "id" | "tr" | "da" | "el" | "vi" => ".",
        "fr" => "\u{202f}",
        "ru" | "uk" | "pl" | "sv" | "no" | "bg" | "hu" | "cs" => "\u{a0}",
        _ => ",",
    }
}

fn group_thousands(n: u64, separator: &str) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}
