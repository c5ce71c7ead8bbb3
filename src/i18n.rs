//! Localized card labels.
//!
//! Locale keys use `language[_Script][_REGION]`, e.g. `pt_BR`, `zh_Hant`.
//! Entries may be partial; [`get_translations`] overlays them on English so
//! every label is always populated.

/// Fully populated label set for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translations {
    pub total_contributions: &'static str,
    pub current_streak: &'static str,
    pub longest_streak: &'static str,
    pub week_streak: &'static str,
    pub longest_week_streak: &'static str,
    pub present: &'static str,
    pub days: &'static str,
    pub weeks: &'static str,
    /// Contains a `{days}` placeholder.
    pub excluding_days: &'static str,
    pub rtl: bool,
    /// Preferred date pattern for this locale, if any.
    pub date_format: Option<&'static str>,
    pub comma_separator: &'static str,
}

const ENGLISH: Translations = Translations {
    total_contributions: "Total Contributions",
    current_streak: "Current Streak",
    longest_streak: "Longest Streak",
    week_streak: "Week Streak",
    longest_week_streak: "Longest Week Streak",
    present: "Present",
    days: "days",
    weeks: "weeks",
    excluding_days: "Excluding {days}",
    rtl: false,
    date_format: None,
    comma_separator: ", ",
};

#[derive(Debug, Clone, Copy)]
struct Partial {
    total_contributions: Option<&'static str>,
    current_streak: Option<&'static str>,
    longest_streak: Option<&'static str>,
    week_streak: Option<&'static str>,
    longest_week_streak: Option<&'static str>,
    present: Option<&'static str>,
    days: Option<&'static str>,
    weeks: Option<&'static str>,
    excluding_days: Option<&'static str>,
    rtl: bool,
    date_format: Option<&'static str>,
    comma_separator: Option<&'static str>,
}

impl Partial {
    const EMPTY: Partial = Partial {
        total_contributions: None,
        current_streak: None,
        longest_streak: None,
        week_streak: None,
        longest_week_streak: None,
        present: None,
        days: None,
        weeks: None,
        excluding_days: None,
        rtl: false,
        date_format: None,
        comma_separator: None,
    };
}

#[derive(Debug, Clone, Copy)]
enum Entry {
    Strings(Partial),
    /// Points at another locale key; followed once.
    Alias(&'static str),
}

impl Translations {
    fn overlay(self, p: &Partial) -> Self {
        Self {
            total_contributions: p.total_contributions.unwrap_or(self.total_contributions),
            current_streak: p.current_streak.unwrap_or(self.current_streak),
            longest_streak: p.longest_streak.unwrap_or(self.longest_streak),
            week_streak: p.week_streak.unwrap_or(self.week_streak),
            longest_week_streak: p.longest_week_streak.unwrap_or(self.longest_week_streak),
            present: p.present.unwrap_or(self.present),
            days: p.days.unwrap_or(self.days),
            weeks: p.weeks.unwrap_or(self.weeks),
            excluding_days: p.excluding_days.unwrap_or(self.excluding_days),
            rtl: p.rtl || self.rtl,
            date_format: p.date_format.or(self.date_format),
            comma_separator: p.comma_separator.unwrap_or(self.comma_separator),
        }
    }
}

/// Shorthand for the five labels every locale provides.
macro_rules! labels {
    ($total:literal, $current:literal, $longest:literal, $week:literal, $longest_week:literal,
     $present:literal, $excluding:literal $(, $field:ident : $value:expr)* $(,)?) => {
        Entry::Strings(Partial {
            total_contributions: Some($total),
            current_streak: Some($current),
            longest_streak: Some($longest),
            week_streak: Some($week),
            longest_week_streak: Some($longest_week),
            present: Some($present),
            excluding_days: Some($excluding),
            $($field: $value,)*
            ..Partial::EMPTY
        })
    };
}

static LOCALES: &[(&str, Entry)] = &[
    ("am", labels!(
        "ጠቅላላ አስተዋጽዖዎች", "የአሁን ድግግሞሽ", "በጣም ረጅሙ ድግግሞሽ", "የሳምንት ድግግሞሽ",
        "በጣም ረጅሙ የሳምንት ድግግሞሽ", "ያሁኑ", "ሳይጨምር {days}",
        days: Some("ቀናት"), weeks: Some("ሳምንታት"),
    )),
    ("ar", labels!(
        "إجمالي المساهمات", "السلسلة المتتالية الحالية", "أُطول سلسلة متتالية",
        "السلسلة المتتالية الأُسبوعية", "أُطول سلسلة متتالية أُسبوعية", "الحاضر", "باستثناء {days}",
        days: Some("أيام"), weeks: Some("أسابيع"), rtl: true, comma_separator: Some("، "),
    )),
    ("bg", labels!(
        "Общ принос", "Дневна серия", "Най-дълга дневна серия", "Седмична серия",
        "Най-дълга седмична серия", "Сега", "Изключвайки {days}",
        days: Some("дни"), weeks: Some("седмици"),
    )),
    ("bn", labels!(
        "মোট অবদান", "বর্তমান স্ট্রিক", "দীর্ঘতম স্ট্রিক", "সপ্তাহ স্ট্রিক", "দীর্ঘতম সপ্তাহ স্ট্রিক",
        "বর্তমান", "{days} বাদে",
    )),
    ("ca", labels!(
        "Aportacions totals", "Ratxa actual", "Ratxa més llarga", "Ratxa setmanal",
        "Ratxa setmanal més llarga", "Actual", "Excloent {days}",
    )),
    ("da", labels!(
        "Samlet antal bidrag", "Bidrag i træk", "Flest bidrag i træk", "Ugentlige bidrag i træk",
        "Flest ugentlige bidrag i træk", "Nuværende", "Ekskluderer {days}",
    )),
    ("de", labels!(
        "Gesamte Beiträge", "Aktuelle Serie", "Längste Serie", "Wochenserie", "Längste Wochenserie",
        "Heute", "Ausgenommen {days}",
    )),
    ("el", labels!(
        "Συνολικές Συνεισφορές", "Τρέχουσα Σειρά", "Μεγαλύτερη Σειρά", "Εβδομαδιαία Σειρά",
        "Μεγαλύτερη Εβδομαδιαία Σειρά", "Σήμερα", "Εξαιρούνται {days}",
    )),
    ("en", Entry::Strings(Partial::EMPTY)),
    ("es", labels!(
        "Contribuciones Totales", "Racha Actual", "Racha Más Larga", "Racha Semanal",
        "Racha Semanal Más Larga", "Presente", "Excluyendo {days}",
    )),
    ("fa", labels!(
        "مجموع مشارکت ها", "پی‌رفت فعلی", "طولانی ترین پی‌رفت", "پی‌رفت هفته",
        "طولانی ترین پی‌رفت هفته", "اکنون", "{days} مستثنی کردن",
        rtl: true, comma_separator: Some("، "),
    )),
    ("fr", labels!(
        "Contributions totales", "Séquence actuelle", "Plus longue séquence",
        "Séquence de la semaine", "Plus longue séquence hebdomadaire", "Aujourd'hui",
        "À l'exclusion de {days}",
    )),
    ("he", labels!(
        "סכום התרומות", "רצף נוכחי", "רצף הכי ארוך", "רצף שבועי", "רצף שבועי הכי ארוך", "היום",
        "לא כולל {days}",
        rtl: true,
    )),
    ("hi", labels!(
        "कुल योगदान", "निरंतर दैनिक योगदान", "सबसे लंबा दैनिक योगदान", "सप्ताहिक योगदान",
        "दीर्घ साप्ताहिक योगदान", "आज तक", "के सिवा {days}",
    )),
    ("hu", labels!(
        "Összes hozzájárulás", "Jelenlegi sorozat", "Leghosszabb sorozat", "Heti sorozat",
        "Leghosszabb heti sorozat", "Jelen", "Kivéve {days}",
    )),
    ("id", labels!(
        "Total Kontribusi", "Aksi Saat Ini", "Aksi Terpanjang", "Aksi Mingguan",
        "Aksi Mingguan Terpanjang", "Sekarang", "Kecuali {days}",
    )),
    ("it", labels!(
        "Contributi Totali", "Serie Corrente", "Serie più Lunga", "Serie Settimanale",
        "Serie Settimanale più Lunga", "Presente", "Escludendo {days}",
    )),
    ("ja", labels!(
        "総ｺﾝﾄﾘﾋﾞｭｰｼｮﾝ数", "現在のストリーク", "最長のストリーク", "週間ストリーク",
        "最長の週間ストリーク", "今", "{days}を除く",
        date_format: Some("[Y.]n.j"), comma_separator: Some("・"),
    )),
    ("ko", labels!(
        "총 기여 수", "현재 연속 기여 수", "최장 연속 기여 수", "주간 연속 기여 수",
        "최장 주간 연속 기여 수", "현재", "{days}를 제외하고",
    )),
    ("nl", labels!(
        "Totale Bijdrage", "Huidige Serie", "Langste Serie", "Week Serie", "Langste Week Serie",
        "Vandaag", "Exclusief {days}",
    )),
    ("no", labels!(
        "Totalt Antall Bidrag", "Nåværende\nBidragsrekke", "Lengste Bidragsrekke",
        "Ukentlig\nBidragsrekke", "Lengste Ukentlige\nBidragsrekke", "I dag", "Ekskluderer {days}",
    )),
    ("pl", labels!(
        "Suma Kontrybucji", "Aktualna Seria", "Najdłuższa Seria", "Seria Tygodni",
        "Najdłuższa Seria Tygodni", "Dziś", "Wykluczono {days}",
    )),
    ("pt", labels!(
        "Contribuições Totais", "Sequência Atual", "Maior Sequência", "Sequência da Semana",
        "Maior Sequência da Semana", "Presente", "Excluindo {days}",
    )),
    ("pt_BR", labels!(
        "Total de Contribuições", "Sequência Atual", "Maior Sequência", "Sequência Semanal",
        "Maior Sequência Semanal", "Presente", "Exceto {days}",
    )),
    ("ru", labels!(
        "Общий вклад", "Текущая серия", "Самая длинная серия", "Текущая серия недель",
        "Самая длинная серия недель", "Сейчас", "Не включая {days}",
    )),
    ("sv", labels!(
        "Totalt antal uppladningar", "Dagar uppladdat i rad just nu",
        "Längst antal dagar uppladdat i rad", "Antal veckor i rad", "Längst antal veckor i rad",
        "Just nu", "Utom {days}",
    )),
    ("th", labels!(
        "คอนทริบิ้วต์ทั้งหมด", "สตรีคปัจจุบัน", "สตรีคที่ยาวนานที่สุด", "สตรีคประจำสัปดาห์",
        "สตรีคประจำสัปดาห์\nที่ยาวนานที่สุด", "ปัจจุบัน", "ยกเว้น {days}",
    )),
    ("tr", labels!(
        "Toplam Katkı", "Güncel Seri", "En Uzun Seri", "Haftalık Seri", "En Uzun Haftalık Seri",
        "Şu an", "Hariç {days}",
    )),
    ("uk", labels!(
        "Загальний вклад", "Поточна діяльність", "Найдовша діяльність", "Діяльність за тиждень",
        "Найбільша к-сть тижнів", "Наразі", "Виключаючи {days}",
    )),
    ("vi", labels!(
        "Tổng số đóng góp", "Chuỗi đóng góp\nhiện tại", "Chuỗi đóng góp lớn nhất", "Chuỗi tuần",
        "Chuỗi tuần lớn nhất", "Hiện tại", "Ngoại trừ {days}",
    )),
    ("zh", Entry::Alias("zh_Hans")),
    ("zh_Hans", labels!(
        "合计贡献", "目前连续贡献", "最长连续贡献", "周连续贡献", "最长周连续贡献", "至今",
        "除外 {days}",
        comma_separator: Some("、"),
    )),
    ("zh_Hant", labels!(
        "合計貢獻", "目前連續貢獻", "最長連續貢獻", "周連續貢獻", "最長周連續貢獻", "至今",
        "除外 {days}",
        comma_separator: Some("、"),
    )),
];

fn entry(key: &str) -> Option<Entry> {
    LOCALES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, entry)| *entry)
}

/// Resolve `key`, following a single alias hop.
fn partial(key: &str) -> Option<Partial> {
    match entry(key)? {
        Entry::Strings(p) => Some(p),
        Entry::Alias(target) => match entry(target)? {
            Entry::Strings(p) => Some(p),
            Entry::Alias(_) => None,
        },
    }
}

/// Canonicalize a BCP-47-ish tag to `language[_Script][_REGION]`.
///
/// `"PT-br"` → `"pt_BR"`, `"zh-hant"` → `"zh_Hant"`. Anything that does not
/// fit the shape normalizes to `"en"`.
pub fn normalize_locale_code(code: &str) -> String {
    let mut parts = code.trim().split(['-', '_']);
    let Some(language) = parts
        .next()
        .filter(|l| (2..=3).contains(&l.len()) && l.chars().all(|c| c.is_ascii_alphabetic()))
    else {
        return "en".to_owned();
    };

    let mut out = language.to_ascii_lowercase();
    let mut rest: Vec<&str> = parts.collect();

    if let Some(script) = rest.first().copied()
        && script.len() == 4
        && script.chars().all(|c| c.is_ascii_alphabetic())
    {
        out.push('_');
        out.push_str(&script[..1].to_ascii_uppercase());
        out.push_str(&script[1..].to_ascii_lowercase());
        rest.remove(0);
    }

    match rest.as_slice() {
        [] => {}
        [region]
            if (region.len() == 2 && region.chars().all(|c| c.is_ascii_alphabetic()))
                || (region.len() == 3 && region.chars().all(|c| c.is_ascii_digit())) =>
        {
            out.push('_');
            out.push_str(&region.to_ascii_uppercase());
        }
        _ => return "en".to_owned(),
    }
    out
}

/// Labels for `locale`, falling back to the base language and then English.
pub fn get_translations(locale: &str) -> Translations {
    let normalized = normalize_locale_code(locale);
    let found = partial(&normalized).or_else(|| {
        let base = normalized.split('_').next().unwrap_or("en");
        partial(base)
    });

    match found {
        Some(p) => ENGLISH.overlay(&p),
        None => {
            tracing::debug!("no translations for locale {locale:?}, using English");
            ENGLISH
        }
    }
}

/// Whether `locale` has its own entry (directly, via alias, or via its base
/// language).
pub fn is_supported(locale: &str) -> bool {
    let normalized = normalize_locale_code(locale);
    let base = normalized.split('_').next().unwrap_or("en");
    partial(&normalized).is_some() || partial(base).is_some()
}
