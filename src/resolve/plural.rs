/// Plural-form selection for numerus entries.
///
/// TS catalogs store plural forms as an ordered list whose length and
/// meaning depend on the target language. The rule maps a count to an index
/// into that list. The table covers the language families observed in
/// real catalogs; unlisted languages get the two-form Germanic rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// One form for every count (ja, zh, ko, th, vi, id).
    Single,
    /// Two forms, singular only for exactly 1 (en, de, nl, sv, ...).
    Dual,
    /// Two forms, singular for 0 and 1 (fr, pt-BR, tr).
    DualFromZero,
    /// Three Slavic forms: one / few / many (ru, uk, pl, cs, sr, hr, ...).
    Slavic,
    /// Three Romanian forms: one / few / other.
    Romanian,
    /// Six Arabic forms: zero / one / two / few / many / other.
    Arabic,
}

impl PluralRule {
    /// Pick the rule for a locale tag like "uk_UA", "pt-BR" or "en".
    /// Only the language subtag matters, except for Brazilian Portuguese.
    pub fn for_locale(tag: &str) -> Self {
        let normalized = tag.replace('-', "_");
        let mut parts = normalized.split('_');
        let lang = parts.next().unwrap_or("").to_lowercase();
        let region = parts.next().unwrap_or("").to_uppercase();

        match lang.as_str() {
            "ja" | "zh" | "ko" | "th" | "vi" | "id" => Self::Single,
            "fr" | "tr" => Self::DualFromZero,
            "pt" if region == "BR" => Self::DualFromZero,
            "ru" | "uk" | "be" | "pl" | "cs" | "sk" | "sr" | "hr" | "bs" | "lt" => Self::Slavic,
            "ro" => Self::Romanian,
            "ar" => Self::Arabic,
            _ => Self::Dual,
        }
    }

    /// Number of forms a complete numerus translation carries.
    pub fn form_count(&self) -> usize {
        match self {
            Self::Single => 1,
            Self::Dual | Self::DualFromZero => 2,
            Self::Slavic | Self::Romanian => 3,
            Self::Arabic => 6,
        }
    }

    /// Index of the form to display for `n` occurrences.
    pub fn index_for(&self, n: i64) -> usize {
        let n = n.unsigned_abs() as u64;
        match self {
            Self::Single => 0,
            Self::Dual => usize::from(n != 1),
            Self::DualFromZero => usize::from(n > 1),
            Self::Slavic => {
                if n % 10 == 1 && n % 100 != 11 {
                    0
                } else if (2..=4).contains(&(n % 10)) && !(12..=14).contains(&(n % 100)) {
                    1
                } else {
                    2
                }
            }
            Self::Romanian => {
                if n == 1 {
                    0
                } else if n == 0 || (1..=19).contains(&(n % 100)) {
                    1
                } else {
                    2
                }
            }
            Self::Arabic => match n {
                0 => 0,
                1 => 1,
                2 => 2,
                _ if (3..=10).contains(&(n % 100)) => 3,
                _ if n % 100 >= 11 => 4,
                _ => 5,
            },
        }
    }
}
