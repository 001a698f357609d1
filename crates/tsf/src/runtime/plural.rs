//! CLDR plural category resolution for numerus messages.
//!
//! A numerus message stores one `<numerusform>` per grammatical plural
//! category of the target language, in CLDR category order. Selecting a form
//! for a count means resolving the count's plural category and taking the
//! form at that category's position. Spanish has two everyday forms, so
//! count 1 selects the first form and other counts select the last.
//!
//! Plural rules are cached per thread per language to avoid re-creating
//! `PluralRules` instances on every call.

use std::cell::RefCell;

use icu_locale_core::locale;
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};

/// Supported language codes for plural rule resolution.
const SUPPORTED_LANGUAGES: &[&str] = &[
    "ar", "bn", "de", "el", "en", "es", "fa", "fr", "he", "hi", "id", "it", "ja", "ko", "nl", "pl",
    "pt", "ro", "ru", "th", "tr", "uk", "vi", "zh",
];

/// Cached plural data for one language: the rules plus the category list in
/// CLDR order (zero, one, two, few, many, other).
///
/// The category list is restricted to categories reachable for small integer
/// counts. This matches the numerusform counts Qt tools write: Spanish gets
/// two forms even though CLDR defines a `many` category that only applies to
/// counts in the millions.
struct CachedRules {
    lang: &'static str,
    rules: PluralRules,
    categories: Vec<PluralCategory>,
}

/// Sample range used to discover integer-reachable categories. Covers every
/// rule boundary CLDR defines below the millions (Arabic needs 100).
const SAMPLE_RANGE: std::ops::RangeInclusive<i64> = 0..=200;

thread_local! {
    /// Per-thread cache of plural data keyed by language code.
    static PLURAL_RULES_CACHE: RefCell<Vec<CachedRules>> = const { RefCell::new(Vec::new()) };
}

/// Normalize a language code to a supported static string reference.
///
/// Accepts a primary subtag (e.g., `es`, already extracted from `es_ES`).
/// Returns `"en"` for unrecognized codes.
fn normalize_lang(lang: &str) -> &'static str {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|&&code| code == lang)
        .copied()
        .unwrap_or("en")
}

/// Build `PluralRules` for a normalized language code.
fn build_rules(lang: &'static str) -> PluralRules {
    let loc = match lang {
        "en" => locale!("en"),
        "ru" => locale!("ru"),
        "ar" => locale!("ar"),
        "de" => locale!("de"),
        "es" => locale!("es"),
        "fr" => locale!("fr"),
        "it" => locale!("it"),
        "pt" => locale!("pt"),
        "ja" => locale!("ja"),
        "zh" => locale!("zh"),
        "ko" => locale!("ko"),
        "nl" => locale!("nl"),
        "pl" => locale!("pl"),
        "tr" => locale!("tr"),
        "uk" => locale!("uk"),
        "vi" => locale!("vi"),
        "th" => locale!("th"),
        "id" => locale!("id"),
        "el" => locale!("el"),
        "ro" => locale!("ro"),
        "fa" => locale!("fa"),
        "bn" => locale!("bn"),
        "hi" => locale!("hi"),
        "he" => locale!("he"),
        _ => locale!("en"),
    };
    PluralRules::try_new(loc.into(), PluralRuleType::Cardinal.into())
        .expect("locale should be supported")
}

/// Canonical CLDR ordering of plural categories.
fn category_rank(category: PluralCategory) -> usize {
    match category {
        PluralCategory::Zero => 0,
        PluralCategory::One => 1,
        PluralCategory::Two => 2,
        PluralCategory::Few => 3,
        PluralCategory::Many => 4,
        PluralCategory::Other => 5,
    }
}

/// Translate a `PluralCategory` enum to its string representation.
fn category_str(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

/// Run `f` with the cached plural data for a language.
fn with_rules<T>(lang: &str, f: impl FnOnce(&CachedRules) -> T) -> T {
    let lang = normalize_lang(lang);
    PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
        if let Some(entry) = cache.iter().find(|entry| entry.lang == lang) {
            return f(entry);
        }
        let rules = build_rules(lang);
        let mut categories: Vec<PluralCategory> = Vec::new();
        for n in SAMPLE_RANGE {
            let category = rules.category_for(n);
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories.sort_by_key(|category| category_rank(*category));
        let entry = CachedRules {
            lang,
            rules,
            categories,
        };
        let result = f(&entry);
        cache.push(entry);
        result
    })
}

/// Get the CLDR plural category for a count in a given language.
///
/// Returns one of: "zero", "one", "two", "few", "many", "other".
///
/// # Examples
///
/// ```
/// use tsf::runtime::plural_category;
///
/// assert_eq!(plural_category("es", 1), "one");
/// assert_eq!(plural_category("es", 2), "other");
/// assert_eq!(plural_category("ru", 5), "many");
/// ```
pub fn plural_category(lang: &str, n: i64) -> &'static str {
    with_rules(lang, |entry| category_str(entry.rules.category_for(n)))
}

/// Number of plural forms the language uses for integer counts.
///
/// This is the expected numerusform count for finished numerus messages:
/// 2 for Spanish or English, 3 for Russian, 1 for Japanese.
pub fn category_count(lang: &str) -> usize {
    with_rules(lang, |entry| entry.categories.len())
}

/// Select the numerusform index for a count.
///
/// The index is the position of the count's plural category within the
/// language's category list. When a catalog stores fewer forms than the
/// language distinguishes, the index is clamped to the last available form.
///
/// Returns `None` when `form_count` is zero.
pub fn form_index(lang: &str, n: i64, form_count: usize) -> Option<usize> {
    if form_count == 0 {
        return None;
    }
    let index = with_rules(lang, |entry| {
        let category = entry.rules.category_for(n);
        entry
            .categories
            .iter()
            .position(|c| *c == category)
            .unwrap_or(entry.categories.len().saturating_sub(1))
    });
    Some(index.min(form_count - 1))
}
