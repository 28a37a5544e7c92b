//! # Calculator Content Registry
//!
//! Keyed store of every calculator entry the directory serves. The
//! registry is built once at startup from static entries and is
//! immutable afterwards: the request path only reads, so concurrent
//! lookups need no coordination.
//!
//! Building the registry is where configuration errors die: duplicate
//! slugs, unusable component bindings, and inconsistent base records are
//! all rejected before any request is served. Resolved [`LocaleRecord`]s
//! for every locale are precomputed here too, so a page request is a pair
//! of map lookups.
//!
//! ## Example
//!
//! ```rust
//! use content_core::registry::{CalculatorEntry, ContentRegistry};
//! use content_core::record::LocaleRecord;
//! use content_core::category::Category;
//! use content_core::component::ComponentBinding;
//! use content_core::locale::Locale;
//!
//! let entry = CalculatorEntry::new(
//!     "tip-calculator",
//!     Category::Lifestyle,
//!     LocaleRecord::new("tip-calculator", Category::Lifestyle, "Tip Calculator"),
//!     ComponentBinding::named("TipCalculator"),
//! );
//!
//! let registry = ContentRegistry::build(vec![entry]).unwrap();
//! let record = registry.resolve("tip-calculator", Locale::Es).unwrap();
//! assert_eq!(record.slug, "tip-calculator");
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::{Category, CategoryData, CategoryMember};
use crate::component::ComponentBinding;
use crate::errors::{ContentError, ContentResult};
use crate::locale::Locale;
use crate::record::{LocaleOverride, LocaleRecord};

// ============================================================================
// Calculator Entry
// ============================================================================

/// One calculator feature: base-locale content, per-locale overrides,
/// and the widget binding. Constructed once at startup, never mutated
/// at request time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorEntry {
    /// Unique, stable, URL-safe identifier
    pub slug: String,
    /// Exactly one category per entry, locale-invariant
    pub category: Category,
    /// Shown on the homepage's featured strip
    #[serde(default)]
    pub featured: bool,
    /// Authoritative base-locale record; must be complete
    pub base: LocaleRecord,
    /// Partial per-locale overrides; any subset of locales, any subset
    /// of fields
    #[serde(default)]
    pub overrides: BTreeMap<Locale, LocaleOverride>,
    /// Widget binding, resolved once, identical for every locale
    pub binding: ComponentBinding,
}

impl CalculatorEntry {
    pub fn new(
        slug: impl Into<String>,
        category: Category,
        base: LocaleRecord,
        binding: ComponentBinding,
    ) -> Self {
        CalculatorEntry {
            slug: slug.into(),
            category,
            featured: false,
            base,
            overrides: BTreeMap::new(),
            binding,
        }
    }

    pub fn with_override(mut self, locale: Locale, ovr: LocaleOverride) -> Self {
        self.overrides.insert(locale, ovr);
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }
}

// ============================================================================
// Listing Summaries
// ============================================================================

/// Lightweight per-locale view of one entry, used for directory and
/// search listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorSummary {
    pub slug: String,
    pub title: String,
    pub category: Category,
    pub summary: String,
    pub icon: String,
    pub featured: bool,
}

/// Emoji icon shown on directory cards, keyed by slug with a generic
/// fallback.
pub fn icon_for_slug(slug: &str) -> &'static str {
    match slug {
        "mortgage-calculator" => "🏠",
        "loan-calculator" => "💰",
        "savings-calculator" => "💰",
        "compound-interest-calculator" => "💹",
        "sales-tax-calculator" => "🛒",
        "bmi-calculator" => "⚖️",
        "calorie-calculator" => "🍎",
        "bmr-calculator" => "🔥",
        "percentage-calculator" => "📐",
        "fraction-calculator" => "🔢",
        "average-calculator" => "📊",
        "age-calculator" => "🎂",
        "tip-calculator" => "🍽️",
        "gpa-calculator" => "🎓",
        "date-calculator" => "📅",
        "word-counter" => "📝",
        "unit-converter" => "🔄",
        "currency-converter" => "💱",
        _ => "🧮",
    }
}

// ============================================================================
// Content Registry
// ============================================================================

/// Immutable, startup-built store of calculator entries with resolved
/// locale records cached per (slug, locale).
#[derive(Debug, Clone, Default)]
pub struct ContentRegistry {
    entries: BTreeMap<String, CalculatorEntry>,
    /// slug → locale → fully-resolved record, computed once at build
    resolved: BTreeMap<String, BTreeMap<Locale, LocaleRecord>>,
}

impl ContentRegistry {
    /// Build the registry from static entries.
    ///
    /// Fatal configuration errors: duplicate slug, unusable component
    /// binding. The base record's `slug` and `category` are stamped from
    /// the entry (the entry is authoritative), and related-slug lists
    /// are deduplicated with self-references dropped.
    pub fn build(entries: Vec<CalculatorEntry>) -> ContentResult<ContentRegistry> {
        let mut registry = ContentRegistry::default();

        for mut entry in entries {
            if registry.entries.contains_key(&entry.slug) {
                return Err(ContentError::duplicate_slug(&entry.slug));
            }
            entry.binding.validate(&entry.slug)?;

            // The entry is authoritative for slug and category; keep the
            // base record consistent with it.
            entry.base.slug = entry.slug.clone();
            entry.base.category = entry.category;
            entry.base.related_slugs = dedup_related(&entry.slug, &entry.base.related_slugs);

            let mut per_locale = BTreeMap::new();
            for locale in Locale::ALL {
                let mut record = match entry.overrides.get(&locale) {
                    Some(ovr) if !locale.is_base() => ovr.apply(&entry.base),
                    _ => entry.base.clone(),
                };
                record.related_slugs = dedup_related(&entry.slug, &record.related_slugs);
                per_locale.insert(locale, record);
            }

            registry.resolved.insert(entry.slug.clone(), per_locale);
            registry.entries.insert(entry.slug.clone(), entry);
        }

        Ok(registry)
    }

    /// Look up the raw entry for a slug.
    pub fn get_by_slug(&self, slug: &str) -> Option<&CalculatorEntry> {
        self.entries.get(slug)
    }

    /// Resolved locale record for a (slug, locale) pair. `None` only for
    /// an unknown slug; every known slug resolves for every locale.
    pub fn resolve(&self, slug: &str, locale: Locale) -> Option<&LocaleRecord> {
        self.resolved.get(slug).and_then(|per| per.get(&locale))
    }

    /// Ordered (slug ascending) summaries of every entry for a locale.
    pub fn list_by_locale(&self, locale: Locale) -> Vec<CalculatorSummary> {
        self.entries
            .values()
            .filter_map(|entry| self.summary_of(entry, locale))
            .collect()
    }

    /// Same shape as [`Self::list_by_locale`], filtered to one category.
    pub fn list_by_category(&self, category: Category, locale: Locale) -> Vec<CalculatorSummary> {
        self.entries
            .values()
            .filter(|entry| entry.category == category)
            .filter_map(|entry| self.summary_of(entry, locale))
            .collect()
    }

    /// Everything the structured-data generator needs for one category
    /// page.
    pub fn category_data(&self, category: Category, locale: Locale) -> CategoryData {
        CategoryData {
            category,
            name: category.display_name(locale).to_string(),
            description: category.description(locale).to_string(),
            calculators: self
                .list_by_category(category, locale)
                .into_iter()
                .map(|summary| CategoryMember {
                    name: summary.title,
                    slug: summary.slug,
                })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All registered slugs, ascending.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    fn summary_of(&self, entry: &CalculatorEntry, locale: Locale) -> Option<CalculatorSummary> {
        let record = self.resolve(&entry.slug, locale)?;
        Some(CalculatorSummary {
            slug: entry.slug.clone(),
            title: record.title.clone(),
            category: entry.category,
            summary: record.summary.clone(),
            icon: icon_for_slug(&entry.slug).to_string(),
            featured: entry.featured,
        })
    }
}

/// Deduplicate a related-slug list in place order, dropping self-links.
fn dedup_related(own_slug: &str, slugs: &[String]) -> Vec<String> {
    let mut seen = std::collections::BTreeSet::new();
    slugs
        .iter()
        .filter(|slug| slug.as_str() != own_slug && seen.insert(slug.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::SeoContent;

    fn entry(slug: &str, category: Category, title: &str) -> CalculatorEntry {
        CalculatorEntry::new(
            slug,
            category,
            LocaleRecord::new(slug, category, title).with_summary(format!("{} summary", title)),
            ComponentBinding::named("TipCalculator"),
        )
    }

    fn sample_registry() -> ContentRegistry {
        let loan = entry("loan-calculator", Category::Financial, "Loan Calculator")
            .with_override(
                Locale::Es,
                LocaleOverride::new()
                    .with_title("Calculadora de Préstamos")
                    .with_summary("Resumen del préstamo"),
            )
            .featured();
        let bmi = entry("bmi-calculator", Category::Health, "BMI Calculator");
        let tip = entry("tip-calculator", Category::Lifestyle, "Tip Calculator");
        ContentRegistry::build(vec![loan, bmi, tip]).unwrap()
    }

    #[test]
    fn test_duplicate_slug_is_fatal() {
        let err = ContentRegistry::build(vec![
            entry("bmi-calculator", Category::Health, "BMI"),
            entry("bmi-calculator", Category::Health, "BMI again"),
        ])
        .unwrap_err();
        assert_eq!(err, ContentError::duplicate_slug("bmi-calculator"));
        assert!(err.is_config_error());
    }

    #[test]
    fn test_invalid_binding_is_fatal() {
        let mut bad = entry("loan-calculator", Category::Financial, "Loan");
        bad.binding = ComponentBinding::named("");
        let err = ContentRegistry::build(vec![bad]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_BINDING");
    }

    #[test]
    fn test_resolution_totality_and_invariance() {
        // Every slug resolves for every locale; slug/category never vary.
        let registry = sample_registry();
        for slug in ["loan-calculator", "bmi-calculator", "tip-calculator"] {
            let entry = registry.get_by_slug(slug).unwrap();
            for locale in Locale::ALL {
                let record = registry.resolve(slug, locale).unwrap();
                assert_eq!(record.slug, entry.slug);
                assert_eq!(record.category, entry.category);
                assert!(!record.title.is_empty());
            }
        }
    }

    #[test]
    fn test_override_applies_only_to_its_locale() {
        let registry = sample_registry();
        let es = registry.resolve("loan-calculator", Locale::Es).unwrap();
        assert_eq!(es.title, "Calculadora de Préstamos");
        // Locales without overrides serve the base record, never a third
        // locale.
        let fr = registry.resolve("loan-calculator", Locale::Fr).unwrap();
        assert_eq!(fr.title, "Loan Calculator");
    }

    #[test]
    fn test_unknown_slug_is_none() {
        let registry = sample_registry();
        assert!(registry.get_by_slug("teleporter").is_none());
        assert!(registry.resolve("teleporter", Locale::En).is_none());
    }

    #[test]
    fn test_listing_is_ordered_and_localized() {
        let registry = sample_registry();
        let all = registry.list_by_locale(Locale::Es);
        let slugs: Vec<&str> = all.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, ["bmi-calculator", "loan-calculator", "tip-calculator"]);

        let loan = &all[1];
        assert_eq!(loan.title, "Calculadora de Préstamos");
        assert_eq!(loan.summary, "Resumen del préstamo");
        assert!(loan.featured);
        assert_eq!(loan.icon, "💰");
    }

    #[test]
    fn test_list_by_category_filters() {
        let registry = sample_registry();
        let health = registry.list_by_category(Category::Health, Locale::En);
        assert_eq!(health.len(), 1);
        assert_eq!(health[0].slug, "bmi-calculator");

        let math = registry.list_by_category(Category::Math, Locale::En);
        assert!(math.is_empty());
    }

    #[test]
    fn test_category_data_shape() {
        let registry = sample_registry();
        let data = registry.category_data(Category::Financial, Locale::Pt);
        assert_eq!(data.name, "Calculadoras Financeiras");
        assert_eq!(data.calculators.len(), 1);
        assert_eq!(data.calculators[0].slug, "loan-calculator");
    }

    #[test]
    fn test_base_record_stamped_from_entry() {
        // The entry wins when the base record disagrees about slug or
        // category.
        let mut inconsistent = entry("loan-calculator", Category::Financial, "Loan");
        inconsistent.base.slug = "prestamo-calculadora".to_string();
        inconsistent.base.category = Category::Lifestyle;

        let registry = ContentRegistry::build(vec![inconsistent]).unwrap();
        let record = registry.resolve("loan-calculator", Locale::En).unwrap();
        assert_eq!(record.slug, "loan-calculator");
        assert_eq!(record.category, Category::Financial);
    }

    #[test]
    fn test_related_slugs_deduplicated() {
        let mut e = entry("loan-calculator", Category::Financial, "Loan");
        e.base = e.base.with_related_slugs([
            "mortgage-calculator",
            "emi-calculator",
            "mortgage-calculator",
            "loan-calculator", // self-link dropped
        ]);
        let registry = ContentRegistry::build(vec![e]).unwrap();
        let record = registry.resolve("loan-calculator", Locale::En).unwrap();
        assert_eq!(record.related_slugs, ["mortgage-calculator", "emi-calculator"]);
    }

    #[test]
    fn test_resolved_records_have_seo_fallback() {
        let mut e = entry("loan-calculator", Category::Financial, "Loan");
        e.base = e
            .base
            .with_seo(SeoContent::new().with_introduction("Base intro."));
        e = e.with_override(Locale::De, LocaleOverride::new().with_title("Kreditrechner"));

        let registry = ContentRegistry::build(vec![e]).unwrap();
        let de = registry.resolve("loan-calculator", Locale::De).unwrap();
        assert_eq!(de.title, "Kreditrechner");
        assert_eq!(de.seo.as_ref().unwrap().introduction, "Base intro.");
    }
}
