//! # Locale Records and the Fallback Resolver
//!
//! A calculator's content is authored once, completely, in the base locale.
//! Other locales supply *partial* overrides: any subset of fields. The
//! resolver merges an override onto the base record field by field:
//! a field present in the override wins (including an explicitly empty
//! list), a field absent falls back to the base value. Fallback is always
//! to the base locale, never to a blank string and never to a third
//! locale.
//!
//! Two deliberate asymmetries in the merge:
//!
//! - The structured SEO bundle ([`SeoContent`]) resolves as a single unit.
//!   An override either replaces the whole bundle or leaves the base
//!   bundle in place; there is no key-by-key merge inside it. Many locales
//!   carry no bundle at all, which downstream renderers treat as "nothing
//!   to render", not as an error.
//! - `slug` and `category` are locale-invariant. [`LocaleOverride`] has no
//!   such fields, so an override cannot change them even by accident.
//!
//! ## Example
//!
//! ```rust
//! use content_core::record::{LocaleRecord, LocaleOverride};
//! use content_core::category::Category;
//!
//! let base = LocaleRecord::new("tip-calculator", Category::Lifestyle, "Tip Calculator");
//! let es = LocaleOverride::new().with_title("Calculadora de Propinas");
//!
//! let resolved = es.apply(&base);
//! assert_eq!(resolved.title, "Calculadora de Propinas");
//! assert_eq!(resolved.slug, "tip-calculator");
//! ```

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::errors::{ContentError, ContentResult};
use crate::locale::Locale;

// ============================================================================
// SEO Content Bundle
// ============================================================================

/// One question/answer pair. Pairs are atomic: they are never split
/// across sections or schema blocks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl Faq {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Faq {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Structured long-form SEO copy for one calculator in one locale.
///
/// Every field is independently optional in spirit: an empty string or
/// empty list means "this section does not exist", and the renderer
/// suppresses it, heading included.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeoContent {
    pub introduction: String,
    pub benefits: Vec<String>,
    pub steps: Vec<String>,
    pub inputs_explained: Vec<String>,
    pub formula_explanation: String,
    pub examples: Vec<String>,
    pub results_explanation: Vec<String>,
    pub who_its_for: String,
    pub disclaimer: String,
    pub related_tools: Vec<String>,
    pub faqs: Vec<Faq>,
}

impl SeoContent {
    pub fn new() -> Self {
        SeoContent::default()
    }

    pub fn with_introduction(mut self, text: impl Into<String>) -> Self {
        self.introduction = text.into();
        self
    }

    pub fn with_benefits<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.benefits = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_steps<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_inputs_explained<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inputs_explained = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_formula_explanation(mut self, text: impl Into<String>) -> Self {
        self.formula_explanation = text.into();
        self
    }

    pub fn with_examples<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_results_explanation<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.results_explanation = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_who_its_for(mut self, text: impl Into<String>) -> Self {
        self.who_its_for = text.into();
        self
    }

    pub fn with_disclaimer(mut self, text: impl Into<String>) -> Self {
        self.disclaimer = text.into();
        self
    }

    pub fn with_related_tools<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related_tools = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_faqs<I>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = Faq>,
    {
        self.faqs = items.into_iter().collect();
        self
    }
}

// ============================================================================
// Locale Record
// ============================================================================

/// Editorial difficulty tag shown on directory cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Basic,
    Intermediate,
    Advanced,
}

/// The fully-resolved content object for one calculator in one locale.
///
/// Base-locale records are authored complete; records for other locales
/// are derived by [`LocaleOverride::apply`] and are therefore complete
/// too; fallback totality is a structural property, not a runtime check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleRecord {
    // --- identity / metadata (locale-invariant slug and category) ---
    pub slug: String,
    pub category: Category,
    pub title: String,
    pub seo_title: String,
    pub meta_description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub difficulty: Difficulty,

    // --- narrative content ---
    pub summary: String,
    pub description: String,
    /// Ordered usage steps
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Worked examples
    #[serde(default)]
    pub examples: Vec<String>,

    /// Structured SEO bundle. Wholly absent for many locales; the
    /// renderer treats `None` as "nothing to render".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoContent>,

    /// Cross-links to other calculators, ordered, deduplicated at
    /// registry build time.
    #[serde(default)]
    pub related_slugs: Vec<String>,
}

impl LocaleRecord {
    /// Create a minimal record. Catalog code chains the `with_` builders
    /// on top of this.
    pub fn new(slug: impl Into<String>, category: Category, title: impl Into<String>) -> Self {
        let title = title.into();
        LocaleRecord {
            slug: slug.into(),
            category,
            seo_title: title.clone(),
            meta_description: String::new(),
            keywords: Vec::new(),
            difficulty: Difficulty::Basic,
            summary: String::new(),
            description: String::new(),
            instructions: Vec::new(),
            examples: Vec::new(),
            seo: None,
            related_slugs: Vec::new(),
            title,
        }
    }

    pub fn with_seo_title(mut self, text: impl Into<String>) -> Self {
        self.seo_title = text.into();
        self
    }

    pub fn with_meta_description(mut self, text: impl Into<String>) -> Self {
        self.meta_description = text.into();
        self
    }

    pub fn with_keywords<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_summary(mut self, text: impl Into<String>) -> Self {
        self.summary = text.into();
        self
    }

    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    pub fn with_instructions<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instructions = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_examples<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = items.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_seo(mut self, seo: SeoContent) -> Self {
        self.seo = Some(seo);
        self
    }

    pub fn with_related_slugs<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related_slugs = items.into_iter().map(Into::into).collect();
        self
    }
}

// ============================================================================
// Locale Override + Fallback Resolver
// ============================================================================

/// A partial per-locale record.
///
/// Every field is wrapped in `Option` so that "absent" (fall back to
/// base) and "explicitly empty" (override with nothing) stay
/// distinguishable. List fields replace the base list wholesale; there is
/// no element-wise merge. There are intentionally no `slug` or `category`
/// fields: the base entry is authoritative for both.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LocaleOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<String>>,
    /// Replaces the whole SEO bundle when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_slugs: Option<Vec<String>>,
}

impl LocaleOverride {
    pub fn new() -> Self {
        LocaleOverride::default()
    }

    /// True when the override defines no field at all.
    pub fn is_empty(&self) -> bool {
        *self == LocaleOverride::default()
    }

    pub fn with_title(mut self, text: impl Into<String>) -> Self {
        self.title = Some(text.into());
        self
    }

    pub fn with_seo_title(mut self, text: impl Into<String>) -> Self {
        self.seo_title = Some(text.into());
        self
    }

    pub fn with_meta_description(mut self, text: impl Into<String>) -> Self {
        self.meta_description = Some(text.into());
        self
    }

    pub fn with_keywords<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = Some(items.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn with_summary(mut self, text: impl Into<String>) -> Self {
        self.summary = Some(text.into());
        self
    }

    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn with_instructions<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instructions = Some(items.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_examples<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples = Some(items.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_seo(mut self, seo: SeoContent) -> Self {
        self.seo = Some(seo);
        self
    }

    pub fn with_related_slugs<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.related_slugs = Some(items.into_iter().map(Into::into).collect());
        self
    }

    /// The fallback resolver: merge this override onto `base`.
    ///
    /// For every field, the override value wins when defined, otherwise
    /// the base value is copied. `slug` and `category` always come from
    /// `base`. The result is a complete record regardless of how sparse
    /// the override is. Idempotent and side-effect-free.
    pub fn apply(&self, base: &LocaleRecord) -> LocaleRecord {
        LocaleRecord {
            slug: base.slug.clone(),
            category: base.category,
            title: self.title.clone().unwrap_or_else(|| base.title.clone()),
            seo_title: self
                .seo_title
                .clone()
                .unwrap_or_else(|| base.seo_title.clone()),
            meta_description: self
                .meta_description
                .clone()
                .unwrap_or_else(|| base.meta_description.clone()),
            keywords: self.keywords.clone().unwrap_or_else(|| base.keywords.clone()),
            difficulty: self.difficulty.unwrap_or(base.difficulty),
            summary: self.summary.clone().unwrap_or_else(|| base.summary.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| base.description.clone()),
            instructions: self
                .instructions
                .clone()
                .unwrap_or_else(|| base.instructions.clone()),
            examples: self.examples.clone().unwrap_or_else(|| base.examples.clone()),
            // Whole-bundle resolution: no key-by-key merge inside the SEO
            // content.
            seo: self.seo.clone().or_else(|| base.seo.clone()),
            related_slugs: self
                .related_slugs
                .clone()
                .unwrap_or_else(|| base.related_slugs.clone()),
        }
    }

    /// Deserialize an override from JSON, mapping shape problems (wrong
    /// field type, etc.) to a configuration error. Unknown keys are
    /// ignored, so a stray `slug` or `category` in source data is
    /// dropped rather than honored.
    pub fn from_json(locale: Locale, value: &serde_json::Value) -> ContentResult<LocaleOverride> {
        serde_json::from_value(value.clone())
            .map_err(|e| ContentError::malformed_override(locale.code(), e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_base() -> LocaleRecord {
        LocaleRecord::new("loan-calculator", Category::Financial, "Loan Calculator")
            .with_summary("Calculate monthly loan payments")
            .with_meta_description("Free loan payment calculator")
            .with_keywords(["loan", "payment"])
            .with_instructions(["Enter the amount", "Enter the rate", "Read the result"])
            .with_related_slugs(["mortgage-calculator", "emi-calculator"])
            .with_seo(
                SeoContent::new()
                    .with_introduction("A loan calculator estimates your monthly payment.")
                    .with_benefits(["Save money", "Plan ahead"])
                    .with_faqs([Faq::new("What is a mortgage?", "A loan secured by property.")]),
            )
    }

    #[test]
    fn test_override_fields_win() {
        let base = sample_base();
        let es = LocaleOverride::new()
            .with_title("Calculadora de Préstamos")
            .with_summary("Calcula pagos mensuales de préstamos");

        let resolved = es.apply(&base);
        assert_eq!(resolved.title, "Calculadora de Préstamos");
        assert_eq!(resolved.summary, "Calcula pagos mensuales de préstamos");
        // everything else falls back to base
        assert_eq!(resolved.meta_description, base.meta_description);
        assert_eq!(resolved.keywords, base.keywords);
        assert_eq!(resolved.instructions, base.instructions);
    }

    #[test]
    fn test_partial_spanish_override_falls_through() {
        // es supplies only title and summary; benefits and faqs must come
        // through identical to the base values, slug/category unchanged.
        let base = sample_base();
        let es = LocaleOverride::new()
            .with_title("Calculadora de Préstamos")
            .with_summary("Resumen en español");

        let resolved = es.apply(&base);
        let seo = resolved.seo.as_ref().unwrap();
        assert_eq!(seo.benefits, vec!["Save money", "Plan ahead"]);
        assert_eq!(seo.faqs, base.seo.as_ref().unwrap().faqs);
        assert_eq!(resolved.slug, "loan-calculator");
        assert_eq!(resolved.category, Category::Financial);
    }

    #[test]
    fn test_explicitly_empty_list_wins() {
        let base = sample_base();
        let stripped = LocaleOverride::new().with_keywords(Vec::<String>::new());

        let resolved = stripped.apply(&base);
        assert!(resolved.keywords.is_empty());
        assert!(!base.keywords.is_empty());
    }

    #[test]
    fn test_seo_bundle_resolves_as_a_unit() {
        let base = sample_base();

        // Override with its own bundle: the base bundle is replaced
        // wholesale, nothing leaks through from the base FAQs.
        let fr = LocaleOverride::new()
            .with_seo(SeoContent::new().with_introduction("Présentation du calculateur."));
        let resolved = fr.apply(&base);
        let seo = resolved.seo.as_ref().unwrap();
        assert_eq!(seo.introduction, "Présentation du calculateur.");
        assert!(seo.benefits.is_empty());
        assert!(seo.faqs.is_empty());

        // Override without a bundle: the whole base bundle falls through.
        let pt = LocaleOverride::new().with_title("Calculadora de Empréstimos");
        let resolved = pt.apply(&base);
        assert_eq!(resolved.seo, base.seo);
    }

    #[test]
    fn test_resolution_is_idempotent_and_pure() {
        let base = sample_base();
        let es = LocaleOverride::new().with_title("Calculadora de Préstamos");

        let first = es.apply(&base);
        let second = es.apply(&base);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_override_reproduces_base() {
        let base = sample_base();
        let resolved = LocaleOverride::new().apply(&base);
        assert_eq!(resolved, base);
    }

    #[test]
    fn test_from_json_rejects_wrong_field_type() {
        let bad = serde_json::json!({ "title": 42 });
        let err = LocaleOverride::from_json(Locale::Es, &bad).unwrap_err();
        assert_eq!(err.error_code(), "MALFORMED_OVERRIDE");
        assert!(err.is_config_error());
    }

    #[test]
    fn test_from_json_ignores_slug_and_category_keys() {
        let sneaky = serde_json::json!({
            "title": "Calculadora",
            "slug": "calculadora-de-prestamos",
            "category": "health"
        });
        let ovr = LocaleOverride::from_json(Locale::Es, &sneaky).unwrap();
        let resolved = ovr.apply(&sample_base());
        assert_eq!(resolved.slug, "loan-calculator");
        assert_eq!(resolved.category, Category::Financial);
        assert_eq!(resolved.title, "Calculadora");
    }

    #[test]
    fn test_record_serialization_roundtrip() {
        let base = sample_base();
        let json = serde_json::to_string(&base).unwrap();
        let roundtrip: LocaleRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, base);
    }
}
