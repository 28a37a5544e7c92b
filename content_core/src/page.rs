//! # Page Pipeline
//!
//! Ties the pieces together for one request: (slug, locale) in, a
//! complete page view out. The registry resolves the slug, the cached
//! locale record comes back, the component registry dispatches the
//! widget, and the SEO renderer and structured-data generator each
//! consume the same record independently.
//!
//! Pure computation over the startup-built registries; nothing here
//! blocks, retries, or mutates.
//!
//! ## Example
//!
//! ```rust
//! use content_core::catalog::default_registry;
//! use content_core::component::ComponentRegistry;
//! use content_core::locale::Locale;
//! use content_core::page::render_page;
//!
//! let components = ComponentRegistry::with_defaults();
//! let page = render_page(default_registry(), &components, "loan-calculator", Locale::Es).unwrap();
//! assert_eq!(page.record.slug, "loan-calculator");
//! ```

use serde::Serialize;

use crate::component::{ComponentRegistry, ResolvedWidget};
use crate::errors::{ContentError, ContentResult};
use crate::locale::Locale;
use crate::record::LocaleRecord;
use crate::registry::ContentRegistry;
use crate::schema::calculator_schema;
use crate::seo::{render_sections, Section};

/// Everything the page shell needs to render one calculator page.
///
/// `sections` is the body content (empty when the record has no SEO
/// bundle, a valid state, not an error); `json_ld` goes in the head;
/// `widget` is the interactive-layer handoff.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub locale: Locale,
    pub record: LocaleRecord,
    pub widget: ResolvedWidget,
    pub sections: Vec<Section>,
    pub json_ld: serde_json::Value,
}

/// Resolve and render one calculator page.
///
/// The only error is an unknown slug ([`ContentError::CalculatorNotFound`],
/// the caller's 404). Locale fallback happened at registry build time, so
/// every known slug renders for every locale; a missing interactive
/// widget degrades to [`ResolvedWidget::NoWidget`].
pub fn render_page(
    content: &ContentRegistry,
    components: &ComponentRegistry,
    slug: &str,
    locale: Locale,
) -> ContentResult<PageView> {
    let entry = content
        .get_by_slug(slug)
        .ok_or_else(|| ContentError::calculator_not_found(slug))?;

    let record = content
        .resolve(slug, locale)
        .ok_or_else(|| ContentError::calculator_not_found(slug))?
        .clone();

    let widget = components.resolve(&entry.binding, locale);
    let sections = record
        .seo
        .as_ref()
        .map(|seo| render_sections(seo, locale))
        .unwrap_or_default();
    let json_ld = calculator_schema(&record, locale);

    Ok(PageView {
        locale,
        record,
        widget,
        sections,
        json_ld,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::component::ComponentBinding;
    use crate::record::{LocaleOverride, LocaleRecord, SeoContent};
    use crate::registry::CalculatorEntry;

    fn registries() -> (ContentRegistry, ComponentRegistry) {
        let with_seo = CalculatorEntry::new(
            "bmi-calculator",
            Category::Health,
            LocaleRecord::new("bmi-calculator", Category::Health, "BMI Calculator")
                .with_summary("Body mass index")
                .with_seo(
                    SeoContent::new()
                        .with_introduction("BMI relates weight to height.")
                        .with_benefits(["Know your range"]),
                ),
            ComponentBinding::named("BMICalculator"),
        )
        .with_override(Locale::Es, LocaleOverride::new().with_title("Calculadora de IMC"));

        let without_seo = CalculatorEntry::new(
            "love-calculator",
            Category::Lifestyle,
            LocaleRecord::new("love-calculator", Category::Lifestyle, "Love Calculator"),
            ComponentBinding::named("LoveCalculator"), // not a known widget
        );

        (
            ContentRegistry::build(vec![with_seo, without_seo]).unwrap(),
            ComponentRegistry::with_defaults(),
        )
    }

    #[test]
    fn test_render_page_happy_path() {
        let (content, components) = registries();
        let page = render_page(&content, &components, "bmi-calculator", Locale::Es).unwrap();

        assert_eq!(page.record.title, "Calculadora de IMC");
        assert!(page.widget.is_interactive());
        assert_eq!(page.sections.len(), 2);
        assert_eq!(page.json_ld["@context"], "https://schema.org");
    }

    #[test]
    fn test_unknown_slug_is_not_found() {
        let (content, components) = registries();
        let err = render_page(&content, &components, "no-such-thing", Locale::En).unwrap_err();
        assert_eq!(err, ContentError::calculator_not_found("no-such-thing"));
        assert!(!err.is_config_error());
    }

    #[test]
    fn test_missing_widget_still_renders_page() {
        let (content, components) = registries();
        let page = render_page(&content, &components, "love-calculator", Locale::En).unwrap();
        assert_eq!(page.widget, ResolvedWidget::NoWidget);
        // Degraded but valid: static content is all there.
        assert_eq!(page.record.title, "Love Calculator");
    }

    #[test]
    fn test_missing_seo_bundle_renders_empty_sections() {
        let (content, components) = registries();
        let page = render_page(&content, &components, "love-calculator", Locale::Pt).unwrap();
        assert!(page.sections.is_empty());
    }
}
