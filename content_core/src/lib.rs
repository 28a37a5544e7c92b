//! # content_core - Localized Calculator Directory Engine
//!
//! `content_core` is the content engine behind Quick Calculator, turning
//! developer-authored calculator definitions into fully localized pages.
//! All inputs and outputs are JSON-serializable, so the same types drive
//! server rendering, static export, and structured-data generation.
//!
//! ## Design Philosophy
//!
//! - **Base-Complete**: English records are authored complete; every other
//!   locale is a partial override merged over them, so no locale can 404
//! - **Resolved Up Front**: the registry precomputes every (slug, locale)
//!   record at build time; the request path is pure map lookups
//! - **Degraded, Not Broken**: an unknown component name renders a content
//!   page without a widget instead of failing
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use content_core::catalog::default_registry;
//! use content_core::component::ComponentRegistry;
//! use content_core::locale::Locale;
//! use content_core::page::render_page;
//!
//! let components = ComponentRegistry::with_defaults();
//! let page = render_page(default_registry(), &components, "loan-calculator", Locale::Es).unwrap();
//!
//! assert_eq!(page.record.title, "Calculadora de Préstamos");
//! ```
//!
//! ## Modules
//!
//! - [`locale`] - Supported locales, parsing, and BCP 47 mapping
//! - [`category`] - Calculator categories with localized names
//! - [`record`] - Locale records, partial overrides, and the SEO bundle
//! - [`component`] - Component bindings and widget dispatch
//! - [`registry`] - The immutable content registry built at startup
//! - [`seo`] - Ordered SEO section rendering with skip-if-empty
//! - [`schema`] - JSON-LD structured data for home, category, and calculator pages
//! - [`page`] - The full page assembly pipeline
//! - [`catalog`] - The seed catalog the directory ships with
//! - [`errors`] - Structured error types

pub mod catalog;
pub mod category;
pub mod component;
pub mod errors;
pub mod locale;
pub mod page;
pub mod record;
pub mod registry;
pub mod schema;
pub mod seo;

// Re-export commonly used types at crate root for convenience
pub use category::{Category, CategoryData, CategoryMember};
pub use component::{
    ComponentBinding, ComponentId, ComponentRegistry, InputSpec, OutputSpec, ResolvedWidget,
    WidgetSchema,
};
pub use errors::{ContentError, ContentResult};
pub use locale::Locale;
pub use page::{render_page, PageView};
pub use record::{Difficulty, Faq, LocaleOverride, LocaleRecord, SeoContent};
pub use registry::{CalculatorEntry, CalculatorSummary, ContentRegistry};
pub use schema::{calculator_schema, category_schema, homepage_schema, organization_schema};
pub use seo::{render_sections, Section, SectionBody, SectionKind};
