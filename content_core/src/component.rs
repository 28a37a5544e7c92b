//! # Component Registry and Dispatch
//!
//! A calculator's content record carries a *component binding*: either the
//! symbolic name of a self-contained legacy widget, or an inline schema
//! describing inputs and outputs for the generic widget. The two calling
//! conventions are mutually exclusive per entry and are told apart by the
//! shape of the binding alone. There is no inheritance involved, just a
//! two-way tagged dispatch.
//!
//! Legacy names are resolved through a closed [`ComponentId`] enum and a
//! registration table built at startup. An unknown name is not an error:
//! the calculator page is still meaningful as static content, so dispatch
//! yields an explicit [`ResolvedWidget::NoWidget`] and the page renders
//! without an interactive widget.
//!
//! ## Example
//!
//! ```rust
//! use content_core::component::{ComponentBinding, ComponentRegistry, ResolvedWidget};
//! use content_core::locale::Locale;
//!
//! let registry = ComponentRegistry::with_defaults();
//!
//! let known = ComponentBinding::named("TipCalculator");
//! assert!(matches!(registry.resolve(&known, Locale::En), ResolvedWidget::Legacy { .. }));
//!
//! let unknown = ComponentBinding::named("TeleportationCalculator");
//! assert!(matches!(registry.resolve(&unknown, Locale::En), ResolvedWidget::NoWidget));
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::errors::{ContentError, ContentResult};
use crate::locale::Locale;

// ============================================================================
// Widget Schema (generic calling convention)
// ============================================================================

/// Value type of a generic-widget input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    Number,
    Text,
    Select,
}

/// One input field of a schema-driven widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSpec {
    /// Field identifier, referenced by output `field` hints
    pub name: String,
    /// Localized label shown next to the field
    pub label: String,
    #[serde(rename = "type", default)]
    pub value_type: InputType,
    /// Initial value (number or string, matching `value_type`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    /// Choices for `Select` inputs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl InputSpec {
    pub fn number(name: impl Into<String>, label: impl Into<String>) -> Self {
        InputSpec {
            name: name.into(),
            label: label.into(),
            value_type: InputType::Number,
            default: None,
            min: None,
            max: None,
            step: None,
            options: Vec::new(),
        }
    }

    pub fn select<I, S>(name: impl Into<String>, label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        InputSpec {
            value_type: InputType::Select,
            options: options.into_iter().map(Into::into).collect(),
            ..InputSpec::number(name, label)
        }
    }

    pub fn with_default(mut self, value: serde_json::Value) -> Self {
        self.default = Some(value);
        self
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }
}

/// Display format hint for a widget output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Currency,
    Percent,
    #[default]
    Number,
    Text,
}

/// One output of a schema-driven widget: label, optional source field,
/// format hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpec {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default)]
    pub format: OutputFormat,
}

impl OutputSpec {
    pub fn new(label: impl Into<String>, format: OutputFormat) -> Self {
        OutputSpec {
            label: label.into(),
            field: None,
            format,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }
}

/// Input/output schema handed to the generic widget. The widget owns its
/// own state, its own calculation, and its own re-render triggers; this
/// struct is the entire handoff contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetSchema {
    pub inputs: Vec<InputSpec>,
    pub output: OutputSpec,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_outputs: Vec<OutputSpec>,
}

impl WidgetSchema {
    pub fn new(inputs: Vec<InputSpec>, output: OutputSpec) -> Self {
        WidgetSchema {
            inputs,
            output,
            additional_outputs: Vec::new(),
        }
    }

    pub fn with_additional_outputs<I>(mut self, outputs: I) -> Self
    where
        I: IntoIterator<Item = OutputSpec>,
    {
        self.additional_outputs = outputs.into_iter().collect();
        self
    }
}

// ============================================================================
// Component Binding
// ============================================================================

/// How a calculator entry binds to its interactive widget.
///
/// The two variants are the two calling conventions; they are never mixed
/// for one invocation. Serialized form mirrors the source data: a bare
/// string for `Named`, an object for `Schema`; anything else fails
/// deserialization, which is a configuration error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComponentBinding {
    /// Look up a zero-configuration widget by symbolic name
    Named(String),
    /// Drive the generic widget with an inline schema
    Schema(WidgetSchema),
}

impl ComponentBinding {
    pub fn named(name: impl Into<String>) -> Self {
        ComponentBinding::Named(name.into())
    }

    pub fn schema(schema: WidgetSchema) -> Self {
        ComponentBinding::Schema(schema)
    }

    /// Startup-time shape check. An *unknown* name is fine (it degrades
    /// to [`ResolvedWidget::NoWidget`] at dispatch); an *unusable*
    /// binding is a configuration error.
    pub fn validate(&self, slug: &str) -> ContentResult<()> {
        match self {
            ComponentBinding::Named(name) => {
                if name.trim().is_empty() {
                    return Err(ContentError::invalid_binding(slug, "empty component name"));
                }
                Ok(())
            }
            ComponentBinding::Schema(schema) => {
                if schema.inputs.is_empty() {
                    return Err(ContentError::invalid_binding(
                        slug,
                        "schema binding declares no inputs",
                    ));
                }
                Ok(())
            }
        }
    }
}

// ============================================================================
// Known Legacy Components
// ============================================================================

/// Closed set of self-contained legacy widgets.
///
/// Symbolic names in content data are matched against this enum; names
/// outside it dispatch to `NoWidget`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentId {
    MortgageCalculator,
    LoanCalculator,
    BmiCalculator,
    TipCalculator,
    PercentageCalculator,
    CompoundInterestCalculator,
    SavingsCalculator,
    CurrencyConverter,
    GpaCalculator,
    AgeCalculator,
    WordCounter,
    UnitConverter,
}

impl ComponentId {
    /// All known legacy widgets.
    pub const ALL: [ComponentId; 12] = [
        ComponentId::MortgageCalculator,
        ComponentId::LoanCalculator,
        ComponentId::BmiCalculator,
        ComponentId::TipCalculator,
        ComponentId::PercentageCalculator,
        ComponentId::CompoundInterestCalculator,
        ComponentId::SavingsCalculator,
        ComponentId::CurrencyConverter,
        ComponentId::GpaCalculator,
        ComponentId::AgeCalculator,
        ComponentId::WordCounter,
        ComponentId::UnitConverter,
    ];

    /// Symbolic name as carried in content data.
    pub fn name(&self) -> &'static str {
        match self {
            ComponentId::MortgageCalculator => "MortgageCalculator",
            ComponentId::LoanCalculator => "LoanCalculator",
            ComponentId::BmiCalculator => "BMICalculator",
            ComponentId::TipCalculator => "TipCalculator",
            ComponentId::PercentageCalculator => "PercentageCalculator",
            ComponentId::CompoundInterestCalculator => "CompoundInterestCalculator",
            ComponentId::SavingsCalculator => "SavingsCalculator",
            ComponentId::CurrencyConverter => "CurrencyConverter",
            ComponentId::GpaCalculator => "GPACalculator",
            ComponentId::AgeCalculator => "AgeCalculator",
            ComponentId::WordCounter => "WordCounter",
            ComponentId::UnitConverter => "UnitConverter",
        }
    }

    /// Look up a symbolic name from content data.
    pub fn from_name(name: &str) -> Option<ComponentId> {
        ComponentId::ALL.iter().copied().find(|id| id.name() == name)
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// The result of dispatch: a reference to a renderable unit, or nothing.
///
/// `NoWidget` is a degraded-but-valid state: the page still renders its
/// static content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ResolvedWidget {
    /// A registered self-contained widget; invoked with the locale only
    Legacy { id: ComponentId, locale: Locale },
    /// The generic widget; invoked with the schema plus the locale
    Generic {
        schema: WidgetSchema,
        locale: Locale,
    },
    /// No interactive widget available for this entry
    NoWidget,
}

impl ResolvedWidget {
    pub fn is_interactive(&self) -> bool {
        !matches!(self, ResolvedWidget::NoWidget)
    }
}

/// Name → implementation table for legacy widgets, built once at startup.
///
/// Registration is append-only; the request path only reads.
#[derive(Debug, Clone, Default)]
pub struct ComponentRegistry {
    registered: BTreeSet<ComponentId>,
}

impl ComponentRegistry {
    /// Empty registry (mostly for tests).
    pub fn new() -> Self {
        ComponentRegistry::default()
    }

    /// Registry with every known legacy widget registered.
    pub fn with_defaults() -> Self {
        let mut registry = ComponentRegistry::new();
        for id in ComponentId::ALL {
            registry.register(id);
        }
        registry
    }

    pub fn register(&mut self, id: ComponentId) {
        self.registered.insert(id);
    }

    pub fn is_registered(&self, id: ComponentId) -> bool {
        self.registered.contains(&id)
    }

    /// Dispatch a binding to exactly one calling convention.
    ///
    /// - `Named` with a registered name → `Legacy`
    /// - `Named` with an unknown or unregistered name → `NoWidget`
    /// - `Schema` → `Generic`, inputs and outputs passed through
    ///   unmodified in count and order
    pub fn resolve(&self, binding: &ComponentBinding, locale: Locale) -> ResolvedWidget {
        match binding {
            ComponentBinding::Named(name) => match ComponentId::from_name(name) {
                Some(id) if self.is_registered(id) => ResolvedWidget::Legacy { id, locale },
                _ => ResolvedWidget::NoWidget,
            },
            ComponentBinding::Schema(schema) => ResolvedWidget::Generic {
                schema: schema.clone(),
                locale,
            },
        }
    }
}
