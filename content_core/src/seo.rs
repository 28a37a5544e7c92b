//! # SEO Section Renderer
//!
//! Converts a [`SeoContent`] bundle into an ordered list of presentational
//! sections. The section order is fixed; a section is emitted only when
//! its source field is non-empty, so a heading never appears over empty
//! content. The page shell decides how sections become markup; this
//! module produces structure, not HTML.
//!
//! Headings come from a small per-locale table that is independent of the
//! content's locale coverage: a heading the table does not localize falls
//! back to the base-locale string.
//!
//! ## Example
//!
//! ```rust
//! use content_core::record::SeoContent;
//! use content_core::seo::render_sections;
//! use content_core::locale::Locale;
//!
//! let seo = SeoContent::new()
//!     .with_introduction("What this tool does.")
//!     .with_benefits(["Fast", "Free"]);
//!
//! let sections = render_sections(&seo, Locale::Es);
//! assert_eq!(sections.len(), 2);
//! assert_eq!(sections[0].heading, "Introducción");
//! ```

use serde::{Deserialize, Serialize};

use crate::locale::Locale;
use crate::record::{Faq, SeoContent};

// ============================================================================
// Section Kinds and Headings
// ============================================================================

/// The fixed vocabulary of SEO sections, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    Introduction,
    Benefits,
    HowToUse,
    InputsExplained,
    FormulaExplanation,
    ExampleScenarios,
    UnderstandingResults,
    WhoItsFor,
    Disclaimer,
    RelatedTools,
    Faq,
}

impl SectionKind {
    /// Render order. Fixed; never reordered per locale or per entry.
    pub const ORDER: [SectionKind; 11] = [
        SectionKind::Introduction,
        SectionKind::Benefits,
        SectionKind::HowToUse,
        SectionKind::InputsExplained,
        SectionKind::FormulaExplanation,
        SectionKind::ExampleScenarios,
        SectionKind::UnderstandingResults,
        SectionKind::WhoItsFor,
        SectionKind::Disclaimer,
        SectionKind::RelatedTools,
        SectionKind::Faq,
    ];

    /// Localized section heading.
    ///
    /// Coverage here is narrower than content coverage on purpose: the
    /// FAQ heading, for instance, was never translated in the copy deck,
    /// so every locale gets the base string for it.
    pub fn heading(&self, locale: Locale) -> &'static str {
        match self {
            SectionKind::Introduction => match locale {
                Locale::En => "Introduction",
                Locale::Es => "Introducción",
                Locale::Pt => "Introdução",
                Locale::Fr => "Introduction",
                Locale::De => "Einführung",
                Locale::Nl => "Inleiding",
            },
            SectionKind::Benefits => match locale {
                Locale::En => "What This Calculator Helps You Do",
                Locale::Es => "Qué Te Ayuda a Hacer Esta Calculadora",
                Locale::Pt => "O Que Esta Calculadora Te Ajuda a Fazer",
                Locale::Fr => "Ce Que Cette Calculatrice Vous Aide à Faire",
                Locale::De => "Was Dieser Rechner Ihnen Hilft",
                Locale::Nl => "Wat Deze Rekenmachine U Helpt Doen",
            },
            SectionKind::HowToUse => match locale {
                Locale::En => "How to Use the Calculator",
                Locale::Es => "Cómo Usar la Calculadora",
                Locale::Pt => "Como Usar a Calculadora",
                Locale::Fr => "Comment Utiliser la Calculatrice",
                Locale::De => "So Verwenden Sie Den Rechner",
                Locale::Nl => "Hoe De Rekenmachine Te Gebruiken",
            },
            SectionKind::InputsExplained => match locale {
                Locale::En => "Calculator Inputs Explained",
                Locale::Es => "Entradas de la Calculadora Explicadas",
                Locale::Pt => "Entradas da Calculadora Explicadas",
                Locale::Fr => "Entrées de la Calculatrice Expliquées",
                Locale::De => "Rechner-Eingaben Erklärt",
                Locale::Nl => "Rekenmachine-invoer Uitgelegd",
            },
            SectionKind::FormulaExplanation => match locale {
                Locale::En => "How the Calculation Works",
                Locale::Es => "Cómo Funciona el Cálculo",
                Locale::Pt => "Como Funciona o Cálculo",
                Locale::Fr => "Comment Fonctionne le Calcul",
                Locale::De => "Wie Die Berechnung Funktioniert",
                Locale::Nl => "Hoe De Berekening Werkt",
            },
            SectionKind::ExampleScenarios => match locale {
                Locale::En => "Example Scenarios",
                Locale::Es => "Escenarios de Ejemplo",
                Locale::Pt => "Cenários de Exemplo",
                Locale::Fr => "Scénarios d'Exemple",
                Locale::De => "Beispielszenarien",
                Locale::Nl => "Voorbeeldscenario's",
            },
            SectionKind::UnderstandingResults => match locale {
                Locale::En => "Understanding Your Results",
                Locale::Es => "Entendiendo Tus Resultados",
                Locale::Pt => "Entendendo Seus Resultados",
                Locale::Fr => "Comprendre Vos Résultats",
                Locale::De => "Ihre Ergebnisse Verstehen",
                Locale::Nl => "Uw Resultaten Begrijpen",
            },
            SectionKind::WhoItsFor => match locale {
                Locale::En => "Who Should Use This Calculator",
                Locale::Es => "Quién Debería Usar Esta Calculadora",
                Locale::Pt => "Quem Deve Usar Esta Calculadora",
                Locale::Fr => "Qui Devrait Utiliser Cette Calculatrice",
                Locale::De => "Wer Sollte Diesen Rechner Verwenden",
                Locale::Nl => "Wie Moet Deze Rekenmachine Gebruiken",
            },
            SectionKind::Disclaimer => match locale {
                Locale::En => "Important Notes & Disclaimer",
                Locale::Es => "Notas Importantes y Descargo de Responsabilidad",
                Locale::Pt => "Notas Importantes e Isenção de Responsabilidade",
                Locale::Fr => "Notes Importantes et Avis de Non-Responsabilité",
                Locale::De => "Wichtige Hinweise & Haftungsausschluss",
                Locale::Nl => "Belangrijke Opmerkingen & Disclaimer",
            },
            SectionKind::RelatedTools => match locale {
                Locale::En => "Related Calculators",
                Locale::Es => "Calculadoras Relacionadas",
                Locale::Pt => "Calculadoras Relacionadas",
                Locale::Fr => "Calculatrices Connexes",
                Locale::De => "Verwandte Rechner",
                Locale::Nl => "Gerelateerde Rekenmachines",
            },
            // Never localized in the copy deck; base-locale fallback.
            SectionKind::Faq => "Frequently Asked Questions",
        }
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Body of one rendered section. The shell maps these onto its own
/// markup: paragraphs, bullet lists, numbered lists, Q/A blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "content", rename_all = "camelCase")]
pub enum SectionBody {
    Paragraph(String),
    /// Unordered list, one bullet per item, original order
    Bullets(Vec<String>),
    /// Ordered list, numbering follows item position
    NumberedSteps(Vec<String>),
    /// Question/answer pairs, each pair atomic
    FaqPairs(Vec<Faq>),
}

/// One presentational section: locale-resolved heading plus body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub kind: SectionKind,
    pub heading: String,
    pub body: SectionBody,
}

impl Section {
    fn new(kind: SectionKind, locale: Locale, body: SectionBody) -> Self {
        Section {
            kind,
            heading: kind.heading(locale).to_string(),
            body,
        }
    }
}

/// Render an SEO bundle into its ordered section list.
///
/// Skip-if-empty is the invariant: an absent/empty string or an empty
/// list suppresses the whole section, heading included. List items keep
/// their stored order; nothing is reordered or deduplicated here.
pub fn render_sections(seo: &SeoContent, locale: Locale) -> Vec<Section> {
    let mut sections = Vec::new();

    for kind in SectionKind::ORDER {
        let body = match kind {
            SectionKind::Introduction => paragraph(&seo.introduction),
            SectionKind::Benefits => bullets(&seo.benefits),
            SectionKind::HowToUse => steps(&seo.steps),
            SectionKind::InputsExplained => bullets(&seo.inputs_explained),
            SectionKind::FormulaExplanation => paragraph(&seo.formula_explanation),
            SectionKind::ExampleScenarios => bullets(&seo.examples),
            SectionKind::UnderstandingResults => bullets(&seo.results_explanation),
            SectionKind::WhoItsFor => paragraph(&seo.who_its_for),
            SectionKind::Disclaimer => paragraph(&seo.disclaimer),
            SectionKind::RelatedTools => bullets(&seo.related_tools),
            SectionKind::Faq => {
                if seo.faqs.is_empty() {
                    None
                } else {
                    Some(SectionBody::FaqPairs(seo.faqs.clone()))
                }
            }
        };
        if let Some(body) = body {
            sections.push(Section::new(kind, locale, body));
        }
    }

    sections
}

fn paragraph(text: &str) -> Option<SectionBody> {
    if text.trim().is_empty() {
        None
    } else {
        Some(SectionBody::Paragraph(text.to_string()))
    }
}

fn bullets(items: &[String]) -> Option<SectionBody> {
    if items.is_empty() {
        None
    } else {
        Some(SectionBody::Bullets(items.to_vec()))
    }
}

fn steps(items: &[String]) -> Option<SectionBody> {
    if items.is_empty() {
        None
    } else {
        Some(SectionBody::NumberedSteps(items.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_seo() -> SeoContent {
        SeoContent::new()
            .with_introduction("Intro paragraph.")
            .with_benefits(["Benefit one", "Benefit two"])
            .with_steps(["Step one", "Step two", "Step three"])
            .with_inputs_explained(["Amount: what you borrow"])
            .with_formula_explanation("Payment follows the amortization formula.")
            .with_examples(["A $10,000 loan at 5% over 3 years"])
            .with_results_explanation(["The monthly payment includes interest"])
            .with_who_its_for("Anyone comparing loan offers.")
            .with_disclaimer("Estimates only, not financial advice.")
            .with_related_tools(["Mortgage Calculator"])
            .with_faqs([Faq::new("Is it free?", "Yes.")])
    }

    #[test]
    fn test_full_bundle_renders_all_sections_in_order() {
        let sections = render_sections(&full_seo(), Locale::En);
        assert_eq!(sections.len(), 11);
        let kinds: Vec<SectionKind> = sections.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, SectionKind::ORDER.to_vec());
    }

    #[test]
    fn test_empty_benefits_suppresses_section_and_heading() {
        let mut seo = full_seo();
        seo.benefits = Vec::new();

        let sections = render_sections(&seo, Locale::En);
        assert!(sections.iter().all(|s| s.kind != SectionKind::Benefits));
        let benefits_heading = SectionKind::Benefits.heading(Locale::En);
        assert!(sections.iter().all(|s| s.heading != benefits_heading));
    }

    #[test]
    fn test_blank_paragraph_suppresses_section() {
        let mut seo = full_seo();
        seo.who_its_for = "   ".to_string();
        seo.formula_explanation = String::new();

        let sections = render_sections(&seo, Locale::En);
        assert_eq!(sections.len(), 9);
        assert!(sections.iter().all(|s| s.kind != SectionKind::WhoItsFor));
        assert!(sections
            .iter()
            .all(|s| s.kind != SectionKind::FormulaExplanation));
    }

    #[test]
    fn test_empty_bundle_renders_nothing() {
        let sections = render_sections(&SeoContent::new(), Locale::Fr);
        assert!(sections.is_empty());
    }

    #[test]
    fn test_headings_are_localized_with_base_fallback() {
        let sections = render_sections(&full_seo(), Locale::Pt);
        assert_eq!(sections[0].heading, "Introdução");
        // FAQ heading is not localized anywhere; base string everywhere.
        let faq = sections.last().unwrap();
        assert_eq!(faq.kind, SectionKind::Faq);
        assert_eq!(faq.heading, "Frequently Asked Questions");
    }

    #[test]
    fn test_list_sections_preserve_item_order() {
        let sections = render_sections(&full_seo(), Locale::En);
        let how_to = sections
            .iter()
            .find(|s| s.kind == SectionKind::HowToUse)
            .unwrap();
        match &how_to.body {
            SectionBody::NumberedSteps(steps) => {
                assert_eq!(steps, &["Step one", "Step two", "Step three"]);
            }
            other => panic!("expected numbered steps, got {:?}", other),
        }
    }

    #[test]
    fn test_faq_pairs_stay_atomic() {
        let seo = SeoContent::new().with_faqs([
            Faq::new("Q1", "A1"),
            Faq::new("Q2", "A2"),
        ]);
        let sections = render_sections(&seo, Locale::De);
        assert_eq!(sections.len(), 1);
        match &sections[0].body {
            SectionBody::FaqPairs(pairs) => {
                assert_eq!(pairs.len(), 2);
                assert_eq!(pairs[0], Faq::new("Q1", "A1"));
            }
            other => panic!("expected FAQ pairs, got {:?}", other),
        }
    }
}
