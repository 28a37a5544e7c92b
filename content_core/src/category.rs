//! # Calculator Categories
//!
//! The closed set of directory categories. A calculator belongs to exactly
//! one category, and the category is locale-invariant: only its display
//! name is translated. Category slugs appear in URLs
//! (`/categories/financial`) and must therefore stay stable.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Directory category for a calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Financial,
    Health,
    Math,
    Utility,
    Lifestyle,
}

impl Category {
    /// All categories in homepage display order.
    pub const ALL: [Category; 5] = [
        Category::Financial,
        Category::Health,
        Category::Math,
        Category::Utility,
        Category::Lifestyle,
    ];

    /// URL-safe category slug, locale-invariant.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Financial => "financial",
            Category::Health => "health",
            Category::Math => "math",
            Category::Utility => "utility",
            Category::Lifestyle => "lifestyle",
        }
    }

    /// Parse a category slug.
    pub fn parse(slug: &str) -> Option<Category> {
        match slug {
            "financial" => Some(Category::Financial),
            "health" => Some(Category::Health),
            "math" => Some(Category::Math),
            "utility" => Some(Category::Utility),
            "lifestyle" => Some(Category::Lifestyle),
            _ => None,
        }
    }

    /// Localized display name.
    pub fn display_name(&self, locale: Locale) -> &'static str {
        match self {
            Category::Financial => match locale {
                Locale::En => "Financial Calculators",
                Locale::Es => "Calculadoras Financieras",
                Locale::Pt => "Calculadoras Financeiras",
                Locale::Fr => "Calculateurs Financiers",
                Locale::De => "Finanzrechner",
                Locale::Nl => "Financiële Rekenmachines",
            },
            Category::Health => match locale {
                Locale::En => "Health & Fitness Calculators",
                Locale::Es => "Calculadoras de Salud y Fitness",
                Locale::Pt => "Calculadoras de Saúde e Fitness",
                Locale::Fr => "Calculateurs Santé et Fitness",
                Locale::De => "Gesundheits- und Fitnessrechner",
                Locale::Nl => "Gezondheids- en Fitnessrekenmachines",
            },
            Category::Math => match locale {
                Locale::En => "Math Calculators",
                Locale::Es => "Calculadoras Matemáticas",
                Locale::Pt => "Calculadoras Matemáticas",
                Locale::Fr => "Calculateurs Mathématiques",
                Locale::De => "Mathematikrechner",
                Locale::Nl => "Wiskundige Rekenmachines",
            },
            Category::Utility => match locale {
                Locale::En => "Utility Calculators",
                Locale::Es => "Calculadoras de Utilidad",
                Locale::Pt => "Calculadoras de Utilitários",
                Locale::Fr => "Calculateurs Utilitaires",
                Locale::De => "Werkzeugrechner",
                Locale::Nl => "Hulpprogramma Rekenmachines",
            },
            Category::Lifestyle => match locale {
                Locale::En => "Lifestyle Calculators",
                Locale::Es => "Calculadoras de Estilo de Vida",
                Locale::Pt => "Calculadoras de Estilo de Vida",
                Locale::Fr => "Calculateurs Style de Vie",
                Locale::De => "Lifestyle-Rechner",
                Locale::Nl => "Lifestyle Rekenmachines",
            },
        }
    }

    /// Short localized description for category pages and their JSON-LD.
    pub fn description(&self, locale: Locale) -> &'static str {
        match self {
            Category::Financial => match locale {
                Locale::En => "Loans, mortgages, savings, taxes, and investment calculators",
                Locale::Es => "Calculadoras de préstamos, hipotecas, ahorros, impuestos e inversiones",
                Locale::Pt => "Calculadoras de empréstimos, hipotecas, poupança, impostos e investimentos",
                Locale::Fr => "Calculateurs de prêts, hypothèques, épargne, impôts et investissements",
                Locale::De => "Rechner für Kredite, Hypotheken, Ersparnisse, Steuern und Investitionen",
                Locale::Nl => "Rekenmachines voor leningen, hypotheken, sparen, belastingen en beleggingen",
            },
            Category::Health => match locale {
                Locale::En => "BMI, calories, body composition, and fitness calculators",
                Locale::Es => "Calculadoras de IMC, calorías, composición corporal y fitness",
                Locale::Pt => "Calculadoras de IMC, calorias, composição corporal e fitness",
                Locale::Fr => "Calculateurs d'IMC, de calories, de composition corporelle et de fitness",
                Locale::De => "Rechner für BMI, Kalorien, Körperzusammensetzung und Fitness",
                Locale::Nl => "Rekenmachines voor BMI, calorieën, lichaamssamenstelling en fitness",
            },
            Category::Math => match locale {
                Locale::En => "Percentages, fractions, geometry, and statistics calculators",
                Locale::Es => "Calculadoras de porcentajes, fracciones, geometría y estadística",
                Locale::Pt => "Calculadoras de porcentagens, frações, geometria e estatística",
                Locale::Fr => "Calculateurs de pourcentages, fractions, géométrie et statistiques",
                Locale::De => "Rechner für Prozente, Brüche, Geometrie und Statistik",
                Locale::Nl => "Rekenmachines voor percentages, breuken, geometrie en statistiek",
            },
            Category::Utility => match locale {
                Locale::En => "Converters, counters, and everyday utility tools",
                Locale::Es => "Convertidores, contadores y herramientas de uso diario",
                Locale::Pt => "Conversores, contadores e ferramentas do dia a dia",
                Locale::Fr => "Convertisseurs, compteurs et outils du quotidien",
                Locale::De => "Umrechner, Zähler und Alltagswerkzeuge",
                Locale::Nl => "Omrekenaars, tellers en dagelijkse hulpmiddelen",
            },
            Category::Lifestyle => match locale {
                Locale::En => "Tips, dates, grades, and everyday life calculators",
                Locale::Es => "Calculadoras de propinas, fechas, notas y vida diaria",
                Locale::Pt => "Calculadoras de gorjetas, datas, notas e vida cotidiana",
                Locale::Fr => "Calculateurs de pourboires, dates, notes et vie quotidienne",
                Locale::De => "Rechner für Trinkgeld, Daten, Noten und den Alltag",
                Locale::Nl => "Rekenmachines voor fooien, datums, cijfers en het dagelijks leven",
            },
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// One calculator as listed on a category page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMember {
    /// Localized title
    pub name: String,
    /// Locale-invariant slug
    pub slug: String,
}

/// Everything the structured-data generator needs for a category page.
///
/// Built by [`crate::registry::ContentRegistry::category_data`] from the
/// registry's entries; name and description are already localized, member
/// slugs are not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryData {
    pub category: Category,
    pub name: String,
    pub description: String,
    pub calculators: Vec<CategoryMember>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.slug()), Some(category));
        }
        assert_eq!(Category::parse("finance"), None);
    }

    #[test]
    fn test_display_name_is_localized() {
        assert_eq!(Category::Math.display_name(Locale::En), "Math Calculators");
        assert_eq!(Category::Math.display_name(Locale::De), "Mathematikrechner");
    }

    #[test]
    fn test_serde_uses_slug_casing() {
        let json = serde_json::to_string(&Category::Lifestyle).unwrap();
        assert_eq!(json, "\"lifestyle\"");
    }
}
