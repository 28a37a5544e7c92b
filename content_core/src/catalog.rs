//! # Seed Catalog
//!
//! The developer-authored calculator entries the directory ships with.
//! Everything here is static data: base-locale records authored complete
//! in English, partial overrides for the other locales, and one component
//! binding per entry. The default registry is built exactly once.
//!
//! Locale coverage is deliberately uneven, matching the copy deck:
//! `es`/`pt`/`fr` overrides are common, `de`/`nl` exist only on some
//! entries, and several overrides carry no SEO bundle at all; those
//! locales serve the base bundle via field fallback.

use once_cell::sync::Lazy;

use crate::category::Category;
use crate::component::{ComponentBinding, InputSpec, OutputFormat, OutputSpec, WidgetSchema};
use crate::locale::Locale;
use crate::record::{Difficulty, Faq, LocaleOverride, LocaleRecord, SeoContent};
use crate::registry::{CalculatorEntry, ContentRegistry};

static DEFAULT_REGISTRY: Lazy<ContentRegistry> = Lazy::new(|| {
    // Catalog errors are configuration errors; dying at startup is the
    // contract.
    ContentRegistry::build(default_entries()).expect("seed catalog is internally consistent")
});

/// The registry built from the seed catalog.
pub fn default_registry() -> &'static ContentRegistry {
    &DEFAULT_REGISTRY
}

/// All seed entries, one per shipped calculator.
pub fn default_entries() -> Vec<CalculatorEntry> {
    vec![
        loan_calculator(),
        mortgage_calculator(),
        compound_interest_calculator(),
        bmi_calculator(),
        tip_calculator(),
        percentage_calculator(),
        age_calculator(),
        word_counter(),
    ]
}

// ============================================================================
// Financial
// ============================================================================

fn loan_calculator() -> CalculatorEntry {
    let base = LocaleRecord::new("loan-calculator", Category::Financial, "Loan Calculator")
        .with_seo_title("Loan Calculator - Monthly Payment & Total Interest")
        .with_meta_description(
            "Calculate monthly loan payments, total interest, and total cost for any loan amount, rate, and term.",
        )
        .with_keywords(["loan calculator", "monthly payment", "loan interest"])
        .with_difficulty(Difficulty::Basic)
        .with_summary("Calculate monthly payments and total interest for any loan")
        .with_description(
            "Enter a loan amount, interest rate, and term to see the monthly payment, \
             the total interest you will pay, and the total cost of the loan.",
        )
        .with_instructions([
            "Enter the loan amount you plan to borrow",
            "Enter the annual interest rate quoted by your lender",
            "Enter the loan term in months",
            "Review the monthly payment and total interest",
        ])
        .with_examples(["A $10,000 loan at 6% over 36 months costs $304.22 per month"])
        .with_related_slugs(["mortgage-calculator", "compound-interest-calculator"])
        .with_seo(
            SeoContent::new()
                .with_introduction(
                    "A loan calculator estimates your monthly payment from three numbers: \
                     how much you borrow, the interest rate, and how long you take to repay.",
                )
                .with_benefits([
                    "Save money by comparing loan offers before you sign",
                    "Plan ahead with a realistic monthly budget",
                    "See how much of the total cost is interest",
                ])
                .with_steps([
                    "Enter the loan amount",
                    "Enter the annual interest rate",
                    "Enter the term in months",
                    "Read the monthly payment and the totals below it",
                ])
                .with_inputs_explained([
                    "Loan amount: the principal you borrow, before any interest",
                    "Interest rate: the annual rate; the calculator divides it into monthly periods",
                    "Term: the number of monthly payments",
                ])
                .with_formula_explanation(
                    "The monthly payment follows the standard amortization formula: \
                     P × r × (1 + r)^n / ((1 + r)^n − 1), where P is the principal, \
                     r the monthly rate, and n the number of payments.",
                )
                .with_examples([
                    "A $10,000 loan at 6% for 36 months: $304.22 per month, $951.90 total interest",
                    "A $25,000 loan at 8% for 60 months: $506.91 per month, $5,414.59 total interest",
                ])
                .with_results_explanation([
                    "Monthly payment: what you pay every month, principal plus interest",
                    "Total interest: everything you pay beyond the principal",
                    "Total paid: principal plus total interest",
                ])
                .with_who_its_for(
                    "Anyone comparing personal loans, car loans, or any fixed-rate installment loan.",
                )
                .with_disclaimer(
                    "Results are estimates for comparison only and do not constitute financial advice. \
                     Your lender's exact terms may differ.",
                )
                .with_related_tools(["Mortgage Calculator", "Compound Interest Calculator"])
                .with_faqs([
                    Faq::new(
                        "What is a mortgage?",
                        "A mortgage is a loan secured by real estate; use the mortgage calculator for taxes and insurance.",
                    ),
                    Faq::new(
                        "Does the calculator include fees?",
                        "No. Origination fees and insurance are not included; add them to the principal for a rough estimate.",
                    ),
                ]),
        );

    let es = LocaleOverride::new()
        .with_title("Calculadora de Préstamos")
        .with_seo_title("Calculadora de Préstamos - Pago Mensual e Intereses")
        .with_meta_description(
            "Calcule pagos mensuales, interés total y costo total para cualquier préstamo.",
        )
        .with_summary("Calcule pagos mensuales e intereses totales de cualquier préstamo")
        .with_instructions([
            "Ingrese el monto del préstamo",
            "Ingrese la tasa de interés anual",
            "Ingrese el plazo en meses",
            "Revise el pago mensual y el interés total",
        ])
        .with_seo(
            SeoContent::new()
                .with_introduction(
                    "Una calculadora de préstamos estima su pago mensual a partir de tres números: \
                     cuánto pide prestado, la tasa de interés y el plazo de pago.",
                )
                .with_benefits([
                    "Ahorre dinero comparando ofertas antes de firmar",
                    "Planifique con un presupuesto mensual realista",
                ])
                .with_steps([
                    "Ingrese el monto del préstamo",
                    "Ingrese la tasa de interés anual",
                    "Ingrese el plazo en meses",
                ])
                .with_formula_explanation(
                    "El pago mensual sigue la fórmula estándar de amortización: \
                     P × r × (1 + r)^n / ((1 + r)^n − 1).",
                )
                .with_who_its_for(
                    "Cualquier persona que compare préstamos personales o de auto a tasa fija.",
                )
                .with_disclaimer(
                    "Los resultados son estimaciones y no constituyen asesoramiento financiero.",
                )
                .with_faqs([Faq::new(
                    "¿Incluye comisiones la calculadora?",
                    "No. Las comisiones de apertura no están incluidas.",
                )]),
        );

    let fr = LocaleOverride::new()
        .with_title("Calculateur de Prêt")
        .with_summary("Calculez les mensualités et les intérêts totaux de tout prêt");

    let pt = LocaleOverride::new()
        .with_title("Calculadora de Empréstimos")
        .with_summary("Calcule pagamentos mensais e juros totais de qualquer empréstimo");

    CalculatorEntry::new(
        "loan-calculator",
        Category::Financial,
        base,
        ComponentBinding::schema(
            WidgetSchema::new(
                vec![
                    InputSpec::number("loanAmount", "Loan Amount ($)")
                        .with_default(serde_json::json!(10000))
                        .with_range(0.0, 10_000_000.0),
                    InputSpec::number("interestRate", "Annual Interest Rate (%)")
                        .with_default(serde_json::json!(6.0))
                        .with_step(0.01),
                    InputSpec::number("loanTerm", "Loan Term (Months)")
                        .with_default(serde_json::json!(36))
                        .with_range(1.0, 600.0),
                ],
                OutputSpec::new("Monthly Payment", OutputFormat::Currency)
                    .with_field("monthlyPayment"),
            )
            .with_additional_outputs([
                OutputSpec::new("Total Interest", OutputFormat::Currency)
                    .with_field("totalInterest"),
                OutputSpec::new("Total Paid", OutputFormat::Currency).with_field("totalPaid"),
            ]),
        ),
    )
    .with_override(Locale::Es, es)
    .with_override(Locale::Fr, fr)
    .with_override(Locale::Pt, pt)
    .featured()
}

fn mortgage_calculator() -> CalculatorEntry {
    let base = LocaleRecord::new("mortgage-calculator", Category::Financial, "Mortgage Calculator")
        .with_seo_title("Mortgage Calculator - Monthly Payment with Taxes & Insurance")
        .with_meta_description(
            "Estimate monthly mortgage payments including principal, interest, property taxes, and insurance.",
        )
        .with_keywords(["mortgage calculator", "home loan", "monthly payment"])
        .with_difficulty(Difficulty::Intermediate)
        .with_summary("Estimate monthly mortgage payments including taxes and insurance")
        .with_description(
            "Estimate the full monthly cost of a home loan: principal and interest from the \
             amortization schedule, plus property taxes and homeowner's insurance.",
        )
        .with_instructions([
            "Enter the home price and your down payment",
            "Enter the interest rate and the loan term",
            "Optionally add yearly property tax and insurance",
        ])
        .with_examples(["A $300,000 home with 20% down at 6.5% over 30 years costs about $1,517 per month before taxes"])
        .with_related_slugs(["loan-calculator", "compound-interest-calculator"])
        .with_seo(
            SeoContent::new()
                .with_introduction(
                    "A mortgage calculator breaks a home loan into the payment you will \
                     actually make each month, including escrow items lenders collect.",
                )
                .with_benefits([
                    "Understand what price range you can actually afford",
                    "See how the down payment changes the monthly cost",
                ])
                .with_steps([
                    "Enter the home price",
                    "Enter the down payment",
                    "Enter the rate and term",
                    "Add taxes and insurance for the full picture",
                ])
                .with_formula_explanation(
                    "Principal and interest follow the amortization formula; taxes and \
                     insurance are divided by twelve and added on top.",
                )
                .with_results_explanation([
                    "Principal & interest: the loan payment itself",
                    "Taxes & insurance: the escrow portion of the monthly bill",
                ])
                .with_disclaimer(
                    "Estimates only. Rates, taxes, and insurance premiums vary by lender and location.",
                )
                .with_faqs([Faq::new(
                    "What is PMI?",
                    "Private mortgage insurance, usually required when the down payment is under 20%.",
                )]),
        );

    let es = LocaleOverride::new()
        .with_title("Calculadora de Hipotecas")
        .with_summary("Estime pagos hipotecarios mensuales con impuestos y seguro")
        .with_meta_description(
            "Estime pagos hipotecarios mensuales incluyendo capital, intereses, impuestos y seguro.",
        );

    let pt = LocaleOverride::new()
        .with_title("Calculadora de Hipoteca")
        .with_summary("Estime pagamentos mensais de hipoteca com impostos e seguro");

    CalculatorEntry::new(
        "mortgage-calculator",
        Category::Financial,
        base,
        ComponentBinding::named("MortgageCalculator"),
    )
    .with_override(Locale::Es, es)
    .with_override(Locale::Pt, pt)
    .featured()
}

fn compound_interest_calculator() -> CalculatorEntry {
    let base = LocaleRecord::new(
        "compound-interest-calculator",
        Category::Financial,
        "Compound Interest Calculator",
    )
    .with_seo_title("Compound Interest Calculator - Investment Growth Over Time")
    .with_meta_description(
        "Calculate how an investment grows with compound interest at any rate, period, and compounding frequency.",
    )
    .with_keywords(["compound interest", "investment growth"])
    .with_difficulty(Difficulty::Basic)
    .with_summary("See how investments grow with compound interest")
    .with_description(
        "Compound interest pays interest on interest. Enter a principal, a rate, and a \
         period to see the final balance and how much of it is growth.",
    )
    .with_instructions([
        "Enter the initial investment",
        "Enter the annual interest rate",
        "Enter the time period in years",
        "Pick a compounding frequency",
    ])
    .with_related_slugs(["loan-calculator", "mortgage-calculator"])
    .with_seo(
        SeoContent::new()
            .with_introduction(
                "Compound interest grows a balance faster than simple interest because each \
                 period's interest itself starts earning.",
            )
            .with_benefits(["See the long-term effect of small rate differences"])
            .with_steps([
                "Enter principal, rate, and years",
                "Choose how often interest compounds",
            ])
            .with_formula_explanation(
                "The final amount is A = P (1 + r/n)^(n·t): principal P, annual rate r, \
                 n compounding periods per year, t years.",
            )
            .with_examples(["$5,000 at 7% compounded monthly for 10 years grows to $10,048"])
            .with_disclaimer("Projections assume a constant rate; real returns vary."),
    );

    let es = LocaleOverride::new()
        .with_title("Calculadora de Interés Compuesto")
        .with_summary("Vea cómo crecen las inversiones con interés compuesto");

    CalculatorEntry::new(
        "compound-interest-calculator",
        Category::Financial,
        base,
        ComponentBinding::named("CompoundInterestCalculator"),
    )
    .with_override(Locale::Es, es)
}

// ============================================================================
// Health
// ============================================================================

fn bmi_calculator() -> CalculatorEntry {
    let base = LocaleRecord::new("bmi-calculator", Category::Health, "BMI Calculator")
        .with_seo_title("BMI Calculator - Body Mass Index & Healthy Range")
        .with_meta_description(
            "Calculate your Body Mass Index from height and weight and see which category it falls in.",
        )
        .with_keywords(["bmi calculator", "body mass index"])
        .with_difficulty(Difficulty::Basic)
        .with_summary("Calculate your Body Mass Index and health category")
        .with_description(
            "BMI relates weight to height with a single number used to screen for weight \
             categories: underweight, normal, overweight, and obese.",
        )
        .with_instructions([
            "Enter your height",
            "Enter your weight",
            "Read your BMI and its category",
        ])
        .with_related_slugs(["tip-calculator"])
        .with_seo(
            SeoContent::new()
                .with_introduction(
                    "The Body Mass Index is weight in kilograms divided by the square of \
                     height in meters, a quick screening value used worldwide.",
                )
                .with_benefits(["Check where you fall in the standard weight categories"])
                .with_steps(["Enter your height in centimeters", "Enter your weight in kilograms"])
                .with_formula_explanation("BMI = weight (kg) / height² (m²).")
                .with_results_explanation([
                    "Below 18.5: underweight",
                    "18.5 to 24.9: normal weight",
                    "25 to 29.9: overweight",
                    "30 and above: obese",
                ])
                .with_who_its_for("Adults looking for a quick screening value, not a diagnosis.")
                .with_disclaimer(
                    "BMI is a screening tool, not a medical diagnosis. Consult a healthcare \
                     professional for personal advice.",
                )
                .with_faqs([Faq::new(
                    "Is BMI accurate for athletes?",
                    "Muscle mass raises BMI without raising body fat, so athletes often read high.",
                )]),
        );

    let es = LocaleOverride::new()
        .with_title("Calculadora de IMC")
        .with_summary("Calcule su Índice de Masa Corporal y su categoría de salud");

    let pt = LocaleOverride::new()
        .with_title("Calculadora de IMC")
        .with_summary("Calcule seu Índice de Massa Corporal e categoria de saúde");

    // One of the few entries with German coverage.
    let de = LocaleOverride::new()
        .with_title("BMI-Rechner")
        .with_summary("Berechnen Sie Ihren Body-Mass-Index und Ihre Gesundheitskategorie");

    CalculatorEntry::new(
        "bmi-calculator",
        Category::Health,
        base,
        ComponentBinding::named("BMICalculator"),
    )
    .with_override(Locale::Es, es)
    .with_override(Locale::Pt, pt)
    .with_override(Locale::De, de)
    .featured()
}

// ============================================================================
// Math
// ============================================================================

fn percentage_calculator() -> CalculatorEntry {
    let base = LocaleRecord::new("percentage-calculator", Category::Math, "Percentage Calculator")
        .with_seo_title("Percentage Calculator - Percent Of, Change & Ratio")
        .with_meta_description(
            "Calculate percentages: X% of Y, what percent X is of Y, and percentage change between two values.",
        )
        .with_keywords(["percentage calculator", "percent of", "percentage change"])
        .with_difficulty(Difficulty::Basic)
        .with_summary("Calculate percent of a number, percentage change, and ratios")
        .with_description(
            "Three percentage questions in one tool: what is X% of Y, X is what percent of Y, \
             and the percentage change from X to Y.",
        )
        .with_instructions([
            "Pick the calculation type",
            "Enter the two values",
            "Read the result",
        ])
        .with_seo(
            SeoContent::new()
                .with_introduction("Percentages express one number as a fraction of another, per hundred.")
                .with_steps(["Choose the question you are asking", "Enter both values"])
                .with_formula_explanation(
                    "X% of Y is (X / 100) × Y; percentage change from X to Y is ((Y − X) / X) × 100.",
                )
                .with_examples(["15% of 80 is 12", "The change from 50 to 65 is +30%"]),
        );

    let es = LocaleOverride::new()
        .with_title("Calculadora de Porcentajes")
        .with_summary("Calcule el porcentaje de un número, cambios porcentuales y proporciones");

    CalculatorEntry::new(
        "percentage-calculator",
        Category::Math,
        base,
        ComponentBinding::schema(
            WidgetSchema::new(
                vec![
                    InputSpec::select(
                        "calculationType",
                        "Calculation",
                        ["percentageOf", "whatPercent", "percentageChange"],
                    ),
                    InputSpec::number("value1", "First Value").with_default(serde_json::json!(15)),
                    InputSpec::number("value2", "Second Value").with_default(serde_json::json!(80)),
                ],
                OutputSpec::new("Result", OutputFormat::Number).with_field("result"),
            ),
        ),
    )
    .with_override(Locale::Es, es)
}

// ============================================================================
// Lifestyle
// ============================================================================

fn tip_calculator() -> CalculatorEntry {
    let base = LocaleRecord::new("tip-calculator", Category::Lifestyle, "Tip Calculator")
        .with_seo_title("Tip Calculator - Split the Bill with Tip")
        .with_meta_description(
            "Calculate the tip and split the bill between any number of people.",
        )
        .with_keywords(["tip calculator", "split bill"])
        .with_difficulty(Difficulty::Basic)
        .with_summary("Calculate tips and split the bill per person")
        .with_description(
            "Enter the bill, pick a tip percentage, and split the total across the table.",
        )
        .with_instructions([
            "Enter the bill amount",
            "Pick the tip percentage",
            "Enter the number of people",
        ])
        .with_related_slugs(["percentage-calculator"])
        .with_seo(
            SeoContent::new()
                .with_introduction("A tip calculator answers the two questions at the end of a meal: how much to tip, and what each person owes.")
                .with_steps(["Enter the bill", "Pick a tip percentage", "Split by headcount"])
                .with_examples(["$84.50 with 18% tip split four ways: $24.93 each"]),
        );

    let es = LocaleOverride::new()
        .with_title("Calculadora de Propinas")
        .with_summary("Calcule propinas y divida la cuenta por persona");

    let fr = LocaleOverride::new()
        .with_title("Calculateur de Pourboire")
        .with_summary("Calculez le pourboire et partagez l'addition par personne");

    CalculatorEntry::new(
        "tip-calculator",
        Category::Lifestyle,
        base,
        ComponentBinding::named("TipCalculator"),
    )
    .with_override(Locale::Es, es)
    .with_override(Locale::Fr, fr)
}

fn age_calculator() -> CalculatorEntry {
    let base = LocaleRecord::new("age-calculator", Category::Lifestyle, "Age Calculator")
        .with_seo_title("Age Calculator - Exact Age in Years, Months & Days")
        .with_meta_description(
            "Calculate exact age between two dates in years, months, and days.",
        )
        .with_keywords(["age calculator", "date difference"])
        .with_difficulty(Difficulty::Basic)
        .with_summary("Calculate exact age between two dates")
        .with_description(
            "Find the exact span between a birth date and any other date, broken into years, \
             months, and days.",
        )
        .with_instructions(["Enter the birth date", "Enter the date to measure against"]);

    // Dutch coverage exists only here and nowhere else.
    let nl = LocaleOverride::new()
        .with_title("Leeftijdscalculator")
        .with_summary("Bereken de exacte leeftijd tussen twee datums");

    CalculatorEntry::new(
        "age-calculator",
        Category::Lifestyle,
        base,
        ComponentBinding::named("AgeCalculator"),
    )
    .with_override(Locale::Nl, nl)
}

// ============================================================================
// Utility
// ============================================================================

fn word_counter() -> CalculatorEntry {
    let base = LocaleRecord::new("word-counter", Category::Utility, "Word Counter")
        .with_seo_title("Word Counter - Words, Characters & Reading Time")
        .with_meta_description(
            "Count words, characters, sentences, and estimated reading time for any text.",
        )
        .with_keywords(["word counter", "character count"])
        .with_difficulty(Difficulty::Basic)
        .with_summary("Count words, characters, sentences, and reading time")
        .with_description(
            "Paste any text to count its words, characters, and sentences, with an estimated \
             reading time at average pace.",
        )
        .with_instructions(["Paste or type your text", "Read the counts below the field"]);

    let es = LocaleOverride::new()
        .with_title("Contador de Palabras")
        .with_summary("Cuente palabras, caracteres, oraciones y tiempo de lectura");

    CalculatorEntry::new(
        "word-counter",
        Category::Utility,
        base,
        ComponentBinding::named("WordCounter"),
    )
    .with_override(Locale::Es, es)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ResolvedWidget;
    use crate::component::ComponentRegistry;

    #[test]
    fn test_default_catalog_builds() {
        let registry = default_registry();
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn test_every_entry_resolves_for_every_locale() {
        let registry = default_registry();
        let slugs: Vec<String> = registry.slugs().map(str::to_string).collect();
        for slug in &slugs {
            for locale in Locale::ALL {
                let record = registry.resolve(slug, locale).unwrap();
                assert_eq!(&record.slug, slug);
                assert!(!record.title.is_empty(), "{} has no title for {}", slug, locale);
                assert!(!record.summary.is_empty(), "{} has no summary for {}", slug, locale);
            }
        }
    }

    #[test]
    fn test_catalog_bindings_all_dispatch() {
        // Every seed binding resolves to an interactive widget; the
        // NoWidget path is reserved for content ahead of implementation.
        let registry = default_registry();
        let components = ComponentRegistry::with_defaults();
        for slug in registry.slugs() {
            let entry = registry.get_by_slug(slug).unwrap();
            let widget = components.resolve(&entry.binding, Locale::En);
            assert!(
                !matches!(widget, ResolvedWidget::NoWidget),
                "{} has no widget",
                slug
            );
        }
    }

    #[test]
    fn test_narrow_locale_coverage_falls_back() {
        let registry = default_registry();
        // de override exists for the BMI calculator only.
        let de_bmi = registry.resolve("bmi-calculator", Locale::De).unwrap();
        assert_eq!(de_bmi.title, "BMI-Rechner");
        let de_tip = registry.resolve("tip-calculator", Locale::De).unwrap();
        assert_eq!(de_tip.title, "Tip Calculator");
    }

    #[test]
    fn test_spanish_loan_keeps_base_slug_and_category() {
        let registry = default_registry();
        let es = registry.resolve("loan-calculator", Locale::Es).unwrap();
        assert_eq!(es.slug, "loan-calculator");
        assert_eq!(es.category, Category::Financial);
        assert_eq!(es.title, "Calculadora de Préstamos");
        // The es override ships its own SEO bundle; it replaces the base
        // bundle wholesale.
        assert_eq!(es.seo.as_ref().unwrap().faqs.len(), 1);
    }

    #[test]
    fn test_related_slugs_point_at_registered_entries() {
        let registry = default_registry();
        for slug in registry.slugs() {
            let record = registry.resolve(slug, Locale::En).unwrap();
            for related in &record.related_slugs {
                assert!(
                    registry.get_by_slug(related).is_some(),
                    "{} links to unregistered {}",
                    slug,
                    related
                );
            }
        }
    }
}
