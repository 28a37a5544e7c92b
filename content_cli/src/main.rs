//! # Quick Calculator CLI
//!
//! Terminal preview of the content pipeline: pick a calculator and a
//! locale, and see the resolved record, the dispatched widget, the
//! rendered SEO sections, and the JSON-LD exactly as a page would
//! receive them.

use std::io::{self, BufRead, Write};

use content_core::catalog::default_registry;
use content_core::component::{ComponentRegistry, ResolvedWidget};
use content_core::locale::Locale;
use content_core::page::render_page;
use content_core::seo::SectionBody;

fn prompt_str(prompt: &str, default: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

fn main() {
    println!("Quick Calculator - Content Pipeline Preview");
    println!("===========================================");
    println!();

    let registry = default_registry();
    let components = ComponentRegistry::with_defaults();

    println!("Available calculators:");
    for summary in registry.list_by_locale(Locale::En) {
        println!(
            "  {} {:<32} [{}]{}",
            summary.icon,
            summary.slug,
            summary.category.slug(),
            if summary.featured { " featured" } else { "" }
        );
    }
    println!();

    let slug = prompt_str("Enter calculator slug [loan-calculator]: ", "loan-calculator");
    let locale_input = prompt_str("Enter locale (en/es/pt/fr/de/nl) [en]: ", "en");
    let locale = Locale::parse_or_base(&locale_input);

    println!();

    match render_page(registry, &components, &slug, locale) {
        Ok(page) => {
            println!("═══════════════════════════════════════");
            println!("  {} ({})", page.record.title, locale.native_name());
            println!("═══════════════════════════════════════");
            println!();
            println!("Category:   {}", page.record.category.display_name(locale));
            println!("Difficulty: {:?}", page.record.difficulty);
            println!("Summary:    {}", page.record.summary);
            println!();

            match &page.widget {
                ResolvedWidget::Legacy { id, .. } => {
                    println!("Widget: built-in {}", id.name());
                }
                ResolvedWidget::Generic { schema, .. } => {
                    println!(
                        "Widget: schema-driven ({} inputs, {} extra outputs)",
                        schema.inputs.len(),
                        schema.additional_outputs.len()
                    );
                }
                ResolvedWidget::NoWidget => {
                    println!("Widget: none (content-only page)");
                }
            }
            println!();

            if page.sections.is_empty() {
                println!("No SEO sections authored for this calculator.");
            } else {
                println!("Sections ({}):", page.sections.len());
                for section in &page.sections {
                    let shape = match &section.body {
                        SectionBody::Paragraph(_) => "paragraph",
                        SectionBody::Bullets(items) => {
                            if items.len() == 1 { "1 bullet" } else { "bullets" }
                        }
                        SectionBody::NumberedSteps(_) => "steps",
                        SectionBody::FaqPairs(_) => "q&a",
                    };
                    println!("  {:<40} ({})", section.heading, shape);
                }
            }

            println!();
            println!("JSON-LD:");
            match serde_json::to_string_pretty(&page.json_ld) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Error serializing JSON-LD: {}", e),
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
