//! Plain-text rendering shared by commands.

use compass_core::storage::DisplayConfig;
use compass_core::{InstitutionMatch, Roadmap};

pub fn print_roadmap(roadmap: &Roadmap) {
    let heading = if roadmap.is_generic() {
        "General roadmap"
    } else {
        "Roadmap"
    };
    println!("{heading} for {}:", roadmap.label);
    for step in &roadmap.steps {
        println!("  - {step}");
    }
}

pub fn print_institutions(label: &str, found: &[InstitutionMatch], display: &DisplayConfig) {
    if found.is_empty() {
        println!("No institutions found offering {label}.");
        return;
    }
    println!("Institutions offering {label}:");
    for institution in found {
        let line = if display.show_locations {
            institution.to_string()
        } else {
            institution.name.clone()
        };
        if display.show_matched_courses && !institution.matched_courses.is_empty() {
            println!("  - {line} [{}]", institution.matched_courses.join(", "));
        } else {
            println!("  - {line}");
        }
    }
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
