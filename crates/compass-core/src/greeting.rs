//! Welcome text and the affirmation of the day.

use chrono::{Datelike, NaiveDate};

/// Short description shown by `compass about`.
pub const ABOUT: &str = indoc::indoc! {"
    Career Compass is a personalized career and education advisor.

    Answer a few questions about your interests to get a suggested course,
    a step-by-step roadmap for it, and the institutions that offer it.
"};

const AFFIRMATIONS: [&str; 5] = [
    "You are capable of amazing things.",
    "Small steps every day lead to big changes.",
    "Believe in yourself and your potential.",
    "Curiosity is your superpower. Explore.",
    "Every attempt is progress.",
];

/// The affirmation for `date`. Stable for a whole day, rotates daily.
pub fn daily_affirmation(date: NaiveDate) -> &'static str {
    let ordinal = date.num_days_from_ce().rem_euclid(AFFIRMATIONS.len() as i32);
    AFFIRMATIONS[ordinal as usize]
}

/// Greeting line for a display name.
pub fn greeting(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        "Welcome".to_string()
    } else {
        format!("Welcome, {name}")
    }
}
