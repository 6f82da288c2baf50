//! Catalog lookups that do not need the quiz.

use compass_core::{SearchKind, SearchResults};

use crate::context::Context;
use crate::output::{print_institutions, print_json, print_roadmap};
use crate::DataArgs;

pub fn roadmap(data: &DataArgs, label: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::load(data)?;
    let roadmap = ctx.matcher().roadmap_for(label);
    if json {
        print_json(&roadmap)?;
    } else {
        print_roadmap(&roadmap);
    }
    Ok(())
}

pub fn institutions(
    data: &DataArgs,
    label: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::load(data)?;
    let found = ctx.matcher().institutions_for(label);
    if json {
        print_json(&found)?;
    } else {
        print_institutions(label, &found, &ctx.config.display);
    }
    Ok(())
}

pub fn search(
    data: &DataArgs,
    query: &str,
    kind: SearchKind,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::load(data)?;
    let results = ctx.matcher().search(query, kind);
    if json {
        print_json(&results)?;
        return Ok(());
    }

    if results.is_empty() {
        println!("No {kind} matches for '{query}'.");
        return Ok(());
    }
    match results {
        SearchResults::Institutions(found) => {
            for institution in found {
                println!("{institution}");
            }
        }
        SearchResults::Courses(found) => {
            for course in found {
                println!("{course}");
            }
        }
        SearchResults::Career(roadmap) => print_roadmap(&roadmap),
    }
    Ok(())
}

pub fn notifications(data: &DataArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::load(data)?;
    let notifications = ctx.catalog().notifications();
    if notifications.is_empty() {
        println!("No notifications.");
    }
    for notification in notifications {
        println!("- {}", notification.msg);
    }
    Ok(())
}
