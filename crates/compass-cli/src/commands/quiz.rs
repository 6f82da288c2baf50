use clap::Args;
use compass_core::{
    run_quiz, InstitutionMatch, Presenter, QuizAnswer, Roadmap, ScriptedPresenter,
};
use serde::Serialize;

use crate::context::Context;
use crate::output::{print_institutions, print_json, print_roadmap};
use crate::presenter::TerminalPresenter;
use crate::DataArgs;

#[derive(Args)]
pub struct QuizArgs {
    /// Answer with these options instead of prompting (comma-separated)
    #[arg(long, value_delimiter = ',')]
    answers: Option<Vec<String>>,
    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct QuizOutcome<'a> {
    session: &'a str,
    label: &'a str,
    answers: &'a [QuizAnswer],
    roadmap: &'a Roadmap,
    institutions: &'a [InstitutionMatch],
}

pub fn run(data: &DataArgs, args: QuizArgs) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::load(data)?;
    let engine = ctx.engine()?;
    let mut session = engine.new_session();

    let mut presenter: Box<dyn Presenter> = match args.answers {
        Some(answers) => Box::new(ScriptedPresenter::new(
            answers.into_iter().map(|a| a.trim().to_string()),
        )),
        // Keep stdout clean for the JSON document.
        None if args.json => Box::new(TerminalPresenter::new(
            std::io::stdin().lock(),
            std::io::stderr(),
        )),
        None => Box::new(TerminalPresenter::new(
            std::io::stdin().lock(),
            std::io::stdout(),
        )),
    };
    let label = run_quiz(&engine, &mut session, presenter.as_mut())?;

    let matcher = ctx.matcher();
    let roadmap = matcher.roadmap_for(&label);
    let institutions = matcher.institutions_for(&label);

    if args.json {
        print_json(&QuizOutcome {
            session: &session.id,
            label: &label,
            answers: session.answers(),
            roadmap: &roadmap,
            institutions: &institutions,
        })?;
        return Ok(());
    }

    println!();
    println!("Based on your answers, we suggest: {label}");
    println!();
    print_roadmap(&roadmap);
    println!();
    print_institutions(&label, &institutions, &ctx.config.display);
    Ok(())
}
