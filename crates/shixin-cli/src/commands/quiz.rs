use std::io::{self, BufRead, Write};

use clap::Subcommand;
use shixin_core::{
    default_questions, max_score, AdviceResolver, AdviceResult, Config, LikertScore, Question,
    QuizSession,
};

#[derive(Subcommand)]
pub enum QuizAction {
    /// Run the quiz interactively and print the consultation
    Start {
        /// Skip the remote consultation and use bundled counsel
        #[arg(long)]
        offline: bool,
        /// Print the consultation as JSON instead of prose
        #[arg(long)]
        json: bool,
    },
    /// List the bundled questions
    Questions,
}

pub fn run(action: QuizAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        QuizAction::Start { offline, json } => start(offline, json),
        QuizAction::Questions => questions(),
    }
}

fn questions() -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(&default_questions())?;
    println!("{json}");
    Ok(())
}

fn start(offline: bool, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = QuizSession::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Welcome to Shixin. Answer how often each statement is true for you.");
    for score in LikertScore::ALL {
        println!("  {} = {}", score.points(), score.label());
    }
    println!("Type b to go back one question, q to leave.");
    println!();

    while let Some(question) = session.current_question().cloned() {
        let progress = session.progress();
        print!(
            "[{}/{}] {}\n> ",
            progress.current_index + 1,
            progress.total_questions,
            question.text
        );
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Err("input closed before the quiz finished".into());
        };
        let input = line?;

        match input.trim() {
            "q" => {
                println!("Left the clinic early. Nothing was recorded.");
                return Ok(());
            }
            "b" => {
                if session.go_back()?.is_none() {
                    println!("Already at the first question.");
                }
            }
            other => {
                match other
                    .parse::<u8>()
                    .ok()
                    .and_then(|raw| LikertScore::try_from(raw).ok())
                {
                    Some(score) => {
                        session.record_answer(question.id, score)?;
                    }
                    None => println!("Please answer 1-5, b to go back, or q to leave."),
                }
            }
        }
    }

    let result = resolve(&session, offline)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render(&result, session.questions());
    }
    Ok(())
}

fn resolve(
    session: &QuizSession,
    offline: bool,
) -> Result<AdviceResult, Box<dyn std::error::Error>> {
    let resolver = if offline {
        AdviceResolver::offline()
    } else {
        AdviceResolver::from_config(&Config::load_or_default())
    };
    if !offline && !resolver.has_remote() {
        eprintln!("no API credential found, using bundled counsel (see: shixin auth login)");
    }

    let scores = session.score();
    let dominant = scores.dominant();
    let runtime = tokio::runtime::Runtime::new()?;
    Ok(runtime.block_on(resolver.resolve(scores, dominant)))
}

fn render(result: &AdviceResult, questions: &[Question]) {
    let doll = result.dominant_category.doll();

    println!();
    println!("{}", "─".repeat(60));
    println!("{}", doll.name);
    println!("{}", doll.description);
    println!("{}", "─".repeat(60));
    println!();

    for (category, score) in result.scores.iter() {
        let count = questions.iter().filter(|q| q.category == category).count();
        let ceiling = max_score(count).max(1);
        let filled = (score * 24 / ceiling) as usize;
        println!(
            "{:<18} {:>3}/{:<3} {}{}",
            category.label(),
            score,
            ceiling,
            "#".repeat(filled),
            "-".repeat(24 - filled),
        );
    }

    println!();
    println!("{}", result.advice);
    println!();
    println!("Start today:");
    for (index, item) in result.action_items.iter().enumerate() {
        println!("  {}. {item}", index + 1);
    }
    println!();
}
