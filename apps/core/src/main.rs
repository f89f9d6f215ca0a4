// SecMentor entry point
// Maps free-text student questions onto the six study commands.

mod brain;
mod error;
mod fs_manager;
mod history;
mod knowledge;
mod models;

#[cfg(test)]
mod tests;

use anyhow::bail;
use chrono::Utc;
use clap::{CommandFactory, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use brain::{is_natural_language, Advisor, Command, ParsedIntent};
use history::CommandHistory;
use knowledge::KnowledgeBase;
use models::{Advice, AdviceEnvelope};

#[derive(Parser)]
#[command(
    name = "secmentor",
    version,
    about = "Beginner-friendly security study companion",
    args_conflicts_with_subcommands = true,
    after_help = "Examples:\n  \
        secmentor \"how do I scan ports?\"\n  \
        secmentor explain 'nmap -sV'\n  \
        secmentor tip 'sql injection'\n  \
        secmentor plan 'found open port 8080'"
)]
struct Cli {
    /// Free-form question, e.g. "how do I scan ports?"
    query: Vec<String>,

    /// Print a JSON envelope instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Learn what a command and its flags do
    Explain { text: Vec<String> },
    /// Study guide for a security topic
    Tip { text: Vec<String> },
    /// Troubleshoot an error or issue
    Assist { text: Vec<String> },
    /// Practice writing a 2-3 line finding report
    Report { text: Vec<String> },
    /// Flashcards for active recall
    Quiz { text: Vec<String> },
    /// Next-steps guidance for a scenario
    Plan { text: Vec<String> },
    /// Show or manage the session history
    History {
        /// Delete all stored history
        #[arg(long)]
        clear: bool,
        /// Only show entries containing this text
        #[arg(long)]
        search: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let advisor = Advisor::new(KnowledgeBase::curated());
    let mut history = CommandHistory::open_default();

    match cli.command {
        Some(CliCommand::History { clear, search }) => run_history(&mut history, clear, search),
        Some(command) => {
            let (command, text) = match command {
                CliCommand::Explain { text } => (Command::Explain, text),
                CliCommand::Tip { text } => (Command::Tip, text),
                CliCommand::Assist { text } => (Command::Assist, text),
                CliCommand::Report { text } => (Command::Report, text),
                CliCommand::Quiz { text } => (Command::Quiz, text),
                CliCommand::Plan { text } => (Command::Plan, text),
                CliCommand::History { .. } => unreachable!("handled above"),
            };
            let input = text.join(" ");
            if input.trim().is_empty() {
                bail!(
                    "Missing argument for '{}'. Example: secmentor {}",
                    command,
                    usage_example(command)
                );
            }
            run_command(&advisor, &mut history, command, &input, cli.json)
        }
        None => {
            let input = cli.query.join(" ");
            if input.trim().is_empty() {
                Cli::command().print_help()?;
                return Ok(());
            }
            run_query(&advisor, &mut history, &input, cli.json)
        }
    }
}

/// Direct command invocation: the text is the topic, no classification.
fn run_command(
    advisor: &Advisor,
    history: &mut CommandHistory,
    command: Command,
    input: &str,
    json: bool,
) -> anyhow::Result<()> {
    let advice = advisor.advise(command, input);
    record(history, command, input);
    print_advice(&advice, input, json)
}

/// Free-form invocation: classify natural language, treat anything else as
/// a literal explain lookup.
fn run_query(
    advisor: &Advisor,
    history: &mut CommandHistory,
    input: &str,
    json: bool,
) -> anyhow::Result<()> {
    let intent = if is_natural_language(input) {
        let intent = advisor.classify(input);
        eprintln!("{}", intent.suggestion());
        intent
    } else {
        ParsedIntent {
            command: Command::Explain,
            topic: input.to_string(),
        }
    };

    let advice = advisor.advise(intent.command, &intent.topic);
    debug!(
        command = %advice.command,
        matched = advice.matched_key.as_deref().unwrap_or("-"),
        score = advice.score,
        fallback = advice.fallback,
        "retrieval complete"
    );

    record(history, intent.command, &intent.topic);
    print_advice(&advice, input, json)
}

fn run_history(
    history: &mut CommandHistory,
    clear: bool,
    search: Option<String>,
) -> anyhow::Result<()> {
    if clear {
        history.clear()?;
        println!("History cleared.");
        return Ok(());
    }

    let entries: Vec<&str> = match &search {
        Some(query) => history.search(query),
        None => history.entries().iter().map(String::as_str).collect(),
    };

    if entries.is_empty() {
        println!("No history yet.");
    } else {
        for entry in entries {
            println!("{}", entry);
        }
    }
    Ok(())
}

/// History recording is best-effort; a failed write never blocks an answer.
fn record(history: &mut CommandHistory, command: Command, topic: &str) {
    let line = format!("{} {}", command, topic);
    if let Err(err) = history.add(line.trim()) {
        debug!("Failed to record history: {}", err);
    }
}

fn print_advice(advice: &Advice, input: &str, json: bool) -> anyhow::Result<()> {
    let json_mode = json || std::env::var("SECMENTOR_JSON").as_deref() == Ok("1");

    if json_mode {
        let envelope = AdviceEnvelope {
            kind: advice.command.name(),
            input,
            output: &advice.text,
            ts: Utc::now(),
        };
        println!("{}", serde_json::to_string(&envelope)?);
    } else {
        println!("{}", advice.text);
    }
    Ok(())
}

fn usage_example(command: Command) -> &'static str {
    match command {
        Command::Explain => "explain 'nmap -sV'",
        Command::Tip => "tip 'sql injection'",
        Command::Assist => "assist 'connection refused'",
        Command::Report => "report 'found XSS in login'",
        Command::Quiz => "quiz 'nmap'",
        Command::Plan => "plan 'found open port 8080'",
    }
}
