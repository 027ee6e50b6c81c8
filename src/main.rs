//! Envo Bot CLI
//!
//! Offline front end for the transcript solver: the same code the chat
//! `.wordle` command runs, fed from files, stdin or an interactive prompt.

use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use envo_bot::ask::{self, AskContext};
use envo_bot::command::Command as ChatCommand;
use envo_bot::config::Config;
use envo_bot::quote::{self, QuoteEffect, QuoteFailure, QuotePlan};
use envo_bot::rank::{EntropyRanker, FirstCandidate, Ranker};
use envo_bot::state::StateStore;
use envo_bot::{transcript, wordle, Dictionary, FeedbackRow, Guess, Session, Solver, Word};

const BANNER_TEXT: &str = include_str!("text/banner.txt");

#[derive(Debug, Parser)]
#[command(name = "envo-bot", version, about = "Wordle transcript solver")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every word consistent with a transcript.
    Solve {
        /// Transcript file; stdin when omitted or "-".
        file: Option<PathBuf>,
    },
    /// Print one suggested word for a transcript.
    Pick {
        file: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = Strategy::Entropy)]
        strategy: Strategy,
    },
    /// Show the row a guess would get against a secret word.
    Feedback { guess: String, secret: String },
    /// Dry-run a chat command (".wordle", ".ask", ".q") or an auto-quoted message
    /// and print what the bot would do.
    Chat {
        text: String,
        /// Text of the replied-to message.
        #[arg(long)]
        reply: Option<String>,
        /// Id of the replied-to message, for auto-quotes.
        #[arg(long)]
        reply_to: Option<i64>,
        /// State file; overrides STATE_PATH.
        #[arg(long)]
        state: Option<PathBuf>,
    },
    /// Interactive session (default).
    Repl,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Strategy {
    First,
    Entropy,
}

impl Strategy {
    fn ranker(self) -> Box<dyn Ranker> {
        match self {
            Strategy::First => Box::new(FirstCandidate),
            Strategy::Entropy => Box::new(EntropyRanker),
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_transcript(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read transcript {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read transcript from stdin")?;
            Ok(text)
        }
    }
}

fn run_solve(file: Option<&PathBuf>) -> anyhow::Result<()> {
    let text = read_transcript(file)?;
    let solver = Solver::embedded();
    let guesses = transcript::parse(&text);
    let counts = solver.narrowing(&guesses);
    let words = solver.solve_transcript(&guesses);

    eprintln!(
        "{} rows parsed, {} → {}",
        guesses.len(),
        solver.dictionary().len(),
        counts
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(" → ")
    );
    for word in &words {
        println!("{word}");
    }
    if words.is_empty() {
        eprintln!("No word matches every row.");
    }
    Ok(())
}

fn run_pick(file: Option<&PathBuf>, strategy: Strategy) -> anyhow::Result<()> {
    let text = read_transcript(file)?;
    let words = Solver::embedded().solve(&text);
    let ranker = strategy.ranker();
    match ranker.rank(&words) {
        Some(word) => {
            debug!(ranker = ranker.name(), candidates = words.len(), "picked");
            println!("{word}");
            Ok(())
        }
        None => bail!("no word matches every row"),
    }
}

fn run_feedback(guess: &str, secret: &str) -> anyhow::Result<()> {
    let guess = Word::parse(guess).with_context(|| format!("invalid guess {guess:?}"))?;
    let secret = Word::parse(secret).with_context(|| format!("invalid secret {secret:?}"))?;
    println!("{} {}", FeedbackRow::calculate(&guess, &secret), guess);
    Ok(())
}

/// Chat context for a dry run.
struct ChatInput<'a> {
    text: &'a str,
    reply: Option<&'a str>,
    reply_to: Option<i64>,
    state: Option<PathBuf>,
}

fn run_chat(input: ChatInput<'_>) -> anyhow::Result<()> {
    let config = Config::from_env().context("failed to load configuration")?;
    let store = StateStore::new(input.state.unwrap_or_else(|| config.state_path.clone()));
    let mut state = store.load().context("failed to load bot state")?;

    let Some(command) = ChatCommand::parse(input.text) else {
        if quote::should_auto_quote(&state, input.text, false) {
            print_quote_plan(&config, &QuotePlan::auto(&state, input.text, input.reply_to));
            return Ok(());
        }
        bail!("not a bot command: {:?}", input.text);
    };
    match command {
        ChatCommand::Wordle(args) => match wordle::source_text(&args, input.reply) {
            Some(source) => {
                let outcome = wordle::run(&Solver::embedded(), &EntropyRanker, source);
                println!("{}", outcome.render());
            }
            None => println!("Reply to a game transcript or paste it after .wordle"),
        },
        ChatCommand::Ask(args) => {
            let ctx = AskContext {
                reply_text: input.reply.map(str::to_string),
                forwarded: false,
                configured: config.ask_configured(),
            };
            match ask::prepare(&args, &ctx) {
                Ok(prompt) => {
                    println!("{}", prompt.status_line());
                    println!("--- {}", config.gemini_model);
                    println!("{}", prompt.prompt);
                }
                Err(err) => println!("{err}"),
            }
        }
        ChatCommand::Quote(command) => match quote::apply(&mut state, command) {
            QuoteEffect::Notice(notice) => {
                store.save(&state).context("failed to save bot state")?;
                println!("{notice}");
            }
            QuoteEffect::Quote(plan) => print_quote_plan(&config, &plan),
        },
    }
    Ok(())
}

fn print_quote_plan(config: &Config, plan: &QuotePlan) {
    for request in plan.requests() {
        println!("→ {}: {request}", config.quote_bot);
    }
    println!("waiting up to {}s", config.quote_timeout.as_secs());
    match plan.on_failure() {
        QuoteFailure::Notice(notice) => println!("on failure: {notice}"),
        QuoteFailure::Restore {
            text,
            reply_to: Some(id),
        } => println!("on failure: resend {text:?} in reply to {id}"),
        QuoteFailure::Restore { text, reply_to: None } => {
            println!("on failure: resend {text:?}")
        }
    }
}

/// A pasted glyph row, or typed `<word> <row>` shorthand.
fn parse_row(line: &str) -> Option<Guess> {
    if let Some(guess) = Guess::parse_line(line) {
        return Some(guess);
    }
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [word, row] = parts.as_slice() else {
        return None;
    };
    Some(Guess::new(Word::parse(word).ok()?, FeedbackRow::parse(row)?))
}

fn print_words(words: &[Word]) {
    for (i, word) in words.iter().enumerate() {
        if i > 0 && i % 10 == 0 {
            println!();
        }
        print!("{:>8}", word);
    }
    println!();
}

fn run_interactive(dictionary: &Dictionary) -> anyhow::Result<()> {
    for line in BANNER_TEXT.lines().take(5) {
        println!("{}", line);
    }
    println!("Loaded {} words.", dictionary.len());
    println!("Type 'help' for commands.");
    println!();

    let mut session = Session::new(dictionary);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line.to_lowercase().as_str() {
            "help" | "h" | "?" => println!("{}", BANNER_TEXT),
            "quit" | "exit" | "q" => {
                println!("Goodbye!");
                break;
            }
            "reset" => {
                session.reset();
                println!("Reset. {} words available.", session.remaining_count());
            }
            "history" => {
                for (i, guess) in session.history().iter().enumerate() {
                    println!("{:>2}. {}", i + 1, guess);
                }
            }
            "remaining" | "r" | "left" => {
                println!();
                println!("Remaining possibilities: {}", session.remaining_count());
                if session.remaining_count() <= 60 {
                    print_words(session.candidates());
                }
                println!();
            }
            "pick" | "p" | "suggest" => match EntropyRanker.rank(session.candidates()) {
                Some(word) => {
                    let entropy = EntropyRanker::entropy(&word, session.candidates());
                    println!(
                        "Try {} ({:.3} bits, {} possible)",
                        word,
                        entropy,
                        session.remaining_count()
                    );
                }
                None => println!("No possible words remaining. Use 'reset' to start over."),
            },
            _ => match parse_row(line) {
                Some(guess) => {
                    let before = session.remaining_count();
                    session.apply(guess);
                    let after = session.remaining_count();
                    println!("{}  eliminated {} ({} → {})", guess, before - after, before, after);
                    if guess.feedback.is_solved() {
                        println!("🎉 Solved!");
                    } else if after == 0 {
                        println!("⚠️  No words match. Check the row for a typo, or 'reset'.");
                    } else if after <= 10 {
                        print_words(session.candidates());
                    }
                }
                None => {
                    println!("Unrecognized input: {}", line);
                    println!("Type 'help' for available commands.");
                }
            },
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Repl) {
        Command::Solve { file } => run_solve(file.as_ref()),
        Command::Pick { file, strategy } => run_pick(file.as_ref(), strategy),
        Command::Feedback { guess, secret } => run_feedback(&guess, &secret),
        Command::Chat {
            text,
            reply,
            reply_to,
            state,
        } => run_chat(ChatInput {
            text: &text,
            reply: reply.as_deref(),
            reply_to,
            state,
        }),
        Command::Repl => run_interactive(Dictionary::embedded()),
    }
}
