use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};
use quiz_core::Clock;
use quiz_core::model::QuestionBank;
use storage::{FileQuestionSource, QuestionSource};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    bank: Arc<QuestionBank>,
    clock: Clock,
}

impl UiApp for DesktopApp {
    fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    fn clock(&self) -> Clock {
        self.clock
    }
}

struct Args {
    questions: PathBuf,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--questions <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --questions questions.txt");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTIONS_FILE  fallback for --questions");
    eprintln!("  RUST_LOG             log filter, e.g. info or storage=debug");
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut questions = std::env::var("QUIZ_QUESTIONS_FILE")
            .map_or_else(|_| PathBuf::from("questions.txt"), PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => {
                    let value = require_value(args, "--questions")?;
                    questions = PathBuf::from(value);
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { questions })
    }
}

/// Loads questions from the given source, falling back to an empty bank so
/// the window still opens; every level then just comes up empty.
fn load_bank(source: &dyn QuestionSource) -> Arc<QuestionBank> {
    match source.load() {
        Ok(bank) => Arc::new(bank),
        Err(err) => {
            log::error!("{err}; starting with an empty question bank");
            Arc::new(QuestionBank::empty())
        }
    }
}

fn run() -> Result<(), ArgsError> {
    let mut args = std::env::args().skip(1);
    let parsed = match Args::parse(&mut args) {
        Ok(parsed) => parsed,
        Err(err) => {
            print_usage();
            return Err(err);
        }
    };

    let source = FileQuestionSource::new(parsed.questions);
    let bank = load_bank(&source);
    log::info!("loaded {} questions from {}", bank.len(), source.path().display());

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        bank,
        clock: Clock::default(),
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz Game")
            .with_inner_size(LogicalSize::new(500.0, 400.0)),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    pretty_env_logger::init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
