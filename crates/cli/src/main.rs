#![warn(clippy::pedantic)]

mod logger;

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use liftplan_domain::{self as domain, ReadError, Service, Snapshot, SnapshotRepository};
use liftplan_storage::{JsonFile, output, snapshot::ConversionError};
use log::LevelFilter;
use serde_json::json;

#[derive(Parser)]
#[command(
    name = "liftplan",
    version,
    about = "Compile and personalize evidence-based training templates"
)]
struct Cli {
    /// Evidence snapshot (JSON). The built-in snapshot is used if omitted.
    #[arg(long, env = "LIFTPLAN_SNAPSHOT")]
    snapshot: Option<PathBuf>,

    /// Maximum level of log messages written to stderr
    #[arg(long, env = "LIFTPLAN_LOG", default_value = "warn", value_parser = parse_level)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print all templates with optimized exercise order and evidence
    Catalog,
    /// Score all templates against the answers
    Recommend(AnswerArgs),
    /// Build a guided template for the answers
    Build {
        #[command(flatten)]
        answers: AnswerArgs,
        /// Template to personalize instead of the recommended one
        #[arg(long)]
        template: Option<String>,
    },
}

#[derive(Args)]
struct AnswerArgs {
    /// Training days per week (2 to 7)
    #[arg(long, default_value_t = 3)]
    days: u8,
    /// none, upper or lower
    #[arg(long, default_value = "none")]
    focus: String,
    /// full_gym or dumbbell_only
    #[arg(long, default_value = "full_gym")]
    equipment: String,
    /// short, moderate or long
    #[arg(long, default_value = "moderate")]
    session: String,
    /// beginner, intermediate or advanced
    #[arg(long, default_value = "intermediate")]
    experience: String,
}

impl AnswerArgs {
    fn answers(&self) -> Result<domain::ProgramDesignAnswers, ConversionError> {
        output::Answers {
            days_per_week: self.days,
            focus: self.focus.clone(),
            equipment: self.equipment.clone(),
            session_length: self.session.clone(),
            experience: self.experience.clone(),
        }
        .try_into()
    }
}

fn parse_level(value: &str) -> Result<LevelFilter, String> {
    value
        .parse()
        .map_err(|_| format!("invalid log level \"{value}\""))
}

struct BuiltIn;

impl SnapshotRepository for BuiltIn {
    fn read_snapshot(&self) -> Result<Snapshot, ReadError> {
        Ok(domain::catalog::default_snapshot().clone())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.log_level).map_err(|err| anyhow!("failed to initialize logger: {err}"))?;

    let output = match &cli.snapshot {
        Some(path) => run(
            &Service::new(JsonFile::new(path))
                .with_context(|| format!("failed to load {}", path.display()))?,
            &cli.command,
        ),
        None => run(&Service::new(BuiltIn)?, &cli.command),
    }?;
    println!("{output}");

    Ok(())
}

fn run<R: SnapshotRepository>(service: &Service<R>, command: &Command) -> Result<String> {
    let value = match command {
        Command::Catalog => serde_json::to_value(
            service
                .catalog()
                .iter()
                .map(output::CompiledTemplate::from)
                .collect::<Vec<_>>(),
        )?,
        Command::Recommend(args) => {
            let answers = args.answers()?;
            json!({
                "best": service.recommend(&answers).map(|r| r.template.id.clone()),
                "templates": service
                    .rank(&answers)
                    .iter()
                    .map(output::Recommendation::from)
                    .collect::<Vec<_>>(),
            })
        }
        Command::Build { answers, template } => {
            let answers = answers.answers()?;
            let guided = match template {
                Some(id) => service.build(id, &answers)?,
                None => service.personalize(&answers)?,
            };
            serde_json::to_value(output::GuidedTemplate::from(&guided))?
        }
    };
    Ok(serde_json::to_string_pretty(&value)?)
}
