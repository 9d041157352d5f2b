mod profile;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rowforge_core::{Error as CoreError, SourceSet, validate_source};
use rowforge_engine::output::{CsvFormatter, DataWriter, Formatter, JsonFormatter};
use rowforge_engine::{DefaultRuleOptions, EngineError, RuleSet};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use profile::Profile;

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Parser, Debug)]
#[command(name = "rowforge", version, about = "Rowforge CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate data files from a source document.
    Generate(GenerateArgs),
    /// Print the JSON Schema for source documents.
    Schema,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Source document describing tables and fields.
    #[arg(long, value_name = "FILE")]
    source: PathBuf,
    /// Output directory; created when missing.
    #[arg(short = 'o', long)]
    out: Option<PathBuf>,
    /// Rows generated per table.
    #[arg(short = 'r', long)]
    rows: Option<u64>,
    /// Output format.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// CSV delimiter (single byte).
    #[arg(long)]
    sep: Option<String>,
    /// Skip the CSV header row.
    #[arg(long, default_value_t = false)]
    no_header: bool,
    /// Table subset to write; all tables when omitted.
    #[arg(long, value_name = "NAME", num_args = 1..)]
    tables: Vec<String>,
    /// Base seed for the default rule library.
    #[arg(long)]
    seed: Option<u64>,
    /// Window start for date and datetime rules (YYYY-MM-DD).
    #[arg(long)]
    base_date: Option<NaiveDate>,
    /// Optional TOML profile supplying defaults for the flags above.
    #[arg(long, value_name = "FILE")]
    profile: Option<PathBuf>,
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let result = match cli.command {
        Command::Generate(args) => run_generate(&args),
        Command::Schema => run_schema(),
    };
    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_generate(args: &GenerateArgs) -> Result<(), CliError> {
    let profile = match &args.profile {
        Some(path) => Profile::load(path)?,
        None => Profile::default(),
    };

    let out = args
        .out
        .clone()
        .or(profile.out)
        .unwrap_or_else(|| PathBuf::from("data"));
    let rows = args.rows.or(profile.rows).unwrap_or(10);
    let format = match args.format {
        Some(format) => format,
        None => parse_format(profile.format.as_deref())?,
    };
    let sep = args.sep.clone().or(profile.sep);
    let delimiter = parse_delimiter(sep.as_deref())?;
    let write_header = if args.no_header {
        false
    } else {
        profile.write_header.unwrap_or(true)
    };
    let seed = args.seed.or(profile.seed).unwrap_or(0);
    let base_date = args.base_date.or(profile.base_date);

    let run_id = Uuid::new_v4();
    let raw = std::fs::read_to_string(&args.source)?;
    let source: SourceSet = serde_json::from_str(&raw)?;
    validate_source(&source)?;

    let mut options = DefaultRuleOptions {
        seed,
        ..Default::default()
    };
    if let Some(base_date) = base_date {
        options.base_date = base_date;
        options.base_datetime = base_date.and_hms_opt(0, 0, 0).unwrap_or_default();
    }

    info!(
        run_id = %run_id,
        source = %args.source.display(),
        tables = source.tables.len(),
        rows,
        seed,
        "generation started"
    );

    let rule_set = RuleSet::with_default_rules(options);
    let metadata = rule_set.apply_all(&source.tables)?;

    let formatter: Box<dyn Formatter> = match format {
        OutputFormat::Csv => Box::new(CsvFormatter::new(delimiter, write_header)),
        OutputFormat::Json => Box::new(JsonFormatter),
    };
    let writer = DataWriter::new(&out, rows, formatter);
    let subset = (!args.tables.is_empty()).then_some(args.tables.as_slice());
    writer.write_all(&metadata, subset)?;

    info!(
        run_id = %run_id,
        tables = metadata.len(),
        out = %out.display(),
        "generation completed"
    );
    Ok(())
}

fn run_schema() -> Result<(), CliError> {
    let schema = schemars::schema_for!(SourceSet);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn parse_format(value: Option<&str>) -> Result<OutputFormat, CliError> {
    match value {
        None => Ok(OutputFormat::Csv),
        Some("csv") => Ok(OutputFormat::Csv),
        Some("json") => Ok(OutputFormat::Json),
        Some(other) => Err(CliError::InvalidConfig(format!(
            "unknown output format '{other}'"
        ))),
    }
}

fn parse_delimiter(value: Option<&str>) -> Result<u8, CliError> {
    match value {
        None => Ok(b','),
        Some(sep) if sep.len() == 1 => Ok(sep.as_bytes()[0]),
        Some(other) => Err(CliError::InvalidConfig(format!(
            "delimiter must be a single byte, got '{other}'"
        ))),
    }
}
