//! Operator tool for the progress record kept on this device.
//!
//! ```text
//! adaptive-assessment [status|clear]
//! ```
//!
//! `status` (the default) reports the stored record and how many of its
//! answers the current scale file still accepts. `clear` erases it.

use std::process::ExitCode;
use std::sync::Arc;

use adaptive_assessment::adapters::{
    CatalogError, FileKeyValueStore, ProgressStore, ScaleConfigFile, StoredProgress,
};
use adaptive_assessment::application::QuestionSetResolver;
use adaptive_assessment::config::{AppConfig, ConfigError, ValidationError};
use adaptive_assessment::ports::{ProgressRepository, StoreError};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Unknown command '{0}' (expected 'status' or 'clear')")]
    Usage(String),
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        CliError::Config(ConfigError::ValidationFailed(err))
    }
}

enum Command {
    Status,
    Clear,
}

impl Command {
    fn parse(arg: Option<String>) -> Result<Self, CliError> {
        match arg.as_deref() {
            None | Some("status") => Ok(Command::Status),
            Some("clear") => Ok(Command::Clear),
            Some(other) => Err(CliError::Usage(other.to_string())),
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "adaptive-assessment failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config)?;

    let command = Command::parse(std::env::args().nth(1))?;
    let store = Arc::new(FileKeyValueStore::new(&config.storage.data_dir));
    let progress = ProgressStore::new(store, config.storage.progress_key.clone());

    match command {
        Command::Status => status(&config, &progress),
        Command::Clear => {
            progress.clear()?;
            tracing::info!(key = progress.key(), "Cleared saved progress");
            println!("Saved progress cleared.");
            Ok(())
        }
    }
}

fn init_tracing(config: &AppConfig) -> Result<(), CliError> {
    let filter = config.logging.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if config.logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
    Ok(())
}

fn status(config: &AppConfig, progress: &ProgressStore) -> Result<(), CliError> {
    let Some(record) = progress.load_record() else {
        println!("No saved progress.");
        return Ok(());
    };
    print_record(&record);

    let active = config.assessment.default_type;
    if record.assessment_type != active {
        println!("Ignored: active assessment type is {active}.");
        return Ok(());
    }

    let Some(demographics) = &record.demographics else {
        println!("No demographics stored; answers are validated on the next submission.");
        return Ok(());
    };

    let (catalog, selector) = ScaleConfigFile::load(&config.assessment.catalog_path)?.into_parts()?;
    let catalog = Arc::new(catalog);
    let resolver = QuestionSetResolver::new(Arc::new(selector), catalog.clone(), active);
    let partition = resolver.resolve(demographics).partition(&record.responses);
    println!(
        "Valid under current scales: {} of {} ({} would be discarded on resume).",
        partition.kept.len(),
        partition.total_count(),
        partition.discarded_count()
    );
    for orphan in &partition.discarded {
        let owner = catalog
            .scale_of(orphan.question_id())
            .map(|id| id.to_string())
            .unwrap_or_else(|| "unknown scale".to_string());
        println!("  orphan {} ({})", orphan.question_id(), owner);
    }
    Ok(())
}

fn print_record(record: &StoredProgress) {
    println!("Saved progress");
    println!("  type:      {}", record.assessment_type);
    println!("  answered:  {}", record.responses.len());
    println!("  page:      {}", record.current_page);
    println!("  saved at:  {}", record.timestamp.to_sortable_string());
    if let Some(age) = record.demographics.as_ref().and_then(|d| d.age.as_deref()) {
        println!("  age group: {age}");
    }
}
