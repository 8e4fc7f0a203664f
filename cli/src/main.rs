//! CLI entrypoint for rental-nl2sql
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use nl2sql_application::{
    AnswerQuestionUseCase, DisplayParams, EvaluateUseCase, EvaluationProgress, NoProgress,
    NoQueryLogger, QueryLogger,
};
use nl2sql_domain::OutputFormat;
use nl2sql_infrastructure::{
    ConfigLoader, DatabaseUrl, FileConfig, JsonlQueryLogger, SqliteQueryExecutor,
    init_database_from_files, load_gold_set,
};
use nl2sql_presentation::{Cli, ProgressReporter, QuestionRepl, SAMPLE_QUESTIONS, formatter_for};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Config file values with command-line overrides applied
#[derive(Debug)]
struct Settings {
    database: DatabaseUrl,
    display: DisplayParams,
    format: OutputFormat,
    color: bool,
}

impl Settings {
    fn resolve(cli: &Cli, config: &FileConfig) -> Result<Self> {
        config.validate()?;

        let database = match &cli.database {
            Some(raw) => DatabaseUrl::parse(raw)?,
            None => config.database_url()?,
        };

        let mut display = config.display_params();
        if let Some(max_rows) = cli.max_rows {
            display = display.with_max_rows(max_rows as usize);
        }
        if let Some(show_sql) = cli.sql_visibility() {
            display = display.with_show_sql(show_sql);
        }

        Ok(Self {
            database,
            display,
            format: cli.output.map_or(config.output.format, Into::into),
            color: config.output.color && !cli.no_color,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    let settings = Settings::resolve(&cli, &config)?;
    if !settings.color {
        colored::control::set_override(false);
    }

    info!("Using database {}", settings.database);

    // Bootstrap mode
    if cli.init_db {
        let Some(path) = settings.database.file_path() else {
            bail!("--init-db needs a database file, not {}", settings.database);
        };
        init_database_from_files(path, cli.schema.as_deref(), cli.seed.as_deref())?;
        if !cli.quiet {
            println!("Database initialized at {}", path.display());
        }
        return Ok(());
    }

    // === Dependency Injection ===
    let executor = Arc::new(SqliteQueryExecutor::new(settings.database.clone()));
    let formatter = formatter_for(settings.format);

    // Evaluation mode
    if let Some(path) = &cli.eval {
        let cases = load_gold_set(path)?;
        let use_case = EvaluateUseCase::new(executor);

        let progress: Box<dyn EvaluationProgress> =
            if cli.quiet || settings.format == OutputFormat::Json {
                Box::new(NoProgress)
            } else {
                Box::new(ProgressReporter::new())
            };
        let report = use_case
            .execute_with_progress(&cases, progress.as_ref())
            .await;

        println!("{}", formatter.format_report(&report));
        return Ok(());
    }

    let logger: Arc<dyn QueryLogger> = match &config.logging.query_log {
        Some(path) => match JsonlQueryLogger::open(path) {
            Ok(logger) => {
                info!(
                    "Query log: {} (session {})",
                    logger.path().display(),
                    logger.session()
                );
                Arc::new(logger)
            }
            Err(e) => {
                warn!("Query log {} disabled: {}", path.display(), e);
                Arc::new(NoQueryLogger)
            }
        },
        None => Arc::new(NoQueryLogger),
    };
    let use_case = AnswerQuestionUseCase::new(executor).with_logger(logger);

    // Interactive mode
    if cli.interactive {
        let repl = QuestionRepl::new(use_case, formatter, settings.display);
        repl.run().await?;
        return Ok(());
    }

    // Single question mode - question is required
    let Some(question) = cli.question.as_deref() else {
        eprintln!("Usage: rental-nl2sql \"<your question>\"");
        eprintln!();
        eprintln!("Sample questions:");
        for sample in SAMPLE_QUESTIONS {
            eprintln!("  {}", sample);
        }
        eprintln!();
        bail!("Question is required. Use --interactive, --eval or --init-db for other modes.");
    };

    let answer = use_case.execute(question).await;
    println!(
        "{}",
        formatter.format_answer(question, &answer, &settings.display)
    );

    Ok(())
}
