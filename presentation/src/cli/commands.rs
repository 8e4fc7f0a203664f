//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for answers and evaluation reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    Table,
    /// JSON object
    Json,
}

impl From<OutputFormat> for nl2sql_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Table => nl2sql_domain::OutputFormat::Table,
            OutputFormat::Json => nl2sql_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for rental-nl2sql
#[derive(Parser, Debug)]
#[command(name = "rental-nl2sql")]
#[command(author, version, about = "Answer English questions about the rental dataset with SQL")]
#[command(long_about = r#"
rental-nl2sql translates a business question into SQL for the rental
database (users, properties, bookings, payments, reviews), runs it and
prints the result.

Recognized questions:
  - top N tenants by total rent paid
  - average rating of apartments vs houses
  - landlord revenue in a given year
  - available 2-bedroom properties in a city under a price
  - occupancy rate for a city in a quarter (Q1-Q4, optional year)

Anything else is answered with an apology.

Configuration files are loaded from (in priority order):
1. NL2SQL_* environment variables (e.g. NL2SQL_DATABASE__URL)
2. --config <path>           Explicit config file
3. ./rental-nl2sql.toml      Project-level config
4. ~/.config/rental-nl2sql/config.toml   Global config

Example:
  rental-nl2sql --init-db
  rental-nl2sql "Who are the top 10 tenants by total rent paid?"
  rental-nl2sql --eval data/gold_set.json
  rental-nl2sql --interactive
"#)]
pub struct Cli {
    /// The question to answer (not required with --interactive, --eval or --init-db)
    pub question: Option<String>,

    /// Start interactive question mode
    #[arg(short, long, conflicts_with_all = ["eval", "init_db"])]
    pub interactive: bool,

    /// Score the translator against a gold set (JSON list of {question, gold_sql})
    #[arg(long, value_name = "PATH", conflicts_with = "init_db")]
    pub eval: Option<PathBuf>,

    /// Create the database from a schema and a seed script, replacing any existing file
    #[arg(long)]
    pub init_db: bool,

    /// Schema script for --init-db (defaults to the bundled schema)
    #[arg(long, value_name = "PATH", requires = "init_db")]
    pub schema: Option<PathBuf>,

    /// Seed script for --init-db (defaults to the bundled sample rows)
    #[arg(long, value_name = "PATH", requires = "init_db")]
    pub seed: Option<PathBuf>,

    /// Database URL, overriding the configured one
    #[arg(long, value_name = "URL")]
    pub database: Option<String>,

    /// Print the generated SQL with each answer
    #[arg(long, overrides_with = "hide_sql")]
    pub show_sql: bool,

    /// Do not print the generated SQL
    #[arg(long, overrides_with = "show_sql")]
    pub hide_sql: bool,

    /// Maximum rows rendered before the result is cut
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub max_rows: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// SQL echo requested on the command line, if any
    pub fn sql_visibility(&self) -> Option<bool> {
        if self.show_sql {
            Some(true)
        } else if self.hide_sql {
            Some(false)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("rental-nl2sql").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_single_question() {
        let cli = parse(&["top 5 tenants by rent", "-o", "json", "--max-rows", "20"]);
        assert_eq!(cli.question.as_deref(), Some("top 5 tenants by rent"));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.max_rows, Some(20));
        assert_eq!(cli.sql_visibility(), None);
    }

    #[test]
    fn test_last_sql_flag_wins() {
        assert_eq!(parse(&["--show-sql", "--hide-sql"]).sql_visibility(), Some(false));
        assert_eq!(parse(&["--hide-sql", "--show-sql"]).sql_visibility(), Some(true));
    }

    #[test]
    fn test_verbosity_counts() {
        assert_eq!(parse(&["-vvv", "-i"]).verbose, 3);
    }

    #[test]
    fn test_schema_requires_init_db() {
        assert!(Cli::try_parse_from(["rental-nl2sql", "--schema", "s.sql"]).is_err());
        let cli = parse(&["--init-db", "--schema", "s.sql", "--seed", "d.sql"]);
        assert!(cli.init_db);
        assert_eq!(cli.schema, Some(PathBuf::from("s.sql")));
    }

    #[test]
    fn test_modes_conflict() {
        assert!(Cli::try_parse_from(["rental-nl2sql", "-i", "--eval", "gold.json"]).is_err());
        assert!(Cli::try_parse_from(["rental-nl2sql", "--max-rows", "0"]).is_err());
    }

    #[test]
    fn test_output_format_maps_to_domain() {
        let format: nl2sql_domain::OutputFormat = OutputFormat::Json.into();
        assert_eq!(format, nl2sql_domain::OutputFormat::Json);
    }
}
