//! argtree - parse shell script arguments against a nested schema.

use anyhow::{bail, Context, Result};
use argtree::{
    generate_error_output, generate_help, generate_outcome_output, generate_version, parse_args,
    Schema,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Declarative argument parsing with nested subcommands for shell scripts.
#[derive(Parser, Debug)]
#[command(name = "argtree", version, about, disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse script arguments and print the path of a file to source
    Parse {
        #[command(flatten)]
        source: SchemaSource,

        /// Prefix for exported variable names
        #[arg(long, env = "ARGTREE_PREFIX", default_value = "ARGTREE_")]
        prefix: String,

        /// Arguments to parse for the target script
        #[arg(last = true)]
        args: Vec<String>,
    },

    /// Print help text for the target script
    Help {
        #[command(flatten)]
        source: SchemaSource,

        /// Print the long form of the help text
        #[arg(long)]
        long: bool,
    },

    /// Print version of the target script
    Version {
        #[command(flatten)]
        source: SchemaSource,
    },
}

/// Where the schema document comes from.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct SchemaSource {
    /// JSON schema for the target script
    #[arg(long)]
    schema: Option<String>,

    /// Path to a JSON schema file
    #[arg(long, value_name = "PATH")]
    schema_file: Option<PathBuf>,
}

impl SchemaSource {
    fn load(&self) -> Result<Schema> {
        let json = match (&self.schema, &self.schema_file) {
            (Some(json), _) => json.clone(),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read schema file {}", path.display()))?,
            (None, None) => bail!("either --schema or --schema-file is required"),
        };
        let schema = Schema::from_json(&json).context("failed to parse schema JSON")?;
        schema.validate().context("invalid schema")?;
        Ok(schema)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("ARGTREE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            source,
            prefix,
            args,
        } => {
            let mut schema = source.load()?;
            debug!(args = args.len(), prefix = %prefix, "parsing script arguments");

            // Errors go into the sourced file so the script exits with the message.
            let path = match parse_args(&mut schema, &args) {
                Ok(outcome) => generate_outcome_output(&schema, &outcome, &prefix),
                Err(err) => generate_error_output(&err.to_string()),
            }
            .context("failed to generate output file")?;

            println!("{}", path.display());
        }
        Commands::Help { source, long } => {
            let schema = source.load()?;
            println!("{}", generate_help(&schema, None, long));
        }
        Commands::Version { source } => {
            let schema = source.load()?;
            match generate_version(&schema) {
                Some(version) => println!("{}", version),
                None => bail!("schema declares no version"),
            }
        }
    }

    Ok(())
}
