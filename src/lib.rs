//! argtree - declarative argument parsing with nested subcommand scopes.
//!
//! A schema describes a command's flags, positionals and subcommands, either
//! through the builder API or as a JSON document. [`parse_args`] binds an
//! argument vector into that schema, recursing into the selected subcommand,
//! and reports help or version requests as [`ParseOutcome`] variants instead
//! of exiting the process.

pub mod help;
pub mod output;
pub mod parser;
pub mod resolve;
pub mod schema;
pub mod suggest;
pub mod tokens;

pub use help::{generate_help, generate_subcommand_help, generate_version};
pub use output::{generate_error_output, generate_outcome_output, generate_output};
pub use parser::{parse_args, parse_json, ParseError, ParseOutcome, ParseResult};
pub use schema::{Field, FieldType, HelpMode, Schema, SchemaError, Subcommand, Value};
pub use suggest::closest_match;
