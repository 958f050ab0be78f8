//! Subcommand dispatch: routes tokens to scopes and binds each scope's fields.

use crate::help::{generate_scope_help, generate_scope_version, generate_subcommand_help};
use crate::resolve::resolve_scope;
use crate::schema::{HelpMode, Schema, SchemaError, HELP_COMMAND};
use crate::suggest::closest_match;
use crate::tokens::{classify, classify_literal, strip_end_of_flags, Classification};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during argument parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid target: {0}")]
    InvalidTarget(String),

    #[error("missing required argument: {field}")]
    MissingRequired { field: String },

    #[error("unsupported type for field {field}: {ty}")]
    UnsupportedFieldType { field: String, ty: String },

    #[error("unknown subcommand: {name}{}", did_you_mean(.suggestion))]
    UnknownSubcommand {
        name: String,
        suggestion: Option<String>,
    },

    #[error("invalid value '{value}' for field {field}: expected {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    #[error("{0}")]
    Generic(String),
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean \"{}\"?)", s),
        None => String::new(),
    }
}

impl From<SchemaError> for ParseError {
    fn from(err: SchemaError) -> Self {
        match err {
            SchemaError::NotAnObject(_) => ParseError::InvalidTarget(err.to_string()),
            _ => ParseError::Generic(err.to_string()),
        }
    }
}

/// Outcome of parsing arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Values are bound in the schema.
    Success,
    /// User requested help; carries the rendered text.
    Help(String),
    /// User requested the version; carries the version line.
    Version(String),
}

impl ParseOutcome {
    /// Text to print before terminating, for help and version outcomes.
    pub fn message(&self) -> Option<&str> {
        match self {
            ParseOutcome::Success => None,
            ParseOutcome::Help(text) | ParseOutcome::Version(text) => Some(text),
        }
    }

    /// Exit code for outcomes that should end the process.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ParseOutcome::Success => None,
            ParseOutcome::Help(_) | ParseOutcome::Version(_) => Some(0),
        }
    }
}

/// Result of parsing arguments.
pub type ParseResult = Result<ParseOutcome, ParseError>;

/// Where a scope sits in the tree while it is being dispatched.
struct ScopeContext {
    /// Program name followed by the selected subcommand names
    path: String,
    /// Help mode inherited from the enclosing scope
    help: Option<HelpMode>,
    /// Set once a `--` has been seen; every remaining token is positional
    literal: bool,
    /// False for the root scope
    nested: bool,
}

/// Parse command-line arguments (without the program name) into the schema.
///
/// The schema is validated before any token is looked at. On error, fields
/// bound before the failure keep their values; call [`Schema::reset`] to
/// start over.
pub fn parse_args(schema: &mut Schema, args: &[String]) -> ParseResult {
    schema.validate()?;

    let ctx = ScopeContext {
        path: schema.program_name(),
        help: None,
        literal: false,
        nested: false,
    };
    dispatch(schema, args, &ctx)
}

/// Load a schema from JSON and parse `args` against it.
pub fn parse_json(json: &str, args: &[String]) -> Result<(Schema, ParseOutcome), ParseError> {
    let mut schema = Schema::from_json(json)?;
    let outcome = parse_args(&mut schema, args)?;
    Ok((schema, outcome))
}

fn classify_scope(tokens: &[String], literal: bool) -> Classification {
    if literal {
        classify_literal(tokens)
    } else {
        classify(tokens)
    }
}

fn dispatch(schema: &mut Schema, args: &[String], ctx: &ScopeContext) -> ParseResult {
    let (tokens, stripped) = strip_end_of_flags(args);
    let literal = ctx.literal || stripped;
    let mode = schema.help.or(ctx.help);
    let classification = classify_scope(tokens, literal);

    debug!(scope = %ctx.path, tokens = tokens.len(), literal, "dispatching scope");

    let Some((index, first)) = classification.first_positional() else {
        return finish_scope(schema, ctx, mode, &classification);
    };
    let first = first.to_string();

    if first == HELP_COMMAND && mode.is_some_and(HelpMode::allows_subcommand) {
        return positional_help(schema, &ctx.path, mode, &classification);
    }

    let Some(selected) = schema
        .subcommands
        .iter()
        .position(|s| s.command_name() == first)
    else {
        if schema.subcommands.is_empty() {
            return finish_scope(schema, ctx, mode, &classification);
        }
        if let Some(outcome) = intercept(schema, ctx, mode, &classification)? {
            return Ok(outcome);
        }
        let suggestion = closest_match(&first, &schema.subcommand_names());
        debug!(name = %first, suggestion = ?suggestion, "unknown subcommand");
        return Err(ParseError::UnknownSubcommand {
            name: first,
            suggestion,
        });
    };

    let parent = classify_scope(&tokens[..index], literal);
    if let Some(outcome) = intercept(schema, ctx, mode, &parent)? {
        return Ok(outcome);
    }
    resolve_scope(schema, &parent)?;

    let subcommand = &mut schema.subcommands[selected];
    subcommand.selected = true;
    let child = ScopeContext {
        path: format!("{} {}", ctx.path, first),
        help: mode,
        literal,
        nested: true,
    };
    debug!(subcommand = %first, scope = %child.path, "entering subcommand");
    dispatch(&mut subcommand.schema, &tokens[index + 1..], &child)
}

/// Check help and version requests, then bind the scope's fields.
fn finish_scope(
    schema: &mut Schema,
    ctx: &ScopeContext,
    mode: Option<HelpMode>,
    tokens: &Classification,
) -> ParseResult {
    if let Some(outcome) = intercept(schema, ctx, mode, tokens)? {
        return Ok(outcome);
    }
    resolve_scope(schema, tokens)?;
    Ok(ParseOutcome::Success)
}

/// Handle `-h`, `--help` and `--version` among a scope's own tokens.
///
/// Help wins over version.
fn intercept(
    schema: &Schema,
    ctx: &ScopeContext,
    mode: Option<HelpMode>,
    tokens: &Classification,
) -> Result<Option<ParseOutcome>, ParseError> {
    let short = tokens.is_present("-h");
    let long = tokens.is_present("--help");

    if short || long {
        if mode.is_some_and(HelpMode::allows_flag) {
            debug!(scope = %ctx.path, long, "help requested");
            return Ok(Some(ParseOutcome::Help(generate_scope_help(
                schema, &ctx.path, mode, long,
            ))));
        }
        // The root ignores a disabled help flag like any other unknown flag.
        if ctx.nested {
            let flag = if short { "-h" } else { "--help" };
            return Err(ParseError::Generic(format!("unknown flag: {}", flag)));
        }
    }

    if tokens.is_present("--version") {
        if let Some(version) = generate_scope_version(schema, &ctx.path) {
            return Ok(Some(ParseOutcome::Version(version)));
        }
    }

    Ok(None)
}

/// `help` or `help <subcommand>` as the first positional.
fn positional_help(
    schema: &Schema,
    path: &str,
    mode: Option<HelpMode>,
    tokens: &Classification,
) -> ParseResult {
    let Some(name) = tokens.positionals.get(1) else {
        return Ok(ParseOutcome::Help(generate_scope_help(
            schema, path, mode, false,
        )));
    };

    if let Some(subcommand) = schema.get_subcommand(name) {
        return Ok(ParseOutcome::Help(generate_subcommand_help(
            path, subcommand, mode, false,
        )));
    }

    if schema.subcommands.is_empty() {
        return Ok(ParseOutcome::Help(generate_scope_help(
            schema, path, mode, false,
        )));
    }

    Err(ParseError::UnknownSubcommand {
        name: name.clone(),
        suggestion: closest_match(name, &schema.subcommand_names()),
    })
}
