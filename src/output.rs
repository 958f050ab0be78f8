//! Sourceable shell files: exported field values, help and version heredocs, errors.

use crate::parser::ParseOutcome;
use crate::schema::Schema;
use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

const HELP_DELIMITER: &str = "ARGTREE_HELP";
const VERSION_DELIMITER: &str = "ARGTREE_VERSION";

/// Variable holding the selected subcommand path, appended to the prefix.
const SUBCOMMAND_VAR: &str = "SUBCOMMAND";

/// Escape a value for a double-quoted shell string.
fn escape_shell_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        let replacement = match c {
            '$' => "\\$",
            '`' => "\\`",
            '\\' => "\\\\",
            '"' => "\\\"",
            '!' => "\\!",
            '\n' => "\\n",
            '\r' => "\\r",
            '\t' => "\\t",
            _ => {
                escaped.push(c);
                continue;
            }
        };
        escaped.push_str(replacement);
    }
    escaped
}

/// Upper-case a name and turn characters a shell variable can't hold into `_`.
fn to_shell_var_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Variables to export after a successful parse, in declaration order.
///
/// Root fields become `PREFIX_FIELD`; fields of each selected subcommand
/// become `PREFIX_SUB_FIELD`, nesting further for deeper subcommands.
/// `PREFIX_SUBCOMMAND` holds the selected path joined by spaces.
pub fn collect_exports(schema: &Schema, prefix: &str) -> Vec<(String, String)> {
    let mut exports = Vec::new();
    let mut scope = schema;
    let mut scope_prefix = prefix.to_string();

    loop {
        for field in &scope.fields {
            if let Some(value) = field.value() {
                exports.push((
                    format!("{}{}", scope_prefix, to_shell_var_name(&field.name)),
                    value.to_string(),
                ));
            }
        }
        let Some(subcommand) = scope.selected() else {
            break;
        };
        scope_prefix = format!(
            "{}{}_",
            scope_prefix,
            to_shell_var_name(&subcommand.command_name())
        );
        scope = &subcommand.schema;
    }

    exports.push((
        format!("{}{}", prefix, SUBCOMMAND_VAR),
        schema.selected_path().join(" "),
    ));
    exports
}

/// Render the export statements for a parsed schema.
pub fn generate_output_string(schema: &Schema, prefix: &str) -> String {
    collect_exports(schema, prefix)
        .into_iter()
        .map(|(name, value)| format!("export {}=\"{}\"\n", name, escape_shell_value(&value)))
        .collect()
}

/// Write the export statements to a temporary file and return its path.
///
/// The file is kept after this process exits so the caller can source it.
pub fn generate_output(schema: &Schema, prefix: &str) -> Result<PathBuf> {
    write_temp_file(&generate_output_string(schema, prefix))
}

/// When sourced, prints the message to stderr and exits 1.
pub fn generate_error_string(message: &str) -> String {
    format!(
        "echo \"argtree: {}\" >&2\nexit 1\n",
        escape_shell_value(message)
    )
}

pub fn generate_error_output(message: &str) -> Result<PathBuf> {
    write_temp_file(&generate_error_string(message))
}

/// A heredoc that prints `text` verbatim, then exits 0.
fn heredoc(delimiter: &str, text: &str) -> String {
    let newline = if text.ends_with('\n') { "" } else { "\n" };
    format!(
        "cat <<'{delimiter}'\n{text}{newline}{delimiter}\nexit 0\n",
        delimiter = delimiter,
        text = text,
        newline = newline
    )
}

pub fn generate_help_output_string(help_text: &str) -> String {
    heredoc(HELP_DELIMITER, help_text)
}

pub fn generate_version_output_string(version_text: &str) -> String {
    heredoc(VERSION_DELIMITER, version_text)
}

/// Render whatever a parse produced: exports, help or version.
pub fn generate_outcome_string(schema: &Schema, outcome: &ParseOutcome, prefix: &str) -> String {
    match outcome {
        ParseOutcome::Success => generate_output_string(schema, prefix),
        ParseOutcome::Help(text) => generate_help_output_string(text),
        ParseOutcome::Version(text) => generate_version_output_string(text),
    }
}

pub fn generate_outcome_output(
    schema: &Schema,
    outcome: &ParseOutcome,
    prefix: &str,
) -> Result<PathBuf> {
    write_temp_file(&generate_outcome_string(schema, outcome, prefix))
}

fn write_temp_file(content: &str) -> Result<PathBuf> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    let path = file.into_temp_path().keep()?;
    Ok(path)
}
