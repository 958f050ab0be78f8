//! Help and version text for schema scopes, rendered through Clap.

use crate::schema::{Field, FieldType, HelpMode, Schema, Subcommand};
use clap::{Arg, ArgAction, Command};

const HELP_ARG_ID: &str = "argtree-help";
const VERSION_ARG_ID: &str = "argtree-version";

/// Build a Clap Command mirroring one scope.
///
/// `usage` is the full command path shown in the usage line ("app serve").
fn build_command(schema: &Schema, usage: &str, mode: Option<HelpMode>) -> Command {
    let mut cmd = Command::new(usage.to_string())
        .disable_help_flag(true)
        .disable_version_flag(true)
        .disable_help_subcommand(!mode.is_some_and(HelpMode::allows_subcommand));

    if let Some(ref description) = schema.description {
        cmd = cmd.about(description.clone());
    }

    if mode.is_some_and(HelpMode::allows_flag) {
        cmd = cmd.arg(
            Arg::new(HELP_ARG_ID)
                .short('h')
                .long("help")
                .action(ArgAction::Help)
                .help("Print help"),
        );
    }

    if let Some(ref version) = schema.version {
        cmd = cmd.version(version.clone()).arg(
            Arg::new(VERSION_ARG_ID)
                .long("version")
                .action(ArgAction::Version)
                .help("Print version"),
        );
    }

    let mut positionals = PositionalSlots::default();
    for field in &schema.fields {
        cmd = cmd.arg(build_arg(field, &mut positionals));
    }

    for subcommand in &schema.subcommands {
        cmd = cmd.subcommand(build_subcommand(subcommand, mode));
    }

    cmd
}

/// A listing entry for a subcommand; its own fields are shown by its own help.
fn build_subcommand(subcommand: &Subcommand, parent_mode: Option<HelpMode>) -> Command {
    let name = subcommand.command_name().into_owned();
    let mut about = subcommand.schema.description.clone().unwrap_or_default();

    if subcommand
        .schema
        .help
        .or(parent_mode)
        .is_some_and(HelpMode::allows_subcommand)
    {
        if !about.is_empty() {
            about.push(' ');
        }
        about.push_str(&format!("(use '{} help' for more details)", name));
    }

    let cmd = Command::new(name);
    if about.is_empty() {
        cmd
    } else {
        cmd.about(about)
    }
}

/// Running state of the positional slots emitted so far.
struct PositionalSlots {
    next_index: usize,
    /// Set once an optional positional has been emitted
    after_optional: bool,
}

impl Default for PositionalSlots {
    fn default() -> Self {
        Self {
            next_index: 1,
            after_optional: false,
        }
    }
}

/// Build a Clap Arg from a Field.
fn build_arg(field: &Field, positionals: &mut PositionalSlots) -> Arg {
    let mut arg = Arg::new(field.name.clone());
    let value_name = field.name.to_uppercase();
    let is_switch = !field.is_positional() && field.ty == FieldType::Bool;
    // Clap refuses a required positional after an optional one.
    let mut required = field.required;

    if field.is_positional() {
        arg = arg
            .index(positionals.next_index)
            .action(ArgAction::Set)
            .value_name(value_name);
        positionals.next_index += 1;
        if positionals.after_optional {
            required = false;
        } else if !field.required {
            positionals.after_optional = true;
        }
    } else {
        if let Some(short) = field.short.as_ref().and_then(|s| s.chars().next()) {
            arg = arg.short(short);
        }
        if let Some(ref long) = field.long {
            arg = arg.long(long.clone());
        }
        arg = if is_switch {
            arg.action(ArgAction::SetTrue)
        } else {
            arg.action(ArgAction::Set).value_name(value_name)
        };
    }

    // Clap rejects required switches and required args with defaults.
    if required && !is_switch {
        arg = arg.required(true);
    } else if let Some(ref default) = field.default {
        if !is_switch && !default.is_empty() {
            arg = arg.default_value(default.clone());
        }
    }

    if let Some(ref description) = field.description {
        arg = arg.help(description.clone());
    }

    arg
}

/// Render help for a scope under the given usage path.
///
/// `mode` is the effective help mode, which controls whether the help flag
/// and the `help` subcommand are listed.
pub fn generate_scope_help(
    schema: &Schema,
    usage: &str,
    mode: Option<HelpMode>,
    long: bool,
) -> String {
    let mut cmd = build_command(schema, usage, mode);
    let rendered = if long {
        cmd.render_long_help()
    } else {
        cmd.render_help()
    };
    rendered.to_string().trim_end().to_string()
}

/// Render help for a root scope, optionally prefixed with a parent command name.
pub fn generate_help(schema: &Schema, parent: Option<&str>, long: bool) -> String {
    let name = schema.program_name();
    let usage = match parent {
        Some(parent) => format!("{} {}", parent, name),
        None => name,
    };
    generate_scope_help(schema, &usage, schema.help, long)
}

/// Render help for a subcommand, with the parent path in its usage line.
pub fn generate_subcommand_help(
    parent: &str,
    subcommand: &Subcommand,
    parent_mode: Option<HelpMode>,
    long: bool,
) -> String {
    let usage = format!("{} {}", parent, subcommand.command_name());
    let mode = subcommand.schema.help.or(parent_mode);
    generate_scope_help(&subcommand.schema, &usage, mode, long)
}

/// Version line for a scope, if it declares a version.
pub fn generate_scope_version(schema: &Schema, name: &str) -> Option<String> {
    schema
        .version
        .as_ref()
        .map(|version| format!("{} v{}", name, version))
}

/// Version line for a root scope: `"{name} v{version}"`.
pub fn generate_version(schema: &Schema) -> Option<String> {
    generate_scope_version(schema, &schema.program_name())
}
