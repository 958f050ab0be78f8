//! Schema model for argtree: scopes, fields, subcommands and their JSON form.

use serde::Deserialize;
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Short flag reserved for help requests.
pub const RESERVED_SHORT: &[&str] = &["h"];
/// Long flags reserved for help and version requests.
pub const RESERVED_LONG: &[&str] = &["help", "version"];
/// Positional word reserved for `app help [subcommand]`.
pub const HELP_COMMAND: &str = "help";

/// Errors that can occur while loading or validating a schema.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to parse JSON schema: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("schema must be a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("duplicate field name: {0}")]
    DuplicateName(String),

    #[error("duplicate flag '{0}' on field '{1}'")]
    DuplicateFlag(String, String),

    #[error("duplicate subcommand name: {0}")]
    DuplicateSubcommandName(String),

    #[error("invalid short option '{0}' on field '{1}': must be a single character other than '-'")]
    InvalidShortOption(String, String),

    #[error("invalid long option '{0}' on field '{1}': must be non-empty and not start with '-'")]
    InvalidLongOption(String, String),

    #[error("flag '{0}' on field '{1}' is reserved")]
    ReservedFlag(String, String),

    #[error("subcommand name '{0}' is reserved")]
    ReservedSubcommandName(String),

    #[error("subcommand name must not be empty (id '{0}')")]
    EmptySubcommandName(String),
}

/// Declared semantic type of a field.
///
/// Unknown type names from a JSON document are kept as `Unsupported` so the
/// parser can report them against the field that declared them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum FieldType {
    #[default]
    String,
    Int,
    Float,
    Bool,
    Unsupported(String),
}

impl From<String> for FieldType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "string" | "str" => FieldType::String,
            "int" | "integer" => FieldType::Int,
            "float" | "number" => FieldType::Float,
            "bool" | "boolean" => FieldType::Bool,
            _ => FieldType::Unsupported(name),
        }
    }
}

impl From<&str> for FieldType {
    fn from(name: &str) -> Self {
        FieldType::from(name.to_string())
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::String => f.write_str("string"),
            FieldType::Int => f.write_str("int"),
            FieldType::Float => f.write_str("float"),
            FieldType::Bool => f.write_str("bool"),
            FieldType::Unsupported(name) => f.write_str(name),
        }
    }
}

impl FieldType {
    /// The value an unbound slot of this type reads as.
    pub fn zero(&self) -> Option<Value> {
        match self {
            FieldType::String => Some(Value::Str(String::new())),
            FieldType::Int => Some(Value::Int(0)),
            FieldType::Float => Some(Value::Float(0.0)),
            FieldType::Bool => Some(Value::Bool(false)),
            FieldType::Unsupported(_) => None,
        }
    }
}

/// A bound field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// How a scope exposes help: as `-h`/`--help` flags, as a `help` positional, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HelpMode {
    Flag,
    Subcmd,
    Both,
}

impl HelpMode {
    pub fn allows_flag(self) -> bool {
        matches!(self, HelpMode::Flag | HelpMode::Both)
    }

    pub fn allows_subcommand(self) -> bool {
        matches!(self, HelpMode::Subcmd | HelpMode::Both)
    }
}

/// One bindable argument of a scope.
///
/// A field with neither a short nor a long name is positional.
#[derive(Debug, Clone, Deserialize)]
pub struct Field {
    /// Identity of the field, used in errors and help
    pub name: String,
    /// Short option name without the dash (e.g. "v" for -v)
    pub short: Option<String>,
    /// Long option name without the dashes (e.g. "verbose" for --verbose)
    pub long: Option<String>,
    /// Help text for this field
    pub description: Option<String>,
    /// Whether resolution fails when nothing binds this field
    #[serde(default)]
    pub required: bool,
    /// Value used when no token binds this field
    pub default: Option<String>,
    /// Declared semantic type
    #[serde(rename = "type", default)]
    pub ty: FieldType,
    #[serde(skip)]
    pub(crate) value: Option<Value>,
}

impl Field {
    /// A positional string field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short: None,
            long: None,
            description: None,
            required: false,
            default: None,
            ty: FieldType::String,
            value: None,
        }
    }

    pub fn short(mut self, short: impl Into<String>) -> Self {
        self.short = Some(short.into());
        self
    }

    pub fn long(mut self, long: impl Into<String>) -> Self {
        self.long = Some(long.into());
        self
    }

    /// Use the lower-cased first letter of the field name as the short option.
    pub fn short_from_name(mut self) -> Self {
        self.short = self
            .name
            .chars()
            .next()
            .map(|c| c.to_lowercase().collect());
        self
    }

    /// Use the lower-cased field name as the long option.
    pub fn long_from_name(mut self) -> Self {
        self.long = Some(self.name.to_lowercase());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn value_type(mut self, ty: impl Into<FieldType>) -> Self {
        self.ty = ty.into();
        self
    }

    pub fn is_positional(&self) -> bool {
        self.short.is_none() && self.long.is_none()
    }

    /// The short option as it appears on the command line (`-v`).
    pub fn short_flag(&self) -> Option<String> {
        self.short.as_ref().map(|s| format!("-{}", s))
    }

    /// The long option as it appears on the command line (`--verbose`).
    pub fn long_flag(&self) -> Option<String> {
        self.long.as_ref().map(|l| format!("--{}", l))
    }

    /// The bound value, or the zero value of the declared type when unbound.
    ///
    /// Returns `None` only for fields of an unsupported type.
    pub fn value(&self) -> Option<Value> {
        self.value.clone().or_else(|| self.ty.zero())
    }

    /// Whether a token, default or positional bound this field.
    pub fn is_bound(&self) -> bool {
        self.value.is_some()
    }

    pub(crate) fn bind(&mut self, value: Value) {
        self.value = Some(value);
    }

    pub fn reset(&mut self) {
        self.value = None;
    }
}

/// A named child scope reachable from its parent.
#[derive(Debug, Clone, Deserialize)]
pub struct Subcommand {
    /// Identity of the subcommand; its lower-cased form is the default name
    pub id: String,
    /// Explicit name matched on the command line
    pub name: Option<String>,
    /// The nested scope
    #[serde(flatten)]
    pub schema: Schema,
    /// Set when dispatch entered this subcommand
    #[serde(skip)]
    pub selected: bool,
}

impl Subcommand {
    pub fn new(id: impl Into<String>, schema: Schema) -> Self {
        Self {
            id: id.into(),
            name: None,
            schema,
            selected: false,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The token that selects this subcommand.
    pub fn command_name(&self) -> Cow<'_, str> {
        match self.name {
            Some(ref name) => Cow::Borrowed(name),
            None => Cow::Owned(self.id.to_lowercase()),
        }
    }
}

/// One parsing scope: the root command or a subcommand.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Schema {
    /// Program name shown in usage lines (root scope only)
    pub name: Option<String>,
    /// Version reported by `--version`
    pub version: Option<String>,
    /// Description shown beneath the usage line
    pub description: Option<String>,
    /// Help exposure; `None` inherits from the parent, and disables help at the root
    pub help: Option<HelpMode>,
    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Subcommands in declaration order
    #[serde(default)]
    pub subcommands: Vec<Subcommand>,
}

impl Schema {
    /// A root scope with a program name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// An unnamed scope, typically the body of a subcommand.
    pub fn scope() -> Self {
        Self::default()
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn help(mut self, mode: HelpMode) -> Self {
        self.help = Some(mode);
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn subcommand(mut self, subcommand: Subcommand) -> Self {
        self.subcommands.push(subcommand);
        self
    }

    /// Parse a JSON document into a Schema.
    pub fn from_json(json: &str) -> Result<Schema, SchemaError> {
        let document: serde_json::Value = serde_json::from_str(json)?;
        let kind = match document {
            serde_json::Value::Object(_) => None,
            serde_json::Value::Null => Some("null"),
            serde_json::Value::Bool(_) => Some("a boolean"),
            serde_json::Value::Number(_) => Some("a number"),
            serde_json::Value::String(_) => Some("a string"),
            serde_json::Value::Array(_) => Some("an array"),
        };
        if let Some(kind) = kind {
            return Err(SchemaError::NotAnObject(kind));
        }
        let schema: Schema = serde_json::from_value(document)?;
        Ok(schema)
    }

    /// Validate this scope and every nested subcommand scope.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut names = HashSet::new();
        let mut flags = HashSet::new();

        for field in &self.fields {
            if !names.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateName(field.name.clone()));
            }

            Self::validate_field(field)?;

            for flag in [field.short_flag(), field.long_flag()].into_iter().flatten() {
                if !flags.insert(flag.clone()) {
                    return Err(SchemaError::DuplicateFlag(flag, field.name.clone()));
                }
            }
        }

        let mut subcommand_names = HashSet::new();
        for subcommand in &self.subcommands {
            let name = subcommand.command_name();
            if name.is_empty() {
                return Err(SchemaError::EmptySubcommandName(subcommand.id.clone()));
            }
            if name == HELP_COMMAND {
                return Err(SchemaError::ReservedSubcommandName(name.into_owned()));
            }
            if !subcommand_names.insert(name.clone()) {
                return Err(SchemaError::DuplicateSubcommandName(name.into_owned()));
            }
            subcommand.schema.validate()?;
        }

        Ok(())
    }

    /// Validate the option names of a single field.
    fn validate_field(field: &Field) -> Result<(), SchemaError> {
        if let Some(ref short) = field.short {
            let mut chars = short.chars();
            let single = matches!((chars.next(), chars.next()), (Some(c), None) if c != '-');
            if !single {
                return Err(SchemaError::InvalidShortOption(
                    short.clone(),
                    field.name.clone(),
                ));
            }
            if RESERVED_SHORT.contains(&short.as_str()) {
                return Err(SchemaError::ReservedFlag(
                    format!("-{}", short),
                    field.name.clone(),
                ));
            }
        }

        if let Some(ref long) = field.long {
            if long.is_empty() || long.starts_with('-') {
                return Err(SchemaError::InvalidLongOption(
                    long.clone(),
                    field.name.clone(),
                ));
            }
            if RESERVED_LONG.contains(&long.as_str()) {
                return Err(SchemaError::ReservedFlag(
                    format!("--{}", long),
                    field.name.clone(),
                ));
            }
        }

        Ok(())
    }

    /// Clear every value slot and subcommand selection, recursively.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
        for subcommand in &mut self.subcommands {
            subcommand.selected = false;
            subcommand.schema.reset();
        }
    }

    /// Program name for usage lines, falling back to the running executable.
    pub fn program_name(&self) -> String {
        if let Some(ref name) = self.name {
            return name.clone();
        }
        std::env::args_os()
            .next()
            .as_ref()
            .and_then(|arg0| std::path::Path::new(arg0).file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "app".to_string())
    }

    pub fn get_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Value of a field in this scope (bound or zero).
    pub fn get(&self, name: &str) -> Option<Value> {
        self.get_field(name).and_then(Field::value)
    }

    pub fn get_subcommand(&self, name: &str) -> Option<&Subcommand> {
        self.subcommands.iter().find(|s| s.command_name() == name)
    }

    /// Names of the declared subcommands, in declaration order.
    pub fn subcommand_names(&self) -> Vec<String> {
        self.subcommands
            .iter()
            .map(|s| s.command_name().into_owned())
            .collect()
    }

    /// The subcommand dispatch entered from this scope, if any.
    pub fn selected(&self) -> Option<&Subcommand> {
        self.subcommands.iter().find(|s| s.selected)
    }

    /// Names of the selected subcommands from this scope down to the deepest one.
    pub fn selected_path(&self) -> Vec<String> {
        let mut path = Vec::new();
        let mut scope = self;
        while let Some(subcommand) = scope.selected() {
            path.push(subcommand.command_name().into_owned());
            scope = &subcommand.schema;
        }
        path
    }

    /// Fields that take a short or long option.
    pub fn options(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.is_positional())
    }

    /// Positional fields in binding order.
    pub fn positionals(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.is_positional())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_schema() {
        let json = r#"{
            "name": "myscript",
            "description": "My awesome script",
            "version": "1.0.0",
            "help": "both",
            "fields": [
                {
                    "name": "Verbose",
                    "short": "v",
                    "long": "verbose",
                    "type": "bool",
                    "description": "Enable verbose output"
                },
                {
                    "name": "Output",
                    "short": "o",
                    "long": "output",
                    "required": true,
                    "description": "Output file"
                },
                {
                    "name": "Input",
                    "required": true,
                    "description": "Input file"
                }
            ]
        }"#;

        let schema = Schema::from_json(json).unwrap();
        assert_eq!(schema.name, Some("myscript".to_string()));
        assert_eq!(schema.description, Some("My awesome script".to_string()));
        assert_eq!(schema.version, Some("1.0.0".to_string()));
        assert_eq!(schema.help, Some(HelpMode::Both));
        assert_eq!(schema.fields.len(), 3);

        let verbose = &schema.fields[0];
        assert_eq!(verbose.short.as_deref(), Some("v"));
        assert_eq!(verbose.long.as_deref(), Some("verbose"));
        assert_eq!(verbose.ty, FieldType::Bool);
        assert!(!verbose.required);

        let output = &schema.fields[1];
        assert_eq!(output.ty, FieldType::String);
        assert!(output.required);

        let input = &schema.fields[2];
        assert!(input.is_positional());
        assert!(input.required);

        schema.validate().unwrap();
    }

    #[test]
    fn test_parse_minimal_schema() {
        let schema = Schema::from_json(r#"{"name": "minimal"}"#).unwrap();
        assert_eq!(schema.name, Some("minimal".to_string()));
        assert!(schema.version.is_none());
        assert!(schema.help.is_none());
        assert!(schema.fields.is_empty());
        assert!(schema.subcommands.is_empty());
        schema.validate().unwrap();
    }

    #[test]
    fn test_error_on_non_object_document() {
        let result = Schema::from_json("123");
        assert!(matches!(result, Err(SchemaError::NotAnObject("a number"))));

        let result = Schema::from_json("[]");
        assert!(matches!(result, Err(SchemaError::NotAnObject("an array"))));
    }

    #[test]
    fn test_error_on_invalid_json() {
        let result = Schema::from_json("{not json");
        assert!(matches!(result, Err(SchemaError::ParseError(_))));
    }

    #[test]
    fn test_unknown_type_is_preserved() {
        let json = r#"{"fields": [{"name": "Tags", "long": "tags", "type": "list"}]}"#;
        let schema = Schema::from_json(json).unwrap();
        assert_eq!(
            schema.fields[0].ty,
            FieldType::Unsupported("list".to_string())
        );
        assert_eq!(schema.fields[0].ty.to_string(), "list");
        assert!(schema.fields[0].value().is_none());
    }

    #[test]
    fn test_subcommands_from_json() {
        let json = r#"{
            "name": "app",
            "help": "subcmd",
            "subcommands": [
                {
                    "id": "Serve",
                    "description": "Start the server",
                    "fields": [
                        {"name": "Port", "long": "port", "type": "int", "default": "8080"}
                    ]
                },
                {
                    "id": "Status",
                    "name": "stat"
                }
            ]
        }"#;
        let schema = Schema::from_json(json).unwrap();
        schema.validate().unwrap();
        assert_eq!(schema.subcommand_names(), vec!["serve", "stat"]);

        let serve = schema.get_subcommand("serve").unwrap();
        assert_eq!(serve.id, "Serve");
        assert!(serve.name.is_none());
        assert!(serve.schema.name.is_none());
        assert_eq!(
            serve.schema.description,
            Some("Start the server".to_string())
        );
        assert_eq!(serve.schema.fields[0].ty, FieldType::Int);
        assert!(!serve.selected);
    }

    #[test]
    fn test_builder_matches_json() {
        let built = Schema::new("app")
            .version("1.2.3")
            .help(HelpMode::Flag)
            .field(Field::new("Name").short("n").long("name"))
            .subcommand(Subcommand::new("Serve", Schema::scope()));

        assert_eq!(built.program_name(), "app");
        assert_eq!(built.fields[0].short_flag(), Some("-n".to_string()));
        assert_eq!(built.fields[0].long_flag(), Some("--name".to_string()));
        assert_eq!(built.subcommand_names(), vec!["serve"]);
        built.validate().unwrap();
    }

    #[test]
    fn test_flags_derived_from_name() {
        let field = Field::new("Age").short_from_name().long_from_name();
        assert_eq!(field.short.as_deref(), Some("a"));
        assert_eq!(field.long.as_deref(), Some("age"));
        assert!(!field.is_positional());
    }

    #[test]
    fn test_zero_values() {
        assert_eq!(Field::new("s").value(), Some(Value::Str(String::new())));
        assert_eq!(
            Field::new("i").value_type(FieldType::Int).value(),
            Some(Value::Int(0))
        );
        assert_eq!(
            Field::new("f").value_type("float").value(),
            Some(Value::Float(0.0))
        );
        assert_eq!(
            Field::new("b").value_type("bool").value(),
            Some(Value::Bool(false))
        );
        assert!(!Field::new("s").is_bound());
    }

    #[test]
    fn test_error_on_duplicate_field_names() {
        let schema = Schema::new("test")
            .field(Field::new("dup").short("a"))
            .field(Field::new("dup").short("b"));
        let result = schema.validate();
        assert!(matches!(result, Err(SchemaError::DuplicateName(name)) if name == "dup"));
    }

    #[test]
    fn test_error_on_duplicate_flags() {
        let schema = Schema::new("test")
            .field(Field::new("First").long("out"))
            .field(Field::new("Second").long("out"));
        let result = schema.validate();
        assert!(matches!(
            result,
            Err(SchemaError::DuplicateFlag(flag, name)) if flag == "--out" && name == "Second"
        ));
    }

    #[test]
    fn test_error_on_invalid_short_option() {
        for short in ["", "ab", "-"] {
            let schema = Schema::new("test").field(Field::new("bad").short(short));
            assert!(
                matches!(schema.validate(), Err(SchemaError::InvalidShortOption(..))),
                "Expected short '{}' to be invalid",
                short
            );
        }
    }

    #[test]
    fn test_error_on_invalid_long_option() {
        let schema = Schema::new("test").field(Field::new("bad").long("--bad"));
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::InvalidLongOption(..))
        ));
    }

    #[test]
    fn test_error_on_reserved_flags() {
        let schema = Schema::new("test").field(Field::new("Host").short("h"));
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::ReservedFlag(flag, _)) if flag == "-h"
        ));

        let schema = Schema::new("test").field(Field::new("Ver").long("version"));
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::ReservedFlag(flag, _)) if flag == "--version"
        ));
    }

    #[test]
    fn test_error_on_reserved_subcommand_name() {
        let schema = Schema::new("test").subcommand(Subcommand::new("Help", Schema::scope()));
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::ReservedSubcommandName(name)) if name == "help"
        ));
    }

    #[test]
    fn test_error_on_duplicate_subcommand_name() {
        let schema = Schema::new("test")
            .subcommand(Subcommand::new("Init", Schema::scope()))
            .subcommand(Subcommand::new("Other", Schema::scope()).named("init"));
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::DuplicateSubcommandName(name)) if name == "init"
        ));
    }

    #[test]
    fn test_nested_scopes_are_validated() {
        let child = Schema::scope()
            .field(Field::new("A").long("same"))
            .field(Field::new("B").long("same"));
        let schema = Schema::new("test").subcommand(Subcommand::new("Run", child));
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::DuplicateFlag(..))
        ));
    }

    #[test]
    fn test_required_positional_after_optional_is_valid() {
        let schema = Schema::new("test")
            .field(Field::new("Optional"))
            .field(Field::new("Needed").required());
        schema.validate().unwrap();
    }

    #[test]
    fn test_error_on_empty_subcommand_name() {
        let schema = Schema::new("test").subcommand(Subcommand::new("", Schema::scope()));
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::EmptySubcommandName(_))
        ));

        let schema =
            Schema::new("test").subcommand(Subcommand::new("Run", Schema::scope()).named(""));
        assert!(matches!(
            schema.validate(),
            Err(SchemaError::EmptySubcommandName(id)) if id == "Run"
        ));
    }

    #[test]
    fn test_same_flag_allowed_in_different_scopes() {
        let schema = Schema::new("test")
            .field(Field::new("Verbose").long("verbose").value_type("bool"))
            .subcommand(Subcommand::new(
                "Run",
                Schema::scope().field(Field::new("Verbose").long("verbose").value_type("bool")),
            ));
        schema.validate().unwrap();
    }

    #[test]
    fn test_reset_clears_values_and_selection() {
        let mut schema = Schema::new("test")
            .field(Field::new("Name"))
            .subcommand(Subcommand::new(
                "Run",
                Schema::scope().field(Field::new("File")),
            ));
        schema.fields[0].bind(Value::Str("x".to_string()));
        schema.subcommands[0].selected = true;
        schema.subcommands[0].schema.fields[0].bind(Value::Str("y".to_string()));
        assert_eq!(schema.selected_path(), vec!["run"]);

        schema.reset();
        assert!(!schema.fields[0].is_bound());
        assert!(schema.selected().is_none());
        assert!(!schema.subcommands[0].schema.fields[0].is_bound());
    }

    #[test]
    fn test_help_mode_forms() {
        assert!(HelpMode::Flag.allows_flag());
        assert!(!HelpMode::Flag.allows_subcommand());
        assert!(!HelpMode::Subcmd.allows_flag());
        assert!(HelpMode::Subcmd.allows_subcommand());
        assert!(HelpMode::Both.allows_flag() && HelpMode::Both.allows_subcommand());
    }
}
