//! Binding of one scope's fields against classified tokens.

use crate::parser::ParseError;
use crate::schema::{Field, FieldType, Schema, Value};
use crate::tokens::Classification;
use tracing::trace;

/// Bind every field of `schema` from `tokens`.
///
/// Fields bound before a failing field keep their values.
pub fn resolve_scope(schema: &mut Schema, tokens: &Classification) -> Result<(), ParseError> {
    let mut positional_cursor = 0;
    for field in &mut schema.fields {
        resolve_field(field, tokens, &mut positional_cursor)?;
    }
    Ok(())
}

/// Bind one field, first match wins:
/// long value, short value, long presence, short presence, next positional,
/// default, required error. Otherwise the slot stays at its zero value.
fn resolve_field(
    field: &mut Field,
    tokens: &Classification,
    positional_cursor: &mut usize,
) -> Result<(), ParseError> {
    if let FieldType::Unsupported(ref ty) = field.ty {
        return Err(ParseError::UnsupportedFieldType {
            field: field.name.clone(),
            ty: ty.clone(),
        });
    }

    let long = field.long_flag();
    let short = field.short_flag();

    let raw = long
        .as_deref()
        .and_then(|flag| tokens.value(flag))
        .or_else(|| short.as_deref().and_then(|flag| tokens.value(flag)))
        .map(str::to_string)
        .or_else(|| presence(long.as_deref(), tokens))
        .or_else(|| presence(short.as_deref(), tokens))
        .or_else(|| {
            if !field.is_positional() {
                return None;
            }
            let token = tokens.positionals.get(*positional_cursor)?;
            *positional_cursor += 1;
            Some(token.clone())
        })
        .or_else(|| field.default.clone().filter(|d| !d.is_empty()));

    let Some(raw) = raw else {
        if field.required {
            return Err(ParseError::MissingRequired {
                field: field.name.clone(),
            });
        }
        return Ok(());
    };

    let value = coerce(&field.name, &field.ty, &raw)?;
    trace!(field = %field.name, value = %value, "bound field");
    field.bind(value);
    Ok(())
}

/// A flag that appeared without a value binds as `"true"`.
fn presence(flag: Option<&str>, tokens: &Classification) -> Option<String> {
    flag.filter(|f| tokens.is_present(f))
        .map(|_| "true".to_string())
}

/// Convert a matched string into the field's declared type.
pub fn coerce(field: &str, ty: &FieldType, raw: &str) -> Result<Value, ParseError> {
    let invalid = || ParseError::InvalidValue {
        field: field.to_string(),
        value: raw.to_string(),
        expected: ty.to_string(),
    };

    match ty {
        FieldType::String => Ok(Value::Str(raw.to_string())),
        FieldType::Int => raw.parse::<i64>().map(Value::Int).map_err(|_| invalid()),
        FieldType::Float => raw.parse::<f64>().map(Value::Float).map_err(|_| invalid()),
        FieldType::Bool => raw.parse::<bool>().map(Value::Bool).map_err(|_| invalid()),
        FieldType::Unsupported(ty) => Err(ParseError::UnsupportedFieldType {
            field: field.to_string(),
            ty: ty.clone(),
        }),
    }
}
