//! Structural schema validation.
//!
//! A minimal shape descriptor for decoded JSON objects: field names, field
//! types, and required-ness. Validation answers "does this object satisfy
//! this shape" before the value is deserialized into a caller type, so
//! failures can name the offending field instead of surfacing a generic
//! deserialization error.

use crate::parser::ParseError;
use serde_json::Value;

/// Field name used when the top-level value itself fails validation.
pub const ROOT_FIELD: &str = "$";

/// Expected JSON type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// A JSON string
    String,
    /// Any JSON number
    Number,
    /// A JSON number with an integral value
    Integer,
    /// A JSON boolean
    Boolean,
    /// A JSON array
    Array,
    /// A JSON object
    Object,
    /// Any JSON value, including null
    Any,
}

impl FieldType {
    /// Returns true if `value` is compatible with this type.
    ///
    /// Integers are accepted where `Number` is expected; no other coercion
    /// is performed.
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            FieldType::String => value.is_string(),
            FieldType::Number => value.is_number(),
            FieldType::Integer => value.is_i64() || value.is_u64(),
            FieldType::Boolean => value.is_boolean(),
            FieldType::Array => value.is_array(),
            FieldType::Object => value.is_object(),
            FieldType::Any => true,
        }
    }

    /// Returns the human-readable name of this type.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Integer => "integer",
            FieldType::Boolean => "boolean",
            FieldType::Array => "array",
            FieldType::Object => "object",
            FieldType::Any => "any",
        }
    }
}

/// One declared field of a schema shape.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldSpec {
    name: String,
    field_type: FieldType,
    required: bool,
}

/// Structural description of the expected payload: declared fields with
/// types and required-ness. Undeclared fields in the payload are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaShape {
    fields: Vec<FieldSpec>,
}

impl SchemaShape {
    /// Creates an empty shape. An empty shape only requires the payload to
    /// be a JSON object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a required field.
    #[must_use]
    pub fn required(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.fields.push(FieldSpec {
            name: name.into(),
            field_type,
            required: true,
        });
        self
    }

    /// Declares an optional field. When present it must still match the
    /// declared type.
    #[must_use]
    pub fn optional(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.fields.push(FieldSpec {
            name: name.into(),
            field_type,
            required: false,
        });
        self
    }

    /// Returns the number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no fields are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validates a decoded value against this shape.
    ///
    /// # Errors
    ///
    /// Returns a schema validation error naming the first offending field:
    /// the top-level value is not an object, a required field is missing,
    /// or a present field has an incompatible type.
    pub fn validate(&self, value: &Value) -> Result<(), ParseError> {
        let Some(object) = value.as_object() else {
            return Err(ParseError::schema_validation(
                ROOT_FIELD,
                format!("expected a JSON object, found {}", json_type_name(value)),
            ));
        };

        for field in &self.fields {
            match object.get(&field.name) {
                Some(found) => {
                    if !field.field_type.matches(found) {
                        return Err(ParseError::schema_validation(
                            &field.name,
                            format!(
                                "expected {}, found {}",
                                field.field_type.name(),
                                json_type_name(found)
                            ),
                        ));
                    }
                }
                None => {
                    if field.required {
                        return Err(ParseError::schema_validation(
                            &field.name,
                            "required field is missing",
                        ));
                    }
                }
            }
        }

        Ok(())
    }
}

/// Returns the JSON type name of a value, for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
