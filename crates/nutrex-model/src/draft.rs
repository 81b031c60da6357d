//! Closed-world coercion of untyped generator output
//!
//! The text-generation collaborator hands this layer a loosely typed JSON
//! value parsed from its completion. These records round-trip through an
//! untyped intermediate, so a misspelled or invented key must be caught here
//! rather than silently dropped. Every draft-constructible type declares its
//! field table; [`DraftModel::from_draft`] rejects unknown keys, missing
//! required keys, and malformed spans before typed deserialization runs.

use crate::error::{Error, Result};
use crate::span::Span;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// A type that can be constructed from an untyped draft record.
pub trait DraftModel: DeserializeOwned {
    /// Type name used in validation errors
    const TYPE_NAME: &'static str;

    /// Every field the type declares
    const FIELDS: &'static [&'static str];

    /// Fields that must be present and non-null
    const REQUIRED: &'static [&'static str] = &[];

    /// Whether the type carries an `original_spans` field
    const HAS_SPANS: bool = false;

    /// Validate and normalize a draft in place, including nested drafts.
    fn prepare(value: &mut Value) -> Result<()> {
        let object = as_object_mut::<Self>(value)?;
        check_fields::<Self>(object)?;
        if Self::HAS_SPANS {
            coerce_spans(object)?;
        }
        Self::prepare_children(object)
    }

    /// Hook for aggregate types to validate nested draft structures
    fn prepare_children(_object: &mut Map<String, Value>) -> Result<()> {
        Ok(())
    }

    /// Validate a draft and coerce it into the typed structure.
    ///
    /// The record either validates fully or is rejected whole.
    fn from_draft(mut value: Value) -> Result<Self> {
        Self::prepare(&mut value)?;
        serde_json::from_value(value).map_err(Error::from)
    }
}

fn as_object_mut<T: DraftModel>(value: &mut Value) -> Result<&mut Map<String, Value>> {
    match value {
        Value::Object(object) => Ok(object),
        _ => Err(Error::NotAnObject {
            type_name: T::TYPE_NAME,
        }),
    }
}

fn check_fields<T: DraftModel>(object: &Map<String, Value>) -> Result<()> {
    for key in object.keys() {
        if !T::FIELDS.contains(&key.as_str()) {
            tracing::debug!(type_name = T::TYPE_NAME, field = %key, "rejecting unknown draft field");
            return Err(Error::UnknownField {
                type_name: T::TYPE_NAME,
                field: key.clone(),
            });
        }
    }
    for field in T::REQUIRED {
        let missing = match object.get(*field) {
            None | Some(Value::Null) => true,
            Some(_) => false,
        };
        if missing {
            return Err(Error::MissingRequiredField {
                type_name: T::TYPE_NAME,
                field,
            });
        }
    }
    Ok(())
}

/// Validate the `original_spans` draft value and normalize it to a list.
///
/// The generator-facing contract allows the field to be absent, a single
/// span string, or a list of span strings; the typed model stores a list.
fn coerce_spans(object: &mut Map<String, Value>) -> Result<()> {
    let Some(value) = object.get_mut("original_spans") else {
        return Ok(());
    };
    match value {
        Value::Null => Ok(()),
        Value::String(span) => {
            Span::parse(span.as_str())?;
            let span = std::mem::take(span);
            *value = Value::Array(vec![Value::String(span)]);
            Ok(())
        }
        Value::Array(elements) => {
            for element in elements.iter() {
                match element {
                    Value::String(span) => {
                        Span::parse(span.as_str())?;
                    }
                    other => {
                        return Err(Error::MalformedSpan {
                            value: other.to_string(),
                        })
                    }
                }
            }
            Ok(())
        }
        other => Err(Error::MalformedSpan {
            value: other.to_string(),
        }),
    }
}

/// Validate every element of a nested draft list under `key`.
pub(crate) fn prepare_list<T: DraftModel>(
    object: &mut Map<String, Value>,
    key: &str,
) -> Result<()> {
    if let Some(Value::Array(elements)) = object.get_mut(key) {
        for element in elements.iter_mut() {
            T::prepare(element)?;
        }
    }
    Ok(())
}
