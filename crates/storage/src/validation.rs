//! Record shapes shared by all catalog sources.
//!
//! Each source maps its raw rows onto [`RawExercise`], which keeps the untyped JSON values. Only
//! [`validate_exercise_data`] turns them into domain exercises.

use std::collections::BTreeMap;

use fitcalc_domain::{Exercise, StorageError};
use log::debug;
use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawExercise {
    pub id: Value,
    pub name: Value,
    pub description: Value,
    pub base_weight_factor: Value,
    pub muscle_involvement: Value,
}

impl RawExercise {
    fn validate(self) -> Option<Exercise> {
        match self {
            RawExercise {
                id: Value::String(id),
                name: Value::String(name),
                description: Value::String(description),
                base_weight_factor: Value::Number(base_weight_factor),
                muscle_involvement: Value::Object(muscle_involvement),
            } => Some(Exercise {
                id: id.into(),
                name,
                description,
                base_weight_factor: base_weight_factor.as_f64()?,
                muscle_involvement: muscle_involvement
                    .iter()
                    .filter_map(|(muscle, value)| Some((muscle.clone(), involvement(value)?)))
                    .collect::<BTreeMap<_, _>>(),
            }),
            _ => None,
        }
    }
}

/// Keeps the records that have all fields with the expected JSON types, in their original
/// order. Everything else is dropped.
#[must_use]
pub fn validate_exercise_data(records: Vec<RawExercise>) -> Vec<Exercise> {
    let total = records.len();
    let exercises = records
        .into_iter()
        .filter_map(RawExercise::validate)
        .collect::<Vec<_>>();

    if exercises.len() < total {
        debug!(
            "dropped {} of {total} malformed exercise records",
            total - exercises.len()
        );
    }

    exercises
}

/// Numeric value of a muscle involvement entry. Numeric strings are accepted, non-finite values
/// are not.
#[must_use]
pub fn involvement(value: &Value) -> Option<f64> {
    let value = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(string) => string.trim().parse::<f64>().ok()?,
        _ => return None,
    };

    value.is_finite().then_some(value)
}

/// Object of the numeric entries of an involvement document. The document may also arrive
/// encoded as a JSON string. Values that are no document at all are returned unchanged.
#[must_use]
pub fn involvement_document(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(numeric_entries(map)),
        Value::String(string) => match serde_json::from_str::<Value>(string) {
            Ok(Value::Object(map)) => Value::Object(numeric_entries(&map)),
            _ => value.clone(),
        },
        _ => value.clone(),
    }
}

fn numeric_entries(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter()
        .filter_map(|(muscle, value)| {
            Some((
                muscle.clone(),
                Value::Number(Number::from_f64(involvement(value)?)?),
            ))
        })
        .collect()
}

/// First of the given fields present in the record.
#[must_use]
pub fn field(record: &Value, names: &[&str]) -> Value {
    names
        .iter()
        .find_map(|name| record.get(name))
        .cloned()
        .unwrap_or(Value::Null)
}

/// Key used to join records by id.
#[must_use]
pub fn join_key(value: &Value) -> Option<String> {
    match value {
        Value::String(string) => Some(string.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

pub fn into_array(value: Value) -> Result<Vec<Value>, StorageError> {
    match value {
        Value::Array(records) => Ok(records),
        other => Err(StorageError::Deserialization(format!(
            "expected array of records, got {}",
            type_name(&other)
        ))),
    }
}

/// Records of a data file, which is either `{"exercises": [...]}` or a bare array.
pub fn into_records(value: Value) -> Result<Vec<Value>, StorageError> {
    match value {
        Value::Object(mut map) => match map.remove("exercises") {
            Some(exercises) => into_array(exercises),
            None => Err(StorageError::Deserialization(
                "expected exercises field".to_string(),
            )),
        },
        other => into_array(other),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
