use std::collections::HashMap;

use fitcalc_domain::{CatalogError, ReadError};
use futures_util::future::try_join;
use serde_json::{Map, Number, Value};

use crate::{
    rest::{REST, SendRequest},
    validation::{RawExercise, field, into_array, involvement, join_key},
};

const EXERCISE_COLUMNS: &str = "id,name,description,base_weight_factor";
const INVOLVEMENT_COLUMNS: &str = "exercise_id,involvement,muscle:muscles(name)";

/// Exercises and their muscle involvement read from two tables and merged by exercise id.
///
/// Fails if no involvement row is readable. An empty relation cannot be told apart from
/// restricted read access, and exercises without involvement would corrupt the breakdown.
pub async fn fetch<S: SendRequest>(rest: &REST<S>) -> Result<Vec<RawExercise>, ReadError> {
    let (exercises, involvement_rows) = try_join(
        rest.select(&rest.config.exercises_table, EXERCISE_COLUMNS),
        rest.select(&rest.config.involvement_table, INVOLVEMENT_COLUMNS),
    )
    .await?;

    let exercises = into_array(exercises)?;
    let involvement_rows = into_array(involvement_rows)?;

    if involvement_rows.is_empty() {
        return Err(CatalogError::EmptyInvolvement.into());
    }

    let mut involvement_by_exercise = HashMap::<String, Map<String, Value>>::new();

    for row in &involvement_rows {
        let (Some(exercise_id), Some(muscle), Some(value)) = (
            join_key(&row["exercise_id"]),
            muscle_name(row),
            involvement(&row["involvement"]).and_then(Number::from_f64),
        ) else {
            continue;
        };
        involvement_by_exercise
            .entry(exercise_id)
            .or_default()
            .insert(muscle.to_string(), Value::Number(value));
    }

    Ok(exercises
        .iter()
        .map(|exercise| RawExercise {
            id: field(exercise, &["id"]),
            name: field(exercise, &["name"]),
            description: field(exercise, &["description"]),
            base_weight_factor: field(exercise, &["base_weight_factor"]),
            muscle_involvement: Value::Object(
                join_key(&exercise["id"])
                    .and_then(|id| involvement_by_exercise.get(&id).cloned())
                    .unwrap_or_default(),
            ),
        })
        .collect())
}

fn muscle_name(row: &Value) -> Option<&str> {
    row["muscle"]["name"]
        .as_str()
        .or_else(|| row["muscle_name"].as_str())
}
