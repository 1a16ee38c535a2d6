use fitcalc_domain::ReadError;
use serde_json::Value;

use crate::{
    rest::{REST, SendRequest},
    validation::{RawExercise, field, into_array, involvement_document},
};

/// Denormalized catalog rows returned by the stored procedure.
pub async fn fetch<S: SendRequest>(rest: &REST<S>) -> Result<Vec<RawExercise>, ReadError> {
    let rows = into_array(rest.call_rpc().await?)?;
    Ok(rows.iter().map(raw_exercise).collect())
}

fn raw_exercise(row: &Value) -> RawExercise {
    RawExercise {
        id: field(row, &["id"]),
        name: field(row, &["name"]),
        description: field(row, &["description"]),
        base_weight_factor: field(row, &["base_weight_factor"]),
        muscle_involvement: involvement_document(&field(row, &["muscle_involvement"])),
    }
}
