use std::collections::{BTreeMap, HashMap};

use fitcalc_domain::{CatalogError, ReadError, StorageError};
use futures_util::future::try_join;
use serde::Deserialize;

use crate::{
    rest::{REST, SendRequest},
    validation::{RawExercise, field, into_records, join_key},
};

#[derive(Deserialize, Debug, PartialEq)]
pub struct Manifest {
    pub files: BTreeMap<String, String>,
}

impl Manifest {
    pub fn path(&self, dataset: &str) -> Result<&str, CatalogError> {
        self.files
            .get(dataset)
            .map(String::as_str)
            .ok_or_else(|| CatalogError::MissingManifestEntry(dataset.to_string()))
    }
}

/// Exercise metadata and training data from versioned static files, joined by id.
///
/// A metadata entry without training data fails the whole load.
pub async fn fetch<S: SendRequest>(rest: &REST<S>) -> Result<Vec<RawExercise>, ReadError> {
    let config = &rest.config;
    let manifest = serde_json::from_value::<Manifest>(rest.get(config.manifest_url()).await?)
        .map_err(|err| StorageError::Deserialization(err.to_string()))?;

    let (meta, training_data) = try_join(
        rest.get(config.data_url(manifest.path(&config.meta_dataset)?)),
        rest.get(config.data_url(manifest.path(&config.training_dataset)?)),
    )
    .await?;

    let meta = into_records(meta)?;
    let training_data = into_records(training_data)?;

    let training_data_by_id = training_data
        .iter()
        .filter_map(|entry| Some((join_key(&entry["id"])?, entry)))
        .collect::<HashMap<_, _>>();

    meta.iter()
        .map(|entry| -> Result<RawExercise, ReadError> {
            let id = join_key(&entry["id"]);
            let training = id
                .as_ref()
                .and_then(|id| training_data_by_id.get(id))
                .ok_or_else(|| {
                    CatalogError::MissingTrainingData(
                        id.clone().unwrap_or_else(|| entry["id"].to_string()),
                    )
                })?;

            Ok(RawExercise {
                id: field(entry, &["id"]),
                name: field(entry, &["name"]),
                description: field(entry, &["description"]),
                base_weight_factor: field(training, &["baseWeightFactor", "base_weight_factor"]),
                muscle_involvement: field(training, &["muscleInvolvement", "muscle_involvement"]),
            })
        })
        .collect()
}
