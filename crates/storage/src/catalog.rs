//! Exercise catalog resolution
//!
//! The stored procedure is the authoritative source of the catalog. The relational tables and the
//! static manifest files are alternative sources that callers can fall back to, in that order.

use fitcalc_domain::{self as domain, CatalogError, Exercise, ReadError};
use log::{debug, warn};
use strum::AsRefStr;

use crate::{
    Config, manifest, relational,
    rest::{GlooNetSendRequest, REST, SendRequest},
    rpc,
    validation::validate_exercise_data,
};

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    #[strum(serialize = "rpc")]
    Rpc,
    #[strum(serialize = "relational")]
    Relational,
    #[strum(serialize = "manifest")]
    Manifest,
}

impl CatalogSource {
    pub const PRECEDENCE: [CatalogSource; 3] = [
        CatalogSource::Rpc,
        CatalogSource::Relational,
        CatalogSource::Manifest,
    ];

    pub async fn fetch<S: SendRequest>(self, rest: &REST<S>) -> Result<Vec<Exercise>, ReadError> {
        let records = match self {
            CatalogSource::Rpc => rpc::fetch(rest).await?,
            CatalogSource::Relational => relational::fetch(rest).await?,
            CatalogSource::Manifest => manifest::fetch(rest).await?,
        };

        Ok(validate_exercise_data(records))
    }
}

#[derive(Clone)]
pub struct CatalogResolver<S: SendRequest> {
    pub rest: REST<S>,
}

impl CatalogResolver<GlooNetSendRequest> {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            rest: REST::new(config),
        }
    }
}

impl<S: SendRequest> CatalogResolver<S> {
    /// Catalog of the first source that yields at least one valid exercise.
    ///
    /// Returns the error of the last failed source if no source succeeds, or `NoExercises` if
    /// all of them came back empty.
    pub async fn resolve(&self, sources: &[CatalogSource]) -> Result<Vec<Exercise>, ReadError> {
        let mut last_error = None;

        for source in sources {
            match source.fetch(&self.rest).await {
                Ok(exercises) if !exercises.is_empty() => {
                    debug!(
                        "resolved {} exercises from {} source",
                        exercises.len(),
                        source.as_ref()
                    );
                    return Ok(exercises);
                }
                Ok(_) => {
                    warn!("{} source returned no valid exercises", source.as_ref());
                }
                Err(err) => {
                    warn!("failed to resolve exercises from {} source: {err}", source.as_ref());
                    last_error = Some(err);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| CatalogError::NoExercises.into()))
    }
}

impl<S: SendRequest> domain::ExerciseRepository for CatalogResolver<S> {
    async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        let exercises = CatalogSource::Rpc.fetch(&self.rest).await?;

        if exercises.is_empty() {
            return Err(CatalogError::NoExercises.into());
        }

        Ok(exercises)
    }
}
