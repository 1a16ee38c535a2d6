use log::{debug, error};

use crate::{
    Exercise, ExerciseID, ExerciseRepository, ExerciseService, MuscleShare, PersonalInputs,
    ReadError, ideal_weight,
};

#[allow(async_fn_in_trait)]
pub trait RecommendationService: ExerciseService {
    async fn recommend_weight(
        &self,
        inputs: &PersonalInputs,
        exercise_id: &ExerciseID,
    ) -> Result<Recommendation, ReadError> {
        let exercise = self.get_exercise(exercise_id).await?;
        Ok(Recommendation::new(inputs, &exercise))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub exercise_id: ExerciseID,
    pub weight: f64,
    pub breakdown: Vec<MuscleShare>,
}

impl Recommendation {
    #[must_use]
    pub fn new(inputs: &PersonalInputs, exercise: &Exercise) -> Self {
        Self {
            exercise_id: exercise.id.clone(),
            weight: ideal_weight(inputs, exercise.base_weight_factor),
            breakdown: exercise.muscle_breakdown(),
        }
    }
}

pub struct Service<R> {
    repository: R,
}

impl<R: ExerciseRepository> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ExerciseRepository> ExerciseService for Service<R> {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.repository.read_exercises(),
            ReadError,
            "get",
            "exercises"
        )
    }
}

impl<R: ExerciseRepository> RecommendationService for Service<R> {}
