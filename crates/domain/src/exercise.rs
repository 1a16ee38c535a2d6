use std::{cmp::Ordering, collections::BTreeMap};

use derive_more::{AsRef, Deref, Display};

use crate::{CatalogError, ReadError};

#[allow(async_fn_in_trait)]
pub trait ExerciseService {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError>;

    async fn get_exercise(&self, id: &ExerciseID) -> Result<Exercise, ReadError> {
        self.get_exercises()
            .await?
            .into_iter()
            .find(|e| e.id == *id)
            .ok_or_else(|| CatalogError::UnknownExercise(id.clone()).into())
    }
}

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
    pub description: String,
    pub base_weight_factor: f64,
    pub muscle_involvement: BTreeMap<String, f64>,
}

impl Exercise {
    /// Involved muscles, most involved first, with their share of the total involvement.
    #[must_use]
    pub fn muscle_breakdown(&self) -> Vec<MuscleShare> {
        let total = self
            .muscle_involvement
            .values()
            .filter(|v| **v > 0.)
            .sum::<f64>();

        let mut breakdown = self
            .muscle_involvement
            .iter()
            .map(|(muscle, involvement)| MuscleShare {
                muscle: muscle.clone(),
                involvement: *involvement,
                share: if total > 0. {
                    involvement.max(0.) / total
                } else {
                    0.
                },
            })
            .collect::<Vec<_>>();

        breakdown.sort_by(|a, b| {
            b.involvement
                .partial_cmp(&a.involvement)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.muscle.cmp(&b.muscle))
        });

        breakdown
    }

    #[must_use]
    pub fn primary_muscle(&self) -> Option<MuscleShare> {
        self.muscle_breakdown().into_iter().next()
    }
}

#[derive(AsRef, Deref, Display, Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(String);

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MuscleShare {
    pub muscle: String,
    pub involvement: f64,
    pub share: f64,
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;

    use super::*;

    fn exercise(muscle_involvement: &[(&str, f64)]) -> Exercise {
        Exercise {
            id: "bench_press".into(),
            name: "Bench Press".to_string(),
            description: "Barbell press on a flat bench".to_string(),
            base_weight_factor: 1.0,
            muscle_involvement: muscle_involvement
                .iter()
                .map(|(m, i)| ((*m).to_string(), *i))
                .collect(),
        }
    }

    #[test]
    fn test_exercise_muscle_breakdown() {
        let breakdown = exercise(&[("Triceps", 30.), ("Chest", 60.), ("Shoulders", 30.)])
            .muscle_breakdown();

        assert_eq!(
            breakdown
                .iter()
                .map(|m| (m.muscle.as_str(), m.involvement))
                .collect::<Vec<_>>(),
            vec![("Chest", 60.), ("Shoulders", 30.), ("Triceps", 30.)]
        );
        assert_approx_eq!(breakdown[0].share, 0.5);
        assert_approx_eq!(breakdown[1].share, 0.25);
        assert_approx_eq!(breakdown[2].share, 0.25);
    }

    #[test]
    fn test_exercise_muscle_breakdown_without_involvement() {
        assert_eq!(exercise(&[]).muscle_breakdown(), vec![]);
        assert_eq!(
            exercise(&[("Chest", 0.)]).muscle_breakdown(),
            vec![MuscleShare {
                muscle: "Chest".to_string(),
                involvement: 0.,
                share: 0.
            }]
        );
    }

    #[test]
    fn test_exercise_muscle_breakdown_negative_involvement() {
        let breakdown = exercise(&[("Chest", 80.), ("Core", -20.)]).muscle_breakdown();

        assert_approx_eq!(breakdown[0].share, 1.0);
        assert_approx_eq!(breakdown[1].share, 0.0);
    }

    #[test]
    fn test_exercise_primary_muscle() {
        assert_eq!(
            exercise(&[("Triceps", 30.), ("Chest", 60.)])
                .primary_muscle()
                .map(|m| m.muscle),
            Some("Chest".to_string())
        );
        assert_eq!(exercise(&[]).primary_muscle(), None);
    }

    #[test]
    fn test_exercise_id() {
        assert_eq!(ExerciseID::from("squat"), ExerciseID::from("squat".to_string()));
        assert_eq!(ExerciseID::from("squat").to_string(), "squat");
        assert_eq!(ExerciseID::from("squat").as_str(), "squat");
        assert!(ExerciseID::default().is_empty());
    }
}
