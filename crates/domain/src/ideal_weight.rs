//! Ideal exercise weight
//!
//! The recommended working weight is the skeletal muscle mass multiplied by independent
//! correction factors for sex, age, experience, height, body fat and the exercise itself. The
//! continuous factors for height and body fat are clamped, so a single extreme input cannot
//! dominate or invert the estimate.

use std::{collections::BTreeMap, sync::LazyLock};

use crate::{ExperienceLevel, PersonalInputs, Sex};

const FEMALE_FACTOR: f64 = 0.9;
const MALE_FACTOR: f64 = 1.0;

const AGE_THRESHOLD: f64 = 30.;
const AGE_DECAY_PER_YEAR: f64 = 0.01;

const DEFAULT_EXPERIENCE_FACTOR: f64 = 0.8;

const HEIGHT_INFLUENCE: f64 = 0.0025;
const MIN_HEIGHT_FACTOR: f64 = 0.85;
const MAX_HEIGHT_FACTOR: f64 = 1.15;

const FAT_INFLUENCE: f64 = 0.5;
const MIN_FAT_FACTOR: f64 = 0.7;
const MAX_FAT_FACTOR: f64 = 1.1;
const MIN_BODY_WEIGHT: f64 = 1e-6;

pub static FACTOR_TABLES: LazyLock<FactorTables> = LazyLock::new(FactorTables::default);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperienceFactor {
    pub factor: f64,
    pub label: &'static str,
}

/// Lookup tables used by the estimator.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorTables {
    pub experience: BTreeMap<ExperienceLevel, ExperienceFactor>,
    pub average_height_female: f64,
    pub average_height_male: f64,
}

impl FactorTables {
    #[must_use]
    pub fn average_height(&self, sex: Sex) -> f64 {
        match sex {
            Sex::FEMALE => self.average_height_female,
            Sex::MALE => self.average_height_male,
        }
    }

    #[must_use]
    pub fn label(&self, experience: ExperienceLevel) -> &'static str {
        self.experience
            .get(&experience)
            .map_or("", |experience| experience.label)
    }
}

impl Default for FactorTables {
    fn default() -> Self {
        Self {
            experience: BTreeMap::from([
                (
                    ExperienceLevel::Cat1,
                    ExperienceFactor {
                        factor: 0.6,
                        label: "Beginner",
                    },
                ),
                (
                    ExperienceLevel::Cat2,
                    ExperienceFactor {
                        factor: 0.7,
                        label: "Novice",
                    },
                ),
                (
                    ExperienceLevel::Cat3,
                    ExperienceFactor {
                        factor: 0.8,
                        label: "Intermediate",
                    },
                ),
                (
                    ExperienceLevel::Cat4,
                    ExperienceFactor {
                        factor: 0.9,
                        label: "Advanced",
                    },
                ),
                (
                    ExperienceLevel::Cat5,
                    ExperienceFactor {
                        factor: 1.0,
                        label: "Elite",
                    },
                ),
            ]),
            average_height_female: 162.,
            average_height_male: 175.,
        }
    }
}

impl ExperienceLevel {
    #[must_use]
    pub fn label(self) -> &'static str {
        FACTOR_TABLES.label(self)
    }
}

/// Recommended working weight in the mass unit of the inputs.
#[must_use]
pub fn ideal_weight(inputs: &PersonalInputs, exercise_base_factor: f64) -> f64 {
    ideal_weight_with(&FACTOR_TABLES, inputs, exercise_base_factor)
}

#[must_use]
pub fn ideal_weight_with(
    tables: &FactorTables,
    inputs: &PersonalInputs,
    exercise_base_factor: f64,
) -> f64 {
    inputs.skeletal_muscle_mass
        * sex_factor(inputs.sex)
        * age_factor(inputs.age)
        * experience_factor(tables, inputs.experience)
        * fat_factor(inputs.body_fat_mass, inputs.body_weight)
        * height_factor(tables, inputs.sex, inputs.height)
        * exercise_factor(exercise_base_factor)
}

#[must_use]
pub fn sex_factor(sex: Sex) -> f64 {
    match sex {
        Sex::FEMALE => FEMALE_FACTOR,
        Sex::MALE => MALE_FACTOR,
    }
}

/// Decays by one percent per year past 30.
///
/// The result is not clamped and becomes negative beyond an age of 130.
#[must_use]
pub fn age_factor(age: f64) -> f64 {
    if age <= AGE_THRESHOLD {
        1.0
    } else {
        1.0 - AGE_DECAY_PER_YEAR * (age - AGE_THRESHOLD)
    }
}

#[must_use]
pub fn experience_factor(tables: &FactorTables, experience: ExperienceLevel) -> f64 {
    tables
        .experience
        .get(&experience)
        .map_or(DEFAULT_EXPERIENCE_FACTOR, |experience| experience.factor)
}

#[must_use]
pub fn height_factor(tables: &FactorTables, sex: Sex, height: f64) -> f64 {
    let raw = 1.0 - HEIGHT_INFLUENCE * (height - tables.average_height(sex));
    // max/min instead of clamp, so that NaN ends up inside the bounds
    raw.max(MIN_HEIGHT_FACTOR).min(MAX_HEIGHT_FACTOR)
}

#[must_use]
pub fn fat_factor(body_fat_mass: f64, body_weight: f64) -> f64 {
    let body_weight = body_weight.max(MIN_BODY_WEIGHT);
    let body_fat_mass = body_fat_mass.max(0.).min(body_weight);
    let raw = 1.0 - FAT_INFLUENCE * (body_fat_mass / body_weight);
    raw.max(MIN_FAT_FACTOR).min(MAX_FAT_FACTOR)
}

#[must_use]
pub fn exercise_factor(exercise_base_factor: f64) -> f64 {
    if exercise_base_factor.is_finite() {
        exercise_base_factor
    } else {
        1.0
    }
}
