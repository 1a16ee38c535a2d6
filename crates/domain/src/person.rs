use std::fmt;

use strum::{AsRefStr, EnumIter, EnumString};

/// Biometrics and training background of the person a weight is estimated for.
///
/// Masses are in kilograms, height in centimeters and age in years. The values are taken as
/// entered, out-of-range inputs are handled by the estimator's clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonalInputs {
    pub body_weight: f64,
    pub height: f64,
    pub age: f64,
    pub sex: Sex,
    pub experience: ExperienceLevel,
    pub skeletal_muscle_mass: f64,
    pub body_fat_mass: f64,
}

#[derive(AsRefStr, EnumString, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    #[strum(serialize = "female")]
    FEMALE,
    #[strum(serialize = "male")]
    MALE,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

/// Training experience, ordered from beginner to elite.
#[derive(
    AsRefStr, EnumIter, EnumString, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord,
)]
pub enum ExperienceLevel {
    #[strum(serialize = "cat1")]
    Cat1,
    #[strum(serialize = "cat2")]
    Cat2,
    #[strum(serialize = "cat3")]
    Cat3,
    #[strum(serialize = "cat4")]
    Cat4,
    #[strum(serialize = "cat5")]
    Cat5,
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}
