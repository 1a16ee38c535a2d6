#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod exercise;
mod ideal_weight;
mod person;
mod service;

pub use error::*;
pub use exercise::*;
pub use ideal_weight::*;
pub use person::*;
pub use service::*;
