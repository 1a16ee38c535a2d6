#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod config;
pub mod manifest;
pub mod relational;
pub mod rest;
pub mod rpc;
pub mod validation;

pub use config::Config;
