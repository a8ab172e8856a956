//! Terminal output for the apexdeploy binary

pub mod error;
pub mod output;
