pub mod config;
pub mod meta;
pub mod reporting;
pub mod shared;
pub mod simulation;
pub mod validation;
