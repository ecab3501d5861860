use crate::value_objects::prediction::PredictionPoint;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy)]
pub enum PredictionFormat {
    Csv,
    Json,
}

#[derive(Debug, Clone)]
pub struct PredictionQuery {
    pub path: PathBuf,
    pub format: PredictionFormat,
}

pub trait PredictionRepository {
    fn load_predictions(&self, query: &PredictionQuery) -> Result<Vec<PredictionPoint>, String>;
}
