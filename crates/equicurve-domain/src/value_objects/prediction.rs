/// A continuous-valued prediction score for one candle timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionPoint {
    pub timestamp: i64,
    pub score: f64,
}
