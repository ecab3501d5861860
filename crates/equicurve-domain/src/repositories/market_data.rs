use crate::services::candles::DataQualityReport;
use crate::value_objects::candle::Candle;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CandleQuery {
    pub path: PathBuf,
    pub symbol: String,
    pub expected_step_seconds: Option<i64>,
}

pub trait MarketDataRepository {
    fn load_candles(&self, query: &CandleQuery)
        -> Result<(Vec<Candle>, DataQualityReport), String>;
}
