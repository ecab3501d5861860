/// One market-data row: open/close over a single interval, epoch seconds UTC.
#[derive(Debug, Clone, PartialEq)]
pub struct Candle {
    pub timestamp: i64,
    pub open: f64,
    pub close: f64,
}
