/// One row of a simulation result. `cash_usd` and `total_value_usd` are
/// rounded to one decimal for presentation; `asset_qty` is full precision.
#[derive(Debug, Clone, PartialEq)]
pub struct EquityPoint {
    pub timestamp: i64,
    pub cash_usd: f64,
    pub asset_qty: f64,
    pub total_value_usd: f64,
}
