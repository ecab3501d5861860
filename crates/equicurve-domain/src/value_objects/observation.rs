/// A candle joined with its thresholded trading signal.
///
/// The signal is kept as the raw number (1.0 = hold asset, 0.0 = hold cash)
/// so the simulator can enforce the {0,1} domain itself instead of trusting
/// upstream thresholding.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub timestamp: i64,
    pub open: f64,
    pub close: f64,
    pub signal: f64,
}
