/// Candle interval. The label set matches the intervals the upstream
/// exchange exports (Binance-style short labels).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeframe {
    pub label: String,
    pub step_seconds: i64,
}

impl Timeframe {
    pub fn parse(value: &str) -> Result<Self, String> {
        let normalized = value.trim().to_lowercase();
        let step_seconds = match normalized.as_str() {
            "1m" => 60,
            "5m" => 300,
            "15m" => 900,
            "30m" => 1800,
            "1h" => 3600,
            "4h" => 14400,
            "12h" => 43200,
            "1d" => 86400,
            "1w" => 604800,
            _ => return Err(format!("unsupported timeframe: {value}")),
        };
        Ok(Self {
            label: normalized,
            step_seconds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::Timeframe;

    #[test]
    fn parse_normalizes_case() {
        let tf = Timeframe::parse(" 1H ").expect("parse");
        assert_eq!(tf.label, "1h");
        assert_eq!(tf.step_seconds, 3600);
    }

    #[test]
    fn parse_rejects_unknown_label() {
        let err = Timeframe::parse("7m").expect_err("should fail");
        assert!(err.contains("unsupported timeframe"));
    }
}
