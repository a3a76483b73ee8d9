//! Query parameter types for the inbound routes.
//!
//! The enumerated selectors restrict what callers may ask for; the upstream
//! call always fetches the full fixed-size payload and the selector is
//! applied client-side via truncation. Malformed values are rejected here
//! with a 400 and never forwarded upstream.

use serde::Deserialize;

/// Holder-count selector for the top-holders routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u64")]
pub struct HolderCount(u64);

impl HolderCount {
    pub const ALLOWED: [u64; 5] = [5, 10, 20, 50, 100];

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for HolderCount {
    fn default() -> Self {
        Self(10)
    }
}

impl TryFrom<u64> for HolderCount {
    type Error = String;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if Self::ALLOWED.contains(&value) {
            Ok(Self(value))
        } else {
            Err(format!("count must be one of {:?}", Self::ALLOWED))
        }
    }
}

/// Chart-size selector for the kline routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u64")]
pub struct ChartSize(u64);

impl ChartSize {
    pub const ALLOWED: [u64; 4] = [5, 10, 20, 50];

    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for ChartSize {
    fn default() -> Self {
        Self(20)
    }
}

impl TryFrom<u64> for ChartSize {
    type Error = String;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if Self::ALLOWED.contains(&value) {
            Ok(Self(value))
        } else {
            Err(format!("size must be one of {:?}", Self::ALLOWED))
        }
    }
}

/// Query for token search.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub keyword: String,
    /// Optional chain filter; omitted entirely from the upstream query
    /// when absent.
    pub chain: Option<String>,
}

/// Query for the top-holders routes.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HoldersParams {
    pub count: HolderCount,
}

/// Query for the kline routes.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct KlineParams {
    pub size: ChartSize,
}

/// Query for the ranks route.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RanksParams {
    pub topic: Option<String>,
}

/// Body for the batch price route.
#[derive(Debug, Deserialize)]
pub struct PriceRequest {
    pub token_ids: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn holder_count_accepts_only_the_allowed_set() {
        for allowed in HolderCount::ALLOWED {
            assert!(HolderCount::try_from(allowed).is_ok());
        }
        assert!(HolderCount::try_from(7).is_err());
        assert!(HolderCount::try_from(0).is_err());
        assert!(HolderCount::try_from(1000).is_err());
    }

    #[test]
    fn chart_size_accepts_only_the_allowed_set() {
        for allowed in ChartSize::ALLOWED {
            assert!(ChartSize::try_from(allowed).is_ok());
        }
        assert!(ChartSize::try_from(100).is_err());
    }

    #[test]
    fn selectors_deserialize_through_try_from() {
        let params: HoldersParams = serde_json::from_value(json!({"count": 50})).unwrap();
        assert_eq!(params.count.get(), 50);

        let err = serde_json::from_value::<HoldersParams>(json!({"count": 13}));
        assert!(err.is_err());
    }

    #[test]
    fn absent_selectors_fall_back_to_defaults() {
        let holders: HoldersParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(holders.count.get(), 10);

        let klines: KlineParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(klines.size.get(), 20);
    }
}
