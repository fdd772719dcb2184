use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.30 = 30%). Never as percentages.
pub type Rate = Decimal;

/// Emission factors in tonnes CO2 per MWh.
pub type EmissionFactor = Decimal;

/// Country (ISO code) plus an optional city. A jurisdiction without a city
/// covers the whole country.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Jurisdiction {
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl Jurisdiction {
    pub fn new(country: impl Into<String>, city: Option<&str>) -> Self {
        Self {
            country: country.into(),
            city: city.map(str::to_string),
        }
    }

    /// Whether data scoped to `self` applies to `other`.
    ///
    /// Country codes and city names compare case-insensitively. A country-wide
    /// scope covers every city in that country; a city scope never covers a
    /// country-wide request.
    pub fn covers(&self, other: &Jurisdiction) -> bool {
        if !self.country.eq_ignore_ascii_case(&other.country) {
            return false;
        }
        match (&self.city, &other.city) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(mine), Some(theirs)) => mine.to_lowercase() == theirs.to_lowercase(),
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.city {
            Some(city) => write!(f, "{}/{}", self.country, city),
            None => write!(f, "{}", self.country),
        }
    }
}

/// An electricity supplier option. Only `price_kwh` and `renewable_share`
/// feed the calculations; the rest is display data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub name: String,
    pub jurisdiction: Jurisdiction,
    pub tariff: String,
    /// Price per kWh in the profile's currency.
    pub price_kwh: Money,
    /// Renewable share of the supplied mix, in whole percent (0-100).
    pub renewable_share: u8,
    pub contact: String,
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
