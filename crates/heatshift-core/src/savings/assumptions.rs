use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{EmissionFactor, Money, Rate};
use crate::{HeatShiftError, HeatShiftResult};

/// Policy constants behind the savings metrics.
///
/// The defaults are illustrative figures for Germany in 2025, not values
/// derived from the profile. Every field can be overridden individually when
/// deserializing; missing fields keep their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SavingsAssumptions {
    /// Price of fossil heating energy per kWh, used to turn the current
    /// annual bill into consumption. Default 0.12.
    pub fossil_price_kwh: Money,
    /// Fossil (gas) emission factor, t CO2 per MWh. Default 0.202.
    pub fossil_emission_factor: EmissionFactor,
    /// Grid electricity emission factor at 0% renewables, t CO2 per MWh.
    /// Default 0.35.
    pub grid_emission_factor: EmissionFactor,
    /// CO2 price per tonne avoided. Default 45.
    pub co2_price: Money,
    /// Market loan rate the green loan is compared against. Default 5%.
    pub standard_loan_rate: Rate,
    /// Subsidized green loan rate. Default 0.9%.
    pub subsidized_loan_rate: Rate,
    /// Loan horizon in years. Default 10.
    pub loan_years: u32,
    /// Share of project cost financed by the loan. Default 80%.
    pub financed_share: Rate,
}

impl Default for SavingsAssumptions {
    fn default() -> Self {
        Self {
            fossil_price_kwh: dec!(0.12),
            fossil_emission_factor: dec!(0.202),
            grid_emission_factor: dec!(0.35),
            co2_price: dec!(45),
            standard_loan_rate: dec!(0.05),
            subsidized_loan_rate: dec!(0.009),
            loan_years: 10,
            financed_share: dec!(0.80),
        }
    }
}

impl SavingsAssumptions {
    pub fn validate(&self) -> HeatShiftResult<()> {
        if self.fossil_price_kwh <= Decimal::ZERO {
            return Err(HeatShiftError::invalid(
                "fossil_price_kwh",
                "Fossil energy price must be positive.",
            ));
        }
        if self.fossil_emission_factor < Decimal::ZERO || self.grid_emission_factor < Decimal::ZERO
        {
            return Err(HeatShiftError::invalid(
                "emission_factor",
                "Emission factors cannot be negative.",
            ));
        }
        if self.co2_price < Decimal::ZERO {
            return Err(HeatShiftError::invalid("co2_price", "CO2 price cannot be negative."));
        }
        if self.standard_loan_rate < Decimal::ZERO || self.subsidized_loan_rate < Decimal::ZERO {
            return Err(HeatShiftError::invalid(
                "loan_rate",
                "Loan rates cannot be negative.",
            ));
        }
        if self.financed_share < Decimal::ZERO || self.financed_share > Decimal::ONE {
            return Err(HeatShiftError::invalid(
                "financed_share",
                "Financed share must be between 0 and 1.",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SavingsAssumptions::default().validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let a: SavingsAssumptions =
            serde_json::from_str(r#"{"co2_price": "55", "loan_years": 15}"#).unwrap();
        assert_eq!(a.co2_price, dec!(55));
        assert_eq!(a.loan_years, 15);
        assert_eq!(a.fossil_price_kwh, dec!(0.12));
    }

    #[test]
    fn test_zero_fossil_price_rejected() {
        let a = SavingsAssumptions {
            fossil_price_kwh: Decimal::ZERO,
            ..SavingsAssumptions::default()
        };
        assert!(a.validate().is_err());
    }
}
