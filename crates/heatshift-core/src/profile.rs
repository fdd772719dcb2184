//! The building/household renovation scenario under evaluation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{Jurisdiction, Money};
use crate::{HeatShiftError, HeatShiftResult};

/// A renovation profile. Supplied fresh for every calculation and never
/// mutated by the core.
///
/// Category fields (`owner_type`, `building_type`, heating technologies,
/// `income_level`) are free-form codes such as `"homeowner"`,
/// `"single_family"`, `"gas"` or `"heat_pump_air"`; they are compared exactly
/// against the codes used by the incentive catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub country: String,
    pub city: String,
    pub owner_type: String,
    pub income_level: String,
    pub building_type: String,
    #[serde(alias = "year_built")]
    pub construction_year: u16,
    pub current_heating: String,
    pub target_tech: String,
    /// Total renovation project cost.
    pub total_cost: Money,
    /// Annual running cost with the current heating system.
    #[serde(alias = "annual_gas_cost")]
    pub annual_current_cost: Money,
    /// Expected annual running cost with the target system.
    #[serde(alias = "annual_electricity_cost_hp")]
    pub annual_target_cost: Money,
}

impl Default for Profile {
    /// A 1975 gas-heated single-family home in Frankfurt switching to an
    /// air-source heat pump.
    fn default() -> Self {
        Self {
            country: "DE".into(),
            city: "Frankfurt".into(),
            owner_type: "homeowner".into(),
            income_level: "medium".into(),
            building_type: "single_family".into(),
            construction_year: 1975,
            current_heating: "gas".into(),
            target_tech: "heat_pump_air".into(),
            total_cost: dec!(28000),
            annual_current_cost: dec!(2200),
            annual_target_cost: dec!(1100),
        }
    }
}

impl Profile {
    pub fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::new(self.country.clone(), Some(&self.city))
    }

    /// Range checks applied at the input boundary. The calculation functions
    /// assume a profile that passed these checks.
    pub fn validate(&self) -> HeatShiftResult<()> {
        if self.total_cost < Decimal::ZERO {
            return Err(HeatShiftError::invalid(
                "total_cost",
                "Total project cost cannot be negative.",
            ));
        }
        if self.annual_current_cost < Decimal::ZERO {
            return Err(HeatShiftError::invalid(
                "annual_current_cost",
                "Annual cost of the current heating cannot be negative.",
            ));
        }
        if self.annual_target_cost < Decimal::ZERO {
            return Err(HeatShiftError::invalid(
                "annual_target_cost",
                "Annual cost of the target heating cannot be negative.",
            ));
        }
        if self.country.trim().is_empty() {
            return Err(HeatShiftError::invalid("country", "Country code is required."));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_valid() {
        assert!(Profile::default().validate().is_ok());
    }

    #[test]
    fn test_negative_cost_rejected() {
        let profile = Profile {
            total_cost: dec!(-1),
            ..Profile::default()
        };
        match profile.validate() {
            Err(HeatShiftError::InvalidInput { field, .. }) => assert_eq!(field, "total_cost"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_legacy_field_names_deserialize() {
        let json = r#"{
            "country": "DE",
            "city": "Frankfurt",
            "owner_type": "homeowner",
            "income_level": "low",
            "building_type": "single_family",
            "year_built": 1962,
            "current_heating": "oil",
            "target_tech": "heat_pump_ground",
            "total_cost": "35000",
            "annual_gas_cost": "2600",
            "annual_electricity_cost_hp": "1200"
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.construction_year, 1962);
        assert_eq!(profile.annual_current_cost, dec!(2600));
        assert_eq!(profile.annual_target_cost, dec!(1200));
        assert_eq!(profile.jurisdiction(), Jurisdiction::new("DE", Some("Frankfurt")));
    }
}
