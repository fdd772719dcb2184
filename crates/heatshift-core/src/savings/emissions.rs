//! Annual CO2 before and after the heating switch.
//!
//! Before: the current bill divided by the fossil price gives kWh, times the
//! fossil emission factor. After: the target bill divided by the supplier's
//! price gives kWh, times the grid factor scaled down by the supplier's
//! renewable share. Emission factors are t/MWh, hence the division by 1000.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::assumptions::SavingsAssumptions;
use crate::profile::Profile;
use crate::types::{EmissionFactor, Money, Supplier};
use crate::{HeatShiftError, HeatShiftResult};

const KWH_PER_MWH: Decimal = dec!(1000);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Co2Impact {
    /// Fossil energy implied by the current annual bill.
    pub fossil_kwh: Decimal,
    pub tonnes_before: Decimal,
    /// Electricity implied by the target annual bill; `None` without a supplier.
    pub electricity_kwh: Option<Decimal>,
    /// Grid factor after the supplier's renewable share; `None` without a supplier.
    pub grid_emission_factor: Option<EmissionFactor>,
    /// Never negative. Zero without a supplier.
    pub tonnes_after: Decimal,
    /// `max(before - after, 0)`.
    pub tonnes_saved: Decimal,
}

/// Grid emission factor for a supplier's mix:
/// `base * (1 - renewable_share / 100)`, floored at zero.
pub fn effective_grid_emission_factor(
    supplier: &Supplier,
    assumptions: &SavingsAssumptions,
) -> EmissionFactor {
    let fossil_share = Decimal::ONE - Decimal::from(supplier.renewable_share) / dec!(100);
    (assumptions.grid_emission_factor * fossil_share).max(Decimal::ZERO)
}

/// Compute CO2 before, after and avoided per year.
///
/// A supplier with a non-positive price is a configuration fault and is
/// rejected instead of producing an unbounded consumption figure.
pub fn co2_impact(
    profile: &Profile,
    supplier: Option<&Supplier>,
    assumptions: &SavingsAssumptions,
) -> HeatShiftResult<Co2Impact> {
    if assumptions.fossil_price_kwh <= Decimal::ZERO {
        return Err(HeatShiftError::invalid(
            "fossil_price_kwh",
            "Fossil energy price must be positive.",
        ));
    }

    let fossil_kwh = profile.annual_current_cost / assumptions.fossil_price_kwh;
    let tonnes_before = fossil_kwh * assumptions.fossil_emission_factor / KWH_PER_MWH;

    let (electricity_kwh, grid_emission_factor, tonnes_after) = match supplier {
        Some(s) => {
            if s.price_kwh <= Decimal::ZERO {
                return Err(HeatShiftError::invalid(
                    "price_kwh",
                    format!("Supplier '{}' has a non-positive price per kWh.", s.name),
                ));
            }
            let kwh = profile.annual_target_cost / s.price_kwh;
            let factor = effective_grid_emission_factor(s, assumptions);
            let tonnes = (kwh * factor / KWH_PER_MWH).max(Decimal::ZERO);
            (Some(kwh), Some(factor), tonnes)
        }
        None => (None, None, Decimal::ZERO),
    };

    Ok(Co2Impact {
        fossil_kwh,
        tonnes_before,
        electricity_kwh,
        grid_emission_factor,
        tonnes_after,
        tonnes_saved: (tonnes_before - tonnes_after).max(Decimal::ZERO),
    })
}

/// Value of avoided emissions at the configured CO2 price.
pub fn avoided_co2_value(tonnes_saved: Decimal, assumptions: &SavingsAssumptions) -> Money {
    tonnes_saved * assumptions.co2_price
}
