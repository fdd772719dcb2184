//! Derived savings metrics: running cost, CO2, avoided-CO2 value and
//! green-loan interest.

pub mod assumptions;
pub mod emissions;
pub mod energy;
pub mod loan;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::profile::Profile;
use crate::types::{with_metadata, ComputationOutput, Money, Supplier};
use crate::{HeatShiftError, HeatShiftResult};

pub use assumptions::SavingsAssumptions;
pub use emissions::{avoided_co2_value, co2_impact, effective_grid_emission_factor, Co2Impact};
pub use energy::energy_savings;
pub use loan::{interest_savings, loan_interest_savings, FinancingOption};

#[cfg(feature = "incentives")]
pub use loan::financing_options;

// ---------------------------------------------------------------------------
// Input / Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsInput {
    pub profile: Profile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<Supplier>,
    #[serde(default)]
    pub assumptions: SavingsAssumptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsSummary {
    /// Annual running-cost delta; negative if the target system costs more.
    pub energy_savings: Money,
    pub co2: Co2Impact,
    /// Annual value of avoided CO2 at the configured price.
    pub avoided_co2_value: Money,
    /// Interest saved over the loan horizon with the subsidized rate.
    pub loan_interest_savings: Money,
    /// `energy_savings + avoided_co2_value`.
    pub total_annual_benefit: Money,
}

// ---------------------------------------------------------------------------
// Core calculation
// ---------------------------------------------------------------------------

/// All four savings metrics for one profile and optional supplier.
pub fn summarize(
    profile: &Profile,
    supplier: Option<&Supplier>,
    assumptions: &SavingsAssumptions,
) -> HeatShiftResult<SavingsSummary> {
    let energy = energy_savings(profile);
    let co2 = co2_impact(profile, supplier, assumptions)?;
    let avoided = avoided_co2_value(co2.tonnes_saved, assumptions);

    Ok(SavingsSummary {
        energy_savings: energy,
        avoided_co2_value: avoided,
        loan_interest_savings: loan_interest_savings(profile, assumptions),
        total_annual_benefit: energy + avoided,
        co2,
    })
}

/// Validate the inputs, compute the savings, and wrap them in the standard
/// envelope.
pub fn estimate_savings(input: &SavingsInput) -> HeatShiftResult<ComputationOutput<SavingsSummary>> {
    let start = Instant::now();

    input.profile.validate()?;
    input.assumptions.validate()?;
    if let Some(supplier) = &input.supplier {
        validate_supplier(supplier)?;
    }

    let summary = summarize(&input.profile, input.supplier.as_ref(), &input.assumptions)?;
    let warnings = savings_warnings(&summary, input.supplier.as_ref());

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Heating switch savings (bill delta, CO2 via price-implied consumption, simple loan interest)",
        &input.assumptions,
        warnings,
        elapsed,
        summary,
    ))
}

pub fn validate_supplier(supplier: &Supplier) -> HeatShiftResult<()> {
    if supplier.renewable_share > 100 {
        return Err(HeatShiftError::invalid(
            "renewable_share",
            format!("Supplier '{}': renewable share cannot exceed 100%.", supplier.name),
        ));
    }
    if supplier.price_kwh <= Decimal::ZERO {
        return Err(HeatShiftError::invalid(
            "price_kwh",
            format!("Supplier '{}' has a non-positive price per kWh.", supplier.name),
        ));
    }
    Ok(())
}

pub(crate) fn savings_warnings(summary: &SavingsSummary, supplier: Option<&Supplier>) -> Vec<String> {
    let mut warnings = Vec::new();
    if summary.energy_savings < Decimal::ZERO {
        warnings.push(format!(
            "The target heating costs {} more per year than the current system.",
            summary.energy_savings.abs()
        ));
    }
    if supplier.is_none() {
        warnings.push(
            "No electricity supplier selected; post-switch emissions are reported as zero.".into(),
        );
    }
    warnings
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
