//! One-shot renovation assessment: grant stack, loan financing options and
//! savings for a profile against an injected catalog.

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::info;

use crate::incentives::stacking::plan_warnings;
use crate::incentives::{stack, validate_catalog, Incentive, StackedPlan};
use crate::profile::Profile;
use crate::savings::{
    financing_options, savings_warnings, summarize, validate_supplier, FinancingOption,
    SavingsAssumptions, SavingsSummary,
};
use crate::types::{with_metadata, ComputationOutput, Supplier};
use crate::HeatShiftResult;

// ---------------------------------------------------------------------------
// Input / Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentInput {
    pub profile: Profile,
    /// Incentives for the profile's jurisdiction, in stacking order.
    pub incentives: Vec<Incentive>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supplier: Option<Supplier>,
    #[serde(default)]
    pub assumptions: SavingsAssumptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub plan: StackedPlan,
    /// Matched loans, kept out of the grant total.
    pub financing: Vec<FinancingOption>,
    pub savings: SavingsSummary,
}

// ---------------------------------------------------------------------------
// Core calculation
// ---------------------------------------------------------------------------

pub fn assess(input: &AssessmentInput) -> HeatShiftResult<ComputationOutput<Assessment>> {
    let start = Instant::now();

    // -- Validation ----------------------------------------------------------
    input.profile.validate()?;
    validate_catalog(&input.incentives)?;
    input.assumptions.validate()?;
    if let Some(supplier) = &input.supplier {
        validate_supplier(supplier)?;
    }

    // -- Grants, loans and savings are independent of each other -------------
    let plan = stack(&input.profile, &input.incentives);
    let financing = financing_options(&input.profile, &input.incentives, &input.assumptions);
    let savings = summarize(&input.profile, input.supplier.as_ref(), &input.assumptions)?;

    let mut warnings = plan_warnings(&plan);
    warnings.extend(savings_warnings(&savings, input.supplier.as_ref()));

    info!(
        jurisdiction = %input.profile.jurisdiction(),
        granted = plan.incentives.len(),
        total = %plan.total,
        loans = financing.len(),
        "assessment complete"
    );

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "savings": input.assumptions,
        "aggregate_cap": "total project cost",
        "pro_rata_reduction": false,
        "loans_in_grant_total": false,
    });

    Ok(with_metadata(
        "Incentive stacking with savings estimate (catalog order, aggregate capped at project cost)",
        &assumptions,
        warnings,
        elapsed,
        Assessment {
            plan,
            financing,
            savings,
        },
    ))
}
