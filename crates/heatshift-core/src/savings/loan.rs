//! Green-loan interest savings and loan financing options.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::assumptions::SavingsAssumptions;
use crate::profile::Profile;
use crate::types::{Money, Rate};

#[cfg(feature = "incentives")]
use crate::incentives::{matches, Incentive};

/// Simple (non-amortising) interest saved on `principal` over `years` by
/// borrowing at `subsidized_rate` instead of `standard_rate`.
pub fn interest_savings(
    principal: Money,
    standard_rate: Rate,
    subsidized_rate: Rate,
    years: u32,
) -> Money {
    principal * (standard_rate - subsidized_rate) * Decimal::from(years)
}

/// Interest saved by financing the configured share of the project with the
/// subsidized loan rather than a market loan.
pub fn loan_interest_savings(profile: &Profile, assumptions: &SavingsAssumptions) -> Money {
    interest_savings(
        profile.total_cost * assumptions.financed_share,
        assumptions.standard_loan_rate,
        assumptions.subsidized_loan_rate,
        assumptions.loan_years,
    )
}

/// A matched loan incentive, reported outside the grant stack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancingOption {
    pub incentive_id: String,
    pub name: String,
    pub interest_rate: Rate,
    pub financed_share: Rate,
    pub financed_amount: Money,
    /// Interest saved against the standard rate over the loan horizon.
    pub interest_savings: Money,
}

/// Every loan in `catalog` that matches `profile`, in catalog order.
///
/// A loan without its own rate or financed share falls back to the
/// subsidized rate and financed share in `assumptions`.
#[cfg(feature = "incentives")]
pub fn financing_options(
    profile: &Profile,
    catalog: &[Incentive],
    assumptions: &SavingsAssumptions,
) -> Vec<FinancingOption> {
    catalog
        .iter()
        .filter(|incentive| incentive.is_loan && matches(incentive, profile))
        .map(|loan| {
            let interest_rate = loan.interest_rate.unwrap_or(assumptions.subsidized_loan_rate);
            let financed_share = loan.max_loan_share.unwrap_or(assumptions.financed_share);
            let financed_amount = profile.total_cost * financed_share;
            FinancingOption {
                incentive_id: loan.id.clone(),
                name: loan.name.clone(),
                interest_rate,
                financed_share,
                financed_amount,
                interest_savings: interest_savings(
                    financed_amount,
                    assumptions.standard_loan_rate,
                    interest_rate,
                    assumptions.loan_years,
                ),
            }
        })
        .collect()
}
