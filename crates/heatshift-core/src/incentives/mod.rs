//! Incentive matching and grant stacking.

pub mod amount;
pub mod matcher;
pub mod model;
pub mod stacking;

use rust_decimal::Decimal;
use std::collections::HashSet;

use crate::{HeatShiftError, HeatShiftResult};

pub use amount::amount;
pub use matcher::{check, matches, Mismatch};
pub use model::{Incentive, IncentiveResult, IncentiveSource, Restriction};
pub use stacking::{stack, stack_incentives, StackInput, StackedPlan};

/// Input-boundary checks for a catalog: unique ids, rates within `[0, 1]`,
/// non-negative caps.
pub fn validate_catalog(catalog: &[Incentive]) -> HeatShiftResult<()> {
    let mut seen: HashSet<&str> = HashSet::new();

    for incentive in catalog {
        if !seen.insert(incentive.id.as_str()) {
            return Err(HeatShiftError::DuplicateIncentive(incentive.id.clone()));
        }
        if incentive.coverage_rate < Decimal::ZERO || incentive.coverage_rate > Decimal::ONE {
            return Err(HeatShiftError::invalid(
                "coverage_rate",
                format!("{}: coverage rate must be between 0 and 1.", incentive.id),
            ));
        }
        if incentive.max_amount < Decimal::ZERO {
            return Err(HeatShiftError::invalid(
                "max_amount",
                format!("{}: maximum amount cannot be negative.", incentive.id),
            ));
        }
        if let Some(rate) = incentive.interest_rate {
            if rate < Decimal::ZERO {
                return Err(HeatShiftError::invalid(
                    "interest_rate",
                    format!("{}: interest rate cannot be negative.", incentive.id),
                ));
            }
        }
        if let Some(share) = incentive.max_loan_share {
            if share < Decimal::ZERO || share > Decimal::ONE {
                return Err(HeatShiftError::invalid(
                    "max_loan_share",
                    format!("{}: financed share must be between 0 and 1.", incentive.id),
                ));
            }
        }
    }

    Ok(())
}
