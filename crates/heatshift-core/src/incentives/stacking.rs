//! Grant stacking.
//!
//! Every matched incentive with a positive amount is listed in catalog order.
//! The aggregate is clamped to the project cost; individual amounts are never
//! scaled down, so when the ceiling binds the listed amounts sum to more than
//! `total`. `raw_total` and `capped` expose that case to callers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use super::amount::amount;
use super::matcher::check;
use super::model::{Incentive, IncentiveResult};
use super::validate_catalog;
use crate::profile::Profile;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::HeatShiftResult;

// ---------------------------------------------------------------------------
// Input / Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackInput {
    pub profile: Profile,
    pub incentives: Vec<Incentive>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedPlan {
    /// Granted incentives in catalog order.
    pub incentives: Vec<IncentiveResult>,
    /// Sum of the listed amounts before the project-cost ceiling.
    pub raw_total: Money,
    /// Total granted, never above the project cost.
    pub total: Money,
    /// `total / total_cost`, or zero for a zero-cost project.
    pub share: Rate,
    /// What the owner still pays: `total_cost - total`.
    pub remaining: Money,
    /// Whether the project-cost ceiling reduced the aggregate.
    pub capped: bool,
}

impl StackedPlan {
    pub fn is_empty(&self) -> bool {
        self.incentives.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Core calculation
// ---------------------------------------------------------------------------

/// Stack every applicable incentive in `catalog` for `profile`.
///
/// Never fails: an empty or fully mismatched catalog yields an empty plan
/// with zero total and the whole project cost remaining.
pub fn stack(profile: &Profile, catalog: &[Incentive]) -> StackedPlan {
    let mut granted: Vec<IncentiveResult> = Vec::new();

    for incentive in catalog {
        if let Err(reason) = check(incentive, profile) {
            debug!(incentive = %incentive.id, %reason, "incentive not applicable");
            continue;
        }

        let value = amount(incentive, profile);
        if value > Decimal::ZERO {
            debug!(incentive = %incentive.id, amount = %value, "incentive granted");
            granted.push(IncentiveResult {
                incentive: incentive.clone(),
                amount: value,
            });
        } else {
            debug!(incentive = %incentive.id, "incentive matched with zero grant");
        }
    }

    let raw_total: Money = granted.iter().map(|r| r.amount).sum();
    let total = raw_total.min(profile.total_cost).max(Decimal::ZERO);
    let capped = total < raw_total;
    if capped {
        debug!(%raw_total, %total, "aggregate capped at project cost");
    }

    let share = if profile.total_cost > Decimal::ZERO {
        total / profile.total_cost
    } else {
        Decimal::ZERO
    };

    StackedPlan {
        incentives: granted,
        raw_total,
        total,
        share,
        remaining: profile.total_cost - total,
        capped,
    }
}

/// Validate the inputs, stack, and wrap the plan in the standard envelope.
pub fn stack_incentives(input: &StackInput) -> HeatShiftResult<ComputationOutput<StackedPlan>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    input.profile.validate()?;
    validate_catalog(&input.incentives)?;

    let plan = stack(&input.profile, &input.incentives);
    warnings.extend(plan_warnings(&plan));

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "aggregate_cap": "total project cost",
        "pro_rata_reduction": false,
        "zero_amount_incentives": "excluded from the plan",
        "catalog_size": input.incentives.len(),
    });

    Ok(with_metadata(
        "Incentive stacking (catalog order, aggregate capped at project cost)",
        &assumptions,
        warnings,
        elapsed,
        plan,
    ))
}

pub(crate) fn plan_warnings(plan: &StackedPlan) -> Vec<String> {
    let mut warnings = Vec::new();
    if plan.is_empty() {
        warnings.push("No matching incentives found for this profile.".into());
    }
    if plan.capped {
        warnings.push(format!(
            "Listed grants sum to {} but the total is capped at the project cost {}; \
             individual amounts are not reduced.",
            plan.raw_total, plan.total
        ));
    }
    warnings
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::incentives::model::Restriction;
    use rust_decimal_macros::dec;

    fn grant(id: &str, coverage_rate: Decimal, max_amount: Decimal) -> Incentive {
        Incentive {
            id: id.into(),
            name: id.into(),
            coverage_rate,
            max_amount,
            ..Incentive::default()
        }
    }

    #[test]
    fn test_empty_catalog() {
        let profile = Profile::default();
        let plan = stack(&profile, &[]);
        assert!(plan.is_empty());
        assert_eq!(plan.total, Decimal::ZERO);
        assert_eq!(plan.share, Decimal::ZERO);
        assert_eq!(plan.remaining, profile.total_cost);
        assert!(!plan.capped);
    }

    #[test]
    fn test_catalog_order_preserved() {
        let catalog = vec![
            grant("B", dec!(0.1), Decimal::ZERO),
            grant("A", dec!(0.2), Decimal::ZERO),
            grant("C", dec!(0.05), Decimal::ZERO),
        ];
        let plan = stack(&Profile::default(), &catalog);
        let ids: Vec<&str> = plan.incentives.iter().map(|r| r.incentive.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_unmatched_and_zero_amount_dropped() {
        let catalog = vec![
            grant("ZERO", Decimal::ZERO, dec!(500)),
            Incentive {
                owner_types: Restriction::of(["landlord"]),
                ..grant("LANDLORD", dec!(0.5), Decimal::ZERO)
            },
            grant("KEPT", dec!(0.1), Decimal::ZERO),
        ];
        let plan = stack(&Profile::default(), &catalog);
        assert_eq!(plan.incentives.len(), 1);
        assert_eq!(plan.incentives[0].incentive.id, "KEPT");
        assert_eq!(plan.total, dec!(2800));
    }

    #[test]
    fn test_cap_without_pro_rata() {
        let catalog = vec![
            grant("BIG", dec!(0.7), Decimal::ZERO),
            grant("ALSO_BIG", dec!(0.6), Decimal::ZERO),
        ];
        let profile = Profile::default();
        let plan = stack(&profile, &catalog);

        assert_eq!(plan.incentives[0].amount, dec!(19600));
        assert_eq!(plan.incentives[1].amount, dec!(16800));
        assert_eq!(plan.raw_total, dec!(36400));
        assert_eq!(plan.total, profile.total_cost);
        assert_eq!(plan.share, Decimal::ONE);
        assert_eq!(plan.remaining, Decimal::ZERO);
        assert!(plan.capped);
    }

    #[test]
    fn test_zero_cost_project() {
        let profile = Profile {
            total_cost: Decimal::ZERO,
            ..Profile::default()
        };
        let plan = stack(&profile, &[grant("A", dec!(0.3), Decimal::ZERO)]);
        assert!(plan.is_empty());
        assert_eq!(plan.share, Decimal::ZERO);
        assert_eq!(plan.remaining, Decimal::ZERO);
    }

    #[test]
    fn test_stack_incentives_warns_when_nothing_matches() {
        let input = StackInput {
            profile: Profile::default(),
            incentives: vec![],
        };
        let out = stack_incentives(&input).unwrap();
        assert!(out.result.is_empty());
        assert_eq!(out.warnings.len(), 1);
        assert!(out.warnings[0].contains("No matching incentives"));
    }

    #[test]
    fn test_stack_incentives_warns_on_cap() {
        let input = StackInput {
            profile: Profile::default(),
            incentives: vec![grant("A", dec!(0.8), Decimal::ZERO), grant("B", dec!(0.8), Decimal::ZERO)],
        };
        let out = stack_incentives(&input).unwrap();
        assert!(out.result.capped);
        assert!(out.warnings.iter().any(|w| w.contains("capped")));
    }
}
