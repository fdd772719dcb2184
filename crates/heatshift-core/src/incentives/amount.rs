use rust_decimal::Decimal;

use super::model::Incentive;
use crate::profile::Profile;
use crate::types::Money;

/// Grant value of one incentive for one profile.
///
/// Loans pay no grant and always yield zero; their value is reported through
/// the financing options instead. Otherwise the project cost times the
/// coverage rate, clamped to `max_amount` when the incentive is capped.
pub fn amount(incentive: &Incentive, profile: &Profile) -> Money {
    if incentive.is_loan {
        return Decimal::ZERO;
    }

    let raw = profile.total_cost * incentive.coverage_rate;
    if incentive.is_capped() {
        raw.min(incentive.max_amount)
    } else {
        raw
    }
}
