//! Eligibility rules: whether one incentive applies to one profile.
//!
//! Checks run in a fixed order and stop at the first failure:
//! 1. country
//! 2. city (case-insensitive)
//! 3. required income tier
//! 4. owner type
//! 5. building type
//! 6. current heating
//! 7. target technology
//!
//! An unset rule never disqualifies.

use serde::Serialize;
use std::fmt;

use super::model::{Incentive, Restriction};
use crate::profile::Profile;

/// The first eligibility rule a profile failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Mismatch {
    Country { required: String, actual: String },
    City { required: String, actual: String },
    IncomeLevel { required: String, actual: String },
    OwnerType { accepted: Vec<String>, actual: String },
    BuildingType { accepted: Vec<String>, actual: String },
    CurrentHeating { accepted: Vec<String>, actual: String },
    TargetTech { accepted: Vec<String>, actual: String },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Country { required, actual } => {
                write!(f, "country {actual} is not {required}")
            }
            Self::City { required, actual } => write!(f, "city {actual} is not {required}"),
            Self::IncomeLevel { required, actual } => {
                write!(f, "income level {actual} is not {required}")
            }
            Self::OwnerType { accepted, actual } => {
                write!(f, "owner type {actual} not in {accepted:?}")
            }
            Self::BuildingType { accepted, actual } => {
                write!(f, "building type {actual} not in {accepted:?}")
            }
            Self::CurrentHeating { accepted, actual } => {
                write!(f, "current heating {actual} not in {accepted:?}")
            }
            Self::TargetTech { accepted, actual } => {
                write!(f, "target technology {actual} not in {accepted:?}")
            }
        }
    }
}

/// Whether `incentive` applies to `profile`.
pub fn matches(incentive: &Incentive, profile: &Profile) -> bool {
    check(incentive, profile).is_ok()
}

/// Run the eligibility rules, returning the first one that fails.
pub fn check(incentive: &Incentive, profile: &Profile) -> Result<(), Mismatch> {
    if let Some(country) = &incentive.country {
        if !country.eq_ignore_ascii_case(&profile.country) {
            return Err(Mismatch::Country {
                required: country.clone(),
                actual: profile.country.clone(),
            });
        }
    }

    if let Some(city) = &incentive.city {
        if city.to_lowercase() != profile.city.to_lowercase() {
            return Err(Mismatch::City {
                required: city.clone(),
                actual: profile.city.clone(),
            });
        }
    }

    if let Some(income) = &incentive.income_level {
        if *income != profile.income_level {
            return Err(Mismatch::IncomeLevel {
                required: income.clone(),
                actual: profile.income_level.clone(),
            });
        }
    }

    check_set(&incentive.owner_types, &profile.owner_type, |accepted, actual| {
        Mismatch::OwnerType { accepted, actual }
    })?;
    check_set(
        &incentive.building_types,
        &profile.building_type,
        |accepted, actual| Mismatch::BuildingType { accepted, actual },
    )?;
    check_set(
        &incentive.current_heating,
        &profile.current_heating,
        |accepted, actual| Mismatch::CurrentHeating { accepted, actual },
    )?;
    check_set(&incentive.target_tech, &profile.target_tech, |accepted, actual| {
        Mismatch::TargetTech { accepted, actual }
    })?;

    Ok(())
}

fn check_set(
    restriction: &Option<Restriction>,
    value: &str,
    mismatch: impl FnOnce(Vec<String>, String) -> Mismatch,
) -> Result<(), Mismatch> {
    match restriction {
        Some(set) if !set.permits(value) => Err(mismatch(
            set.iter().map(str::to_string).collect(),
            value.to_string(),
        )),
        _ => Ok(()),
    }
}
