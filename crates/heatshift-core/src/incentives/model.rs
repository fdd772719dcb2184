use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::types::{Money, Rate};

/// Which level of government or market actor funds an incentive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncentiveSource {
    #[default]
    National,
    #[serde(alias = "regional")]
    State,
    City,
    Utility,
    Loan,
}

impl fmt::Display for IncentiveSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::National => "National",
            Self::State => "State",
            Self::City => "City",
            Self::Utility => "Utility",
            Self::Loan => "Loan",
        };
        write!(f, "{}", s)
    }
}

/// A non-empty set of accepted category codes for one eligibility dimension.
///
/// An incentive that does not restrict a dimension holds `None` for it, so
/// "no rule" and "matches nothing" can never be confused. Construction via
/// [`Restriction::of`] and deserialization both fold an empty list into `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Restriction(BTreeSet<String>);

impl Restriction {
    pub fn of<I, S>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = values.into_iter().map(Into::into).collect();
        if set.is_empty() {
            None
        } else {
            Some(Self(set))
        }
    }

    pub fn permits(&self, value: &str) -> bool {
        self.0.contains(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for Restriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<&str> = self.iter().collect();
        write!(f, "[{}]", items.join(", "))
    }
}

fn restriction<'de, D>(deserializer: D) -> Result<Option<Restriction>, D::Error>
where
    D: Deserializer<'de>,
{
    let values: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(values.and_then(Restriction::of))
}

/// A financial support scheme with eligibility rules and a payout formula.
///
/// Read-only reference data: defined once per catalog load and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Incentive {
    /// Unique within a catalog.
    pub id: String,
    pub name: String,
    pub source: IncentiveSource,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Owning country. `None` for single-jurisdiction catalogs, in which case
    /// the country check is skipped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Fraction of project cost reimbursed before the cap. Zero for loans.
    #[serde(default)]
    pub coverage_rate: Rate,
    /// Ceiling on the grant; zero means uncapped.
    #[serde(default)]
    pub max_amount: Money,
    #[serde(
        default,
        alias = "eligible_owner_types",
        deserialize_with = "restriction",
        skip_serializing_if = "Option::is_none"
    )]
    pub owner_types: Option<Restriction>,
    #[serde(
        default,
        alias = "eligible_building_types",
        deserialize_with = "restriction",
        skip_serializing_if = "Option::is_none"
    )]
    pub building_types: Option<Restriction>,
    #[serde(
        default,
        alias = "eligible_current_heat",
        deserialize_with = "restriction",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_heating: Option<Restriction>,
    #[serde(
        default,
        alias = "eligible_target_tech",
        deserialize_with = "restriction",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_tech: Option<Restriction>,
    /// Income tier the incentive is reserved for, if any.
    #[serde(default, alias = "income_target", skip_serializing_if = "Option::is_none")]
    pub income_level: Option<String>,
    #[serde(default)]
    pub is_loan: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<Rate>,
    /// Largest share of project cost the loan finances.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_loan_share: Option<Rate>,
}

impl Incentive {
    pub fn is_capped(&self) -> bool {
        self.max_amount > Decimal::ZERO
    }
}

/// One matched incentive paired with its computed amount for one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncentiveResult {
    pub incentive: Incentive,
    pub amount: Money,
}
