//! Jurisdiction-keyed reference data: incentives, suppliers and installers.
//!
//! The core never reaches for a global table. Callers pick a provider
//! (the built-in dataset, a JSON document, or a test double) and pass the
//! lists it returns into the calculations.

pub mod frankfurt;
pub mod installers;
pub mod static_catalog;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::incentives::Incentive;
use crate::types::{Jurisdiction, Supplier};
use crate::{HeatShiftError, HeatShiftResult};

pub use installers::recommend_installers;
pub use static_catalog::{RegionalCatalog, StaticCatalog};

/// A certified contractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Installer {
    pub name: String,
    pub city: String,
    /// Target technologies the installer is certified for.
    pub supported_tech: Vec<String>,
    /// Average review score, 0-5.
    pub rating: Decimal,
    pub reviews: u32,
    pub email: String,
}

/// Supplies the incentive definitions available in a jurisdiction, in the
/// order they should be stacked and displayed.
pub trait IncentiveCatalog: Send + Sync {
    fn incentives(&self, jurisdiction: &Jurisdiction) -> Vec<Incentive>;
}

/// Supplies the energy suppliers and installers operating in a jurisdiction.
pub trait SupplierDirectory: Send + Sync {
    fn suppliers(&self, jurisdiction: &Jurisdiction) -> Vec<Supplier>;
    fn installers(&self, jurisdiction: &Jurisdiction) -> Vec<Installer>;
}

/// Look up a supplier by name (case-insensitive).
pub fn find_supplier(
    directory: &dyn SupplierDirectory,
    jurisdiction: &Jurisdiction,
    name: &str,
) -> HeatShiftResult<Supplier> {
    directory
        .suppliers(jurisdiction)
        .into_iter()
        .find(|s| s.name.to_lowercase() == name.to_lowercase())
        .ok_or_else(|| HeatShiftError::UnknownSupplier {
            name: name.to_string(),
            jurisdiction: jurisdiction.to_string(),
        })
}
