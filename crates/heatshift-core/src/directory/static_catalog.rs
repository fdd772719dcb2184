use serde::{Deserialize, Serialize};

use super::{Installer, IncentiveCatalog, SupplierDirectory};
use crate::incentives::{validate_catalog, Incentive};
use crate::types::{Jurisdiction, Supplier};
use crate::HeatShiftResult;

/// Reference data for one jurisdiction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalCatalog {
    pub jurisdiction: Jurisdiction,
    #[serde(default)]
    pub incentives: Vec<Incentive>,
    #[serde(default)]
    pub suppliers: Vec<Supplier>,
    #[serde(default)]
    pub installers: Vec<Installer>,
}

/// An in-memory, read-only set of regional catalogs.
///
/// A lookup concatenates every region covering the requested jurisdiction,
/// in declaration order, so a country-wide region listed before a city region
/// puts its incentives first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaticCatalog {
    regions: Vec<RegionalCatalog>,
}

impl StaticCatalog {
    pub fn new(regions: Vec<RegionalCatalog>) -> Self {
        Self { regions }
    }

    /// The bundled dataset (Frankfurt am Main).
    pub fn builtin() -> Self {
        Self::new(vec![super::frankfurt::region()])
    }

    /// Parse a JSON array of regional catalogs. Each region's incentives
    /// are validated.
    pub fn from_json(json: &str) -> HeatShiftResult<Self> {
        let catalog: StaticCatalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> HeatShiftResult<()> {
        for region in &self.regions {
            validate_catalog(&region.incentives)?;
        }
        Ok(())
    }

    pub fn regions(&self) -> &[RegionalCatalog] {
        &self.regions
    }

    fn covering<'a>(
        &'a self,
        jurisdiction: &'a Jurisdiction,
    ) -> impl Iterator<Item = &'a RegionalCatalog> + 'a {
        self.regions
            .iter()
            .filter(move |region| region.jurisdiction.covers(jurisdiction))
    }
}

impl IncentiveCatalog for StaticCatalog {
    fn incentives(&self, jurisdiction: &Jurisdiction) -> Vec<Incentive> {
        self.covering(jurisdiction)
            .flat_map(|region| region.incentives.iter().cloned())
            .collect()
    }
}

impl SupplierDirectory for StaticCatalog {
    fn suppliers(&self, jurisdiction: &Jurisdiction) -> Vec<Supplier> {
        self.covering(jurisdiction)
            .flat_map(|region| region.suppliers.iter().cloned())
            .collect()
    }

    fn installers(&self, jurisdiction: &Jurisdiction) -> Vec<Installer> {
        self.covering(jurisdiction)
            .flat_map(|region| region.installers.iter().cloned())
            .collect()
    }
}
