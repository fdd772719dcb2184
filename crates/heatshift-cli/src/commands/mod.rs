pub mod assess;
pub mod directory;

use clap::Args;
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use tracing::debug;

use heatshift_core::directory::StaticCatalog;
use heatshift_core::savings::SavingsAssumptions;
use heatshift_core::Profile;

use crate::config::CliConfig;
use crate::input;

/// Profile flags shared by the calculation commands. Unset flags fall back
/// to the default Frankfurt gas-to-air-source profile.
#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    /// Path to a JSON/YAML profile (overrides individual flags)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// ISO country code
    #[arg(long)]
    pub country: Option<String>,

    /// City
    #[arg(long)]
    pub city: Option<String>,

    /// Owner type (homeowner, landlord, ...)
    #[arg(long)]
    pub owner_type: Option<String>,

    /// Income tier (low, medium, high)
    #[arg(long)]
    pub income_level: Option<String>,

    /// Building type (single_family, multi_family, ...)
    #[arg(long)]
    pub building_type: Option<String>,

    /// Year the building was constructed
    #[arg(long, alias = "year-built")]
    pub construction_year: Option<u16>,

    /// Current heating (gas, oil, electric, ...)
    #[arg(long)]
    pub current_heating: Option<String>,

    /// Target technology (heat_pump_air, heat_pump_ground, ...)
    #[arg(long)]
    pub target_tech: Option<String>,

    /// Total project cost
    #[arg(long)]
    pub total_cost: Option<Decimal>,

    /// Annual cost with the current heating
    #[arg(long, alias = "annual-gas-cost")]
    pub annual_current_cost: Option<Decimal>,

    /// Expected annual cost with the target heating
    #[arg(long, alias = "annual-hp-cost")]
    pub annual_target_cost: Option<Decimal>,
}

impl ProfileArgs {
    /// Profile from `--input`, else from piped stdin, else from the flags.
    pub fn resolve(&self) -> Result<Profile, Box<dyn std::error::Error>> {
        if let Some(ref path) = self.input {
            return input::file::read_document(path);
        }
        if let Some(profile) = input::stdin::read_stdin::<Profile>()? {
            return Ok(profile);
        }
        Ok(self.apply(Profile::default()))
    }

    fn apply(&self, base: Profile) -> Profile {
        Profile {
            country: self.country.clone().unwrap_or(base.country),
            city: self.city.clone().unwrap_or(base.city),
            owner_type: self.owner_type.clone().unwrap_or(base.owner_type),
            income_level: self.income_level.clone().unwrap_or(base.income_level),
            building_type: self.building_type.clone().unwrap_or(base.building_type),
            construction_year: self.construction_year.unwrap_or(base.construction_year),
            current_heating: self.current_heating.clone().unwrap_or(base.current_heating),
            target_tech: self.target_tech.clone().unwrap_or(base.target_tech),
            total_cost: self.total_cost.unwrap_or(base.total_cost),
            annual_current_cost: self.annual_current_cost.unwrap_or(base.annual_current_cost),
            annual_target_cost: self.annual_target_cost.unwrap_or(base.annual_target_cost),
        }
    }
}

/// `--catalog` beats `HEATSHIFT_CATALOG`, which beats the bundled dataset.
pub fn load_catalog(
    flag: Option<&Path>,
    config: &CliConfig,
) -> Result<StaticCatalog, Box<dyn std::error::Error>> {
    match flag.or(config.catalog_path.as_deref()) {
        Some(path) => {
            debug!(path = %path.display(), "loading catalog");
            let catalog: StaticCatalog = input::file::read_document(path)?;
            catalog.validate()?;
            Ok(catalog)
        }
        None => Ok(StaticCatalog::builtin()),
    }
}

pub fn load_assumptions(
    flag: Option<&Path>,
) -> Result<SavingsAssumptions, Box<dyn std::error::Error>> {
    match flag {
        Some(path) => input::file::read_document(path),
        None => Ok(SavingsAssumptions::default()),
    }
}
