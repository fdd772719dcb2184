use clap::Args;
use serde_json::Value;
use std::path::PathBuf;

use heatshift_core::directory::{recommend_installers, IncentiveCatalog, SupplierDirectory};
use heatshift_core::{Jurisdiction, Profile};

use super::load_catalog;
use crate::config::CliConfig;

/// Arguments for catalog listings
#[derive(Args)]
pub struct ListArgs {
    /// ISO country code
    #[arg(long, default_value = "DE")]
    pub country: String,

    /// City
    #[arg(long, default_value = "Frankfurt")]
    pub city: String,

    /// Catalog file (JSON/YAML array of regional catalogs)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

impl ListArgs {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::new(self.country.clone(), Some(&self.city))
    }
}

/// Arguments for the installer listing
#[derive(Args)]
pub struct InstallersArgs {
    #[command(flatten)]
    pub list: ListArgs,

    /// Only installers certified for this technology, best rated first
    #[arg(long)]
    pub target_tech: Option<String>,
}

pub fn run_incentives(args: ListArgs, config: &CliConfig) -> Result<Value, Box<dyn std::error::Error>> {
    let catalog = load_catalog(args.catalog.as_deref(), config)?;
    Ok(serde_json::to_value(catalog.incentives(&args.jurisdiction()))?)
}

pub fn run_suppliers(args: ListArgs, config: &CliConfig) -> Result<Value, Box<dyn std::error::Error>> {
    let catalog = load_catalog(args.catalog.as_deref(), config)?;
    Ok(serde_json::to_value(catalog.suppliers(&args.jurisdiction()))?)
}

pub fn run_installers(
    args: InstallersArgs,
    config: &CliConfig,
) -> Result<Value, Box<dyn std::error::Error>> {
    let catalog = load_catalog(args.list.catalog.as_deref(), config)?;
    let installers = catalog.installers(&args.list.jurisdiction());

    let listed = match args.target_tech {
        Some(target_tech) => {
            let profile = Profile {
                country: args.list.country.clone(),
                city: args.list.city.clone(),
                target_tech,
                ..Profile::default()
            };
            recommend_installers(&profile, &installers)
        }
        None => installers,
    };

    Ok(serde_json::to_value(listed)?)
}
