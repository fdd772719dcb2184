use clap::Args;
use serde_json::Value;
use std::path::PathBuf;

use heatshift_core::assessment::{self, AssessmentInput};
use heatshift_core::directory::{find_supplier, IncentiveCatalog, StaticCatalog};
use heatshift_core::incentives::{self, StackInput};
use heatshift_core::savings::{self, SavingsInput};
use heatshift_core::{Profile, Supplier};

use super::{load_assumptions, load_catalog, ProfileArgs};
use crate::config::CliConfig;

/// Arguments for a full assessment
#[derive(Args)]
pub struct AssessArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Catalog file (JSON/YAML array of regional catalogs)
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Electricity supplier name, looked up in the catalog
    #[arg(long)]
    pub supplier: Option<String>,

    /// Savings assumptions file (JSON/YAML, partial overrides allowed)
    #[arg(long)]
    pub assumptions: Option<PathBuf>,
}

/// Arguments for grant stacking
#[derive(Args)]
pub struct StackArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Catalog file (JSON/YAML array of regional catalogs)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Arguments for the savings estimate
#[derive(Args)]
pub struct SavingsArgs {
    #[command(flatten)]
    pub profile: ProfileArgs,

    /// Catalog file used for the supplier lookup
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Electricity supplier name
    #[arg(long)]
    pub supplier: Option<String>,

    /// Savings assumptions file (JSON/YAML, partial overrides allowed)
    #[arg(long)]
    pub assumptions: Option<PathBuf>,
}

pub fn run_assess(args: AssessArgs, config: &CliConfig) -> Result<Value, Box<dyn std::error::Error>> {
    let profile = args.profile.resolve()?;
    let catalog = load_catalog(args.catalog.as_deref(), config)?;
    let supplier = pick_supplier(&catalog, &profile, args.supplier.as_deref())?;

    let input = AssessmentInput {
        incentives: catalog.incentives(&profile.jurisdiction()),
        supplier,
        assumptions: load_assumptions(args.assumptions.as_deref())?,
        profile,
    };

    let result = assessment::assess(&input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_stack(args: StackArgs, config: &CliConfig) -> Result<Value, Box<dyn std::error::Error>> {
    let profile = args.profile.resolve()?;
    let catalog = load_catalog(args.catalog.as_deref(), config)?;

    let input = StackInput {
        incentives: catalog.incentives(&profile.jurisdiction()),
        profile,
    };

    let result = incentives::stack_incentives(&input)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_savings(args: SavingsArgs, config: &CliConfig) -> Result<Value, Box<dyn std::error::Error>> {
    let profile = args.profile.resolve()?;
    let supplier = match args.supplier.as_deref() {
        Some(name) => {
            let catalog = load_catalog(args.catalog.as_deref(), config)?;
            pick_supplier(&catalog, &profile, Some(name))?
        }
        None => None,
    };

    let input = SavingsInput {
        profile,
        supplier,
        assumptions: load_assumptions(args.assumptions.as_deref())?,
    };

    let result = savings::estimate_savings(&input)?;
    Ok(serde_json::to_value(result)?)
}

fn pick_supplier(
    catalog: &StaticCatalog,
    profile: &Profile,
    name: Option<&str>,
) -> Result<Option<Supplier>, Box<dyn std::error::Error>> {
    match name {
        Some(name) => Ok(Some(find_supplier(catalog, &profile.jurisdiction(), name)?)),
        None => Ok(None),
    }
}
