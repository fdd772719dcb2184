use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Deserialize;

use heatshift_core::directory::{IncentiveCatalog, StaticCatalog, SupplierDirectory};
use heatshift_core::Jurisdiction;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Calculations
// ---------------------------------------------------------------------------

#[napi]
pub fn assess_renovation(input_json: String) -> NapiResult<String> {
    let input: heatshift_core::assessment::AssessmentInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = heatshift_core::assessment::assess(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn stack_incentives(input_json: String) -> NapiResult<String> {
    let input: heatshift_core::incentives::StackInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        heatshift_core::incentives::stack_incentives(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn estimate_savings(input_json: String) -> NapiResult<String> {
    let input: heatshift_core::savings::SavingsInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = heatshift_core::savings::estimate_savings(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The bundled Frankfurt dataset, in the same shape `--catalog` files use.
#[napi]
pub fn frankfurt_catalog() -> NapiResult<String> {
    serde_json::to_string(&StaticCatalog::builtin()).map_err(to_napi_error)
}

#[derive(Deserialize)]
struct RegionQuery {
    country: String,
    #[serde(default)]
    city: Option<String>,
}

impl RegionQuery {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::new(self.country.clone(), self.city.as_deref())
    }
}

#[napi]
pub fn list_incentives(query_json: String) -> NapiResult<String> {
    let query: RegionQuery = serde_json::from_str(&query_json).map_err(to_napi_error)?;
    let incentives = StaticCatalog::builtin().incentives(&query.jurisdiction());
    serde_json::to_string(&incentives).map_err(to_napi_error)
}

#[napi]
pub fn list_suppliers(query_json: String) -> NapiResult<String> {
    let query: RegionQuery = serde_json::from_str(&query_json).map_err(to_napi_error)?;
    let suppliers = StaticCatalog::builtin().suppliers(&query.jurisdiction());
    serde_json::to_string(&suppliers).map_err(to_napi_error)
}
