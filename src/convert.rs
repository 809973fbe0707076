//! Pure conversion functions: TOML catalog structs -> crate API types.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use cropwatch_stages::{CatalogError, CropCatalog, GrowthProfile, StageDefinition};

use crate::config::{CatalogToml, CropToml};

/// Builds a [`GrowthProfile`] from one TOML crop entry.
pub fn build_profile(crop: &CropToml) -> Result<GrowthProfile, CatalogError> {
    let stages = crop
        .stages
        .iter()
        .map(|s| StageDefinition::new(s.name.clone(), s.days))
        .collect();
    GrowthProfile::new(stages).map_err(|source| CatalogError::InvalidProfile {
        crop: crop.name.clone(),
        source,
    })
}

/// Builds a [`CropCatalog`] from a parsed TOML file, keeping file order.
pub fn build_catalog(cfg: &CatalogToml) -> Result<CropCatalog> {
    if cfg.crops.is_empty() {
        bail!("crop catalog defines no crops: add at least one [[crop]] table");
    }
    let mut catalog = CropCatalog::new();
    for crop in &cfg.crops {
        catalog.insert(crop.name.clone(), build_profile(crop)?)?;
    }
    Ok(catalog)
}

/// Loads the crop catalog from `path`, or the built-in table when `None`.
pub fn load_catalog(path: Option<&Path>) -> Result<CropCatalog> {
    let Some(path) = path else {
        return Ok(CropCatalog::builtin());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read crop catalog: {}", path.display()))?;
    let cfg: CatalogToml = toml::from_str(&toml_str).context("failed to parse crop catalog TOML")?;
    let catalog = build_catalog(&cfg)
        .with_context(|| format!("invalid crop catalog: {}", path.display()))?;
    info!(path = %path.display(), n_crops = catalog.len(), "crop catalog loaded");
    Ok(catalog)
}
