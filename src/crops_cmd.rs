//! Crops command: print the crop menu.

use std::io::{self, Write};

use anyhow::Result;
use tracing::info_span;

use cropwatch_stages::CropCatalog;

use crate::render;

/// Print the numbered crop table.
pub fn run(catalog: &CropCatalog) -> Result<()> {
    let _cmd = info_span!("crops").entered();
    let mut out = io::stdout().lock();
    write!(out, "{}", render::crop_table(catalog))?;
    Ok(())
}
