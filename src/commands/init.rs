use anyhow::{bail, Context, Result};
use rpawogen::configtool::{default_config_path, GenConfig};
use std::path::Path;

pub fn write_default_config(path: Option<&Path>, force: bool) -> Result<()> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    if path.exists() && !force {
        bail!("Config file {} already exists (use --force to overwrite)", path.display());
    }
    GenConfig::default()
        .save_to(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote default settings to {}", path.display());
    Ok(())
}
