use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::enumerate::AggregateResult;

/// Output file name for a target. One fixed file per address, overwritten
/// on a rerun.
pub fn results_path(ip: &str) -> PathBuf {
    PathBuf::from(format!("service_enum_results_{}.yaml", ip))
}

/// Serialize the collected results as YAML and write them to `path`.
pub fn write_results(results: &AggregateResult, path: &Path) -> Result<()> {
    let rendered =
        serde_yaml::to_string(results).context("could not serialize results to YAML")?;

    let file = File::create(path)
        .with_context(|| format!("could not create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(rendered.as_bytes())?;
    writer.flush()?;

    Ok(())
}
