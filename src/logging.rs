use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `TBROWSE_LOG=debug`.
pub const LOG_ENV: &str = "TBROWSE_LOG";

pub fn log_path() -> Option<PathBuf> {
  dirs::cache_dir().map(|d| d.join("tbrowse").join("tbrowse.log"))
}

/// Starts file logging when `TBROWSE_LOG` is set. The terminal belongs to the
/// UI, so nothing is ever written to stdout or stderr.
pub fn init() -> Result<Option<PathBuf>> {
  let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) else {
    return Ok(None);
  };
  let Some(path) = log_path() else {
    return Ok(None);
  };
  init_at(&path, filter)?;
  Ok(Some(path))
}

fn init_at(path: &Path, filter: EnvFilter) -> Result<()> {
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  let file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("failed to open {}", path.display()))?;

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(Mutex::new(file))
    .with_ansi(false)
    .with_target(false)
    .try_init()
    .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))?;
  Ok(())
}
