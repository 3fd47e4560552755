use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LaunchError {
  #[error("Failed to open {}: no such file", path.display())]
  NotFound { path: PathBuf },

  #[error("Failed to open {}: {source}", path.display())]
  Spawn {
    path: PathBuf,
    #[source]
    source: io::Error,
  },
}

/// Hands a file to something that opens it. Implementations must not block
/// on the opened program.
pub trait Launcher {
  fn launch(&self, path: &Path) -> Result<(), LaunchError>;
}

/// Opens files with the desktop's default handler.
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
  fn launch(&self, path: &Path) -> Result<(), LaunchError> {
    if !path.exists() {
      return Err(LaunchError::NotFound { path: path.to_path_buf() });
    }
    // Detached: the child is never waited on and its exit status is dropped.
    open::that_detached(path).map_err(|source| LaunchError::Spawn {
      path: path.to_path_buf(),
      source,
    })
  }
}
