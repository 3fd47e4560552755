use std::ffi::OsString;
use std::io;
use std::path::Path;

use tracing::warn;

/// One child of a directory, as the filesystem reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Child {
  pub name: OsString,
  pub is_dir: bool,
  pub size: Option<u64>,
}

/// Lists the children of `path` in enumeration order.
///
/// An unreadable directory is an `Err`; a readable empty one is `Ok` with no
/// children. Symlinks to directories count as directories.
pub fn list_children(path: &Path) -> io::Result<Vec<Child>> {
  let mut children = Vec::new();

  for entry in std::fs::read_dir(path)? {
    let entry = match entry {
      Ok(entry) => entry,
      Err(e) => {
        warn!(path = %path.display(), error = %e, "skipping unreadable directory entry");
        continue;
      }
    };
    let name = entry.file_name();
    let is_dir = entry
      .path()
      .metadata()
      .map(|m| m.is_dir())
      .or_else(|_| entry.file_type().map(|t| t.is_dir()))
      .unwrap_or(false);
    let size = if is_dir {
      None
    } else {
      entry.metadata().ok().map(|m| m.len())
    };
    children.push(Child { name, is_dir, size });
  }

  Ok(children)
}
