use std::ffi::{OsStr, OsString};
use std::io;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use super::listing::Child;

pub const HIDDEN_PREFIX: char = '.';

/// A row of a selectable list: either a child of the current directory, a
/// synthetic placeholder, or an item of the shortcut overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
  /// `name` is the raw filesystem name, used as-is for path joins.
  Directory {
    name: OsString,
  },
  File {
    name: OsString,
    size: Option<u64>,
  },
  /// Stands in for an empty or unreadable directory. Has no effect when
  /// selected.
  Placeholder {
    title: String,
    description: String,
  },
  /// `target: None` is the cancel item of the shortcut overlay.
  Bookmark {
    label: String,
    icon: &'static str,
    target: Option<PathBuf>,
  },
}

impl Entry {
  pub fn from_child(child: Child) -> Self {
    if child.is_dir {
      Entry::Directory { name: child.name }
    } else {
      Entry::File { name: child.name, size: child.size }
    }
  }

  pub fn empty_dir() -> Self {
    Entry::Placeholder {
      title: "(empty directory)".to_string(),
      description: String::new(),
    }
  }

  pub fn read_error(err: &io::Error) -> Self {
    Entry::Placeholder {
      title: "Error reading dir".to_string(),
      description: err.to_string(),
    }
  }

  pub fn bookmark(label: &str, icon: &'static str, target: PathBuf) -> Self {
    Entry::Bookmark {
      label: label.to_string(),
      icon,
      target: Some(target),
    }
  }

  pub fn cancel() -> Self {
    Entry::Bookmark {
      label: "Cancel".to_string(),
      icon: "✕",
      target: None,
    }
  }

  /// Display name; directories carry a trailing path separator. Names that
  /// are not valid UTF-8 are shown lossily.
  pub fn title(&self) -> String {
    match self {
      Entry::Directory { name } => format!("{}{MAIN_SEPARATOR}", name.to_string_lossy()),
      Entry::File { name, .. } => name.to_string_lossy().into_owned(),
      Entry::Placeholder { title, .. } => title.clone(),
      Entry::Bookmark { label, icon, .. } => format!("{icon} {label}"),
    }
  }

  pub fn description(&self) -> String {
    match self {
      Entry::Directory { .. } => "Directory".to_string(),
      Entry::File { size: Some(size), .. } => format!("File - {size} bytes"),
      Entry::File { size: None, .. } => "File".to_string(),
      Entry::Placeholder { description, .. } => description.clone(),
      Entry::Bookmark { target: Some(target), .. } => contract_home(target),
      Entry::Bookmark { target: None, .. } => "Close this menu".to_string(),
    }
  }
}

pub fn is_hidden(name: &OsStr) -> bool {
  name.as_encoded_bytes().first() == Some(&(HIDDEN_PREFIX as u8))
}

fn contract_home(path: &Path) -> String {
  if let Some(home) = dirs::home_dir()
    && let Ok(rest) = path.strip_prefix(&home)
  {
    if rest.as_os_str().is_empty() {
      return "~".to_string();
    }
    return format!("~{MAIN_SEPARATOR}{}", rest.display());
  }
  path.display().to_string()
}
