use std::path::{MAIN_SEPARATOR_STR, PathBuf};

use tracing::debug;

use crate::action::Action;
use crate::fs::Entry;

/// What the overlay reports back after handling an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutOutcome {
  /// Overlay inactive, or the action is not one of its own.
  Ignored,
  Moved,
  Cancelled,
  Selected(PathBuf),
}

/// Built-in destinations. Directories the platform does not define are left
/// out.
pub fn default_bookmarks() -> Vec<Entry> {
  let candidates = [
    ("Home", "⌂", dirs::home_dir()),
    ("Desktop", "▣", dirs::desktop_dir()),
    ("Documents", "≡", dirs::document_dir()),
    ("Downloads", "↓", dirs::download_dir()),
    ("Root", "/", Some(PathBuf::from(MAIN_SEPARATOR_STR))),
  ];
  candidates
    .into_iter()
    .filter_map(|(label, icon, path)| path.map(|p| Entry::bookmark(label, icon, p)))
    .collect()
}

/// Modal menu of bookmarked directories. While active it captures all input;
/// it never touches navigation state itself.
#[derive(Debug)]
pub struct ShortcutOverlay {
  entries: Vec<Entry>,
  cursor: usize,
  active: bool,
  pub width: u16,
  pub height: u16,
}

impl ShortcutOverlay {
  /// Anything but `Entry::Bookmark` items with a target is dropped; a cancel
  /// item is always appended.
  pub fn new(bookmarks: Vec<Entry>, width: u16, height: u16) -> Self {
    let mut entries: Vec<Entry> = bookmarks
      .into_iter()
      .filter(|e| matches!(e, Entry::Bookmark { target: Some(_), .. }))
      .collect();
    entries.push(Entry::cancel());
    Self {
      entries,
      cursor: 0,
      active: false,
      width,
      height,
    }
  }

  pub fn activate(&mut self) {
    self.active = true;
    self.cursor = 0;
  }

  pub fn deactivate(&mut self) {
    self.active = false;
  }

  pub fn is_active(&self) -> bool {
    self.active
  }

  pub fn entries(&self) -> &[Entry] {
    &self.entries
  }

  pub fn cursor(&self) -> usize {
    self.cursor
  }

  pub fn selected(&self) -> Option<&Entry> {
    self.entries.get(self.cursor)
  }

  pub fn handle(&mut self, action: &Action) -> ShortcutOutcome {
    if !self.active {
      return ShortcutOutcome::Ignored;
    }
    match action {
      Action::ShortcutsUp => {
        self.cursor = self.cursor.saturating_sub(1);
        ShortcutOutcome::Moved
      }
      Action::ShortcutsDown => {
        self.cursor = (self.cursor + 1).min(self.entries.len() - 1);
        ShortcutOutcome::Moved
      }
      Action::ShortcutsCancel => {
        self.deactivate();
        ShortcutOutcome::Cancelled
      }
      Action::ShortcutsConfirm => {
        self.deactivate();
        match self.selected() {
          Some(Entry::Bookmark { target: Some(target), .. }) => {
            debug!(target = %target.display(), "shortcut selected");
            ShortcutOutcome::Selected(target.clone())
          }
          _ => ShortcutOutcome::Cancelled,
        }
      }
      _ => ShortcutOutcome::Ignored,
    }
  }
}
