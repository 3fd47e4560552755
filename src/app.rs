use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use crate::action::Action;
use crate::config::{Config, FrameLayout};
use crate::event::InputMode;
use crate::fs::entry::is_hidden;
use crate::fs::{Child, Entry, list_children};
use crate::opener::{Launcher, SystemLauncher};
use crate::shortcuts::{ShortcutOutcome, ShortcutOverlay, default_bookmarks};

/// Ticks a status message stays visible.
const STATUS_TICKS: u16 = 30;

pub struct App {
  pub current_path: PathBuf,
  pub show_hidden: bool,
  pub entries: Vec<Entry>,
  pub cursor: usize,
  pub title: String,
  /// Not used for paging; the list width comes from the frame at draw time.
  pub viewport_width: u16,
  pub viewport_height: u16,
  pub shortcuts: ShortcutOverlay,
  pub input_mode: InputMode,
  pub should_quit: bool,
  pub status_message: Option<String>,
  pub status_is_error: bool,
  pub status_ticks: u16,
  /// Last file handed to the launcher.
  pub last_launch: Option<PathBuf>,
  layout: FrameLayout,
  launcher: Box<dyn Launcher>,
  list_dir: fn(&Path) -> io::Result<Vec<Child>>,
}

impl App {
  pub fn new(root: PathBuf, config: &Config) -> Self {
    Self::with_launcher(root, config, default_bookmarks(), Box::new(SystemLauncher))
  }

  pub fn with_launcher(
    root: PathBuf,
    config: &Config,
    bookmarks: Vec<Entry>,
    launcher: Box<dyn Launcher>,
  ) -> Self {
    let mut app = Self {
      current_path: root,
      show_hidden: false,
      entries: Vec::new(),
      cursor: 0,
      title: String::new(),
      viewport_width: 0,
      viewport_height: 0,
      shortcuts: ShortcutOverlay::new(bookmarks, config.shortcuts_width, config.shortcuts_height),
      input_mode: InputMode::Normal,
      should_quit: false,
      status_message: None,
      status_is_error: false,
      status_ticks: 0,
      last_launch: None,
      layout: config.layout,
      launcher,
      list_dir: list_children,
    };
    app.reload();
    app
  }

  pub fn update(&mut self, action: Action) {
    match action {
      Action::Quit => self.should_quit = true,
      Action::Resize(w, h) => self.resize(w, h),
      Action::Tick => self.tick(),
      action => match self.input_mode {
        InputMode::Normal => self.update_normal(action),
        InputMode::Shortcuts => self.update_shortcuts(action),
        InputMode::Help => self.update_help(action),
      },
    }
  }

  fn update_normal(&mut self, action: Action) {
    match action {
      Action::MoveUp => self.move_cursor(-1),
      Action::MoveDown => self.move_cursor(1),
      Action::PageUp => self.move_cursor(-(self.page_size() as isize)),
      Action::PageDown => self.move_cursor(self.page_size() as isize),
      Action::GoToTop => self.cursor = 0,
      Action::GoToBottom => self.cursor = self.entries.len().saturating_sub(1),
      Action::Ascend => self.ascend(),
      Action::Descend => self.descend(),
      Action::ToggleHidden => self.toggle_hidden(),
      Action::OpenSelected => self.open_selected(),
      Action::ShowShortcuts => self.activate_shortcuts(),
      Action::ToggleHelp => self.input_mode = InputMode::Help,
      _ => {}
    }
  }

  fn update_shortcuts(&mut self, action: Action) {
    match self.shortcuts.handle(&action) {
      ShortcutOutcome::Selected(target) => {
        self.input_mode = InputMode::Normal;
        self.navigate_to(target);
      }
      ShortcutOutcome::Cancelled => {
        debug!("shortcuts cancelled");
        self.input_mode = InputMode::Normal;
      }
      ShortcutOutcome::Moved | ShortcutOutcome::Ignored => {}
    }
  }

  fn update_help(&mut self, action: Action) {
    if action == Action::ToggleHelp {
      self.input_mode = InputMode::Normal;
    }
  }

  /// Re-reads the current directory into `entries`. A read failure leaves
  /// `current_path` alone and shows a single error entry instead.
  pub fn reload(&mut self) {
    self.entries = match (self.list_dir)(&self.current_path) {
      Ok(children) => {
        let entries: Vec<Entry> = children
          .into_iter()
          .filter(|c| self.show_hidden || !is_hidden(&c.name))
          .map(Entry::from_child)
          .collect();
        debug!(path = %self.current_path.display(), count = entries.len(), "directory loaded");
        if entries.is_empty() {
          vec![Entry::empty_dir()]
        } else {
          entries
        }
      }
      Err(e) => {
        warn!(path = %self.current_path.display(), error = %e, "failed to read directory");
        vec![Entry::read_error(&e)]
      }
    };
    self.cursor = 0;
    self.title = format!("Files in: {}", self.current_path.display());
  }

  pub fn descend(&mut self) {
    if let Some(Entry::Directory { name }) = self.selected_entry() {
      let path = self.current_path.join(name);
      self.navigate_to(path);
    }
  }

  /// Moves to the parent directory. At a filesystem root this does nothing.
  pub fn ascend(&mut self) {
    let Some(parent) = self.current_path.parent().map(Path::to_path_buf) else {
      return;
    };
    if parent != self.current_path {
      self.navigate_to(parent);
    }
  }

  pub fn toggle_hidden(&mut self) {
    self.show_hidden = !self.show_hidden;
    debug!(show_hidden = self.show_hidden, "hidden files toggled");
    self.reload();
  }

  pub fn activate_shortcuts(&mut self) {
    self.shortcuts.activate();
    self.input_mode = InputMode::Shortcuts;
  }

  /// Files go to the launcher, directories are entered, placeholders do
  /// nothing.
  pub fn open_selected(&mut self) {
    let Some(entry) = self.selected_entry() else {
      return;
    };
    match entry {
      Entry::Directory { .. } => self.descend(),
      Entry::File { name, .. } => {
        let name = name.clone();
        let path = self.current_path.join(&name);
        match self.launcher.launch(&path) {
          Ok(()) => {
            info!(path = %path.display(), "launch requested");
            self.set_status(format!("Opening {}", name.to_string_lossy()));
            self.last_launch = Some(path);
          }
          Err(e) => {
            error!(path = %path.display(), error = %e, "launch failed");
            self.set_error(e.to_string());
          }
        }
      }
      Entry::Placeholder { .. } | Entry::Bookmark { .. } => {}
    }
  }

  pub fn resize(&mut self, width: u16, height: u16) {
    self.viewport_width = width;
    self.viewport_height = height;
  }

  pub fn navigate_to(&mut self, path: PathBuf) {
    info!(from = %self.current_path.display(), to = %path.display(), "navigate");
    self.current_path = path;
    self.reload();
  }

  pub fn selected_entry(&self) -> Option<&Entry> {
    self.entries.get(self.cursor)
  }

  /// Entries per page of the main list at the current viewport size.
  pub fn page_size(&self) -> usize {
    self.layout.items_per_page(self.viewport_height)
  }

  pub fn set_status(&mut self, message: String) {
    self.status_message = Some(message);
    self.status_is_error = false;
    self.status_ticks = STATUS_TICKS;
  }

  pub fn set_error(&mut self, message: String) {
    self.set_status(message);
    self.status_is_error = true;
  }

  fn tick(&mut self) {
    if self.status_ticks > 0 {
      self.status_ticks -= 1;
    } else {
      self.status_message = None;
    }
  }

  fn move_cursor(&mut self, delta: isize) {
    let last = self.entries.len().saturating_sub(1);
    self.cursor = self.cursor.saturating_add_signed(delta).min(last);
  }
}
