#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
  Quit,
  MoveUp,
  MoveDown,
  PageUp,
  PageDown,
  GoToTop,
  GoToBottom,
  Ascend,
  Descend,
  ToggleHidden,
  OpenSelected,
  ShowShortcuts,
  ShortcutsUp,
  ShortcutsDown,
  ShortcutsConfirm,
  ShortcutsCancel,
  ToggleHelp,
  Resize(u16, u16),
  Tick,
  None,
}

impl Action {
  pub fn from_name(name: &str) -> Option<Action> {
    match name {
      "quit" => Some(Action::Quit),
      "move_up" => Some(Action::MoveUp),
      "move_down" => Some(Action::MoveDown),
      "page_up" => Some(Action::PageUp),
      "page_down" => Some(Action::PageDown),
      "go_to_top" => Some(Action::GoToTop),
      "go_to_bottom" => Some(Action::GoToBottom),
      "ascend" => Some(Action::Ascend),
      "descend" => Some(Action::Descend),
      "toggle_hidden" => Some(Action::ToggleHidden),
      "open" => Some(Action::OpenSelected),
      "show_shortcuts" => Some(Action::ShowShortcuts),
      "shortcuts_up" => Some(Action::ShortcutsUp),
      "shortcuts_down" => Some(Action::ShortcutsDown),
      "shortcuts_confirm" => Some(Action::ShortcutsConfirm),
      "shortcuts_cancel" => Some(Action::ShortcutsCancel),
      "toggle_help" => Some(Action::ToggleHelp),
      "none" => Some(Action::None),
      _ => None,
    }
  }

  /// Short description shown next to the bound keys in the footer and the
  /// help overlay.
  pub fn help_text(&self) -> &'static str {
    match self {
      Action::Quit => "quit",
      Action::MoveUp => "move up",
      Action::MoveDown => "move down",
      Action::PageUp => "previous page",
      Action::PageDown => "next page",
      Action::GoToTop => "go to top",
      Action::GoToBottom => "go to bottom",
      Action::Ascend => "go up directory",
      Action::Descend => "open directory",
      Action::ToggleHidden => "toggle hidden files",
      Action::OpenSelected => "access file or dir",
      Action::ShowShortcuts => "shortcuts",
      Action::ShortcutsUp => "previous shortcut",
      Action::ShortcutsDown => "next shortcut",
      Action::ShortcutsConfirm => "go to shortcut",
      Action::ShortcutsCancel => "cancel",
      Action::ToggleHelp => "help",
      Action::Resize(..) | Action::Tick | Action::None => "",
    }
  }
}
