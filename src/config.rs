use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;

use crate::action::Action;
use crate::event::InputMode;

/// Rows each list entry occupies: title and description.
pub const ITEM_HEIGHT: u16 = 2;
/// Rows below the main box reserved for the status/help line.
pub const FOOTER_HEIGHT: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
  pub code: KeyCode,
  pub modifiers: KeyModifiers,
}

impl KeyBinding {
  pub fn display_key(&self) -> String {
    let key_name = match self.code {
      KeyCode::Char(' ') => "space".to_string(),
      KeyCode::Char(c) => c.to_string(),
      KeyCode::Enter => "enter".to_string(),
      KeyCode::Esc => "esc".to_string(),
      KeyCode::Backspace => "backspace".to_string(),
      KeyCode::Tab => "tab".to_string(),
      KeyCode::Home => "home".to_string(),
      KeyCode::End => "end".to_string(),
      KeyCode::PageUp => "pgup".to_string(),
      KeyCode::PageDown => "pgdown".to_string(),
      KeyCode::Up => "↑".to_string(),
      KeyCode::Down => "↓".to_string(),
      KeyCode::Left => "←".to_string(),
      KeyCode::Right => "→".to_string(),
      KeyCode::F(n) => format!("F{n}"),
      _ => format!("{:?}", self.code),
    };

    if self.modifiers.contains(KeyModifiers::CONTROL) {
      format!("ctrl+{key_name}")
    } else if self.modifiers.contains(KeyModifiers::ALT) {
      format!("alt+{key_name}")
    } else {
      key_name
    }
  }
}

/// Insets of the main box: one border cell per side plus padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
  pub padding_x: u16,
  pub padding_y: u16,
}

/// Largest padding accepted from the config file, per side.
pub const MAX_PADDING: u16 = 8;

impl FrameLayout {
  pub fn vertical_inset(&self) -> u16 {
    self.padding_y.saturating_mul(2).saturating_add(2)
  }

  /// Number of entries that fit in the main list for a terminal of the given
  /// height. Never zero.
  pub fn items_per_page(&self, terminal_height: u16) -> usize {
    let rows = terminal_height.saturating_sub(self.vertical_inset().saturating_add(FOOTER_HEIGHT));
    ((rows / ITEM_HEIGHT) as usize).max(1)
  }
}

impl Default for FrameLayout {
  fn default() -> Self {
    Self { padding_x: 2, padding_y: 1 }
  }
}

pub struct Config {
  pub tick_rate_ms: u64,
  pub theme: String,
  pub shortcuts_width: u16,
  pub shortcuts_height: u16,
  pub layout: FrameLayout,
  pub normal_keys: HashMap<KeyBinding, Action>,
  pub shortcut_keys: HashMap<KeyBinding, Action>,
  pub help_keys: HashMap<KeyBinding, Action>,
}

#[derive(Deserialize, Default)]
struct TomlConfig {
  general: Option<GeneralConfig>,
  layout: Option<LayoutConfig>,
  keys: Option<KeysConfig>,
}

#[derive(Deserialize, Default)]
struct GeneralConfig {
  tick_rate_ms: Option<u64>,
  theme: Option<String>,
  shortcuts_width: Option<u16>,
  shortcuts_height: Option<u16>,
}

#[derive(Deserialize, Default)]
struct LayoutConfig {
  padding_x: Option<u16>,
  padding_y: Option<u16>,
}

#[derive(Deserialize, Default)]
struct KeysConfig {
  normal: Option<HashMap<String, String>>,
  shortcuts: Option<HashMap<String, String>>,
  help: Option<HashMap<String, String>>,
}

pub fn parse_key_binding(s: &str) -> Option<KeyBinding> {
  if s.is_empty() {
    return None;
  }

  let parts: Vec<&str> = s.split('+').collect();

  if parts.len() == 1 {
    let key = parts[0];
    if let Some(code) = named_key(key) {
      return Some(KeyBinding { code, modifiers: KeyModifiers::NONE });
    }
    let chars: Vec<char> = key.chars().collect();
    if chars.len() == 1 {
      return Some(KeyBinding { code: KeyCode::Char(chars[0]), modifiers: KeyModifiers::NONE });
    }
    return None;
  }

  if parts.len() == 2 {
    let modifier_str = parts[0].to_lowercase();
    let key_str = parts[1];

    let modifiers = match modifier_str.as_str() {
      "ctrl" => KeyModifiers::CONTROL,
      "shift" => {
        let chars: Vec<char> = key_str.chars().collect();
        if chars.len() == 1 {
          let c = chars[0].to_uppercase().next().unwrap_or(chars[0]);
          return Some(KeyBinding { code: KeyCode::Char(c), modifiers: KeyModifiers::NONE });
        }
        if let Some(code) = named_key(key_str) {
          return Some(KeyBinding { code, modifiers: KeyModifiers::SHIFT });
        }
        return None;
      }
      "alt" => KeyModifiers::ALT,
      _ => return None,
    };

    if let Some(code) = named_key(key_str) {
      return Some(KeyBinding { code, modifiers });
    }
    let chars: Vec<char> = key_str.chars().collect();
    if chars.len() == 1 {
      return Some(KeyBinding { code: KeyCode::Char(chars[0]), modifiers });
    }
    return None;
  }

  None
}

fn named_key(s: &str) -> Option<KeyCode> {
  match s.to_lowercase().as_str() {
    "enter" => Some(KeyCode::Enter),
    "space" => Some(KeyCode::Char(' ')),
    "esc" => Some(KeyCode::Esc),
    "up" => Some(KeyCode::Up),
    "down" => Some(KeyCode::Down),
    "left" => Some(KeyCode::Left),
    "right" => Some(KeyCode::Right),
    "backspace" => Some(KeyCode::Backspace),
    "tab" => Some(KeyCode::Tab),
    "home" => Some(KeyCode::Home),
    "end" => Some(KeyCode::End),
    "pageup" => Some(KeyCode::PageUp),
    "pagedown" => Some(KeyCode::PageDown),
    s if s.starts_with('f') && s.len() > 1 => {
      s[1..].parse::<u8>().ok().filter(|&n| (1..=24).contains(&n)).map(KeyCode::F)
    }
    _ => None,
  }
}

/// Shifted characters already arrive as the shifted glyph (`G`, `?`), so the
/// SHIFT flag is dropped for them.
pub fn normalize_key_event(key: KeyEvent) -> KeyBinding {
  let mut modifiers = key.modifiers;
  if let KeyCode::Char(_) = key.code {
    modifiers -= KeyModifiers::SHIFT;
  }
  KeyBinding { code: key.code, modifiers }
}

fn parse_key_table(
  section: &str,
  table: &HashMap<String, String>,
  errors: &mut Vec<String>,
) -> HashMap<KeyBinding, Action> {
  let mut keys = HashMap::new();
  for (key_str, action_str) in table {
    let Some(kb) = parse_key_binding(key_str) else {
      errors.push(format!("invalid key binding in [keys.{section}]: {key_str:?}"));
      continue;
    };
    let Some(action) = Action::from_name(action_str) else {
      errors.push(format!("invalid action in [keys.{section}]: {action_str:?}"));
      continue;
    };
    keys.insert(kb, action);
  }
  keys
}

impl Default for Config {
  fn default() -> Self {
    let mut config = Config::empty();
    let mut errors = Vec::new();
    config.apply_toml_str(Config::default_toml(), &mut errors);
    config
  }
}

fn clamp_padding(name: &str, value: u16, errors: &mut Vec<String>) -> u16 {
  if value > MAX_PADDING {
    errors.push(format!("layout.{name} = {value} is too large, using {MAX_PADDING}"));
    MAX_PADDING
  } else {
    value
  }
}

impl Config {
  fn empty() -> Self {
    Config {
      tick_rate_ms: 100,
      theme: "dark".to_string(),
      shortcuts_width: 44,
      shortcuts_height: 16,
      layout: FrameLayout::default(),
      normal_keys: HashMap::new(),
      shortcut_keys: HashMap::new(),
      help_keys: HashMap::new(),
    }
  }

  fn apply_toml_str(&mut self, s: &str, errors: &mut Vec<String>) {
    let toml_config: TomlConfig = match toml::from_str(s) {
      Ok(c) => c,
      Err(e) => {
        errors.push(format!("failed to parse config.toml: {e}"));
        return;
      }
    };

    if let Some(general) = toml_config.general {
      if let Some(tick) = general.tick_rate_ms {
        self.tick_rate_ms = tick;
      }
      if let Some(theme) = general.theme {
        if crate::theme::Theme::from_name(&theme).is_some() {
          self.theme = theme;
        } else {
          errors.push(format!("unknown theme: {theme:?}"));
        }
      }
      if let Some(width) = general.shortcuts_width {
        self.shortcuts_width = width;
      }
      if let Some(height) = general.shortcuts_height {
        self.shortcuts_height = height;
      }
    }

    if let Some(layout) = toml_config.layout {
      if let Some(x) = layout.padding_x {
        self.layout.padding_x = clamp_padding("padding_x", x, errors);
      }
      if let Some(y) = layout.padding_y {
        self.layout.padding_y = clamp_padding("padding_y", y, errors);
      }
    }

    if let Some(keys) = toml_config.keys {
      if let Some(normal) = keys.normal {
        self.normal_keys = parse_key_table("normal", &normal, errors);
      }
      if let Some(shortcuts) = keys.shortcuts {
        self.shortcut_keys = parse_key_table("shortcuts", &shortcuts, errors);
      }
      if let Some(help) = keys.help {
        self.help_keys = parse_key_table("help", &help, errors);
      }
    }
  }

  pub fn default_toml() -> &'static str {
    r#"[general]
tick_rate_ms = 100      # event loop tick rate in ms
theme = "dark"          # dark | light
shortcuts_width = 44    # shortcut overlay size, independent of the terminal size
shortcuts_height = 16

[layout]
padding_x = 2
padding_y = 1

[keys.normal]
enter = "open"
left = "ascend"
backspace = "ascend"
right = "descend"
h = "toggle_hidden"
s = "show_shortcuts"
up = "move_up"
k = "move_up"
down = "move_down"
j = "move_down"
pageup = "page_up"
pagedown = "page_down"
home = "go_to_top"
g = "go_to_top"
end = "go_to_bottom"
"shift+g" = "go_to_bottom"
"?" = "toggle_help"
q = "quit"
"ctrl+c" = "quit"

[keys.shortcuts]
esc = "shortcuts_cancel"
enter = "shortcuts_confirm"
up = "shortcuts_up"
k = "shortcuts_up"
down = "shortcuts_down"
j = "shortcuts_down"
q = "quit"
"ctrl+c" = "quit"

[keys.help]
esc = "toggle_help"
"?" = "toggle_help"
q = "quit"
"ctrl+c" = "quit"
"#
  }

  pub fn keys_for(&self, mode: InputMode) -> &HashMap<KeyBinding, Action> {
    match mode {
      InputMode::Normal => &self.normal_keys,
      InputMode::Shortcuts => &self.shortcut_keys,
      InputMode::Help => &self.help_keys,
    }
  }

  /// Keys bound to each action in one mode, sorted for stable display.
  pub fn reverse_lookup(&self, mode: InputMode) -> HashMap<Action, Vec<String>> {
    let mut map: HashMap<Action, Vec<String>> = HashMap::new();
    for (kb, action) in self.keys_for(mode) {
      map.entry(action.clone()).or_default().push(kb.display_key());
    }
    for keys in map.values_mut() {
      keys.sort();
    }
    map
  }

  /// Keys bound to each action across every mode.
  pub fn full_reverse_lookup(&self) -> HashMap<Action, Vec<String>> {
    let mut map: HashMap<Action, Vec<String>> = HashMap::new();
    for mode in [InputMode::Normal, InputMode::Shortcuts, InputMode::Help] {
      for (action, keys) in self.reverse_lookup(mode) {
        map.entry(action).or_default().extend(keys);
      }
    }
    for keys in map.values_mut() {
      keys.sort();
      keys.dedup();
    }
    map
  }

  pub fn config_path() -> Result<std::path::PathBuf, String> {
    dirs::config_dir()
      .map(|d| d.join("tbrowse").join("config.toml"))
      .ok_or_else(|| "could not determine config directory".to_string())
  }

  pub fn dump_default_config(path: &std::path::Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)
        .map_err(|e| format!("failed to create {}: {e}", parent.display()))?;
    }

    std::fs::write(path, Self::default_toml())
      .map_err(|e| format!("failed to write {}: {e}", path.display()))?;

    Ok(())
  }

  pub fn load() -> (Config, Vec<String>) {
    let mut errors = Vec::new();

    let content = Self::config_path()
      .ok()
      .and_then(|p| std::fs::read_to_string(p).ok());

    let config = match content {
      Some(s) => Self::load_from_str_with_errors(&s, &mut errors),
      None => Config::default(),
    };

    (config, errors)
  }

  #[cfg(test)]
  pub fn load_from_str(s: &str) -> Config {
    let mut errors = Vec::new();
    Self::load_from_str_with_errors(s, &mut errors)
  }

  fn load_from_str_with_errors(s: &str, errors: &mut Vec<String>) -> Config {
    let mut config = Config::default();
    config.apply_toml_str(s, errors);
    config
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crossterm::event::{KeyEventKind, KeyEventState};

  fn kb(code: KeyCode) -> KeyBinding {
    KeyBinding { code, modifiers: KeyModifiers::NONE }
  }

  // --- parse_key_binding tests ---

  #[test]
  fn test_parse_single_char() {
    let kb = parse_key_binding("h").unwrap();
    assert_eq!(kb.code, KeyCode::Char('h'));
    assert_eq!(kb.modifiers, KeyModifiers::NONE);
  }

  #[test]
  fn test_parse_shift_modifier() {
    let kb = parse_key_binding("shift+g").unwrap();
    assert_eq!(kb.code, KeyCode::Char('G'));
    assert_eq!(kb.modifiers, KeyModifiers::NONE);
    assert_eq!(kb, parse_key_binding("G").unwrap());
  }

  #[test]
  fn test_parse_ctrl_modifier() {
    let kb = parse_key_binding("ctrl+c").unwrap();
    assert_eq!(kb.code, KeyCode::Char('c'));
    assert_eq!(kb.modifiers, KeyModifiers::CONTROL);
  }

  #[test]
  fn test_parse_named_keys() {
    assert_eq!(parse_key_binding("enter").unwrap().code, KeyCode::Enter);
    assert_eq!(parse_key_binding("esc").unwrap().code, KeyCode::Esc);
    assert_eq!(parse_key_binding("left").unwrap().code, KeyCode::Left);
    assert_eq!(parse_key_binding("right").unwrap().code, KeyCode::Right);
    assert_eq!(parse_key_binding("backspace").unwrap().code, KeyCode::Backspace);
    assert_eq!(parse_key_binding("home").unwrap().code, KeyCode::Home);
    assert_eq!(parse_key_binding("end").unwrap().code, KeyCode::End);
    assert_eq!(parse_key_binding("pagedown").unwrap().code, KeyCode::PageDown);
    assert_eq!(parse_key_binding("f5").unwrap().code, KeyCode::F(5));
  }

  #[test]
  fn test_parse_invalid() {
    assert!(parse_key_binding("").is_none());
    assert!(parse_key_binding("foobar").is_none());
    assert!(parse_key_binding("hyper+x").is_none());
    assert!(parse_key_binding("f99").is_none());
  }

  // --- normalize_key_event tests ---

  fn key_event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
      code,
      modifiers,
      kind: KeyEventKind::Press,
      state: KeyEventState::NONE,
    }
  }

  #[test]
  fn test_normalize_shifted_chars() {
    let kb = normalize_key_event(key_event(KeyCode::Char('G'), KeyModifiers::SHIFT));
    assert_eq!(kb, KeyBinding { code: KeyCode::Char('G'), modifiers: KeyModifiers::NONE });
    let kb = normalize_key_event(key_event(KeyCode::Char('?'), KeyModifiers::SHIFT));
    assert_eq!(kb, KeyBinding { code: KeyCode::Char('?'), modifiers: KeyModifiers::NONE });
  }

  #[test]
  fn test_normalize_ctrl_preserved() {
    let kb = normalize_key_event(key_event(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(kb.modifiers, KeyModifiers::CONTROL);
  }

  #[test]
  fn test_normalize_named_key_keeps_shift() {
    let kb = normalize_key_event(key_event(KeyCode::Left, KeyModifiers::SHIFT));
    assert_eq!(kb.modifiers, KeyModifiers::SHIFT);
  }

  // --- defaults ---

  #[test]
  fn test_default_general_values() {
    let config = Config::default();
    assert_eq!(config.tick_rate_ms, 100);
    assert_eq!(config.theme, "dark");
    assert_eq!(config.shortcuts_width, 44);
    assert_eq!(config.shortcuts_height, 16);
    assert_eq!(config.layout, FrameLayout { padding_x: 2, padding_y: 1 });
  }

  #[test]
  fn test_default_normal_bindings() {
    let config = Config::default();
    let expected = vec![
      (kb(KeyCode::Enter), Action::OpenSelected),
      (kb(KeyCode::Left), Action::Ascend),
      (kb(KeyCode::Backspace), Action::Ascend),
      (kb(KeyCode::Right), Action::Descend),
      (kb(KeyCode::Char('h')), Action::ToggleHidden),
      (kb(KeyCode::Char('s')), Action::ShowShortcuts),
      (kb(KeyCode::Char('q')), Action::Quit),
      (KeyBinding { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL }, Action::Quit),
      (kb(KeyCode::Char('G')), Action::GoToBottom),
      (kb(KeyCode::Char('?')), Action::ToggleHelp),
    ];
    for (binding, action) in expected {
      assert_eq!(config.normal_keys.get(&binding), Some(&action), "missing binding for {binding:?}");
    }
  }

  #[test]
  fn test_default_shortcut_bindings() {
    let config = Config::default();
    assert_eq!(config.shortcut_keys.get(&kb(KeyCode::Esc)), Some(&Action::ShortcutsCancel));
    assert_eq!(config.shortcut_keys.get(&kb(KeyCode::Enter)), Some(&Action::ShortcutsConfirm));
    assert_eq!(config.shortcut_keys.get(&kb(KeyCode::Char('q'))), Some(&Action::Quit));
    // The main table's keys mean nothing while the overlay is up.
    assert_eq!(config.shortcut_keys.get(&kb(KeyCode::Char('h'))), None);
    assert_eq!(config.shortcut_keys.get(&kb(KeyCode::Left)), None);
  }

  #[test]
  fn test_default_toml_is_valid_toml() {
    let result: Result<TomlConfig, _> = toml::from_str(Config::default_toml());
    assert!(result.is_ok(), "default_toml() is not valid TOML: {:?}", result.err());
  }

  #[test]
  fn test_default_derives_from_toml() {
    let empty = Config::empty();
    let default = Config::default();
    assert!(empty.normal_keys.is_empty());
    assert!(!default.normal_keys.is_empty());
    assert!(!default.shortcut_keys.is_empty());
    assert!(!default.help_keys.is_empty());
  }

  // --- load_from_str ---

  #[test]
  fn test_load_empty_string_keeps_defaults() {
    let config = Config::load_from_str("");
    assert_eq!(config.tick_rate_ms, 100);
    assert_eq!(config.normal_keys.len(), Config::default().normal_keys.len());
  }

  #[test]
  fn test_load_general_overrides() {
    let toml = r#"
[general]
tick_rate_ms = 250
theme = "light"
shortcuts_width = 30
shortcuts_height = 10

[layout]
padding_x = 0
"#;
    let config = Config::load_from_str(toml);
    assert_eq!(config.tick_rate_ms, 250);
    assert_eq!(config.theme, "light");
    assert_eq!(config.shortcuts_width, 30);
    assert_eq!(config.shortcuts_height, 10);
    assert_eq!(config.layout.padding_x, 0);
    assert_eq!(config.layout.padding_y, 1);
  }

  #[test]
  fn test_unknown_theme_reported() {
    let mut config = Config::default();
    let mut errors = Vec::new();
    config.apply_toml_str("[general]\ntheme = \"neon\"\n", &mut errors);
    assert_eq!(config.theme, "dark");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("neon"));
  }

  #[test]
  fn test_keys_section_replaces_only_that_table() {
    let toml = r#"
[keys.normal]
x = "quit"
"#;
    let config = Config::load_from_str(toml);
    assert_eq!(config.normal_keys.len(), 1);
    assert_eq!(config.normal_keys.get(&kb(KeyCode::Char('x'))), Some(&Action::Quit));
    assert_eq!(config.shortcut_keys.len(), Config::default().shortcut_keys.len());
  }

  #[test]
  fn test_invalid_entries_skipped_and_reported() {
    let mut config = Config::default();
    let mut errors = Vec::new();
    let toml = r#"
[keys.shortcuts]
"" = "quit"
x = "explode"
esc = "shortcuts_cancel"
"#;
    config.apply_toml_str(toml, &mut errors);
    assert_eq!(config.shortcut_keys.len(), 1);
    assert_eq!(errors.len(), 2);
  }

  #[test]
  fn test_load_malformed_toml_returns_default() {
    let mut errors = Vec::new();
    let config = Config::load_from_str_with_errors("this is not [valid toml", &mut errors);
    assert_eq!(config.tick_rate_ms, 100);
    assert_eq!(errors.len(), 1);
  }

  // --- layout ---

  #[test]
  fn test_items_per_page() {
    let layout = FrameLayout::default();
    // 24 rows - 4 (border + padding) - 1 footer = 19 rows, 9 two-row items.
    assert_eq!(layout.items_per_page(24), 9);
    assert_eq!(layout.items_per_page(0), 1);
  }

  #[test]
  fn test_huge_padding_saturates() {
    let layout = FrameLayout { padding_x: u16::MAX, padding_y: 40000 };
    assert_eq!(layout.vertical_inset(), u16::MAX);
    assert_eq!(layout.items_per_page(24), 1);
  }

  #[test]
  fn test_oversized_padding_clamped_and_reported() {
    let mut errors = Vec::new();
    let config =
      Config::load_from_str_with_errors("[layout]\npadding_x = 3\npadding_y = 40000\n", &mut errors);
    assert_eq!(config.layout.padding_x, 3);
    assert_eq!(config.layout.padding_y, MAX_PADDING);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("padding_y"));
  }

  // --- lookups ---

  #[test]
  fn test_display_key() {
    assert_eq!(kb(KeyCode::Char('h')).display_key(), "h");
    assert_eq!(kb(KeyCode::Left).display_key(), "←");
    let ctrl_c = KeyBinding { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL };
    assert_eq!(ctrl_c.display_key(), "ctrl+c");
  }

  #[test]
  fn test_reverse_lookup_per_mode() {
    let config = Config::default();
    let normal = config.reverse_lookup(InputMode::Normal);
    assert_eq!(normal.get(&Action::Ascend), Some(&vec!["backspace".to_string(), "←".to_string()]));
    assert!(normal.get(&Action::ShortcutsCancel).is_none());

    let shortcuts = config.reverse_lookup(InputMode::Shortcuts);
    assert_eq!(shortcuts.get(&Action::ShortcutsCancel), Some(&vec!["esc".to_string()]));
  }

  #[test]
  fn test_full_reverse_lookup_dedups() {
    let config = Config::default();
    let full = config.full_reverse_lookup();
    let quit = full.get(&Action::Quit).unwrap();
    assert_eq!(quit, &vec!["ctrl+c".to_string(), "q".to_string()]);
  }
}
