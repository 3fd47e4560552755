pub mod file_list;
pub mod help;
pub mod list;
pub mod shortcuts;
pub mod status_bar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::App;
use crate::config::{Config, FOOTER_HEIGHT, FrameLayout};
use crate::event::InputMode;
use crate::theme::Theme;

/// Style and layout values used while drawing, fixed at startup.
#[derive(Debug, Clone)]
pub struct Renderer {
  pub theme: Theme,
  pub layout: FrameLayout,
}

impl Renderer {
  pub fn from_config(config: &Config) -> Self {
    Self {
      theme: Theme::from_name(&config.theme).unwrap_or_default(),
      layout: config.layout,
    }
  }
}

pub fn draw(frame: &mut Frame, app: &App, config: &Config, renderer: &Renderer) {
  let area = frame.area();

  let chunks = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Min(0),                // file list
      Constraint::Length(FOOTER_HEIGHT), // status / help line
    ])
    .split(area);

  file_list::render_file_list(app, chunks[0], frame.buffer_mut(), renderer);
  status_bar::render_status_bar(app, config, chunks[1], frame.buffer_mut(), &renderer.theme);

  match app.input_mode {
    InputMode::Normal => {}
    InputMode::Shortcuts => shortcuts::render_shortcuts(&app.shortcuts, area, frame.buffer_mut(), renderer),
    InputMode::Help => help::render_help(config, area, frame.buffer_mut(), &renderer.theme),
  }
}

/// A `width` x `height` rect centred in `area`.
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
  let width = width.min(area.width);
  let height = height.min(area.height);
  let x = area.x + (area.width - width) / 2;
  let y = area.y + (area.height - height) / 2;
  Rect::new(x, y, width, height)
}
