use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Padding, Paragraph, Widget};

use super::Renderer;
use super::list::entry_lines;
use crate::app::App;

pub fn render_file_list(app: &App, area: Rect, buf: &mut Buffer, renderer: &Renderer) {
  let theme = &renderer.theme;
  let layout = renderer.layout;

  let title = if app.show_hidden {
    format!(" {} [hidden: on] ", app.title)
  } else {
    format!(" {} ", app.title)
  };

  let block = Block::bordered()
    .border_style(Style::default().fg(theme.border))
    .title(title)
    .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
    .padding(Padding::new(
      layout.padding_x,
      layout.padding_x,
      layout.padding_y,
      layout.padding_y,
    ));

  let lines = entry_lines(&app.entries, app.cursor, block.inner(area), theme);
  Paragraph::new(lines).block(block).render(area, buf);
}
