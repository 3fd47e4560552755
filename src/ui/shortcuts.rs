use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Clear, Padding, Paragraph, Widget};

use super::list::entry_lines;
use super::{Renderer, centered};
use crate::shortcuts::ShortcutOverlay;

/// Draws the overlay at its own fixed size, centred over `area`. Shrinks to
/// the terminal when the terminal is smaller.
pub fn render_shortcuts(overlay: &ShortcutOverlay, area: Rect, buf: &mut Buffer, renderer: &Renderer) {
  if !overlay.is_active() {
    return;
  }

  let theme = &renderer.theme;
  let layout = renderer.layout;
  let width = overlay.width.min(area.width);
  let height = overlay.height.min(area.height);

  if width < 8 || height < 4 {
    return;
  }

  let popup = centered(area, width, height);
  Clear.render(popup, buf);

  let block = Block::bordered()
    .border_type(BorderType::Rounded)
    .border_style(Style::default().fg(theme.overlay_border))
    .title(" Shortcuts ")
    .title_style(Style::default().fg(theme.overlay_border).add_modifier(Modifier::BOLD))
    .style(Style::default().bg(theme.bg_overlay))
    .padding(Padding::new(
      layout.padding_x,
      layout.padding_x,
      layout.padding_y,
      layout.padding_y,
    ));

  let lines = entry_lines(overlay.entries(), overlay.cursor(), block.inner(popup), theme);
  Paragraph::new(lines).block(block).render(popup, buf);
}
