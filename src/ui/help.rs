use std::collections::HashMap;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget};

use super::centered;
use crate::action::Action;
use crate::config::Config;
use crate::theme::Theme;

fn section_line(title: &str, section_style: Style) -> Line<'static> {
  Line::from(Span::styled(
    format!(" {title}"),
    section_style.add_modifier(Modifier::DIM),
  ))
}

fn entry_line(lookup: &HashMap<Action, Vec<String>>, action: Action, key_style: Style, desc_style: Style) -> Line<'static> {
  let keys = lookup
    .get(&action)
    .map(|v| v.join(" / "))
    .unwrap_or_else(|| "-".to_string());
  Line::from(vec![
    Span::styled(
      format!("  {keys:<16}"),
      key_style.add_modifier(Modifier::BOLD),
    ),
    Span::styled(action.help_text().to_string(), desc_style),
  ])
}

pub fn render_help(config: &Config, area: Rect, buf: &mut Buffer, theme: &Theme) {
  let width = 44.min(area.width.saturating_sub(4));
  let height = 26.min(area.height.saturating_sub(2));

  if width < 10 || height < 5 {
    return;
  }

  let popup = centered(area, width, height);
  Clear.render(popup, buf);

  let lookup = config.full_reverse_lookup();

  let key_style = Style::default().fg(theme.accent);
  let desc_style = Style::default().fg(theme.text);
  let section_style = Style::default().fg(theme.text_muted);

  let lines: Vec<Line> = vec![
    section_line("Navigation", section_style),
    entry_line(&lookup, Action::MoveUp, key_style, desc_style),
    entry_line(&lookup, Action::MoveDown, key_style, desc_style),
    entry_line(&lookup, Action::PageUp, key_style, desc_style),
    entry_line(&lookup, Action::PageDown, key_style, desc_style),
    entry_line(&lookup, Action::GoToTop, key_style, desc_style),
    entry_line(&lookup, Action::GoToBottom, key_style, desc_style),
    entry_line(&lookup, Action::Descend, key_style, desc_style),
    entry_line(&lookup, Action::Ascend, key_style, desc_style),
    section_line("Actions", section_style),
    entry_line(&lookup, Action::OpenSelected, key_style, desc_style),
    entry_line(&lookup, Action::ToggleHidden, key_style, desc_style),
    entry_line(&lookup, Action::ShowShortcuts, key_style, desc_style),
    section_line("Shortcuts", section_style),
    entry_line(&lookup, Action::ShortcutsConfirm, key_style, desc_style),
    entry_line(&lookup, Action::ShortcutsCancel, key_style, desc_style),
    section_line("Quit", section_style),
    entry_line(&lookup, Action::Quit, key_style, desc_style),
    Line::from(""),
    Line::from(Span::styled(
      " Press ? or Esc to close".to_string(),
      Style::default().fg(theme.text_muted),
    )),
  ];

  let block = Block::default()
    .borders(Borders::ALL)
    .title(" Help ")
    .border_style(Style::default().fg(theme.border))
    .style(Style::default().bg(theme.bg_overlay));

  let paragraph = Paragraph::new(lines).block(block);
  paragraph.render(popup, buf);
}
