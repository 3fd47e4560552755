use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::action::Action;
use crate::app::App;
use crate::config::Config;
use crate::event::InputMode;
use crate::theme::Theme;

fn short_help_actions(mode: InputMode) -> &'static [Action] {
  match mode {
    InputMode::Normal => &[
      Action::OpenSelected,
      Action::Descend,
      Action::Ascend,
      Action::ToggleHidden,
      Action::ShowShortcuts,
      Action::ToggleHelp,
      Action::Quit,
    ],
    InputMode::Shortcuts => &[
      Action::ShortcutsDown,
      Action::ShortcutsConfirm,
      Action::ShortcutsCancel,
      Action::Quit,
    ],
    InputMode::Help => &[Action::ToggleHelp, Action::Quit],
  }
}

/// `key description` pairs for the live mode, using the shortest bound key.
pub fn short_help(config: &Config, mode: InputMode) -> Vec<(String, &'static str)> {
  let lookup = config.reverse_lookup(mode);
  short_help_actions(mode)
    .iter()
    .filter_map(|action| {
      let key = lookup.get(action)?.iter().min_by_key(|k| k.width())?;
      Some((key.clone(), action.help_text()))
    })
    .collect()
}

pub fn render_status_bar(app: &App, config: &Config, area: Rect, buf: &mut Buffer, theme: &Theme) {
  let line = if let Some(ref msg) = app.status_message {
    let color = if app.status_is_error { theme.error } else { theme.info };
    Line::from(Span::styled(format!(" {msg}"), Style::default().fg(color)))
  } else {
    let mut spans = vec![Span::raw(" ")];
    for (i, (key, desc)) in short_help(config, app.input_mode).into_iter().enumerate() {
      if i > 0 {
        spans.push(Span::styled(" • ", Style::default().fg(theme.text_muted)));
      }
      spans.push(Span::styled(key, Style::default().fg(theme.text).add_modifier(Modifier::BOLD)));
      spans.push(Span::styled(format!(" {desc}"), Style::default().fg(theme.text_muted)));
    }
    Line::from(spans)
  };

  let position = format!(" {}/{} ", app.cursor + 1, app.entries.len());
  let chunks = Layout::default()
    .direction(Direction::Horizontal)
    .constraints([
      Constraint::Min(0),
      Constraint::Length(position.width() as u16),
    ])
    .split(area);

  let bar = Style::default().bg(theme.bg_bar);
  Paragraph::new(line).style(bar).render(chunks[0], buf);
  Paragraph::new(Span::styled(position, Style::default().fg(theme.text_muted)))
    .style(bar)
    .render(chunks[1], buf);
}
