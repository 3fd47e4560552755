use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::ITEM_HEIGHT;
use crate::fs::Entry;
use crate::theme::Theme;

/// First index of the page that contains `cursor`.
pub fn page_start(cursor: usize, per_page: usize) -> usize {
  let per_page = per_page.max(1);
  cursor / per_page * per_page
}

/// Two lines per entry (title, description) for the page holding the cursor.
pub fn entry_lines(entries: &[Entry], cursor: usize, area: Rect, theme: &Theme) -> Vec<Line<'static>> {
  let per_page = ((area.height / ITEM_HEIGHT) as usize).max(1);
  let text_width = (area.width as usize).saturating_sub(2);
  let start = page_start(cursor, per_page).min(entries.len());
  let end = (start + per_page).min(entries.len());

  let mut lines = Vec::with_capacity((end - start) * ITEM_HEIGHT as usize);
  for (offset, entry) in entries[start..end].iter().enumerate() {
    let is_selected = start + offset == cursor;
    let (marker, title_style, desc_style) = if is_selected {
      (
        "│ ",
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        Style::default().fg(theme.accent),
      )
    } else {
      (
        "  ",
        Style::default().fg(theme.text),
        Style::default().fg(theme.text_muted),
      )
    };
    let marker_style = Style::default().fg(theme.accent);

    lines.push(Line::from(vec![
      Span::styled(marker, marker_style),
      Span::styled(truncate(&entry.title(), text_width), title_style),
    ]));
    lines.push(Line::from(vec![
      Span::styled(marker, marker_style),
      Span::styled(truncate(&entry.description(), text_width), desc_style),
    ]));
  }
  lines
}

/// Cuts `s` to `max_width` display columns, ending in an ellipsis when cut.
pub fn truncate(s: &str, max_width: usize) -> String {
  if s.width() <= max_width {
    return s.to_string();
  }
  if max_width == 0 {
    return String::new();
  }
  let mut out = String::new();
  let mut used = 0;
  for c in s.chars() {
    let w = c.width().unwrap_or(0);
    if used + w + 1 > max_width {
      break;
    }
    out.push(c);
    used += w;
  }
  out.push('…');
  out
}

#[cfg(test)]
mod tests {
  use super::*;

  fn files(n: usize) -> Vec<Entry> {
    (0..n)
      .map(|i| Entry::File { name: format!("f{i}").into(), size: Some(i as u64) })
      .collect()
  }

  #[test]
  fn test_page_start() {
    assert_eq!(page_start(0, 5), 0);
    assert_eq!(page_start(4, 5), 0);
    assert_eq!(page_start(5, 5), 5);
    assert_eq!(page_start(12, 5), 10);
    assert_eq!(page_start(3, 0), 3);
  }

  #[test]
  fn test_entry_lines_shows_cursor_page() {
    let entries = files(10);
    // 6 rows fit 3 entries per page; cursor 4 is on the second page.
    let lines = entry_lines(&entries, 4, Rect::new(0, 0, 30, 6), &Theme::default());
    assert_eq!(lines.len(), 6);
    let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
    assert_eq!(text[0], "  f3");
    assert_eq!(text[2], "│ f4");
    assert_eq!(text[3], "│ File - 4 bytes");
  }

  #[test]
  fn test_entry_lines_zero_height() {
    let entries = vec![Entry::empty_dir()];
    let lines = entry_lines(&entries, 0, Rect::new(0, 0, 10, 0), &Theme::default());
    assert_eq!(lines.len(), 2);
  }

  #[test]
  fn test_truncate() {
    assert_eq!(truncate("hello", 10), "hello");
    assert_eq!(truncate("hello world", 6), "hello…");
    assert_eq!(truncate("hello", 0), "");
    assert_eq!(truncate("日本語", 4), "日…");
  }
}
