use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct Theme {
  pub accent: Color,
  pub text: Color,
  pub text_muted: Color,
  pub border: Color,
  pub overlay_border: Color,
  pub bg_overlay: Color,
  pub bg_bar: Color,
  pub info: Color,
  pub error: Color,
}

impl Theme {
  pub fn dark() -> Self {
    Self {
      accent: Color::Indexed(170),
      text: Color::Indexed(252),
      text_muted: Color::Indexed(241),
      border: Color::Indexed(63),
      overlay_border: Color::Indexed(205),
      bg_overlay: Color::Indexed(235),
      bg_bar: Color::Indexed(236),
      info: Color::Indexed(150),
      error: Color::Indexed(167),
    }
  }

  pub fn light() -> Self {
    Self {
      accent: Color::Indexed(127),
      text: Color::Indexed(235),
      text_muted: Color::Indexed(245),
      border: Color::Indexed(63),
      overlay_border: Color::Indexed(205),
      bg_overlay: Color::Indexed(255),
      bg_bar: Color::Indexed(253),
      info: Color::Indexed(30),
      error: Color::Indexed(124),
    }
  }

  pub fn from_name(name: &str) -> Option<Self> {
    match name {
      "dark" => Some(Self::dark()),
      "light" => Some(Self::light()),
      _ => None,
    }
  }
}

impl Default for Theme {
  fn default() -> Self {
    Self::dark()
  }
}
