mod action;
mod app;
mod config;
mod event;
mod fs;
mod logging;
mod opener;
mod shortcuts;
mod theme;
mod ui;

use std::io;
use std::panic;
use std::time::Duration;

use anyhow::Result;
use crossterm::execute;
use crossterm::terminal::{
  EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{error, info};

use crate::action::Action;
use crate::app::App;
use crate::event::{Event, EventLoop, map_key};
use crate::ui::Renderer;

fn main() -> Result<()> {
  let args: Vec<String> = std::env::args().skip(1).collect();

  let mut show_help = false;
  let mut show_version = false;
  let mut show_init = false;

  for arg in &args {
    match arg.as_str() {
      "--help" | "-h" => show_help = true,
      "--version" | "-V" => show_version = true,
      "--init" => show_init = true,
      _ => {
        eprintln!("tbrowse: unknown option '{arg}'");
        std::process::exit(1);
      }
    }
  }

  if show_help {
    println!(concat!(
      "tbrowse - terminal file browser\n",
      "\n",
      "Usage: tbrowse [options]\n",
      "\n",
      "Options:\n",
      "  --init          Write the default config to ~/.config/tbrowse/\n",
      "  -h, --help      Print this help message\n",
      "  -V, --version   Print version\n",
      "\n",
      "Browsing starts in the current directory.\n",
      "Set TBROWSE_LOG=debug to log to the cache directory.",
    ));
    return Ok(());
  }

  if show_version {
    println!("tbrowse {}", env!("CARGO_PKG_VERSION"));
    return Ok(());
  }

  if show_init {
    let config_path = match config::Config::config_path() {
      Ok(p) => p,
      Err(e) => {
        eprintln!("tbrowse: {e}");
        std::process::exit(1);
      }
    };

    let write_config = if config_path.exists() {
      eprint!("{} already exists. Overwrite? [y/N] ", config_path.display());
      let mut answer = String::new();
      io::stdin().read_line(&mut answer).unwrap_or(0);
      answer.trim().eq_ignore_ascii_case("y")
    } else {
      true
    };

    if write_config {
      match config::Config::dump_default_config(&config_path) {
        Ok(()) => println!("{}", config_path.display()),
        Err(e) => {
          eprintln!("tbrowse: {e}");
          std::process::exit(1);
        }
      }
    }

    return Ok(());
  }

  let root = match std::env::current_dir() {
    Ok(dir) => dir,
    Err(e) => {
      eprintln!("tbrowse: cannot determine current directory: {e}");
      std::process::exit(1);
    }
  };

  let (config, config_errors) = config::Config::load();

  let log_error = logging::init().err();
  info!(root = %root.display(), "starting");

  // Install panic hook that restores terminal
  let original_hook = panic::take_hook();
  panic::set_hook(Box::new(move |info| {
    let _ = restore_terminal();
    original_hook(info);
  }));

  setup_terminal()?;
  let backend = CrosstermBackend::new(io::stdout());
  let mut terminal = Terminal::new(backend)?;

  let renderer = Renderer::from_config(&config);
  let mut app = App::new(root, &config);

  let (width, height) = crossterm::terminal::size()?;
  app.update(Action::Resize(width, height));

  let mut startup_errors = config_errors;
  if let Some(e) = log_error {
    startup_errors.push(format!("{e:#}"));
  }
  if !startup_errors.is_empty() {
    for e in &startup_errors {
      error!(error = %e, "startup");
    }
    app.set_error(startup_errors.join("; "));
  }

  let events = EventLoop::new(Duration::from_millis(config.tick_rate_ms));

  loop {
    terminal.draw(|frame| ui::draw(frame, &app, &config, &renderer))?;

    match events.next()? {
      Event::Key(key) => {
        let action = map_key(key, app.input_mode, &config);
        app.update(action);
      }
      Event::Resize(w, h) => app.update(Action::Resize(w, h)),
      Event::Tick => app.update(Action::Tick),
    }

    if app.should_quit {
      break;
    }
  }

  restore_terminal()?;
  info!("exiting");

  Ok(())
}

fn setup_terminal() -> Result<()> {
  enable_raw_mode()?;
  execute!(io::stdout(), EnterAlternateScreen)?;
  Ok(())
}

fn restore_terminal() -> Result<()> {
  disable_raw_mode()?;
  execute!(io::stdout(), LeaveAlternateScreen)?;
  Ok(())
}
