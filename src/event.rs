use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};

use crate::action::Action;
use crate::config::{Config, normalize_key_event};

pub enum Event {
  Key(KeyEvent),
  Resize(u16, u16),
  Tick,
}

/// Polls the terminal on a background thread. Events are handed to the main
/// loop one at a time over a channel; all state lives on the main thread.
pub struct EventLoop {
  rx: mpsc::Receiver<Event>,
}

impl EventLoop {
  pub fn new(tick_rate: Duration) -> Self {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || loop {
      if event::poll(tick_rate).unwrap_or(false) {
        match event::read() {
          Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
            if tx.send(Event::Key(key)).is_err() {
              break;
            }
          }
          Ok(CrosstermEvent::Resize(w, h)) => {
            if tx.send(Event::Resize(w, h)).is_err() {
              break;
            }
          }
          _ => {}
        }
      } else if tx.send(Event::Tick).is_err() {
        break;
      }
    });

    Self { rx }
  }

  pub fn next(&self) -> Result<Event> {
    Ok(self.rx.recv()?)
  }
}

/// Which key table is live. Exactly one mode owns input at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
  Normal,
  Shortcuts,
  Help,
}

pub fn map_key(key: KeyEvent, mode: InputMode, config: &Config) -> Action {
  let kb = normalize_key_event(key);
  config.keys_for(mode).get(&kb).cloned().unwrap_or(Action::None)
}
