//! Interactive recorder screen.

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use screenrec_core::hub::{KEYBOARD_DID_HIDE, KEYBOARD_DID_SHOW};
use screenrec_core::{Content, NotificationHub, Settings};
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::app::{apply_overrides, build_screen};
use crate::args::Overrides;
use crate::keys::{Action, map_key};
use crate::ui;

/// Restores the terminal when dropped, including on early return.
struct RawMode;

impl RawMode {
    fn enable() -> Result<Self> {
        enable_raw_mode().context("Failed to enter raw mode")?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

pub async fn run(overrides: Overrides) -> Result<()> {
    let mut settings = Settings::load();
    apply_overrides(&mut settings, &overrides);
    let platform = settings.platform;

    let hub = NotificationHub::new();
    let mut screen = build_screen(&settings, &hub);
    let handle = screen.handle();
    screen.mount(&hub);

    let (key_tx, mut key_rx) = mpsc::unbounded_channel();
    let stop = Arc::new(AtomicBool::new(false));
    let reader = {
        let stop = Arc::clone(&stop);
        thread::spawn(move || -> std::io::Result<()> {
            while !stop.load(Ordering::Relaxed) {
                if !event::poll(Duration::from_millis(100))? {
                    continue;
                }
                if let Event::Key(key) = event::read()?
                    && key.kind == KeyEventKind::Press
                    && key_tx.send(key).is_err()
                {
                    break;
                }
            }
            Ok(())
        })
    };

    let raw_mode = RawMode::enable()?;
    let mut stdout = std::io::stdout();
    let mut keyboard_shown = false;
    // Edits are queued, so keep our own copy rather than reading it back
    let mut text = String::new();

    loop {
        ui::draw(&mut stdout, &screen.view(), platform, keyboard_shown)?;

        let key = tokio::select! {
            key = key_rx.recv() => key,
            _ = screen.step() => continue,
        };
        let Some(key) = key else {
            break;
        };

        match map_key(key, keyboard_shown) {
            Action::Press(control) => {
                handle.press(control);
            }
            Action::ShowKeyboard => {
                keyboard_shown = true;
                hub.emit(KEYBOARD_DID_SHOW, Value::Null);
            }
            Action::HideKeyboard => {
                keyboard_shown = false;
                hub.emit(KEYBOARD_DID_HIDE, Value::Null);
            }
            Action::Type(c) => {
                if matches!(screen.view().content, Content::TextEntry(_)) {
                    text.push(c);
                    handle.set_text(text.clone());
                }
            }
            Action::Backspace => {
                if matches!(screen.view().content, Content::TextEntry(_)) {
                    text.pop();
                    handle.set_text(text.clone());
                }
            }
            Action::Quit => break,
            Action::Ignore => {}
        }
    }

    screen.unmount();
    drop(raw_mode);
    stop.store(true, Ordering::Relaxed);
    match reader.join() {
        Ok(result) => result.context("Failed to read terminal input")?,
        Err(_) => anyhow::bail!("Terminal input thread panicked"),
    }
    println!();
    Ok(())
}
