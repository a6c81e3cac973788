//! Terminal rendering of the screen view.

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use screenrec_core::{Content, Control, Controls, Platform, ScreenView};
use std::io::Write;

/// Control bar with enabled buttons bracketed and disabled ones greyed out
pub fn control_bar(controls: &Controls) -> String {
    Control::all()
        .iter()
        .map(|c| {
            if controls.is_enabled(*c) {
                format!("[{}]", c.title())
            } else {
                format!(" {} ", c.title().to_lowercase())
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Lines making up the screen, top to bottom
pub fn render_lines(view: &ScreenView, platform: Platform, keyboard_shown: bool) -> Vec<String> {
    let mut lines = vec![
        format!("screenrec ({platform})  phase: {}", view.phase),
        String::new(),
    ];

    if view.top_bar {
        lines.push(control_bar(&view.controls));
        lines.push(String::new());
    }

    match &view.content {
        Content::Player(locator) => {
            lines.push(format!("> playing {locator}"));
        }
        Content::TextEntry(text) => {
            let cursor = if keyboard_shown { "_" } else { "" };
            lines.push(format!("text: {text}{cursor}"));
        }
    }

    lines.push(String::new());
    lines.push(control_bar(&view.controls));
    lines.push(String::new());
    lines.push(if keyboard_shown {
        "type to edit, enter/esc hide keyboard".to_string()
    } else {
        "s start  t stop  p play  k keyboard  q quit".to_string()
    });
    lines
}

/// Redraw the whole terminal.
pub fn draw(
    out: &mut impl Write,
    view: &ScreenView,
    platform: Platform,
    keyboard_shown: bool,
) -> Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    for (row, line) in render_lines(view, platform, keyboard_shown).iter().enumerate() {
        queue!(out, MoveTo(0, row as u16), Print(line))?;
    }
    out.flush()?;
    Ok(())
}
