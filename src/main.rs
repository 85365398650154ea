//! Shunt - interactive single-line demo
//! Main entry point
//!
//! Edit one line in place: type to insert, arrows to move, Alt+Left and
//! Alt+Right to shunt the element under the cursor, Esc to finish. An
//! optional argument seeds the line.

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, ClearType},
};
use shunt::{move_left, move_right};
use std::io::{stdout, Write};
use unicode_width::UnicodeWidthChar;

fn main() {
    if let Err(e) = run() {
        eprintln!("shunt error: {e}");
        std::process::exit(1);
    }
}

/// Raw-mode guard; the terminal is restored even on early return
struct RawMode;

impl RawMode {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        Ok(RawMode)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

fn run() -> Result<()> {
    let mut line: Vec<char> = std::env::args()
        .nth(1)
        .map(|seed| seed.chars().collect())
        .unwrap_or_default();
    let mut cursor_pos: usize = line.len();

    let _raw = RawMode::enter()?;
    render(&line, cursor_pos)?;

    loop {
        let Event::Key(key) = event::read().context("failed to read event")? else {
            continue;
        };
        if key.kind != event::KeyEventKind::Press {
            continue;
        }
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => break,
            (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => break,
            (KeyCode::Left, m) if m.contains(KeyModifiers::ALT) => {
                let text: String = line.iter().collect();
                let result = move_left(&text, cursor_pos);
                line = result.text.chars().collect();
                cursor_pos = result.cursor;
            }
            (KeyCode::Right, m) if m.contains(KeyModifiers::ALT) => {
                let text: String = line.iter().collect();
                let result = move_right(&text, cursor_pos);
                line = result.text.chars().collect();
                cursor_pos = result.cursor;
            }
            (KeyCode::Left, _) => cursor_pos = cursor_pos.saturating_sub(1),
            (KeyCode::Right, _) => cursor_pos = (cursor_pos + 1).min(line.len()),
            (KeyCode::Home, _) => cursor_pos = 0,
            (KeyCode::End, _) => cursor_pos = line.len(),
            (KeyCode::Backspace, _) => {
                if cursor_pos > 0 {
                    line.remove(cursor_pos - 1);
                    cursor_pos -= 1;
                }
            }
            (KeyCode::Delete, _) => {
                if cursor_pos < line.len() {
                    line.remove(cursor_pos);
                }
            }
            (KeyCode::Char(c), m)
                if !m.contains(KeyModifiers::CONTROL) && !m.contains(KeyModifiers::ALT) =>
            {
                line.insert(cursor_pos, c);
                cursor_pos += 1;
            }
            _ => {}
        }
        render(&line, cursor_pos)?;
    }

    // leave the final line visible below the prompt
    execute!(stdout(), Print("\r\n")).context("failed to write terminal")?;
    Ok(())
}

fn render(line: &[char], cursor_pos: usize) -> Result<()> {
    let mut out = stdout();
    let text: String = line.iter().collect();
    let col: usize = line[..cursor_pos.min(line.len())]
        .iter()
        .map(|c| c.width().unwrap_or(0))
        .sum();
    queue!(
        out,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::CurrentLine),
        Print(&text),
        cursor::MoveToColumn(col.min(u16::MAX as usize) as u16),
    )
    .context("failed to draw line")?;
    out.flush().context("failed to flush terminal")?;
    Ok(())
}
