//! Console abstraction: clear the screen, print lines, read single keys.
//!
//! The menu, launcher, and fatal-error paths only ever need these four
//! operations, so they take the trait and tests drive them with a scripted
//! double instead of a terminal.

use std::{
    fmt,
    io::{self, Write},
};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{self, Clear, ClearType},
};

/// A single key press, reduced to what the menu cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Other,
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{c}"),
            Key::Enter => f.write_str("Enter"),
            Key::Escape => f.write_str("Escape"),
            Key::Other => f.write_str("Other"),
        }
    }
}

pub trait Console {
    fn clear_screen(&mut self) -> io::Result<()>;
    fn write_line(&mut self, line: &str) -> io::Result<()>;
    /// Write without a trailing newline, for selection prompts.
    fn write(&mut self, text: &str) -> io::Result<()>;
    /// Block until one key press arrives.
    fn read_key(&mut self) -> io::Result<Key>;
}

/// The real terminal, backed by crossterm.
pub struct Terminal;

impl Console for Terminal {
    fn clear_screen(&mut self) -> io::Result<()> {
        execute!(io::stdout(), Clear(ClearType::All), cursor::MoveTo(0, 0))
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        writeln!(stdout, "{line}")?;
        stdout.flush()
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout();
        write!(stdout, "{text}")?;
        stdout.flush()
    }

    fn read_key(&mut self) -> io::Result<Key> {
        let _guard = RawModeGuard::enable()?;
        loop {
            // Key releases also arrive on Windows; only presses count.
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                return Ok(match key.code {
                    KeyCode::Char(c) => Key::Char(c),
                    KeyCode::Enter => Key::Enter,
                    KeyCode::Esc => Key::Escape,
                    _ => Key::Other,
                });
            }
        }
    }
}

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
