use std::io::{self, IsTerminal as _, Read as _};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEvent},
    terminal,
};

/// Keyboard input for the machine.
///
/// An interactive session takes raw key events from the terminal; anything
/// else (a pipe, a file) is read as plain bytes.
#[derive(Debug)]
pub enum Console {
    Terminal,
    Pipe(io::Stdin),
}

impl Console {
    pub fn detect() -> Self {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            Console::Terminal
        } else {
            Console::Pipe(stdin)
        }
    }

    /// Check for a waiting key without blocking the terminal.
    ///
    /// Piped input is always considered ready: the next byte (or NUL at
    /// EOF) is handed over directly.
    ///
    /// Caller must ensure terminal is in raw mode for the terminal variant.
    pub fn poll(&mut self) -> Option<u8> {
        match self {
            Console::Terminal => loop {
                let ready =
                    event::poll(Duration::ZERO).expect("failed to poll terminal event");
                if !ready {
                    return None;
                }
                let event = event::read().expect("failed to read terminal event");
                if let Ok(Keystroke(byte)) = event.try_into() {
                    return Some(byte);
                }
            },
            Console::Pipe(stdin) => Some(read_pipe_byte(stdin)),
        }
    }

    /// Block until one key is available.
    pub fn read(&mut self) -> u8 {
        match self {
            Console::Terminal => loop {
                let event = event::read().expect("failed to read terminal event");
                if let Ok(Keystroke(byte)) = event.try_into() {
                    return byte;
                }
            },
            Console::Pipe(stdin) => read_pipe_byte(stdin),
        }
    }
}

/// Reaching the end of piped input yields NUL, so guests never block forever.
fn read_pipe_byte(stdin: &mut io::Stdin) -> u8 {
    let mut buf = [0; 1];
    let bytes_read = stdin
        .read(&mut buf)
        .expect("failed to read byte from stdin");
    if bytes_read == 0 {
        return 0;
    }
    buf[0]
}

/// A key event narrowed to the single byte the machine sees.
struct Keystroke(u8);

impl TryFrom<Event> for Keystroke {
    type Error = ();
    fn try_from(event: Event) -> Result<Self, Self::Error> {
        if let Event::Key(event) = event {
            if let Ok(key) = event.try_into() {
                return Ok(key);
            }
        }
        Err(())
    }
}

impl TryFrom<KeyEvent> for Keystroke {
    type Error = ();
    fn try_from(event: KeyEvent) -> Result<Self, Self::Error> {
        use event::{KeyCode, KeyEventKind, KeyModifiers as Mod};

        if matches!(event.kind, KeyEventKind::Release) {
            return Err(());
        }

        let byte = match (event.modifiers, event.code) {
            // Ctrl+C takes the place of SIGINT while the terminal is raw
            (Mod::CONTROL, KeyCode::Char('c')) => {
                disable_raw_mode();
                println!();
                std::process::exit(-2);
            }

            (_, KeyCode::Enter) | (_, KeyCode::Char('\n')) => b'\n',
            (_, KeyCode::Backspace) => 0x08,
            (_, KeyCode::Tab) => b'\t',
            (_, KeyCode::Esc) => 0x1b,

            // Normal character
            (Mod::NONE | Mod::SHIFT, KeyCode::Char(ch)) if ch.is_ascii() => ch as u8,

            _ => return Err(()),
        };

        Ok(Keystroke(byte))
    }
}

/// Holds the terminal in raw mode; restores it when dropped.
///
/// Dropping happens on unwinding too, so every exit path out of the main
/// loop puts the terminal back.
pub struct RawModeGuard {
    active: bool,
}

impl RawModeGuard {
    /// No-op when stdin is not attached to a terminal.
    pub fn acquire() -> Self {
        if !io::stdin().is_terminal() {
            return RawModeGuard { active: false };
        }
        enable_raw_mode();
        RawModeGuard { active: true }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.active {
            disable_raw_mode();
        }
    }
}

pub fn enable_raw_mode() {
    debug_assert!(
        !terminal::is_raw_mode_enabled().is_ok_and(|is| is),
        "terminal should not be in raw mode at this point",
    );
    terminal::enable_raw_mode().expect("failed to enable raw terminal");
}
pub fn disable_raw_mode() {
    debug_assert!(
        terminal::is_raw_mode_enabled().is_ok_and(|is| is),
        "terminal should be in raw mode at this point",
    );
    terminal::disable_raw_mode().expect("failed to disable raw terminal");
}
