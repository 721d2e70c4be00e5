//! Crossterm terminal driver for lifegrid.
//!
//! Provides a [`CrosstermDriver`] that implements [`lifegrid_core::Driver`],
//! drawing the board as a block of two-column cells below a one-line HUD
//! and translating key and mouse input into plain [`Msg`] values.

use std::io::{self, Write};
use std::sync::mpsc::Sender;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind},
    execute,
    style::{Color, SetForegroundColor},
    terminal::{self, ClearType},
};

use lifegrid_core::{
    app::{Context, Driver},
    messages::{Key, Msg},
    view::ViewFrame,
};

/// Terminal row of the HUD line; the board starts on the row below it.
const BOARD_TOP: u16 = 1;

/// Terminal columns per board cell.
const CELL_WIDTH: u16 = 2;

/// Translate a terminal position to the board cell it covers.
///
/// Returns `None` for positions on the HUD line or past the board's right
/// or bottom edge. Pure; unit-tested independently of any terminal.
pub fn cell_at(x: u16, y: u16, size: usize) -> Option<(usize, usize)> {
    let row = (y as usize).checked_sub(BOARD_TOP as usize)?;
    let col = x as usize / CELL_WIDTH as usize;
    (row < size && col < size).then_some((row, col))
}

/// Maps a crossterm [`KeyCode`] to a [`Key`], dropping keys the
/// application has no binding for.
fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(' ') => Some(Key::Space),
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

/// A terminal back-end for lifegrid using crossterm.
pub struct CrosstermDriver {
    size: usize,
    mouse_enabled: bool,
    live_color: Color,
    dead_color: Color,
    live_glyph: &'static str,
    dead_glyph: &'static str,
}

impl CrosstermDriver {
    /// Create a driver for an N×N board with default presentation.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            mouse_enabled: true,
            live_color: Color::Green,
            dead_color: Color::DarkGrey,
            live_glyph: "██",
            dead_glyph: "··",
        }
    }

    /// Configure whether mouse events are captured.
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    /// Configure the colors used for live and dead cells.
    pub fn with_colors(mut self, live: Color, dead: Color) -> Self {
        self.live_color = live;
        self.dead_color = dead;
        self
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if self.mouse_enabled {
            execute!(stdout, event::EnableMouseCapture)?;
        }
        log::debug!("crossterm driver initialised ({0}x{0} board)", self.size);
        Ok(())
    }

    fn poll_msgs(
        &mut self,
        ctx: &Context,
        tx: Sender<Msg>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        // Non-blocking poll: check for an event with a short timeout, then
        // drain whatever is pending.
        if !event::poll(Duration::from_millis(16))? {
            return Ok(());
        }

        while event::poll(Duration::ZERO)? {
            if ctx.is_done() {
                return Ok(());
            }

            let msg = match event::read()? {
                Event::Key(KeyEvent {
                    code, modifiers, ..
                }) => {
                    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
                        Some(Msg::Quit)
                    } else {
                        to_key(code).map(Msg::Key)
                    }
                }
                Event::Mouse(me) => match me.kind {
                    MouseEventKind::Down(MouseButton::Left) => {
                        cell_at(me.column, me.row, self.size)
                            .map(|(row, col)| Msg::ToggleCell { row, col })
                    }
                    _ => None,
                },
                Event::Resize(..) => Some(Msg::Redraw),
                _ => None,
            };

            if let Some(m) = msg {
                tx.send(m).ok();
            }
        }

        Ok(())
    }

    fn flush(&mut self, frame: &ViewFrame) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = io::stdout();

        if let Some(hud) = &frame.hud {
            execute!(
                stdout,
                cursor::MoveTo(0, 0),
                terminal::Clear(ClearType::CurrentLine),
                SetForegroundColor(Color::Reset)
            )?;
            write!(stdout, "{hud}")?;
        }

        for patch in &frame.cells {
            let x = patch.col as u16 * CELL_WIDTH;
            let y = patch.row as u16 + BOARD_TOP;
            let (color, glyph) = if patch.state.is_live() {
                (self.live_color, self.live_glyph)
            } else {
                (self.dead_color, self.dead_glyph)
            };
            execute!(stdout, cursor::MoveTo(x, y), SetForegroundColor(color))?;
            write!(stdout, "{glyph}")?;
        }

        stdout.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        let mut stdout = io::stdout();
        if self.mouse_enabled {
            let _ = execute!(stdout, event::DisableMouseCapture);
        }
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        log::debug!("crossterm driver closed");
    }
}
