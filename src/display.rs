use crate::screen::Screen;
use std::io;
use tui::backend::CrosstermBackend;
use tui::layout::Rect;
use tui::style::{Color, Style};
use tui::symbols::Marker;
use tui::widgets::canvas::{Canvas, Points};
use tui::widgets::{Block, Borders};
use tui::Terminal;

/// Display is used by the environment to put the framebuffer on a screen. It
/// should abstract the implementation details, so a variety of kinds of screen
/// would work.
pub trait Display {
    /// draw one frame
    fn draw(&mut self, screen: &Screen) -> Result<(), io::Error>;
}

// store useful metadata about the terminal
struct Resolution(usize, usize);

impl Resolution {
    fn pixel_count(&self) -> usize {
        self.0 * self.1
    }

    fn x_bounds(&self) -> [f64; 2] {
        [0.0, (self.0 - 1) as f64]
    }

    fn y_bounds(&self) -> [f64; 2] {
        [-1.0 * (self.1 - 1) as f64, 0.0]
    }

    /// canvas coords for one bitplane; y goes downward on the chip-8 and up on the canvas
    fn bitplane_from_screen(&self, screen: &Screen, bitplane: bool) -> Vec<(f64, f64)> {
        let w = self.0;
        (0..self.pixel_count())
            .map(|n| (n % w, n / w))
            .filter(|&(x, y)| screen.is_set(x, y) == bitplane)
            .map(|(x, y)| (x as f64, -1.0 * y as f64))
            .collect()
    }
}

/// monochrome display in a terminal, rendered using TUI and crossterm
pub struct MonoTermDisplay {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    resolution: Resolution,
}

impl MonoTermDisplay {
    pub fn new(x: usize, y: usize) -> Result<MonoTermDisplay, io::Error> {
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;
        terminal.hide_cursor()?;
        Ok(MonoTermDisplay {
            terminal,
            resolution: Resolution(x, y),
        })
    }
}

impl Drop for MonoTermDisplay {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
    }
}

impl Display for MonoTermDisplay {
    fn draw(&mut self, screen: &Screen) -> Result<(), io::Error> {
        // for now this assumes a 1:1 ratio between terminal, chip8 and the
        // internal TUI canvas
        let resolution = &self.resolution;
        let off = resolution.bitplane_from_screen(screen, false);
        let on = resolution.bitplane_from_screen(screen, true);
        self.terminal.draw(|f| {
            let size = Rect::new(0, 0, 2 + resolution.0 as u16, 2 + resolution.1 as u16);

            let canvas = Canvas::default()
                .block(
                    Block::default()
                        .title("CHIP-8")
                        .borders(Borders::ALL)
                        .style(Style::default().bg(Color::Black)),
                )
                .x_bounds(resolution.x_bounds())
                .y_bounds(resolution.y_bounds())
                .marker(Marker::Block)
                .paint(|ctx| {
                    ctx.draw(&Points {
                        coords: &off,
                        color: Color::Black,
                    });
                    ctx.draw(&Points {
                        coords: &on,
                        color: Color::White,
                    });
                });
            f.render_widget(canvas, size);
        })?;
        Ok(())
    }
}

/// useful for testing non-display routines; remembers what it was last shown
#[derive(Debug, Default)]
pub struct DummyDisplay {
    pub frames: usize,
    pub last_frame: Option<Screen>,
}

impl DummyDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Display for DummyDisplay {
    fn draw(&mut self, screen: &Screen) -> Result<(), io::Error> {
        self.frames += 1;
        self.last_frame = Some(screen.clone());
        Ok(())
    }
}
