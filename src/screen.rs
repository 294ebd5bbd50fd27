pub const SCREEN_WIDTH: usize = 64;
pub const SCREEN_HEIGHT: usize = 32;

/// Monochrome framebuffer. Sprites are XOR'd on, and anything falling off an
/// edge wraps round to the other side.
#[derive(Clone, PartialEq, Eq)]
pub struct Screen {
    cells: [[bool; SCREEN_WIDTH]; SCREEN_HEIGHT],
}

impl Screen {
    pub fn new() -> Self {
        Screen {
            cells: [[false; SCREEN_WIDTH]; SCREEN_HEIGHT],
        }
    }

    pub fn clear(&mut self) {
        self.cells = [[false; SCREEN_WIDTH]; SCREEN_HEIGHT];
    }

    /// coordinates wrap, same as drawing
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        self.cells[y % SCREEN_HEIGHT][x % SCREEN_WIDTH]
    }

    /// blit `n` rows of an 8px wide sprite with its top left at (x, y);
    /// returns true if any lit cell got switched off
    pub fn draw_sprite(&mut self, x: usize, y: usize, sprite: &[u8], n: usize) -> bool {
        let mut collision = false;
        for (row, &line) in sprite.iter().take(n).enumerate() {
            let cy = (y + row) % SCREEN_HEIGHT;
            for col in 0..8 {
                if line & (0x80 >> col) == 0 {
                    continue;
                }
                let cell = &mut self.cells[cy][(x + col) % SCREEN_WIDTH];
                collision |= *cell;
                *cell = !*cell;
            }
        }
        collision
    }

    /// (x, y) of every lit cell, row by row
    pub fn lit(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, on)| **on)
                .map(move |(x, _)| (x, y))
        })
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.iter() {
            let line: String = row.iter().map(|&on| if on { '#' } else { '.' }).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
