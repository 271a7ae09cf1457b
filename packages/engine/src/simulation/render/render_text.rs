use std::fmt;

use super::UniverseCore;

const ALIVE_GLYPH: char = '◼';
const DEAD_GLYPH: char = '◻';

/// One line per row, `◼` alive and `◻` dead.
impl fmt::Display for UniverseCore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.cells.height() {
            for col in 0..self.cells.width() {
                let glyph = if self.cells.is_alive(row, col) { ALIVE_GLYPH } else { DEAD_GLYPH };
                write!(f, "{}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
