use crate::types::{Cell, BOARD_COLS, BOARD_ROWS};

/// Read-only view of a session for renderers.
///
/// Board cells use the [`Cell::to_u8`] byte encoding. `board_hash` is the
/// FNV-1a hash of those bytes, so views can skip redraws when nothing moved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub rows: usize,
    pub cols: usize,
    pub board: Vec<u8>,
    pub board_hash: u64,
    pub score: u32,
    pub moves: u32,
    pub busy: bool,
    pub episode_id: u32,
    pub seed: u64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.rows = BOARD_ROWS as usize;
        self.cols = BOARD_COLS as usize;
        self.board.clear();
        self.board.resize(self.rows * self.cols, 0);
        self.board_hash = fnv1a64(&self.board);
        self.score = 0;
        self.moves = 0;
        self.busy = false;
        self.episode_id = 0;
        self.seed = 0;
    }

    /// Decoded cell at (row, col); `None` when out of range
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.board
            .get(row * self.cols + col)
            .and_then(|&v| Cell::from_u8(v))
    }

    /// True when the player may enter a move
    pub fn playable(&self) -> bool {
        !self.busy
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            rows: 0,
            cols: 0,
            board: Vec::new(),
            board_hash: 0,
            score: 0,
            moves: 0,
            busy: false,
            episode_id: 0,
            seed: 0,
        };
        s.clear();
        s
    }
}

/// FNV-1a 64-bit hash of the board bytes.
pub fn fnv1a64(bytes: &[u8]) -> u64 {
    let mut h: u64 = 0xcbf29ce484222325;
    for &b in bytes {
        h ^= b as u64;
        h = h.wrapping_mul(0x00000100000001B3);
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    #[test]
    fn default_is_empty_reference_board() {
        let snap = GameSnapshot::default();
        assert_eq!(snap.board.len(), 100);
        assert_eq!(snap.cell(0, 0), Some(Cell::Empty));
        assert_eq!(snap.cell(10, 0), None);
        assert_eq!(snap.board_hash, fnv1a64(&[0u8; 100]));
    }

    #[test]
    fn cell_decodes_bytes() {
        let mut snap = GameSnapshot::default();
        snap.board[12] = Cell::Token(Color::Blue).to_u8();
        assert_eq!(snap.cell(1, 2), Some(Cell::Token(Color::Blue)));
    }
}
