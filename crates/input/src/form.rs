//! Move entry form.
//!
//! Mirrors a two-field coordinate entry: a column letter, a row letter and a
//! horizontal/vertical toggle. The picked token is swapped with its right or
//! lower neighbour. Each field keeps the raw text the player typed and the
//! parsed index, or `None` when the text is not a letter on the board.

use crate::core::parse_coordinate;
use crate::map::FormKey;
use crate::types::{Axis, GameAction, Pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Column,
    Row,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveForm {
    rows: usize,
    cols: usize,
    column_text: String,
    row_text: String,
    column: Option<usize>,
    row: Option<usize>,
    focus: Field,
    axis: Axis,
}

impl MoveForm {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            column_text: String::new(),
            row_text: String::new(),
            column: None,
            row: None,
            focus: Field::Column,
            axis: Axis::Horizontal,
        }
    }

    /// Apply a key. Returns the action to run, if the key produced one.
    pub fn handle(&mut self, key: FormKey) -> Option<GameAction> {
        match key {
            FormKey::Letter(c) => {
                let text = c.to_ascii_uppercase().to_string();
                match self.focus {
                    Field::Column => {
                        self.set_column_text(&text);
                        self.focus = Field::Row;
                    }
                    Field::Row => self.set_row_text(&text),
                }
                None
            }
            FormKey::Backspace => {
                match self.focus {
                    Field::Column => self.set_column_text(""),
                    Field::Row => self.set_row_text(""),
                }
                None
            }
            FormKey::NextField => {
                self.focus = match self.focus {
                    Field::Column => Field::Row,
                    Field::Row => Field::Column,
                };
                None
            }
            FormKey::ToggleAxis => {
                self.axis = self.axis.toggle();
                None
            }
            FormKey::Submit => Some(GameAction::Move {
                first: self.selection(),
                axis: self.axis,
            }),
            FormKey::Restart => Some(GameAction::Restart),
        }
    }

    /// Replace the column text and re-parse it against the board width.
    pub fn set_column_text(&mut self, text: &str) {
        self.column_text = text.to_string();
        self.column = parse_coordinate(text, self.cols);
    }

    /// Replace the row text and re-parse it against the board height.
    pub fn set_row_text(&mut self, text: &str) {
        self.row_text = text.to_string();
        self.row = parse_coordinate(text, self.rows);
    }

    /// The picked position, if both fields hold a valid letter
    pub fn selection(&self) -> Option<Pos> {
        Some(Pos::new(self.row?, self.column?))
    }

    /// Empty both fields and focus the column field. The axis is kept.
    pub fn clear(&mut self) {
        self.set_column_text("");
        self.set_row_text("");
        self.focus = Field::Column;
    }

    pub fn column_text(&self) -> &str {
        &self.column_text
    }

    pub fn row_text(&self) -> &str {
        &self.row_text
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }
}
