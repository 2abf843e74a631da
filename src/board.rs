//! Board state representation and outcome classification

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'x',
            Cell::O => 'o',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// Value of a win for this player: +1 for X, -1 for O.
    ///
    /// The search maximizes for X and minimizes for O, so X's win value
    /// must sit strictly above the tie value (0) and O's strictly below.
    pub fn win_value(self) -> i32 {
        match self {
            Player::X => 1,
            Player::O => -1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Classification of a board state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The game is still in progress
    Undetermined,
    /// The named player holds a complete line
    Win(Player),
    /// The board is full and nobody holds a line
    Tie,
}

impl Outcome {
    /// Numeric value of a decided outcome: +1 for an X win, -1 for an O
    /// win, 0 for a tie. `None` while the game is undecided.
    pub fn value(self) -> Option<i32> {
        match self {
            Outcome::Undetermined => None,
            Outcome::Win(player) => Some(player.win_value()),
            Outcome::Tie => Some(0),
        }
    }

    /// Check if the game is over
    pub fn is_decided(self) -> bool {
        self != Outcome::Undetermined
    }
}

/// A square board of any side length together with its cached outcome.
///
/// States are immutable values. Every move produces a fresh state whose
/// outcome is reclassified before it becomes visible, so the cached
/// outcome can never disagree with the cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardState {
    size: usize,
    cells: Vec<Cell>,
    outcome: Outcome,
}

impl BoardState {
    /// Create a new empty board with the given side length.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero-sized board, which would classify as
    /// decided before anyone moved.
    pub fn new(size: usize) -> Result<Self, crate::Error> {
        if size == 0 {
            return Err(crate::Error::InvalidBoardSize { size });
        }
        Ok(BoardState {
            size,
            cells: vec![Cell::Empty; size * size],
            outcome: Outcome::Undetermined,
        })
    }

    /// Create a board from a string representation.
    ///
    /// Whitespace is filtered out; the remaining characters fill the board
    /// in row-major order and their count must be a square number. `.`
    /// marks an empty cell and `x`/`o` match case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The cell count is not a square of a positive side length
    /// - Any character is not a valid cell representation
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        let size = (1..=chars.len())
            .find(|n| n * n >= chars.len())
            .filter(|n| n * n == chars.len())
            .ok_or_else(|| crate::Error::InvalidBoardLength {
                cells: chars.len(),
                context: s.to_string(),
            })?;

        let mut cells = vec![Cell::Empty; chars.len()];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let mut board = BoardState {
            size,
            cells,
            outcome: Outcome::Undetermined,
        };
        board.outcome = board.classify();
        Ok(board)
    }

    /// Board side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at (row, column)
    ///
    /// # Panics
    ///
    /// Panics in debug builds if either coordinate falls outside the
    /// board; a column past the board edge would otherwise alias into
    /// the next row.
    pub fn cell(&self, row: usize, column: usize) -> Cell {
        debug_assert!(
            row < self.size && column < self.size,
            "cell ({row}, {column}) is out of bounds on a {size}x{size} board",
            size = self.size
        );
        self.cells[row * self.size + column]
    }

    /// Check if a cell is empty
    pub fn is_empty(&self, row: usize, column: usize) -> bool {
        self.cell(row, column) == Cell::Empty
    }

    /// The cached classification, kept in sync with the cells by every
    /// constructor and move
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Place `player`'s mark on an empty cell and return the new state.
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinates fall outside the grid or the
    /// cell is already occupied. The original state is untouched either
    /// way.
    ///
    /// # Examples
    ///
    /// ```
    /// use oxo::{BoardState, Outcome, Player};
    ///
    /// let board = BoardState::new(3).unwrap();
    /// let after = board.apply_move(1, 1, Player::X).unwrap();
    /// assert_eq!(after.outcome(), Outcome::Undetermined);
    /// assert!(board.is_empty(1, 1));
    /// ```
    #[must_use = "apply_move returns a new board state; the original is unchanged"]
    pub fn apply_move(
        &self,
        row: usize,
        column: usize,
        player: Player,
    ) -> Result<BoardState, crate::Error> {
        if row >= self.size || column >= self.size {
            return Err(crate::Error::OutOfBounds {
                row,
                column,
                size: self.size,
            });
        }
        if !self.is_empty(row, column) {
            return Err(crate::Error::InvalidMove { row, column });
        }
        Ok(self.child(row * self.size + column, player))
    }

    /// Every state reachable by placing `player`'s mark on an empty cell,
    /// in row-major order (ascending row, then ascending column).
    ///
    /// The search visits successors in exactly this order, which decides
    /// where alpha-beta cuts and which of several equally good moves the
    /// move selection settles on. A decided board has no successors.
    pub fn successors(&self, player: Player) -> Vec<BoardState> {
        if self.outcome.is_decided() {
            return Vec::new();
        }
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(index, _)| self.child(index, player))
            .collect()
    }

    /// Copy of this state with `player`'s mark at `index`, reclassified
    fn child(&self, index: usize, player: Player) -> BoardState {
        let mut next = self.clone();
        next.cells[index] = player.to_cell();
        next.outcome = next.classify();
        next
    }

    /// Recompute the outcome from the cells alone.
    ///
    /// Lines are scanned in a fixed order: every row from the top, every
    /// column from the left, the main diagonal, then the anti-diagonal,
    /// testing X's pattern before O's within each line. On a malformed
    /// grid where several lines are complete, the first match wins, so
    /// classification stays deterministic.
    pub fn classify(&self) -> Outcome {
        let n = self.size;
        for row in 0..n {
            if let Some(winner) = self.line_winner((0..n).map(|column| row * n + column)) {
                return Outcome::Win(winner);
            }
        }
        for column in 0..n {
            if let Some(winner) = self.line_winner((0..n).map(|row| row * n + column)) {
                return Outcome::Win(winner);
            }
        }
        if let Some(winner) = self.line_winner((0..n).map(|i| i * n + i)) {
            return Outcome::Win(winner);
        }
        if let Some(winner) = self.line_winner((0..n).map(|i| (n - 1 - i) * n + i)) {
            return Outcome::Win(winner);
        }

        if self.cells.contains(&Cell::Empty) {
            Outcome::Undetermined
        } else {
            Outcome::Tie
        }
    }

    /// Winner of a single line of cell indices, if either player holds it
    fn line_winner<I>(&self, line: I) -> Option<Player>
    where
        I: Iterator<Item = usize> + Clone,
    {
        [Player::X, Player::O].into_iter().find(|player| {
            let mark = player.to_cell();
            line.clone().all(|index| self.cells[index] == mark)
        })
    }

    /// Get a compact string representation for use as a key, the inverse
    /// of [`BoardState::from_string`]
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

/// Row label for terminal display, counting from `a`
fn row_letter(row: usize) -> char {
    char::from_u32('a' as u32 + row as u32).unwrap_or('?')
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for column in 1..=self.size {
            write!(f, "{column} ")?;
        }
        writeln!(f)?;
        for row in 0..self.size {
            write!(f, "{} ", row_letter(row))?;
            for column in 0..self.size {
                let mark = match self.cell(row, column) {
                    Cell::Empty => ' ',
                    cell => cell.to_char(),
                };
                write!(f, "{mark}")?;
                if column + 1 < self.size {
                    write!(f, "|")?;
                }
            }
            if row + 1 < self.size {
                writeln!(f)?;
                writeln!(f, "  {}", "_ ".repeat(self.size))?;
            }
        }
        Ok(())
    }
}
