use super::board::COLS;
use super::{Board, Placement, Player};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// One game in progress: the rack, whose turn it is, and how it ended.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    first_player: Player,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create a fresh game where `first_player` moves first
    pub fn new(first_player: Player) -> Self {
        GameState {
            board: Board::new(),
            first_player,
            current_player: first_player,
            outcome: None,
        }
    }

    /// Create initial game state with Red to move
    pub fn initial() -> Self {
        Self::new(Player::Red)
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Columns (1-based) that can still take a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (1..=COLS)
            .filter(|&column| !self.board.is_column_full(column))
            .collect()
    }

    /// Drop the current player's piece into `column` (1-based).
    ///
    /// A refused move keeps the turn with the same player.
    pub fn apply_move(&mut self, column: i64) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let placement = self.board.place(player, column);
        self.settle(player, placement)?;
        log::debug!("{} played column {column}", player.name());
        Ok(())
    }

    /// Like [`GameState::apply_move`] for a column typed by a player
    pub fn apply_input(&mut self, input: &str) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let placement = self.board.place_input(player, input);
        self.settle(player, placement)?;
        log::debug!("{} played column {}", player.name(), input.trim());
        Ok(())
    }

    fn settle(&mut self, player: Player, placement: Placement) -> Result<(), MoveError> {
        match placement {
            Placement::Placed => {}
            Placement::ColumnFull => return Err(MoveError::ColumnFull),
            Placement::OutOfRange => return Err(MoveError::OutOfRange),
        }

        if let Some(winner) = self.board.winner() {
            self.outcome = Some(GameOutcome::Winner(winner));
            log::info!("player {} ({}) wins", winner.id(), winner.name());
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
            log::info!("rack is full, game drawn");
        } else {
            self.current_player = player.other();
        }

        Ok(())
    }

    /// Start a new game with a fresh rack
    pub fn restart(&mut self) {
        self.board.reset();
        self.current_player = self.first_player;
        self.outcome = None;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
