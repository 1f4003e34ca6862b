use log::{debug, info};

use crate::error::GameError;
use crate::outcome::{classify, History};
use crate::rules::legal_moves;
use crate::{Board, GameOutcome, Move, Piece, Side, Square};

/// A played move as it was committed, with whatever it captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedMove {
    pub mv: Move,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promoted: bool,
}

/// One game in progress: the current board, whose turn it is and every
/// position seen so far. Once a terminal outcome is reached the game refuses
/// further moves.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Side,
    history: History,
    moves: Vec<PlayedMove>,
    captured_by_first: Vec<Piece>,
    captured_by_second: Vec<Piece>,
    outcome: GameOutcome,
}

impl Game {
    pub fn new() -> Self {
        Self::from_board(Board::new(), Side::First)
    }

    /// Starts a game from an arbitrary position.
    pub fn from_board(board: Board, side_to_move: Side) -> Self {
        Self {
            board,
            side_to_move,
            history: History::new(board),
            moves: Vec::new(),
            captured_by_first: Vec::new(),
            captured_by_second: Vec::new(),
            outcome: classify(&board, side_to_move),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn moves(&self) -> &[PlayedMove] {
        &self.moves
    }

    /// Pieces taken by `side` so far.
    pub fn captured_by(&self, side: Side) -> &[Piece] {
        match side {
            Side::First => &self.captured_by_first,
            Side::Second => &self.captured_by_second,
        }
    }

    /// Legal destinations from `origin`, or nothing when the game is over or
    /// the piece is not the mover's.
    pub fn legal_moves(&self, origin: Square) -> Vec<Square> {
        if self.is_over() {
            return Vec::new();
        }
        match self.board.piece_at(origin) {
            Some(piece) if piece.side == self.side_to_move => legal_moves(&self.board, origin),
            _ => Vec::new(),
        }
    }

    /// Commits `mv` for the side to move and returns the new outcome.
    pub fn play(&mut self, mv: Move) -> Result<GameOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver(self.outcome));
        }

        let piece = self
            .board
            .piece_at(mv.from)
            .ok_or(GameError::NoPieceAtSquare(mv.from))?;

        if piece.side != self.side_to_move {
            return Err(GameError::WrongSide {
                square: mv.from,
                side: self.side_to_move,
            });
        }

        if !legal_moves(&self.board, mv.from).contains(&mv.to) {
            return Err(GameError::IllegalMove {
                from: mv.from,
                to: mv.to,
            });
        }

        let captured = self.board.piece_at(mv.to);
        let next = self.board.with_move(mv.from, mv.to);
        let promoted = next.piece_at(mv.to).map(|p| p.kind) != Some(piece.kind);

        if let Some(taken) = captured {
            match piece.side {
                Side::First => self.captured_by_first.push(taken),
                Side::Second => self.captured_by_second.push(taken),
            }
        }

        let repeated = self.history.is_repetition(&next);
        self.history.push(next);
        self.board = next;
        self.moves.push(PlayedMove {
            mv,
            piece,
            captured,
            promoted,
        });

        let opponent = piece.side.opponent();
        let outcome = match classify(&next, opponent) {
            terminal if terminal.is_terminal() => terminal,
            _ if repeated => GameOutcome::RepetitionDraw,
            status => status,
        };

        debug!("{} plays {} -> {:?}", piece.side, mv, outcome);
        self.outcome = outcome;
        if outcome.is_terminal() {
            info!("game over after {} moves: {}", self.moves.len(), outcome);
        } else {
            self.side_to_move = opponent;
        }

        Ok(outcome)
    }

    pub fn resign(&mut self, side: Side) -> Result<GameOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver(self.outcome));
        }
        self.outcome = GameOutcome::Resignation {
            winner: side.opponent(),
        };
        info!("{} resigns", side);
        Ok(self.outcome)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
