use std::ops::{Deref, DerefMut};

use log::warn;

use super::*;
use super::square::{parse_square, square_name, step, A1, A8, H1, H8};
use crate::error::MoveParseError;

/*
 * MODULE IS RESPONSIBLE FOR
 * GAME REPRESENTATION AND LOGIC
 */

/// Castling availability, one flag per king/rook pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white_kingside: true,
        white_queenside: true,
        black_kingside: true,
        black_queenside: true,
    };

    pub fn kingside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_kingside,
            Color::Black => self.black_kingside,
        }
    }

    pub fn queenside(&self, color: Color) -> bool {
        match color {
            Color::White => self.white_queenside,
            Color::Black => self.black_queenside,
        }
    }

    fn clear_color(&mut self, color: Color) {
        match color {
            Color::White => {
                self.white_kingside = false;
                self.white_queenside = false;
            }
            Color::Black => {
                self.black_kingside = false;
                self.black_queenside = false;
            }
        }
    }

    /// Drops the right tied to a rook standing on `square`, if it is a corner.
    fn clear_corner(&mut self, square: usize) {
        match square {
            H1 => self.white_kingside = false,
            A1 => self.white_queenside = false,
            H8 => self.black_kingside = false,
            A8 => self.black_queenside = false,
            _ => {}
        }
    }
}

/// Everything `unmake_move` needs to restore the previous state exactly
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    mv: Move,
    /// Piece as it stood on the origin square, i.e. the pawn for promotions
    moved: Piece,
    captured: Option<Piece>,
    /// Differs from the destination only for en passant
    captured_square: u8,
    prev_en_passant: Option<u8>,
    prev_castling: CastlingRights,
    prev_halfmove_clock: u32,
    prev_fullmove_number: u32,
    /// (from, to, rook) for castling moves only
    rook_move: Option<(u8, u8, Piece)>,
}

impl MoveRecord {
    pub fn mv(&self) -> Move {
        self.mv
    }
}

/// Board squares touched by a legality probe, enough to put them back.
struct Probe {
    from_piece: Option<Piece>,
    to_piece: Option<Piece>,
    en_passant_victim: Option<(usize, Option<Piece>)>,
    rook_squares: Option<(usize, usize)>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) board: [Option<Piece>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling: CastlingRights,
    pub(crate) en_passant: Option<u8>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) history: Vec<MoveRecord>,
}

impl Default for Position {
    fn default() -> Self {
        Self::starting()
    }
}

/// Rook origin and destination for a castling king move
fn castling_rook_squares(king_from: usize, king_to: usize) -> (usize, usize) {
    if king_to > king_from {
        (king_from + 3, king_from + 1)
    } else {
        (king_from - 4, king_from - 1)
    }
}

/// Square of the pawn taken by an en passant capture landing on `to`
fn en_passant_victim_square(to: usize, mover: Color) -> usize {
    step(to, 0, -mover.pawn_direction()).unwrap_or(to)
}

impl Position {
    /// Standard initial position
    pub fn starting() -> Position {
        const BACK_RANK: [Type; 8] = [
            Type::Rook, Type::Knight, Type::Bishop, Type::Queen,
            Type::King, Type::Bishop, Type::Knight, Type::Rook,
        ];

        let mut pos = Position::empty();
        for (file, &piece_type) in BACK_RANK.iter().enumerate() {
            pos.board[file] = Some(Piece::new(Color::Black, piece_type));
            pos.board[8 + file] = Some(Piece::new(Color::Black, Type::Pawn));
            pos.board[48 + file] = Some(Piece::new(Color::White, Type::Pawn));
            pos.board[56 + file] = Some(Piece::new(Color::White, piece_type));
        }
        pos.castling = CastlingRights::ALL;
        pos
    }

    /// Empty board, White to move, no rights
    pub fn empty() -> Position {
        Self {
            board: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights::default(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }

    pub fn piece_at(&self, idx: usize) -> Option<Piece> {
        self.board[idx]
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    pub fn en_passant(&self) -> Option<usize> {
        self.en_passant.map(usize::from)
    }

    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Pseudo-legal moves of whatever piece stands on `idx`
    pub fn pseudo_moves_into(&self, idx: usize, moves: &mut MoveList) {
        match self.board[idx] {
            Some(Piece { piece_type: Type::Pawn, .. }) => self.pawn_moves_into(idx, moves),
            Some(Piece { piece_type: Type::Rook, .. }) => self.rook_moves_into(idx, moves),
            Some(Piece { piece_type: Type::Knight, .. }) => self.knight_moves_into(idx, moves),
            Some(Piece { piece_type: Type::Bishop, .. }) => self.bishop_moves_into(idx, moves),
            Some(Piece { piece_type: Type::Queen, .. }) => self.queen_moves_into(idx, moves),
            Some(Piece { piece_type: Type::King, .. }) => self.king_moves_into(idx, moves),
            None => {}
        }
    }

    /// Generate legal moves for a piece into a provided buffer
    /// The buffer is NOT cleared before adding moves
    pub fn legal_moves_into(&mut self, idx: usize, moves: &mut MoveList) {
        let mut pseudo = MoveList::new();
        self.pseudo_moves_into(idx, &mut pseudo);
        for mv in pseudo {
            if self.is_move_legal(mv) {
                moves.push(mv);
            }
        }
    }

    /// Legal moves of the piece on `idx`, whichever color it is
    pub fn legal_moves(&mut self, idx: usize) -> MoveList {
        let mut moves = MoveList::new();
        self.legal_moves_into(idx, &mut moves);
        moves
    }

    /// Simulates `mv` on the live board, checks the mover's king, then reverts.
    /// No history is pushed and no rights or en passant state are touched.
    pub fn is_move_legal(&mut self, mv: Move) -> bool {
        let Some(mover) = self.board[mv.from()] else {
            return false;
        };
        let probe = self.simulate(mv, mover);
        let in_check = self.is_in_check(mover.color);
        self.revert(mv, probe);
        !in_check
    }

    fn simulate(&mut self, mv: Move, mover: Piece) -> Probe {
        let (from, to) = (mv.from(), mv.to());
        let probe = Probe {
            from_piece: self.board[from],
            to_piece: self.board[to],
            en_passant_victim: mv.is_en_passant().then(|| {
                let sq = en_passant_victim_square(to, mover.color);
                (sq, self.board[sq])
            }),
            rook_squares: mv.is_castling().then(|| castling_rook_squares(from, to)),
        };

        let landed = match mv.promotion() {
            Some(piece_type) => Piece::new(mover.color, piece_type),
            None => mover,
        };
        self.board[from] = None;
        self.board[to] = Some(landed);
        if let Some((sq, _)) = probe.en_passant_victim {
            self.board[sq] = None;
        }
        if let Some((rook_from, rook_to)) = probe.rook_squares {
            self.board[rook_to] = self.board[rook_from].take();
        }
        probe
    }

    fn revert(&mut self, mv: Move, probe: Probe) {
        if let Some((rook_from, rook_to)) = probe.rook_squares {
            self.board[rook_from] = self.board[rook_to].take();
        }
        if let Some((sq, victim)) = probe.en_passant_victim {
            self.board[sq] = victim;
        }
        self.board[mv.to()] = probe.to_piece;
        self.board[mv.from()] = probe.from_piece;
    }

    /// Generate all legal moves for the side to move into a provided buffer
    /// The buffer is cleared before adding moves
    pub fn all_legal_moves_into(&mut self, moves: &mut MoveList) {
        moves.clear();

        let side = self.side_to_move;
        let mut pseudo = MoveList::new();
        for idx in 0..64 {
            if self.board[idx].is_some_and(|p| p.is(side)) {
                self.pseudo_moves_into(idx, &mut pseudo);
            }
        }

        for mv in pseudo {
            if self.is_move_legal(mv) {
                moves.push(mv);
            }
        }
    }

    /// Returns all legal moves for the current side to move
    pub fn all_legal_moves(&mut self) -> MoveList {
        let mut moves = MoveList::new();
        self.all_legal_moves_into(&mut moves);
        moves
    }

    /// Checks if the side to move has ANY legal move, stopping at the first one
    pub fn has_legal_moves(&mut self) -> bool {
        let side = self.side_to_move;
        let mut pseudo = MoveList::new();
        for idx in 0..64 {
            if !self.board[idx].is_some_and(|p| p.is(side)) {
                continue;
            }
            pseudo.clear();
            self.pseudo_moves_into(idx, &mut pseudo);
            if pseudo.iter().any(|&mv| self.is_move_legal(mv)) {
                return true;
            }
        }
        false
    }

    /// Side to move is in check AND has no legal moves
    pub fn is_checkmate(&mut self) -> bool {
        self.is_in_check(self.side_to_move) && !self.has_legal_moves()
    }

    /// Side to move is NOT in check AND has no legal moves
    pub fn is_stalemate(&mut self) -> bool {
        !self.is_in_check(self.side_to_move) && !self.has_legal_moves()
    }

    /// Applies `mv` and pushes the record needed to take it back.
    ///
    /// The move is trusted to be legal for the side to move; pass moves obtained
    /// from the generators or from [`Position::parse_move`].
    pub fn make_move(&mut self, mv: Move) {
        let from = mv.from();
        let to = mv.to();
        let Some(moved) = self.board[from] else {
            warn!("make_move {} ignored: {} is empty", mv, square_name(from));
            return;
        };

        let captured_square = if mv.is_en_passant() {
            en_passant_victim_square(to, moved.color)
        } else {
            to
        };
        let captured = self.board[captured_square];

        let mut record = MoveRecord {
            mv,
            moved,
            captured,
            captured_square: captured_square as u8,
            prev_en_passant: self.en_passant,
            prev_castling: self.castling,
            prev_halfmove_clock: self.halfmove_clock,
            prev_fullmove_number: self.fullmove_number,
            rook_move: None,
        };

        // Update castling rights BEFORE making the move
        match moved.piece_type {
            Type::King => self.castling.clear_color(moved.color),
            Type::Rook => self.castling.clear_corner(from),
            _ => {}
        }
        if let Some(Piece { piece_type: Type::Rook, .. }) = captured {
            self.castling.clear_corner(captured_square);
        }

        if mv.is_castling() {
            let (rook_from, rook_to) = castling_rook_squares(from, to);
            if let Some(rook) = self.board[rook_from].take() {
                self.board[rook_to] = Some(rook);
                record.rook_move = Some((rook_from as u8, rook_to as u8, rook));
            }
        }

        if mv.is_en_passant() {
            self.board[captured_square] = None;
        }

        let double_push = moved.piece_type == Type::Pawn && from.abs_diff(to) == 16;
        self.en_passant = double_push.then(|| ((from + to) / 2) as u8);

        let landed = match mv.promotion() {
            Some(piece_type) => Piece::new(moved.color, piece_type),
            None => moved,
        };
        self.board[to] = Some(landed);
        self.board[from] = None;

        if moved.piece_type == Type::Pawn || captured.is_some() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if moved.color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.side_to_move = self.side_to_move.opposite();
        self.history.push(record);
    }

    /// Takes back the last move. No-op on an empty history.
    pub fn unmake_move(&mut self) {
        let Some(record) = self.history.pop() else {
            return;
        };

        self.side_to_move = self.side_to_move.opposite();

        let from = record.mv.from();
        let to = record.mv.to();

        // `moved` is the piece before promotion, so this also demotes
        self.board[from] = Some(record.moved);
        self.board[to] = None;
        self.board[record.captured_square as usize] = record.captured;

        if let Some((rook_from, rook_to, rook)) = record.rook_move {
            self.board[rook_to as usize] = None;
            self.board[rook_from as usize] = Some(rook);
        }

        self.castling = record.prev_castling;
        self.en_passant = record.prev_en_passant;
        self.halfmove_clock = record.prev_halfmove_clock;
        self.fullmove_number = record.prev_fullmove_number;
    }

    /// Makes `mv` and returns a guard that unmakes it when dropped
    pub fn scoped_move(&mut self, mv: Move) -> ScopedMove<'_> {
        self.make_move(mv);
        ScopedMove { position: self }
    }

    /// Perft (Performance Test) - counts nodes at a given depth
    /// Used to validate move generation correctness
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.all_legal_moves();

        // Bulk counting optimization for depth 1
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            self.make_move(mv);
            nodes += self.perft(depth - 1);
            self.unmake_move();
        }
        nodes
    }

    /// Resolves coordinate notation (`e2e4`, `e7e8q`) against the legal moves
    /// of the side to move. A promotion without a suffix is rejected.
    pub fn parse_move(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let malformed = || MoveParseError::Malformed(text.to_string());
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(malformed());
        }
        let from = parse_square(&text[0..2]).ok_or_else(malformed)?;
        let to = parse_square(&text[2..4]).ok_or_else(malformed)?;
        let promotion = match text[4..].chars().next() {
            Some(c) => Some(Type::from_promotion_char(c).ok_or_else(malformed)?),
            None => None,
        };

        self.all_legal_moves()
            .into_iter()
            .find(|mv| mv.from() == from && mv.to() == to && mv.promotion() == promotion)
            .ok_or_else(|| MoveParseError::Illegal(text.to_string()))
    }

    /// Divide - perft count for each first-level move (debugging tool)
    pub fn divide(&mut self, depth: u32) -> Vec<(Move, u64)> {
        let moves = self.all_legal_moves();
        let mut counts = Vec::with_capacity(moves.len());

        for mv in moves {
            self.make_move(mv);
            let count = self.perft(depth.saturating_sub(1));
            self.unmake_move();
            counts.push((mv, count));
        }
        counts
    }
}

/// A move that is taken back when the guard goes out of scope.
///
/// Search frames hold one of these per child so that every exit path out of
/// the loop body, including a pruning `break`, restores the position.
pub struct ScopedMove<'a> {
    position: &'a mut Position,
}

impl Deref for ScopedMove<'_> {
    type Target = Position;

    fn deref(&self) -> &Position {
        self.position
    }
}

impl DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut Position {
        self.position
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        self.position.unmake_move();
    }
}
