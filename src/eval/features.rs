//! Position features for the linear evaluator.
//!
//! Every position maps to a fixed 5-component vector, each component
//! normalized to roughly [-1, 1] so a single learning rate works across
//! all of them. Differences are always White minus Black; the evaluator's
//! output is therefore a White-perspective score.
//!
//! The scaling constants are part of the persistence contract: stored
//! weights only make sense against features produced at the same scale.

use chess::{Board, Color, MoveGen, Piece, Square, ALL_FILES, ALL_PIECES};

/// Number of feature components, bias included.
pub const FEATURE_COUNT: usize = 5;

/// A single extracted feature vector.
///
/// Layout: material, mobility, center control, pawn structure, bias.
pub type FeatureVector = [f64; FEATURE_COUNT];

/// Central squares used for the center-control component.
pub const CENTER_SQUARES: [Square; 8] = [
    Square::E4,
    Square::D4,
    Square::E5,
    Square::D5,
    Square::C4,
    Square::F4,
    Square::C5,
    Square::F5,
];

const MATERIAL_SCALE: f64 = 10.0;
const MOBILITY_SCALE: f64 = 20.0;
const CENTER_SCALE: f64 = 4.0;
const DOUBLED_PAWN_SCALE: f64 = 2.0;

/// Conventional piece values. The king carries none; it is always on the
/// board, so it would only shift the bias.
#[must_use]
pub fn piece_value(piece: Piece) -> f64 {
    match piece {
        Piece::Pawn => 1.0,
        Piece::Knight => 3.0,
        Piece::Bishop => 3.25,
        Piece::Rook => 5.0,
        Piece::Queen => 9.0,
        Piece::King => 0.0,
    }
}

/// Extract the feature vector for a position.
///
/// Pure: the board is only read. The last component is always exactly 1.0.
#[must_use]
pub fn extract(board: &Board) -> FeatureVector {
    [
        material_difference(board),
        mobility_difference(board),
        center_control_difference(board),
        pawn_structure_difference(board),
        1.0,
    ]
}

/// Signed material balance, White minus Black, scaled by 1/10.
fn material_difference(board: &Board) -> f64 {
    let mut material = 0.0;
    for piece in ALL_PIECES {
        let bb = *board.pieces(piece);
        let white = (bb & *board.color_combined(Color::White)).popcnt() as f64;
        let black = (bb & *board.color_combined(Color::Black)).popcnt() as f64;
        material += piece_value(piece) * (white - black);
    }
    material / MATERIAL_SCALE
}

/// Legal-move count for White minus Black, each scaled by 1/20.
///
/// Both sides are counted regardless of whose turn it is; the non-moving
/// side is counted on the null-moved board. When the side to move is in
/// check the null move is unavailable and the opponent's term is 0.0.
fn mobility_difference(board: &Board) -> f64 {
    let mover = MoveGen::new_legal(board).len() as f64 / MOBILITY_SCALE;
    let opponent = match board.null_move() {
        Some(flipped) => MoveGen::new_legal(&flipped).len() as f64 / MOBILITY_SCALE,
        None => 0.0,
    };
    match board.side_to_move() {
        Color::White => mover - opponent,
        Color::Black => opponent - mover,
    }
}

/// Occupancy of the eight central squares, White minus Black, scaled by 1/4.
fn center_control_difference(board: &Board) -> f64 {
    let mut white = 0;
    let mut black = 0;
    for square in CENTER_SQUARES {
        match board.color_on(square) {
            Some(Color::White) => white += 1,
            Some(Color::Black) => black += 1,
            None => {}
        }
    }
    (white as f64 - black as f64) / CENTER_SCALE
}

/// Doubled-pawn penalty difference.
///
/// Sign convention: carrying more doubled pawns than the opponent pushes
/// this feature negative for White (and positive for Black).
fn pawn_structure_difference(board: &Board) -> f64 {
    let white = doubled_pawns(board, Color::White) as f64 / DOUBLED_PAWN_SCALE;
    let black = doubled_pawns(board, Color::Black) as f64 / DOUBLED_PAWN_SCALE;
    -(white - black)
}

/// Count of pawns beyond the first on each file.
fn doubled_pawns(board: &Board, color: Color) -> u32 {
    let pawns = *board.pieces(Piece::Pawn) & *board.color_combined(color);
    let mut doubled = 0;
    for file in ALL_FILES {
        let on_file = (pawns & chess::get_file(file)).popcnt();
        doubled += on_file.saturating_sub(1);
    }
    doubled
}
