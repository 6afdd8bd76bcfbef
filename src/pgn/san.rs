//! Standard algebraic notation for moves.
//!
//! The board crate speaks coordinate moves only, so SAN is produced
//! here: piece letter, minimal disambiguation, capture and promotion
//! marks, and a check or mate suffix read from the resulting position.

use chess::{Board, BoardStatus, ChessMove, File, MoveGen, Piece, Rank};

/// Render `mv` in SAN for the position it is played from.
///
/// `mv` must be legal for `board`; an unrecognized move falls back to
/// plain coordinate notation.
#[must_use]
pub fn san(board: &Board, mv: ChessMove) -> String {
    let piece = match board.piece_on(mv.get_source()) {
        Some(piece) => piece,
        None => return mv.to_string(),
    };

    let source = mv.get_source();
    let dest = mv.get_dest();
    let mut out = String::new();

    let file_span = source
        .get_file()
        .to_index()
        .abs_diff(dest.get_file().to_index());
    if piece == Piece::King && file_span == 2 {
        if dest.get_file() == File::G {
            out.push_str("O-O");
        } else {
            out.push_str("O-O-O");
        }
    } else if piece == Piece::Pawn {
        // A pawn changing file is a capture even onto an empty square
        // (en passant).
        if board.piece_on(dest).is_some() || source.get_file() != dest.get_file() {
            out.push(file_char(source.get_file()));
            out.push('x');
        }
        out.push_str(&dest.to_string());
        if let Some(promotion) = mv.get_promotion() {
            out.push('=');
            out.push_str(piece_letter(promotion));
        }
    } else {
        out.push_str(piece_letter(piece));
        out.push_str(&disambiguator(board, piece, mv));
        if board.piece_on(dest).is_some() {
            out.push('x');
        }
        out.push_str(&dest.to_string());
    }

    let after = board.make_move_new(mv);
    match after.status() {
        BoardStatus::Checkmate => out.push('#'),
        _ if after.checkers().popcnt() > 0 => out.push('+'),
        _ => {}
    }

    out
}

/// Smallest source qualifier that separates `mv` from other legal moves
/// of the same piece type to the same square: file first, then rank,
/// then the full square.
fn disambiguator(board: &Board, piece: Piece, mv: ChessMove) -> String {
    let source = mv.get_source();
    let mut ambiguous = false;
    let mut file_clash = false;
    let mut rank_clash = false;

    for other in MoveGen::new_legal(board) {
        if other.get_source() == source || other.get_dest() != mv.get_dest() {
            continue;
        }
        if board.piece_on(other.get_source()) != Some(piece) {
            continue;
        }
        ambiguous = true;
        if other.get_source().get_file() == source.get_file() {
            file_clash = true;
        }
        if other.get_source().get_rank() == source.get_rank() {
            rank_clash = true;
        }
    }

    if !ambiguous {
        String::new()
    } else if !file_clash {
        file_char(source.get_file()).to_string()
    } else if !rank_clash {
        rank_char(source.get_rank()).to_string()
    } else {
        source.to_string()
    }
}

fn piece_letter(piece: Piece) -> &'static str {
    match piece {
        Piece::Pawn => "",
        Piece::Knight => "N",
        Piece::Bishop => "B",
        Piece::Rook => "R",
        Piece::Queen => "Q",
        Piece::King => "K",
    }
}

fn file_char(file: File) -> char {
    (b'a' + file.to_index() as u8) as char
}

fn rank_char(rank: Rank) -> char {
    (b'1' + rank.to_index() as u8) as char
}
