//! Piece movement geometry
//!
//! Computes the squares a piece can reach from a given square. Squares held
//! by the mover's own pieces are never included; sliding pieces stop at the
//! first occupied square and include it only when an opponent holds it.
//! These are geometric destinations only: whether the move exposes the
//! mover's drive is decided by `Player`.

use crate::board::Board;
use crate::types::{Piece, PieceKind, Square};
use smallvec::SmallVec;

/// Destination list; a promoted Notes reaches at most 12 squares on 5×5
pub type Destinations = SmallVec<[Square; 16]>;

const KING_STEPS: [(i8, i8); 8] =
    [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];
const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Shield steps relative to forward `f`
fn shield_steps(f: i8) -> [(i8, i8); 6] {
    [(f, -1), (f, 0), (f, 1), (0, -1), (0, 1), (-f, 0)]
}

/// Relay steps relative to forward `f`
fn relay_steps(f: i8) -> [(i8, i8); 5] {
    [(f, -1), (f, 0), (f, 1), (-f, -1), (-f, 1)]
}

/// Destinations of `piece` standing on `from`
pub fn destinations(piece: Piece, board: &Board, from: Square) -> Destinations {
    let mut out = Destinations::new();
    let f = piece.owner.forward();

    match (piece.kind, piece.promoted) {
        (PieceKind::Drive, _) => push_steps(&mut out, piece, board, from, &KING_STEPS),
        (PieceKind::Notes, promoted) => {
            push_slides(&mut out, piece, board, from, &ORTHOGONAL);
            if promoted {
                push_steps(&mut out, piece, board, from, &KING_STEPS);
            }
        }
        (PieceKind::Governance, promoted) => {
            push_slides(&mut out, piece, board, from, &DIAGONAL);
            if promoted {
                push_steps(&mut out, piece, board, from, &KING_STEPS);
            }
        }
        (PieceKind::Shield, _) | (PieceKind::Relay, true) | (PieceKind::Preview, true) => {
            push_steps(&mut out, piece, board, from, &shield_steps(f))
        }
        (PieceKind::Relay, false) => push_steps(&mut out, piece, board, from, &relay_steps(f)),
        (PieceKind::Preview, false) => push_steps(&mut out, piece, board, from, &[(f, 0)]),
    }

    out
}

fn push_steps(
    out: &mut Destinations,
    piece: Piece,
    board: &Board,
    from: Square,
    steps: &[(i8, i8)],
) {
    for &(dr, dc) in steps {
        let Some(to) = from.offset(dr, dc, board.size()) else {
            continue;
        };
        if is_own(board, piece, to) || out.contains(&to) {
            continue;
        }
        out.push(to);
    }
}

fn push_slides(
    out: &mut Destinations,
    piece: Piece,
    board: &Board,
    from: Square,
    rays: &[(i8, i8)],
) {
    for &(dr, dc) in rays {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, dc, board.size()) {
            match board.get(to) {
                None => out.push(to),
                Some(occupant) => {
                    if occupant.owner != piece.owner {
                        out.push(to);
                    }
                    break;
                }
            }
            cur = to;
        }
    }
}

#[inline]
fn is_own(board: &Board, piece: Piece, sq: Square) -> bool {
    board.get(sq).is_some_and(|occupant| occupant.owner == piece.owner)
}
