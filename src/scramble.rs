use rand::distributions::Uniform;
use rand::Rng;

use crate::face::Face;
use crate::notation::{Amount, Move};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrambleOpts {
    pub length: usize,
}

impl Default for ScrambleOpts {
    fn default() -> Self {
        Self { length: 20 }
    }
}

/// Random face turns where no two neighbors share a face.
/// Opposite faces (R then L) are allowed next to each other.
pub fn scramble_moves<R: Rng>(rng: &mut R, opts: ScrambleOpts) -> Vec<Move> {
    let face_range = Uniform::new(0, Face::ALL.len());
    let amount_range = Uniform::new(0, Amount::ALL.len());
    let mut moves: Vec<Move> = Vec::with_capacity(opts.length);
    let mut last_face: Option<Face> = None;

    for _ in 0..opts.length {
        let face = loop {
            let face = Face::ALL[rng.sample(face_range)];
            if Some(face) != last_face {
                break face;
            }
        };
        moves.push(Move::face(face, Amount::ALL[rng.sample(amount_range)]));
        last_face = Some(face);
    }

    moves
}

pub fn generate_scramble<R: Rng>(rng: &mut R, opts: ScrambleOpts) -> String {
    scramble_moves(rng, opts)
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
