use crate::cube_state::{CubeState, NUM_FACELETS};
use crate::error::AlgorithmError;
use crate::face::Face;
use crate::face_map::FaceMap;
use crate::geometry::{Direction, Generator, GeometryTable};
use crate::notation::{parse_algorithm, parse_algorithm_strict, Amount, Axis, Move, MoveKind, Slice};

use crate::geometry::Direction::{Clockwise as Cw, CounterClockwise as Ccw};

/// Whole cube rotations are the face turn, the middle slice and the
/// opposite face turn, all in the same physical direction.
const ROTATIONS: [(Axis, [(Generator, Direction); 3]); 3] = [
    (Axis::X, [(Generator::R, Cw), (Generator::M, Ccw), (Generator::L, Ccw)]),
    (Axis::Y, [(Generator::U, Cw), (Generator::E, Ccw), (Generator::D, Ccw)]),
    (Axis::Z, [(Generator::F, Cw), (Generator::S, Cw), (Generator::B, Ccw)]),
];

fn face_generator(face: Face) -> Generator {
    match face {
        Face::F => Generator::F,
        Face::B => Generator::B,
        Face::U => Generator::U,
        Face::D => Generator::D,
        Face::L => Generator::L,
        Face::R => Generator::R,
    }
}

fn slice_generator(slice: Slice) -> Generator {
    match slice {
        Slice::M => Generator::M,
        Slice::E => Generator::E,
        Slice::S => Generator::S,
    }
}

fn flip(direction: Direction) -> Direction {
    match direction {
        Cw => Ccw,
        Ccw => Cw,
    }
}

/// The quarter turns a move is made of, in the order they are applied
pub fn expand(m: Move) -> Vec<(Generator, Direction)> {
    let once: Vec<(Generator, Direction)> = match m.kind {
        MoveKind::Face(face) => vec![(face_generator(face), Cw)],
        MoveKind::Slice(slice) => vec![(slice_generator(slice), Cw)],
        MoveKind::Rotation(axis) => ROTATIONS
            .iter()
            .find(|(a, _)| *a == axis)
            .map(|(_, turns)| turns.to_vec())
            .unwrap_or_default(),
    };
    match m.amount {
        Amount::Clockwise => once,
        Amount::CounterClockwise => once
            .into_iter()
            .map(|(generator, direction)| (generator, flip(direction)))
            .collect(),
        Amount::Double => once.iter().chain(once.iter()).copied().collect(),
    }
}

/// Applies moves to cube states. Holds the geometry table so it is only built once;
/// share one engine between sessions with an `Rc`.
#[derive(Debug, Default)]
pub struct MoveEngine {
    geometry: GeometryTable,
}

impl MoveEngine {
    pub fn new() -> Self {
        Self {
            geometry: GeometryTable::new(),
        }
    }

    #[inline]
    pub fn geometry(&self) -> &GeometryTable {
        &self.geometry
    }

    pub fn apply(&self, state: &CubeState, m: Move) -> CubeState {
        expand(m)
            .into_iter()
            .fold(*state, |state, (generator, direction)| {
                state.get_derived_state(self.geometry.turn(generator, direction))
            })
    }

    /// Unknown tokens leave the state as it was
    pub fn apply_token(&self, state: &CubeState, token: &str) -> CubeState {
        match token.parse() {
            Ok(m) => self.apply(state, m),
            Err(err) => {
                console_warn!("Unknown move: {} ({})", token, err);
                *state
            }
        }
    }

    pub fn apply_moves<'a>(
        &self,
        state: &CubeState,
        moves: impl IntoIterator<Item = &'a Move>,
    ) -> CubeState {
        moves
            .into_iter()
            .fold(*state, |state, m| self.apply(&state, *m))
    }

    /// Invalid tokens are skipped with a warning
    pub fn apply_algorithm(&self, state: &CubeState, algorithm: &str) -> CubeState {
        self.apply_moves(state, &parse_algorithm(algorithm))
    }

    /// Rejects the whole algorithm if any token is invalid
    pub fn apply_algorithm_strict(
        &self,
        state: &CubeState,
        algorithm: &str,
    ) -> Result<CubeState, AlgorithmError> {
        Ok(self.apply_moves(state, &parse_algorithm_strict(algorithm)?))
    }

    /// A single face map with the same effect as the move
    pub fn face_map(&self, m: Move) -> FaceMap {
        expand(m)
            .into_iter()
            .fold(FaceMap::identity(NUM_FACELETS), |combined, (generator, direction)| {
                combined.apply(self.geometry.turn(generator, direction))
            })
    }
}
