use crate::cube_state::{facelet_index, NUM_FACELETS};
use crate::face::Face;
use crate::face_map::FaceMap;

/// The nine quarter turns every other move is built from.
/// Face turns are clockwise when looking at that face.
/// M turns like L, E turns like D and S turns like F.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    F,
    B,
    U,
    D,
    L,
    R,
    M,
    E,
    S,
}

impl Generator {
    pub const ALL: [Generator; 9] = [
        Generator::F,
        Generator::B,
        Generator::U,
        Generator::D,
        Generator::L,
        Generator::R,
        Generator::M,
        Generator::E,
        Generator::S,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The face whose own grid rotates, if any. Slices never rotate a grid.
    pub fn turned_face(self) -> Option<Face> {
        match self {
            Generator::F => Some(Face::F),
            Generator::B => Some(Face::B),
            Generator::U => Some(Face::U),
            Generator::D => Some(Face::D),
            Generator::L => Some(Face::L),
            Generator::R => Some(Face::R),
            Generator::M | Generator::E | Generator::S => None,
        }
    }

    /// The four strips moved by a clockwise quarter turn, in rotational order.
    /// Each strip takes its colors from the next one; the last takes from the first.
    pub fn strips(self) -> [Strip; 4] {
        use crate::face::Face::*;
        match self {
            Generator::F => [row(U, 2), col(L, 2).rev(), row(D, 0).rev(), col(R, 0)],
            Generator::B => [row(U, 0), col(R, 2), row(D, 2).rev(), col(L, 0).rev()],
            Generator::U => [row(F, 0), row(R, 0), row(B, 0), row(L, 0)],
            Generator::D => [row(F, 2), row(L, 2), row(B, 2), row(R, 2)],
            Generator::L => [col(F, 0), col(U, 0), col(B, 2).rev(), col(D, 0)],
            Generator::R => [col(F, 2), col(D, 2), col(B, 0).rev(), col(U, 2)],
            Generator::M => [col(F, 1), col(U, 1), col(B, 1).rev(), col(D, 1)],
            Generator::E => [row(F, 1), row(L, 1), row(B, 1), row(R, 1)],
            Generator::S => [row(U, 1), col(L, 1).rev(), row(D, 1).rev(), col(R, 1)],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Col(usize),
}

/// Three stickers in a line on one face.
/// Strips seen from two different faces can run in opposite directions,
/// `reversed` walks the line from the far end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strip {
    pub face: Face,
    pub line: Line,
    pub reversed: bool,
}

const fn row(face: Face, n: usize) -> Strip {
    Strip {
        face,
        line: Line::Row(n),
        reversed: false,
    }
}

const fn col(face: Face, n: usize) -> Strip {
    Strip {
        face,
        line: Line::Col(n),
        reversed: false,
    }
}

impl Strip {
    fn rev(self) -> Strip {
        Strip {
            reversed: !self.reversed,
            ..self
        }
    }

    pub fn facelets(&self) -> [usize; 3] {
        let mut out = [0; 3];
        for (k, facelet) in out.iter_mut().enumerate() {
            let k = if self.reversed { 2 - k } else { k };
            *facelet = match self.line {
                Line::Row(row) => facelet_index(self.face, row, k),
                Line::Col(col) => facelet_index(self.face, k, col),
            };
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

/// Moves the 9 stickers of `face` as a quarter rotation of its grid
fn rotate_face_grid(face_map: &mut FaceMap, face: Face, direction: Direction) {
    let original = face_map.0.clone();
    for row in 0..3 {
        for col in 0..3 {
            let (from_row, from_col) = match direction {
                // transpose, then reverse each row
                Direction::Clockwise => (2 - col, row),
                Direction::CounterClockwise => (col, 2 - row),
            };
            face_map.0[facelet_index(face, row, col)] =
                original[facelet_index(face, from_row, from_col)];
        }
    }
}

fn derive_turn(generator: Generator, direction: Direction) -> FaceMap {
    let mut face_map = FaceMap::identity(NUM_FACELETS);
    if let Some(face) = generator.turned_face() {
        rotate_face_grid(&mut face_map, face, direction);
    }
    let mut strips: Vec<[usize; 3]> = generator
        .strips()
        .iter()
        .map(|strip| strip.facelets())
        .collect();
    if direction == Direction::CounterClockwise {
        strips.reverse();
    }
    face_map.cycle_strips(&strips);
    face_map
}

/// Face maps for every generator in both directions, derived once up front.
#[derive(Debug)]
pub struct GeometryTable {
    clockwise: Vec<FaceMap>,
    counter_clockwise: Vec<FaceMap>,
}

impl GeometryTable {
    pub fn new() -> Self {
        Self {
            clockwise: Generator::ALL
                .iter()
                .map(|g| derive_turn(*g, Direction::Clockwise))
                .collect(),
            counter_clockwise: Generator::ALL
                .iter()
                .map(|g| derive_turn(*g, Direction::CounterClockwise))
                .collect(),
        }
    }

    #[inline]
    pub fn turn(&self, generator: Generator, direction: Direction) -> &FaceMap {
        match direction {
            Direction::Clockwise => &self.clockwise[generator.index()],
            Direction::CounterClockwise => &self.counter_clockwise[generator.index()],
        }
    }
}

impl Default for GeometryTable {
    fn default() -> Self {
        GeometryTable::new()
    }
}
