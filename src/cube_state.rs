use std::collections::BTreeMap;
use std::convert::TryFrom;

use serde::{Deserialize, Serialize};

use crate::face::{Color, Face};
use crate::face_map::FaceMap;

pub const NUM_FACELETS: usize = 54;

/// Row-major, (0, 0) is the top left sticker when looking straight at the face
pub type FaceletGrid = [[Color; 3]; 3];

#[inline]
pub fn facelet_index(face: Face, row: usize, col: usize) -> usize {
    face.index() * 9 + row * 3 + col
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "FacesRepr", try_from = "FacesRepr")]
pub struct CubeState {
    facelets: [Color; NUM_FACELETS],
}

impl CubeState {
    pub fn solved() -> Self {
        let mut facelets = [Color::White; NUM_FACELETS];
        for face in Face::ALL.iter() {
            for i in 0..9 {
                facelets[face.index() * 9 + i] = face.home_color();
            }
        }
        Self { facelets }
    }

    pub fn from_grids(grids: [FaceletGrid; 6]) -> Self {
        let mut facelets = [Color::White; NUM_FACELETS];
        for face in Face::ALL.iter() {
            for (row, colors) in grids[face.index()].iter().enumerate() {
                for (col, color) in colors.iter().enumerate() {
                    facelets[facelet_index(*face, row, col)] = *color;
                }
            }
        }
        Self { facelets }
    }

    #[inline]
    pub fn get(&self, face: Face, row: usize, col: usize) -> Color {
        self.facelets[facelet_index(face, row, col)]
    }

    pub fn grid(&self, face: Face) -> FaceletGrid {
        let mut grid = [[face.home_color(); 3]; 3];
        for (row, colors) in grid.iter_mut().enumerate() {
            for (col, color) in colors.iter_mut().enumerate() {
                *color = self.get(face, row, col);
            }
        }
        grid
    }

    #[inline]
    pub fn facelets(&self) -> &[Color; NUM_FACELETS] {
        &self.facelets
    }

    /// Relocates colors according to the face map. Colors are never created or recolored.
    pub fn get_derived_state(&self, face_map: &FaceMap) -> CubeState {
        let mut facelets = self.facelets;
        for (new_index, old_index) in face_map.0.iter().enumerate() {
            facelets[new_index] = self.facelets[*old_index];
        }
        CubeState { facelets }
    }

    /// True when every face is a single color, whichever color that is.
    pub fn is_solved(&self) -> bool {
        Face::ALL.iter().all(|face| {
            let first = self.get(*face, 0, 0);
            self.facelets[face.index() * 9..face.index() * 9 + 9]
                .iter()
                .all(|color| *color == first)
        })
    }

    /// Stricter than `is_solved`: every face shows its own home color.
    pub fn is_home_solved(&self) -> bool {
        *self == CubeState::solved()
    }

    /// How many facelets hold each color, indexed by `Color::index`
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for color in self.facelets.iter() {
            counts[color.index()] += 1;
        }
        counts
    }
}

impl Default for CubeState {
    fn default() -> Self {
        CubeState::solved()
    }
}

impl std::fmt::Display for CubeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, face) in Face::ALL.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}:", face.letter())?;
            for row in self.grid(*face).iter() {
                write!(f, " ")?;
                for color in row.iter() {
                    write!(f, "{}", color.letter())?;
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("missing face {0:?}")]
    MissingFace(Face),
}

// The JSON shape handed to the renderer: { "faces": { "U": [[...], ...], ... } }
#[derive(Serialize, Deserialize)]
struct FacesRepr {
    faces: BTreeMap<Face, FaceletGrid>,
}

impl From<CubeState> for FacesRepr {
    fn from(state: CubeState) -> Self {
        FacesRepr {
            faces: Face::ALL
                .iter()
                .map(|face| (*face, state.grid(*face)))
                .collect(),
        }
    }
}

impl TryFrom<FacesRepr> for CubeState {
    type Error = StateError;

    fn try_from(repr: FacesRepr) -> Result<Self, Self::Error> {
        let mut grids = [[[Color::White; 3]; 3]; 6];
        for face in Face::ALL.iter() {
            grids[face.index()] = *repr
                .faces
                .get(face)
                .ok_or(StateError::MissingFace(*face))?;
        }
        Ok(CubeState::from_grids(grids))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_solved() {
        let state = CubeState::solved();
        assert!(state.is_solved());
        assert!(state.is_home_solved());
        assert_eq!(state.color_counts(), [9; 6]);
        assert_eq!(state.grid(Face::F), [[Color::Green; 3]; 3]);

        assert_snapshot!(state.to_string(), @r###"
        U: WWW WWW WWW
        D: YYY YYY YYY
        F: GGG GGG GGG
        B: BBB BBB BBB
        L: OOO OOO OOO
        R: RRR RRR RRR
        "###);
    }

    #[test]
    fn test_uniform_faces_with_foreign_colors_count_as_solved() {
        // Swap the colors of opposite faces: every face is uniform,
        // but none shows its home color.
        let mut grids = [[[Color::White; 3]; 3]; 6];
        for face in Face::ALL.iter() {
            let opposite = match face {
                Face::U => Face::D,
                Face::D => Face::U,
                Face::F => Face::B,
                Face::B => Face::F,
                Face::L => Face::R,
                Face::R => Face::L,
            };
            grids[face.index()] = [[opposite.home_color(); 3]; 3];
        }
        let state = CubeState::from_grids(grids);
        assert!(state.is_solved());
        assert!(!state.is_home_solved());
    }

    #[test]
    fn test_single_off_color_is_not_solved() {
        let mut grids = [[[Color::White; 3]; 3]; 6];
        for face in Face::ALL.iter() {
            grids[face.index()] = CubeState::solved().grid(*face);
        }
        grids[Face::F.index()][2][2] = Color::Red;
        grids[Face::R.index()][2][0] = Color::Green;
        let state = CubeState::from_grids(grids);
        assert!(!state.is_solved());
        assert_eq!(state.color_counts(), [9; 6]);
    }

    #[test]
    fn test_json_round_trip() {
        let state = CubeState::solved();
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.starts_with(r#"{"faces":{"U":[["white","white","white"]"#));
        let parsed: CubeState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn test_json_missing_face() {
        let json = r#"{"faces":{"U":[["white","white","white"],["white","white","white"],["white","white","white"]]}}"#;
        assert!(serde_json::from_str::<CubeState>(json).is_err());
    }
}
