use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    U,
    D,
    F,
    B,
    L,
    R,
}

impl Face {
    pub const ALL: [Face; 6] = [Face::U, Face::D, Face::F, Face::B, Face::L, Face::R];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The color this face shows when the cube is solved.
    pub fn home_color(self) -> Color {
        match self {
            Face::U => Color::White,
            Face::D => Color::Yellow,
            Face::F => Color::Green,
            Face::B => Color::Blue,
            Face::L => Color::Orange,
            Face::R => Color::Red,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
            Face::L => 'L',
            Face::R => 'R',
        }
    }

    pub fn from_letter(letter: char) -> Option<Face> {
        Face::ALL.iter().copied().find(|face| face.letter() == letter)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Orange,
    Red,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Orange,
        Color::Red,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn hex(self) -> &'static str {
        match self {
            Color::White => "#FFFFFF",
            Color::Yellow => "#FFD500",
            Color::Green => "#009E60",
            Color::Blue => "#0051BA",
            Color::Orange => "#FF5800",
            Color::Red => "#C41E3A",
        }
    }

    /// Single letter used when printing a state
    pub fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Orange => 'O',
            Color::Red => 'R',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_colors_are_distinct() {
        let mut seen = [false; 6];
        for face in Face::ALL.iter() {
            let color = face.home_color();
            assert!(!seen[color.index()]);
            seen[color.index()] = true;
        }
    }

    #[test]
    fn test_face_letters() {
        for face in Face::ALL.iter() {
            assert_eq!(Face::from_letter(face.letter()), Some(*face));
        }
        assert_eq!(Face::from_letter('M'), None);
        assert_eq!(Face::from_letter('u'), None);
    }
}
