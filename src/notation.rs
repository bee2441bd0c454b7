use std::convert::TryFrom;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AlgorithmError, ParseMoveError};
use crate::face::Face;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slice {
    M,
    E,
    S,
}

/// Whole cube rotation axes, following R, U and F respectively
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Face(Face),
    Slice(Slice),
    Rotation(Axis),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Amount {
    Clockwise,
    CounterClockwise,
    Double,
}

impl Amount {
    pub const ALL: [Amount; 3] = [Amount::Clockwise, Amount::CounterClockwise, Amount::Double];

    /// Number of clockwise quarter turns this amounts to
    pub fn quarter_turns(self) -> usize {
        match self {
            Amount::Clockwise => 1,
            Amount::Double => 2,
            Amount::CounterClockwise => 3,
        }
    }

    pub fn inverse(self) -> Amount {
        match self {
            Amount::Clockwise => Amount::CounterClockwise,
            Amount::CounterClockwise => Amount::Clockwise,
            Amount::Double => Amount::Double,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Amount::Clockwise => "",
            Amount::CounterClockwise => "'",
            Amount::Double => "2",
        }
    }
}

/// One token of move notation, decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Move {
    pub kind: MoveKind,
    pub amount: Amount,
}

impl Move {
    pub fn new(kind: MoveKind, amount: Amount) -> Self {
        Self { kind, amount }
    }

    pub fn face(face: Face, amount: Amount) -> Self {
        Self::new(MoveKind::Face(face), amount)
    }

    /// All 36 tokens the grammar accepts
    pub fn all() -> impl Iterator<Item = Move> {
        let kinds = Face::ALL
            .iter()
            .map(|face| MoveKind::Face(*face))
            .chain(
                [Slice::M, Slice::E, Slice::S]
                    .iter()
                    .map(|slice| MoveKind::Slice(*slice)),
            )
            .chain(
                [Axis::X, Axis::Y, Axis::Z]
                    .iter()
                    .map(|axis| MoveKind::Rotation(*axis)),
            );
        kinds.flat_map(|kind| Amount::ALL.iter().map(move |amount| Move::new(kind, *amount)))
    }

    pub fn inverse(self) -> Move {
        Move::new(self.kind, self.amount.inverse())
    }

    pub fn base_letter(self) -> char {
        match self.kind {
            MoveKind::Face(face) => face.letter(),
            MoveKind::Slice(Slice::M) => 'M',
            MoveKind::Slice(Slice::E) => 'E',
            MoveKind::Slice(Slice::S) => 'S',
            MoveKind::Rotation(Axis::X) => 'x',
            MoveKind::Rotation(Axis::Y) => 'y',
            MoveKind::Rotation(Axis::Z) => 'z',
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.base_letter(), self.amount.suffix())
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let base = chars.next().ok_or(ParseMoveError::Empty)?;
        let kind = match base {
            'M' => MoveKind::Slice(Slice::M),
            'E' => MoveKind::Slice(Slice::E),
            'S' => MoveKind::Slice(Slice::S),
            'x' => MoveKind::Rotation(Axis::X),
            'y' => MoveKind::Rotation(Axis::Y),
            'z' => MoveKind::Rotation(Axis::Z),
            letter => MoveKind::Face(
                Face::from_letter(letter).ok_or(ParseMoveError::UnknownBase(letter))?,
            ),
        };
        let amount = match chars.as_str() {
            "" => Amount::Clockwise,
            "'" => Amount::CounterClockwise,
            "2" => Amount::Double,
            other => return Err(ParseMoveError::UnknownModifier(other.to_string())),
        };
        Ok(Move::new(kind, amount))
    }
}

impl From<Move> for String {
    fn from(m: Move) -> String {
        m.to_string()
    }
}

impl TryFrom<String> for Move {
    type Error = ParseMoveError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        token.parse()
    }
}

/// Splits on whitespace and decodes each token.
/// Tokens that don't parse are skipped with a warning, the rest are kept in order.
pub fn parse_algorithm(algorithm: &str) -> Vec<Move> {
    algorithm
        .split_whitespace()
        .filter_map(|token| match token.parse() {
            Ok(m) => Some(m),
            Err(err) => {
                console_warn!("Invalid move notation: {} ({})", token, err);
                None
            }
        })
        .collect()
}

/// Like `parse_algorithm`, but the first bad token rejects the whole algorithm.
pub fn parse_algorithm_strict(algorithm: &str) -> Result<Vec<Move>, AlgorithmError> {
    algorithm
        .split_whitespace()
        .enumerate()
        .map(|(index, token)| {
            token.parse().map_err(|source| AlgorithmError {
                index,
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

/// Inverts a token textually: `X2` stays, `X'` becomes `X`, anything else gains a `'`.
pub fn inverse_token(token: &str) -> String {
    if token.ends_with('2') {
        token.to_string()
    } else if let Some(stripped) = token.strip_suffix('\'') {
        stripped.to_string()
    } else {
        format!("{}'", token)
    }
}

/// The sequence that undoes `algorithm`: reversed, each move inverted.
/// Invalid tokens are dropped, as in `parse_algorithm`.
pub fn invert_algorithm(algorithm: &str) -> String {
    parse_algorithm(algorithm)
        .iter()
        .rev()
        .map(|m| m.inverse().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        assert_eq!("R".parse(), Ok(Move::face(Face::R, Amount::Clockwise)));
        assert_eq!(
            "U'".parse(),
            Ok(Move::face(Face::U, Amount::CounterClockwise))
        );
        assert_eq!(
            "M2".parse(),
            Ok(Move::new(MoveKind::Slice(Slice::M), Amount::Double))
        );
        assert_eq!(
            "y'".parse(),
            Ok(Move::new(MoveKind::Rotation(Axis::Y), Amount::CounterClockwise))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Move>(), Err(ParseMoveError::Empty));
        assert_eq!("X".parse::<Move>(), Err(ParseMoveError::UnknownBase('X')));
        assert_eq!("r".parse::<Move>(), Err(ParseMoveError::UnknownBase('r')));
        assert_eq!(
            "R3".parse::<Move>(),
            Err(ParseMoveError::UnknownModifier("3".to_string()))
        );
        assert_eq!(
            "R2'".parse::<Move>(),
            Err(ParseMoveError::UnknownModifier("2'".to_string()))
        );
    }

    #[test]
    fn test_all_moves_round_trip_through_text() {
        let all: Vec<Move> = Move::all().collect();
        assert_eq!(all.len(), 36);
        for m in all {
            assert_eq!(m.to_string().parse(), Ok(m));
        }
    }

    #[test]
    fn test_parse_algorithm_skips_invalid_tokens() {
        assert_eq!(parse_algorithm("R U2 X"), parse_algorithm("R U2"));
        assert_eq!(parse_algorithm("  R   U2\tX  "), parse_algorithm("R U2"));
        assert_eq!(parse_algorithm("R U2").len(), 2);
        assert!(parse_algorithm("").is_empty());
    }

    #[test]
    fn test_parse_algorithm_strict() {
        assert_eq!(
            parse_algorithm_strict("R U2").unwrap(),
            parse_algorithm("R U2")
        );
        let err = parse_algorithm_strict("R U2 X F").unwrap_err();
        assert_eq!(err.index, 2);
        assert_eq!(err.token, "X");
        assert_eq!(
            err.to_string(),
            "invalid move notation 'X' at position 2: unknown move 'X'"
        );
    }

    #[test]
    fn test_inverse_token() {
        assert_eq!(inverse_token("R"), "R'");
        assert_eq!(inverse_token("R'"), "R");
        assert_eq!(inverse_token("R2"), "R2");
        assert_eq!(inverse_token("M"), "M'");
        assert_eq!(inverse_token("x'"), "x");
        assert_eq!(inverse_token("z2"), "z2");
        for m in Move::all() {
            assert_eq!(inverse_token(&m.to_string()), m.inverse().to_string());
        }
    }

    #[test]
    fn test_invert_algorithm() {
        assert_eq!(invert_algorithm("R U R' U'"), "U R U' R'");
        assert_eq!(invert_algorithm("F2 M' x"), "x' M F2");
    }

    #[test]
    fn test_serde() {
        let moves = parse_algorithm("R' M2 y");
        let json = serde_json::to_string(&moves).unwrap();
        assert_eq!(json, r#"["R'","M2","y"]"#);
        let parsed: Vec<Move> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, moves);
        assert!(serde_json::from_str::<Move>(r#""Q""#).is_err());
    }
}
