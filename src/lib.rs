use wasm_bindgen::prelude::*;

macro_rules! console_log {
    ($($t:tt)*) => {
        #[cfg(target_arch = "wasm32")] {
            web_sys::console::log_1(&format!($($t)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))] {
            println!($($t)*);
        }
    };
}

macro_rules! console_warn {
    ($($t:tt)*) => {
        #[cfg(target_arch = "wasm32")] {
            web_sys::console::warn_1(&format!($($t)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))] {
            eprintln!($($t)*);
        }
    };
}

pub mod cube_state;
pub mod engine;
pub mod error;
pub mod face;
pub mod face_map;
pub mod geometry;
pub mod notation;
pub mod scramble;
pub mod session;

pub use cube_state::{CubeState, FaceletGrid};
pub use engine::MoveEngine;
pub use error::{AlgorithmError, ParseMoveError};
pub use face::{Color, Face};
pub use notation::{inverse_token, invert_algorithm, parse_algorithm, Amount, Move, MoveKind};
pub use scramble::ScrambleOpts;
pub use session::{CubeSession, InvalidTokenPolicy, MoveRecord, SessionOpts, SolveRecord};

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|err| JsValue::from_str(&err.to_string()))
}

/// The cube as seen from JavaScript: one session, driven by move notation.
#[wasm_bindgen]
pub struct Cube {
    session: CubeSession,
}

#[wasm_bindgen]
impl Cube {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Cube {
        Cube {
            session: CubeSession::new(),
        }
    }

    /// Returns false (and leaves the cube alone) if the token is not valid notation
    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(&mut self, token: &str) -> bool {
        self.session.execute_token(token).is_ok()
    }

    /// Returns the number of moves applied
    #[wasm_bindgen(js_name = applyAlgorithm)]
    pub fn apply_algorithm(&mut self, algorithm: &str) -> usize {
        self.session.execute_algorithm(algorithm).unwrap_or(0)
    }

    pub fn undo(&mut self) -> bool {
        self.session.undo()
    }

    pub fn redo(&mut self) -> bool {
        self.session.redo()
    }

    pub fn reset(&mut self) {
        self.session.reset()
    }

    pub fn scramble(&mut self) -> String {
        let scramble = self.session.scramble_cube().to_string();
        console_log!("Scramble: {}", scramble);
        scramble
    }

    #[wasm_bindgen(js_name = setScramble)]
    pub fn set_scramble(&mut self, scramble: &str) {
        self.session.set_scramble(scramble)
    }

    #[wasm_bindgen(js_name = scrambleText)]
    pub fn scramble_text(&self) -> String {
        self.session.scramble().to_string()
    }

    #[wasm_bindgen(js_name = isSolved)]
    pub fn is_solved(&self) -> bool {
        self.session.is_solved()
    }

    #[wasm_bindgen(js_name = moveCount)]
    pub fn move_count(&self) -> usize {
        self.session.move_count()
    }

    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> Result<String, JsValue> {
        to_json(self.session.state())
    }

    #[wasm_bindgen(js_name = historyJson)]
    pub fn history_json(&self) -> Result<String, JsValue> {
        to_json(&self.session.history())
    }

    /// JSON for the solve record, or undefined if the cube isn't solved
    #[wasm_bindgen(js_name = solveRecordJson)]
    pub fn solve_record_json(&self, time_ms: f64) -> Result<Option<String>, JsValue> {
        self.session
            .solve_record(time_ms.max(0.0) as u64)
            .map(|record| to_json(&record))
            .transpose()
    }
}

impl Default for Cube {
    fn default() -> Self {
        Cube::new()
    }
}

#[wasm_bindgen(js_name = generateScramble)]
pub fn random_scramble(length: usize) -> String {
    scramble::generate_scramble(&mut rand::thread_rng(), ScrambleOpts { length })
}

#[wasm_bindgen(js_name = inverse)]
pub fn inverse_move(token: &str) -> String {
    inverse_token(token)
}
