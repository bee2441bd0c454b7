use std::rc::Rc;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cube_state::CubeState;
use crate::engine::MoveEngine;
use crate::error::{AlgorithmError, ParseMoveError};
use crate::notation::{parse_algorithm, parse_algorithm_strict, Move};
use crate::scramble::{generate_scramble, ScrambleOpts};

/// What to do with an algorithm containing tokens that don't parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidTokenPolicy {
    /// Warn about each bad token and apply the rest
    Skip,
    /// Apply nothing and report the first bad token
    Reject,
}

impl Default for InvalidTokenPolicy {
    fn default() -> Self {
        InvalidTokenPolicy::Skip
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOpts {
    pub invalid_token_policy: InvalidTokenPolicy,
    pub scramble: ScrambleOpts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub notation: Move,
    /// Milliseconds since the unix epoch
    pub timestamp: u64,
}

/// A finished solve, in the shape the progress tracker stores
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveRecord {
    /// Milliseconds
    pub time: u64,
    pub move_count: usize,
    pub scramble: String,
    /// Milliseconds since the unix epoch
    pub date: u64,
}

#[cfg(target_arch = "wasm32")]
fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// One cube plus the moves made on it.
/// Every recorded move is a single token, so an algorithm is undone one move at a time.
pub struct CubeSession {
    engine: Rc<MoveEngine>,
    opts: SessionOpts,
    state: CubeState,
    history: Vec<MoveRecord>,
    redo_stack: Vec<MoveRecord>,
    move_count: usize,
    scramble: String,
}

impl CubeSession {
    pub fn new() -> Self {
        Self::with_opts(SessionOpts::default())
    }

    pub fn with_opts(opts: SessionOpts) -> Self {
        Self::with_engine(Rc::new(MoveEngine::new()), opts)
    }

    pub fn with_engine(engine: Rc<MoveEngine>, opts: SessionOpts) -> Self {
        Self {
            engine,
            opts,
            state: CubeState::solved(),
            history: vec![],
            redo_stack: vec![],
            move_count: 0,
            scramble: String::new(),
        }
    }

    #[inline]
    pub fn state(&self) -> &CubeState {
        &self.state
    }

    #[inline]
    pub fn engine(&self) -> &Rc<MoveEngine> {
        &self.engine
    }

    #[inline]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    pub fn redo_stack(&self) -> &[MoveRecord] {
        &self.redo_stack
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    #[inline]
    pub fn scramble(&self) -> &str {
        &self.scramble
    }

    pub fn is_solved(&self) -> bool {
        self.state.is_solved()
    }

    fn record(&mut self, m: Move) {
        self.state = self.engine.apply(&self.state, m);
        self.history.push(MoveRecord {
            notation: m,
            timestamp: now_millis(),
        });
        self.move_count += 1;
    }

    /// Applies and records a new move. Anything that could be redone is forgotten.
    pub fn execute_move(&mut self, m: Move) -> &CubeState {
        self.record(m);
        self.redo_stack.clear();
        &self.state
    }

    pub fn execute_token(&mut self, token: &str) -> Result<&CubeState, ParseMoveError> {
        match token.parse() {
            Ok(m) => Ok(self.execute_move(m)),
            Err(err) => {
                console_warn!("Invalid move notation: {} ({})", token, err);
                Err(err)
            }
        }
    }

    /// Records each move of the algorithm on its own. Returns how many moves were applied.
    pub fn execute_algorithm(&mut self, algorithm: &str) -> Result<usize, AlgorithmError> {
        let moves = match self.opts.invalid_token_policy {
            InvalidTokenPolicy::Skip => parse_algorithm(algorithm),
            InvalidTokenPolicy::Reject => parse_algorithm_strict(algorithm).map_err(|err| {
                console_warn!("Rejected algorithm: {}", err);
                err
            })?,
        };
        for m in moves.iter() {
            self.execute_move(*m);
        }
        Ok(moves.len())
    }

    /// Returns false when there is nothing to undo
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            None => false,
            Some(last) => {
                self.state = self.engine.apply(&self.state, last.notation.inverse());
                self.redo_stack.push(last);
                self.move_count = self.move_count.saturating_sub(1);
                true
            }
        }
    }

    /// Returns false when there is nothing to redo
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            None => false,
            Some(undone) => {
                self.record(undone.notation);
                true
            }
        }
    }

    pub fn reset(&mut self) {
        self.state = CubeState::solved();
        self.history.clear();
        self.redo_stack.clear();
        self.move_count = 0;
        self.scramble.clear();
    }

    pub fn set_scramble(&mut self, scramble: &str) {
        self.scramble = scramble.to_string();
    }

    /// Resets, then applies a fresh scramble. The scramble is not part of the history.
    pub fn scramble_with<R: Rng>(&mut self, rng: &mut R) -> &str {
        let scramble = generate_scramble(rng, self.opts.scramble);
        self.reset();
        self.state = self.engine.apply_algorithm(&self.state, &scramble);
        self.scramble = scramble;
        &self.scramble
    }

    pub fn scramble_cube(&mut self) -> &str {
        self.scramble_with(&mut rand::thread_rng())
    }

    /// The record to store for a solve that took `time` milliseconds.
    /// None if the cube isn't solved.
    pub fn solve_record(&self, time: u64) -> Option<SolveRecord> {
        if !self.is_solved() {
            return None;
        }
        Some(SolveRecord {
            time,
            move_count: self.move_count,
            scramble: self.scramble.clone(),
            date: now_millis(),
        })
    }
}

impl Default for CubeSession {
    fn default() -> Self {
        CubeSession::new()
    }
}
