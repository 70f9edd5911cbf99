//! Guess selection and the solver state machine

mod engine;
pub mod entropy;

pub use engine::{OPENING_WORD, Solver, SolverError, SolverState};
