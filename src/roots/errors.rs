//! Root classification error types.
//!
//! ┌ [`SolverError`] : raised by a [`PolySolver`] backend
//! │   ├ degree above the solver's maximum
//! │   ├ zero leading coefficient
//! │   └ backend-specific failures (buffers, non-finite input, convergence)
//! │
//! ├ [`ScanError`]   : extremal scans over raw slices
//! │   ├ empty input
//! │   └ no value of the requested sign
//! │
//! ├ [`RootsError`]  : everything [`Roots`] can return
//! │   └ wraps [`SolverError`] and [`ScanError`] unchanged
//! │
//! └ [`ConfigError`] : invalid configuration values
//!
//! [`PolySolver`]: super::solver::PolySolver
//! [`Roots`]: super::orchestrator::Roots


use thiserror::Error;
use super::signs::Sign;


/// Errors raised by a root-finding backend.
///
/// The messages of [`SolverError::InvalidDegree`] and
/// [`SolverError::ZeroLeadingCoefficient`] are part of the solver
/// contract and must not change.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    #[error("Requested maximal degree is greater than MAXDEGREE.")]
    InvalidDegree { degree: usize, max_degree: usize },

    #[error("The leading coefficient is zero.")]
    ZeroLeadingCoefficient,

    #[error("buffer too short: need {need} entries, got {got}")]
    BufferTooShort { need: usize, got: usize },

    #[error("non-finite coefficient at index {idx}: got {got}")]
    NonFiniteCoefficient { idx: usize, got: f64 },

    #[error("no convergence after {iterations} iterations")]
    NoConvergence { iterations: usize },
}


/// Extremal scan errors.
///
/// ┌ Empty input slice
/// └ No value strictly of the requested [`Sign`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("empty input")]
    EmptyInput,

    #[error("no {sign} value in input")]
    NoSuchSign { sign: Sign },
}


#[derive(Debug, Clone, PartialEq, Error)]
pub enum RootsError {
    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error("no real roots available: real-root set is empty")]
    EmptyRootSet,

    #[error("no coefficients given: need at least one")]
    NoCoefficients,
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },
}
