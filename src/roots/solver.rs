//! The root-finding backend contract.
//!
//! [`PolySolver`] is what [`Roots`](super::orchestrator::Roots) consumes.
//! Any backend (Jenkins-Traub, Aberth-Ehrlich, a companion-matrix eigen
//! solver, a test stub) can be bound to the orchestrator by implementing it.

use super::errors::SolverError;


/// A polynomial root solver with a fixed maximum degree.
///
/// # Contract
/// - [`PolySolver::max_degree`] is fixed at construction.
/// - [`PolySolver::reset`] is called before every [`PolySolver::rpoly`] and
///   clears mutable state without reallocating.
/// - [`PolySolver::rpoly`] reads `op[0..=degree]` (leading coefficient at
///   index 0) and writes `degree` roots into `zeror[..degree]` and
///   `zeroi[..degree]`. It must fail with
///   ├ [`SolverError::InvalidDegree`]          if `degree > max_degree()`
///   └ [`SolverError::ZeroLeadingCoefficient`] if `op[0] == 0.0`
///
///   in that order, before writing any output. [`check_request`] performs
///   both checks.
/// - Complex roots are written as conjugate pairs at adjacent indices.
pub trait PolySolver {
    /// Largest polynomial degree this instance can solve.
    fn max_degree(&self) -> usize;

    /// Largest coefficient array this instance accepts (`max_degree + 1`).
    fn max_coefficients(&self) -> usize {
        self.max_degree() + 1
    }

    fn reset(&mut self);

    fn rpoly(
        &mut self,
        op: &[f64],
        degree: usize,
        zeror: &mut [f64],
        zeroi: &mut [f64],
    ) -> Result<(), SolverError>;
}


/// Validates an `rpoly` request against the solver contract.
///
/// ┌ `degree > max_degree`          → [`SolverError::InvalidDegree`]
/// ├ `op` shorter than `degree + 1` → [`SolverError::BufferTooShort`]
/// ├ `op[0] == 0.0`                 → [`SolverError::ZeroLeadingCoefficient`]
/// └ `zeror`/`zeroi` shorter than `degree` → [`SolverError::BufferTooShort`]
pub fn check_request(
    op: &[f64],
    degree: usize,
    max_degree: usize,
    zeror: &[f64],
    zeroi: &[f64],
) -> Result<(), SolverError> {
    if degree > max_degree {
        return Err(SolverError::InvalidDegree { degree, max_degree });
    }

    let leading = *op.first().ok_or(SolverError::BufferTooShort { need: degree + 1, got: 0 })?;
    if op.len() <= degree {
        return Err(SolverError::BufferTooShort { need: degree + 1, got: op.len() });
    }
    if leading == 0.0 {
        return Err(SolverError::ZeroLeadingCoefficient);
    }

    let out_len = zeror.len().min(zeroi.len());
    if out_len < degree {
        return Err(SolverError::BufferTooShort { need: degree, got: out_len });
    }

    Ok(())
}
