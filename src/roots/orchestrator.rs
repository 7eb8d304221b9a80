//! Root orchestration and real/complex classification.
//!
//! [`Roots`] binds to a [`PolySolver`], stages coefficients into scratch
//! buffers sized to the solver's maximum degree, runs one solve per
//! [`Roots::find_roots`] call and keeps the real-root subset for extremal
//! queries.

use super::config::RootsCfg;
use super::errors::RootsError;
use super::extrema;
use super::report::{RealRoots, RootSet, RootSummary};
use super::solver::PolySolver;
use super::tolerances::nearly_equal_within;


/// Root finder over a borrowed [`PolySolver`].
///
/// # Buffers
/// All buffers are allocated once in [`Roots::new`] and reused:
/// ├ `op`    : `max_degree + 1` staged coefficients
/// ├ `zeror` : `max_degree` real parts
/// ├ `zeroi` : `max_degree` imaginary parts
/// └ `real`  : real-root subset (capacity `max_degree`)
///
/// # State
/// Every successful [`Roots::find_roots`] overwrites the previous root set.
/// A failed call leaves the previous root set and real subset queryable.
///
/// # Example
/// ```
/// use polyroots::{AberthSolver, Roots};
///
/// let mut solver = AberthSolver::new(10);
/// let mut roots  = Roots::new(&mut solver);
///
/// // (x - 1)(x + 2)(x^2 + 1)
/// roots.find_roots(&[1.0, 1.0, -1.0, 1.0, -2.0])?;
///
/// assert_eq!(roots.degree(), 4);
/// assert_eq!(roots.real_root_count(), 2);
/// assert!((roots.max_pos_real_root()? - 1.0).abs() < 1e-12);
/// assert!((roots.min_neg_real_root()? + 2.0).abs() < 1e-12);
/// # Ok::<(), polyroots::RootsError>(())
/// ```
#[derive(Debug)]
pub struct Roots<'s, S: PolySolver + ?Sized> {
    solver:     &'s mut S,
    cfg:        RootsCfg,
    max_degree: usize,
    degree:     usize,
    op:         Vec<f64>,
    zeror:      Vec<f64>,
    zeroi:      Vec<f64>,
    real:       Vec<f64>,
}

impl<'s, S: PolySolver + ?Sized> Roots<'s, S> {
    pub fn new(solver: &'s mut S) -> Self {
        Self::with_cfg(solver, RootsCfg::default())
    }

    pub fn with_cfg(solver: &'s mut S, cfg: RootsCfg) -> Self {
        let max_degree = solver.max_degree();
        let mdp1       = solver.max_coefficients();
        Self {
            solver,
            cfg,
            max_degree,
            degree: 0,
            op:     vec![0.0; mdp1],
            zeror:  vec![0.0; max_degree],
            zeroi:  vec![0.0; max_degree],
            real:   Vec::with_capacity(max_degree),
        }
    }

    /// Maximum degree of the bound solver, cached at construction.
    #[inline] pub fn max_degree(&self) -> usize { self.max_degree }

    /// Maximum coefficient count (`max_degree + 1`).
    #[inline] pub fn max_coefficients(&self) -> usize { self.op.len() }

    /// Degree of the last successfully solved polynomial (0 before any).
    #[inline] pub fn degree(&self) -> usize { self.degree }

    #[inline] pub fn cfg(&self) -> RootsCfg { self.cfg }

    /// Solves the polynomial with `coefficients` (leading coefficient first)
    /// and classifies its roots.
    ///
    /// `degree = coefficients.len() - 1`. Precondition checks (degree bound,
    /// non-zero leading coefficient) are the solver's; its errors are
    /// returned unchanged in [`RootsError::Solver`].
    ///
    /// # Errors
    /// ┌ [`RootsError::NoCoefficients`] - `coefficients` is empty.
    /// └ [`RootsError::Solver`]         - whatever the solver raised, e.g.
    ///    ├ [`SolverError::InvalidDegree`](super::errors::SolverError::InvalidDegree)
    ///    └ [`SolverError::ZeroLeadingCoefficient`](super::errors::SolverError::ZeroLeadingCoefficient)
    pub fn find_roots(&mut self, coefficients: &[f64]) -> Result<(), RootsError> {
        let degree = coefficients
            .len()
            .checked_sub(1)
            .ok_or(RootsError::NoCoefficients)?;

        // longer inputs are truncated here and rejected by the solver's degree check
        let staged = coefficients.len().min(self.op.len());
        self.op[..staged].copy_from_slice(&coefficients[..staged]);

        self.solver.reset();
        self.solver.rpoly(&self.op, degree, &mut self.zeror, &mut self.zeroi)?;

        self.degree = degree;
        self.classify();

        log::debug!(
            "solved degree {} polynomial: {} real, {} complex roots",
            degree,
            self.real.len(),
            degree - self.real.len()
        );
        Ok(())
    }

    /// Collects roots whose imaginary part is zero within the configured
    /// ULP factor into `real`, in root order.
    fn classify(&mut self) {
        let factor = self.cfg.imag_tol_factor();
        self.real.clear();
        for (&re, &im) in self.zeror[..self.degree].iter().zip(&self.zeroi[..self.degree]) {
            if nearly_equal_within(im, 0.0, factor) {
                self.real.push(re);
            } else {
                log::trace!("complex root {re} {im:+}i");
            }
        }
    }

    /// All `degree` roots of the last successful call.
    pub fn roots(&self) -> RootSet<'_> {
        RootSet {
            degree:     self.degree,
            real_parts: &self.zeror[..self.degree],
            imag_parts: &self.zeroi[..self.degree],
        }
    }

    pub fn real_roots(&self) -> RealRoots<'_> {
        RealRoots { count: self.real.len(), values: &self.real }
    }

    #[inline] pub fn real_root_count(&self) -> usize { self.real.len() }

    /// Non-real roots as `(re, im)`, in solver order.
    pub fn complex_roots(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let factor = self.cfg.imag_tol_factor();
        self.roots().iter().filter(move |&(_, im)| !nearly_equal_within(im, 0.0, factor))
    }

    pub fn summary(&self) -> RootSummary {
        RootSummary {
            degree:             self.degree,
            real_root_count:    self.real.len(),
            complex_root_count: self.degree - self.real.len(),
        }
    }

    /// Real subset, or [`RootsError::EmptyRootSet`] if there is none.
    #[inline]
    fn nonempty_real(&self) -> Result<&[f64], RootsError> {
        if self.real.is_empty() {
            return Err(RootsError::EmptyRootSet);
        }
        Ok(&self.real)
    }

    /// Real root of smallest magnitude, returned as that magnitude.
    ///
    /// # Errors
    /// - [`RootsError::EmptyRootSet`] if there are no real roots (also
    ///   before the first successful [`Roots::find_roots`]).
    pub fn abs_min_real_root(&self) -> Result<f64, RootsError> {
        Ok(extrema::abs_min(self.nonempty_real()?)?)
    }

    /// Smallest positive real root.
    ///
    /// # Errors
    /// ┌ [`RootsError::EmptyRootSet`] - no real roots.
    /// └ [`RootsError::Scan`]         - no positive real root.
    pub fn min_pos_real_root(&self) -> Result<f64, RootsError> {
        Ok(extrema::min_positive(self.nonempty_real()?)?)
    }

    /// Largest positive real root. Errors as [`Roots::min_pos_real_root`].
    pub fn max_pos_real_root(&self) -> Result<f64, RootsError> {
        Ok(extrema::max_positive(self.nonempty_real()?)?)
    }

    /// Most negative real root.
    ///
    /// # Errors
    /// ┌ [`RootsError::EmptyRootSet`] - no real roots.
    /// └ [`RootsError::Scan`]         - no negative real root.
    pub fn min_neg_real_root(&self) -> Result<f64, RootsError> {
        Ok(extrema::min_negative(self.nonempty_real()?)?)
    }

    /// Negative real root closest to zero. Errors as [`Roots::min_neg_real_root`].
    pub fn max_neg_real_root(&self) -> Result<f64, RootsError> {
        Ok(extrema::max_negative(self.nonempty_real()?)?)
    }
}
