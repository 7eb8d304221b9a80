//! Real/complex root classification over a pluggable polynomial root solver.
//!
//! A [`Roots`] orchestrator borrows any [`PolySolver`] backend, runs it on a
//! coefficient slice (leading coefficient first), keeps the roots whose
//! imaginary part is zero within a few ULPs, and answers extremal queries
//! over that real subset.
//!
//! ```
//! use polyroots::{AberthSolver, Roots};
//!
//! let mut solver = AberthSolver::new(8);
//! let mut roots  = Roots::new(&mut solver);
//!
//! // x^3 - 6x^2 + 11x - 6 = (x - 1)(x - 2)(x - 3)
//! roots.find_roots(&[1.0, -6.0, 11.0, -6.0])?;
//! assert_eq!(roots.real_root_count(), 3);
//! assert!((roots.min_pos_real_root()? - 1.0).abs() < 1e-12);
//! # Ok::<(), polyroots::RootsError>(())
//! ```

pub mod roots;

pub use roots::aberth::AberthSolver;
pub use roots::config::{AberthCfg, RootsCfg};
pub use roots::errors::{ConfigError, RootsError, ScanError, SolverError};
pub use roots::orchestrator::Roots;
pub use roots::report::{RealRoots, RootSet, RootSummary};
pub use roots::signs::Sign;
pub use roots::solver::PolySolver;
pub use roots::tolerances::{nearly_equal, nearly_equal_within};
