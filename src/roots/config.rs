//! Configuration for root classification and the reference backend.
//!
//! [`RootsCfg`]  — classification
//! └ `imag_tol_factor` : ULP factor for "imaginary part is zero"
//!
//! [`AberthCfg`] — [`AberthSolver`](super::aberth::AberthSolver)
//! ├ `max_iter`     : iteration cap (>= 1)
//! └ `polish_steps` : Newton steps applied to each real root
//!
//! Both start from `new()` with default values and are refined with
//! chained setters.

use super::errors::ConfigError;
use super::tolerances::DEFAULT_IMAG_TOL_FACTOR;


#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RootsCfg {
    imag_tol_factor: u32,
}
impl RootsCfg {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn with_imag_tol_factor(mut self, v: u32) -> Self { self.imag_tol_factor = v; self }

    #[inline] #[must_use] pub fn imag_tol_factor(&self) -> u32 { self.imag_tol_factor }
}

impl Default for RootsCfg {
    fn default() -> Self {
        Self { imag_tol_factor: DEFAULT_IMAG_TOL_FACTOR }
    }
}


/// Aberth-Ehrlich configuration.
///
/// # Defaults
/// ┌ DEFAULT_MAX_ITER     - sweeps over all roots before giving up
/// └ DEFAULT_POLISH_STEPS - Newton steps per real root after convergence
///
/// # Validation
/// └ `max_iter` >= 1, checked in [`AberthCfg::set_max_iter`]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct AberthCfg {
    max_iter:     usize,
    polish_steps: usize,
}
impl AberthCfg {
    pub const DEFAULT_MAX_ITER:     usize = 500;
    pub const DEFAULT_POLISH_STEPS: usize = 4;

    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub fn set_max_iter(mut self, v: usize) -> Result<Self, ConfigError> {
        if v == 0 {
            return Err(ConfigError::InvalidMaxIter { got: v });
        }
        self.max_iter = v;
        Ok(self)
    }
    pub fn with_polish_steps(mut self, v: usize) -> Self { self.polish_steps = v; self }

    #[inline] #[must_use] pub fn max_iter(&self)     -> usize { self.max_iter }
    #[inline] #[must_use] pub fn polish_steps(&self) -> usize { self.polish_steps }
}

impl Default for AberthCfg {
    fn default() -> Self {
        Self {
            max_iter:     Self::DEFAULT_MAX_ITER,
            polish_steps: Self::DEFAULT_POLISH_STEPS,
        }
    }
}
