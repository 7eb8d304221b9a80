//! Reference [`PolySolver`] backend based on the
//! [Aberth-Ehrlich method](https://en.wikipedia.org/wiki/Aberth_method).
//!
//! All roots are refined simultaneously in complex arithmetic. Once the
//! iteration stops, roots are split into real roots and conjugate pairs:
//! ┌ a root whose mirror image `conj(z)` has no partner among the other
//! │ roots is real; its imaginary part is set to `0.0` and its real part is
//! │ polished with Newton steps on the real polynomial
//! └ the remaining roots are matched into exact conjugate pairs written at
//!   adjacent indices
//!
//! Roots at the origin (trailing zero coefficients) are split off first and
//! reported exactly. Degrees 1 and 2 are solved in closed form.

use std::f64::consts::TAU;

use num_complex::Complex64;

use super::config::AberthCfg;
use super::errors::SolverError;
use super::solver::{check_request, PolySolver};


/// Angular offset of the initial guesses; keeps them off the real axis.
const INITIAL_ANGLE: f64 = 0.4;


#[derive(Debug, Clone)]
pub struct AberthSolver {
    max_degree: usize,
    cfg:        AberthCfg,
    iterations: usize,
    coeffs:     Vec<f64>,
    z:          Vec<Complex64>,
    converged:  Vec<bool>,
    is_real:    Vec<bool>,
    paired:     Vec<bool>,
}

impl AberthSolver {
    pub fn new(max_degree: usize) -> Self {
        Self::with_cfg(max_degree, AberthCfg::default())
    }

    pub fn with_cfg(max_degree: usize, cfg: AberthCfg) -> Self {
        Self {
            max_degree,
            cfg,
            iterations: 0,
            coeffs:     Vec::with_capacity(max_degree + 1),
            z:          Vec::with_capacity(max_degree),
            converged:  Vec::with_capacity(max_degree),
            is_real:    Vec::with_capacity(max_degree),
            paired:     Vec::with_capacity(max_degree),
        }
    }

    #[inline] pub fn cfg(&self) -> AberthCfg { self.cfg }

    /// Aberth sweeps used by the last [`PolySolver::rpoly`] call
    /// (0 for closed-form degrees).
    #[inline] pub fn iterations(&self) -> usize { self.iterations }

    /// Runs the simultaneous iteration on `self.coeffs` (degree `n >= 1`)
    /// and leaves the `n` root estimates in `self.z`.
    fn iterate(&mut self, n: usize) -> Result<(), SolverError> {
        let coeffs = &self.coeffs;

        // geometric mean of the root magnitudes
        let radius = (coeffs[n] / coeffs[0]).abs().powf(1.0 / n as f64);
        self.z.clear();
        self.z.extend((0..n).map(|k| {
            Complex64::from_polar(radius, TAU * k as f64 / n as f64 + INITIAL_ANGLE)
        }));
        self.converged.clear();
        self.converged.resize(n, false);

        let one         = Complex64::new(1.0, 0.0);
        let bound_scale = 4.0 * (n + 1) as f64 * f64::EPSILON;
        let max_iter    = self.cfg.max_iter();

        for iter in 1..=max_iter {
            let mut all_done = true;

            for k in 0..n {
                if self.converged[k] {
                    continue;
                }
                let zk      = self.z[k];
                let (p, dp) = horner(coeffs, zk);

                // |p(z)| at the rounding-error level of its own evaluation
                if p.norm() <= bound_scale * horner_abs(coeffs, zk.norm()) {
                    self.converged[k] = true;
                    continue;
                }
                all_done = false;

                let ratio = p / dp;
                let repulsion: Complex64 = self.z
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != k)
                    .map(|(_, &zj)| (zk - zj).inv())
                    .sum();

                let mut step = ratio / (one - ratio * repulsion);
                if !step.is_finite() {
                    // stationary point or collision: nudge off it
                    step = Complex64::from_polar(
                        f64::EPSILON.sqrt() * zk.norm().max(1.0),
                        iter as f64,
                    );
                }

                let next  = zk - step;
                self.z[k] = next;
                if step.norm() <= f64::EPSILON * next.norm() {
                    self.converged[k] = true;
                }
            }

            if all_done || self.converged.iter().all(|&c| c) {
                self.iterations = iter;
                log::debug!("aberth: degree {n} converged after {iter} sweeps");
                return Ok(());
            }
        }

        self.iterations = max_iter;
        log::debug!("aberth: degree {n} not converged after {max_iter} sweeps");
        Err(SolverError::NoConvergence { iterations: max_iter })
    }

    /// Marks each of the `n` roots in `self.z` as real or complex.
    fn classify(&mut self, n: usize) {
        self.is_real.clear();
        for k in 0..n {
            let real = is_real_root(&self.z, k);
            self.is_real.push(real);
        }
    }

    /// Writes real roots, then conjugate pairs, then the `degree - n`
    /// roots at the origin.
    fn emit(&mut self, n: usize, degree: usize, zeror: &mut [f64], zeroi: &mut [f64]) {
        let steps = self.cfg.polish_steps();
        let mut w = 0;

        for k in 0..n {
            if self.is_real[k] {
                zeror[w] = polish(&self.coeffs, self.z[k].re, steps);
                zeroi[w] = 0.0;
                w += 1;
            }
        }

        self.paired.clear();
        self.paired.resize(n, false);
        for k in 0..n {
            if self.is_real[k] || self.paired[k] || self.z[k].im < 0.0 {
                continue;
            }
            let mirror  = self.z[k].conj();
            let partner = (0..n)
                .filter(|&j| j != k && !self.is_real[j] && !self.paired[j] && self.z[j].im < 0.0)
                .min_by(|&i, &j| {
                    (self.z[i] - mirror).norm().total_cmp(&(self.z[j] - mirror).norm())
                });

            self.paired[k] = true;
            match partner {
                Some(j) => {
                    self.paired[j] = true;
                    let re = 0.5 * (self.z[k].re + self.z[j].re);
                    let im = 0.5 * (self.z[k].im - self.z[j].im);
                    zeror[w]     = re;
                    zeroi[w]     = im;
                    zeror[w + 1] = re;
                    zeroi[w + 1] = -im;
                    w += 2;
                }
                None => {
                    zeror[w] = self.z[k].re;
                    zeroi[w] = self.z[k].im;
                    w += 1;
                }
            }
        }

        // unmatched lower half-plane roots
        for k in 0..n {
            if !self.is_real[k] && !self.paired[k] {
                zeror[w] = self.z[k].re;
                zeroi[w] = self.z[k].im;
                w += 1;
            }
        }

        for slot in w..degree {
            zeror[slot] = 0.0;
            zeroi[slot] = 0.0;
        }
    }
}

impl PolySolver for AberthSolver {
    fn max_degree(&self) -> usize {
        self.max_degree
    }

    fn reset(&mut self) {
        self.iterations = 0;
        self.coeffs.clear();
        self.z.clear();
        self.converged.clear();
        self.is_real.clear();
        self.paired.clear();
    }

    /// # Errors
    /// ┌ [`SolverError::InvalidDegree`]          - `degree > max_degree`.
    /// ├ [`SolverError::ZeroLeadingCoefficient`] - `op[0] == 0.0`.
    /// ├ [`SolverError::BufferTooShort`]         - `op` or outputs too short.
    /// ├ [`SolverError::NonFiniteCoefficient`]   - NaN/inf in `op[..=degree]`.
    /// └ [`SolverError::NoConvergence`]          - `max_iter` sweeps exhausted.
    fn rpoly(
        &mut self,
        op: &[f64],
        degree: usize,
        zeror: &mut [f64],
        zeroi: &mut [f64],
    ) -> Result<(), SolverError> {
        check_request(op, degree, self.max_degree, zeror, zeroi)?;

        let op = &op[..=degree];
        if let Some((idx, &got)) = op.iter().enumerate().find(|(_, c)| !c.is_finite()) {
            return Err(SolverError::NonFiniteCoefficient { idx, got });
        }

        // op[0] != 0, so some coefficient is non-zero
        let n = op.iter().rposition(|&c| c != 0.0).unwrap_or(0);
        self.coeffs.clear();
        self.coeffs.extend_from_slice(&op[..=n]);
        self.iterations = 0;

        match n {
            0 => self.z.clear(),
            1 => {
                self.z.clear();
                self.z.push(Complex64::new(-self.coeffs[1] / self.coeffs[0], 0.0));
            }
            2 => {
                self.z.clear();
                self.z.extend(quadratic(self.coeffs[0], self.coeffs[1], self.coeffs[2]));
            }
            _ => self.iterate(n)?,
        }

        self.classify(n);
        self.emit(n, degree, zeror, zeroi);
        Ok(())
    }
}


/// `p(z)` and `p'(z)` by Horner's scheme, leading coefficient first.
#[inline]
fn horner(coeffs: &[f64], z: Complex64) -> (Complex64, Complex64) {
    let mut p  = Complex64::new(0.0, 0.0);
    let mut dp = Complex64::new(0.0, 0.0);
    for &c in coeffs {
        dp = dp * z + p;
        p  = p * z + c;
    }
    (p, dp)
}

#[inline]
fn horner_real(coeffs: &[f64], x: f64) -> (f64, f64) {
    let mut p  = 0.0;
    let mut dp = 0.0;
    for &c in coeffs {
        dp = dp * x + p;
        p  = p * x + c;
    }
    (p, dp)
}

/// `sum |c_i| r^(n-i)`, the scale of the rounding error in `p(z)` for `|z| = r`.
#[inline]
fn horner_abs(coeffs: &[f64], r: f64) -> f64 {
    coeffs.iter().fold(0.0, |acc, c| acc * r + c.abs())
}


/// Roots of `a x^2 + b x + c` without cancellation. Real roots have an
/// imaginary part of exactly `0.0`.
fn quadratic(a: f64, b: f64, c: f64) -> [Complex64; 2] {
    let disc = b * b - 4.0 * a * c;
    if disc >= 0.0 {
        let q  = -0.5 * (b + b.signum() * disc.sqrt());
        let r1 = q / a;
        let r2 = if q != 0.0 { c / q } else { 0.0 };
        [Complex64::new(r1, 0.0), Complex64::new(r2, 0.0)]
    } else {
        let re = -b / (2.0 * a);
        let im = (-disc).sqrt() / (2.0 * a.abs());
        [Complex64::new(re, im), Complex64::new(re, -im)]
    }
}


/// A root is real if no other root sits closer to its mirror image than
/// the root itself does.
fn is_real_root(z: &[Complex64], k: usize) -> bool {
    let zk = z[k];
    if zk.im == 0.0 {
        return true;
    }
    let mirror  = zk.conj();
    let nearest = z
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != k)
        .map(|(_, &zj)| (zj - mirror).norm())
        .fold(f64::INFINITY, f64::min);

    nearest > zk.im.abs()
}


/// Newton steps on the real polynomial, kept only while `|p|` decreases.
fn polish(coeffs: &[f64], x0: f64, steps: usize) -> f64 {
    let mut x         = x0;
    let (mut px, mut dpx) = horner_real(coeffs, x);

    for _ in 0..steps {
        if px == 0.0 || dpx == 0.0 {
            break;
        }
        let next = x - px / dpx;
        if !next.is_finite() {
            break;
        }
        let (pn, dpn) = horner_real(coeffs, next);
        if pn.abs() >= px.abs() {
            break;
        }
        x   = next;
        px  = pn;
        dpx = dpn;
    }
    x
}
