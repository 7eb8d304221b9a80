//! Test doubles for the solver contract.
use polyroots::roots::errors::SolverError;
use polyroots::roots::solver::{check_request, PolySolver};

/// Degree-9 roots served by [`StubSolver`]. Indices 3, 4, 8, 9 are complex.
pub const STUB_ZEROR: [f64; 10] = [
    0.065297428539351, -1.0, -2.0, -3.0, -4.0, -0.07, 1.0, 2.0, 3.0, 4.0,
];
pub const STUB_ZEROI: [f64; 10] = [
    0.0, 0.0, 0.0, -2.0, -2.0, 0.0, 0.0, 0.0, 2.0, 2.0,
];

/// Checks the contract, then writes a fixed table of roots.
///
/// - `roots = None`  : degree 9 gets [`STUB_ZEROR`]/[`STUB_ZEROI`], other
///                     degrees leave the outputs untouched
/// - `roots = Some`  : the given `(re, im)` pairs, for any degree
/// - `fail_with`     : `(n, err)` fails the n-th accepted call (1-based) with `err`
#[derive(Debug, Default)]
pub struct StubSolver {
    pub max_degree: usize,
    pub roots:      Option<Vec<(f64, f64)>>,
    pub fail_with:  Option<(usize, SolverError)>,
    pub resets:     usize,
    pub calls:      usize,
    pub seen:       Vec<f64>,
}

impl StubSolver {
    pub fn new(max_degree: usize) -> Self {
        Self { max_degree, ..Self::default() }
    }

    pub fn with_roots(max_degree: usize, roots: &[(f64, f64)]) -> Self {
        Self { max_degree, roots: Some(roots.to_vec()), ..Self::default() }
    }
}

impl PolySolver for StubSolver {
    fn max_degree(&self) -> usize {
        self.max_degree
    }

    fn reset(&mut self) {
        self.resets += 1;
    }

    fn rpoly(
        &mut self,
        op: &[f64],
        degree: usize,
        zeror: &mut [f64],
        zeroi: &mut [f64],
    ) -> Result<(), SolverError> {
        check_request(op, degree, self.max_degree, zeror, zeroi)?;
        self.calls += 1;
        self.seen = op[..=degree].to_vec();

        if let Some((at, err)) = &self.fail_with {
            if *at == self.calls {
                return Err(err.clone());
            }
        }

        match &self.roots {
            Some(roots) => {
                for (j, &(re, im)) in roots.iter().take(degree).enumerate() {
                    zeror[j] = re;
                    zeroi[j] = im;
                }
            }
            None if degree == 9 => {
                // the table has one entry past `degree`
                let n = STUB_ZEROR.len().min(zeror.len()).min(zeroi.len());
                zeror[..n].copy_from_slice(&STUB_ZEROR[..n]);
                zeroi[..n].copy_from_slice(&STUB_ZEROI[..n]);
            }
            None => {}
        }
        Ok(())
    }
}
