//! Read-only views over the state of a [`Roots`](super::orchestrator::Roots)
//! after [`find_roots`](super::orchestrator::Roots::find_roots).

/// Full root set of the last successful call.
///
/// [`RootSet`]
/// - `degree`     : polynomial degree (number of roots, with multiplicity)
/// - `real_parts` : `degree` real parts
/// - `imag_parts` : `degree` imaginary parts, paired by index
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RootSet<'a> {
    pub degree:     usize,
    pub real_parts: &'a [f64],
    pub imag_parts: &'a [f64],
}
impl<'a> RootSet<'a> {
    pub fn len(&self) -> usize { self.degree }

    pub fn is_empty(&self) -> bool { self.degree == 0 }

    /// `(re, im)` per root, in solver order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + 'a {
        self.real_parts.iter().copied().zip(self.imag_parts.iter().copied())
    }
}


/// Real-root subset of the last successful call, in solver order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RealRoots<'a> {
    pub count:  usize,
    pub values: &'a [f64],
}


/// Root counts of the last successful call.
///
/// `real_root_count + complex_root_count == degree`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct RootSummary {
    pub degree:             usize,
    pub real_root_count:    usize,
    pub complex_root_count: usize,
}
