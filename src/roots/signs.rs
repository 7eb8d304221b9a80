//! Sign selection for extremal scans.
//! - [`Sign::Positive`] : strictly `> 0.0`
//! - [`Sign::Negative`] : strictly `< 0.0`
//!
//! Zero (either `+0.0` or `-0.0`) and NaN belong to neither sign.


#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Returns `true` if `x` is strictly of this sign.
    #[inline]
    pub fn holds(self, x: f64) -> bool {
        match self {
            Sign::Positive => x > 0.0,
            Sign::Negative => x < 0.0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Sign::Positive => "positive",
            Sign::Negative => "negative",
        }
    }
}
impl std::fmt::Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
