//! Vertex and weight traits.
//!
//! - [`Vertex`]: Label identifying a vertex, compared by equality and hash
//! - [`Weight`]: Numeric edge weight with a "no edge" zero and an
//!   "unreachable" sentinel

use std::fmt;
use std::hash::Hash;
use std::ops::Add;

/// Vertex label.
///
/// Blanket-implemented for every `Eq + Hash + Clone + Debug` type, so
/// `&str`, `String`, integers and user newtypes all work as labels.
pub trait Vertex: Eq + Hash + Clone + fmt::Debug {}

impl<T: Eq + Hash + Clone + fmt::Debug> Vertex for T {}

/// Edge weight.
///
/// [`Weight::ZERO`] marks a missing edge in [`MatrixGraph`](crate::MatrixGraph)
/// and [`Weight::INFINITY`] marks an unreachable pair in a
/// [`DistanceTable`](crate::DistanceTable).
///
/// For integer types `INFINITY` is `MAX`, so an edge or distance of exactly
/// `MAX` is indistinguishable from "unreachable". Keep real weights below it.
pub trait Weight: Copy + PartialOrd + Add<Output = Self> + fmt::Debug + fmt::Display {
    /// Zero weight ("no edge" in a weight table).
    const ZERO: Self;

    /// Unreachable sentinel.
    const INFINITY: Self;

    /// Check if this is the zero weight.
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Check if this is the unreachable sentinel.
    fn is_infinite(&self) -> bool {
        *self == Self::INFINITY
    }

    /// Sum of two path legs, as used by relaxation.
    ///
    /// Never returns [`Weight::INFINITY`] for two finite legs and never
    /// overflows: integers saturate, clamping at `MIN` and one below `MAX`.
    fn relax_add(self, rhs: Self) -> Self;
}

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0.0;
                const INFINITY: Self = <$t>::INFINITY;

                fn relax_add(self, rhs: Self) -> Self {
                    self + rhs
                }
            }
        )*
    };
}

macro_rules! impl_int_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                const ZERO: Self = 0;
                const INFINITY: Self = <$t>::MAX;

                fn relax_add(self, rhs: Self) -> Self {
                    self.saturating_add(rhs).min(<$t>::MAX - 1)
                }
            }
        )*
    };
}

impl_float_weight!(f32, f64);
impl_int_weight!(i32, i64, u32, u64);
