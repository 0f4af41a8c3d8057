//! Element trait for cover values

use num_traits::Float;
use std::fmt::Debug;

/// Trait for types that can be stored in a cover or output buffer.
///
/// Per-cell sums and logarithms are always accumulated in `f64`, so an
/// element only needs to widen into and narrow back from it.
pub trait CoverElement: Float + Debug + Send + Sync + 'static {
    /// Widen to the accumulation type
    fn widen(self) -> f64;

    /// Narrow from the accumulation type
    fn narrow(value: f64) -> Self;
}

macro_rules! impl_cover_element {
    ($t:ty) => {
        impl CoverElement for $t {
            #[inline]
            fn widen(self) -> f64 {
                self as f64
            }

            #[inline]
            fn narrow(value: f64) -> Self {
                value as $t
            }
        }
    };
}

impl_cover_element!(f32);
impl_cover_element!(f64);
