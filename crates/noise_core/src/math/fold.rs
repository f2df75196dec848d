//! Coordinate folding and octave coarsening.
//!
//! Multi-dimensional lattice coordinates are reduced to the single `i32`
//! position consumed by the hash as `x + P2*y + P3*z + P4*w` in wrapping
//! arithmetic. The multipliers are large primes so that small lattices in
//! each axis do not alias onto the same folded value.

use crate::types::Dimensions;

/// Multiplier for the second axis.
pub const PRIME_Y: i32 = 198_491_317;

/// Multiplier for the third axis.
pub const PRIME_Z: i32 = 6_542_989;

/// Multiplier for the fourth axis.
pub const PRIME_W: i32 = 357_239;

/// Fold a lattice point into one hash position.
///
/// For [`Dimensions::One`] only `x` is used. For higher dimensionalities the
/// axes beyond the generator's dimensionality are ignored and missing axes
/// are expected to be 0, so `fold(d, [x, 0, 0, 0])` is the folded value of
/// the bare `x`.
///
/// # Examples
/// ```
/// use noise_core::math::fold::{fold, PRIME_Y};
/// use noise_core::Dimensions;
///
/// assert_eq!(fold(Dimensions::One, [5, 9, 9, 9]), 5);
/// assert_eq!(fold(Dimensions::Two, [5, 1, 0, 0]), 5 + PRIME_Y);
/// assert_eq!(fold(Dimensions::Three, [7, 0, 0, 0]), 7);
/// ```
#[inline]
pub fn fold(dimensions: Dimensions, lattice: [i32; 4]) -> i32 {
    let [x, y, z, w] = lattice;
    match dimensions {
        Dimensions::One => x,
        Dimensions::Two => x.wrapping_add(PRIME_Y.wrapping_mul(y)),
        Dimensions::Three => x
            .wrapping_add(PRIME_Y.wrapping_mul(y))
            .wrapping_add(PRIME_Z.wrapping_mul(z)),
        Dimensions::Four => x
            .wrapping_add(PRIME_Y.wrapping_mul(y))
            .wrapping_add(PRIME_Z.wrapping_mul(z))
            .wrapping_add(PRIME_W.wrapping_mul(w)),
    }
}

/// Coarsen a folded position by `level` octaves.
///
/// Arithmetic right shift, so each run of `2^level` consecutive integers
/// (negative ones included) maps to one value. Levels of 32 and above shift
/// by 31.
///
/// # Examples
/// ```
/// use noise_core::math::fold::octave;
///
/// assert_eq!(octave(13, 0), 13);
/// assert_eq!(octave(12, 2), octave(15, 2));
/// assert_eq!(octave(-1, 1), octave(-2, 1));
/// ```
#[inline]
pub fn octave(position: i32, level: u32) -> i32 {
    if level == 0 {
        position
    } else {
        position >> level.min(31)
    }
}

/// Floor a real coordinate onto the `i32` lattice, saturating at the bounds.
///
/// NaN maps to 0.
#[inline]
pub fn to_lattice(x: f64) -> i32 {
    x.floor() as i32
}

/// Ceiling counterpart of [`to_lattice`].
#[inline]
pub fn to_lattice_ceil(x: f64) -> i32 {
    x.ceil() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_one_dimension_is_identity() {
        for x in [-5, 0, 1, i32::MAX, i32::MIN] {
            assert_eq!(fold(Dimensions::One, [x, 3, 4, 5]), x);
        }
    }

    #[test]
    fn test_four_dimensions_uses_all_primes() {
        let folded = fold(Dimensions::Four, [1, 1, 1, 1]);
        assert_eq!(folded, 1 + PRIME_Y + PRIME_Z + PRIME_W);
    }

    #[test]
    fn test_fold_wraps_instead_of_overflowing() {
        let folded = fold(Dimensions::Two, [0, 100, 0, 0]);
        assert_eq!(folded, PRIME_Y.wrapping_mul(100));
    }

    #[test]
    fn test_octave_blocks() {
        for n in -100..100 {
            assert_eq!(octave(2 * n, 1), octave(2 * n + 1, 1));
            assert_ne!(octave(2 * n + 1, 1), octave(2 * n + 2, 1));
        }
        assert_eq!(octave(i32::MIN, 40), -1);
    }

    #[test]
    fn test_to_lattice() {
        assert_eq!(to_lattice(1.5), 1);
        assert_eq!(to_lattice(-0.5), -1);
        assert_eq!(to_lattice_ceil(-0.5), 0);
        assert_eq!(to_lattice(1e20), i32::MAX);
        assert_eq!(to_lattice(f64::NAN), 0);
    }

    proptest! {
        #[test]
        fn prop_trailing_axes_default_to_origin(x in any::<i32>()) {
            for d in [Dimensions::Two, Dimensions::Three, Dimensions::Four] {
                prop_assert_eq!(fold(d, [x, 0, 0, 0]), x);
            }
        }

        #[test]
        fn prop_octave_constant_on_blocks(block in -1_000_000i32..1_000_000, level in 1u32..8, offset in 0i32..256) {
            let size = 1i32 << level;
            let base = block * size;
            prop_assert_eq!(octave(base, level), octave(base + offset % size, level));
        }
    }
}
