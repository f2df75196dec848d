//! Seed decorrelation for composite samplers.

use crate::math::hash::squirrel5;
use crate::types::seed::SEED_SEQUENCE_SEED;

const FIXED_MASKS: [i32; 4] = [0, !0, 0xa5a5_5a5a_u32 as i32, 0x5a5a_a5a5_u32 as i32];

/// XOR mask applied to a generator's seed for sub-sample `index`.
///
/// Channel 0 leaves the seed unchanged, the next three flip fixed bit
/// patterns and later channels use hashed masks.
///
/// # Examples
/// ```
/// use noise_core::samplers::channel::channel_mask;
///
/// assert_eq!(channel_mask(0), 0);
/// assert_eq!(channel_mask(1), -1);
/// assert_ne!(channel_mask(4), channel_mask(5));
/// ```
#[inline]
pub fn channel_mask(index: usize) -> i32 {
    match FIXED_MASKS.get(index) {
        Some(&mask) => mask,
        None => squirrel5(SEED_SEQUENCE_SEED, index as i32),
    }
}
