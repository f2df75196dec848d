//! Bit-mixing hash functions.
//!
//! Both mixers reproduce the published SquirrelNoise reference vectors. The
//! reference evaluates its multiplications as IEEE-754 double products and
//! reduces the result to 32 bits afterwards, so a product whose exact value
//! exceeds 2^53 is rounded before truncation. [`squirrel5`] and [`squirrel3`]
//! perform the same steps. Double multiplication is correctly rounded, so the
//! output is identical on every platform.

use serde::{Deserialize, Serialize};

/// Smallest hash value used when scaling (`-0x7fffffff`).
///
/// The single codepoint `i32::MIN` is folded onto this value.
pub const HASH_MIN: i32 = -0x7fff_ffff;

/// Largest hash value (`0x7fffffff`).
pub const HASH_MAX: i32 = 0x7fff_ffff;

/// Width of the scaling domain, `HASH_MAX - HASH_MIN`.
pub const HASH_SPAN: f64 = HASH_MAX as f64 - HASH_MIN as f64;

const SQ5_NOISE1: u32 = 0xd2a8_0a3f;
const SQ5_NOISE2: u32 = 0xa884_f197;
const SQ5_NOISE3: u32 = 0x6c73_6f4b;
const SQ5_NOISE4: u32 = 0xb79f_3abb;
const SQ5_NOISE5: u32 = 0x1b56_c4f5;

const SQ3_NOISE1: u32 = 0xb529_7a4d;
const SQ3_NOISE2: u32 = 0x68e3_1da4;
const SQ3_NOISE3: u32 = 0x1b56_c4e9;

/// Hash function selector.
///
/// # Examples
/// ```
/// use noise_core::math::hash::HashAlgorithm;
///
/// assert_eq!(HashAlgorithm::default().hash(0, 0), -247101726);
/// assert_eq!(HashAlgorithm::Squirrel3.hash(0, 0), 436901382);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// SquirrelNoise5 (default)
    #[default]
    Squirrel5,
    /// SquirrelNoise3, the older and cheaper mixer
    Squirrel3,
}

impl HashAlgorithm {
    /// Hash `position` under `seed` with the selected mixer.
    #[inline]
    pub fn hash(self, seed: i32, position: i32) -> i32 {
        match self {
            HashAlgorithm::Squirrel5 => squirrel5(seed, position),
            HashAlgorithm::Squirrel3 => squirrel3(seed, position),
        }
    }

    /// Lowercase name, as used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Squirrel5 => "squirrel5",
            HashAlgorithm::Squirrel3 => "squirrel3",
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "squirrel5" | "sq5" => Ok(HashAlgorithm::Squirrel5),
            "squirrel3" | "sq3" => Ok(HashAlgorithm::Squirrel3),
            other => Err(format!(
                "Unknown hash algorithm: {}. Supported: squirrel5, squirrel3",
                other
            )),
        }
    }
}

/// Low 32 bits of an integral double, two's complement.
///
/// Every intermediate value of the mixers is an integer below 2^63 in
/// magnitude, so the `i64` conversion is exact.
#[inline(always)]
fn low_bits(value: f64) -> u32 {
    value as i64 as u32
}

/// Double product of a 32-bit lane and a mixing constant.
#[inline(always)]
fn mul(lane: i32, constant: u32) -> f64 {
    lane as f64 * constant as f64
}

/// `m ^= m >>> shift`, returning the signed 32-bit result.
#[inline(always)]
fn xor_shift_right(value: f64, shift: u32) -> i32 {
    let bits = low_bits(value);
    (bits ^ (bits >> shift)) as i32
}

/// SquirrelNoise5 hash of `position` under `seed`.
///
/// The seed is mixed in after the first xor-shift rather than before it.
/// When the low bits of `position` are zero and the seed is small, the seed
/// can partially cancel against itself; this is a known property of the
/// mixer.
///
/// # Examples
/// ```
/// use noise_core::math::hash::squirrel5;
///
/// assert_eq!(squirrel5(0, 0), -247101726);
/// assert_eq!(squirrel5(3, 0), 737589467);
/// ```
#[inline]
pub fn squirrel5(seed: i32, position: i32) -> i32 {
    let mut m = xor_shift_right(mul(position, SQ5_NOISE1), 9);
    let mut v = m as f64 + seed as f64 + SQ5_NOISE2 as f64;
    m = xor_shift_right(v, 11);
    m = xor_shift_right(mul(m, SQ5_NOISE3), 13);
    v = m as f64 + SQ5_NOISE4 as f64;
    m = xor_shift_right(v, 15);
    xor_shift_right(mul(m, SQ5_NOISE5), 17)
}

/// SquirrelNoise3 hash of `position` under `seed`.
///
/// # Examples
/// ```
/// use noise_core::math::hash::squirrel3;
///
/// assert_eq!(squirrel3(0, 0), 436901382);
/// assert_eq!(squirrel3(3, 0), 1025206206);
/// ```
#[inline]
pub fn squirrel3(seed: i32, position: i32) -> i32 {
    let mut m = low_bits(mul(position, SQ3_NOISE1) + seed as f64) as i32;
    m ^= m >> 8;
    m = low_bits(m as f64 + SQ3_NOISE2 as f64) as i32;
    m ^= m << 8;
    m = low_bits(mul(m, SQ3_NOISE3)) as i32;
    m ^ (m >> 8)
}
