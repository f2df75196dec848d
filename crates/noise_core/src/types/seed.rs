//! Seeds and seed resolution.
//!
//! A [`Seed`] is either a fixed integer or a symbolic mode that is turned
//! into an integer exactly once per generator:
//!
//! | mode | resolved | source |
//! |---|---|---|
//! | `Fixed` | construction | the integer itself |
//! | `Random` | first sample | system RNG |
//! | `Generate` | first sample | a [`SeedSequence`] counter hashed with a fixed seed |
//! | `Declaration` | construction | hash of a caller-supplied identity string |
//!
//! Resolution is cached in a [`SeedCell`]; a [`SeedObserver`] attached to
//! the generator is told about symbolic resolutions.

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::math::hash::squirrel5;

/// Fixed seed of the hash that turns [`SeedSequence`] counter values into
/// seeds.
pub const SEED_SEQUENCE_SEED: i32 = 0x5eed5;

/// Seed of a noise generator.
///
/// # Examples
/// ```
/// use noise_core::Seed;
///
/// let seed: Seed = 42.into();
/// assert_eq!(seed, Seed::Fixed(42));
/// assert_eq!("random".parse::<Seed>().unwrap(), Seed::Random);
/// assert_eq!(
///     "declaration:terrain".parse::<Seed>().unwrap(),
///     Seed::declaration("terrain")
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SeedRepr", into = "SeedRepr")]
pub enum Seed {
    /// A concrete seed.
    Fixed(i32),
    /// Drawn from the system RNG on first use.
    Random,
    /// Drawn from a counter on first use.
    ///
    /// Only generators holding clones of the same [`SeedSequence`] receive
    /// distinct seeds. [`Seed::generate`] and parsing `"generate"` each start
    /// a fresh sequence, so seeds built that way all resolve to the first
    /// value, `squirrel5(SEED_SEQUENCE_SEED, 0)`.
    Generate(SeedSequence),
    /// Derived from a call-site identity token at construction.
    Declaration(Cow<'static, str>),
}

impl Default for Seed {
    fn default() -> Self {
        Seed::Fixed(0)
    }
}

impl From<i32> for Seed {
    fn from(value: i32) -> Self {
        Seed::Fixed(value)
    }
}

impl Seed {
    /// A `Generate` seed with its own fresh counter.
    ///
    /// Generators built from separate calls do not share state, so they all
    /// receive the first value of the sequence. Share one [`SeedSequence`]
    /// through [`Seed::Generate`] to hand out distinct seeds.
    pub fn generate() -> Self {
        Seed::Generate(SeedSequence::new())
    }

    /// A `Declaration` seed from an explicit identity token.
    pub fn declaration(token: impl Into<Cow<'static, str>>) -> Self {
        Seed::Declaration(token.into())
    }

    /// A `Declaration` seed identified by the caller's source location.
    ///
    /// Two calls on different lines produce different seeds; the same line
    /// always produces the same seed.
    #[track_caller]
    pub fn here() -> Self {
        let location = Location::caller();
        Seed::Declaration(Cow::Owned(format!(
            "{}:{}:{}",
            location.file(),
            location.line(),
            location.column()
        )))
    }

    /// Whether the seed is a symbolic mode rather than a fixed integer.
    pub fn is_symbolic(&self) -> bool {
        !matches!(self, Seed::Fixed(_))
    }

    /// Short mode name used in logs.
    pub fn mode(&self) -> &'static str {
        match self {
            Seed::Fixed(_) => "fixed",
            Seed::Random => "random",
            Seed::Generate(_) => "generate",
            Seed::Declaration(_) => "declaration",
        }
    }

    /// Turn the seed into an integer.
    ///
    /// `Random` and `Generate` draw a fresh value on every call; generators
    /// cache the first one through [`SeedCell`].
    pub fn resolve(&self) -> i32 {
        match self {
            Seed::Fixed(value) => *value,
            Seed::Random => rand::random::<i32>(),
            Seed::Generate(sequence) => sequence.next_seed(),
            Seed::Declaration(token) => declaration_hash(token),
        }
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Fixed(value) => write!(f, "{}", value),
            Seed::Declaration(token) => write!(f, "declaration:{}", token),
            other => f.write_str(other.mode()),
        }
    }
}

/// Parses `<i32>`, `random`, `generate` or `declaration:<token>`.
///
/// `generate` yields a seed with its own fresh [`SeedSequence`].
impl FromStr for Seed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i32>() {
            return Ok(Seed::Fixed(value));
        }
        match trimmed.to_lowercase().as_str() {
            "random" => return Ok(Seed::Random),
            "generate" => return Ok(Seed::generate()),
            _ => {}
        }
        match trimmed.split_once(':') {
            Some((mode, token)) if mode.eq_ignore_ascii_case("declaration") && !token.is_empty() => {
                Ok(Seed::declaration(token.to_string()))
            }
            _ => Err(format!(
                "Invalid seed: {}. Expected an i32, 'random', 'generate' or 'declaration:<token>'",
                s
            )),
        }
    }
}

/// Serialised form of [`Seed`]: an integer or a mode string.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum SeedRepr {
    Fixed(i32),
    Named(String),
}

impl TryFrom<SeedRepr> for Seed {
    type Error = String;

    fn try_from(repr: SeedRepr) -> Result<Self, Self::Error> {
        match repr {
            SeedRepr::Fixed(value) => Ok(Seed::Fixed(value)),
            SeedRepr::Named(name) => name.parse(),
        }
    }
}

impl From<Seed> for SeedRepr {
    fn from(seed: Seed) -> Self {
        match seed {
            Seed::Fixed(value) => SeedRepr::Fixed(value),
            other => SeedRepr::Named(other.to_string()),
        }
    }
}

/// Hash of a declaration token: `s = 31 * s + unit` over its UTF-16 code
/// units, in wrapping 32-bit arithmetic.
///
/// # Examples
/// ```
/// use noise_core::types::seed::declaration_hash;
///
/// assert_eq!(declaration_hash(""), 0);
/// assert_eq!(declaration_hash("a"), 97);
/// assert_eq!(declaration_hash("ab"), 97 * 31 + 98);
/// ```
pub fn declaration_hash(token: &str) -> i32 {
    token
        .encode_utf16()
        .fold(0i32, |s, unit| s.wrapping_mul(31).wrapping_add(unit as i32))
}

/// Shared counter handing out seeds for [`Seed::Generate`].
///
/// Clones share the same counter, so generators built from clones of one
/// sequence receive distinct seeds. The counter is explicit state owned by
/// whoever creates the sequence; nothing is process-global.
///
/// # Examples
/// ```
/// use noise_core::SeedSequence;
///
/// let sequence = SeedSequence::new();
/// let a = sequence.next_seed();
/// let b = sequence.clone().next_seed();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SeedSequence {
    counter: Arc<AtomicU32>,
}

impl SeedSequence {
    /// A sequence starting at counter value 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// A sequence starting at an arbitrary counter value.
    pub fn starting_at(start: u32) -> Self {
        Self {
            counter: Arc::new(AtomicU32::new(start)),
        }
    }

    /// Draw the next seed and advance the counter.
    pub fn next_seed(&self) -> i32 {
        let index = self.counter.fetch_add(1, Ordering::Relaxed);
        squirrel5(SEED_SEQUENCE_SEED, index as i32)
    }

    /// Number of seeds drawn so far plus the starting value.
    pub fn position(&self) -> u32 {
        self.counter.load(Ordering::Relaxed)
    }
}

impl PartialEq for SeedSequence {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.counter, &other.counter)
    }
}

/// Callback told about symbolic seed resolutions.
#[derive(Clone)]
pub struct SeedObserver(Arc<dyn Fn(i32) + Send + Sync>);

impl SeedObserver {
    /// Wrap a callback.
    pub fn new(callback: impl Fn(i32) + Send + Sync + 'static) -> Self {
        Self(Arc::new(callback))
    }

    /// Invoke the callback.
    pub fn notify(&self, seed: i32) {
        (self.0)(seed)
    }
}

impl fmt::Debug for SeedObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SeedObserver(..)")
    }
}

impl PartialEq for SeedObserver {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// One-shot resolution of a [`Seed`].
///
/// `Fixed` and `Declaration` seeds resolve when the cell is built; `Random`
/// and `Generate` seeds resolve on the first [`SeedCell::get`]. The observer
/// runs exactly once, for symbolic seeds only, and must not sample from the
/// generator that owns the cell.
#[derive(Debug)]
pub struct SeedCell {
    seed: Seed,
    resolved: OnceLock<i32>,
    observer: Option<SeedObserver>,
}

impl SeedCell {
    /// Build a cell, resolving eagerly where the mode requires it.
    pub fn new(seed: Seed, observer: Option<SeedObserver>) -> Self {
        let cell = Self {
            seed,
            resolved: OnceLock::new(),
            observer,
        };
        match &cell.seed {
            Seed::Fixed(value) => {
                let _ = cell.resolved.set(*value);
            }
            Seed::Declaration(_) => {
                cell.get();
            }
            Seed::Random | Seed::Generate(_) => {}
        }
        cell
    }

    /// The seed this cell resolves.
    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// The resolved seed, resolving it on first use.
    #[inline]
    pub fn get(&self) -> i32 {
        *self.resolved.get_or_init(|| {
            let value = self.seed.resolve();
            debug!(mode = self.seed.mode(), seed = value, "resolved symbolic seed");
            if let Some(observer) = &self.observer {
                observer.notify(value);
            }
            value
        })
    }

    /// The resolved seed if resolution already happened.
    pub fn peek(&self) -> Option<i32> {
        self.resolved.get().copied()
    }
}
