//! Dice rolls.

use std::fmt;
use std::str::FromStr;

use super::base_noise;
use crate::noise::Noise;
use crate::traits::Sampler;
use crate::types::{Coord, NoiseError, NoiseOptions};

/// Most dice a single set may hold.
pub const MAX_DICE: usize = 1000;

/// One die: uniform on `[1, sides]`.
#[derive(Debug, Clone)]
struct Die {
    noise: Noise,
    sides: u32,
}

impl Die {
    #[inline]
    fn roll(&self, coord: Coord) -> u32 {
        (self.noise.sample_at(coord) as u32).clamp(1, self.sides)
    }
}

/// Sum of one or more dice, each rolled on its own channel.
///
/// # Examples
/// ```
/// use noise_core::samplers::Dice;
/// use noise_core::{NoiseOptions, Sampler};
///
/// let two_d6 = Dice::new(&[6, 6], NoiseOptions::default()).unwrap();
/// let total = two_d6.sample(0);
/// assert!((2..=12).contains(&total));
///
/// let d20 = Dice::single(20, NoiseOptions::default()).unwrap();
/// assert!((1..=20).contains(&d20.sample(0)));
/// ```
#[derive(Debug, Clone)]
pub struct Dice {
    dice: Vec<Die>,
}

impl Dice {
    /// Dice with the given numbers of sides.
    ///
    /// # Returns
    ///
    /// * `Err(NoiseError::InvalidDice)` - no dice, more than [`MAX_DICE`], a
    ///   die with zero sides, or a maximum total above `u32::MAX`
    pub fn new(sides: &[u32], options: NoiseOptions) -> Result<Self, NoiseError> {
        if sides.is_empty() {
            return Err(NoiseError::InvalidDice("at least one die is required".to_string()));
        }
        if sides.len() > MAX_DICE {
            return Err(too_many_dice(sides.len()));
        }
        if let Some(index) = sides.iter().position(|&s| s == 0) {
            return Err(NoiseError::InvalidDice(format!("die {} has no sides", index)));
        }
        let max_total: u64 = sides.iter().map(|&s| u64::from(s)).sum();
        if max_total > u64::from(u32::MAX) {
            return Err(NoiseError::InvalidDice(format!(
                "maximum total {} does not fit in u32",
                max_total
            )));
        }
        let base = base_noise(options)?;
        let dice = sides
            .iter()
            .enumerate()
            .map(|(channel, &sides)| {
                let noise = base
                    .channel_with_range(channel, 1.0, sides as f64 + 1.0)?
                    .with_discrete(true);
                Ok(Die { noise, sides })
            })
            .collect::<Result<Vec<_>, NoiseError>>()?;
        Ok(Self { dice })
    }

    /// A single die.
    pub fn single(sides: u32, options: NoiseOptions) -> Result<Self, NoiseError> {
        Self::new(&[sides], options)
    }

    /// Dice from notation such as `"2d6"`, `"d20"` or `"d6,d8"`.
    pub fn parse(notation: &str, options: NoiseOptions) -> Result<Self, NoiseError> {
        let set: DiceSet = notation.parse()?;
        Self::new(&set.0, options)
    }

    /// Number of sides of each die.
    pub fn sides(&self) -> Vec<u32> {
        self.dice.iter().map(|d| d.sides).collect()
    }

    /// Each die's roll at `coord`.
    pub fn rolls_at(&self, coord: Coord) -> Vec<u32> {
        self.dice.iter().map(|d| d.roll(coord)).collect()
    }
}

impl Sampler for Dice {
    type Output = u32;

    #[inline]
    fn sample_at(&self, coord: Coord) -> u32 {
        self.dice.iter().map(|d| d.roll(coord)).sum()
    }
}

/// Parsed dice notation: the sides of every die.
///
/// Terms are separated by commas or `+`; each term is `NdS` or `dS`.
///
/// # Examples
/// ```
/// use noise_core::samplers::dice::DiceSet;
///
/// let set: DiceSet = "2d6+d8".parse().unwrap();
/// assert_eq!(set.0, vec![6, 6, 8]);
/// assert_eq!(set.to_string(), "d6+d6+d8");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceSet(pub Vec<u32>);

impl FromStr for DiceSet {
    type Err = NoiseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |term: &str| NoiseError::InvalidDice(format!("cannot parse '{}'", term));
        let mut sides = Vec::new();
        let terms = s
            .split(|c: char| c == ',' || c == '+')
            .map(str::trim)
            .filter(|t| !t.is_empty());
        for term in terms {
            let (count, faces) = term
                .split_once(|c: char| c == 'd' || c == 'D')
                .ok_or_else(|| invalid(term))?;
            let count = if count.is_empty() {
                1
            } else {
                count.parse::<usize>().map_err(|_| invalid(term))?
            };
            if count == 0 {
                return Err(NoiseError::InvalidDice(format!("'{}' rolls zero dice", term)));
            }
            let total = sides.len().saturating_add(count);
            if total > MAX_DICE {
                return Err(too_many_dice(total));
            }
            let faces = faces.parse::<u32>().map_err(|_| invalid(term))?;
            sides.extend(std::iter::repeat(faces).take(count));
        }
        Ok(DiceSet(sides))
    }
}

fn too_many_dice(count: usize) -> NoiseError {
    NoiseError::InvalidDice(format!("{} dice exceed the limit of {}", count, MAX_DICE))
}

impl fmt::Display for DiceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<String> = self.0.iter().map(|s| format!("d{}", s)).collect();
        f.write_str(&terms.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_d6_is_fair() {
        let d6 = Dice::single(6, NoiseOptions::default()).unwrap();
        let mut counts = [0usize; 7];
        for roll in d6.sequence().take(60_000) {
            counts[roll as usize] += 1;
        }
        assert_eq!(counts[0], 0);
        for &count in &counts[1..] {
            assert!((count as f64 - 10_000.0).abs() < 500.0, "{:?}", counts);
        }
    }

    #[test]
    fn test_two_dice_mean_and_independence() {
        let dice = Dice::new(&[6, 6], NoiseOptions::default()).unwrap();
        let n = 50_000;
        let rolls: Vec<Vec<u32>> = (0..n).map(|i| dice.rolls_at(Coord::from(i))).collect();
        let mean = rolls.iter().map(|r| (r[0] + r[1]) as f64).sum::<f64>() / n as f64;
        assert!((mean - 7.0).abs() < 0.05, "mean {}", mean);
        let doubles = rolls.iter().filter(|r| r[0] == r[1]).count() as f64 / n as f64;
        assert!((doubles - 1.0 / 6.0).abs() < 0.01, "doubles {}", doubles);
        assert_eq!(dice.sample(3), rolls[3].iter().sum::<u32>());
    }

    #[test]
    fn test_one_sided_die() {
        let d1 = Dice::single(1, NoiseOptions::default()).unwrap();
        assert!(d1.sequence().take(100).all(|r| r == 1));
    }

    #[test]
    fn test_invalid_dice() {
        assert!(matches!(
            Dice::new(&[], NoiseOptions::default()),
            Err(NoiseError::InvalidDice(_))
        ));
        assert!(matches!(
            Dice::new(&[6, 0], NoiseOptions::default()),
            Err(NoiseError::InvalidDice(_))
        ));
        assert!(matches!(
            Dice::new(&vec![6; MAX_DICE + 1], NoiseOptions::default()),
            Err(NoiseError::InvalidDice(_))
        ));
    }

    #[test]
    fn test_total_must_fit_u32() {
        assert!(matches!(
            Dice::new(&[u32::MAX, u32::MAX], NoiseOptions::default()),
            Err(NoiseError::InvalidDice(_))
        ));
        assert!(matches!(
            Dice::new(&[u32::MAX, 1], NoiseOptions::default()),
            Err(NoiseError::InvalidDice(_))
        ));

        let dice = Dice::new(&[u32::MAX - 1, 1], NoiseOptions::default()).unwrap();
        for i in 0..1_000 {
            let total = dice.sample(i);
            assert!(total >= 2);
        }
        let big = Dice::single(u32::MAX, NoiseOptions::default()).unwrap();
        assert!(big.sequence().take(1_000).all(|r| r >= 1));
    }

    #[test]
    fn test_notation() {
        assert_eq!("3d4".parse::<DiceSet>().unwrap(), DiceSet(vec![4, 4, 4]));
        assert_eq!("d6, d10".parse::<DiceSet>().unwrap(), DiceSet(vec![6, 10]));
        assert!("six".parse::<DiceSet>().is_err());
        assert!("2dx".parse::<DiceSet>().is_err());
        assert!(matches!(
            "100000000000d6".parse::<DiceSet>(),
            Err(NoiseError::InvalidDice(_))
        ));
        assert!(matches!(
            "0d6".parse::<DiceSet>(),
            Err(NoiseError::InvalidDice(_))
        ));
        assert!("1001d6".parse::<DiceSet>().is_err());
        assert!("600d6+401d4".parse::<DiceSet>().is_err());
        assert_eq!("1000d6".parse::<DiceSet>().unwrap().0.len(), MAX_DICE);

        let dice = Dice::parse("2d8", NoiseOptions::default()).unwrap();
        assert_eq!(dice.sides(), vec![8, 8]);
        assert!(Dice::parse("", NoiseOptions::default()).is_err());
    }
}
