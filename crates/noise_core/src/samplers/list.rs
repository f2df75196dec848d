//! Uniform and weighted picks from a list.
//!
//! Weighted picks scale the hash onto `[0, total)` and locate the owning
//! interval in a cumulative table:
//!
//! ```text
//! weights  [1, 1, 2]
//! upper    [1, 2, 4]     item i owns [upper[i-1], upper[i])
//! x = 2.7  -> first upper bound above x is 4 -> item 2
//! ```

use tracing::debug;

use super::base_noise;
use crate::noise::Noise;
use crate::traits::Sampler;
use crate::types::{Coord, NoiseError, NoiseOptions};

/// Cumulative weight table over `n` items.
#[derive(Debug, Clone, PartialEq)]
struct CumulativeWeights {
    upper: Vec<f64>,
    last_positive: usize,
}

impl CumulativeWeights {
    /// Table for `len` items; weights beyond the given ones default to 1.
    fn new(len: usize, weights: &[f64]) -> Result<Self, NoiseError> {
        let mut upper = Vec::with_capacity(len);
        let mut total = 0.0;
        let mut last_positive = 0;
        for index in 0..len {
            let weight = weights.get(index).copied().unwrap_or(1.0);
            if !weight.is_finite() {
                return Err(NoiseError::InvalidWeight {
                    index,
                    reason: format!("weight {} is not finite", weight),
                });
            }
            if weight < 0.0 {
                return Err(NoiseError::InvalidWeight {
                    index,
                    reason: format!("weight {} is negative", weight),
                });
            }
            if weight > 0.0 {
                last_positive = index;
            }
            total += weight;
            upper.push(total);
        }
        if total <= 0.0 {
            return Err(NoiseError::InvalidParameter {
                name: "weights",
                reason: "total weight must be positive".to_string(),
            });
        }
        Ok(Self {
            upper,
            last_positive,
        })
    }

    #[inline]
    fn total(&self) -> f64 {
        self.upper.last().copied().unwrap_or(0.0)
    }

    /// Index of the half-open interval containing `x`.
    ///
    /// `x >= total` maps to the last item with positive weight.
    #[inline]
    fn locate(&self, x: f64) -> usize {
        let index = self.upper.partition_point(|&bound| bound <= x);
        index.min(self.last_positive)
    }
}

/// Picks an item of a list, uniformly or by weight.
///
/// # Examples
/// ```
/// use noise_core::samplers::ListPick;
/// use noise_core::{NoiseOptions, Sampler};
///
/// let pick = ListPick::weighted(
///     vec!['a', 'b', 'c'],
///     &[1.0, 1.0, 2.0],
///     NoiseOptions::default().with_seed(3),
/// )
/// .unwrap();
/// assert_eq!(pick.sample(0), 'c');
/// assert_eq!(*pick.pick(0), 'c');
/// ```
#[derive(Debug, Clone)]
pub struct ListPick<T> {
    items: Vec<T>,
    noise: Noise,
    weights: Option<CumulativeWeights>,
}

impl<T> ListPick<T> {
    /// Uniform pick over `items`.
    ///
    /// # Returns
    ///
    /// * `Err(NoiseError::EmptyList)` - `items` is empty
    pub fn uniform(items: Vec<T>, options: NoiseOptions) -> Result<Self, NoiseError> {
        Self::weighted(items, &[], options)
    }

    /// Weighted pick over `items`.
    ///
    /// Item `i` is chosen with probability `weights[i] / total`. Items
    /// without a weight get weight 1, and an empty `weights` slice gives a
    /// uniform pick. Zero-weight items are never chosen.
    ///
    /// # Returns
    ///
    /// * `Err(NoiseError::EmptyList)` - `items` is empty
    /// * `Err(NoiseError::InvalidWeight)` - a negative or non-finite weight
    /// * `Err(NoiseError::InvalidParameter)` - all weights are zero
    pub fn weighted(items: Vec<T>, weights: &[f64], options: NoiseOptions) -> Result<Self, NoiseError> {
        if items.is_empty() {
            return Err(NoiseError::EmptyList);
        }
        let base = base_noise(options)?;
        let (noise, weights) = if weights.is_empty() {
            let noise = base
                .channel_with_range(0, 0.0, items.len() as f64)?
                .with_discrete(true);
            (noise, None)
        } else {
            let table = CumulativeWeights::new(items.len(), weights)?;
            let noise = base.channel_with_range(0, 0.0, table.total())?;
            (noise, Some(table))
        };
        debug!(
            items = items.len(),
            weighted = weights.is_some(),
            "built list sampler"
        );
        Ok(Self {
            items,
            noise,
            weights,
        })
    }

    /// The items picked from.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Index of the item picked at `coord`.
    #[inline]
    pub fn index_at(&self, coord: Coord) -> usize {
        let x = self.noise.sample_at(coord);
        match &self.weights {
            Some(table) => table.locate(x),
            None => (x as usize).min(self.items.len() - 1),
        }
    }

    /// The item picked at `coord`, by reference.
    #[inline]
    pub fn pick<C: Into<Coord>>(&self, coord: C) -> &T {
        &self.items[self.index_at(coord.into())]
    }
}

impl<T: Clone> Sampler for ListPick<T> {
    type Output = T;

    #[inline]
    fn sample_at(&self, coord: Coord) -> T {
        self.items[self.index_at(coord)].clone()
    }
}
