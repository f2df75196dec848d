//! The `Sampler` trait and its combinators.

use crate::types::Coord;

/// A deterministic function from coordinates to values.
///
/// Implementors supply [`sample_at`](Sampler::sample_at); everything else
/// is provided. The same coordinate always yields the same output.
///
/// # Examples
/// ```
/// use noise_core::{Noise, NoiseOptions, Sampler};
///
/// let noise = Noise::new(NoiseOptions::default().with_range(0.0, 1.0)).unwrap();
///
/// // Any Into<Coord> works as a coordinate
/// let a = noise.sample(3);
/// let b = noise.sample((3.0,));
/// assert_eq!(a, b);
///
/// // Consecutive integer coordinates, starting at 0
/// let first: Vec<f64> = noise.sequence().take(3).collect();
/// assert_eq!(first[0], noise.sample(0));
///
/// // Output transforms compose
/// let percent = noise.clone().map(|v| (v * 100.0).round() as u8);
/// assert!(percent.sample(3) <= 100);
/// ```
pub trait Sampler {
    /// Type of the sampled value.
    type Output;

    /// Sample at a coordinate.
    fn sample_at(&self, coord: Coord) -> Self::Output;

    /// Sample at anything convertible to a coordinate.
    #[inline]
    fn sample<C: Into<Coord>>(&self, coord: C) -> Self::Output
    where
        Self: Sized,
    {
        self.sample_at(coord.into())
    }

    /// Iterator over the coordinates `0, 1, 2, ...`.
    fn sequence(&self) -> Sequence<'_, Self>
    where
        Self: Sized,
    {
        Sequence::new(self, 0, 1)
    }

    /// Iterator over the coordinates `start, start + step, ...`.
    fn sequence_from(&self, start: i64, step: i64) -> Sequence<'_, Self>
    where
        Self: Sized,
    {
        Sequence::new(self, start, step)
    }

    /// Iterator over the coordinates `1, 2, 3, ...`.
    ///
    /// Behaves like an ordinary random number stream: each call to `next`
    /// moves one step along the first axis.
    fn stream(&self) -> Sequence<'_, Self>
    where
        Self: Sized,
    {
        Sequence::new(self, 1, 1)
    }

    /// Sampler applying `f` to every output.
    fn map<T, F>(self, f: F) -> Mapped<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Output) -> T,
    {
        Mapped { inner: self, f }
    }
}

impl<S: Sampler + ?Sized> Sampler for &S {
    type Output = S::Output;

    #[inline]
    fn sample_at(&self, coord: Coord) -> Self::Output {
        (**self).sample_at(coord)
    }
}

impl<S: Sampler + ?Sized> Sampler for Box<S> {
    type Output = S::Output;

    #[inline]
    fn sample_at(&self, coord: Coord) -> Self::Output {
        (**self).sample_at(coord)
    }
}

/// Sampler transforming the output of another sampler.
///
/// Built by [`Sampler::map`].
#[derive(Debug, Clone)]
pub struct Mapped<S, F> {
    inner: S,
    f: F,
}

impl<S, F, T> Sampler for Mapped<S, F>
where
    S: Sampler,
    F: Fn(S::Output) -> T,
{
    type Output = T;

    #[inline]
    fn sample_at(&self, coord: Coord) -> T {
        (self.f)(self.inner.sample_at(coord))
    }
}

/// Unbounded iterator sampling along the first axis.
///
/// The counter belongs to the iterator; calling
/// [`Sampler::sequence`] again restarts from the beginning. The counter
/// wraps on `i64` overflow.
#[derive(Debug)]
pub struct Sequence<'a, S: ?Sized> {
    sampler: &'a S,
    next: i64,
    step: i64,
}

impl<'a, S: ?Sized> Sequence<'a, S> {
    fn new(sampler: &'a S, start: i64, step: i64) -> Self {
        Self {
            sampler,
            next: start,
            step,
        }
    }

    /// Coordinate the next item will be sampled at.
    pub fn position(&self) -> i64 {
        self.next
    }
}

impl<S: ?Sized> Clone for Sequence<'_, S> {
    fn clone(&self) -> Self {
        Self {
            sampler: self.sampler,
            next: self.next,
            step: self.step,
        }
    }
}

impl<S: Sampler + ?Sized> Iterator for Sequence<'_, S> {
    type Item = S::Output;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let position = self.next;
        self.next = self.next.wrapping_add(self.step);
        Some(self.sampler.sample_at(Coord::from(position)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.next = self
            .next
            .wrapping_add(self.step.wrapping_mul(n as i64));
        self.next()
    }
}

macro_rules! impl_sampler_for_tuple {
    ($($ty:ident => $idx:tt),+) => {
        impl<$($ty: Sampler),+> Sampler for ($($ty,)+) {
            type Output = ($($ty::Output,)+);

            #[inline]
            fn sample_at(&self, coord: Coord) -> Self::Output {
                ($(self.$idx.sample_at(coord),)+)
            }
        }
    };
}

impl_sampler_for_tuple!(A => 0, B => 1);
impl_sampler_for_tuple!(A => 0, B => 1, C => 2);
impl_sampler_for_tuple!(A => 0, B => 1, C => 2, D => 3);
