//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. The sampler kinds and
//! their parameters are shared by `sample` and `stats`.

pub mod hash;
pub mod sample;
pub mod stats;

use clap::{Args, ValueEnum};
use rayon::prelude::*;
use serde_json::{json, Value};
use tracing::info;

use noise_core::samplers::{
    Ball, Boolean, Dice, Disc, ListPick, Normal, Poisson, UnitCircle, UnitSphere,
};
use noise_core::{Coord, Noise, NoiseOptions, Sampler};

use crate::Result;

/// Sampler selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SamplerKind {
    /// Uniform number, raw hash or scaled by --lo/--hi
    Number,
    /// Fair coin
    Boolean,
    /// Item of --items, optionally --weights
    List,
    /// Gaussian with --mean/--stddev
    Normal,
    /// Poisson count with --lambda
    Poisson,
    /// Point on the unit circle
    Circle,
    /// Point on the unit sphere
    Sphere,
    /// Point in a disc or annulus, --inner/--outer
    Disc,
    /// Point in a ball or shell, --inner/--outer
    Ball,
    /// Sum of --dice
    Dice,
}

impl SamplerKind {
    /// Output columns after the index column.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            SamplerKind::Number | SamplerKind::Boolean | SamplerKind::Normal => &["value"],
            SamplerKind::List => &["item"],
            SamplerKind::Poisson => &["count"],
            SamplerKind::Dice => &["total"],
            SamplerKind::Circle | SamplerKind::Disc => &["x", "y"],
            SamplerKind::Sphere | SamplerKind::Ball => &["x", "y", "z"],
        }
    }
}

/// Parameters shared by the sampler kinds
#[derive(Debug, Clone, Args)]
pub struct SamplerParams {
    /// Lower bound for `number`
    #[arg(long, allow_negative_numbers = true)]
    pub lo: Option<f64>,

    /// Upper bound for `number`
    #[arg(long, allow_negative_numbers = true)]
    pub hi: Option<f64>,

    /// Floor `number` output to integers
    #[arg(long)]
    pub discrete: bool,

    /// Items for `list` (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub items: Vec<String>,

    /// Weights for `list` (comma separated, missing weights count as 1)
    #[arg(long, value_delimiter = ',')]
    pub weights: Vec<f64>,

    /// Rate for `poisson`
    #[arg(long, default_value_t = 1.0)]
    pub lambda: f64,

    /// Mean for `normal`
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub mean: f64,

    /// Standard deviation for `normal`
    #[arg(long, default_value_t = 1.0)]
    pub stddev: f64,

    /// Inner radius for `disc` and `ball`
    #[arg(long, default_value_t = 0.0)]
    pub inner: f64,

    /// Outer radius for `disc` and `ball`
    #[arg(long, default_value_t = 1.0)]
    pub outer: f64,

    /// Dice notation for `dice`, e.g. 2d6 or d6+d8
    #[arg(long, default_value = "d6")]
    pub dice: String,

    /// First position along the x axis
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub start: i64,
}

impl Default for SamplerParams {
    fn default() -> Self {
        Self {
            lo: None,
            hi: None,
            discrete: false,
            items: Vec::new(),
            weights: Vec::new(),
            lambda: 1.0,
            mean: 0.0,
            stddev: 1.0,
            inner: 0.0,
            outer: 1.0,
            dice: "d6".to_string(),
            start: 0,
        }
    }
}

/// One sampled value of any kind
#[derive(Debug, Clone, PartialEq)]
pub enum Draw {
    Number(f64),
    Flag(bool),
    Count(u32),
    Item(String),
    Point(Vec<f64>),
}

impl Draw {
    /// Cells for the output table, one per column.
    pub fn cells(&self) -> Vec<Value> {
        match self {
            Draw::Number(v) => vec![json!(v)],
            Draw::Flag(b) => vec![json!(b)],
            Draw::Count(n) => vec![json!(n)],
            Draw::Item(s) => vec![json!(s)],
            Draw::Point(p) => p.iter().map(|c| json!(c)).collect(),
        }
    }

    /// Scalar used for summary statistics.
    ///
    /// Flags count as 0 or 1 and points by their distance from the origin;
    /// list items have no scalar value.
    pub fn value(&self) -> Option<f64> {
        match self {
            Draw::Number(v) => Some(*v),
            Draw::Flag(b) => Some(if *b { 1.0 } else { 0.0 }),
            Draw::Count(n) => Some(*n as f64),
            Draw::Item(_) => None,
            Draw::Point(p) => Some(p.iter().map(|c| c * c).sum::<f64>().sqrt()),
        }
    }

    /// Label for frequency counts of categorical draws.
    pub fn label(&self) -> Option<String> {
        match self {
            Draw::Flag(b) => Some(b.to_string()),
            Draw::Item(s) => Some(s.clone()),
            _ => None,
        }
    }
}

/// Type-erased sampler producing [`Draw`]s.
pub type DynSampler = Box<dyn Sampler<Output = Draw> + Send + Sync>;

/// Attach an observer that logs symbolic seeds as they resolve.
pub fn observed(options: NoiseOptions) -> NoiseOptions {
    options.with_on_seed(|seed| info!(seed, "Resolved symbolic seed"))
}

/// Build the sampler for `kind` from `params` and `options`.
pub fn build_sampler(
    kind: SamplerKind,
    params: &SamplerParams,
    options: NoiseOptions,
) -> Result<DynSampler> {
    let sampler: DynSampler = match kind {
        SamplerKind::Number => {
            let options = match (params.lo, params.hi) {
                (None, None) => options,
                (lo, hi) => options.with_range(lo.unwrap_or(0.0), hi.unwrap_or(1.0)),
            };
            let options = if params.discrete {
                options.with_discrete(true)
            } else {
                options
            };
            Box::new(Noise::new(options)?.map(Draw::Number))
        }
        SamplerKind::Boolean => Box::new(Boolean::new(options)?.map(Draw::Flag)),
        SamplerKind::List => {
            let items = params.items.clone();
            let pick = if params.weights.is_empty() {
                ListPick::uniform(items, options)?
            } else {
                ListPick::weighted(items, &params.weights, options)?
            };
            Box::new(pick.map(Draw::Item))
        }
        SamplerKind::Normal => {
            let normal = Normal::new(options)?
                .with_mean(params.mean)
                .with_stddev(params.stddev)?;
            Box::new(normal.map(Draw::Number))
        }
        SamplerKind::Poisson => Box::new(Poisson::new(params.lambda, options)?.map(Draw::Count)),
        SamplerKind::Circle => {
            Box::new(UnitCircle::new(options)?.map(|p: [f64; 2]| Draw::Point(p.to_vec())))
        }
        SamplerKind::Sphere => {
            Box::new(UnitSphere::new(options)?.map(|p: [f64; 3]| Draw::Point(p.to_vec())))
        }
        SamplerKind::Disc => {
            let disc = Disc::new(options)?.with_radii(params.inner, params.outer)?;
            Box::new(disc.map(|p: [f64; 2]| Draw::Point(p.to_vec())))
        }
        SamplerKind::Ball => {
            let ball = Ball::new(options)?.with_radii(params.inner, params.outer)?;
            Box::new(ball.map(|p: [f64; 3]| Draw::Point(p.to_vec())))
        }
        SamplerKind::Dice => Box::new(Dice::parse(&params.dice, options)?.map(Draw::Count)),
    };
    Ok(sampler)
}

/// Evaluate `count` consecutive positions from `start` in parallel.
pub fn draw_batch(sampler: &DynSampler, start: i64, count: usize) -> Vec<Draw> {
    (0..count)
        .into_par_iter()
        .map(|i| sampler.sample_at(Coord::from(start.wrapping_add(i as i64))))
        .collect()
}
