//! Stats command implementation
//!
//! Summarises a sample batch: moments and extremes of the scalar value of
//! each draw, plus frequencies for categorical kinds.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde_json::json;
use tracing::info;

use noise_core::NoiseOptions;

use super::{build_sampler, draw_batch, observed, SamplerKind, SamplerParams};
use crate::output::Table;
use crate::Result;

/// Population statistics of a batch of values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub stddev: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    /// Summarise `values`; `None` when empty.
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let n = values.len() as f64;
        let mean = values.par_iter().sum::<f64>() / n;
        let variance = values.par_iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / n;
        let min = values.par_iter().copied().reduce(|| f64::INFINITY, f64::min);
        let max = values
            .par_iter()
            .copied()
            .reduce(|| f64::NEG_INFINITY, f64::max);
        Some(Self {
            count: values.len(),
            mean,
            stddev: variance.sqrt(),
            min,
            max,
        })
    }
}

/// Summarise `count` samples of `kind` starting at `params.start`.
pub fn table(
    kind: SamplerKind,
    params: &SamplerParams,
    options: NoiseOptions,
    count: usize,
) -> Result<Table> {
    let sampler = build_sampler(kind, params, observed(options))?;
    let draws = draw_batch(&sampler, params.start, count);

    let mut table = Table::new(["statistic", "value"]);
    table.push(vec![json!("count"), json!(draws.len())]);

    let values: Vec<f64> = draws.iter().filter_map(|d| d.value()).collect();
    if let Some(summary) = Summary::of(&values) {
        info!(?kind, count, mean = summary.mean, stddev = summary.stddev, "Summarised batch");
        table.push(vec![json!("mean"), json!(summary.mean)]);
        table.push(vec![json!("stddev"), json!(summary.stddev)]);
        table.push(vec![json!("min"), json!(summary.min)]);
        table.push(vec![json!("max"), json!(summary.max)]);
    }

    let mut frequencies: BTreeMap<String, usize> = BTreeMap::new();
    for label in draws.iter().filter_map(|d| d.label()) {
        *frequencies.entry(label).or_default() += 1;
    }
    for (label, n) in frequencies {
        table.push(vec![json!(format!("freq[{}]", label)), json!(n)]);
    }

    Ok(table)
}
