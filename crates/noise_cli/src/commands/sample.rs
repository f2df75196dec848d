//! Sample command implementation
//!
//! Draws a batch from one sampler and tabulates it.

use serde_json::json;
use tracing::info;

use noise_core::NoiseOptions;

use super::{build_sampler, draw_batch, observed, SamplerKind, SamplerParams};
use crate::output::Table;
use crate::Result;

/// Draw `count` samples of `kind` starting at `params.start`.
pub fn table(
    kind: SamplerKind,
    params: &SamplerParams,
    options: NoiseOptions,
    count: usize,
) -> Result<Table> {
    let sampler = build_sampler(kind, params, observed(options))?;
    let draws = draw_batch(&sampler, params.start, count);

    let mut table = Table::new(std::iter::once("index").chain(kind.columns().iter().copied()));
    for (offset, draw) in draws.iter().enumerate() {
        let mut row = vec![json!(params.start.wrapping_add(offset as i64))];
        row.extend(draw.cells());
        table.push(row);
    }
    info!(?kind, rows = table.len(), start = params.start, "Sampled batch");
    Ok(table)
}
