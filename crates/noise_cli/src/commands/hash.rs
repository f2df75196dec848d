//! Hash command implementation
//!
//! Prints raw bit-mix hashes for consecutive positions.

use serde_json::json;
use tracing::info;

use noise_core::math::scale::unit_closed;
use noise_core::{HashAlgorithm, Seed};

use crate::output::Table;
use crate::{CliError, Result};

/// Hash `count` positions from `position` under `seed`.
pub fn table(seed: &Seed, position: i32, count: usize, algorithm: HashAlgorithm) -> Result<Table> {
    if count == 0 {
        return Err(CliError::InvalidArgument(
            "count must be at least 1".to_string(),
        ));
    }
    let resolved = seed.resolve();
    if seed.is_symbolic() {
        info!(seed = %seed, resolved, "Resolved symbolic seed");
    }

    let mut table = Table::new(["seed", "position", "algorithm", "hash", "unit"]);
    for offset in 0..count {
        let p = position.wrapping_add(offset as i32);
        let hash = algorithm.hash(resolved, p);
        table.push(vec![
            json!(resolved),
            json!(p),
            json!(algorithm.name()),
            json!(hash),
            json!(unit_closed(hash as f64)),
        ]);
    }
    Ok(table)
}
