//! Order locations from CSV.

use anyhow::{Context, Result};
use polars::prelude::*;
use softzone::Point2;
use std::path::Path;

/// Read `x_col`/`y_col` from a CSV file as order locations.
///
/// Columns are cast to f64; rows with a missing or non-finite coordinate are
/// skipped. Row order is preserved, which fixes the order indices in outputs.
pub fn load_orders(path: &Path, x_col: &str, y_col: &str) -> Result<Vec<Point2>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col(x_col).cast(DataType::Float64),
            col(y_col).cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading columns {x_col:?}, {y_col:?} from {}", path.display()))?;
    let xs = df.column(x_col)?.f64()?;
    let ys = df.column(y_col)?.f64()?;
    let mut out = Vec::with_capacity(df.height());
    let mut skipped = 0usize;
    for (x, y) in xs.into_iter().zip(ys.into_iter()) {
        match (x, y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => out.push(Point2::new(x, y)),
            _ => skipped += 1,
        }
    }
    tracing::info!(rows = df.height(), orders = out.len(), skipped, "orders_loaded");
    Ok(out)
}
