//! Derived columns for [`crate::types::DataSet`].

use crate::collection::Collection;
use crate::error::{MathError, MathResult};
use crate::types::{DataSet, DataType, Field, Value};

use super::transformations::percent_by_with;

/// Returns a new [`DataSet`] with an extra `Float64` column `target` holding each row's share of
/// the `source` column's total.
///
/// Cells are read with [`Value::as_f64`], so a null or non-numeric `source` cell makes every
/// share `NaN`. A zero total is not guarded against.
///
/// # Errors
///
/// [`MathError::UnknownColumn`] if `source` is missing, [`MathError::DuplicateColumn`] if `target`
/// already exists.
pub fn with_percent_column(dataset: &DataSet, source: &str, target: &str) -> MathResult<DataSet> {
    let idx = dataset
        .schema
        .index_of(source)
        .ok_or_else(|| MathError::UnknownColumn {
            column: source.to_string(),
        })?;
    if dataset.schema.index_of(target).is_some() {
        return Err(MathError::DuplicateColumn {
            column: target.to_string(),
        });
    }

    let rows = dataset.update(percent_by_with(
        move |row: &Vec<Value>, _: &usize, _: &DataSet| {
            row.get(idx).map_or(f64::NAN, Value::as_f64)
        },
        |row: &Vec<Value>, pct: f64, _: &usize, _: &DataSet| {
            let mut out = row.clone();
            out.push(Value::Float64(pct));
            out
        },
    ));

    let mut schema = dataset.schema.clone();
    schema.fields.push(Field::new(target, DataType::Float64));
    Ok(DataSet::new(schema, rows))
}
