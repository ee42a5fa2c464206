//! Named aggregation operators and column reductions for [`crate::types::DataSet`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::collection::{Collection, Numeric};
use crate::error::MathError;
use crate::types::{DataSet, Value};

use super::aggregations::{
    average, average_by, max, max_by, median, median_by, min, min_by, sum, sum_by,
};

/// Built-in aggregations, selectable at runtime (for example from a JSON config).
///
/// Serialized in lowercase; `"mean"` is accepted as an alias for [`AggregateOp::Average`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateOp {
    /// Smallest value.
    Min,
    /// Largest value.
    Max,
    /// Sum of values.
    Sum,
    /// Arithmetic mean.
    #[serde(alias = "mean")]
    Average,
    /// Median.
    Median,
}

impl AggregateOp {
    /// Every operator, in declaration order.
    pub const ALL: [AggregateOp; 5] = [
        AggregateOp::Min,
        AggregateOp::Max,
        AggregateOp::Sum,
        AggregateOp::Average,
        AggregateOp::Median,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            AggregateOp::Min => "min",
            AggregateOp::Max => "max",
            AggregateOp::Sum => "sum",
            AggregateOp::Average => "average",
            AggregateOp::Median => "median",
        }
    }

    /// Run the operator over a numeric collection.
    pub fn apply<C>(self, input: &C) -> f64
    where
        C: Collection,
        C::Value: Numeric,
    {
        match self {
            AggregateOp::Min => min::<C>()(input),
            AggregateOp::Max => max::<C>()(input),
            AggregateOp::Sum => sum::<C>()(input),
            AggregateOp::Average => average::<C>()(input),
            AggregateOp::Median => median::<C>()(input),
        }
    }

    /// Run the operator over values read through `selector(value, key, collection)`.
    pub fn apply_by<C, F>(self, input: &C, selector: F) -> f64
    where
        C: Collection,
        F: Fn(&C::Value, &C::Key, &C) -> f64,
    {
        match self {
            AggregateOp::Min => min_by::<C, F>(selector)(input),
            AggregateOp::Max => max_by::<C, F>(selector)(input),
            AggregateOp::Sum => sum_by::<C, F>(selector)(input),
            AggregateOp::Average => average_by::<C, F>(selector)(input),
            AggregateOp::Median => median_by::<C, F>(selector)(input),
        }
    }
}

impl fmt::Display for AggregateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AggregateOp {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" => Ok(AggregateOp::Min),
            "max" => Ok(AggregateOp::Max),
            "sum" => Ok(AggregateOp::Sum),
            "average" | "mean" => Ok(AggregateOp::Average),
            "median" => Ok(AggregateOp::Median),
            _ => Err(MathError::UnknownOperation {
                name: s.to_string(),
            }),
        }
    }
}

/// Reduce a column using a built-in [`AggregateOp`].
///
/// - Returns `None` if `column` does not exist in the schema.
/// - Null cells are skipped; other cells are read with [`Value::as_f64`].
/// - With no non-null cells the usual empty-input result applies (`0.0` for `Sum`, `NaN`
///   otherwise).
pub fn reduce(dataset: &DataSet, column: &str, op: AggregateOp) -> Option<f64> {
    let idx = dataset.schema.index_of(column)?;

    let values: Vec<f64> = dataset
        .rows
        .iter()
        .filter_map(|row| match row.get(idx) {
            Some(Value::Null) | None => None,
            Some(v) => Some(v.as_f64()),
        })
        .collect();

    Some(op.apply(&values))
}

#[cfg(test)]
mod tests {
    use super::{reduce, AggregateOp};
    use crate::types::{DataSet, DataType, Field, Schema, Value};

    fn numeric_dataset_with_nulls() -> DataSet {
        let schema = Schema::new(vec![
            Field::new("id", DataType::Int64),
            Field::new("score", DataType::Float64),
        ]);

        let rows = vec![
            vec![Value::Int64(1), Value::Float64(10.0)],
            vec![Value::Int64(2), Value::Null],
            vec![Value::Int64(3), Value::Float64(5.5)],
            vec![Value::Int64(4), Value::Float64(1.5)],
        ];

        DataSet::new(schema, rows)
    }

    #[test]
    fn reduce_sum_ignores_nulls() {
        let ds = numeric_dataset_with_nulls();
        assert_eq!(reduce(&ds, "score", AggregateOp::Sum), Some(17.0));
        assert_eq!(reduce(&ds, "id", AggregateOp::Sum), Some(10.0));
    }

    #[test]
    fn reduce_min_max_median_average() {
        let ds = numeric_dataset_with_nulls();
        assert_eq!(reduce(&ds, "score", AggregateOp::Min), Some(1.5));
        assert_eq!(reduce(&ds, "score", AggregateOp::Max), Some(10.0));
        assert_eq!(reduce(&ds, "score", AggregateOp::Median), Some(5.5));
        assert_eq!(reduce(&ds, "id", AggregateOp::Average), Some(2.5));
    }

    #[test]
    fn reduce_returns_none_for_missing_column() {
        let ds = numeric_dataset_with_nulls();
        assert_eq!(reduce(&ds, "missing", AggregateOp::Sum), None);
    }

    #[test]
    fn reduce_all_null_column_uses_empty_results() {
        let schema = Schema::new(vec![Field::new("score", DataType::Float64)]);
        let ds = DataSet::new(schema, vec![vec![Value::Null], vec![Value::Null]]);
        assert_eq!(reduce(&ds, "score", AggregateOp::Sum), Some(0.0));
        assert!(reduce(&ds, "score", AggregateOp::Min).is_some_and(f64::is_nan));
        assert!(reduce(&ds, "score", AggregateOp::Average).is_some_and(f64::is_nan));
    }

    #[test]
    fn parse_accepts_names_and_mean_alias() {
        assert_eq!("min".parse::<AggregateOp>().unwrap(), AggregateOp::Min);
        assert_eq!(" Median ".parse::<AggregateOp>().unwrap(), AggregateOp::Median);
        assert_eq!("mean".parse::<AggregateOp>().unwrap(), AggregateOp::Average);
        for op in AggregateOp::ALL {
            assert_eq!(op.to_string().parse::<AggregateOp>().unwrap(), op);
        }
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "mode".parse::<AggregateOp>().unwrap_err();
        assert_eq!(err.to_string(), "unknown aggregate operation 'mode'");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&AggregateOp::Average).unwrap(), "\"average\"");
        let ops: Vec<AggregateOp> = serde_json::from_str(r#"["sum", "mean", "max"]"#).unwrap();
        assert_eq!(
            ops,
            vec![AggregateOp::Sum, AggregateOp::Average, AggregateOp::Max]
        );
    }

    #[test]
    fn apply_by_matches_named_functions() {
        let pairs = vec![(1, 4.0), (2, 8.0), (3, 3.0)];
        let second = |p: &(i32, f64), _: &usize, _: &Vec<(i32, f64)>| p.1;
        assert_eq!(AggregateOp::Max.apply_by(&pairs, second), 8.0);
        assert_eq!(AggregateOp::Median.apply_by(&pairs, second), 4.0);
        assert_eq!(AggregateOp::Sum.apply_by(&pairs, second), 15.0);
    }
}
