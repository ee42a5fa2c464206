use immutable_math::collection::Collection;
use immutable_math::processing::{median_by, percent_by, reduce, with_percent_column, AggregateOp};
use immutable_math::types::{DataSet, DataType, Field, Schema, Value};
use immutable_math::MathError;

fn people() -> DataSet {
    let schema = Schema::new(vec![
        Field::new("id", DataType::Int64),
        Field::new("name", DataType::Utf8),
        Field::new("score", DataType::Float64),
        Field::new("active", DataType::Bool),
    ]);
    let rows = vec![
        vec![
            Value::Int64(1),
            Value::Utf8("Ada".to_string()),
            Value::Float64(98.5),
            Value::Bool(true),
        ],
        vec![
            Value::Int64(2),
            Value::Utf8("Grace".to_string()),
            Value::Float64(91.5),
            Value::Bool(false),
        ],
        vec![
            Value::Int64(3),
            Value::Utf8("Linus".to_string()),
            Value::Null,
            Value::Bool(true),
        ],
    ];
    DataSet::new(schema, rows)
}

#[test]
fn reduce_every_op_over_a_column() {
    let ds = people();
    assert_eq!(reduce(&ds, "score", AggregateOp::Min), Some(91.5));
    assert_eq!(reduce(&ds, "score", AggregateOp::Max), Some(98.5));
    assert_eq!(reduce(&ds, "score", AggregateOp::Sum), Some(190.0));
    assert_eq!(reduce(&ds, "score", AggregateOp::Average), Some(95.0));
    assert_eq!(reduce(&ds, "score", AggregateOp::Median), Some(95.0));
    // Booleans count as 0/1.
    assert_eq!(reduce(&ds, "active", AggregateOp::Sum), Some(2.0));
}

#[test]
fn reduce_unknown_column_is_none() {
    assert_eq!(reduce(&people(), "age", AggregateOp::Sum), None);
}

#[test]
fn ops_loaded_from_json_config() {
    let ops: Vec<AggregateOp> = serde_json::from_str(r#"["min", "mean", "median"]"#).unwrap();
    let ds = people();
    let results: Vec<Option<f64>> = ops.iter().map(|op| reduce(&ds, "id", *op)).collect();
    assert_eq!(results, vec![Some(1.0), Some(2.0), Some(2.0)]);
}

#[test]
fn dataset_works_directly_with_selectors() {
    let ds = people();
    let id_idx = ds.schema.index_of("id").unwrap();
    let median_id = ds.update(median_by(move |row: &Vec<Value>, _, _| row[id_idx].as_f64()));
    assert_eq!(median_id, 2.0);

    let shares = ds.update(percent_by(move |row: &Vec<Value>, _, _| row[id_idx].as_f64()));
    assert_eq!(shares.len(), 3);
    assert_eq!(shares[2], 0.5);
}

#[test]
fn null_cells_poison_percent_column() {
    let out = with_percent_column(&people(), "score", "score_share").unwrap();
    let idx = out.schema.index_of("score_share").unwrap();
    assert!(out
        .rows
        .iter()
        .all(|row| matches!(row[idx], Value::Float64(p) if p.is_nan())));
}

#[test]
fn percent_column_of_ids() {
    let out = with_percent_column(&people(), "id", "id_share").unwrap();
    assert_eq!(out.schema.fields.len(), 5);
    assert_eq!(out.rows[0][4], Value::Float64(1.0 / 6.0));
    assert_eq!(out.rows[2][4], Value::Float64(0.5));
}

#[test]
fn percent_column_errors_are_typed() {
    let err = with_percent_column(&people(), "nope", "share").unwrap_err();
    assert!(matches!(err, MathError::UnknownColumn { .. }));
    assert_eq!(err.to_string(), "unknown column 'nope'");
}
