use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use arrow::array::{
    Array, ArrayRef, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray,
};
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use thiserror::Error;

use super::model::{PropertyDataset, PropertyRecord};

pub const CITY: &str = "City";
pub const YEAR: &str = "Year";
pub const APPRECIATION: &str = "Annual_Appreciation(%)";
pub const SALE_PRICE: &str = "Avg_SalePrice";
pub const SALES: &str = "Number_of_Sales";

/// Columns every input file must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = [CITY, YEAR, APPRECIATION, SALE_PRICE, SALES];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("missing column '{0}'")]
    MissingColumn(String),
    #[error("dataset contains no rows")]
    Empty,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the property table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row with the five required columns (extra columns ignored)
/// * `.json`    – `[{ "City": "...", "Year": 2020, ... }, ...]`
/// * `.parquet` – one Arrow column per required field
pub fn load_file(path: &Path) -> Result<PropertyDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
    .with_context(|| format!("loading {}", path.display()))?;

    if records.is_empty() {
        return Err(SchemaError::Empty).with_context(|| format!("loading {}", path.display()));
    }
    Ok(PropertyDataset::from_records(records))
}

fn require_columns(present: &[&str]) -> Result<(), SchemaError> {
    for col in REQUIRED_COLUMNS {
        if !present.contains(&col) {
            return Err(SchemaError::MissingColumn(col.to_string()));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Vec<PropertyRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();
    let names: Vec<&str> = headers.iter().collect();
    require_columns(&names)?;

    reader
        .deserialize::<PropertyRecord>()
        .enumerate()
        .map(|(row_no, rec)| rec.with_context(|| format!("CSV row {row_no}")))
        .collect()
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, the default `df.to_json(orient='records')` layout.
fn load_json(path: &Path) -> Result<Vec<PropertyRecord>> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    serde_json::from_str(&text).context("parsing JSON records")
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file written by Pandas (`df.to_parquet()`) or Polars.
///
/// Integer columns are accepted for the numeric metrics and widened to `f64`.
fn load_parquet(path: &Path) -> Result<Vec<PropertyRecord>> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let names: Vec<&str> = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().as_str())
        .collect();
    require_columns(&names)?;
    let reader = builder.build().context("building parquet reader")?;

    let mut records = Vec::new();
    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        read_batch(&batch, &mut records)?;
    }
    Ok(records)
}

fn read_batch(batch: &RecordBatch, out: &mut Vec<PropertyRecord>) -> Result<()> {
    let city = column(batch, CITY)?;
    let year = column(batch, YEAR)?;
    let pct = column(batch, APPRECIATION)?;
    let price = column(batch, SALE_PRICE)?;
    let sales = column(batch, SALES)?;

    for row in 0..batch.num_rows() {
        out.push(PropertyRecord {
            city: string_at(city, row).with_context(|| format!("Row {row}: '{CITY}'"))?,
            year: i64_at(year, row)
                .and_then(|y| i32::try_from(y).context("year out of range"))
                .with_context(|| format!("Row {row}: '{YEAR}'"))?,
            annual_appreciation_pct: f64_at(pct, row)
                .with_context(|| format!("Row {row}: '{APPRECIATION}'"))?,
            avg_sale_price: f64_at(price, row)
                .with_context(|| format!("Row {row}: '{SALE_PRICE}'"))?,
            number_of_sales: i64_at(sales, row)
                .with_context(|| format!("Row {row}: '{SALES}'"))?,
        });
    }
    Ok(())
}

// -- Arrow cell helpers --

fn column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a ArrayRef, SchemaError> {
    batch
        .column_by_name(name)
        .ok_or_else(|| SchemaError::MissingColumn(name.to_string()))
}

fn string_at(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value");
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(arr.value(row).to_string())
        }
        DataType::LargeUtf8 => Ok(col.as_string::<i64>().value(row).to_string()),
        other => bail!("expected a string column, got {other:?}"),
    }
}

fn i64_at(col: &Arc<dyn Array>, row: usize) -> Result<i64> {
    if col.is_null(row) {
        bail!("null value");
    }
    match col.data_type() {
        DataType::Int32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int32Array>()
                .context("expected Int32Array")?;
            Ok(i64::from(arr.value(row)))
        }
        DataType::Int64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int64Array>()
                .context("expected Int64Array")?;
            Ok(arr.value(row))
        }
        other => bail!("expected an integer column, got {other:?}"),
    }
}

fn f64_at(col: &Arc<dyn Array>, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value");
    }
    match col.data_type() {
        DataType::Float64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float64Array>()
                .context("expected Float64Array")?;
            Ok(arr.value(row))
        }
        DataType::Float32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float32Array>()
                .context("expected Float32Array")?;
            Ok(f64::from(arr.value(row)))
        }
        DataType::Int32 | DataType::Int64 => i64_at(col, row).map(|v| v as f64),
        other => bail!("expected a numeric column, got {other:?}"),
    }
}
