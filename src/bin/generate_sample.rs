use std::sync::Arc;

use arrow::array::{Float64Array, Int32Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use parquet::arrow::ArrowWriter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// One output row; headers match what the dashboard loader expects.
#[derive(Serialize)]
struct Row {
    #[serde(rename = "City")]
    city: String,
    #[serde(rename = "Year")]
    year: i32,
    #[serde(rename = "Annual_Appreciation(%)")]
    appreciation: f64,
    #[serde(rename = "Avg_SalePrice")]
    sale_price: f64,
    #[serde(rename = "Number_of_Sales")]
    sales: i64,
}

/// (city, 2014 average price in rand, long-run growth %, yearly sales volume)
const CITIES: [(&str, f64, f64, i64); 8] = [
    ("Johannesburg", 1_050_000.0, 4.0, 9_800),
    ("Cape Town", 1_450_000.0, 6.5, 11_200),
    ("Durban", 980_000.0, 3.2, 6_400),
    ("Pretoria", 1_120_000.0, 3.8, 8_100),
    ("Gqeberha", 820_000.0, 2.9, 3_300),
    ("Bloemfontein", 760_000.0, 2.4, 2_100),
    ("East London", 700_000.0, 2.6, 1_700),
    ("Polokwane", 690_000.0, 4.4, 1_500),
];

const YEARS: std::ops::RangeInclusive<i32> = 2014..=2023;

fn round_to(v: f64, step: f64) -> f64 {
    (v / step).round() * step
}

fn generate(rng: &mut StdRng) -> Vec<Row> {
    let mut rows = Vec::new();
    for &(city, base_price, growth, volume) in &CITIES {
        let mut price = base_price;
        for year in YEARS {
            // Slump around 2020, recovery in 2021.
            let cycle = match year {
                2020 => -3.0,
                2021 => 1.5,
                _ => 0.0,
            };
            let appreciation = round_to(growth + cycle + rng.gen_range(-1.5..1.5), 0.1);
            price *= 1.0 + appreciation / 100.0;
            let sales = (volume as f64 * rng.gen_range(0.8..1.2)).round() as i64;

            rows.push(Row {
                city: city.to_string(),
                year,
                appreciation,
                sale_price: round_to(price, 1_000.0),
                sales,
            });
        }
    }
    rows
}

fn write_csv(rows: &[Row], path: &str) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn to_batch(rows: &[Row]) -> anyhow::Result<RecordBatch> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("City", DataType::Utf8, false),
        Field::new("Year", DataType::Int32, false),
        Field::new("Annual_Appreciation(%)", DataType::Float64, false),
        Field::new("Avg_SalePrice", DataType::Float64, false),
        Field::new("Number_of_Sales", DataType::Int64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema,
        vec![
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.city.as_str()))),
            Arc::new(Int32Array::from_iter_values(rows.iter().map(|r| r.year))),
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.appreciation))),
            Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r.sale_price))),
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.sales))),
        ],
    )?;
    Ok(batch)
}

fn write_parquet(batch: &RecordBatch, path: &str) -> anyhow::Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(batch)?;
    writer.close()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let mut rng = StdRng::seed_from_u64(42);
    let rows = generate(&mut rng);

    write_csv(&rows, "Property_Trends.csv")?;
    let batch = to_batch(&rows)?;
    write_parquet(&batch, "Property_Trends.parquet")?;

    println!("{}", pretty_format_batches(&[batch.slice(0, 5)])?);
    println!(
        "Wrote {} rows ({} cities × {} years) to Property_Trends.csv and Property_Trends.parquet",
        rows.len(),
        CITIES.len(),
        YEARS.count()
    );
    Ok(())
}
