/// Data layer: core types, loading, filtering and summary statistics.
///
/// Architecture:
/// ```text
///  Property_Trends.csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → PropertyDataset
///   └──────────┘
///        │
///        ├──────────────────────────┐
///        ▼                          ▼
///   ┌──────────┐              ┌──────────┐
///   │  filter   │  city/year   │  stats    │  median, Q1, Q3
///   └──────────┘  partition   └──────────┘  over the whole table
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
