use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// PropertyRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single (city, year) observation of the residential property market.
///
/// Field renames follow the column headers of `Property_Trends.csv` exactly.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PropertyRecord {
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Annual_Appreciation(%)")]
    pub annual_appreciation_pct: f64,
    #[serde(rename = "Avg_SalePrice")]
    pub avg_sale_price: f64,
    #[serde(rename = "Number_of_Sales")]
    pub number_of_sales: i64,
}

impl PropertyRecord {
    /// Value of the given numeric metric for this record.
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::AnnualAppreciation => self.annual_appreciation_pct,
            Metric::AvgSalePrice => self.avg_sale_price,
        }
    }
}

// ---------------------------------------------------------------------------
// Metric – the numeric columns that get a chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    AnnualAppreciation,
    AvgSalePrice,
}

impl Metric {
    /// Charted metrics, in on-screen order (left to right).
    pub const ALL: [Metric; 2] = [Metric::AnnualAppreciation, Metric::AvgSalePrice];

    /// Column header in the source file.
    pub fn column(self) -> &'static str {
        match self {
            Metric::AnnualAppreciation => "Annual_Appreciation(%)",
            Metric::AvgSalePrice => "Avg_SalePrice",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Metric::AnnualAppreciation => "Annual Appreciation (%)",
            Metric::AvgSalePrice => "Average Sales Price (R)",
        }
    }

    pub fn axis_label(self) -> &'static str {
        match self {
            Metric::AnnualAppreciation => "Average appreciation (%)",
            Metric::AvgSalePrice => "Sales Price (Millions)",
        }
    }

    /// Divisor applied to raw values when formatting y-axis ticks.
    pub fn axis_scale(self) -> f64 {
        match self {
            Metric::AnnualAppreciation => 1.0,
            Metric::AvgSalePrice => 1_000_000.0,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

// ---------------------------------------------------------------------------
// PropertyDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with the selector choices pre-computed.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct PropertyDataset {
    records: Vec<PropertyRecord>,
    /// Unique cities in order of first appearance.
    cities: Vec<String>,
    /// Unique years, ascending.
    years: Vec<i32>,
}

impl PropertyDataset {
    pub fn from_records(records: Vec<PropertyRecord>) -> Self {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        let mut cities = Vec::new();
        for rec in &records {
            if seen.insert(rec.city.as_str()) {
                cities.push(rec.city.clone());
            }
        }
        let years: Vec<i32> = records
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        PropertyDataset {
            records,
            cities,
            years,
        }
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
pub(crate) fn record(city: &str, year: i32, pct: f64, price: f64, sales: i64) -> PropertyRecord {
    PropertyRecord {
        city: city.to_string(),
        year,
        annual_appreciation_pct: pct,
        avg_sale_price: price,
        number_of_sales: sales,
    }
}
