use crate::domain::dataset::{
    CATEGORY_COLUMN, DISCOUNT_COLUMN, Dataset, DatasetAggregate, PROFIT_COLUMN,
    REGION_COLUMN, REQUIRED_COLUMNS, SALES_COLUMN, SEGMENT_COLUMN, SHIP_MODE_COLUMN,
};
use crate::domain::errors::DatasetError;
use std::collections::BTreeMap;
use tracing::info;

pub const PREVIEW_ROWS: usize = 10;

/// Headline KPIs shown on the upload page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DatasetSummary {
    pub total_sales: f64,
    pub total_profit: f64,
    pub total_orders: usize,
    /// Mean of the Discount column, 0 when the column is absent.
    pub avg_discount: f64,
    pub rows: usize,
    pub columns: usize,
    pub missing_values: usize,
}

impl DatasetSummary {
    pub fn aggregate(&self) -> DatasetAggregate {
        DatasetAggregate {
            total_sales: self.total_sales,
            total_profit: self.total_profit,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupTotal {
    pub label: String,
    pub value: f64,
}

/// Group-by totals backing the EDA charts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Breakdowns {
    pub sales_by_category: Option<Vec<GroupTotal>>,
    pub profit_by_region: Option<Vec<GroupTotal>>,
    pub sales_by_segment: Option<Vec<GroupTotal>>,
    /// Sorted ascending by sales.
    pub sales_by_ship_mode: Option<Vec<GroupTotal>>,
}

/// A dataset plus everything derived from it at upload time.
#[derive(Debug, Clone)]
pub struct AnalyzedDataset {
    pub source: String,
    pub dataset: Dataset,
    pub summary: DatasetSummary,
    pub breakdowns: Breakdowns,
}

impl AnalyzedDataset {
    pub fn analyze(source: impl Into<String>, dataset: Dataset) -> Result<Self, DatasetError> {
        let source = source.into();
        let summary = summarize(&dataset)?;
        let breakdowns = breakdowns(&dataset);

        info!(
            "Analyzed dataset '{}': {} rows x {} columns, total sales {:.2}, total profit {:.2}",
            source, summary.rows, summary.columns, summary.total_sales, summary.total_profit
        );

        Ok(Self {
            source,
            dataset,
            summary,
            breakdowns,
        })
    }

    pub fn aggregate(&self) -> DatasetAggregate {
        self.summary.aggregate()
    }

    pub fn preview(&self) -> &[Vec<String>] {
        self.dataset.head(PREVIEW_ROWS)
    }
}

pub fn summarize(dataset: &Dataset) -> Result<DatasetSummary, DatasetError> {
    for column in REQUIRED_COLUMNS {
        if !dataset.has_column(column) {
            return Err(DatasetError::MissingColumn {
                column: column.to_string(),
            });
        }
    }

    let total_sales = column_sum(dataset, SALES_COLUMN);
    let total_profit = column_sum(dataset, PROFIT_COLUMN);

    let avg_discount = dataset
        .numeric_column(DISCOUNT_COLUMN)
        .map(|values| {
            let (sum, count) = values
                .flatten()
                .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
            if count == 0 { 0.0 } else { sum / count as f64 }
        })
        .unwrap_or(0.0);

    Ok(DatasetSummary {
        total_sales,
        total_profit,
        total_orders: dataset.row_count(),
        avg_discount,
        rows: dataset.row_count(),
        columns: dataset.column_count(),
        missing_values: dataset.missing_cells(),
    })
}

pub fn breakdowns(dataset: &Dataset) -> Breakdowns {
    let sales_by_ship_mode = group_sum(dataset, SHIP_MODE_COLUMN, SALES_COLUMN).map(|mut groups| {
        groups.sort_by(|a, b| a.value.total_cmp(&b.value));
        groups
    });

    Breakdowns {
        sales_by_category: group_sum(dataset, CATEGORY_COLUMN, SALES_COLUMN),
        profit_by_region: group_sum(dataset, REGION_COLUMN, PROFIT_COLUMN),
        sales_by_segment: group_sum(dataset, SEGMENT_COLUMN, SALES_COLUMN),
        sales_by_ship_mode,
    }
}

/// Sums `value_column` per distinct `group_column` label, ordered by label.
/// Rows with an empty label are skipped; unparseable values count as 0.
pub fn group_sum(dataset: &Dataset, group_column: &str, value_column: &str) -> Option<Vec<GroupTotal>> {
    let groups = dataset.column(group_column)?;
    let values = dataset.numeric_column(value_column)?;

    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for (label, value) in groups.zip(values) {
        let label = label.trim();
        if label.is_empty() {
            continue;
        }
        *totals.entry(label.to_string()).or_insert(0.0) += value.unwrap_or(0.0);
    }

    Some(
        totals
            .into_iter()
            .map(|(label, value)| GroupTotal { label, value })
            .collect(),
    )
}

/// Percentage share of each group, for the segment distribution chart.
pub fn shares(groups: &[GroupTotal]) -> Vec<(String, f64)> {
    let total: f64 = groups.iter().map(|g| g.value).sum();
    groups
        .iter()
        .map(|g| {
            let pct = if total == 0.0 { 0.0 } else { g.value / total * 100.0 };
            (g.label.clone(), pct)
        })
        .collect()
}

fn column_sum(dataset: &Dataset, column: &str) -> f64 {
    dataset
        .numeric_column(column)
        .map(|values| values.flatten().sum())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn superstore() -> Dataset {
        let headers = ["Category", "Region", "Segment", "Ship Mode", "Sales", "Profit", "Discount"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let rows = vec![
            vec!["Furniture", "West", "Consumer", "Second Class", "200", "20", "0.2"],
            vec!["Technology", "East", "Corporate", "Standard Class", "500", "-50", "0"],
            vec!["Furniture", "East", "Consumer", "Standard Class", "300", "30", ""],
        ]
        .into_iter()
        .map(|r| r.into_iter().map(String::from).collect::<Vec<String>>())
        .collect();
        Dataset::new(headers, rows)
    }

    #[test]
    fn test_summary_totals() {
        let summary = summarize(&superstore()).unwrap();
        assert_eq!(summary.total_sales, 1000.0);
        assert_eq!(summary.total_profit, 0.0);
        assert_eq!(summary.total_orders, 3);
        assert!((summary.avg_discount - 0.1).abs() < 1e-12);
        assert_eq!(summary.missing_values, 1);
        assert_eq!((summary.rows, summary.columns), (3, 7));
    }

    #[test]
    fn test_missing_required_column() {
        let ds = Dataset::new(vec!["Sales".to_string()], vec![vec!["1".to_string()]]);
        match summarize(&ds) {
            Err(DatasetError::MissingColumn { column }) => assert_eq!(column, "Profit"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_breakdowns() {
        let b = breakdowns(&superstore());

        let by_category = b.sales_by_category.unwrap();
        assert_eq!(by_category[0], GroupTotal { label: "Furniture".into(), value: 500.0 });
        assert_eq!(by_category[1], GroupTotal { label: "Technology".into(), value: 500.0 });

        let by_region = b.profit_by_region.unwrap();
        assert_eq!(by_region[0], GroupTotal { label: "East".into(), value: -20.0 });

        let ship = b.sales_by_ship_mode.unwrap();
        assert_eq!(ship[0].label, "Second Class");
        assert_eq!(ship[1].value, 800.0);
    }

    #[test]
    fn test_optional_charts_absent_without_columns() {
        let ds = Dataset::new(
            vec!["Sales".to_string(), "Profit".to_string()],
            vec![vec!["1".to_string(), "2".to_string()]],
        );
        let b = breakdowns(&ds);
        assert!(b.sales_by_segment.is_none());
        assert!(b.sales_by_ship_mode.is_none());
        assert_eq!(summarize(&ds).unwrap().avg_discount, 0.0);
    }

    #[test]
    fn test_shares() {
        let groups = vec![
            GroupTotal { label: "A".into(), value: 25.0 },
            GroupTotal { label: "B".into(), value: 75.0 },
        ];
        assert_eq!(shares(&groups), vec![("A".to_string(), 25.0), ("B".to_string(), 75.0)]);
    }
}
