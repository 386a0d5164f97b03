use salescope::application::analytics::AnalyzedDataset;
use salescope::application::session::SessionState;
use salescope::domain::errors::DatasetError;
use salescope::infrastructure::dataset::{load_csv, read_csv};

const SUPERSTORE_SAMPLE: &str = "\
Row ID,Order ID,Ship Mode,Segment,Region,Category,Sales,Quantity,Discount,Profit
1,CA-1,Second Class,Consumer,South,Furniture,261.96,2,0,41.91
2,CA-1,Second Class,Consumer,South,Furniture,731.94,3,0,219.58
3,CA-2,Second Class,Corporate,West,Office Supplies,14.62,2,0,6.87
4,US-3,Standard Class,Consumer,South,Furniture,957.5775,5,0.45,-383.031
5,US-3,Standard Class,Consumer,South,Office Supplies,22.368,2,0.2,2.5164
6,CA-4,First Class,Home Office,West,Technology,907.152,6,0.2,90.7152
";

#[test]
fn test_dataset_feeds_session_aggregate() {
    let dataset = read_csv(SUPERSTORE_SAMPLE.as_bytes()).unwrap();
    let analyzed = AnalyzedDataset::analyze("sample.csv", dataset).unwrap();

    assert_eq!(analyzed.summary.rows, 6);
    assert_eq!(analyzed.summary.columns, 10);
    assert_eq!(analyzed.summary.total_orders, 6);
    assert_eq!(analyzed.summary.missing_values, 0);
    assert!((analyzed.summary.total_sales - 2895.6175).abs() < 1e-6);
    assert!((analyzed.summary.total_profit - (-21.4394)).abs() < 1e-6);
    assert!((analyzed.summary.avg_discount - 0.85 / 6.0).abs() < 1e-9);

    let ship_modes: Vec<&str> = analyzed
        .breakdowns
        .sales_by_ship_mode
        .as_ref()
        .unwrap()
        .iter()
        .map(|g| g.label.as_str())
        .collect();
    assert_eq!(ship_modes, ["First Class", "Standard Class", "Second Class"]);

    let mut session = SessionState::new();
    assert!(session.aggregate().is_none());
    session.set_dataset(analyzed);
    let aggregate = session.aggregate().unwrap();
    assert!((aggregate.total_sales - 2895.6175).abs() < 1e-6);
}

#[test]
fn test_missing_required_column_rejected() {
    let dataset = read_csv("Region,Sales\nWest,10\n".as_bytes()).unwrap();
    match AnalyzedDataset::analyze("no-profit.csv", dataset) {
        Err(DatasetError::MissingColumn { column }) => assert_eq!(column, "Profit"),
        other => panic!("expected MissingColumn, got {:?}", other.map(|a| a.summary)),
    }
}

#[test]
fn test_load_csv_from_disk() {
    let path = std::env::temp_dir().join(format!("salescope-{}.csv", uuid::Uuid::new_v4()));
    std::fs::write(&path, SUPERSTORE_SAMPLE).unwrap();

    let dataset = load_csv(&path).unwrap();
    assert_eq!(dataset.row_count(), 6);
    assert!(dataset.has_column("Ship Mode"));

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_load_csv_missing_file() {
    let result = load_csv(std::path::Path::new("definitely/not/here.csv"));
    assert!(matches!(result, Err(DatasetError::Read { .. })));
}
