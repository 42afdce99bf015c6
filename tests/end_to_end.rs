use chrono::NaiveDate;
use morsel_sales::args::{ProcessArgs, ViewArgs};
use morsel_sales::charts::{on_region_selected, RegionSelected};
use morsel_sales::commands;
use morsel_sales::data::{DataLoader, RegionFilter};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 1, d).unwrap()
}

#[test]
fn process_then_view() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    fs::create_dir(&data_dir).unwrap();
    let output = dir.path().join("processed_sales.csv");

    write(
        &data_dir.join("daily_sales_data_0.csv"),
        "product,price,quantity,date,region\n\
         pink morsel,$3.00,10,2021-01-14,north\n\
         Pink Morsel ,$3.00,5,2021-01-14,south\n\
         pink morsel,$5.00,2,2021-01-16,north\n",
    );
    write(
        &data_dir.join("daily_sales_data_1.csv"),
        "product,price,quantity,date,region\n\
         gold morsel,$9.99,1,2021-01-14,north\n\
         gold morsel,$9.99,3,2021-01-16,east\n",
    );

    let out = commands::process(&ProcessArgs::new(&data_dir, &output)).unwrap();
    assert!(out.message().contains("Rows generated: 3"));

    let dataset = DataLoader::load_sales(&output).unwrap();
    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.dropped_rows(), 0);

    let all = on_region_selected(&dataset, RegionSelected { region: RegionFilter::All });
    assert_eq!(all.points.len(), 2);
    assert_eq!(all.points[0].date, day(14));
    assert_eq!(all.points[0].sales, 45.0);
    assert_eq!(all.points[1].date, day(16));
    assert_eq!(all.points[1].sales, 10.0);

    let north = on_region_selected(&dataset, RegionSelected { region: RegionFilter::North });
    assert_eq!(
        north
            .points
            .iter()
            .map(|p| (p.date, p.sales))
            .collect::<Vec<_>>(),
        vec![(day(14), 30.0), (day(16), 10.0)]
    );

    let west = on_region_selected(&dataset, RegionSelected { region: RegionFilter::West });
    assert!(west.points.is_empty());
}

#[test]
fn view_prints_json_headlessly() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("processed_sales.csv");
    write(
        &input,
        "date,region,sales\n2021-01-14,north,30.0\n2021-01-14,south,15.0\n",
    );

    let out = commands::view(&ViewArgs::new(&input, "south", true)).unwrap();
    let value: serde_json::Value = serde_json::from_str(out.message()).unwrap();
    assert_eq!(value["region"], "south");
    assert_eq!(value["points"][0]["sales"], 15.0);

    // unknown regions fall back to all
    let out = commands::view(&ViewArgs::new(&input, "central", true)).unwrap();
    let value: serde_json::Value = serde_json::from_str(out.message()).unwrap();
    assert_eq!(value["region"], "all");
    assert_eq!(value["points"][0]["sales"], 45.0);
}

#[test]
fn view_without_processed_file_fails() {
    let dir = TempDir::new().unwrap();
    let result = commands::view(&ViewArgs::new(dir.path().join("missing.csv"), "all", true));
    assert!(result.is_err());
}

#[test]
fn process_empty_directory_fails() {
    let dir = TempDir::new().unwrap();
    let result = commands::process(&ProcessArgs::new(dir.path(), dir.path().join("out.csv")));
    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("No CSV files found"));
}
