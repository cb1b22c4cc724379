//! Integration tests: dataset file in, GeoJSON markers and JSON report out.

use std::fs;

use nedra_map::cli::{cmd_export, cmd_stats, FilterArgs};

const DATASET: &str = r#"{
    "metadata": {
        "total_deposits": 4,
        "geocoded_deposits": 3,
        "success_rate": 0.75,
        "confidence_distribution": {"high": 2, "medium": 1, "low": 0, "none": 1},
        "extraction_date": "2024-11-03",
        "source_file": "register.xlsx"
    },
    "deposits": [
        {"id": "D-1", "koncesioner": "Огняново-К АД", "nahodishte": "Огняново",
         "obshtina": "Пазарджик", "oblast": "Пазарджик", "vid_bogatstvo": "Варовици",
         "status": "съгласуван", "coordinates": [42.0, 24.3],
         "coordinate_confidence": "high"},
        {"id": "D-2", "nahodishte": "Негован", "oblast": "София",
         "vid_bogatstvo": "Пясъци и чакъли", "status": "процедура по съгласуване",
         "coordinates": null, "coordinate_confidence": "none"},
        {"id": "D-3", "nahodishte": "Студена", "oblast": "Перник",
         "vid_bogatstvo": "Варовици", "status": "съгласуван",
         "coordinates": [42.55, 23.12], "coordinate_confidence": "medium"},
        {"id": "Идентифика-7", "oblast": "Видин", "vid_bogatstvo": "Гнайси",
         "status": "съгласуван", "coordinates": [43.9, 22.8],
         "coordinate_confidence": "high"}
    ]
}"#;

#[test]
fn export_writes_only_eligible_markers() {
    let dir = tempfile::tempdir().unwrap();
    let dataset_path = dir.path().join("deposits.json");
    fs::write(&dataset_path, DATASET).unwrap();

    let output = dir.path().join("markers.geojson");
    cmd_export(&dataset_path, &output, "default", &FilterArgs::default()).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains(r#""id":"D-1""#));
    assert!(content.contains(r#""id":"D-3""#));
    // Ungeocoded and placeholder records never become markers
    assert!(!content.contains("D-2"));
    assert!(!content.contains("Идентифика-7"));
    // Варовици resolves through the default palette
    assert!(content.contains("#94a3b8"));
}

#[test]
fn export_respects_filter_flags() {
    let dir = tempfile::tempdir().unwrap();
    let dataset_path = dir.path().join("deposits.json");
    fs::write(&dataset_path, DATASET).unwrap();

    let output = dir.path().join("markers.geojson");
    let filter = FilterArgs {
        regions: vec!["Перник".to_string()],
        ..Default::default()
    };
    cmd_export(&dataset_path, &output, "default", &filter).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains(r#""id":"D-3""#));
    assert!(!content.contains(r#""id":"D-1""#));
}

#[test]
fn stats_report_json_matches_eligible_subset() {
    let dir = tempfile::tempdir().unwrap();
    let dataset_path = dir.path().join("deposits.json");
    fs::write(&dataset_path, DATASET).unwrap();

    let report_path = dir.path().join("report.json");
    cmd_stats(&dataset_path, &FilterArgs::default(), 5, Some(&report_path)).unwrap();

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();

    // D-2 (no coordinates) and the placeholder are excluded everywhere
    assert_eq!(report["dataset"]["total"], 2);
    assert_eq!(report["shown"]["total"], 2);
    assert_eq!(report["dataset"]["by_region"]["Пазарджик"], 1);
    assert_eq!(report["dataset"]["by_region"]["Перник"], 1);
    assert!(report["dataset"]["by_region"].get("Видин").is_none());
    assert_eq!(report["extraction_date"], "2024-11-03");
}

#[test]
fn stats_with_search_filter() {
    let dir = tempfile::tempdir().unwrap();
    let dataset_path = dir.path().join("deposits.json");
    fs::write(&dataset_path, DATASET).unwrap();

    let report_path = dir.path().join("report.json");
    let filter = FilterArgs {
        search: Some("студена".to_string()),
        ..Default::default()
    };
    cmd_stats(&dataset_path, &filter, 5, Some(&report_path)).unwrap();

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();

    assert_eq!(report["dataset"]["total"], 2);
    assert_eq!(report["shown"]["total"], 1);
    assert_eq!(report["shown"]["by_region"]["Перник"], 1);
}
