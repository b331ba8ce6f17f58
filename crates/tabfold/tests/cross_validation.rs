use std::fs;

use approx::assert_abs_diff_eq;
use tabfold::datasets::{car, segmentation};
use tabfold::io::{export_folds, load_dataset, read_rows};
use tabfold::{ColumnKind, PrepareOptions};

const CAR_ROWS: &str = "\
vhigh,vhigh,2,2,small,low,unacc
vhigh,high,3,4,med,med,unacc
high,med,4,more,big,high,acc
med,low,5more,2,small,med,unacc
low,low,2,4,med,high,good
low,med,3,more,big,low,unacc
med,high,4,4,small,high,acc
high,vhigh,5more,more,med,med,unacc
low,low,4,4,big,high,vgood
med,med,2,2,med,low,unacc
";

#[test]
fn test_prepare_fold_and_export() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("car.data");
    fs::write(&input, CAR_ROWS).unwrap();

    let options = PrepareOptions {
        seed: Some(11),
        ..Default::default()
    };
    let ds = load_dataset(&input, &car(), &options).unwrap();
    assert_eq!(ds.len(), 10);
    assert!(ds.categorical_columns().is_empty());
    assert_eq!(ds.kind(6).unwrap(), ColumnKind::Categorical);
    for c in 0..6 {
        let mean = ds.rows().iter().map(|r| r.number(c).unwrap()).sum::<f64>() / 10.0;
        assert_abs_diff_eq!(mean, 0.0, epsilon = 1e-12);
    }

    let folds = ds.validation_folds(5).unwrap();
    for fold in &folds {
        assert_eq!(fold.test.len(), 2);
        let (train, validation) = fold.train.partition(0.8).unwrap();
        assert_eq!((train.len(), validation.len()), (6, 2));

        // nearest training row for each held-out row is at a finite distance
        for q in fold.test.rows() {
            let nearest = train
                .rows()
                .iter()
                .map(|r| train.distance(q, r).unwrap())
                .fold(f64::INFINITY, f64::min);
            assert!(nearest.is_finite());
        }
    }

    let out = dir.path().join("folds");
    let paths = export_folds(&folds, &out, "car").unwrap();
    assert_eq!(paths.len(), 10);
    let total_test: usize = paths
        .iter()
        .filter(|p| p.to_string_lossy().ends_with("-test.txt"))
        .map(|p| read_rows(p, ',').unwrap().len())
        .sum();
    assert_eq!(total_test, 10);
}

#[test]
fn test_segmentation_header_with_blank_lines() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("segmentation.data");
    let mut text = String::from(" \nRegion data\n\nREGION-CENTROID-COL,REGION-CENTROID-ROW\n\n");
    for i in 1..=3 {
        let values: Vec<String> = (1..20).map(|c| (c * i).to_string()).collect();
        text.push_str(&format!("BRICKFACE,{}\n", values.join(",")));
    }
    fs::write(&input, text).unwrap();

    let options = PrepareOptions {
        shuffle: false,
        ..Default::default()
    };
    let ds = load_dataset(&input, &segmentation(), &options).unwrap();
    assert_eq!(ds.len(), 3);
    assert_eq!(ds.width(), 20);
    assert!(ds.categorical_columns().is_empty());
}
