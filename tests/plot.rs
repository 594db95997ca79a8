use miniclassify::prelude::*;


fn sweep_result(kind: ClassifierKind) -> SweepResult {
    let points = [1.0, 10.0, 100.0].into_iter()
        .map(|value| SweepPoint {
            value,
            train_error: 0.1,
            valid_error: 0.2,
        })
        .collect();
    SweepResult { kind, points }
}


#[test]
fn logistic_regression_uses_log_c() {
    let result = sweep_result(ClassifierKind::Logistic);

    let plot = ErrorCurvePlot::new(&result);
    assert_eq!(plot.x_label(), "log10(C)");
    let xs = plot.points()
        .into_iter()
        .map(|(x, _, _)| x)
        .collect::<Vec<_>>();
    assert_eq!(xs.len(), 3);
    assert!(xs.iter().zip([0.0, 1.0, 2.0]).all(|(a, b)| (a - b).abs() < 1e-12));

    let plot = ErrorCurvePlot::new(&result).log_x_axis(false);
    assert_eq!(plot.x_label(), "C");
    assert_eq!(plot.points()[2], (100.0, 0.1, 0.2));
}


#[test]
fn other_families_ignore_the_log_flag() {
    let result = sweep_result(ClassifierKind::Knn);
    let plot = ErrorCurvePlot::new(&result).log_x_axis(true);
    assert_eq!(plot.x_label(), "k");
    assert_eq!(plot.points()[1], (10.0, 0.1, 0.2));

    let result = sweep_result(ClassifierKind::NaiveBayes);
    let plot = ErrorCurvePlot::new(&result);
    assert_eq!(plot.x_label(), "bandwidth");
}


#[test]
fn curves_are_drawn_to_png_and_svg() {
    let result = sweep_result(ClassifierKind::Logistic);
    let dir = std::env::temp_dir()
        .join(format!("miniclassify-plot-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let png = dir.join("logistic_cv.png");
    let svg = dir.join("logistic_cv.svg");
    let plot = ErrorCurvePlot::new(&result).size(640, 480);
    plot.save_png(&png).unwrap();
    plot.save_svg(&svg).unwrap();

    assert!(std::fs::metadata(&png).unwrap().len() > 0);
    let text = std::fs::read_to_string(&svg).unwrap();
    assert!(text.contains("<svg"));
    assert!(text.contains("log10(C)"));

    std::fs::remove_dir_all(&dir).unwrap();
}
