use miniclassify::{Sample, Scaler, Scaling, standardize, normalize};


const TOLERANCE: f64 = 1e-12;


fn toy_sample() -> Sample {
    let rows = vec![
        vec![1.0, 3.0],
        vec![2.0, 4.0],
        vec![3.0, 5.0],
    ];
    Sample::from_rows(&rows, vec![0.0, 1.0, 0.0])
}


fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < TOLERANCE, "{actual:?} != {expected:?}");
    }
}


#[test]
fn standardize_uses_the_pooled_standard_deviation() {
    let mut sample = toy_sample();
    let scaler = standardize(&mut sample);

    // All values: [1, 2, 3, 3, 4, 5], mean 3, variance 10 / 6.
    let std = (10.0_f64 / 6.0).sqrt();
    assert!((scaler.divisor() - std).abs() < TOLERANCE);
    assert_close(scaler.shifts(), &[2.0, 4.0]);

    assert_close(sample.features()[0].vals(), &[-1.0 / std, 0.0, 1.0 / std]);
    assert_close(sample.features()[1].vals(), &[-1.0 / std, 0.0, 1.0 / std]);
    assert_eq!(sample.target(), &[0.0, 1.0, 0.0]);
}


#[test]
fn normalize_uses_the_global_range() {
    let mut sample = toy_sample();
    normalize(&mut sample);

    assert_close(sample.features()[0].vals(), &[0.0, 0.25, 0.5]);
    assert_close(sample.features()[1].vals(), &[0.5, 0.75, 1.0]);
}


#[test]
fn test_sample_reuses_training_statistics() {
    let train = toy_sample();
    let mut test = Sample::from_rows(&[vec![5.0, 1.0]], vec![1.0]);

    let scaler = Scaler::fit(&train, Scaling::Normalize);
    scaler.transform(&mut test);

    assert_close(&test.row(0), &[1.0, 0.0]);
}


#[test]
fn constant_sample_is_only_centered() {
    let rows = vec![vec![2.0], vec![2.0]];
    let mut sample = Sample::from_rows(&rows, vec![0.0, 1.0]);
    let scaler = standardize(&mut sample);

    assert_eq!(scaler.divisor(), 1.0);
    assert_close(sample.features()[0].vals(), &[0.0, 0.0]);
}


#[test]
fn constant_sample_is_only_shifted_by_normalization() {
    let rows = vec![vec![3.0, 3.0], vec![3.0, 3.0]];
    let mut sample = Sample::from_rows(&rows, vec![0.0, 1.0]);
    let scaler = normalize(&mut sample);

    assert_eq!(scaler.divisor(), 1.0);
    assert_close(scaler.shifts(), &[3.0, 3.0]);
    assert_close(sample.features()[0].vals(), &[0.0, 0.0]);
    assert_close(sample.features()[1].vals(), &[0.0, 0.0]);
}
