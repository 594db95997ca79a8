use miniclassify::prelude::*;


// 1-dimensional toy example, symmetric around the origin.
//
//   x   x   x         o   o   o
// --+---+---+----+----+---+---+--
//  -3  -2  -1    0    1   2   3
fn symmetric_sample() -> Sample {
    let rows = [-3.0, -2.0, -1.0, 1.0, 2.0, 3.0]
        .into_iter()
        .map(|x| vec![x])
        .collect::<Vec<_>>();
    Sample::from_rows(&rows, vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0])
}


#[test]
fn separates_the_symmetric_toy_sample() {
    let sample = symmetric_sample();
    let f = LogisticRegression::init(1.0).fit(&sample);

    assert!(f.weights()[0] > 0.0);
    assert!(f.intercept().abs() < 1e-6, "intercept = {}", f.intercept());
    assert_eq!(f.predict_all(&sample), sample.labels());
    assert!(f.probability(&sample, 5) > 0.5);
    assert!(f.probability(&sample, 0) < 0.5);
}


#[test]
fn solution_is_stationary() {
    let sample = symmetric_sample();
    let c = 0.7;
    let f = LogisticRegression::init(c).fit(&sample);

    // Gradient of 0.5 w^2 + C Σ ln(1 + exp(-ỹ (w x + b))).
    let w = f.weights()[0];
    let (grad_w, grad_b) = (0..6)
        .map(|i| {
            let (x, y) = sample.at(i);
            let p = f.probability(&sample, i);
            (c * (p - y) * x[0], c * (p - y))
        })
        .fold((w, 0.0), |(gw, gb), (dw, db)| (gw + dw, gb + db));

    assert!(grad_w.abs() < 1e-6, "grad_w = {grad_w}");
    assert!(grad_b.abs() < 1e-6, "grad_b = {grad_b}");
}


#[test]
fn stronger_regularization_shrinks_the_weights() {
    let sample = symmetric_sample();
    let weak = LogisticRegression::init(100.0).fit(&sample);
    let strong = LogisticRegression::init(0.01).fit(&sample);

    assert!(strong.weights()[0].abs() < weak.weights()[0].abs());
}


#[test]
fn intercept_follows_a_shifted_boundary() {
    let rows = [1.0, 2.0, 3.0, 5.0, 6.0, 7.0]
        .into_iter()
        .map(|x| vec![x])
        .collect::<Vec<_>>();
    let sample = Sample::from_rows(&rows, vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
    let f = LogisticRegression::init(10.0).fit(&sample);

    assert!(f.intercept() < 0.0);
    let boundary = -f.intercept() / f.weights()[0];
    assert!((boundary - 4.0).abs() < 1e-6, "boundary = {boundary}");
    assert_eq!(f.predict_all(&sample), sample.labels());
}


#[test]
fn huge_c_on_separable_data_stays_finite() {
    let sample = symmetric_sample();
    let f = LogisticRegression::init(1e12)
        .max_iter(30)
        .fit(&sample);

    assert!(f.weights()[0].is_finite());
    assert!(f.intercept().is_finite());
    assert_eq!(f.predict_all(&sample), sample.labels());
}


#[test]
#[should_panic]
fn non_positive_c_is_rejected() {
    let _ = LogisticRegression::init(0.0);
}
