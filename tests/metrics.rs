use miniclassify::prelude::*;


#[test]
fn precision_and_recall() {
    let predictions = vec![1, 0, 1, 1, 0];
    let truth = vec![0, 0, 1, 1, 1];

    let pr = precision_recall(&predictions, &truth);
    assert_eq!(pr.true_positives, 2);
    assert_eq!(pr.false_positives, 1);
    assert_eq!(pr.false_negatives, 1);
    assert!((pr.precision - 2.0 / 3.0).abs() < 1e-12);
    assert!((pr.recall - 2.0 / 3.0).abs() < 1e-12);
}


#[test]
fn precision_differs_from_recall() {
    // Predicts every example positive.
    let predictions = vec![1, 1, 1, 1];
    let truth = vec![1, 0, 0, 0];

    let pr = precision_recall(&predictions, &truth);
    assert!((pr.precision - 0.25).abs() < 1e-12);
    assert_eq!(pr.recall, 1.0);
}


#[test]
fn zero_denominators_give_zero() {
    let pr = precision_recall(&[0, 0, 0], &[0, 0, 0]);
    assert_eq!(pr.precision, 0.0);
    assert_eq!(pr.recall, 0.0);

    let pr = precision_recall(&[0, 0], &[1, 1]);
    assert_eq!(pr.precision, 0.0);
    assert_eq!(pr.recall, 0.0);
    assert_eq!(pr.false_negatives, 2);
}


#[test]
fn test_error_of_a_retrained_learner() {
    let rows = vec![vec![-2.0], vec![-1.0], vec![1.0], vec![2.0]];
    let train = Sample::from_rows(&rows, vec![0.0, 0.0, 1.0, 1.0]);
    let test = Sample::from_rows(
        &[vec![-1.5], vec![0.5], vec![-0.5], vec![3.0]],
        vec![0.0, 1.0, 1.0, 1.0],
    );

    let outcome = test_error(&Knn::init(1), &train, &test);
    assert_eq!(outcome.predictions, vec![0, 1, 0, 1]);
    assert!((outcome.error - 0.25).abs() < 1e-12);
}


#[test]
#[should_panic]
fn length_mismatch_is_rejected() {
    let _ = precision_recall(&[1, 0], &[1]);
}
