use miniclassify::prelude::*;


// Toy example  (o/x are the examples of class 1/0)
//
//  2|  x       o
//   |
//  1|  x       o
//   |
//  0|  x       o
//   |______________
//      0   1   2
fn toy_sample() -> Sample {
    let rows = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![0.0, 2.0],
        vec![2.0, 0.0],
        vec![2.0, 1.0],
        vec![2.0, 2.0],
    ];
    Sample::from_rows(&rows, vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0])
}


#[test]
fn one_neighbor_memorizes_the_sample() {
    let sample = toy_sample();
    let f = Knn::init(1).fit(&sample);

    assert_eq!(f.predict_all(&sample), sample.labels());
    assert_eq!(zero_one_error(&sample, &f), 0.0);
}


#[test]
fn neighbors_are_sorted_by_distance() {
    let sample = toy_sample();
    let f = Knn::init(3).fit(&sample);

    let query = Sample::from_rows(&[vec![1.9, 2.1]], vec![1.0]);
    assert_eq!(f.neighbors(&query, 0), vec![5, 4, 2]);
    assert_eq!(f.predict(&query, 0), 1);
}


#[test]
fn vote_tie_goes_to_class_zero() {
    let sample = toy_sample();
    let f = Knn::init(2).fit(&sample);

    // The nearest examples are 1 (class 0) and 4 (class 1).
    let query = Sample::from_rows(&[vec![1.0, 1.0]], vec![1.0]);
    assert_eq!(f.neighbors(&query, 0), vec![1, 4]);
    assert_eq!(f.confidence(&query, 0), 0.0);
    assert_eq!(f.predict(&query, 0), 0);
}


#[test]
fn k_is_clamped_to_the_sample_size() {
    let sample = toy_sample();
    let f = Knn::init(100).fit(&sample);

    assert_eq!(f.k(), 6);
    // Three votes for each class.
    assert_eq!(f.predict(&sample, 5), 0);
}


#[test]
#[should_panic]
fn zero_neighbors_is_rejected() {
    let _ = Knn::init(0);
}
