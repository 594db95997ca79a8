use miniclassify::prelude::*;


// Ten examples of class `0` followed by five of class `1`.
fn imbalanced_sample() -> Sample {
    let rows = (0..15).map(|i| vec![i as f64])
        .collect::<Vec<_>>();
    let target = (0..15).map(|i| if i < 10 { 0.0 } else { 1.0 })
        .collect::<Vec<_>>();
    Sample::from_rows(&rows, target)
}


#[test]
fn folds_keep_the_class_proportion() {
    let sample = imbalanced_sample();
    let cv = StratifiedKFold::new(&sample).n_folds(5);

    for (train, valid) in cv {
        assert_eq!(train.shape().0, 12);
        assert_eq!(valid.shape().0, 3);

        let valid_labels = valid.labels();
        assert_eq!(valid_labels.iter().filter(|&&y| y == 0).count(), 2);
        assert_eq!(valid_labels.iter().filter(|&&y| y == 1).count(), 1);
    }
}


#[test]
fn round_robin_assignment_without_shuffle() {
    let sample = imbalanced_sample();
    let cv = StratifiedKFold::new(&sample).n_folds(5);

    let (train, valid) = cv.fold_indices(2);
    assert_eq!(valid, vec![2, 7, 12]);
    assert_eq!(train.len(), 12);
    assert!(train.iter().all(|i| !valid.contains(i)));
}


#[test]
fn validation_folds_partition_the_sample() {
    let sample = imbalanced_sample();
    let cv = StratifiedKFold::new(&sample)
        .n_folds(5)
        .seed(7)
        .shuffle();

    let mut seen = vec![0usize; 15];
    for (train, valid) in cv.folds() {
        assert_eq!(train.len() + valid.len(), 15);
        valid.into_iter().for_each(|i| { seen[i] += 1; });
    }
    assert!(seen.into_iter().all(|count| count == 1));
}


#[test]
fn shuffle_is_deterministic_for_a_seed() {
    let sample = imbalanced_sample();
    let folds = |seed| {
        StratifiedKFold::new(&sample)
            .n_folds(5)
            .seed(seed)
            .shuffle()
            .folds()
    };

    assert_eq!(folds(42), folds(42));
    assert_ne!(folds(42), StratifiedKFold::new(&sample).n_folds(5).folds());
}


#[test]
fn iterator_yields_every_fold_once() {
    let sample = imbalanced_sample();
    let n_pairs = StratifiedKFold::new(&sample)
        .n_folds(3)
        .count();
    assert_eq!(n_pairs, 3);
}


#[test]
#[should_panic]
fn a_single_fold_is_rejected() {
    let sample = imbalanced_sample();
    let _ = StratifiedKFold::new(&sample).n_folds(1);
}


#[test]
#[should_panic]
fn too_few_examples_of_a_class_are_rejected() {
    let sample = imbalanced_sample();
    let _ = StratifiedKFold::new(&sample).n_folds(6).folds();
}


#[test]
#[should_panic]
fn a_single_class_is_rejected() {
    let rows = vec![vec![0.0], vec![1.0], vec![2.0]];
    let sample = Sample::from_rows(&rows, vec![0.0, 0.0, 0.0]);
    let _ = StratifiedKFold::new(&sample);
}
