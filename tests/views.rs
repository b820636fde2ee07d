use pretty_assertions::assert_eq;
use tokcalc::{
    Capacities, Error, View, ViewKind,
    error::{ConfigError, EvaluationError},
    render, render_chain, render_chunked, render_flat, tokenize,
};

#[test]
fn chain_view_links_everything_to_a_sentinel() {
    let view = render("3+4*2", ViewKind::Chain, Capacities::default()).unwrap();
    assert_eq!(view.to_string(),
               "Representation: 3.0 -> + -> 4.0 -> * -> 2.0 -> null\n\
                Result: 11.0\n\
                Even Numbers: 4.0 -> 2.0 -> null\n\
                Odd Numbers: 3.0 -> null");
}

#[test]
fn chain_view_of_empty_bucket_is_just_the_sentinel() {
    let t = tokenize("2*4").unwrap();
    let view = render_chain(&t.expression, &t.even, &t.odd, 8.0);
    assert!(view.odd.links().is_empty());
    assert_eq!(view.odd.to_string(), "null");
}

#[test]
fn flat_view_lists_in_order() {
    let view = render("(1 + 2) * 3.5", ViewKind::Flat, Capacities::default()).unwrap();
    assert_eq!(view.to_string(),
               "Representation: [(, 1.0, +, 2.0, ), *, 3.5]\n\
                Result: 10.5\n\
                Even Numbers: [2.0]\n\
                Odd Numbers: [1.0]");
}

#[test]
fn chunked_view_partitions_input_literals() {
    let t = tokenize("1+2+3+4+5").unwrap();
    let view = render_chunked(&t.expression, &t.even, &t.odd, 15.0, 2, 1).unwrap();

    assert_eq!(view.input.to_vecs(), vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0]]);
    assert_eq!(view.input.values().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(view.even.to_vecs(), vec![vec![2.0], vec![4.0]]);
    assert_eq!(view.odd.to_vecs(), vec![vec![1.0], vec![3.0], vec![5.0]]);
}

#[test]
fn chunked_view_includes_fractional_literals_in_input_queues() {
    let t = tokenize("1.5 + 2 + 2.5").unwrap();
    let view = render_chunked(&t.expression, &t.even, &t.odd, 6.0, 5, 5).unwrap();
    assert_eq!(view.input.to_vecs(), vec![vec![1.5, 2.0, 2.5]]);
    assert_eq!(view.even.to_vecs(), vec![vec![2.0]]);
    assert!(view.odd.is_empty());
}

#[test]
fn largest_capacities_fit_every_literal_in_one_queue() {
    let t = tokenize("1+2*3").unwrap();
    let view = render_chunked(&t.expression, &t.even, &t.odd, 7.0, i64::MAX, i64::MAX).unwrap();
    assert_eq!(view.input.to_vecs(), vec![vec![1.0, 2.0, 3.0]]);
    assert_eq!(view.even.to_vecs(), vec![vec![2.0]]);
    assert_eq!(view.odd.to_vecs(), vec![vec![1.0, 3.0]]);
}

#[test]
fn chunked_view_display() {
    let view = render("6 / 3", ViewKind::Chunked, Capacities { input: 1, bucket: 3 }).unwrap();
    assert_eq!(view.to_string(),
               "Representation: [6.0, /, 3.0]\n\
                Result: 2.0\n\
                Input Queues:\n  Queue 1: [6.0]\n  Queue 2: [3.0]\n\
                Even Queues:\n  Queue 1: [6.0]\n\
                Odd Queues:\n  Queue 1: [3.0]");
}

#[test]
fn zero_capacity_is_a_config_error() {
    let t = tokenize("1+2").unwrap();
    assert_eq!(render_chunked(&t.expression, &t.even, &t.odd, 3.0, 0, 2).unwrap_err(),
               ConfigError::CapacityTooSmall { name: "input", value: 0 });
    assert_eq!(render_chunked(&t.expression, &t.even, &t.odd, 3.0, 2, -3).unwrap_err(),
               ConfigError::CapacityTooSmall { name: "bucket", value: -3 });
}

#[test]
fn capacity_errors_win_over_evaluation_errors() {
    let err = render("1/0", ViewKind::Chunked, Capacities { input: 0, bucket: 0 }).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn capacities_are_ignored_by_other_views() {
    let bad = Capacities { input: 0, bucket: 0 };
    assert!(render("1+1", ViewKind::Flat, bad).is_ok());
    assert!(render("1+1", ViewKind::Chain, bad).is_ok());
}

#[test]
fn every_view_reports_the_same_result() {
    let t = tokenize("-(2 + 3) * 4 / 8").unwrap();
    let expected = t.evaluate().unwrap();

    let views: Vec<View> = vec![t.chain_view().unwrap().into(),
                                t.chunked_view(Capacities::default()).unwrap().into(),
                                t.flat_view().unwrap().into()];
    for view in views {
        assert_eq!(view.result().to_bits(), expected.to_bits(), "{}", view.kind());
    }
}

#[test]
fn views_propagate_evaluation_errors() {
    let t = tokenize("4 / (2 - 2)").unwrap();
    assert_eq!(t.chain_view().unwrap_err(), EvaluationError::DivisionByZero);
    assert_eq!(t.flat_view().unwrap_err(), EvaluationError::DivisionByZero);
    assert_eq!(t.chunked_view(Capacities::default()).unwrap_err(),
               Error::Evaluation(EvaluationError::DivisionByZero));
}

#[test]
fn flat_render_is_pure_presentation() {
    let t = tokenize("9").unwrap();
    // the result is displayed as given, not recomputed
    let view = render_flat(&t.expression, &t.even, &t.odd, 42.0);
    assert_eq!(view.result, 42.0);
}
