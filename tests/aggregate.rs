mod common;

use common::{Event, constant, event, jet_eta, jet_pt, met};
use lazyexpr::{
    EvalError, Evaluator, ExprValue, NamedExpr,
    aggregate::{all_subobjects_pass, any_true, evaluate_all_pass},
};
use pretty_assertions::assert_eq;

#[test]
fn any_true_looks_for_a_nonzero_element() {
    assert!(any_true(&[0.0, 0.0, 1.0]));
    assert!(any_true(&[f64::NAN]));
    assert!(!any_true(&[0.0, -0.0]));
    assert!(!any_true(&[]));
}

#[test]
fn all_subobjects_pass_needs_one_index_true_everywhere() {
    assert!(all_subobjects_pass(&[vec![1.0, 0.0, 1.0], vec![0.0, 1.0, 1.0]]));
    assert!(!all_subobjects_pass(&[vec![1.0, 0.0], vec![0.0, 1.0]]));
    assert!(all_subobjects_pass(&[vec![0.0, 3.0]]));
}

#[test]
fn all_subobjects_pass_only_considers_shared_indices() {
    // Index 2 is true in the first sequence but missing from the second.
    assert!(!all_subobjects_pass(&[vec![0.0, 0.0, 1.0], vec![1.0, 1.0]]));
    assert!(!all_subobjects_pass(&[vec![1.0, 1.0], Vec::new()]));
}

#[test]
fn all_subobjects_pass_rejects_empty_collections() {
    assert!(!all_subobjects_pass::<Vec<f64>>(&[]));
    assert!(!all_subobjects_pass(&[Vec::<f64>::new()]));
}

#[test]
fn all_subobjects_pass_accepts_borrowed_slices() {
    let pt = [1.0, 0.0];
    let eta = [1.0, 1.0];
    assert!(all_subobjects_pass(&[&pt[..], &eta[..]]));
}

#[test]
fn evaluate_all_pass_combines_vector_selections() {
    let e = event();
    let hard = jet_pt().greater(&constant(40.0));
    let central = jet_eta().less(&constant(2.4)).and(&jet_eta().greater(&constant(-2.4)));

    // hard = [1, 1, 0], central = [1, 0, 1]
    assert!(evaluate_all_pass(&[hard, central.clone()], &e).unwrap());

    let very_hard = jet_pt().greater(&constant(100.0));
    let forward = central.unary(lazyexpr::operator::UnaryOperator::Not);
    // very_hard = [1, 0, 0], forward = [0, 1, 0]
    assert!(!evaluate_all_pass(&[very_hard, forward], &e).unwrap());
}

#[test]
fn scalar_selections_only_veto() {
    let e = event();
    let hard = jet_pt().greater(&constant(40.0));

    assert!(evaluate_all_pass(&[hard.clone(), met().greater(&constant(200.0))], &e).unwrap());
    assert!(!evaluate_all_pass(&[hard, met().greater(&constant(300.0))], &e).unwrap());

    assert!(evaluate_all_pass(&[met().greater(&constant(200.0))], &e).unwrap());
    assert!(!evaluate_all_pass(&[met().less(&constant(200.0))], &e).unwrap());
}

#[test]
fn no_selections_never_pass() {
    assert!(!evaluate_all_pass::<Event>(&[], &event()).unwrap());
}

#[test]
fn evaluate_all_pass_reports_unset_expressions() {
    let unset = NamedExpr::<Event>::from_evaluator("nothing", Evaluator::Unset);
    let err = evaluate_all_pass(&[jet_pt(), unset], &event()).unwrap_err();
    assert_eq!(err, EvalError::Unset { name: "nothing".to_string() });
}

#[test]
fn values_pass_when_anything_is_true() {
    let e = event();
    assert!(jet_pt().greater(&constant(100.0)).evaluate(&e).unwrap().passes());
    assert!(!jet_pt().greater(&constant(500.0)).evaluate(&e).unwrap().passes());
    assert!(met().evaluate(&e).unwrap().passes());
    assert!(!ExprValue::Scalar(0.0).passes());
    assert_eq!(ExprValue::from(vec![1.0]).as_sequence(), Some(&[1.0][..]));
    assert_eq!(ExprValue::from(2.0).as_scalar(), Some(2.0));
}
