mod common;

use common::{CallCounter, Event, constant, event, jet_eta, jet_pt, met, njets};
use lazyexpr::{ComposeError, EvalError, Evaluator, NamedExpr, Shape};
use pretty_assertions::assert_eq;

#[test]
fn index_selects_one_element_per_record() {
    let e = event();
    let leading = jet_pt().index(&constant(0.0)).unwrap();

    assert_eq!(leading.name(), "(jet_pt)[0]");
    assert_eq!(leading.shape(), Shape::Scalar);
    assert_eq!(leading.evaluate_scalar(&e).unwrap(), 120.0);

    let mut pt = jet_pt();
    pt.rename("pt");
    let second = pt.index(&constant(1.0)).unwrap();
    assert_eq!(second.name(), "(pt)[1]");
    assert_eq!(second.evaluate_scalar(&e).unwrap(), 45.0);
}

#[test]
fn index_position_is_computed_from_the_record() {
    let last = jet_pt().index(&(njets() - constant(1.0))).unwrap();

    assert_eq!(last.name(), "(jet_pt)[(njets)-(1)]");
    assert_eq!(last.evaluate_scalar(&event()).unwrap(), 22.0);

    let two_jets = Event { njets: 2.0,
                           ..event() };
    assert_eq!(last.evaluate_scalar(&two_jets).unwrap(), 45.0);
}

#[test]
fn fractional_positions_truncate_toward_zero() {
    let e = event();
    assert_eq!(jet_eta().index(&constant(1.9)).unwrap().evaluate_scalar(&e).unwrap(), -2.8);
    assert_eq!(jet_eta().index(&constant(-0.5)).unwrap().evaluate_scalar(&e).unwrap(), 0.5);
}

#[test]
fn out_of_range_positions_fail_at_evaluation() {
    let e = event();

    let past_end = jet_pt().index(&constant(3.0)).unwrap();
    assert_eq!(past_end.evaluate_scalar(&e).unwrap_err(),
               EvalError::IndexOutOfBounds { name:     "(jet_pt)[3]".to_string(),
                                             position: 3.0,
                                             len:      3, });

    let negative = jet_pt().index(&constant(-1.0)).unwrap();
    assert!(matches!(negative.evaluate_scalar(&e),
                     Err(EvalError::IndexOutOfBounds { len: 3, .. })));

    let nan = jet_pt().index(&(constant(0.0) / constant(0.0))).unwrap();
    assert!(matches!(nan.evaluate_scalar(&e), Err(EvalError::IndexOutOfBounds { .. })));

    let empty = Event { jet_pt: Vec::new(),
                        ..event() };
    let leading = jet_pt().index(&constant(0.0)).unwrap();
    assert!(matches!(leading.evaluate_scalar(&empty),
                     Err(EvalError::IndexOutOfBounds { len: 0, .. })));
}

#[test]
fn out_of_bounds_message_names_the_expression() {
    let err = jet_pt().index(&constant(7.0))
                      .unwrap()
                      .evaluate_scalar(&event())
                      .unwrap_err();
    assert_eq!(err.to_string(), "index 7 out of bounds for '(jet_pt)[7]' of length 3");
}

#[test]
fn indexing_a_scalar_is_rejected() {
    let err = met().index(&constant(0.0)).unwrap_err();
    assert_eq!(err, ComposeError::IndexOnScalar { name: "met".to_string() });
    assert_eq!(err.to_string(), "cannot apply indexing operator to scalar expression 'met'");
}

#[test]
fn vector_index_operand_is_rejected() {
    let err = jet_pt().index(&jet_eta()).unwrap_err();
    assert_eq!(err, ComposeError::VectorIndexOperand { name: "jet_eta".to_string() });
}

#[test]
fn unset_operands_are_rejected() {
    let unset = NamedExpr::<Event>::from_evaluator("nothing", Evaluator::Unset);

    assert_eq!(unset.index(&constant(0.0)).unwrap_err(),
               ComposeError::UnsetOperand { name: "nothing".to_string() });
    assert_eq!(jet_pt().index(&unset).unwrap_err(),
               ComposeError::UnsetOperand { name: "nothing".to_string() });
}

#[test]
fn indexed_expressions_keep_composing() {
    let leading = jet_pt().index(&constant(0.0)).unwrap();
    let hard = leading.greater(&constant(100.0)).and(&met().greater(&constant(200.0)));

    assert_eq!(hard.name(), "(((jet_pt)[0])>(100))&&((met)>(200))");
    assert_eq!(hard.evaluate_scalar(&event()).unwrap(), 1.0);
}

#[test]
fn sequence_is_evaluated_before_the_position() {
    let calls = CallCounter::default();
    let values = calls.vector("values", vec![5.0, 6.0]);
    let failing = NamedExpr::from_evaluator("failing",
                                            Evaluator::scalar(|_: &Event| {
                                                Err(EvalError::Unset { name: "position".to_string() })
                                            }));

    let pick = values.index(&failing).unwrap();
    assert!(matches!(pick.evaluate_scalar(&event()), Err(EvalError::Unset { .. })));
    assert_eq!(calls.get(), 1);
}
