//! Shared records and leaf expressions for the integration tests.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use lazyexpr::{EvalResult, Evaluator, NamedExpr};

/// A small event record with per-event and per-jet quantities.
#[derive(Debug, Clone, Default)]
pub struct Event {
    pub met:     f64,
    pub njets:   f64,
    pub jet_pt:  Vec<f64>,
    pub jet_eta: Vec<f64>,
}

#[allow(dead_code)]
pub fn event() -> Event {
    Event { met:     250.0,
            njets:   3.0,
            jet_pt:  vec![120.0, 45.0, 22.0],
            jet_eta: vec![0.5, -2.8, 1.1], }
}

#[allow(dead_code)]
pub fn met() -> NamedExpr<Event> {
    NamedExpr::from_scalar("met", |e: &Event| e.met)
}

#[allow(dead_code)]
pub fn njets() -> NamedExpr<Event> {
    NamedExpr::from_scalar("njets", |e: &Event| e.njets)
}

#[allow(dead_code)]
pub fn jet_pt() -> NamedExpr<Event> {
    NamedExpr::from_vector("jet_pt", |e: &Event| e.jet_pt.clone())
}

#[allow(dead_code)]
pub fn jet_eta() -> NamedExpr<Event> {
    NamedExpr::from_vector("jet_eta", |e: &Event| e.jet_eta.clone())
}

#[allow(dead_code)]
pub fn constant(value: f64) -> NamedExpr<Event> {
    NamedExpr::constant(value)
}

/// Counts how many times a leaf is evaluated.
#[derive(Clone, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

#[allow(dead_code)]
impl CallCounter {
    pub fn get(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }

    pub fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    /// A scalar leaf returning `value` and counting its calls.
    pub fn scalar(&self, name: &str, value: f64) -> NamedExpr<Event> {
        let calls = self.clone();
        NamedExpr::from_evaluator(name,
                                  Evaluator::scalar(move |_: &Event| -> EvalResult<f64> {
                                      calls.bump();
                                      Ok(value)
                                  }))
    }

    /// A vector leaf returning `values` and counting its calls.
    pub fn vector(&self, name: &str, values: Vec<f64>) -> NamedExpr<Event> {
        let calls = self.clone();
        NamedExpr::from_evaluator(name,
                                  Evaluator::vector(move |_: &Event| -> EvalResult<Vec<f64>> {
                                      calls.bump();
                                      Ok(values.clone())
                                  }))
    }
}

/// Installs a test subscriber honoring `RUST_LOG`, once per test binary.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                                     .with_test_writer()
                                     .try_init();
}
