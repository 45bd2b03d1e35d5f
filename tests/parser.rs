mod common;

use std::collections::HashMap;

use common::{Event, event, jet_pt, met, njets};
use lazyexpr::{ComposeError, NamedExpr, Shape, operator::BinaryOperator, parser::ExpressionParser};
use pretty_assertions::assert_eq;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
enum ToyParseError {
    #[error("unknown variable '{0}'")]
    UnknownVariable(String),
    #[error("unknown operator '{0}'")]
    UnknownOperator(String),
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
    #[error("expected `name` or `name op number`")]
    Malformed,
}

/// Understands `name` and `name op number`, nothing else.
struct Toy {
    variables: HashMap<&'static str, NamedExpr<Event>>,
}

impl Toy {
    fn new() -> Self {
        let variables = HashMap::from([("met", met()), ("njets", njets()), ("jet_pt", jet_pt())]);
        Self { variables }
    }

    fn variable(&self, name: &str) -> Result<NamedExpr<Event>, ToyParseError> {
        self.variables
            .get(name)
            .cloned()
            .ok_or_else(|| ToyParseError::UnknownVariable(name.to_string()))
    }
}

impl ExpressionParser<Event> for Toy {
    type Error = ToyParseError;

    fn parse(&self, text: &str) -> Result<NamedExpr<Event>, ToyParseError> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        match tokens.as_slice() {
            [name] => self.variable(name),
            [name, op, number] => {
                let op = match *op {
                    "+" => BinaryOperator::Add,
                    "*" => BinaryOperator::Mul,
                    ">" => BinaryOperator::Greater,
                    "<" => BinaryOperator::Less,
                    other => return Err(ToyParseError::UnknownOperator(other.to_string())),
                };
                let value = number.parse::<f64>()
                                  .map_err(|_| ToyParseError::InvalidNumber(number.to_string()))?;
                Ok(self.variable(name)?.binary(op, &NamedExpr::constant(value)))
            },
            _ => Err(ToyParseError::Malformed),
        }
    }
}

#[test]
fn parsed_expressions_keep_the_parser_name_and_evaluator() {
    let toy = Toy::new();

    let cut = NamedExpr::from_text(&toy, "met > 200").unwrap();
    assert_eq!(cut.name(), "(met)>(200)");
    assert_eq!(cut.evaluate_scalar(&event()).unwrap(), 1.0);

    let hard = NamedExpr::from_text(&toy, "jet_pt > 40").unwrap();
    assert_eq!(hard.shape(), Shape::Vector);
    assert_eq!(hard.evaluate_vector(&event()).unwrap(), vec![1.0, 1.0, 0.0]);
}

#[test]
fn parsed_expressions_compose_like_any_other() {
    let toy = Toy::new();
    let a = NamedExpr::from_text(&toy, "njets * 2").unwrap();
    let b = NamedExpr::from_text(&toy, "met").unwrap();

    let sum = &a + &b;
    assert_eq!(sum.name(), "((njets)*(2))+(met)");
    assert_eq!(sum.evaluate_scalar(&event()).unwrap(), 256.0);
}

#[test]
fn parser_errors_are_returned_unchanged() {
    let toy = Toy::new();

    assert_eq!(NamedExpr::from_text(&toy, "ht").unwrap_err(),
               ToyParseError::UnknownVariable("ht".to_string()));
    assert_eq!(NamedExpr::from_text(&toy, "met ^ 2").unwrap_err(),
               ToyParseError::UnknownOperator("^".to_string()));
    assert_eq!(NamedExpr::from_text(&toy, "met > lots").unwrap_err(),
               ToyParseError::InvalidNumber("lots".to_string()));
    assert_eq!(NamedExpr::from_text(&toy, "").unwrap_err(), ToyParseError::Malformed);
}

#[test]
fn closures_can_act_as_parsers() {
    let only_met = |text: &str| -> Result<NamedExpr<Event>, ComposeError> {
        if text.trim() == "met" {
            Ok(met())
        } else {
            Err(ComposeError::UnsetOperand { name: text.to_string() })
        }
    };

    assert_eq!(NamedExpr::from_text(&only_met, " met ").unwrap().name(), "met");
    assert!(NamedExpr::from_text(&only_met, "njets").is_err());
    assert_eq!(only_met.parse("met").unwrap().evaluate_scalar(&event()).unwrap(), 250.0);
}
