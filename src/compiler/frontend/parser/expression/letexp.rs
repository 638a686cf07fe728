use super::{parse_binder, parse_body, Expression};
use crate::compiler::error::Error;
use crate::compiler::frontend::parser::Result;
use crate::vm::value::{Symbol, Value};

#[derive(Clone, PartialEq, Debug)]
pub struct LetExpression {
    pub bindings: Vec<(Symbol, Expression)>,
    pub body: Vec<Expression>,
}

pub fn build(bindings: Vec<(Symbol, Expression)>, body: Vec<Expression>) -> LetExpression {
    LetExpression { bindings, body }
}

/// Parse a let expression
///
/// ```grammar
/// <let> -> (let (<binding spec>*) <expression>+)
/// <binding spec> -> (<identifier> <expression>)
/// ```
pub fn parse(operands: &[Value]) -> Result<Expression> {
    match operands {
        [bindings, body @ ..] => {
            let bindings = parse_bindings(bindings)?;
            let body = parse_body(body, "let")?;

            Ok(Expression::Let(build(bindings, body)))
        }
        _ => Err(Error::parse_error("Expected (let (<binding spec>*) <body>)")),
    }
}

fn parse_bindings(datum: &Value) -> Result<Vec<(Symbol, Expression)>> {
    let specs = datum.list_to_vec().ok_or_else(|| {
        Error::parse_error(format!("Expected a list of bindings but got {}", datum))
    })?;

    specs.iter().map(parse_binding).collect()
}

fn parse_binding(datum: &Value) -> Result<(Symbol, Expression)> {
    match datum.list_to_vec().as_deref() {
        Some([name, expr]) => Ok((parse_binder(name, "let")?, Expression::parse(expr)?)),
        _ => Err(Error::parse_error(format!(
            "Expected (<identifier> <expression>) but got {}",
            datum
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::frontend::parser::expression::tests::*;

    #[test]
    fn test_parse_let() {
        assert_parse_as(
            "(let ((x 1) (y \"two\")) x)",
            Expression::let_bindings(
                vec![
                    (Symbol::from("x"), Expression::number(1.0)),
                    (Symbol::from("y"), Expression::string("two")),
                ],
                vec![Expression::variable("x")],
            ),
        );

        assert_parse_as(
            "(let () 1)",
            Expression::let_bindings(vec![], vec![Expression::number(1.0)]),
        );
    }

    #[test]
    fn test_parse_let_errors() {
        assert_parse_error("(let ((x)) x)");
        assert_parse_error("(let ((1 2)) x)");
        assert_parse_error("(let ((x 1)))");
        assert_parse_error("(let x 1)");
    }

    #[test]
    fn test_primitive_names_are_not_bound() {
        assert_parse_error("(let ((dict 5)) ((dict (a 1)) 'a))");
        assert_parse_error("(let ((x 1) (+ 2)) x)");
    }
}
