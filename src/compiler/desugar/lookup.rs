// The lookup procedure behind desugared dictionaries.
//
// ```scheme
// (define dict
//   (lambda (pairs)
//     (lambda (key)
//       (if (pair? pairs)
//           (if (eq? key (car (car pairs)))
//               (cdr (car pairs))
//               ((dict (cdr pairs)) key))
//           #f))))
// ```
//
// `(dict alist)` returns a procedure of one key doing an ordered linear
// search with `eq?`. A missing key yields `#f`, whereas the `get` primitive
// fails. The recursive call goes through the global name, so `dict` must be
// defined at the top level.

use crate::compiler::frontend::parser::expression::define::{self, Definition};
use crate::compiler::frontend::parser::expression::Expression;
use crate::vm::primitive::PrimOp;
use crate::vm::value::Symbol;

pub const DICT_PROCEDURE: &str = "dict";

const PAIRS: &str = "pairs";
const KEY: &str = "key";

/// Reference to the synthesized procedure. This is a variable, not the
/// `dict` primitive.
pub fn procedure_reference() -> Expression {
    Expression::variable(DICT_PROCEDURE)
}

pub fn definition() -> Definition {
    define::build(Symbol::from(DICT_PROCEDURE), procedure())
}

fn procedure() -> Expression {
    let pairs = || Expression::variable(PAIRS);
    let key = || Expression::variable(KEY);
    let first_entry = || call(PrimOp::Car, vec![pairs()]);

    let found = call(PrimOp::Eq, vec![key(), call(PrimOp::Car, vec![first_entry()])]);
    let rest = Expression::apply(
        Expression::apply(procedure_reference(), vec![call(PrimOp::Cdr, vec![pairs()])]),
        vec![key()],
    );
    let search = Expression::conditional(
        call(PrimOp::PairP, vec![pairs()]),
        Expression::conditional(found, call(PrimOp::Cdr, vec![first_entry()]), rest),
        Expression::boolean(false),
    );

    Expression::lambda(
        vec![Symbol::from(PAIRS)],
        vec![Expression::lambda(vec![Symbol::from(KEY)], vec![search])],
    )
}

#[inline]
fn call(op: PrimOp, operands: Vec<Expression>) -> Expression {
    Expression::apply(Expression::primitive(op), operands)
}
