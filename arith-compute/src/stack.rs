//! Explicit-stack evaluation, trading call-stack depth for heap-allocated
//! work and value stacks. Produces bit-identical results to the recursive
//! [`Eval`](crate::eval::Eval) implementation.

use arith_parser::parser::{
    ast::{chain::ChainLink, expr::Expr},
    op::BinOpKind,
};
use arith_seq::Seq;
use crate::eval::apply;

/// One pending unit of work for the stack machine.
#[derive(Clone, Copy, Debug)]
enum Step<'a> {
    /// Decompose this node into further steps; literals push their value
    /// directly onto the value stack.
    Expr(&'a Expr),

    /// Pop two values, apply the operator, push the result.
    Apply(BinOpKind),

    /// Pop one value, push its negation.
    Negate,
}

/// Evaluates the expression without recursing over the tree.
pub fn eval_stack(expr: &Expr) -> f64 {
    let mut steps: Seq<Step> = Seq::new().prepend(Step::Expr(expr));
    let mut values: Seq<f64> = Seq::new();

    while let Some(step) = steps.head().copied() {
        steps = steps.tail();
        match step {
            Step::Expr(Expr::Literal(literal)) => values = values.prepend(literal.value),
            Step::Expr(Expr::Paren(paren)) => {
                if !paren.sign {
                    steps = steps.prepend(Step::Negate);
                }
                steps = steps.prepend(Step::Expr(&paren.expr));
            },
            Step::Expr(Expr::Power(power)) => {
                steps = steps.prepend(Step::Apply(BinOpKind::Exp));
                steps = steps.prepend(Step::Expr(&power.exponent));
                steps = steps.prepend(Step::Expr(&power.base));
            },
            Step::Expr(Expr::Chain(chain)) => {
                // push the pairs in reverse so the chain unwinds left to right
                let links: Seq<&ChainLink> = chain.rest.iter().collect();
                let reversed = links.reverse();
                for link in reversed.iter() {
                    steps = steps.prepend(Step::Apply(link.op));
                    steps = steps.prepend(Step::Expr(&link.operand));
                }
                steps = steps.prepend(Step::Expr(&chain.first));
            },
            Step::Apply(op) => {
                let (rest, rhs) = pop(values);
                let (rest, lhs) = pop(rest);
                values = rest.prepend(apply(op, lhs, rhs));
            },
            Step::Negate => {
                let (rest, value) = pop(values);
                values = rest.prepend(-value);
            },
        }
    }

    let (rest, result) = pop(values);
    debug_assert!(rest.is_empty());
    result
}

fn pop(values: Seq<f64>) -> (Seq<f64>, f64) {
    match values.head().copied() {
        Some(value) => (values.tail(), value),
        // operands are always pushed before the step that consumes them
        None => unreachable!("value stack underflow"),
    }
}

#[cfg(test)]
mod tests {
    use arith_parser::parser::parse;
    use crate::eval::Eval;
    use super::*;

    /// Asserts the two evaluators agree on the source, bit for bit.
    fn assert_agreement(source: &str) {
        let expr = parse(source).unwrap();
        let recursive = expr.eval();
        let stacked = eval_stack(&expr);
        if recursive.is_nan() {
            assert!(stacked.is_nan(), "{source}: {recursive} vs {stacked}");
        } else {
            assert_eq!(recursive, stacked, "{source}");
        }
    }

    #[test]
    fn agrees_with_recursive_evaluator() {
        for source in [
            "16",
            "-3.5",
            "1 + 2 * 3",
            "10 - 4 - 3",
            "100 / 10 / 5",
            "2 ^ -2",
            "-(2 ^ 2) / 4",
            "(((10 + 5) * -6) - -20 / -2 * 3 + -100 - 50)",
            "-(((10 + 5) * -6) - -20 / -2 * 3 + -100 - 50)",
            "1 / 0",
            "0 / 0",
            "4 + ((1 + 2) * 3) * 5",
        ] {
            assert_agreement(source);
        }
    }

    #[test]
    fn long_chain() {
        let mut source = String::from("1");
        for _ in 0..10_000 {
            source.push_str(" + 1");
        }
        let expr = parse(&source).unwrap();
        assert_eq!(eval_stack(&expr), 10_001.0);
        assert_eq!(expr.eval(), 10_001.0);
    }

    #[test]
    fn deep_parens() {
        let depth = 200;
        let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        assert_agreement(&source);
    }
}
