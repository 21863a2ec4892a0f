//! Direct recursive evaluation of expression trees.

use arith_parser::parser::{
    ast::{chain::Chain, expr::Expr, literal::LitNum, paren::Paren, power::Power},
    op::BinOpKind,
};

/// Applies a binary operator to two evaluated operands.
pub fn apply(op: BinOpKind, lhs: f64, rhs: f64) -> f64 {
    match op {
        BinOpKind::Add => lhs + rhs,
        BinOpKind::Sub => lhs - rhs,
        BinOpKind::Mul => lhs * rhs,
        BinOpKind::Div => lhs / rhs,
        BinOpKind::Exp => lhs.powf(rhs),
    }
}

/// Any node that can be evaluated to a number.
///
/// Evaluation itself never fails; division by zero and the other IEEE edge
/// cases surface as infinities or NaN in the result.
pub trait Eval {
    /// Evaluates the node.
    fn eval(&self) -> f64;
}

impl Eval for Expr {
    fn eval(&self) -> f64 {
        match self {
            Expr::Literal(literal) => literal.eval(),
            Expr::Paren(paren) => paren.eval(),
            Expr::Power(power) => power.eval(),
            Expr::Chain(chain) => chain.eval(),
        }
    }
}

impl Eval for LitNum {
    fn eval(&self) -> f64 {
        self.value
    }
}

impl Eval for Paren {
    fn eval(&self) -> f64 {
        let value = self.expr.eval();
        if self.sign {
            value
        } else {
            -value
        }
    }
}

impl Eval for Power {
    fn eval(&self) -> f64 {
        self.base.eval().powf(self.exponent.eval())
    }
}

impl Eval for Chain {
    fn eval(&self) -> f64 {
        self.rest
            .iter()
            .fold(self.first.eval(), |acc, link| apply(link.op, acc, link.operand.eval()))
    }
}

#[cfg(test)]
mod tests {
    use arith_parser::parser::parse;
    use super::*;

    /// Parses and evaluates the source with the recursive evaluator.
    fn eval_str(source: &str) -> f64 {
        parse(source).unwrap().eval()
    }

    #[test]
    fn precedence() {
        assert_eq!(eval_str("1 + 2 * 3"), 7.0);
        assert_eq!(eval_str("(1 + 2) * 3"), 9.0);
    }

    #[test]
    fn left_to_right_chains() {
        assert_eq!(eval_str("10 - 4 - 3"), 3.0);
        assert_eq!(eval_str("100 / 10 / 5"), 2.0);
        assert_eq!(eval_str("1 - 2 + 3"), 2.0);
    }

    #[test]
    fn negation() {
        assert_eq!(eval_str("-(100)"), -100.0);
        assert_eq!(eval_str("-(2 * 3) + 1"), -5.0);
        assert_eq!(eval_str("-3.5"), -3.5);
    }

    #[test]
    fn exponentiation() {
        assert_eq!(eval_str("2 ^ 10"), 1024.0);
        assert_eq!(eval_str("2 ^ -2"), 0.25);
        // the sign is part of the literal, not a lower-precedence negation
        assert_eq!(eval_str("-3 ^ 2"), 9.0);
        assert_eq!(eval_str("2.5e2"), 250.0);
    }

    #[test]
    fn nested_signs() {
        let source = "(((10 + 5) * -6) - -20 / -2 * 3 + -100 - 50)";
        assert_eq!(eval_str(source), -270.0);
        assert_eq!(eval_str(&format!("-{source}")), 270.0);
    }

    #[test]
    fn ieee_edge_cases() {
        assert_eq!(eval_str("1 / 0"), f64::INFINITY);
        assert_eq!(eval_str("-1 / 0"), f64::NEG_INFINITY);
        assert!(eval_str("0 / 0").is_nan());
        assert_eq!(eval_str("0 ^ 0"), 1.0);
    }

    #[test]
    fn float_accumulation() {
        assert_float_eq::assert_float_absolute_eq!(eval_str("1 / 3 + 1 / 3 + 1 / 3"), 1.0);
        assert_float_eq::assert_float_absolute_eq!(eval_str("0.1 + 0.2"), 0.3);
    }
}
