//! Enumeration of the algebraically equivalent forms of an expression
//! obtained by reordering the operands of its commutative chains.

use arith_parser::parser::{
    self,
    ast::{chain::Chain, expr::Expr},
    error::Error,
    op::BinOpKind,
};
use arith_seq::Seq;
use std::collections::BTreeSet;

/// Parses the source with the associative grammar and returns every textual
/// form reachable by permuting the operands of `+` and `*` chains, applied
/// recursively inside parentheses and sub-chains. Duplicate renderings, which
/// arise when operands share their text, are merged.
pub fn commuted_expressions(source: &str) -> Result<BTreeSet<String>, Error> {
    let expr = parser::parse_associative(source)?;
    Ok(variants(&expr).iter().cloned().collect())
}

/// All renderings of this node, in no particular order.
fn variants(expr: &Expr) -> Seq<String> {
    match expr {
        Expr::Literal(literal) => singleton(literal.text.clone()),
        Expr::Paren(paren) => {
            let sign = if paren.sign { "" } else { "-" };
            variants(&paren.expr).map(|inner| format!("{sign}({inner})"))
        },
        Expr::Power(power) => variants(&power.base).flat_map(|base| {
            variants(&power.exponent).map(|exponent| format!("{base} ^ {exponent}"))
        }),
        Expr::Chain(chain) if chain.is_commutative() => permute_chain(chain),
        // `-` and `/` chains are order-sensitive; render them as parsed
        expr => singleton(expr.to_string()),
    }
}

fn permute_chain(chain: &Chain) -> Seq<String> {
    let Some(op) = chain.operator() else {
        // is_commutative already proved the operator is uniform
        unreachable!("commutative chain with mixed operators");
    };
    chain
        .operands()
        .permutations()
        .flat_map(|ordering| join_variants(ordering, op))
}

/// The cross product of each operand's own variants, joined with `op` in the
/// given operand order.
fn join_variants(ordering: &Seq<Expr>, op: BinOpKind) -> Seq<String> {
    let mut joined = singleton(String::new());
    for (index, operand) in ordering.iter().enumerate() {
        let parts = variants(operand);
        joined = joined.flat_map(|prefix| {
            parts.map(|part| {
                if index == 0 {
                    part.clone()
                } else {
                    format!("{prefix} {op} {part}")
                }
            })
        });
    }
    joined
}

fn singleton(text: String) -> Seq<String> {
    Seq::new().prepend(text)
}

#[cfg(test)]
mod tests {
    use crate::eval::Eval;
    use super::*;

    /// The commuted forms of the source.
    fn commuted(source: &str) -> BTreeSet<String> {
        commuted_expressions(source).unwrap()
    }

    /// Asserts every form parses and evaluates to the expected value.
    fn assert_all_evaluate(forms: &BTreeSet<String>, expected: f64) {
        for form in forms {
            let value = parser::parse(form).unwrap().eval();
            assert_eq!(value, expected, "{form}");
        }
    }

    #[test]
    fn three_term_sum() {
        let forms = commuted("2 + 3 + 4");
        assert_eq!(forms.len(), 6);
        assert!(forms.contains("2 + 3 + 4"));
        assert!(forms.contains("4 + 3 + 2"));
        assert_all_evaluate(&forms, 9.0);
    }

    #[test]
    fn subtraction_does_not_commute() {
        let forms = commuted("2 - 3 - 4");
        assert_eq!(forms, BTreeSet::from(["2 - 3 - 4".to_string()]));
    }

    #[test]
    fn division_does_not_commute() {
        let forms = commuted("100 / 10 / 5");
        assert_eq!(forms.len(), 1);
    }

    #[test]
    fn nested_parenthesis_permutes_inside() {
        let forms = commuted("2 * (3 + 4)");
        let expected = BTreeSet::from([
            "2 * (3 + 4)".to_string(),
            "2 * (4 + 3)".to_string(),
            "(3 + 4) * 2".to_string(),
            "(4 + 3) * 2".to_string(),
        ]);
        assert_eq!(forms, expected);
        assert_all_evaluate(&forms, 14.0);
    }

    #[test]
    fn negated_parenthesis_keeps_its_sign() {
        let forms = commuted("-(1 + 2)");
        let expected = BTreeSet::from([
            "-(1 + 2)".to_string(),
            "-(2 + 1)".to_string(),
        ]);
        assert_eq!(forms, expected);
        assert_all_evaluate(&forms, -3.0);
    }

    #[test]
    fn mixed_run_commutes_at_the_sum_level() {
        // the associative grammar groups `1 - 2` as one operand of the sum
        let forms = commuted("1 - 2 + 3");
        let expected = BTreeSet::from([
            "1 - 2 + 3".to_string(),
            "3 + 1 - 2".to_string(),
        ]);
        assert_eq!(forms, expected);
        assert_all_evaluate(&forms, 2.0);
    }

    #[test]
    fn duplicate_operands_merge() {
        let forms = commuted("1 + 1");
        assert_eq!(forms.len(), 1);
    }

    #[test]
    fn lone_literal() {
        assert_eq!(commuted("5"), BTreeSet::from(["5".to_string()]));
    }

    #[test]
    fn power_operands_permute_recursively() {
        let forms = commuted("(2 + 3) ^ 2");
        assert_eq!(forms.len(), 2);
        assert_all_evaluate(&forms, 25.0);
    }
}
