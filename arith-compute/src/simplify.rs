//! Single-step simplification: evaluate exactly one operation of the source
//! and splice the result back into the text, producing the next line of a
//! worked solution.

use arith_parser::parser::{
    self,
    ast::{
        chain::{Chain, ChainKind},
        expr::Expr,
        paren::Paren,
    },
    error::Error,
};
use crate::eval::{apply, Eval};

/// The piece of the tree the next step applies to.
enum Target<'a> {
    /// Evaluate the first operator application of this chain. When
    /// `enclosing` is set, the chain is the entire content of that
    /// parenthesis and this step finishes it, so the whole parenthesis is
    /// replaced by the (sign-adjusted) result.
    Step {
        chain: &'a Chain,
        enclosing: Option<&'a Paren>,
    },

    /// A parenthesis whose content holds no further operation: replace it
    /// with its value, sign applied.
    Collapse(&'a Paren),
}

/// Rewrites `source` by evaluating its next single operation, formatting the
/// result with `fmt`, and splicing it over the span the operation covered.
///
/// The step order mirrors how a person works an expression by hand: the
/// leftmost innermost parenthesis first, then the leftmost `*`/`/` chain,
/// then the leftmost `+`/`-` chain. The spliced text is re-parsed and
/// re-rendered, so the output is always canonically spaced. A source that is
/// already a lone number is returned unchanged; repeated application
/// therefore reaches a fixed point.
pub fn simplify_step<F>(source: &str, fmt: F) -> Result<String, Error>
where
    F: Fn(f64) -> String,
{
    let expr = parser::parse(source)?;

    let (span, value) = match locate(&expr) {
        Some(Target::Step { chain, enclosing }) => {
            let Some(link) = chain.rest.head() else {
                unreachable!("chains always have at least one link");
            };
            let stepped = apply(link.op, chain.first.eval(), link.operand.eval());
            match enclosing {
                Some(paren) => {
                    let value = if paren.sign { stepped } else { -stepped };
                    (paren.span(), value)
                },
                None => (chain.first.span().start..link.operand.span().end, stepped),
            }
        },
        Some(Target::Collapse(paren)) => (paren.span(), paren.eval()),
        None => {
            // a lone number is already fully reduced
            if let Expr::Literal(_) = expr {
                return Ok(source.to_string());
            }
            // no parenthesis and no chain, e.g. a bare `2 ^ 3`: finish it
            (expr.span(), expr.eval())
        },
    };

    let mut spliced = String::with_capacity(source.len());
    spliced.push_str(&source[..span.start]);
    spliced.push_str(&fmt(value));
    spliced.push_str(&source[span.end..]);

    // re-parse rather than trusting raw text surgery to stay well formed
    let reduced = parser::parse(&spliced)?;
    Ok(reduced.to_string())
}

/// Finds the piece of the tree the next step applies to, or [`None`] if the
/// expression contains no operation at all.
fn locate(expr: &Expr) -> Option<Target> {
    if let Some(paren) = first_paren(expr) {
        let target = match locate(&paren.expr) {
            Some(Target::Step { chain, enclosing: None }) => {
                let whole_content =
                    matches!(&*paren.expr, Expr::Chain(inner) if std::ptr::eq(inner, chain));
                let finishes = chain.rest.size() == 1;
                Target::Step {
                    chain,
                    enclosing: (whole_content && finishes).then_some(paren),
                }
            },
            Some(target) => target,
            None => Target::Collapse(paren),
        };
        return Some(target);
    }

    first_chain(expr, ChainKind::Factor)
        .or_else(|| first_chain(expr, ChainKind::Term))
        .map(|chain| Target::Step { chain, enclosing: None })
}

/// The leftmost parenthesis in the tree, by source order.
fn first_paren(expr: &Expr) -> Option<&Paren> {
    match expr {
        Expr::Literal(_) => None,
        Expr::Paren(paren) => Some(paren),
        Expr::Power(power) => {
            first_paren(&power.base).or_else(|| first_paren(&power.exponent))
        },
        Expr::Chain(chain) => first_paren(&chain.first)
            .or_else(|| chain.rest.iter().find_map(|link| first_paren(&link.operand))),
    }
}

/// The leftmost chain of the given family, by source order. Does not descend
/// into parentheses; those are handled before chains are considered.
fn first_chain(expr: &Expr, kind: ChainKind) -> Option<&Chain> {
    match expr {
        Expr::Literal(_) | Expr::Paren(_) | Expr::Power(_) => None,
        Expr::Chain(chain) if chain.kind == kind => Some(chain),
        Expr::Chain(chain) => first_chain(&chain.first, kind)
            .or_else(|| chain.rest.iter().find_map(|link| first_chain(&link.operand, kind))),
    }
}
