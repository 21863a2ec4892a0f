use arith_seq::Seq;
use crate::parser::{
    ast::{expr::Expr, power::Power},
    error::Error,
    op::{BinOp, BinOpKind},
    Parser,
};
use std::{fmt, ops::Range};

/// Which precedence family a chain belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainKind {
    /// A chain of `+` and `-` applications.
    Term,

    /// A chain of `*` and `/` applications.
    Factor,
}

/// One link of a chain: the operator joining this operand to the running
/// left-hand side, and the operand itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainLink {
    /// The operator applied between the accumulated value and the operand.
    pub op: BinOpKind,

    /// The right-hand operand.
    pub operand: Expr,
}

/// A flattened run of same-precedence operator applications, evaluated left to
/// right, such as `1 - 2 + 3`.
///
/// In the lenient grammar a chain may mix the two operators of its family; in
/// the associative grammar every chain holds exactly one operator.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    /// The leading operand.
    pub first: Box<Expr>,

    /// The remaining operator and operand pairs, in source order. Non-empty by
    /// construction; a lone operand is never wrapped in a chain.
    pub rest: Seq<ChainLink>,

    /// The precedence family of the chain.
    pub kind: ChainKind,

    /// The region of the source code that this [`Chain`] was parsed from.
    pub span: Range<usize>,
}

impl Chain {
    /// Returns the span of the chain.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// The single operator shared by every link, or [`None`] if the chain
    /// mixes operators.
    pub fn operator(&self) -> Option<BinOpKind> {
        let first = self.rest.head()?.op;
        self.rest.iter().all(|link| link.op == first).then_some(first)
    }

    /// Returns true if reordering the operands cannot change the result.
    pub fn is_commutative(&self) -> bool {
        matches!(self.operator(), Some(op) if op.is_commutative())
    }

    /// All operands in source order, the leading one included.
    pub fn operands(&self) -> Seq<Expr> {
        std::iter::once((*self.first).clone())
            .chain(self.rest.iter().map(|link| link.operand.clone()))
            .collect()
    }

    /// Parses the lenient `+`/`-` layer.
    pub(crate) fn parse_term<'source>(input: &mut Parser<'source>) -> Result<Expr, Error> {
        Self::parse_layer(input, &[BinOpKind::Add, BinOpKind::Sub], ChainKind::Term, Self::parse_factor)
    }

    /// Parses the lenient `*`/`/` layer.
    pub(crate) fn parse_factor<'source>(input: &mut Parser<'source>) -> Result<Expr, Error> {
        Self::parse_layer(input, &[BinOpKind::Mul, BinOpKind::Div], ChainKind::Factor, Power::parse_or_lower)
    }

    /// Parses the associative `+` layer.
    pub(crate) fn parse_sum<'source>(input: &mut Parser<'source>) -> Result<Expr, Error> {
        Self::parse_layer(input, &[BinOpKind::Add], ChainKind::Term, Self::parse_difference)
    }

    /// Parses the associative `-` layer.
    pub(crate) fn parse_difference<'source>(input: &mut Parser<'source>) -> Result<Expr, Error> {
        Self::parse_layer(input, &[BinOpKind::Sub], ChainKind::Term, Self::parse_product)
    }

    /// Parses the associative `*` layer.
    pub(crate) fn parse_product<'source>(input: &mut Parser<'source>) -> Result<Expr, Error> {
        Self::parse_layer(input, &[BinOpKind::Mul], ChainKind::Factor, Self::parse_quotient)
    }

    /// Parses the associative `/` layer.
    pub(crate) fn parse_quotient<'source>(input: &mut Parser<'source>) -> Result<Expr, Error> {
        Self::parse_layer(input, &[BinOpKind::Div], ChainKind::Factor, Power::parse_or_lower)
    }

    /// Parses one precedence layer: a leading operand from the next-tighter
    /// layer, then any number of operator and operand pairs whose operator is
    /// in `ops`. Produces a [`Chain`] only when at least one pair was found.
    fn parse_layer<'source>(
        input: &mut Parser<'source>,
        ops: &[BinOpKind],
        kind: ChainKind,
        next: impl Fn(&mut Parser<'source>) -> Result<Expr, Error>,
    ) -> Result<Expr, Error> {
        let first = next(input)?;
        let mut links = Vec::new();

        loop {
            let mut ahead = input.clone();
            match ahead.try_parse::<BinOp>() {
                Ok(op) if ops.contains(&op.kind) => {
                    input.set_cursor(&ahead);
                    let operand = next(input)?;
                    links.push(ChainLink { op: op.kind, operand });
                },
                _ => break,
            }
        }

        let Some(last) = links.last() else {
            return Ok(first);
        };
        let span = first.span().start..last.operand.span().end;
        Ok(Expr::Chain(Chain {
            first: Box::new(first),
            rest: links.into_iter().collect(),
            kind,
            span,
        }))
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.first.fmt(f)?;
        for link in self.rest.iter() {
            write!(f, " {} {}", link.op, link.operand)?;
        }
        Ok(())
    }
}
