//! Pattern expressions and their postfix form.

use crate::Predicate;

/// A pattern over tokens.
///
/// A list (`Seq`) is implicit concatenation. Bare predicates and literals
/// become `Atom`s through the `From` impls, so `pattern!["def", name()]`
/// reads like the token sequence it matches.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Expr {
    Atom(Predicate),
    Seq(Vec<Expr>),
    Union(Box<Expr>, Box<Expr>),
    Optional(Box<Expr>),
}

impl From<Predicate> for Expr {
    fn from(predicate: Predicate) -> Self {
        Expr::Atom(predicate)
    }
}

impl From<&str> for Expr {
    fn from(text: &str) -> Self {
        Expr::Atom(Predicate::from(text))
    }
}

impl From<Vec<Expr>> for Expr {
    fn from(items: Vec<Expr>) -> Self {
        Expr::Seq(items)
    }
}

/// Alternation of two expressions.
pub fn union(left: impl Into<Expr>, right: impl Into<Expr>) -> Expr {
    Expr::Union(Box::new(left.into()), Box::new(right.into()))
}

/// Match `inner` if possible, otherwise match nothing.
pub fn optional(inner: impl Into<Expr>) -> Expr {
    Expr::Optional(Box::new(inner.into()))
}

/// One step of the postfix automaton program.
///
/// Each op pops the automata it needs off the NFA stack and pushes exactly
/// one result.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Op {
    /// Push a two-state automaton with one transition labeled by the predicate.
    Atom(Predicate),
    /// Pop B, pop A, push A followed by B.
    Concat,
    /// Pop B, pop A, push A or B.
    Union,
    /// Pop A, push A or nothing.
    Optional,
    /// Push the automaton that accepts only the empty sequence.
    Empty,
}

enum Frame<'a> {
    Visit(&'a Expr),
    Emit(Op),
}

/// Flatten an expression into postfix ops.
///
/// Uses an explicit work stack, so nesting depth costs heap, not call
/// stack. A sequence `[a, b, c]` becomes `a b Concat c Concat`; an empty
/// sequence becomes `Empty`.
pub fn postfix(expr: &Expr) -> Vec<Op> {
    let mut program = Vec::new();
    let mut work = vec![Frame::Visit(expr)];

    while let Some(frame) = work.pop() {
        match frame {
            Frame::Emit(op) => program.push(op),
            Frame::Visit(Expr::Atom(predicate)) => program.push(Op::Atom(predicate.clone())),
            Frame::Visit(Expr::Seq(items)) => match items.split_first() {
                None => program.push(Op::Empty),
                Some((first, rest)) => {
                    for item in rest.iter().rev() {
                        work.push(Frame::Emit(Op::Concat));
                        work.push(Frame::Visit(item));
                    }
                    work.push(Frame::Visit(first));
                }
            },
            Frame::Visit(Expr::Union(left, right)) => {
                work.push(Frame::Emit(Op::Union));
                work.push(Frame::Visit(right));
                work.push(Frame::Visit(left));
            }
            Frame::Visit(Expr::Optional(inner)) => {
                work.push(Frame::Emit(Op::Optional));
                work.push(Frame::Visit(inner));
            }
        }
    }

    program
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{keyword, name, pattern};
    use pretty_assertions::assert_eq;

    fn atom(text: &str) -> Op {
        Op::Atom(Predicate::from(text))
    }

    #[test]
    fn sequence_interleaves_concat() {
        let expr = pattern!["a", "b", "c"];
        assert_eq!(
            postfix(&expr),
            vec![atom("a"), atom("b"), Op::Concat, atom("c"), Op::Concat]
        );
    }

    #[test]
    fn single_item_sequence_needs_no_concat() {
        let expr = pattern![keyword("def")];
        assert_eq!(postfix(&expr), vec![Op::Atom(keyword("def"))]);
    }

    #[test]
    fn nested_operators_come_after_operands() {
        let expr = pattern![optional("function"), name(), union("x", pattern!["y", "z"])];
        assert_eq!(
            postfix(&expr),
            vec![
                atom("function"),
                Op::Optional,
                Op::Atom(name()),
                Op::Concat,
                atom("x"),
                atom("y"),
                atom("z"),
                Op::Concat,
                Op::Union,
                Op::Concat,
            ]
        );
    }

    #[test]
    fn empty_sequence_is_empty_automaton() {
        assert_eq!(postfix(&pattern![]), vec![Op::Empty]);
    }

    #[test]
    fn deep_nesting_does_not_recurse() {
        let mut expr = Expr::from("x");
        for _ in 0..10_000 {
            expr = optional(expr);
        }
        let program = postfix(&expr);
        assert_eq!(program.len(), 10_001);
        assert_eq!(program.first(), Some(&atom("x")));
        // Dropping a deeply nested Box chain recurses; leak it instead.
        std::mem::forget(expr);
    }
}
