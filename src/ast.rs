use std::{fmt, mem};

/// An arithmetic operator joining two sub-expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// The tree is built bottom-up by the parser and never mutated afterwards.
/// Each `BinaryOp` exclusively owns its two operands, so dropping the root
/// drops the whole tree. Rendering, measuring and dropping a tree all use an
/// explicit stack, so arbitrarily long operator chains are safe.
///
/// `Display` renders the tree fully parenthesised, which makes grouping and
/// associativity visible:
/// ```
/// let ast = intcalc::parse("8 - 3 - 2 * 4").unwrap();
/// assert_eq!(ast.to_string(), "((8 - 3) - (2 * 4))");
/// ```
#[derive(Debug, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Literal {
        /// The non-negative value of the literal.
        value:    i64,
        /// Byte offset of the literal in the source.
        position: usize,
    },
    /// A binary operation.
    BinaryOp {
        /// The operator to apply.
        op:       BinaryOperator,
        /// The left operand, evaluated first.
        left:     Box<Self>,
        /// The right operand.
        right:    Box<Self>,
        /// Byte offset of the operator in the source.
        position: usize,
    },
}

impl Expr {
    /// Returns the number of nested levels in the tree. A literal has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((expr, level)) = pending.pop() {
            deepest = deepest.max(level);
            if let Self::BinaryOp { left, right, .. } = expr {
                pending.push((&**left, level + 1));
                pending.push((&**right, level + 1));
            }
        }
        deepest
    }

    /// Moves both operands out of a `BinaryOp`, leaving literals behind.
    fn take_operands(&mut self) -> Option<(Self, Self)> {
        match self {
            Self::Literal { .. } => None,
            Self::BinaryOp { left, right, .. } => {
                Some((mem::replace(left.as_mut(), Self::PLACEHOLDER),
                      mem::replace(right.as_mut(), Self::PLACEHOLDER)))
            },
        }
    }

    const PLACEHOLDER: Self = Self::Literal { value:    0,
                                              position: 0, };
}

// Operator chains build trees one level deep per operator, so the tree is
// torn down with an explicit stack rather than by recursing through `Box`.
impl Drop for Expr {
    fn drop(&mut self) {
        let Some((left, right)) = self.take_operands() else {
            return;
        };
        let mut pending = vec![left, right];
        while let Some(mut expr) = pending.pop() {
            if let Some((left, right)) = expr.take_operands() {
                pending.push(left);
                pending.push(right);
            }
        }
    }
}

/// A unit of output while rendering an expression.
enum Piece<'a> {
    Expr(&'a Expr),
    Operator(BinaryOperator),
    Text(&'static str),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending = vec![Piece::Expr(self)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Expr(Self::Literal { value, .. }) => write!(f, "{value}")?,
                Piece::Expr(Self::BinaryOp { op, left, right, .. }) => {
                    pending.extend([Piece::Text(")"),
                                    Piece::Expr(right),
                                    Piece::Operator(*op),
                                    Piece::Expr(left)]);
                    f.write_str("(")?;
                },
                Piece::Operator(op) => write!(f, " {op} ")?,
                Piece::Text(text) => f.write_str(text)?,
            }
        }
        Ok(())
    }
}
