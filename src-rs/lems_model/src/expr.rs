//! Parsed expression trees attached to time derivatives.
//!
//! The model tree does not evaluate expressions. It stores the tree produced
//! by the parser next to the raw expression text and prints it in a fully
//! parenthesized form, which makes operator precedence visible when
//! debugging the parser:
//!
//! - values are wrapped in braces: `{tau}`, `{2.5}`
//! - binary operations are `(<left> <op> <right>)`
//! - unary operations are `(<op> <operand>)`
//! - function calls are `(<name> <argument>)`

use std::fmt;

/// A parsed arithmetic expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal.
    Number(f64),
    /// Reference to a parameter, state variable, or other named quantity.
    Variable(String),
    /// Binary operation combining two expressions with an operator.
    BinaryOp {
        /// The binary operator to apply.
        op: BinaryOp,
        /// The left-hand operand.
        left: Box<Expr>,
        /// The right-hand operand.
        right: Box<Expr>,
    },
    /// Unary operation applied to a single expression.
    UnaryOp {
        /// The unary operator to apply.
        op: UnaryOp,
        /// The operand expression.
        expr: Box<Expr>,
    },
    /// Call of a single-argument built-in function such as `exp`.
    FunctionCall {
        /// The name of the function to call.
        name: String,
        /// The argument to pass to the function.
        arg: Box<Expr>,
    },
}

impl Expr {
    /// Creates a numeric literal expression.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number(value)
    }

    /// Creates a variable reference expression.
    #[must_use]
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Creates a binary operation expression.
    #[must_use]
    pub fn binary_op(op: BinaryOp, left: Self, right: Self) -> Self {
        Self::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Creates a unary operation expression.
    #[must_use]
    pub fn unary_op(op: UnaryOp, expr: Self) -> Self {
        Self::UnaryOp {
            op,
            expr: Box::new(expr),
        }
    }

    /// Creates a function call expression.
    #[must_use]
    pub fn function_call(name: impl Into<String>, arg: Self) -> Self {
        Self::FunctionCall {
            name: name.into(),
            arg: Box::new(arg),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{{{value}}}"),
            Self::Variable(name) => write!(f, "{{{name}}}"),
            Self::BinaryOp { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::UnaryOp { op, expr } => write!(f, "({op} {expr})"),
            Self::FunctionCall { name, arg } => write!(f, "({name} {arg})"),
        }
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition: `a + b`
    Add,
    /// Subtraction: `a - b`
    Sub,
    /// Multiplication: `a * b`
    Mul,
    /// Division: `a / b`
    Div,
    /// Exponentiation: `a ^ b`
    Pow,
}

impl BinaryOp {
    /// Returns the symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Negation: `-a`
    Neg,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Neg => f.write_str("-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_braced() {
        assert_eq!(Expr::variable("tau").to_string(), "{tau}");
        assert_eq!(Expr::number(2.5).to_string(), "{2.5}");
        assert_eq!(Expr::number(3.0).to_string(), "{3}");
    }

    #[test]
    fn nested_operations_are_parenthesized() {
        // (-v + i) / tau
        let expr = Expr::binary_op(
            BinaryOp::Div,
            Expr::binary_op(
                BinaryOp::Add,
                Expr::unary_op(UnaryOp::Neg, Expr::variable("v")),
                Expr::variable("i"),
            ),
            Expr::variable("tau"),
        );

        assert_eq!(expr.to_string(), "(((- {v}) + {i}) / {tau})");
    }

    #[test]
    fn function_call_shows_name_and_argument() {
        let expr = Expr::function_call(
            "exp",
            Expr::binary_op(BinaryOp::Mul, Expr::number(0.5), Expr::variable("v")),
        );

        assert_eq!(expr.to_string(), "(exp ({0.5} * {v}))");
    }
}
