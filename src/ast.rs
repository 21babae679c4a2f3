use crate::interpreter::lexer::Operator;

/// Canonical surface-form rendering of the tree.
mod display;

/// An ordered sequence of statements.
///
/// The whole program is a `Block`, and so is every loop body, branch and
/// function body. Statements run in the order they appear.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    /// The statements in execution order.
    pub statements: Vec<Statement>,
}

impl Block {
    /// Creates a block from its statements.
    #[must_use]
    pub const fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions evaluate to a runtime value. Operands are always expressions
/// themselves, never statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A run of decimal digits, kept as written and converted when
    /// evaluated.
    NumberLiteral(String),
    /// A string literal without its quotes.
    StringLiteral(String),
    /// Reference to a variable by name.
    Variable(String),
    /// A binary operation. The parser only builds these with `+ - * /`.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    Operator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Function call expression (e.g. `square(x)`).
    FunctionCall {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, in order.
        arguments: Vec<Self>,
    },
}

impl Expr {
    /// Builds a binary operation node.
    ///
    /// ## Example
    /// ```
    /// use chapa::{ast::Expr, interpreter::lexer::Operator};
    ///
    /// let sum = Expr::binary(Expr::Variable("x".into()),
    ///                        Operator::Plus,
    ///                        Expr::NumberLiteral("1".into()));
    ///
    /// assert_eq!(sum.to_string(), "x + 1");
    /// ```
    #[must_use]
    pub fn binary(left: Self, op: Operator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }
}

/// A single comparison used by `jar`, `joparyant` and `paryant` headers.
///
/// It is not an expression: operands are limited to a number or a variable
/// and there is exactly one operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    /// Left comparand.
    pub left:  Expr,
    /// The comparison operator as written.
    pub op:    Operator,
    /// Right comparand.
    pub right: Expr,
}

/// A user-defined function declared with `karya`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in order.
    pub params: Vec<String>,
    /// The statements run when the function is called.
    pub body:   Block,
}

/// Represents a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `he aahe name = value;`
    VariableDeclaration {
        /// The name of the variable.
        name:  String,
        /// The initial value of the variable.
        value: Expr,
    },
    /// `name = value;`
    Assignment {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
    },
    /// `chapa(expr);`
    Print(Expr),
    /// `jar (condition) then [nahitar else]`
    If {
        /// The condition choosing the branch.
        condition:   Condition,
        /// Block run when the condition holds.
        then_branch: Block,
        /// Block run otherwise, if present.
        else_branch: Option<Block>,
    },
    /// `joparyant (condition) body sampel`
    While {
        /// Checked before every iteration.
        condition: Condition,
        /// The loop body.
        body:      Block,
    },
    /// `paryant (init; condition; increment) body sampel`
    For {
        /// Runs once before the loop. Always a `VariableDeclaration`.
        init:      Box<Self>,
        /// Checked before every iteration.
        condition: Condition,
        /// Runs after every iteration. Always an `Assignment`.
        increment: Box<Self>,
        /// The loop body.
        body:      Block,
    },
    /// A user-defined function declaration.
    Function(FunctionDecl),
    /// `parat expr;`
    Return(Expr),
}
