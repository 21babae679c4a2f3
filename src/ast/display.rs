use std::fmt;

use crate::ast::{Block, Condition, Expr, FunctionDecl, Statement};

const INDENT: &str = "    ";

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NumberLiteral(text) => write!(f, "{text}"),
            Self::StringLiteral(text) => write!(f, "\"{text}\""),
            Self::Variable(name) => write!(f, "{name}"),
            // Expressions fold to the left without precedence, so only a
            // nested right operand needs parentheses to keep its shape.
            Self::BinaryOp { left, op, right } => match right.as_ref() {
                Self::BinaryOp { .. } => write!(f, "{left} {op} ({right})"),
                _ => write!(f, "{left} {op} {right}"),
            },
            Self::FunctionCall { name, arguments } => {
                write!(f, "{name}(")?;
                write_list(f, arguments)?;
                write!(f, ")")
            },
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op, self.right)
    }
}

/// Renders the program in canonical surface form: lower-case keywords, one
/// statement per line, braces around every body.
///
/// The output scans and parses back to an equal tree.
///
/// # Example
/// ```
/// use chapa::{parse, scan};
///
/// let program = parse(&scan("JAR (x<1) chapa(x+1); nahitar chapa(2);").unwrap()).unwrap();
///
/// assert_eq!(program.to_string(),
///            "jar (x < 1) {\n    chapa(x + 1);\n} nahitar {\n    chapa(2);\n}\n");
/// ```
impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statements(f, self, 0)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statement(f, self, 0)
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[impl fmt::Display]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_statements(f: &mut fmt::Formatter<'_>, block: &Block, depth: usize) -> fmt::Result {
    for statement in &block.statements {
        write!(f, "{}", INDENT.repeat(depth))?;
        write_statement(f, statement, depth)?;
        writeln!(f)?;
    }
    Ok(())
}

/// Writes `{`, the indented statements and the closing `}` at `depth`.
fn write_body(f: &mut fmt::Formatter<'_>, block: &Block, depth: usize) -> fmt::Result {
    writeln!(f, "{{")?;
    write_statements(f, block, depth + 1)?;
    write!(f, "{}}}", INDENT.repeat(depth))
}

fn write_statement(f: &mut fmt::Formatter<'_>, statement: &Statement, depth: usize) -> fmt::Result {
    match statement {
        Statement::VariableDeclaration { name, value } => write!(f, "he aahe {name} = {value};"),
        Statement::Assignment { name, value } => write!(f, "{name} = {value};"),
        Statement::Print(expr) => write!(f, "chapa({expr});"),
        Statement::If { condition,
                        then_branch,
                        else_branch, } => {
            write!(f, "jar ({condition}) ")?;
            write_body(f, then_branch, depth)?;
            if let Some(else_branch) = else_branch {
                write!(f, " nahitar ")?;
                write_body(f, else_branch, depth)?;
            }
            Ok(())
        },
        Statement::While { condition, body } => {
            write!(f, "joparyant ({condition}) ")?;
            write_body(f, body, depth)?;
            write!(f, " sampel")
        },
        Statement::For { init,
                         condition,
                         increment,
                         body, } => {
            write!(f, "paryant (")?;
            write_statement(f, init, depth)?;
            write!(f, " {condition}; ")?;
            match increment.as_ref() {
                Statement::Assignment { name, value } => write!(f, "{name} = {value}")?,
                other => write_statement(f, other, depth)?,
            }
            write!(f, ") ")?;
            write_body(f, body, depth)?;
            write!(f, " sampel")
        },
        Statement::Function(FunctionDecl { name, params, body }) => {
            write!(f, "karya {name}(")?;
            write_list(f, params)?;
            write!(f, ") ")?;
            write_body(f, body, depth)
        },
        Statement::Return(expr) => write!(f, "parat {expr};"),
    }
}
