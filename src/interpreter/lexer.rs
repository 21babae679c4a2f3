use logos::Logos;

use crate::error::LexError;

pub type LexResult<T> = Result<T, LexError>;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Keywords are matched without regard to case. When a keyword and an
/// identifier could both start at the same position, the longer match wins,
/// so `jarvis` is an identifier while `jar` is the `if` keyword.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// `he aahe`, introduces a variable declaration.
    #[token("he aahe", ignore(case))]
    VarDecl,
    /// `chapa`, prints a value.
    #[token("chapa", ignore(case))]
    Print,
    /// `jar`
    #[token("jar", ignore(case))]
    If,
    /// `nahitar`
    #[token("nahitar", ignore(case))]
    Else,
    /// `joparyant`
    #[token("joparyant", ignore(case))]
    While,
    /// `sampel`, closes both `joparyant` and `paryant` loops.
    #[token("sampel", ignore(case))]
    EndWhile,
    /// `paryant`
    #[token("paryant", ignore(case))]
    For,
    /// `karya`, introduces a function declaration.
    #[token("karya", ignore(case))]
    Function,
    /// `parat`
    #[token("parat", ignore(case))]
    Return,
    /// String literal tokens. The quotes are stripped and nothing inside is
    /// escaped.
    #[regex(r#""[^"\n]*""#, |lex| {
        let slice = lex.slice();
        slice[1..slice.len() - 1].to_string()
    })]
    Str(String),
    /// Integer literal tokens, kept as their digit text.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
    /// Identifier tokens; variable or function names such as `x` or `square`.
    #[regex(r"\p{L}[\p{L}\p{Nd}]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Arithmetic, comparison and assignment operators.
    #[token("==", |_| Operator::EqualEqual)]
    #[token("!=", |_| Operator::BangEqual)]
    #[token("<=", |_| Operator::LessEqual)]
    #[token(">=", |_| Operator::GreaterEqual)]
    #[token("<", |_| Operator::Less)]
    #[token(">", |_| Operator::Greater)]
    #[token("=", |_| Operator::Assign)]
    #[token("+", |_| Operator::Plus)]
    #[token("-", |_| Operator::Minus)]
    #[token("*", |_| Operator::Star)]
    #[token("/", |_| Operator::Slash)]
    #[token("%", |_| Operator::Percent)]
    Operator(Operator),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs, carriage returns and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// The operators a `Token::Operator` can carry.
///
/// The scanner recognises all of them; which ones are meaningful depends on
/// where they appear. Expressions only combine with `+ - * /`, conditions
/// compare with `< > <= >= ==`, and `=` binds a name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `=`
    Assign,
    /// `==`
    EqualEqual,
    /// `!=`
    BangEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
}

impl Operator {
    /// Whether the operator may join two operands of an expression.
    #[must_use]
    pub const fn is_arithmetic(self) -> bool {
        matches!(self, Self::Plus | Self::Minus | Self::Star | Self::Slash)
    }

    /// The operator as it is written in source.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Assign => "=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Token {
    /// The literal text of the token in its canonical spelling.
    ///
    /// Keywords come back lower-case; string literals come back without
    /// their quotes.
    ///
    /// # Example
    /// ```
    /// use chapa::interpreter::lexer::Token;
    ///
    /// assert_eq!(Token::VarDecl.lexeme(), "he aahe");
    /// assert_eq!(Token::Identifier("x".into()).lexeme(), "x");
    /// ```
    #[must_use]
    pub fn lexeme(&self) -> &str {
        match self {
            Self::VarDecl => "he aahe",
            Self::Print => "chapa",
            Self::If => "jar",
            Self::Else => "nahitar",
            Self::While => "joparyant",
            Self::EndWhile => "sampel",
            Self::For => "paryant",
            Self::Function => "karya",
            Self::Return => "parat",
            Self::Str(s) | Self::Number(s) | Self::Identifier(s) => s,
            Self::Operator(op) => op.as_str(),
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::Comment | Self::NewLine | Self::Ignored => "",
        }
    }
}

/// Describes a token for error messages, e.g. `identifier 'x'` or `'sampel'`.
impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => write!(f, "string \"{s}\""),
            Self::Number(n) => write!(f, "number {n}"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Operator(op) => write!(f, "operator '{op}'"),
            other => write!(f, "'{}'", other.lexeme()),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Incremented as newlines are skipped.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Converts source text into the ordered token sequence, pairing every token
/// with the line it starts on.
///
/// Scanning stops at the first character that cannot begin a token.
///
/// # Errors
/// - `LexError::UnterminatedString` when a `"` is not closed on its line.
/// - `LexError::UnexpectedCharacter` for anything else the lexer rejects.
///
/// # Example
/// ```
/// use chapa::interpreter::lexer::{Operator, Token, scan};
///
/// let tokens = scan("He aahe x = 5;").unwrap();
/// let kinds: Vec<Token> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::VarDecl,
///                 Token::Identifier("x".into()),
///                 Token::Operator(Operator::Assign),
///                 Token::Number("5".into()),
///                 Token::Semicolon]);
/// ```
pub fn scan(source: &str) -> LexResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        match token {
            Ok(tok) => {
                log::trace!("token {tok} on line {line}");
                tokens.push((tok, line));
            },
            Err(()) => {
                let rest = &source[lexer.span().start..];
                return Err(match rest.chars().next() {
                    Some('"') => LexError::UnterminatedString { line },
                    Some(character) => LexError::UnexpectedCharacter { character, line },
                    None => LexError::UnterminatedString { line },
                });
            },
        }
    }

    log::debug!("scanned {} tokens", tokens.len());
    Ok(tokens)
}
