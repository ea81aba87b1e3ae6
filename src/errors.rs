use crate::parse_tree::NonTerminal;
use crate::token::{LexicalUnit, Symbol};
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum GlsError {
    // File and I/O errors
    FileReadError(String),
    IoError(io::Error),

    // Lexical errors
    UnknownCharacter {
        ch: char,
        line: usize,
    },
    UnterminatedComment {
        line: usize,
    },
    InvalidIdentifier {
        identifier: String,
        line: usize,
    },
    InvalidNumber {
        number: String,
        line: usize,
    },

    // Syntactic errors
    SyntaxError {
        found: Symbol,
        expected: Vec<LexicalUnit>,
        non_terminal: Option<NonTerminal>,
    },
}

impl GlsError {
    /// Create a syntax error for a terminal that failed to match.
    pub fn unexpected_token(found: Symbol, expected: LexicalUnit) -> Self {
        GlsError::SyntaxError { found, expected: vec![expected], non_terminal: None }
    }

    /// Create a syntax error for a look-ahead outside the FIRST set of the
    /// non-terminal being derived.
    pub fn no_rule_for(found: Symbol, non_terminal: NonTerminal, first: &[LexicalUnit]) -> Self {
        GlsError::SyntaxError { found, expected: first.to_vec(), non_terminal: Some(non_terminal) }
    }
}

impl fmt::Display for GlsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlsError::FileReadError(msg) => write!(f, "File read error: {}", msg),
            GlsError::IoError(err) => write!(f, "I/O error: {}", err),

            GlsError::UnknownCharacter { ch, line } => {
                write!(f, "Lexical error at line {}: unknown character '{}'", line, ch)
            }
            GlsError::UnterminatedComment { line } => {
                write!(f, "Lexical error at line {}: unterminated comment", line)
            }
            GlsError::InvalidIdentifier { identifier, line } => {
                write!(f, "Lexical error at line {}: invalid identifier '{}'", line, identifier)
            }
            GlsError::InvalidNumber { number, line } => {
                write!(f, "Lexical error at line {}: invalid number '{}'", line, number)
            }

            GlsError::SyntaxError { found, expected, non_terminal } => {
                write!(f, "Syntax error at line {}: found '{}'", found.line, found.lexeme())?;
                if let Some(variable) = non_terminal {
                    write!(f, " while deriving {}", variable)?;
                }
                let admissible: Vec<String> =
                    expected.iter().map(|unit| format!("'{}'", unit)).collect();
                write!(f, ", expected one of {}", admissible.join(", "))
            }
        }
    }
}

impl std::error::Error for GlsError {}

impl From<io::Error> for GlsError {
    fn from(err: io::Error) -> Self {
        GlsError::IoError(err)
    }
}

// Type alias for Result with GlsError
pub type GlsResult<T> = Result<T, GlsError>;
