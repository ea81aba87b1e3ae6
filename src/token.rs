use std::fmt;

/// The terminal categories of the Gillis language, one variant per lexical
/// unit the scanner can emit plus the two stream markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalUnit {
    // Keywords
    Let,
    Be,
    End,
    If,
    Then,
    Else,
    While,
    Repeat,
    Output,
    Input,
    // Operators and punctuation
    Assign,
    Plus,
    Minus,
    Times,
    Divide,
    LParen,
    RParen,
    LBrack,
    RBrack,
    Colon,
    Equal,
    Smaller,
    SmallerEqual,
    // Identifier and literal classes
    ProgName,
    VarName,
    Number,
    // Placeholder for the binary-operator position in the derivation of an
    // arithmetic expression. The scanner never emits this unit.
    Op,
    /// Marker for an empty (epsilon) derivation inside a parse tree.
    Epsilon,
    /// End of stream, emitted when the input is exhausted.
    Eos,
}

impl LexicalUnit {
    /// The uppercase unit name, as printed in the token dump.
    pub fn name(&self) -> &'static str {
        match self {
            LexicalUnit::Let => "LET",
            LexicalUnit::Be => "BE",
            LexicalUnit::End => "END",
            LexicalUnit::If => "IF",
            LexicalUnit::Then => "THEN",
            LexicalUnit::Else => "ELSE",
            LexicalUnit::While => "WHILE",
            LexicalUnit::Repeat => "REPEAT",
            LexicalUnit::Output => "OUT",
            LexicalUnit::Input => "IN",
            LexicalUnit::Assign => "ASSIGN",
            LexicalUnit::Plus => "PLUS",
            LexicalUnit::Minus => "MINUS",
            LexicalUnit::Times => "TIMES",
            LexicalUnit::Divide => "DIVIDE",
            LexicalUnit::LParen => "LPAREN",
            LexicalUnit::RParen => "RPAREN",
            LexicalUnit::LBrack => "LBRACK",
            LexicalUnit::RBrack => "RBRACK",
            LexicalUnit::Colon => "COLON",
            LexicalUnit::Equal => "EQUAL",
            LexicalUnit::Smaller => "SMALLER",
            LexicalUnit::SmallerEqual => "SMALEQ",
            LexicalUnit::ProgName => "PROGNAME",
            LexicalUnit::VarName => "VARNAME",
            LexicalUnit::Number => "NUMBER",
            LexicalUnit::Op => "OP",
            LexicalUnit::Epsilon => "EPSILON",
            LexicalUnit::Eos => "EOS",
        }
    }
}

impl fmt::Display for LexicalUnit {
    /// The concrete spelling for fixed tokens, the bracketed class name for
    /// identifier and literal classes. Used in rules and diagnostics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            LexicalUnit::Let => "LET",
            LexicalUnit::Be => "BE",
            LexicalUnit::End => "END",
            LexicalUnit::If => "IF",
            LexicalUnit::Then => "THEN",
            LexicalUnit::Else => "ELSE",
            LexicalUnit::While => "WHILE",
            LexicalUnit::Repeat => "REPEAT",
            LexicalUnit::Output => "OUT",
            LexicalUnit::Input => "IN",
            LexicalUnit::Assign => "=",
            LexicalUnit::Plus => "+",
            LexicalUnit::Minus => "-",
            LexicalUnit::Times => "*",
            LexicalUnit::Divide => "/",
            LexicalUnit::LParen => "(",
            LexicalUnit::RParen => ")",
            LexicalUnit::LBrack => "{",
            LexicalUnit::RBrack => "}",
            LexicalUnit::Colon => ":",
            LexicalUnit::Equal => "==",
            LexicalUnit::Smaller => "<",
            LexicalUnit::SmallerEqual => "<=",
            LexicalUnit::ProgName => "[ProgName]",
            LexicalUnit::VarName => "[VarName]",
            LexicalUnit::Number => "[Number]",
            LexicalUnit::Op => "<Op>",
            LexicalUnit::Epsilon => "\u{03b5}",
            LexicalUnit::Eos => "EOS",
        };
        write!(f, "{}", text)
    }
}

/// Literal payload of a symbol: nothing for fixed tokens, the exact source
/// text for identifiers, the parsed value for numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolValue {
    None,
    Text(String),
    Number(i64),
}

/// One token of the input: its lexical unit, its literal value and the line
/// it was read on. Never mutated after the scanner builds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub kind: LexicalUnit,
    pub value: SymbolValue,
    pub line: usize,
}

impl Symbol {
    pub fn new(kind: LexicalUnit, line: usize) -> Self {
        Self { kind, value: SymbolValue::None, line }
    }

    pub fn text(kind: LexicalUnit, text: impl Into<String>, line: usize) -> Self {
        Self { kind, value: SymbolValue::Text(text.into()), line }
    }

    pub fn number(value: i64, line: usize) -> Self {
        Self { kind: LexicalUnit::Number, value: SymbolValue::Number(value), line }
    }

    /// The source spelling of the symbol, falling back to the fixed spelling
    /// of the unit for tokens without a payload.
    pub fn lexeme(&self) -> String {
        match &self.value {
            SymbolValue::Text(text) => text.clone(),
            SymbolValue::Number(n) => n.to_string(),
            SymbolValue::None => self.kind.to_string(),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "token: {:<14}lexical unit: {}", self.lexeme(), self.kind.name())
    }
}
