use crate::errors::{GlsError, GlsResult};
use crate::token::{LexicalUnit, Symbol};
use lazy_static::lazy_static;
use regex::Regex;
use std::{iter::Peekable, str::Chars};

lazy_static! {
    // A program name starts with an uppercase letter, a variable name with a
    // lowercase one. The run is rejected if it fits neither class.
    static ref PROG_NAME: Regex = Regex::new("^[A-Z][A-Za-z0-9_]*$").unwrap();
    static ref VAR_NAME: Regex = Regex::new("^[a-z][a-z0-9_]*$").unwrap();
}

/// On-demand scanner over one Gillis source text. Each `next_token` call
/// consumes just enough characters to classify one token; once the input is
/// exhausted every further call yields `Eos`.
pub struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { chars: source.chars().peekable(), line: 1 }
    }

    /// Current line of the scan cursor, starting at 1.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn next_token(&mut self) -> GlsResult<Symbol> {
        self.skip_whitespace();
        match self.chars.peek() {
            None => Ok(Symbol::new(LexicalUnit::Eos, self.line)),
            Some(&ch) if ch.is_ascii_alphabetic() => self.scan_identifier(),
            Some(&ch) if ch.is_ascii_digit() => self.scan_number(),
            Some(&'<') => self.scan_smaller(),
            Some(&'=') => self.scan_equal(),
            Some(&'*') => self.scan_times_or_comment(),
            Some(&'\'') => {
                self.scan_long_comment()?;
                self.next_token()
            }
            Some(&ch) => self.scan_single_char(ch),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.chars.peek() {
            if ch.is_whitespace() {
                if ch == '\n' {
                    self.line += 1;
                }
                self.chars.next();
            } else {
                break;
            }
        }
    }

    fn scan_identifier(&mut self) -> GlsResult<Symbol> {
        let mut identifier = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                identifier.push(ch);
                self.chars.next();
            } else {
                break;
            }
        }
        self.keyword_or_name(identifier)
    }

    fn keyword_or_name(&self, identifier: String) -> GlsResult<Symbol> {
        let keyword = match identifier.as_str() {
            "LET" => Some(LexicalUnit::Let),
            "BE" => Some(LexicalUnit::Be),
            "END" => Some(LexicalUnit::End),
            "IF" => Some(LexicalUnit::If),
            "THEN" => Some(LexicalUnit::Then),
            "ELSE" => Some(LexicalUnit::Else),
            "WHILE" => Some(LexicalUnit::While),
            "REPEAT" => Some(LexicalUnit::Repeat),
            "OUT" => Some(LexicalUnit::Output),
            "IN" => Some(LexicalUnit::Input),
            _ => None,
        };
        if let Some(kind) = keyword {
            return Ok(Symbol::new(kind, self.line));
        }
        if PROG_NAME.is_match(&identifier) {
            Ok(Symbol::text(LexicalUnit::ProgName, identifier, self.line))
        } else if VAR_NAME.is_match(&identifier) {
            Ok(Symbol::text(LexicalUnit::VarName, identifier, self.line))
        } else {
            Err(GlsError::InvalidIdentifier { identifier, line: self.line })
        }
    }

    fn scan_number(&mut self) -> GlsResult<Symbol> {
        let mut number_str = String::new();
        while let Some(&ch) = self.chars.peek() {
            if ch.is_ascii_digit() {
                number_str.push(ch);
                self.chars.next();
            } else {
                break;
            }
        }
        number_str
            .parse::<i64>()
            .map(|value| Symbol::number(value, self.line))
            .map_err(|_| GlsError::InvalidNumber { number: number_str, line: self.line })
    }

    fn scan_smaller(&mut self) -> GlsResult<Symbol> {
        self.chars.next(); // Consume '<'
        if self.chars.peek() == Some(&'=') {
            self.chars.next(); // Consume '='
            Ok(Symbol::new(LexicalUnit::SmallerEqual, self.line))
        } else {
            Ok(Symbol::new(LexicalUnit::Smaller, self.line))
        }
    }

    fn scan_equal(&mut self) -> GlsResult<Symbol> {
        self.chars.next(); // Consume '='
        if self.chars.peek() == Some(&'=') {
            self.chars.next(); // Consume '='
            Ok(Symbol::new(LexicalUnit::Equal, self.line))
        } else {
            Ok(Symbol::new(LexicalUnit::Assign, self.line))
        }
    }

    /// A lone `*` is TIMES; `**` opens a comment running to end of line.
    fn scan_times_or_comment(&mut self) -> GlsResult<Symbol> {
        self.chars.next(); // Consume '*'
        if self.chars.peek() != Some(&'*') {
            return Ok(Symbol::new(LexicalUnit::Times, self.line));
        }
        self.chars.next(); // Consume the second '*'
        for ch in self.chars.by_ref() {
            if ch == '\n' {
                self.line += 1;
                break;
            }
        }
        self.next_token()
    }

    /// A `''` pair opens a long comment closed by the next `''`, possibly
    /// several lines later. A single quote fits no lexical class.
    fn scan_long_comment(&mut self) -> GlsResult<()> {
        self.chars.next(); // Consume the first quote
        if self.chars.peek() != Some(&'\'') {
            return Err(GlsError::UnknownCharacter { ch: '\'', line: self.line });
        }
        self.chars.next(); // Consume the second quote
        let start_line = self.line;
        while let Some(ch) = self.chars.next() {
            if ch == '\n' {
                self.line += 1;
            } else if ch == '\'' && self.chars.peek() == Some(&'\'') {
                self.chars.next(); // Consume the closing pair
                return Ok(());
            }
        }
        Err(GlsError::UnterminatedComment { line: start_line })
    }

    fn scan_single_char(&mut self, ch: char) -> GlsResult<Symbol> {
        self.chars.next(); // Consume the character
        let kind = match ch {
            '+' => LexicalUnit::Plus,
            '-' => LexicalUnit::Minus,
            '/' => LexicalUnit::Divide,
            '(' => LexicalUnit::LParen,
            ')' => LexicalUnit::RParen,
            '{' => LexicalUnit::LBrack,
            '}' => LexicalUnit::RBrack,
            ':' => LexicalUnit::Colon,
            _ => return Err(GlsError::UnknownCharacter { ch, line: self.line }),
        };
        Ok(Symbol::new(kind, self.line))
    }
}

/// Scan a whole source text, collecting every token up to (and excluding)
/// the end-of-stream marker.
pub fn scan(source: &str) -> GlsResult<Vec<Symbol>> {
    let mut lexer = Lexer::new(source);
    let mut symbols = Vec::new();
    loop {
        let symbol = lexer.next_token()?;
        if symbol.kind == LexicalUnit::Eos {
            return Ok(symbols);
        }
        symbols.push(symbol);
    }
}
