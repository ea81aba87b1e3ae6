use crate::errors::{GlsError, GlsResult};
use crate::lexer::Lexer;
use crate::parse_tree::{NonTerminal, ParseTree};
use crate::token::{LexicalUnit, Symbol};
use crate::trace::{rule, RuleSink};
use std::mem;

// FIRST sets of the non-terminals with more than one production. Code also
// admits END and ELSE, the look-aheads selecting its epsilon production.
const FIRST_CODE: &[LexicalUnit] = &[
    LexicalUnit::VarName,
    LexicalUnit::If,
    LexicalUnit::While,
    LexicalUnit::Output,
    LexicalUnit::Input,
    LexicalUnit::End,
    LexicalUnit::Else,
];
const FIRST_INSTRUCTION: &[LexicalUnit] = &[
    LexicalUnit::VarName,
    LexicalUnit::If,
    LexicalUnit::While,
    LexicalUnit::Output,
    LexicalUnit::Input,
];
const FIRST_EXPR_ARITH: &[LexicalUnit] = &[
    LexicalUnit::VarName,
    LexicalUnit::Number,
    LexicalUnit::LParen,
    LexicalUnit::Minus,
];
const FIRST_OP: &[LexicalUnit] =
    &[LexicalUnit::Plus, LexicalUnit::Minus, LexicalUnit::Times, LexicalUnit::Divide];
const FIRST_COMP: &[LexicalUnit] =
    &[LexicalUnit::Equal, LexicalUnit::SmallerEqual, LexicalUnit::Smaller];

/// Recursive-descent LL(1) parser for Gillis. One method per non-terminal,
/// one look-ahead symbol pulled from the scanner on demand. Every applied
/// production is reported to the `RuleSink` before any of its tokens is
/// consumed; the first mismatch aborts the parse.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Symbol,
}

impl<'a> Parser<'a> {
    /// Creates a parser over the given source text and fetches the initial
    /// look-ahead, which may already fail on a lexical error.
    pub fn new(source: &'a str) -> GlsResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Drives the grammar from `<Program>`. On success the whole input has
    /// been consumed down to the end-of-stream marker.
    pub fn parse(&mut self, sink: &mut dyn RuleSink) -> GlsResult<ParseTree> {
        let tree = self.program(sink)?;
        if self.current.kind != LexicalUnit::Eos {
            return Err(GlsError::unexpected_token(self.current.clone(), LexicalUnit::Eos));
        }
        sink.finished();
        Ok(tree)
    }

    /// Matches one terminal against the look-ahead, consuming it and moving
    /// the matched symbol into a leaf.
    fn match_token(&mut self, expected: LexicalUnit) -> GlsResult<ParseTree> {
        if self.current.kind != expected {
            return Err(GlsError::unexpected_token(self.current.clone(), expected));
        }
        let next = self.lexer.next_token()?;
        let matched = mem::replace(&mut self.current, next);
        Ok(ParseTree::Leaf(matched))
    }

    /// Parses `<Program> → LET [ProgName] BE <Code> END`
    fn program(&mut self, sink: &mut dyn RuleSink) -> GlsResult<ParseTree> {
        sink.rule_applied(rule(1));
        Ok(ParseTree::node(
            NonTerminal::Program,
            vec![
                self.match_token(LexicalUnit::Let)?,
                self.match_token(LexicalUnit::ProgName)?,
                self.match_token(LexicalUnit::Be)?,
                self.code(sink)?,
                self.match_token(LexicalUnit::End)?,
            ],
        ))
    }

    /// Parses `<Code> → <Instruction> : <Code> | ε`
    fn code(&mut self, sink: &mut dyn RuleSink) -> GlsResult<ParseTree> {
        match self.current.kind {
            LexicalUnit::VarName
            | LexicalUnit::If
            | LexicalUnit::While
            | LexicalUnit::Output
            | LexicalUnit::Input => {
                sink.rule_applied(rule(2));
                Ok(ParseTree::node(
                    NonTerminal::Code,
                    vec![
                        self.instruction(sink)?,
                        self.match_token(LexicalUnit::Colon)?,
                        self.code(sink)?,
                    ],
                ))
            }
            // The epsilon production is selected on the tokens that may
            // follow a <Code>: END closes every block, ELSE ends the THEN
            // branch of an <If>.
            LexicalUnit::End | LexicalUnit::Else => {
                sink.rule_applied(rule(3));
                Ok(ParseTree::node(NonTerminal::Code, vec![ParseTree::Empty]))
            }
            _ => Err(GlsError::no_rule_for(self.current.clone(), NonTerminal::Code, FIRST_CODE)),
        }
    }

    /// Parses `<Instruction> → <Assign> | <If> | <While> | <Output> | <Input>`
    fn instruction(&mut self, sink: &mut dyn RuleSink) -> GlsResult<ParseTree> {
        let child = match self.current.kind {
            LexicalUnit::VarName => {
                sink.rule_applied(rule(4));
                self.assign(sink)?
            }
            LexicalUnit::If => {
                sink.rule_applied(rule(5));
                self.if_instruction(sink)?
            }
            LexicalUnit::While => {
                sink.rule_applied(rule(6));
                self.while_instruction(sink)?
            }
            LexicalUnit::Output => {
                sink.rule_applied(rule(7));
                self.output(sink)?
            }
            LexicalUnit::Input => {
                sink.rule_applied(rule(8));
                self.input(sink)?
            }
            _ => {
                return Err(GlsError::no_rule_for(
                    self.current.clone(),
                    NonTerminal::Instruction,
                    FIRST_INSTRUCTION,
                ))
            }
        };
        Ok(ParseTree::node(NonTerminal::Instruction, vec![child]))
    }

    /// Parses `<Assign> → [VarName] = <ExprArith>`
    fn assign(&mut self, sink: &mut dyn RuleSink) -> GlsResult<ParseTree> {
        sink.rule_applied(rule(9));
        Ok(ParseTree::node(
            NonTerminal::Assign,
            vec![
                self.match_token(LexicalUnit::VarName)?,
                self.match_token(LexicalUnit::Assign)?,
                self.expr_arith(sink)?,
            ],
        ))
    }

    /// Parses `<ExprArith> → [VarName] | [Number] | ( <ExprArith> ) | - <ExprArith>`,
    /// then `<ExprArith> → <ExprArith> <Op> <ExprArith>` when an operator
    /// follows the left operand. Binary chains associate to the right, with
    /// no precedence between the four operators.
    fn expr_arith(&mut self, sink: &mut dyn RuleSink) -> GlsResult<ParseTree> {
        let left = match self.current.kind {
            LexicalUnit::VarName => {
                sink.rule_applied(rule(10));
                ParseTree::node(
                    NonTerminal::ExprArith,
                    vec![self.match_token(LexicalUnit::VarName)?],
                )
            }
            LexicalUnit::Number => {
                sink.rule_applied(rule(11));
                ParseTree::node(
                    NonTerminal::ExprArith,
                    vec![self.match_token(LexicalUnit::Number)?],
                )
            }
            LexicalUnit::LParen => {
                sink.rule_applied(rule(12));
                ParseTree::node(
                    NonTerminal::ExprArith,
                    vec![
                        self.match_token(LexicalUnit::LParen)?,
                        self.expr_arith(sink)?,
                        self.match_token(LexicalUnit::RParen)?,
                    ],
                )
            }
            LexicalUnit::Minus => {
                sink.rule_applied(rule(13));
                ParseTree::node(
                    NonTerminal::ExprArith,
                    vec![self.match_token(LexicalUnit::Minus)?, self.expr_arith(sink)?],
                )
            }
            _ => {
                return Err(GlsError::no_rule_for(
                    self.current.clone(),
                    NonTerminal::ExprArith,
                    FIRST_EXPR_ARITH,
                ))
            }
        };
        if FIRST_OP.contains(&self.current.kind) {
            sink.rule_applied(rule(14));
            Ok(ParseTree::node(
                NonTerminal::ExprArith,
                vec![left, self.op(sink)?, self.expr_arith(sink)?],
            ))
        } else {
            Ok(left)
        }
    }

    /// Parses `<Op> → + | - | * | /`
    fn op(&mut self, sink: &mut dyn RuleSink) -> GlsResult<ParseTree> {
        let number = match self.current.kind {
            LexicalUnit::Plus => 15,
            LexicalUnit::Minus => 16,
            LexicalUnit::Times => 17,
            LexicalUnit::Divide => 18,
            _ => {
                return Err(GlsError::no_rule_for(
                    self.current.clone(),
                    NonTerminal::Op,
                    FIRST_OP,
                ))
            }
        };
        sink.rule_applied(rule(number));
        let operator = self.match_token(self.current.kind)?;
        Ok(ParseTree::node(NonTerminal::Op, vec![operator]))
    }

    /// Parses `<If> → IF { <Cond> } THEN <Code> ELSE <Code> END`
    fn if_instruction(&mut self, sink: &mut dyn RuleSink) -> GlsResult<ParseTree> {
        sink.rule_applied(rule(19));
        Ok(ParseTree::node(
            NonTerminal::If,
            vec![
                self.match_token(LexicalUnit::If)?,
                self.match_token(LexicalUnit::LBrack)?,
                self.cond(sink)?,
                self.match_token(LexicalUnit::RBrack)?,
                self.match_token(LexicalUnit::Then)?,
                self.code(sink)?,
                self.match_token(LexicalUnit::Else)?,
                self.code(sink)?,
                self.match_token(LexicalUnit::End)?,
            ],
        ))
    }

    /// Parses `<Cond> → <ExprArith> <Comp> <ExprArith>`
    fn cond(&mut self, sink: &mut dyn RuleSink) -> GlsResult<ParseTree> {
        sink.rule_applied(rule(20));
        Ok(ParseTree::node(
            NonTerminal::Cond,
            vec![self.expr_arith(sink)?, self.comp(sink)?, self.expr_arith(sink)?],
        ))
    }

    /// Parses `<Comp> → == | <= | <`
    fn comp(&mut self, sink: &mut dyn RuleSink) -> GlsResult<ParseTree> {
        let number = match self.current.kind {
            LexicalUnit::Equal => 21,
            LexicalUnit::SmallerEqual => 22,
            LexicalUnit::Smaller => 23,
            _ => {
                return Err(GlsError::no_rule_for(
                    self.current.clone(),
                    NonTerminal::Comp,
                    FIRST_COMP,
                ))
            }
        };
        sink.rule_applied(rule(number));
        let comparator = self.match_token(self.current.kind)?;
        Ok(ParseTree::node(NonTerminal::Comp, vec![comparator]))
    }

    /// Parses `<While> → WHILE { <Cond> } REPEAT <Code> END`
    fn while_instruction(&mut self, sink: &mut dyn RuleSink) -> GlsResult<ParseTree> {
        sink.rule_applied(rule(24));
        Ok(ParseTree::node(
            NonTerminal::While,
            vec![
                self.match_token(LexicalUnit::While)?,
                self.match_token(LexicalUnit::LBrack)?,
                self.cond(sink)?,
                self.match_token(LexicalUnit::RBrack)?,
                self.match_token(LexicalUnit::Repeat)?,
                self.code(sink)?,
                self.match_token(LexicalUnit::End)?,
            ],
        ))
    }

    /// Parses `<Output> → OUT ( [VarName] )`
    fn output(&mut self, sink: &mut dyn RuleSink) -> GlsResult<ParseTree> {
        sink.rule_applied(rule(25));
        Ok(ParseTree::node(
            NonTerminal::Output,
            vec![
                self.match_token(LexicalUnit::Output)?,
                self.match_token(LexicalUnit::LParen)?,
                self.match_token(LexicalUnit::VarName)?,
                self.match_token(LexicalUnit::RParen)?,
            ],
        ))
    }

    /// Parses `<Input> → IN ( [VarName] )`
    fn input(&mut self, sink: &mut dyn RuleSink) -> GlsResult<ParseTree> {
        sink.rule_applied(rule(26));
        Ok(ParseTree::node(
            NonTerminal::Input,
            vec![
                self.match_token(LexicalUnit::Input)?,
                self.match_token(LexicalUnit::LParen)?,
                self.match_token(LexicalUnit::VarName)?,
                self.match_token(LexicalUnit::RParen)?,
            ],
        ))
    }
}
