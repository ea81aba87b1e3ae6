use crate::token::Symbol;
use std::fmt;

/// A non-terminal of the Gillis grammar, a variable of the derivation. Pure
/// label, the children of a node carry the actual content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonTerminal {
    Program,
    Code,
    Instruction,
    Assign,
    ExprArith,
    Op,
    If,
    Cond,
    Comp,
    While,
    Output,
    Input,
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NonTerminal::Program => "<Program>",
            NonTerminal::Code => "<Code>",
            NonTerminal::Instruction => "<Instruction>",
            NonTerminal::Assign => "<Assign>",
            NonTerminal::ExprArith => "<ExprArith>",
            NonTerminal::Op => "<Op>",
            NonTerminal::If => "<If>",
            NonTerminal::Cond => "<Cond>",
            NonTerminal::Comp => "<Comp>",
            NonTerminal::While => "<While>",
            NonTerminal::Output => "<Output>",
            NonTerminal::Input => "<Input>",
        };
        write!(f, "{}", name)
    }
}

/// Result of a derivation: either a matched terminal, the explicit marker of
/// an epsilon production, or an inner node labelled by a non-terminal whose
/// children are the right hand-side of the chosen rule, in order.
///
/// Built bottom-up during one parse, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseTree {
    Leaf(Symbol),
    Empty,
    Node { non_terminal: NonTerminal, children: Vec<ParseTree> },
}

impl ParseTree {
    pub fn node(non_terminal: NonTerminal, children: Vec<ParseTree>) -> Self {
        ParseTree::Node { non_terminal, children }
    }

    /// The terminals matched under this tree, left to right. Epsilon markers
    /// are skipped, so the result is exactly the consumed token sequence.
    pub fn leaves(&self) -> Vec<&Symbol> {
        let mut symbols = Vec::new();
        self.collect_leaves(&mut symbols);
        symbols
    }

    fn collect_leaves<'a>(&'a self, symbols: &mut Vec<&'a Symbol>) {
        match self {
            ParseTree::Leaf(symbol) => symbols.push(symbol),
            ParseTree::Empty => {}
            ParseTree::Node { children, .. } => {
                for child in children {
                    child.collect_leaves(symbols);
                }
            }
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "    ".repeat(depth);
        match self {
            ParseTree::Leaf(symbol) => writeln!(f, "{}{}", indent, symbol.lexeme()),
            ParseTree::Empty => writeln!(f, "{}\u{03b5}", indent),
            ParseTree::Node { non_terminal, children } => {
                writeln!(f, "{}{}", indent, non_terminal)?;
                for child in children {
                    child.write_indented(f, depth + 1)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
