use std::io::Write;

/// One production of the Gillis grammar, as shown in the derivation trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub number: usize,
    pub lhs: &'static str,
    pub rhs: &'static str,
}

/// The numbered grammar, in the order of the reference rule sheet. Rule 14
/// is the binary-expression form; it is part of the grammar but no LL(1)
/// look-ahead selects it (see `Parser::expr_arith`).
pub const RULES: [Rule; 26] = [
    Rule { number: 1, lhs: "<Program>", rhs: "LET [ProgName] BE <Code> END" },
    Rule { number: 2, lhs: "<Code>", rhs: "<Instruction> : <Code>" },
    Rule { number: 3, lhs: "<Code>", rhs: "\u{03b5}" },
    Rule { number: 4, lhs: "<Instruction>", rhs: "<Assign>" },
    Rule { number: 5, lhs: "<Instruction>", rhs: "<If>" },
    Rule { number: 6, lhs: "<Instruction>", rhs: "<While>" },
    Rule { number: 7, lhs: "<Instruction>", rhs: "<Output>" },
    Rule { number: 8, lhs: "<Instruction>", rhs: "<Input>" },
    Rule { number: 9, lhs: "<Assign>", rhs: "[VarName] = <ExprArith>" },
    Rule { number: 10, lhs: "<ExprArith>", rhs: "[VarName]" },
    Rule { number: 11, lhs: "<ExprArith>", rhs: "[Number]" },
    Rule { number: 12, lhs: "<ExprArith>", rhs: "( <ExprArith> )" },
    Rule { number: 13, lhs: "<ExprArith>", rhs: "- <ExprArith>" },
    Rule { number: 14, lhs: "<ExprArith>", rhs: "<ExprArith> <Op> <ExprArith>" },
    Rule { number: 15, lhs: "<Op>", rhs: "+" },
    Rule { number: 16, lhs: "<Op>", rhs: "-" },
    Rule { number: 17, lhs: "<Op>", rhs: "*" },
    Rule { number: 18, lhs: "<Op>", rhs: "/" },
    Rule { number: 19, lhs: "<If>", rhs: "IF { <Cond> } THEN <Code> ELSE <Code> END" },
    Rule { number: 20, lhs: "<Cond>", rhs: "<ExprArith> <Comp> <ExprArith>" },
    Rule { number: 21, lhs: "<Comp>", rhs: "==" },
    Rule { number: 22, lhs: "<Comp>", rhs: "<=" },
    Rule { number: 23, lhs: "<Comp>", rhs: "<" },
    Rule { number: 24, lhs: "<While>", rhs: "WHILE { <Cond> } REPEAT <Code> END" },
    Rule { number: 25, lhs: "<Output>", rhs: "OUT ( [VarName] )" },
    Rule { number: 26, lhs: "<Input>", rhs: "IN ( [VarName] )" },
];

/// Look up a rule by its number on the rule sheet.
pub fn rule(number: usize) -> &'static Rule {
    &RULES[number - 1]
}

/// Receives every production applied during a parse, in derivation order
/// (pre-order: a rule is reported before any of its tokens is consumed).
/// The parser itself stays free of output concerns.
pub trait RuleSink {
    fn rule_applied(&mut self, rule: &Rule);

    /// Called once after the start symbol has been fully derived.
    fn finished(&mut self) {}
}

/// How a `RulePrinter` renders each applied rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// One line per rule: `   [<number>] <LHS> →  <RHS>`.
    FullRules,
    /// Bare rule numbers separated by spaces, one newline at the very end.
    RuleNumbers,
}

// Width of the widest left hand-side, "<Instruction>".
const WIDEST_NON_TERM: usize = 13;
// "[" + two digits + "]" + one space.
const NUMBER_COLUMN: usize = 5;

/// Writes the derivation trace to any byte sink, in the configured mode.
pub struct RulePrinter<W: Write> {
    out: W,
    mode: DisplayMode,
}

impl<W: Write> RulePrinter<W> {
    pub fn new(out: W, mode: DisplayMode) -> Self {
        Self { out, mode }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RuleSink for RulePrinter<W> {
    fn rule_applied(&mut self, rule: &Rule) {
        let result = match self.mode {
            DisplayMode::FullRules => {
                let number = format!("[{}]", rule.number);
                writeln!(
                    self.out,
                    "   {:<num_width$}{:<lhs_width$}\u{2192}  {}",
                    number,
                    rule.lhs,
                    rule.rhs,
                    num_width = NUMBER_COLUMN,
                    lhs_width = WIDEST_NON_TERM + 2,
                )
            }
            DisplayMode::RuleNumbers => write!(self.out, "{} ", rule.number),
        };
        result.ok();
    }

    fn finished(&mut self) {
        if self.mode == DisplayMode::RuleNumbers {
            writeln!(self.out).ok();
        }
        self.out.flush().ok();
    }
}

/// Collects the applied rule numbers in order. Used by the tests to check
/// derivations without capturing output.
#[derive(Debug, Default)]
pub struct RuleCollector {
    pub numbers: Vec<usize>,
}

impl RuleCollector {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RuleSink for RuleCollector {
    fn rule_applied(&mut self, rule: &Rule) {
        self.numbers.push(rule.number);
    }
}
