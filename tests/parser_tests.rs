use gillisc::errors::{GlsError, GlsResult};
use gillisc::lexer::scan;
use gillisc::parse_tree::{NonTerminal, ParseTree};
use gillisc::parser::Parser;
use gillisc::token::{LexicalUnit, Symbol};
use gillisc::trace::{DisplayMode, RuleCollector, RulePrinter};

/// Parses a source text, returning the tree and the applied rule numbers.
fn parse_with_trace(source: &str) -> GlsResult<(ParseTree, Vec<usize>)> {
    let mut collector = RuleCollector::new();
    let mut parser = Parser::new(source)?;
    let tree = parser.parse(&mut collector)?;
    Ok((tree, collector.numbers))
}

fn parse_error(source: &str) -> GlsError {
    match parse_with_trace(source) {
        Ok((tree, _)) => panic!("Expected a parse failure, but got a tree:\n{}", tree),
        Err(err) => err,
    }
}

#[test]
fn test_empty_program() -> GlsResult<()> {
    let (tree, rules) = parse_with_trace("LET P BE END")?;
    let expected = ParseTree::node(
        NonTerminal::Program,
        vec![
            ParseTree::Leaf(Symbol::new(LexicalUnit::Let, 1)),
            ParseTree::Leaf(Symbol::text(LexicalUnit::ProgName, "P", 1)),
            ParseTree::Leaf(Symbol::new(LexicalUnit::Be, 1)),
            ParseTree::node(NonTerminal::Code, vec![ParseTree::Empty]),
            ParseTree::Leaf(Symbol::new(LexicalUnit::End, 1)),
        ],
    );
    assert_eq!(tree, expected);
    assert_eq!(rules, vec![1, 3]);
    Ok(())
}

#[test]
fn test_single_assignment() -> GlsResult<()> {
    let (tree, rules) = parse_with_trace("LET P BE x = 3 : END")?;
    let assign = ParseTree::node(
        NonTerminal::Assign,
        vec![
            ParseTree::Leaf(Symbol::text(LexicalUnit::VarName, "x", 1)),
            ParseTree::Leaf(Symbol::new(LexicalUnit::Assign, 1)),
            ParseTree::node(NonTerminal::ExprArith, vec![ParseTree::Leaf(Symbol::number(3, 1))]),
        ],
    );
    let expected = ParseTree::node(
        NonTerminal::Program,
        vec![
            ParseTree::Leaf(Symbol::new(LexicalUnit::Let, 1)),
            ParseTree::Leaf(Symbol::text(LexicalUnit::ProgName, "P", 1)),
            ParseTree::Leaf(Symbol::new(LexicalUnit::Be, 1)),
            ParseTree::node(
                NonTerminal::Code,
                vec![
                    ParseTree::node(NonTerminal::Instruction, vec![assign]),
                    ParseTree::Leaf(Symbol::new(LexicalUnit::Colon, 1)),
                    ParseTree::node(NonTerminal::Code, vec![ParseTree::Empty]),
                ],
            ),
            ParseTree::Leaf(Symbol::new(LexicalUnit::End, 1)),
        ],
    );
    assert_eq!(tree, expected);
    assert_eq!(rules, vec![1, 2, 4, 9, 11, 3]);
    Ok(())
}

#[test]
fn test_output_without_assignment_is_accepted() -> GlsResult<()> {
    // No semantic checks: OUT(y) parses even though y is never assigned.
    let (_, rules) = parse_with_trace("LET P BE OUT(y) : END")?;
    assert_eq!(rules, vec![1, 2, 7, 25, 3]);
    Ok(())
}

#[test]
fn test_input_instruction() -> GlsResult<()> {
    let (_, rules) = parse_with_trace("LET P BE IN(x) : END")?;
    assert_eq!(rules, vec![1, 2, 8, 26, 3]);
    Ok(())
}

#[test]
fn test_binary_expression() -> GlsResult<()> {
    let (_, rules) = parse_with_trace("LET P BE x = 1 + 2 : END")?;
    assert_eq!(rules, vec![1, 2, 4, 9, 11, 14, 15, 11, 3]);
    Ok(())
}

#[test]
fn test_operator_chain_associates_to_the_right() -> GlsResult<()> {
    let (tree, rules) = parse_with_trace("LET P BE x = 1 + 2 * 3 : END")?;
    assert_eq!(rules, vec![1, 2, 4, 9, 11, 14, 15, 11, 14, 17, 11, 3]);
    // The second operator nests inside the right operand of the first.
    let leaves: Vec<LexicalUnit> = tree.leaves().iter().map(|symbol| symbol.kind).collect();
    assert_eq!(
        leaves,
        vec![
            LexicalUnit::Let,
            LexicalUnit::ProgName,
            LexicalUnit::Be,
            LexicalUnit::VarName,
            LexicalUnit::Assign,
            LexicalUnit::Number,
            LexicalUnit::Plus,
            LexicalUnit::Number,
            LexicalUnit::Times,
            LexicalUnit::Number,
            LexicalUnit::Colon,
            LexicalUnit::End,
        ]
    );
    Ok(())
}

#[test]
fn test_unary_minus_and_parentheses() -> GlsResult<()> {
    let (_, rules) = parse_with_trace("LET P BE x = -(y) : END")?;
    assert_eq!(rules, vec![1, 2, 4, 9, 13, 12, 10, 3]);
    Ok(())
}

#[test]
fn test_if_instruction() -> GlsResult<()> {
    let source = "LET P BE\nIF { x < 3 } THEN\nOUT(x) :\nELSE\ny = 0 :\nEND :\nEND";
    let (_, rules) = parse_with_trace(source)?;
    assert_eq!(
        rules,
        vec![1, 2, 5, 19, 20, 10, 23, 11, 2, 7, 25, 3, 2, 4, 9, 11, 3, 3, 3]
    );
    Ok(())
}

#[test]
fn test_if_with_empty_then_branch() -> GlsResult<()> {
    // The epsilon production closes the THEN branch on the ELSE look-ahead.
    let source = "LET P BE IF { x == 0 } THEN ELSE OUT(x) : END : END";
    let (_, rules) = parse_with_trace(source)?;
    assert_eq!(rules, vec![1, 2, 5, 19, 20, 10, 21, 11, 3, 2, 7, 25, 3, 3, 3]);
    Ok(())
}

#[test]
fn test_while_instruction() -> GlsResult<()> {
    let source = "LET Count BE\nWHILE { i < 10 } REPEAT\ni = i + 1 :\nEND :\nEND";
    let (_, rules) = parse_with_trace(source)?;
    assert_eq!(rules, vec![1, 2, 6, 24, 20, 10, 23, 11, 2, 4, 9, 10, 14, 15, 11, 3, 3]);
    Ok(())
}

#[test]
fn test_comparator_alternatives() -> GlsResult<()> {
    let smaller_equal = "LET P BE WHILE { x <= 9 } REPEAT IN(x) : END : END";
    let (_, rules) = parse_with_trace(smaller_equal)?;
    assert!(rules.contains(&22));
    Ok(())
}

#[test]
fn test_leaves_reconstruct_the_token_sequence() -> GlsResult<()> {
    let source = "LET Double BE\nIN(x) :\ny = x + x :\nOUT(y) :\nEND";
    let tokens = scan(source)?;
    let (tree, _) = parse_with_trace(source)?;
    let leaves = tree.leaves();
    assert_eq!(leaves.len(), tokens.len());
    for (leaf, token) in leaves.iter().zip(tokens.iter()) {
        assert_eq!(*leaf, token);
    }
    Ok(())
}

#[test]
fn test_missing_end_reports_eos() {
    let err = parse_error("LET P BE x = 3 :");
    if let GlsError::SyntaxError { found, expected, non_terminal } = err {
        assert_eq!(found.kind, LexicalUnit::Eos);
        assert!(expected.contains(&LexicalUnit::End));
        assert_eq!(non_terminal, Some(NonTerminal::Code));
    } else {
        panic!("Expected a SyntaxError, but got: {:?}", err);
    }
}

#[test]
fn test_unmatched_parenthesis_reports_eos() {
    let err = parse_error("LET P BE x = (1");
    if let GlsError::SyntaxError { found, expected, .. } = err {
        assert_eq!(found.kind, LexicalUnit::Eos);
        assert_eq!(expected, vec![LexicalUnit::RParen]);
    } else {
        panic!("Expected a SyntaxError, but got: {:?}", err);
    }
}

#[test]
fn test_input_after_final_end_is_rejected() {
    let err = parse_error("LET P BE END END");
    if let GlsError::SyntaxError { found, expected, .. } = err {
        assert_eq!(found.kind, LexicalUnit::End);
        assert_eq!(expected, vec![LexicalUnit::Eos]);
    } else {
        panic!("Expected a SyntaxError, but got: {:?}", err);
    }
}

#[test]
fn test_number_cannot_start_an_instruction() {
    let err = parse_error("LET P BE 3 : END");
    if let GlsError::SyntaxError { found, expected, non_terminal } = err {
        assert_eq!(found.kind, LexicalUnit::Number);
        assert!(expected.contains(&LexicalUnit::VarName));
        assert_eq!(non_terminal, Some(NonTerminal::Code));
    } else {
        panic!("Expected a SyntaxError, but got: {:?}", err);
    }
}

#[test]
fn test_if_requires_an_else_branch() {
    let err = parse_error("LET P BE IF { x < 3 } THEN END : END");
    if let GlsError::SyntaxError { found, expected, .. } = err {
        assert_eq!(found.kind, LexicalUnit::End);
        assert_eq!(expected, vec![LexicalUnit::Else]);
    } else {
        panic!("Expected a SyntaxError, but got: {:?}", err);
    }
}

#[test]
fn test_bad_expression_lists_the_first_set() {
    let err = parse_error("LET P BE x = THEN : END");
    if let GlsError::SyntaxError { found, expected, non_terminal } = err {
        assert_eq!(found.kind, LexicalUnit::Then);
        assert_eq!(
            expected,
            vec![
                LexicalUnit::VarName,
                LexicalUnit::Number,
                LexicalUnit::LParen,
                LexicalUnit::Minus,
            ]
        );
        assert_eq!(non_terminal, Some(NonTerminal::ExprArith));
    } else {
        panic!("Expected a SyntaxError, but got: {:?}", err);
    }
}

#[test]
fn test_lexical_error_surfaces_through_the_parser() {
    let err = parse_error("LET P BE # END");
    if let GlsError::UnknownCharacter { ch, line } = err {
        assert_eq!(ch, '#');
        assert_eq!(line, 1);
    } else {
        panic!("Expected an UnknownCharacter error, but got: {:?}", err);
    }
}

#[test]
fn test_full_rule_display() -> GlsResult<()> {
    let mut printer = RulePrinter::new(Vec::new(), DisplayMode::FullRules);
    let mut parser = Parser::new("LET P BE END")?;
    parser.parse(&mut printer)?;
    let output = String::from_utf8(printer.into_inner()).unwrap();
    assert_eq!(
        output,
        "   [1]  <Program>      \u{2192}  LET [ProgName] BE <Code> END\n   \
         [3]  <Code>         \u{2192}  \u{03b5}\n"
    );
    Ok(())
}

#[test]
fn test_rule_number_display() -> GlsResult<()> {
    let mut printer = RulePrinter::new(Vec::new(), DisplayMode::RuleNumbers);
    let mut parser = Parser::new("LET P BE x = 3 : END")?;
    parser.parse(&mut printer)?;
    let output = String::from_utf8(printer.into_inner()).unwrap();
    assert_eq!(output, "1 2 4 9 11 3 \n");
    Ok(())
}
