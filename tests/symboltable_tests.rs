use gillisc::errors::GlsResult;
use gillisc::lexer::scan;
use gillisc::symboltable::VariableTable;
use gillisc::token::{LexicalUnit, Symbol};

fn table_for(source: &str) -> GlsResult<VariableTable> {
    let mut table = VariableTable::new();
    for symbol in scan(source)? {
        table.record(&symbol);
    }
    Ok(table)
}

#[test]
fn test_variables_are_sorted_lexicographically() -> GlsResult<()> {
    let source = "LET P BE\nzz = 1 :\naa = 2 :\nmm = 3 :\nEND";
    let table = table_for(source)?;
    let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["aa", "mm", "zz"]);
    Ok(())
}

#[test]
fn test_first_occurrence_line_is_kept() -> GlsResult<()> {
    let source = "LET P BE\nx = 1 :\ny = x :\nx = y :\nEND";
    let table = table_for(source)?;
    let entries: Vec<(&str, usize)> = table.iter().collect();
    assert_eq!(entries, vec![("x", 2), ("y", 3)]);
    Ok(())
}

#[test]
fn test_only_variable_names_are_recorded() -> GlsResult<()> {
    // Keywords, the program name and literals never enter the table.
    let source = "LET Prog BE x = 3 : END";
    let table = table_for(source)?;
    assert_eq!(table.len(), 1);
    let entries: Vec<(&str, usize)> = table.iter().collect();
    assert_eq!(entries, vec![("x", 1)]);
    Ok(())
}

#[test]
fn test_empty_table() {
    let table = VariableTable::new();
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
    assert_eq!(table.to_string(), "");
}

#[test]
fn test_display_lists_name_and_line() {
    let mut table = VariableTable::new();
    table.record(&Symbol::text(LexicalUnit::VarName, "count", 4));
    table.record(&Symbol::text(LexicalUnit::VarName, "base", 7));
    assert_eq!(table.to_string(), "base\t7\ncount\t4\n");
}
