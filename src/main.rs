use clap::Parser as ClapParser;
use gillisc::errors::GlsResult;
use gillisc::lexer::Lexer;
use gillisc::parser::Parser;
use gillisc::read;
use gillisc::symboltable::VariableTable;
use gillisc::token::LexicalUnit;
use gillisc::trace::{DisplayMode, RulePrinter};
use std::{io, path::PathBuf};

#[derive(ClapParser)]
#[command(
    author,
    version,
    about = "Syntax analyzer for the Gillis teaching language",
    long_about = "Syntax analyzer for the Gillis teaching language.\n\
                 The analyzer scans a .gls source file, drives an LL(1) recursive\n\
                 descent over it and prints the grammar rule applied at each\n\
                 derivation step. The first lexical or syntactic error aborts the\n\
                 run with a diagnostic.\n\
                 \n\
                 Example usage:\n\
                 gillisc program.gls               # Parse, print rule numbers\n\
                 gillisc program.gls --full-rules  # Print each rule in full\n\
                 gillisc program.gls --tokens      # Token dump and variable table\n\
                 gillisc program.gls --show-tree   # Print the parse tree"
)]
struct Cli {
    // The path to the file to analyze
    path: PathBuf,

    // Only scan: print every token and the table of variables
    #[arg(short, long)]
    tokens: bool,

    // Print the full production rules instead of bare rule numbers
    #[arg(short, long)]
    full_rules: bool,

    // Print the parse tree after a successful parse
    #[arg(short, long)]
    show_tree: bool,
}

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

// Scan the whole file, printing each token and collecting the variables
// with the line of their first occurrence.
fn dump_tokens(source: &str) -> GlsResult<()> {
    let mut lexer = Lexer::new(source);
    let mut variables = VariableTable::new();
    loop {
        let symbol = lexer.next_token()?;
        if symbol.kind == LexicalUnit::Eos {
            break;
        }
        println!("{}", symbol);
        variables.record(&symbol);
    }
    println!("\nVariables");
    print!("{}", variables);
    Ok(())
}

// Parse the file, emitting the derivation trace on stdout.
fn parse_source(source: &str, args: &Cli) -> GlsResult<()> {
    let mode = if args.full_rules { DisplayMode::FullRules } else { DisplayMode::RuleNumbers };
    let mut printer = RulePrinter::new(io::stdout(), mode);
    let mut parser = Parser::new(source)?;
    let tree = parser.parse(&mut printer)?;
    if args.show_tree {
        print!("{}", tree);
    }
    Ok(())
}

fn run(args: &Cli) -> GlsResult<()> {
    let source = read(&args.path)?;
    if args.tokens {
        dump_tokens(&source)
    } else {
        parse_source(&source, args)
    }
}

fn main() {
    let args = Cli::parse();
    if let Err(err) = run(&args) {
        fatal(&err.to_string());
    }
}
