use std::{fs::File, io::Read, path::Path};

pub mod errors;
pub mod lexer;
pub mod parse_tree;
pub mod parser;
pub mod symboltable;
pub mod token;
pub mod trace;

pub const VERSION: &str = "0.1.0";

use crate::errors::{GlsError, GlsResult};

pub fn read(filename: &Path) -> GlsResult<String> {
    let path = Path::new(filename);

    match path.extension() {
        Some(ext) => {
            if !ext.eq("gls") {
                return Err(GlsError::FileReadError("File must have a .gls extension".to_string()));
            }
        }
        None => {
            return Err(GlsError::FileReadError("File must have a .gls extension".to_string()));
        }
    }
    // Open the path in read-only mode, returns `io::Result<File>`
    let mut file = File::open(path)?;
    // Read the file contents into a string, returns `io::Result<usize>`
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}
