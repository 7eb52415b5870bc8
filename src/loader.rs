use crate::memory::MEMMAX;
use pest::Parser;
use pest_derive::Parser;
use std::error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Parser)]
#[grammar = "program.pest"]
struct ProgramParser;

#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Parse(Box<pest::error::Error<Rule>>),
    InvalidByte { line: usize, literal: String },
    TooLarge(usize),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "could not read program: {}", e),
            LoadError::Parse(e) => write!(f, "malformed program:\n{}", e),
            LoadError::InvalidByte { line, literal } => write!(
                f,
                "line {}: '{}' does not fit in one byte",
                line, literal
            ),
            LoadError::TooLarge(len) => write!(
                f,
                "program is {} bytes long, memory only holds {} bytes",
                len,
                MEMMAX + 1
            ),
        }
    }
}

impl error::Error for LoadError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            LoadError::Io(e) => Some(e),
            LoadError::Parse(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl std::convert::From<io::Error> for LoadError {
    fn from(err: io::Error) -> LoadError {
        LoadError::Io(err)
    }
}

impl std::convert::From<pest::error::Error<Rule>> for LoadError {
    fn from(err: pest::error::Error<Rule>) -> LoadError {
        LoadError::Parse(Box::new(err))
    }
}

/*
 * parse_program
 * turn the textual program into the memory image, blank lines and comments
 * are skipped.
 */
pub fn parse_program(source: &str) -> Result<Vec<u8>, LoadError> {
    let program = ProgramParser::parse(Rule::program, source)?;
    let mut bytes: Vec<u8> = vec![];

    for pair in program.flatten() {
        if pair.as_rule() != Rule::binary_literal {
            continue;
        }
        let literal = pair.as_str();
        let byte = u8::from_str_radix(literal, 2).map_err(|_| LoadError::InvalidByte {
            line: pair.as_span().start_pos().line_col().0,
            literal: literal.to_owned(),
        })?;
        bytes.push(byte);
    }

    if bytes.len() > MEMMAX + 1 {
        return Err(LoadError::TooLarge(bytes.len()));
    }

    Ok(bytes)
}

pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let source = fs::read_to_string(path)?;

    parse_program(&source)
}
