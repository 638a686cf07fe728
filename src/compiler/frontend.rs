pub mod parser;
pub mod reader;
use super::error::Error;
use super::source::Source;
use crate::vm::value::Value;
use parser::ast::Program;

pub type Result<T> = std::result::Result<T, Error>;

/// Text in, program out: the reader followed by the parser
#[derive(Debug, Clone, Default)]
pub struct Frontend {
    parser: parser::Parser,
}

impl Frontend {
    pub fn new() -> Self {
        Frontend {
            parser: parser::Parser::new(),
        }
    }

    pub fn pass<T: Source>(&self, source: &mut T) -> Result<Program> {
        let data = self.read(source)?;
        self.parse(&data)
    }

    pub fn read<T: Source>(&self, source: &mut T) -> Result<Vec<Value>> {
        let mut text = String::new();
        source.read_to_string(&mut text)?;

        log::debug!("reading {}", source.for_message());
        reader::parse_sequence(&text)
    }

    pub fn parse(&self, data: &[Value]) -> Result<Program> {
        self.parser.parse_program(data)
    }
}
