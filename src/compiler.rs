pub mod desugar;
pub mod error;
pub mod frontend;
pub mod source;
use frontend::parser::ast::Program;
use frontend::Frontend;
use source::Source;

pub use error::Error;

type Result<T> = std::result::Result<T, Error>;

/// Source text to program, with or without dictionary elimination
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    frontend: Frontend,
}

impl Compiler {
    pub fn new() -> Self {
        Compiler {
            frontend: Frontend::new(),
        }
    }

    pub fn parse_program<T: Source>(&self, source: &mut T) -> Result<Program> {
        self.frontend.pass(source)
    }

    pub fn compile_program<T: Source>(&self, source: &mut T) -> Result<Program> {
        let program = self.parse_program(source)?;
        Ok(self.desugar(&program))
    }

    pub fn desugar(&self, program: &Program) -> Program {
        desugar::eliminate_dicts(program)
    }
}
