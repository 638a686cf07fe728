pub mod dict;
pub mod environment;
pub mod interpreter;
pub mod primitive;
pub mod settings;
pub mod value;
pub mod writer;

use crate::compiler;
use crate::compiler::desugar::quotation;
use crate::compiler::frontend::parser::ast::Program;
use crate::compiler::source::{Source, StringSource};
use crate::compiler::Compiler;
use environment::Environment;
pub use settings::{Setting, Settings};
use thiserror::Error;
use value::error::RuntimeError;
use value::Value;
use writer::Writer;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    CompilerError(#[from] compiler::Error),
    #[error(transparent)]
    RuntimeError(#[from] RuntimeError),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Ties the compiler and the interpreter together.
///
/// Top level definitions are kept between runs, so the same VM can be fed a
/// program piece by piece, which is what the REPL does.
#[derive(Debug)]
pub struct VM {
    pub settings: Settings,
    env: Environment,
    compiler: Compiler,
    writer: Writer,
}

impl VM {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        VM {
            settings,
            env: Environment::empty(),
            compiler: Compiler::new(),
            writer: Writer::new(),
        }
    }

    pub fn run_string(&mut self, inp: &str) -> Result<Value> {
        self.run_source(&mut StringSource::new(inp))
    }

    pub fn run_source<T: Source>(&mut self, source: &mut T) -> Result<Value> {
        let program = self.compiler.parse_program(source)?;
        self.interpret(&program)
    }

    /// Evaluate a parsed program, eliminating dictionaries first unless
    /// [`Setting::Desugar`] is turned off.
    pub fn interpret(&mut self, program: &Program) -> Result<Value> {
        if self.settings.is_enabled(&Setting::Desugar) {
            let desugared = self.compiler.desugar(program);
            self.eval(&desugared)
        } else {
            self.eval(program)
        }
    }

    fn eval(&mut self, program: &Program) -> Result<Value> {
        if self.settings.is_enabled(&Setting::Debug) {
            for form in program.iter() {
                log::debug!("{}", self.write(&quotation::form_to_datum(form)));
            }
        }

        Ok(interpreter::eval_program(program, &self.env)?)
    }

    pub fn write(&self, v: &Value) -> String {
        self.writer.write(v)
    }

    pub fn binding_names(&self) -> Vec<String> {
        self.env.global_names()
    }
}

impl Default for VM {
    fn default() -> Self {
        Self::new()
    }
}
