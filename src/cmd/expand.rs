use crate::compiler::desugar::quotation;
use crate::compiler::source::FileSource;
use crate::compiler::Compiler;
use crate::vm::writer::Writer;
use clap::arg;
use std::path::PathBuf;

/// Prints a program with its dictionary literals eliminated
pub struct Command {
    input: PathBuf,
}

impl Command {
    pub fn new(opts: &clap::ArgMatches) -> anyhow::Result<Self> {
        let path = opts
            .value_of("INPUT")
            .ok_or_else(|| anyhow!("no input file given"))?;

        Ok(Self {
            input: PathBuf::from(path),
        })
    }

    pub fn options<'a>() -> clap::Command<'a> {
        clap::Command::new("expand")
            .alias("e")
            .about("print the specified file with dictionaries desugared")
            .arg(arg!(<INPUT> "the file to expand"))
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let mut source = FileSource::new(self.input.clone());
        let program = Compiler::new().compile_program(&mut source)?;
        let writer = Writer::new();

        for datum in quotation::program_to_data(&program) {
            println!("{}", writer.write(&datum));
        }

        Ok(())
    }
}
