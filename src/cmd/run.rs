use crate::compiler::source::FileSource;
use crate::vm::value::Value;
use crate::vm::{Setting, Settings, VM};
use clap::{arg, Arg};
use std::path::PathBuf;

pub struct Command {
    input: PathBuf,
    desugar: bool,
}

impl Command {
    pub fn new(opts: &clap::ArgMatches) -> anyhow::Result<Self> {
        let path = opts
            .value_of("INPUT")
            .ok_or_else(|| anyhow!("no input file given"))?;

        Ok(Self {
            input: PathBuf::from(path),
            desugar: !opts.is_present("no-desugar"),
        })
    }

    pub fn options<'a>() -> clap::Command<'a> {
        clap::Command::new("run")
            .alias("r")
            .about("run the program in the specified file")
            .arg(arg!(<INPUT> "the file to run"))
            .arg(
                Arg::new("no-desugar")
                    .long("no-desugar")
                    .help("evaluate dictionary literals natively"),
            )
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let (vm, value) = self.evaluate()?;

        if value != Value::Void {
            println!("{}", vm.write(&value));
        }

        Ok(())
    }

    // Runtime errors hold values, which are not `Send`, so they are turned
    // into their message before leaving the VM.
    fn evaluate(&self) -> anyhow::Result<(VM, Value)> {
        let mut settings = Settings::default();

        if !self.desugar {
            settings.disable(Setting::Desugar);
        }

        let mut vm = VM::with_settings(settings);
        let mut source = FileSource::new(self.input.clone());
        let value = vm
            .run_source(&mut source)
            .map_err(|e| anyhow!("{}: {}", self.input.display(), e))?;

        Ok((vm, value))
    }
}
