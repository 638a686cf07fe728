use crate::repl::Repl;
use crate::vm::{Setting, Settings, VM};
use clap::arg;

pub struct Command {
    debug: bool,
}

impl Command {
    pub fn new(opts: &clap::ArgMatches) -> anyhow::Result<Self> {
        Ok(Self {
            debug: opts.is_present("debug"),
        })
    }

    pub fn options<'a>() -> clap::Command<'a> {
        clap::Command::new("repl")
            .about("start the interactive REPL")
            .arg(arg!(--debug "log every program before it is evaluated"))
    }

    pub fn run(&self) -> anyhow::Result<()> {
        let mut settings = Settings::default();

        if self.debug {
            settings.enable(Setting::Debug);
        }

        let mut repl = Repl::new(VM::with_settings(settings))?;
        repl.run_loop()
    }
}
