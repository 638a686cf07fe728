use crate::compiler::desugar::quotation;
use crate::compiler::source::StringSource;
use crate::compiler::Compiler;
use crate::vm::{Setting, VM};
use rustyline::completion::{Completer, Pair};
use rustyline::Context;

const COMMANDS: [&str; 4] = [":help", ":set", ":settings", ":expand"];

pub struct Commands;

impl Commands {
    pub fn new() -> Self {
        Self {}
    }

    /// Handles `input` if it is a command. Returns false for anything that
    /// should be evaluated instead.
    pub fn dispatch(&self, input: &str, vm: &mut VM) -> anyhow::Result<bool> {
        let input = input.trim();

        if !input.starts_with(':') {
            return Ok(false);
        }

        let (command, argument) = match input.find(char::is_whitespace) {
            Some(idx) => (&input[..idx], input[idx..].trim()),
            None => (input, ""),
        };

        match (command, argument) {
            (":help", "") => self.handle_help(),
            (":set", setting) if !setting.is_empty() => self.handle_set(setting, vm)?,
            (":settings", "") => self.handle_settings(vm),
            (":expand", code) if !code.is_empty() => self.handle_expand(code, vm)?,
            _ => return Err(anyhow!("Invalid command. Type :help for help.")),
        }

        Ok(true)
    }

    fn handle_help(&self) {
        println!("Available commands: ");
        self.display_help(":help", "Show help on the available commands");
        self.display_help(":set (+|-)setting", "Enable or disable a setting");
        self.display_help(":settings", "Show the values of all settings");
        self.display_help(":expand code", "Show `code` with dictionaries eliminated");
    }

    fn handle_set(&self, setting: &str, vm: &mut VM) -> anyhow::Result<()> {
        if let Some(name) = setting.strip_prefix('+') {
            vm.settings.enable(self.parse_setting(name)?);
            Ok(())
        } else if let Some(name) = setting.strip_prefix('-') {
            vm.settings.disable(self.parse_setting(name)?);
            Ok(())
        } else {
            Err(anyhow!(
                "Setting must be a known setting and prefixed with either + or -"
            ))
        }
    }

    fn parse_setting(&self, input: &str) -> anyhow::Result<Setting> {
        input.to_lowercase().parse::<Setting>().map_err(|e| anyhow!(e))
    }

    fn handle_settings(&self, vm: &VM) {
        let info = vm
            .settings
            .as_vec()
            .iter()
            .map(|(s, f)| format!("{}: {}", s, if *f { "enabled" } else { "disabled" }))
            .collect::<Vec<_>>()
            .join(" ");

        println!("Settings+> {}", info);
    }

    fn handle_expand(&self, code: &str, vm: &VM) -> anyhow::Result<()> {
        let compiler = Compiler::new();
        let program = compiler.compile_program(&mut StringSource::new(code))?;

        for datum in quotation::program_to_data(&program) {
            println!("{}", vm.write(&datum));
        }

        Ok(())
    }

    #[inline]
    fn display_help(&self, usage: &str, description: &str) {
        println!("{:<25} {}", usage, description);
    }
}

impl Default for Commands {
    fn default() -> Self {
        Self::new()
    }
}

/// Completes command names at the start of the line
pub struct CommandCompleter;

impl CommandCompleter {
    pub fn new() -> Self {
        Self {}
    }

    fn complete_command(&self, line: &str, pos: usize) -> (usize, Vec<Pair>) {
        let prefix = &line[..pos];

        if !prefix.starts_with(':') || prefix.contains(char::is_whitespace) {
            return (pos, vec![]);
        }

        let matches = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(prefix))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();

        (0, matches)
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok(self.complete_command(line, pos))
    }
}
