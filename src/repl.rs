pub mod command;
pub mod string_completer;
use crate::brackets_config_directory;
use crate::compiler::frontend::reader;
use crate::repl::command::{CommandCompleter, Commands};
use crate::repl::string_completer::StringCompleter;
use crate::vm::primitive::PrimOp;
use crate::vm::value::Value;
use crate::vm::VM;
use crate::BRACKETS_VERSION;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::{Highlighter, MatchingBracketHighlighter};
use rustyline::hint::Hinter;
use rustyline::validate::{MatchingBracketValidator, ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Editor, Helper};
use std::borrow::Cow;
use std::path::PathBuf;

const PROMPT: &str = "λ ";
const CONTINUATION_PROMPT: &str = ".. ";
const SPECIAL_FORMS: [&str; 5] = ["quote", "if", "lambda", "let", "define"];

pub struct Repl {
    vm: VM,
    commands: Commands,
    editor: Editor<EditorSupport>,
}

/// Completion, bracket matching and validation for the line editor
pub struct EditorSupport {
    names: StringCompleter,
    commands: CommandCompleter,
    brackets: MatchingBracketValidator,
    highlighter: MatchingBracketHighlighter,
}

impl EditorSupport {
    pub fn new(vm: &VM) -> Self {
        let mut names = vm.binding_names();
        names.extend(PrimOp::ALL.iter().map(|op| op.name().to_string()));
        names.extend(SPECIAL_FORMS.iter().map(|form| form.to_string()));

        Self {
            names: StringCompleter::from(names),
            commands: CommandCompleter::new(),
            brackets: MatchingBracketValidator::new(),
            highlighter: MatchingBracketHighlighter::new(),
        }
    }
}

impl Helper for EditorSupport {}

impl Hinter for EditorSupport {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context) -> Option<Self::Hint> {
        None
    }
}

impl Completer for EditorSupport {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, ctx: &Context) -> rustyline::Result<(usize, Vec<Pair>)> {
        match self.commands.complete(line, pos, ctx)? {
            (start, commands) if !commands.is_empty() => Ok((start, commands)),
            _ => self.names.complete(line, pos, ctx),
        }
    }
}

impl Highlighter for EditorSupport {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_char(&self, line: &str, pos: usize) -> bool {
        self.highlighter.highlight_char(line, pos)
    }
}

impl Validator for EditorSupport {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        self.brackets.validate(ctx)
    }
}

impl Repl {
    pub fn new(vm: VM) -> anyhow::Result<Self> {
        let history = history_file();

        if let Some(dir) = history.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let config = rustyline::config::Config::builder()
            .auto_add_history(true)
            .history_ignore_dups(true)
            .max_history_size(1000)
            .build();

        Ok(Self {
            vm,
            commands: Commands::new(),
            editor: Editor::with_config(config),
        })
    }

    pub fn run_loop(&mut self) -> anyhow::Result<()> {
        let history = history_file();

        if self.editor.load_history(&history).is_err() {
            log::debug!("starting without history at {}", history.display());
        }

        println!("BRACKETS {}", BRACKETS_VERSION);
        println!("Type :help for help.");

        loop {
            // the completer has to see definitions made by the last input
            self.editor.set_helper(Some(EditorSupport::new(&self.vm)));

            match self.read_input() {
                Ok(input) => self.handle_input(&input),
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => {
                    eprintln!("Error: {}", err);
                    break;
                }
            }
        }

        self.editor.save_history(&history)?;
        Ok(())
    }

    // Keeps reading while the reader asks for more input. This covers the
    // cases the bracket validator does not see, like an open string.
    fn read_input(&mut self) -> Result<String, ReadlineError> {
        let mut input = self.editor.readline(PROMPT)?;

        while !input.trim_start().starts_with(':') && is_incomplete(&input) {
            input.push('\n');
            input.push_str(&self.editor.readline(CONTINUATION_PROMPT)?);
        }

        Ok(input)
    }

    fn handle_input(&mut self, input: &str) {
        match self.commands.dispatch(input, &mut self.vm) {
            Ok(true) => (),
            Ok(false) => self.eval(input),
            Err(e) => eprintln!("{}", e),
        }
    }

    fn eval(&mut self, input: &str) {
        match self.vm.run_string(input) {
            Ok(Value::Void) => (),
            Ok(value) => println!("{}", self.vm.write(&value)),
            Err(e) => eprintln!("{}", e),
        }
    }
}

fn is_incomplete(input: &str) -> bool {
    matches!(reader::parse_sequence(input), Err(e) if e.is_incomplete())
}

fn history_file() -> PathBuf {
    brackets_config_directory().join("repl").join("history")
}
