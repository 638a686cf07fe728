pub mod expand;
pub mod repl;
pub mod run;
