#[macro_use]
extern crate matches;

mod compiler;
mod helpers;
mod vm;
