#[macro_use]
extern crate anyhow;
extern crate im_rc;
extern crate thiserror;

extern crate nom;
extern crate nom_locate;

pub mod cmd;
pub mod compiler;
pub mod repl;
pub mod vm;

use std::path::PathBuf;

pub const BRACKETS_VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn brackets_config_directory() -> PathBuf {
    match directories::ProjectDirs::from("org", "brackets", "brackets") {
        Some(dirs) => dirs.config_dir().to_path_buf(),
        None => PathBuf::from(".brackets"),
    }
}

#[cfg(test)]
#[macro_use(assert_matches)]
extern crate matches;

#[cfg(test)]
extern crate quickcheck;

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;
