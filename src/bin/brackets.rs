use brackets::cmd;
use brackets::BRACKETS_VERSION;

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let app = clap::Command::new("brackets")
        .version(BRACKETS_VERSION)
        .about("A small scheme with dictionary literals")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(cmd::run::Command::options())
        .subcommand(cmd::expand::Command::options())
        .subcommand(cmd::repl::Command::options());

    match app.get_matches().subcommand() {
        Some(("run", opts)) => cmd::run::Command::new(opts)?.run(),
        Some(("expand", opts)) => cmd::expand::Command::new(opts)?.run(),
        Some(("repl", opts)) => cmd::repl::Command::new(opts)?.run(),
        _ => Err(anyhow::anyhow!("unknown command")),
    }
}
