use clap::Parser;
use cmds::Cmd;

mod cmds;
mod util;

#[derive(Debug, Parser)]
#[command(about = "hscript: holiday calendar utilities")]
struct Cli {
    /// Raise log verbosity (-v: info, -vv: debug). RUST_LOG overrides it
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: cmds::Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();

    log::info!("{:?}", cli);
    cli.command.run()
}
