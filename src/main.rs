use anyhow::Result;
use clap::{crate_version, App as Cli, Arg};
use soulspace::app::App;
use soulspace::config::Config;

fn main() -> Result<()> {
    let matches = Cli::new("soulspace-tui")
        .version(crate_version!())
        .about("Share your soul anonymously. Everything vanishes in 24 hours.")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Sets a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("screen")
                .short("s")
                .long("screen")
                .value_name("ID")
                .help("Opens the given screen right after start (e.g. home, circles)")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    App::start(config, matches.value_of("screen"))?;
    Ok(())
}
