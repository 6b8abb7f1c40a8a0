// SPDX-License-Identifier: MPL-2.0
use iced_showcase::app::{self, paths, Flags};
use iced_showcase::logging;

const HELP: &str = "\
IcedShowcase

USAGE:
  iced_showcase [OPTIONS]

OPTIONS:
  --lang <TAG>               UI language (e.g. en-US, fr)
  --config-dir <DIR>         Directory holding settings.toml
  --cards <FILE>             Card catalog TOML replacing the built-in one
  --simulate-fetch-failure   Make the catalog fetch fail after its delay
  -h, --help                 Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        cards_path: args.opt_value_from_str("--cards")?,
        simulate_fetch_failure: args.contains("--simulate-fetch-failure"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}

fn main() -> iced::Result {
    logging::init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_override(flags.config_dir.clone());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    app::run(flags)
}
