// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};
use std::path::PathBuf;

const HELP: &str = "\
IcedFolio - portfolio viewer

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  --catalog PATH      Project catalog to load (default: projects.toml in the config dir)
  --project ID        Open this project at startup
  --config-dir DIR    Directory holding settings.toml
  -h, --help          Print this help
";

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let catalog: Option<PathBuf> = parse_opt(&mut args, "--catalog");
    let project: Option<String> = parse_opt(&mut args, "--project");
    let config_dir: Option<String> = parse_opt(&mut args, "--config-dir");

    for unused in args.finish() {
        log::warn!("ignoring unexpected argument {}", unused.to_string_lossy());
    }

    paths::init_cli_override(config_dir);

    app::run(Flags { catalog, project })
}

fn parse_opt<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("ignoring {key}: {err}");
            None
        }
    }
}
