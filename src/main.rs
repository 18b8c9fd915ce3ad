// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};
use iced_folio::sequencer::IntroScript;

const HELP: &str = "\
iced_folio - portfolio showcase

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  --lang <LOCALE>        Interface language (en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --intro <SCRIPT>       Intro to play: champion, boot-log, phone-hack, pin-breach
  --skip-intro           Open the portfolio directly
  -h, --help             Print this help
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn,iced_folio=info"),
    )
    .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        log::warn!("ignoring --lang: {err}");
        None
    });
    let config_dir: Option<String> =
        args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            log::warn!("ignoring --config-dir: {err}");
            None
        });
    let intro: Option<IntroScript> = args.opt_value_from_str("--intro").unwrap_or_else(|err| {
        log::warn!("ignoring --intro: {err}");
        None
    });
    let skip_intro = args.contains("--skip-intro");

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("ignoring unexpected arguments: {remaining:?}");
    }

    paths::init_cli_overrides(config_dir);

    app::run(Flags {
        lang,
        intro,
        skip_intro,
    })
}
