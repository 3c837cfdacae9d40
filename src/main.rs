// SPDX-License-Identifier: MPL-2.0
use aqua_vision::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
AquaVision - underwater image enhancement client

USAGE:
  aqua_vision [OPTIONS]

OPTIONS:
  --lang <LOCALE>       UI language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help

ENVIRONMENT:
  AQUA_VISION_CONFIG_DIR   Config directory when --config-dir is not given
  RUST_LOG                 Log filter (default: aqua_vision=info)
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("aqua_vision=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring invalid --lang value");
            None
        }),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring invalid --config-dir value");
            None
        }),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
