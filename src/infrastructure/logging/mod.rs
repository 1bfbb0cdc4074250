use std::io::Write as _;

use log::{Level, LevelFilter};
use pretty_env_logger::env_logger;

/// HTTP plumbing under teloxide is only worth hearing about when it fails.
const QUIET_MODULES: [&str; 2] = ["hyper", "reqwest"];

/// Drops this crate's name from a log target so lines read `application::words::service`.
fn short_target(target: &str) -> &str {
    target
        .strip_prefix(concat!(env!("CARGO_CRATE_NAME"), "::"))
        .unwrap_or(target)
}

fn level_color(level: Level) -> env_logger::fmt::Color {
    match level {
        Level::Error => env_logger::fmt::Color::Red,
        Level::Warn => env_logger::fmt::Color::Yellow,
        Level::Info => env_logger::fmt::Color::Green,
        Level::Debug => env_logger::fmt::Color::Blue,
        Level::Trace => env_logger::fmt::Color::Magenta,
    }
}

/// Installs the global logger. `RUST_LOG` overrides the `info` default.
pub fn init() {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    builder.filter_level(LevelFilter::Info);
    for module in QUIET_MODULES {
        builder.filter_module(module, LevelFilter::Warn);
    }
    builder.parse_default_env();

    builder.format(|buf, record| {
        let mut level_style = buf.style();
        level_style.set_color(level_color(record.level()));
        level_style.set_bold(true);

        writeln!(
            buf,
            "{} {} {} > {}",
            buf.timestamp(),
            level_style.value(format!("{:<5}", record.level())),
            short_target(record.target()),
            record.args()
        )
    });

    builder.init();
}
