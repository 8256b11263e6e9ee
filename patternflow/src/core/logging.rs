use env_logger::{Builder, Env};
use log::{Level, LevelFilter};
use std::io::Write;
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

pub use log::{debug, error, info, trace, warn};

const CRATES: [&str; 2] = ["patternflow", "gallery"];

/// Logger with the default `info` level and automatic color detection
pub fn init_logger() {
    init_logger_with(0, ColorChoice::Auto);
}

/// Installs the stderr logger. Each `verbosity` step raises the level of
/// this project's crates (`0` info, `1` debug, `2+` trace). `RUST_LOG`
/// still takes precedence when set.
pub fn init_logger_with(verbosity: u8, color: ColorChoice) {
    let filter = default_filter(verbosity);
    let mut builder =
        Builder::from_env(Env::default().default_filter_or(filter));
    builder.filter_module("notify", LevelFilter::Warn);

    builder.format(move |_buf, record| {
        let writer = BufferWriter::stderr(color);
        let mut buffer = writer.buffer();

        buffer.set_color(ColorSpec::new().set_fg(Some(level_color(
            record.level(),
        ))))?;
        write!(
            buffer,
            "[{}][{}]",
            record.level(),
            short_target(record.module_path().unwrap_or("<unknown>"))
        )?;
        buffer.reset()?;
        writeln!(buffer, " {}", record.args())?;
        writer.print(&buffer)?;
        Ok(())
    });

    let _ = builder.try_init();
}

pub fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    CRATES
        .iter()
        .map(|krate| format!("{}={}", krate, level))
        .collect::<Vec<_>>()
        .join(",")
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Trace => Color::Cyan,
        Level::Debug => Color::Blue,
        Level::Info => Color::Green,
        Level::Warn => Color::Yellow,
        Level::Error => Color::Red,
    }
}

/// `patternflow::control::renderer` => `control::renderer`. Paths from
/// other crates are kept whole.
fn short_target(module_path: &str) -> &str {
    CRATES
        .iter()
        .find_map(|krate| {
            module_path
                .strip_prefix(krate)
                .and_then(|rest| rest.strip_prefix("::"))
        })
        .unwrap_or(module_path)
}
