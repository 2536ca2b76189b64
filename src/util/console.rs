//! Diagnostic output on stdout: `[LEVEL HH:MM:SS] message`.
//!
//! Colour is decided once at startup and carried in a [`Palette`]; the
//! subscriber itself comes from `tracing-subscriber` with a custom event
//! format.

use anyhow::{anyhow, Result};
use chrono::Local;
use console::Style;
use std::fmt;
use std::io;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub color: bool,
}

impl Palette {
    /// Colour only when stdout is attached to a terminal.
    pub fn detect() -> Self {
        Self {
            color: console::user_attended(),
        }
    }

    fn style(&self, level: Level) -> Style {
        let style = match level {
            Level::ERROR => Style::new().red(),
            Level::WARN => Style::new().yellow(),
            Level::INFO => Style::new().green(),
            Level::DEBUG | Level::TRACE => Style::new().cyan(),
        };
        style.bright().force_styling(self.color)
    }

    /// `[LEVEL HH:MM:SS]`, styled when colour is enabled.
    pub fn tag(&self, level: Level, time: &str) -> String {
        let tag = format!("[{} {}]", level, time);
        self.style(level).apply_to(tag).to_string()
    }
}

/// Event format producing `[LEVEL HH:MM:SS] message`.
pub struct TaggedFormat {
    palette: Palette,
}

impl TaggedFormat {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }
}

impl<S, N> FormatEvent<S, N> for TaggedFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let time = Local::now().format("%H:%M:%S").to_string();
        write!(writer, "{} ", self.palette.tag(*event.metadata().level(), &time))?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install the stdout subscriber. Call once per process.
pub fn init(palette: Palette, level: Level) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stdout)
        .with_ansi(palette.color)
        .event_format(TaggedFormat::new(palette))
        .try_init()
        .map_err(|e| anyhow!("initialize logger: {}", e))
}
