//! Custom formatters for the logging system.

use std::fmt;
use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::macros::format_description;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, format};
use tracing_subscriber::registry::LookupSpan;

const TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour]:[minute]:[second].[subsecond digits:3]");

/// Single-line formatter for interactive use: local time, level, target,
/// span path, then the event fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct DevelopmentFormatter {
    ansi: bool,
}

impl DevelopmentFormatter {
    pub fn new(ansi: bool) -> Self {
        Self { ansi }
    }

    fn level_label(&self, level: tracing::Level) -> &'static str {
        match (level, self.ansi) {
            (tracing::Level::TRACE, true) => "\x1b[36mTRACE\x1b[0m",
            (tracing::Level::DEBUG, true) => "\x1b[34mDEBUG\x1b[0m",
            (tracing::Level::INFO, true) => "\x1b[32mINFO \x1b[0m",
            (tracing::Level::WARN, true) => "\x1b[33mWARN \x1b[0m",
            (tracing::Level::ERROR, true) => "\x1b[31mERROR\x1b[0m",
            (tracing::Level::TRACE, false) => "TRACE",
            (tracing::Level::DEBUG, false) => "DEBUG",
            (tracing::Level::INFO, false) => "INFO ",
            (tracing::Level::WARN, false) => "WARN ",
            (tracing::Level::ERROR, false) => "ERROR",
        }
    }
}

impl<S, N> FormatEvent<S, N> for DevelopmentFormatter
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> fmt::Result {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        let time = now.format(TIME_FORMAT).unwrap_or_default();

        let metadata = event.metadata();
        write!(
            writer,
            "{} {} [{}] ",
            time,
            self.level_label(*metadata.level()),
            metadata.target()
        )?;

        if let Some(scope) = ctx.event_scope() {
            for span in scope.from_root() {
                write!(writer, "{}: ", span.name())?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}
