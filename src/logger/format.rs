use super::level_name;
use chrono::Local;
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Event field carrying the name of the logger that emitted the record.
pub const LOGGER_FIELD: &str = "logger";

/// `<timestamp> [<LEVEL>] <logger-name> <message>`
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut fields = LineFields::default();
        event.record(&mut fields);

        writeln!(
            writer,
            "{} [{}] {} {}",
            Local::now().format(TIMESTAMP_FORMAT),
            level_name(event.metadata().level()),
            fields.logger,
            fields.message
        )
    }
}

#[derive(Default)]
struct LineFields {
    logger: String,
    message: String,
}

impl Visit for LineFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            LOGGER_FIELD => self.logger = value.to_string(),
            "message" => self.message = value.to_string(),
            _ => {}
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            LOGGER_FIELD => self.logger = format!("{:?}", value),
            "message" => self.message = format!("{:?}", value),
            _ => {}
        }
    }
}
