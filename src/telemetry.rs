use prometheus::register_counter_vec;
use prometheus::CounterVec;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use lazy_static::lazy_static;

use crate::settings::DEFAULT_LOG_LEVEL;

lazy_static! {
    pub static ref QUIZ_QUESTIONS_CNTR: CounterVec = register_counter_vec!(
        "quiz_questions_served_total",
        "Number of questions drawn for quizzes",
        &["category"]
    )
    .unwrap();
}

/// Installs the global subscriber. `log_level` is an `EnvFilter` directive such
/// as `info` or `trivia_catalog=debug,tower_http=info`; an unparsable one falls
/// back to `info`.
pub fn init_tracing(log_level: &str) {
    let mut fmt_layer = fmt::layer();
    if std::env::var("INCLUDE_SPAN_EVENTS").is_ok_and(|value| value.eq_ignore_ascii_case("true")) {
        fmt_layer = fmt_layer.with_span_events(FmtSpan::ENTER | FmtSpan::EXIT);
    }

    tracing_subscriber::registry()
        .with(log_filter(log_level))
        .with(fmt_layer)
        .init();
}

fn log_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_new(log_level).unwrap_or_else(|error| {
        eprintln!("Invalid log level {log_level:?} ({error}), using info");
        EnvFilter::new(DEFAULT_LOG_LEVEL)
    })
}
