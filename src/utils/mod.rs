/// Sentry transaction helpers, active at `trace` log level.
pub mod sentry_tracing;
