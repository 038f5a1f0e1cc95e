use tracing_subscriber::EnvFilter;

/// Overrides the log filter, e.g. `A0_DEMO_LOG=a0_demo=trace`.
pub const LOG_ENV: &str = "A0_DEMO_LOG";

/// Install the global subscriber. Logs go to stderr so rendered output on
/// stdout stays clean.
pub fn init(debug: bool) {
   let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

   let _ = tracing_subscriber::fmt()
      .with_env_filter(filter)
      .with_writer(std::io::stderr)
      .with_target(false)
      .try_init();
}

fn default_directive(debug: bool) -> &'static str {
   if debug { "a0_demo=debug" } else { "warn" }
}
