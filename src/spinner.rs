use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const TICK: Duration = Duration::from_millis(100);

/// Run `f` on the current thread while a spinner is shown on stderr.
///
/// The result of `f` is returned untouched. Nothing is drawn when stderr is
/// not a terminal.
pub fn waiting<T, E, F>(message: &str, f: F) -> Result<T, E>
where
   F: FnOnce() -> Result<T, E>,
{
   let spinner = ProgressBar::new_spinner();
   spinner.set_style(
      ProgressStyle::default_spinner()
         .template("{spinner:.green} {msg}")
         .unwrap_or_else(|_| ProgressStyle::default_spinner()),
   );
   spinner.set_message(message.to_string());
   spinner.enable_steady_tick(TICK);

   let result = f();
   spinner.finish_and_clear();
   result
}
