pub mod flag;
pub mod picker;
pub mod validators;
pub mod wizard;

use console::Term;
pub use flag::Flag;
pub use picker::PickerOptions;
pub use wizard::TerminalPrompter;

use crate::error::CliResult;

/// Prompt engine used when a flag was not supplied on the command line.
pub trait Prompter {
   /// Whether prompting is possible at all in this session.
   fn is_interactive(&self) -> bool;

   /// Single-select prompt. Returns the chosen option.
   fn select(&self, message: &str, options: &[String]) -> CliResult<String>;

   /// Free-text prompt, re-asked until `validator` accepts the answer.
   fn input(&self, message: &str, validator: &dyn Fn(&str) -> Result<(), String>) -> CliResult<String>;
}

/// Check if we're running in an interactive terminal
pub fn is_interactive_terminal() -> bool {
   Term::stdout().is_term() && atty::is(atty::Stream::Stdin)
}
