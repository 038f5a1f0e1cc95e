use std::io;

use dialoguer::{Input, Select, theme::ColorfulTheme};

use super::{Prompter, is_interactive_terminal};
use crate::error::{CliError, CliResult};

/// Create a styled theme for dialoguer prompts
pub fn create_theme() -> ColorfulTheme {
   ColorfulTheme::default()
}

/// Prompter backed by dialoguer on the controlling terminal.
pub struct TerminalPrompter {
   interactive: bool,
   theme:       ColorfulTheme,
}

impl TerminalPrompter {
   /// `no_input` forces non-interactive mode even on a terminal.
   pub fn new(no_input: bool) -> Self {
      Self { interactive: !no_input && is_interactive_terminal(), theme: create_theme() }
   }
}

impl Prompter for TerminalPrompter {
   fn is_interactive(&self) -> bool {
      self.interactive
   }

   fn select(&self, message: &str, options: &[String]) -> CliResult<String> {
      let index = Select::with_theme(&self.theme)
         .with_prompt(message)
         .items(options)
         .default(0)
         .interact_opt()
         .map_err(prompt_error)?
         .ok_or(CliError::InputCancelled)?;

      options
         .get(index)
         .cloned()
         .ok_or_else(|| CliError::NotFound(format!("option #{index}")))
   }

   fn input(&self, message: &str, validator: &dyn Fn(&str) -> Result<(), String>) -> CliResult<String> {
      Input::<String>::with_theme(&self.theme)
         .with_prompt(message)
         .allow_empty(true)
         .validate_with(|value: &String| validator(value.as_str()))
         .interact_text()
         .map_err(prompt_error)
   }
}

/// Ctrl-C while a prompt is open surfaces as an interrupted read.
fn prompt_error(err: dialoguer::Error) -> CliError {
   match err {
      dialoguer::Error::IO(source) if source.kind() == io::ErrorKind::Interrupted => CliError::InputCancelled,
      dialoguer::Error::IO(source) => CliError::Io { context: "prompt failed", source },
   }
}
