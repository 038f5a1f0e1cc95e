use clap::{Arg, ArgMatches, Command, value_parser};
use tracing::debug;

use super::{Prompter, validators::validate_required};
use crate::error::{CliError, CliResult};

/// One logical command input that can come from a flag or from a prompt.
///
/// Flags are declared as constants next to the command that owns them. They
/// register themselves on that command's parser, and the parsed value is
/// handed back to [`Flag::select`] / [`Flag::ask`], which only prompt when
/// nothing was bound.
#[derive(Debug, Clone, Copy)]
pub struct Flag {
   pub name:        &'static str,
   pub long_form:   &'static str,
   pub short_form:  char,
   pub help:        &'static str,
   pub is_required: bool,
}

impl Flag {
   pub fn register_string(&self, cmd: Command) -> Command {
      cmd.arg(
         Arg::new(self.long_form)
            .long(self.long_form)
            .short(self.short_form)
            .help(self.help),
      )
   }

   /// Boolean flags accept `--flag`, `--flag true` and `--flag=false`.
   pub fn register_bool(&self, cmd: Command, default: bool) -> Command {
      cmd.arg(
         Arg::new(self.long_form)
            .long(self.long_form)
            .short(self.short_form)
            .help(self.help)
            .value_parser(value_parser!(bool))
            .num_args(0..=1)
            .default_missing_value("true")
            .default_value(if default { "true" } else { "false" }),
      )
   }

   pub fn bound_string(&self, matches: &ArgMatches) -> Option<String> {
      matches
         .try_get_one::<String>(self.long_form)
         .ok()
         .flatten()
         .cloned()
   }

   pub fn bound_bool(&self, matches: &ArgMatches) -> Option<bool> {
      matches
         .try_get_one::<bool>(self.long_form)
         .ok()
         .flatten()
         .copied()
   }

   /// Resolve from `bound`, or let the operator pick one of `choices`.
   ///
   /// `choices` is only evaluated when a prompt is actually shown.
   pub fn select<F>(&self, prompter: &dyn Prompter, bound: &str, choices: F) -> CliResult<String>
   where
      F: FnOnce() -> CliResult<Vec<String>>,
   {
      if !bound.is_empty() {
         debug!(flag = self.long_form, value = bound, "using value from flag");
         return Ok(bound.to_string());
      }
      self.ensure_interactive(prompter)?;

      let choices = choices()?;
      if choices.is_empty() {
         return Err(CliError::NotFound(format!(
            "no {} available to choose from",
            self.name.to_lowercase()
         )));
      }

      let value = prompter.select(&self.prompt(), &choices)?;
      debug!(flag = self.long_form, value = %value, "value selected");
      Ok(value)
   }

   /// Resolve from `bound`, or ask for free text checked by `validator`.
   pub fn ask(
      &self,
      prompter: &dyn Prompter,
      bound: &str,
      validator: Option<&dyn Fn(&str) -> Result<(), String>>,
   ) -> CliResult<String> {
      if !bound.is_empty() {
         debug!(flag = self.long_form, value = bound, "using value from flag");
         return Ok(bound.to_string());
      }
      self.ensure_interactive(prompter)?;

      let check = |input: &str| {
         if self.is_required {
            validate_required(input)?;
         }
         validator.map_or(Ok(()), |validate| validate(input))
      };
      prompter.input(&self.prompt(), &check)
   }

   /// Boolean flags never prompt.
   pub fn resolve_bool(&self, bound: Option<bool>, default: bool) -> bool {
      bound.unwrap_or(default)
   }

   fn prompt(&self) -> String {
      format!("{}:", self.name)
   }

   fn ensure_interactive(&self, prompter: &dyn Prompter) -> CliResult<()> {
      if prompter.is_interactive() {
         Ok(())
      } else {
         Err(CliError::MissingRequiredInput(format!("{} (--{})", self.name, self.long_form)))
      }
   }
}
