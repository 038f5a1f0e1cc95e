use anyhow::{Context, Result};
use clap::{ArgMatches, Args, Command, FromArgMatches};
use tracing::debug;

use super::Commands;
use crate::branding::template_options;
use crate::error::CliError;
use crate::interactive::Flag;
use crate::spinner::waiting;

pub const TEMPLATE: Flag = Flag {
   name:        "Template",
   long_form:   "template",
   short_form:  't',
   help:        "Template to apply: Basic, Login box + image, or Page footers.",
   is_required: true,
};

/// Inputs of `branding templates update`.
#[derive(Debug, Clone, Default)]
pub struct TemplateUpdateInputs {
   pub template: String,
}

impl FromArgMatches for TemplateUpdateInputs {
   fn from_arg_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
      let mut inputs = Self::default();
      inputs.update_from_arg_matches(matches)?;
      Ok(inputs)
   }

   fn update_from_arg_matches(&mut self, matches: &ArgMatches) -> Result<(), clap::Error> {
      if let Some(template) = TEMPLATE.bound_string(matches) {
         self.template = template;
      }
      Ok(())
   }
}

impl Args for TemplateUpdateInputs {
   fn augment_args(cmd: Command) -> Command {
      TEMPLATE.register_string(cmd)
   }

   fn augment_args_for_update(cmd: Command) -> Command {
      Self::augment_args(cmd)
   }
}

impl Commands {
   pub fn branding_show(&mut self) -> Result<()> {
      let branding = waiting("Loading branding settings", || self.api.read_branding())
         .map_err(CliError::remote("read branding settings"))?;

      self.renderer.branding_show(&branding)?;
      Ok(())
   }

   pub fn template_show(&mut self) -> Result<()> {
      let template = waiting("Loading Universal Login template", || self.api.read_template())
         .map_err(CliError::remote("read Universal Login template"))?;

      self.renderer.heading("template")?;
      self.renderer.text(&template.body)?;
      Ok(())
   }

   /// Replace the Universal Login template with a bundled template named by
   /// `--template`, else with a body piped on stdin, else with one picked
   /// from the bundled templates.
   pub fn template_update(&mut self, inputs: &TemplateUpdateInputs) -> Result<()> {
      let piped = if inputs.template.is_empty() {
         self.piped_text().context("reading template from stdin")?
      } else {
         None
      };

      let body = match piped {
         Some(body) => {
            debug!(bytes = body.len(), "using template piped on stdin");
            body
         },
         None => {
            let options = template_options();
            let label = TEMPLATE
               .select(self.prompter.as_ref(), &inputs.template, || Ok(options.labels()))
               .context("choosing a template")?;
            options.value_for(&label)?.to_string()
         },
      };

      waiting("Updating Universal Login template", || self.api.set_template(&body))
         .map_err(CliError::remote("update Universal Login template"))?;

      self.renderer.success("Universal Login template updated")?;
      Ok(())
   }

   pub fn template_delete(&mut self) -> Result<()> {
      waiting("Deleting Universal Login template", || self.api.delete_template())
         .map_err(CliError::remote("delete Universal Login template"))?;

      self.renderer.success("Universal Login template deleted")?;
      Ok(())
   }
}
