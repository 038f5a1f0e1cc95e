use std::fs;

use anyhow::{Context, Result};
use clap::{ArgMatches, Args, Command, FromArgMatches};
use tracing::debug;

use super::Commands;
use crate::api::{Connection, ImportJob};
use crate::error::{CliError, CliResult};
use crate::interactive::Flag;
use crate::spinner::waiting;
use crate::users::{import_options, parse_records};

/// Only database connections accept bulk imports.
pub const DATABASE_STRATEGY: &str = "auth0";

pub const CONNECTION: Flag = Flag {
   name:        "Connection",
   long_form:   "connection",
   short_form:  'c',
   help:        "Name of the database connection this user should be imported in.",
   is_required: false,
};

pub const EXAMPLE: Flag = Flag {
   name:        "User Import Examples",
   long_form:   "example",
   short_form:  'e',
   help:        "Bundled example to import: Basic, Custom Password Hash, or MFA Factors.",
   is_required: false,
};

pub const FILE_PATH: Flag = Flag {
   name:        "File Path",
   long_form:   "file-path",
   short_form:  'f',
   help:        "Path to file containing user import example.",
   is_required: false,
};

pub const UPSERT: Flag = Flag {
   name:        "Upsert",
   long_form:   "upsert",
   short_form:  'u',
   help:        "When set to false, pre-existing users that match on email address, user ID, or \
                 username will fail. When set to true, pre-existing users that match on any of \
                 these fields will be updated, but only with upsertable attributes.",
   is_required: false,
};

/// Inputs of `users import`.
#[derive(Debug, Clone, Default)]
pub struct ImportInputs {
   pub connection: String,
   pub example:    String,
   pub file_path:  String,
   pub upsert:     Option<bool>,
}

impl FromArgMatches for ImportInputs {
   fn from_arg_matches(matches: &ArgMatches) -> Result<Self, clap::Error> {
      let mut inputs = Self::default();
      inputs.update_from_arg_matches(matches)?;
      Ok(inputs)
   }

   fn update_from_arg_matches(&mut self, matches: &ArgMatches) -> Result<(), clap::Error> {
      if let Some(connection) = CONNECTION.bound_string(matches) {
         self.connection = connection;
      }
      if let Some(example) = EXAMPLE.bound_string(matches) {
         self.example = example;
      }
      if let Some(file_path) = FILE_PATH.bound_string(matches) {
         self.file_path = file_path;
      }
      if let Some(upsert) = UPSERT.bound_bool(matches) {
         self.upsert = Some(upsert);
      }
      Ok(())
   }
}

impl Args for ImportInputs {
   fn augment_args(cmd: Command) -> Command {
      let cmd = CONNECTION.register_string(cmd);
      let cmd = EXAMPLE.register_string(cmd);
      let cmd = FILE_PATH.register_string(cmd);
      UPSERT.register_bool(cmd, false)
   }

   fn augment_args_for_update(cmd: Command) -> Command {
      Self::augment_args(cmd)
   }
}

/// Names of the connections using `strategy`, in listing order.
pub fn filter_by_strategy(connections: &[Connection], strategy: &str) -> Vec<String> {
   connections
      .iter()
      .filter(|conn| conn.strategy == strategy)
      .map(|conn| conn.name.clone())
      .collect()
}

impl Commands {
   /// Queue a bulk import job into a database connection.
   ///
   /// Users come from `--file-path`, else from the example named by
   /// `--example`, else from stdin when it is piped, else from an example
   /// picked by the operator.
   pub fn users_import(&mut self, inputs: &ImportInputs) -> Result<()> {
      let connection_name = CONNECTION
         .select(self.prompter.as_ref(), &inputs.connection, || self.connection_picker_options())
         .context("choosing a connection")?;

      let connection = waiting("Loading connection", || {
         self.api.read_connection_by_name(&connection_name)
      })
      .map_err(CliError::remote("read connection"))?
      .ok_or_else(|| CliError::NotFound(format!("connection '{connection_name}'")))?;
      debug!(connection = %connection.name, id = %connection.id, "connection resolved");

      let payload = self.import_payload(inputs)?;
      let users = parse_records(&payload).context("parsing user records")?;
      let job = ImportJob {
         connection_id: connection.id.clone(),
         users,
         upsert: UPSERT.resolve_bool(inputs.upsert, false),
      };
      debug!(users = job.users.len(), upsert = job.upsert, "submitting import job");

      let queued = waiting("Importing users", || self.api.import_users(&job))
         .map_err(CliError::remote("import users"))?;

      self.renderer.heading("user(s) imported")?;
      self.renderer.json(&job.users)?;
      self.renderer.key_values(&[
         ("JOB ID", queued.id),
         ("STATUS", queued.status.unwrap_or_default()),
         ("CONNECTION", connection.name),
         ("UPSERT", job.upsert.to_string()),
      ])?;
      Ok(())
   }

   fn connection_picker_options(&self) -> CliResult<Vec<String>> {
      let connections = waiting("Loading connections", || self.api.list_connections())
         .map_err(CliError::remote("list connections"))?;
      Ok(filter_by_strategy(&connections, DATABASE_STRATEGY))
   }

   fn import_payload(&mut self, inputs: &ImportInputs) -> Result<String> {
      if !inputs.file_path.is_empty() {
         return fs::read_to_string(&inputs.file_path)
            .map_err(CliError::io("unable to read users file"))
            .with_context(|| format!("reading {}", inputs.file_path));
      }

      let piped = if inputs.example.is_empty() {
         self.piped_text().context("reading users from stdin")?
      } else {
         None
      };
      if let Some(piped) = piped {
         debug!(bytes = piped.len(), "using users piped on stdin");
         return Ok(piped);
      }

      let options = import_options();
      let example = EXAMPLE
         .select(self.prompter.as_ref(), &inputs.example, || Ok(options.labels()))
         .context("choosing an import example")?;
      Ok(options.value_for(&example)?.to_string())
   }
}
