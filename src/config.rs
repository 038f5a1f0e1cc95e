use std::{
   collections::HashMap,
   env,
   path::{Path, PathBuf},
};

use crate::error::{CliError, CliResult};

pub const CONFIG_FILE_NAME: &str = "local.env";

pub const DOMAIN_KEY: &str = "AUTH0_DOMAIN";
pub const CLIENT_ID_KEY: &str = "AUTH0_CLIENT_ID";
pub const CLIENT_SECRET_KEY: &str = "AUTH0_CLIENT_SECRET";
pub const TIMEOUT_KEY: &str = "AUTH0_TIMEOUT_SECS";

/// Tenant connection settings, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
   pub domain:        String,
   pub client_id:     String,
   pub client_secret: String,
   pub timeout_secs:  u64,
}

/// Values supplied through global command-line flags.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
   pub domain:        Option<String>,
   pub client_id:     Option<String>,
   pub client_secret: Option<String>,
}

fn default_timeout_secs() -> u64 {
   30
}

impl Default for Config {
   fn default() -> Self {
      Self {
         domain:        String::new(),
         client_id:     String::new(),
         client_secret: String::new(),
         timeout_secs:  default_timeout_secs(),
      }
   }
}

impl Config {
   /// Load settings from `local.env`, then the environment, then flags.
   ///
   /// `file` names an explicit config file which must exist. Without it the
   /// home directory and then the current directory are searched.
   pub fn load(file: Option<&Path>, overrides: &Overrides) -> CliResult<Self> {
      let file_vars = match file {
         Some(path) => read_env_file(path)?,
         None => match find_config_file() {
            Some(path) => read_env_file(&path)?,
            None => HashMap::new(),
         },
      };

      Self::from_sources(&file_vars, |key| env::var(key).ok(), overrides)
   }

   pub fn from_sources<F>(
      file_vars: &HashMap<String, String>,
      env_lookup: F,
      overrides: &Overrides,
   ) -> CliResult<Self>
   where
      F: Fn(&str) -> Option<String>,
   {
      let lookup = |key: &str| {
         env_lookup(key)
            .filter(|value| !value.is_empty())
            .or_else(|| file_vars.get(key).cloned())
      };

      let mut config = Self::default();
      if let Some(domain) = lookup(DOMAIN_KEY) {
         config.domain = domain;
      }
      if let Some(client_id) = lookup(CLIENT_ID_KEY) {
         config.client_id = client_id;
      }
      if let Some(client_secret) = lookup(CLIENT_SECRET_KEY) {
         config.client_secret = client_secret;
      }
      if let Some(timeout) = lookup(TIMEOUT_KEY) {
         config.timeout_secs = timeout.trim().parse().map_err(|_| {
            CliError::Config(format!("{TIMEOUT_KEY} must be a number of seconds, got '{timeout}'"))
         })?;
      }

      if let Some(domain) = &overrides.domain {
         config.domain = domain.clone();
      }
      if let Some(client_id) = &overrides.client_id {
         config.client_id = client_id.clone();
      }
      if let Some(client_secret) = &overrides.client_secret {
         config.client_secret = client_secret.clone();
      }

      Ok(config)
   }

   /// Fails unless the domain and client credentials are all present.
   pub fn require_credentials(&self) -> CliResult<()> {
      let missing: Vec<&str> = [
         (DOMAIN_KEY, &self.domain),
         (CLIENT_ID_KEY, &self.client_id),
         (CLIENT_SECRET_KEY, &self.client_secret),
      ]
      .into_iter()
      .filter(|(_, value)| value.trim().is_empty())
      .map(|(key, _)| key)
      .collect();

      if missing.is_empty() {
         Ok(())
      } else {
         Err(CliError::Config(format!(
            "missing {}; set them in {CONFIG_FILE_NAME}, the environment, or with flags",
            missing.join(", ")
         )))
      }
   }
}

fn find_config_file() -> Option<PathBuf> {
   let mut candidates = Vec::new();
   if let Some(home_dir) = dirs::home_dir() {
      candidates.push(home_dir.join(CONFIG_FILE_NAME));
   }
   if let Ok(current_dir) = env::current_dir() {
      candidates.push(current_dir.join(CONFIG_FILE_NAME));
   }

   candidates.into_iter().find(|path| path.is_file())
}

/// Parse a dotenv-style file without touching the process environment.
pub fn read_env_file(path: &Path) -> CliResult<HashMap<String, String>> {
   let unreadable = |e: dotenvy::Error| CliError::Config(format!("unable to read {}: {e}", path.display()));

   dotenvy::from_path_iter(path)
      .map_err(unreadable)?
      .map(|item| item.map_err(unreadable))
      .collect()
}
