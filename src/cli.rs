use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::commands::branding::TemplateUpdateInputs;
use crate::commands::users::ImportInputs;

#[derive(Parser)]
#[command(name = "a0-demo", version)]
#[command(about = "CLI tool to help with giving a compelling customer demo in Auth0")]
pub struct Cli {
   #[arg(long, global = true, help = "Auth0 tenant domain (AUTH0_DOMAIN)")]
   pub domain: Option<String>,

   #[arg(long, global = true, help = "Management API client id (AUTH0_CLIENT_ID)")]
   pub client_id: Option<String>,

   #[arg(long, global = true, help = "Management API client secret (AUTH0_CLIENT_SECRET)")]
   pub client_secret: Option<String>,

   #[arg(long, global = true, value_name = "FILE", help = "Config file (default: ~/local.env, then ./local.env)")]
   pub config: Option<PathBuf>,

   #[arg(long, global = true, help = "Disable interactivity; every input must come from flags")]
   pub no_input: bool,

   #[arg(long, global = true, help = "Enable debug logging")]
   pub debug: bool,

   #[command(subcommand)]
   pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
   /// Show the tenant configuration in use
   Config,

   /// Manage Universal Login branding (shows settings when no subcommand is given)
   Branding {
      #[command(subcommand)]
      action: Option<BrandingAction>,
   },

   /// Manage resources for users
   Users {
      #[command(subcommand)]
      action: UsersAction,
   },

   /// Generate shell completions
   Completions {
      #[arg(value_name = "SHELL")]
      shell: Shell,
   },
}

#[derive(Subcommand)]
pub enum BrandingAction {
   /// Display the custom branding settings for Universal Login
   Show,

   /// Manage custom page templates (requires a custom domain on the tenant)
   Templates {
      #[command(subcommand)]
      action: TemplateAction,
   },
}

#[derive(Subcommand)]
pub enum TemplateAction {
   /// Display the custom template for Universal Login
   Show,

   /// Update the custom template for Universal Login
   #[command(after_help = "Examples:\n  a0-demo branding templates update\n  a0-demo branding templates \
                           update --template \"Page footers\"\n  cat page.liquid | a0-demo branding \
                           templates update")]
   Update(TemplateUpdateInputs),

   /// Delete the custom template for Universal Login
   Delete,
}

#[derive(Subcommand)]
pub enum UsersAction {
   /// Import users from schema
   #[command(
      long_about = "Import users from schema. Issues a Create Import Users Job.\nThe file size limit for a \
                    bulk import is 500KB. You will need to start multiple imports if your data exceeds \
                    this size.",
      after_help = "Examples:\n  a0-demo users import --connection \"Username-Password-Authentication\"\n  \
                    a0-demo users import -c \"Username-Password-Authentication\" --upsert true\n  a0-demo \
                    users import -c \"Username-Password-Authentication\" -f users.json"
   )]
   Import(ImportInputs),
}
