use std::{io, process};

use a0_demo::api::ManagementClient;
use a0_demo::cli::{BrandingAction, Cli, Command, TemplateAction, UsersAction};
use a0_demo::commands::{self, Commands};
use a0_demo::config::{Config, Overrides};
use a0_demo::display::Renderer;
use a0_demo::interactive::TerminalPrompter;
use a0_demo::iostream::Stdin;
use a0_demo::logging;
use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use colored::Colorize;

fn main() {
   let cli = Cli::parse();
   logging::init(cli.debug);

   if let Err(err) = run(cli) {
      eprintln!("{} {err:#}", "error:".red().bold());
      process::exit(1);
   }
}

fn run(cli: Cli) -> Result<()> {
   if let Command::Completions { shell } = cli.command {
      clap_complete::generate(shell, &mut Cli::command(), "a0-demo", &mut io::stdout());
      return Ok(());
   }

   let overrides = Overrides {
      domain:        cli.domain,
      client_id:     cli.client_id,
      client_secret: cli.client_secret,
   };
   let config = Config::load(cli.config.as_deref(), &overrides).context("loading configuration")?;

   if let Command::Config = cli.command {
      return commands::config::show(&config, &mut Renderer::stdout());
   }

   config.require_credentials()?;
   let api = ManagementClient::new(&config).context("creating Management API client")?;
   let mut commands = Commands::new(
      Box::new(api),
      Box::new(TerminalPrompter::new(cli.no_input)),
      Renderer::stdout(),
      Box::new(Stdin::new()),
   );

   match cli.command {
      Command::Branding { action } => match action.unwrap_or(BrandingAction::Show) {
         BrandingAction::Show => commands.branding_show(),
         BrandingAction::Templates { action } => match action {
            TemplateAction::Show => commands.template_show(),
            TemplateAction::Update(inputs) => commands.template_update(&inputs),
            TemplateAction::Delete => commands.template_delete(),
         },
      },
      Command::Users { action } => match action {
         UsersAction::Import(inputs) => commands.users_import(&inputs),
      },
      Command::Config | Command::Completions { .. } => Ok(()),
   }
}
