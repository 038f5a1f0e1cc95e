use anyhow::Result;

use crate::config::Config;
use crate::display::Renderer;

/// Print the tenant settings the other commands would use. The client secret
/// is never echoed.
pub fn show(config: &Config, renderer: &mut Renderer) -> Result<()> {
   let secret = if config.client_secret.is_empty() { String::new() } else { "(set)".to_string() };

   renderer.heading("config")?;
   renderer.key_values(&[
      ("DOMAIN", config.domain.clone()),
      ("CLIENT ID", config.client_id.clone()),
      ("CLIENT SECRET", secret),
      ("TIMEOUT", format!("{}s", config.timeout_secs)),
   ])?;
   Ok(())
}
