use std::io::{self, Write};

use console::Style;
use serde::Serialize;
use serde_json::Value;

use crate::api::Branding;
use crate::error::{CliError, CliResult};

const WRITE_FAILED: &str = "unable to write output";

/// Writes command results for the operator.
pub struct Renderer {
   out: Box<dyn Write>,
}

impl Renderer {
   pub fn stdout() -> Self {
      Self::new(io::stdout())
   }

   pub fn new(out: impl Write + 'static) -> Self {
      Self { out: Box::new(out) }
   }

   /// Display a section header
   pub fn heading(&mut self, text: &str) -> CliResult<()> {
      writeln!(
         self.out,
         "\n{} {}\n",
         Style::new().dim().apply_to("==="),
         Style::new().bold().cyan().apply_to(text)
      )
      .map_err(CliError::io(WRITE_FAILED))
   }

   /// Write `body` verbatim followed by a newline.
   pub fn text(&mut self, body: &str) -> CliResult<()> {
      writeln!(self.out, "{body}").map_err(CliError::io(WRITE_FAILED))
   }

   pub fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> CliResult<()> {
      let pretty = serde_json::to_string_pretty(value).map_err(|e| CliError::io(WRITE_FAILED)(e.into()))?;
      self.text(&pretty)
   }

   /// Display a success message
   pub fn success(&mut self, message: &str) -> CliResult<()> {
      writeln!(
         self.out,
         "{} {}",
         Style::new().green().apply_to("✓"),
         Style::new().bold().apply_to(message)
      )
      .map_err(CliError::io(WRITE_FAILED))
   }

   /// Aligned two-column rows; empty values are shown as a dash.
   pub fn key_values(&mut self, rows: &[(&str, String)]) -> CliResult<()> {
      let width = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
      let key_style = Style::new().dim();

      for (key, value) in rows {
         let value = if value.is_empty() { "-" } else { value.as_str() };
         writeln!(self.out, "  {}  {value}", key_style.apply_to(format!("{key:<width$}")))
            .map_err(CliError::io(WRITE_FAILED))?;
      }
      Ok(())
   }

   pub fn branding_show(&mut self, branding: &Branding) -> CliResult<()> {
      let colors = branding.colors.clone().unwrap_or_default();
      let background = match colors.page_background {
         Some(Value::String(color)) => color,
         Some(other) => other.to_string(),
         None => String::new(),
      };

      self.heading("branding")?;
      self.key_values(&[
         ("ACCENT COLOR", colors.primary.unwrap_or_default()),
         ("BACKGROUND COLOR", background),
         ("LOGO URL", branding.logo_url.clone().unwrap_or_default()),
         ("FAVICON URL", branding.favicon_url.clone().unwrap_or_default()),
         (
            "CUSTOM FONT URL",
            branding
               .font
               .as_ref()
               .and_then(|font| font.url.clone())
               .unwrap_or_default(),
         ),
      ])
   }
}
