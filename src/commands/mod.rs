pub mod branding;
pub mod config;
pub mod users;

use crate::api::ManagementApi;
use crate::display::Renderer;
use crate::error::{CliError, CliResult};
use crate::interactive::Prompter;
use crate::iostream::{self, InputStream};

/// Everything a command needs: the remote API, a way to ask the operator,
/// somewhere to render results, and stdin for piped payloads.
pub struct Commands {
   api:      Box<dyn ManagementApi>,
   prompter: Box<dyn Prompter>,
   renderer: Renderer,
   input:    Box<dyn InputStream>,
   piped:    Option<Vec<u8>>,
}

impl Commands {
   pub fn new(
      api: Box<dyn ManagementApi>,
      prompter: Box<dyn Prompter>,
      renderer: Renderer,
      input: Box<dyn InputStream>,
   ) -> Self {
      Self { api, prompter, renderer, input, piped: None }
   }

   /// Text piped on stdin, or `None` when stdin is a terminal or the pipe
   /// carried only whitespace. Stdin is drained at most once per process.
   fn piped_text(&mut self) -> CliResult<Option<String>> {
      if self.piped.is_none() {
         let drained = iostream::piped_input(self.input.as_mut())?;
         self.piped = Some(drained);
      }

      let piped = self.piped.as_deref().unwrap_or_default();
      if piped.iter().all(u8::is_ascii_whitespace) {
         return Ok(None);
      }

      String::from_utf8(piped.to_vec())
         .map(Some)
         .map_err(|_| CliError::InvalidInput("piped input is not valid UTF-8".to_string()))
   }
}
