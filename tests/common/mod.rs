#![allow(dead_code)]

use std::{
   cell::{Cell, RefCell},
   collections::VecDeque,
   io::{self, Read, Write},
   rc::Rc,
};

use a0_demo::api::{
   ApiError, ApiResult, Branding, BrandingTemplate, Connection, ImportJob, Job, ManagementApi,
};
use a0_demo::commands::Commands;
use a0_demo::display::Renderer;
use a0_demo::error::{CliError, CliResult};
use a0_demo::interactive::Prompter;
use a0_demo::iostream::InputStream;

/// Every remote call the fake API received, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
   ReadBranding,
   ReadTemplate,
   SetTemplate(String),
   DeleteTemplate,
   ListConnections,
   ReadConnectionByName(String),
   ImportUsers(ImportJob),
}

#[derive(Clone, Default)]
pub struct FakeApi {
   pub calls:       Rc<RefCell<Vec<Call>>>,
   pub connections: Vec<Connection>,
   pub branding:    Branding,
   pub template:    String,
   pub fail_import: bool,
}

impl FakeApi {
   pub fn with_connections(connections: Vec<Connection>) -> Self {
      Self { connections, ..Self::default() }
   }

   pub fn calls(&self) -> Vec<Call> {
      self.calls.borrow().clone()
   }

   fn record(&self, call: Call) {
      self.calls.borrow_mut().push(call);
   }
}

impl ManagementApi for FakeApi {
   fn read_branding(&self) -> ApiResult<Branding> {
      self.record(Call::ReadBranding);
      Ok(self.branding.clone())
   }

   fn read_template(&self) -> ApiResult<BrandingTemplate> {
      self.record(Call::ReadTemplate);
      Ok(BrandingTemplate { body: self.template.clone() })
   }

   fn set_template(&self, body: &str) -> ApiResult<()> {
      self.record(Call::SetTemplate(body.to_string()));
      Ok(())
   }

   fn delete_template(&self) -> ApiResult<()> {
      self.record(Call::DeleteTemplate);
      Ok(())
   }

   fn list_connections(&self) -> ApiResult<Vec<Connection>> {
      self.record(Call::ListConnections);
      Ok(self.connections.clone())
   }

   fn read_connection_by_name(&self, name: &str) -> ApiResult<Option<Connection>> {
      self.record(Call::ReadConnectionByName(name.to_string()));
      Ok(self.connections.iter().find(|conn| conn.name == name).cloned())
   }

   fn import_users(&self, job: &ImportJob) -> ApiResult<Job> {
      self.record(Call::ImportUsers(job.clone()));
      if self.fail_import {
         return Err(ApiError::Status { status: 400, message: "connection is disabled".to_string() });
      }
      Ok(Job {
         id:            "job_abc123".to_string(),
         kind:          Some("users_import".to_string()),
         status:        Some("pending".to_string()),
         connection_id: Some(job.connection_id.clone()),
         created_at:    None,
      })
   }
}

/// Answers select prompts from a queue. An empty queue means the operator
/// pressed Esc.
#[derive(Clone, Default)]
pub struct ScriptedPrompter {
   pub interactive: bool,
   pub answers:     Rc<RefCell<VecDeque<String>>>,
   pub prompts:     Rc<RefCell<Vec<(String, Vec<String>)>>>,
}

impl ScriptedPrompter {
   pub fn answering(answers: &[&str]) -> Self {
      Self {
         interactive: true,
         answers: Rc::new(RefCell::new(answers.iter().map(|a| a.to_string()).collect())),
         ..Self::default()
      }
   }

   pub fn non_interactive() -> Self {
      Self::default()
   }

   pub fn prompts(&self) -> Vec<(String, Vec<String>)> {
      self.prompts.borrow().clone()
   }

   fn next_answer(&self) -> CliResult<String> {
      self.answers.borrow_mut().pop_front().ok_or(CliError::InputCancelled)
   }
}

impl Prompter for ScriptedPrompter {
   fn is_interactive(&self) -> bool {
      self.interactive
   }

   fn select(&self, message: &str, options: &[String]) -> CliResult<String> {
      self.prompts.borrow_mut().push((message.to_string(), options.to_vec()));
      let answer = self.next_answer()?;
      assert!(options.contains(&answer), "scripted answer {answer:?} is not among {options:?}");
      Ok(answer)
   }

   fn input(&self, message: &str, validator: &dyn Fn(&str) -> Result<(), String>) -> CliResult<String> {
      self.prompts.borrow_mut().push((message.to_string(), Vec::new()));
      let answer = self.next_answer()?;
      validator(&answer).map_err(CliError::InvalidInput)?;
      Ok(answer)
   }
}

/// Stdin stand-in: either a terminal or a pipe carrying `data`.
pub struct FakeStdin {
   terminal: bool,
   data:     io::Cursor<Vec<u8>>,
   reads:    Rc<Cell<usize>>,
}

impl FakeStdin {
   pub fn terminal() -> Self {
      Self { terminal: true, data: io::Cursor::new(Vec::new()), reads: Rc::default() }
   }

   pub fn piped(data: &str) -> Self {
      Self { terminal: false, data: io::Cursor::new(data.as_bytes().to_vec()), reads: Rc::default() }
   }

   /// Number of reads issued so far, shared with the stream once it is moved.
   pub fn reads(&self) -> Rc<Cell<usize>> {
      Rc::clone(&self.reads)
   }
}

impl Read for FakeStdin {
   fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
      assert!(!self.terminal, "a terminal stdin must never be read");
      self.reads.set(self.reads.get() + 1);
      self.data.read(buf)
   }
}

impl InputStream for FakeStdin {
   fn is_terminal(&self) -> bool {
      self.terminal
   }
}

#[derive(Clone, Default)]
pub struct Captured(pub Rc<RefCell<Vec<u8>>>);

impl Captured {
   pub fn text(&self) -> String {
      String::from_utf8_lossy(&self.0.borrow()).into_owned()
   }
}

impl Write for Captured {
   fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
      self.0.borrow_mut().extend_from_slice(buf);
      Ok(buf.len())
   }

   fn flush(&mut self) -> io::Result<()> {
      Ok(())
   }
}

pub fn connection(id: &str, name: &str, strategy: &str) -> Connection {
   Connection { id: id.to_string(), name: name.to_string(), strategy: strategy.to_string(), options: None }
}

pub fn tenant_connections() -> Vec<Connection> {
   vec![
      connection("con_upa", "Username-Password-Authentication", "auth0"),
      connection("con_google", "google-oauth2", "google-oauth2"),
      connection("con_staff", "Staff", "auth0"),
   ]
}

/// Wire a [`Commands`] around test doubles, returning the handles tests
/// inspect afterwards.
pub fn commands(api: FakeApi, prompter: ScriptedPrompter, stdin: FakeStdin) -> (Commands, Captured) {
   let out = Captured::default();
   let commands = Commands::new(Box::new(api), Box::new(prompter), Renderer::new(out.clone()), Box::new(stdin));
   (commands, out)
}

pub fn cli_error(err: &anyhow::Error) -> &CliError {
   err.downcast_ref::<CliError>()
      .unwrap_or_else(|| panic!("expected a CliError, got {err:#}"))
}
