use std::io;

use thiserror::Error;

use crate::api::ApiError;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
   #[error("{0} is required; pass it as a flag or run in an interactive terminal")]
   MissingRequiredInput(String),

   #[error("input cancelled")]
   InputCancelled,

   #[error("not found: {0}")]
   NotFound(String),

   #[error("{context}: {source}")]
   Io {
      context: &'static str,
      #[source]
      source:  io::Error,
   },

   #[error("{operation} failed: {source}")]
   RemoteOperationFailed {
      operation: &'static str,
      #[source]
      source:    ApiError,
   },

   #[error("invalid input: {0}")]
   InvalidInput(String),

   #[error("configuration error: {0}")]
   Config(String),
}

impl CliError {
   /// Builds a mapper that tags an I/O error with what was being done.
   pub fn io(context: &'static str) -> impl FnOnce(io::Error) -> Self {
      move |source| Self::Io { context, source }
   }

   /// Builds a mapper that tags a management API error with the operation name.
   pub fn remote(operation: &'static str) -> impl FnOnce(ApiError) -> Self {
      move |source| Self::RemoteOperationFailed { operation, source }
   }
}
