//! Example user import payloads and record parsing.

use serde_json::{Map, Value};

use crate::error::{CliError, CliResult};
use crate::interactive::PickerOptions;

pub const BASIC_EXAMPLE: &str = include_str!("data/basic.json");
pub const CUSTOM_PASSWORD_HASH_EXAMPLE: &str = include_str!("data/custom-password-hash.json");
pub const MFA_FACTORS_EXAMPLE: &str = include_str!("data/mfa-factors.json");

/// Bulk imports above this size are rejected by the Management API.
pub const MAX_IMPORT_BYTES: usize = 500 * 1024;

pub fn import_options() -> PickerOptions {
   PickerOptions::new([
      ("Basic", BASIC_EXAMPLE),
      ("Custom Password Hash", CUSTOM_PASSWORD_HASH_EXAMPLE),
      ("MFA Factors", MFA_FACTORS_EXAMPLE),
   ])
}

/// Parse an import payload: a JSON array of user objects.
///
/// The size limit applies to the compact encoding that is uploaded, so
/// indentation in the source does not count against it.
pub fn parse_records(payload: &str) -> CliResult<Vec<Map<String, Value>>> {
   let records: Vec<Map<String, Value>> = serde_json::from_str(payload)
      .map_err(|e| CliError::InvalidInput(format!("users must be a JSON array of objects: {e}")))?;

   if records.is_empty() {
      return Err(CliError::InvalidInput("no users to import".to_string()));
   }

   let upload_len = serde_json::to_vec(&records)
      .map_err(|e| CliError::InvalidInput(format!("unable to encode users: {e}")))?
      .len();
   if upload_len > MAX_IMPORT_BYTES {
      return Err(CliError::InvalidInput(format!(
         "user import payload is {upload_len} bytes; split it into files of at most {MAX_IMPORT_BYTES} bytes"
      )));
   }
   Ok(records)
}
