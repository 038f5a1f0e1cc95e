pub mod client;
pub mod models;

pub use client::ManagementClient;
pub use models::{Branding, BrandingColors, BrandingFont, BrandingTemplate, Connection, ImportJob, Job};
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
   #[error("request failed: {0}")]
   Transport(#[from] reqwest::Error),

   #[error("server responded {status}: {message}")]
   Status { status: u16, message: String },

   #[error("unable to obtain an access token: {0}")]
   Token(String),

   #[error("unable to encode request: {0}")]
   Encode(#[from] serde_json::Error),
}

/// Management API operations the commands rely on.
///
/// Each command calls exactly one mutating or reading operation from here, plus
/// whatever lookups it needs to build that request.
pub trait ManagementApi {
   fn read_branding(&self) -> ApiResult<Branding>;

   fn read_template(&self) -> ApiResult<BrandingTemplate>;

   fn set_template(&self, body: &str) -> ApiResult<()>;

   fn delete_template(&self) -> ApiResult<()>;

   fn list_connections(&self) -> ApiResult<Vec<Connection>>;

   /// Returns `None` when no connection carries that exact name.
   fn read_connection_by_name(&self, name: &str) -> ApiResult<Option<Connection>>;

   fn import_users(&self, job: &ImportJob) -> ApiResult<Job>;
}
