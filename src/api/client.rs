use std::time::Duration;

use once_cell::unsync::OnceCell;
use reqwest::{
   Method,
   blocking::{Client, RequestBuilder, Response, multipart},
};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::{ApiError, ApiResult, Branding, BrandingTemplate, Connection, ImportJob, Job, ManagementApi};
use crate::config::Config;

const USER_AGENT: &str = concat!("a0-demo/", env!("CARGO_PKG_VERSION"));
const TEMPLATE_PATH: &str = "branding/templates/universal-login";
/// Largest page the connections endpoint serves.
const CONNECTIONS_PER_PAGE: usize = 100;

/// Blocking Management API v2 client authenticated with the client-credentials
/// grant. The token is requested on first use and kept for the process.
pub struct ManagementClient {
   http:          Client,
   base_url:      String,
   client_id:     String,
   client_secret: String,
   token:         OnceCell<String>,
}

#[derive(Deserialize)]
struct TokenResponse {
   access_token: String,
}

#[derive(Deserialize, Default)]
struct ErrorBody {
   #[serde(default)]
   message:           Option<String>,
   #[serde(default)]
   error_description: Option<String>,
   #[serde(default)]
   error:             Option<String>,
}

impl ManagementClient {
   pub fn new(config: &Config) -> ApiResult<Self> {
      let http = Client::builder()
         .timeout(Duration::from_secs(config.timeout_secs))
         .user_agent(USER_AGENT)
         .build()?;

      Ok(Self {
         http,
         base_url: base_url(&config.domain),
         client_id: config.client_id.clone(),
         client_secret: config.client_secret.clone(),
         token: OnceCell::new(),
      })
   }

   fn access_token(&self) -> ApiResult<&str> {
      self
         .token
         .get_or_try_init(|| self.fetch_token())
         .map(String::as_str)
   }

   fn fetch_token(&self) -> ApiResult<String> {
      let url = format!("{}/oauth/token", self.base_url);
      debug!(%url, client_id = %self.client_id, "requesting management API token");

      let response = self
         .http
         .post(&url)
         .json(&json!({
            "grant_type": "client_credentials",
            "client_id": self.client_id,
            "client_secret": self.client_secret,
            "audience": format!("{}/api/v2/", self.base_url),
         }))
         .send()?;

      if !response.status().is_success() {
         return Err(ApiError::Token(error_from(response).to_string()));
      }

      let token: TokenResponse = response.json()?;
      Ok(token.access_token)
   }

   fn execute<F>(&self, method: Method, path: &str, build: F) -> ApiResult<Response>
   where
      F: FnOnce(RequestBuilder) -> RequestBuilder,
   {
      let token = self.access_token()?;
      let url = format!("{}/api/v2/{}", self.base_url, path);
      debug!(%method, %url, "management API request");

      let request = self.http.request(method, &url).bearer_auth(token);
      let response = build(request).send()?;

      let status = response.status();
      debug!(status = status.as_u16(), "management API response");

      if status.is_success() {
         Ok(response)
      } else {
         Err(error_from(response))
      }
   }
}

impl ManagementApi for ManagementClient {
   fn read_branding(&self) -> ApiResult<Branding> {
      Ok(self.execute(Method::GET, "branding", |r| r)?.json()?)
   }

   fn read_template(&self) -> ApiResult<BrandingTemplate> {
      Ok(self.execute(Method::GET, TEMPLATE_PATH, |r| r)?.json()?)
   }

   fn set_template(&self, body: &str) -> ApiResult<()> {
      self.execute(Method::PUT, TEMPLATE_PATH, |r| r.json(&json!({ "template": body })))?;
      Ok(())
   }

   fn delete_template(&self) -> ApiResult<()> {
      self.execute(Method::DELETE, TEMPLATE_PATH, |r| r)?;
      Ok(())
   }

   fn list_connections(&self) -> ApiResult<Vec<Connection>> {
      let mut connections = Vec::new();
      for page in 0usize.. {
         let batch: Vec<Connection> = self
            .execute(Method::GET, "connections", |r| {
               r.query(&[("page", page), ("per_page", CONNECTIONS_PER_PAGE)])
            })?
            .json()?;

         let last = batch.len() < CONNECTIONS_PER_PAGE;
         connections.extend(batch);
         if last {
            break;
         }
      }
      debug!(count = connections.len(), "connections listed");
      Ok(connections)
   }

   fn read_connection_by_name(&self, name: &str) -> ApiResult<Option<Connection>> {
      let connections: Vec<Connection> = self
         .execute(Method::GET, "connections", |r| r.query(&[("name", name)]))?
         .json()?;

      Ok(connections.into_iter().find(|conn| conn.name == name))
   }

   fn import_users(&self, job: &ImportJob) -> ApiResult<Job> {
      let users = serde_json::to_vec(&job.users)?;
      let file = multipart::Part::bytes(users)
         .file_name("users.json")
         .mime_str("application/json")?;
      let form = multipart::Form::new()
         .part("users", file)
         .text("connection_id", job.connection_id.clone())
         .text("upsert", job.upsert.to_string());

      Ok(self
         .execute(Method::POST, "jobs/users-imports", |r| r.multipart(form))?
         .json()?)
   }
}

/// Normalise a tenant domain into a base URL. A domain that already carries a
/// scheme is kept as-is.
fn base_url(domain: &str) -> String {
   let domain = domain.trim().trim_end_matches('/');
   if domain.starts_with("http://") || domain.starts_with("https://") {
      domain.to_string()
   } else {
      format!("https://{domain}")
   }
}

fn error_from(response: Response) -> ApiError {
   let status = response.status();
   let text = response.text().unwrap_or_default();
   let body: ErrorBody = serde_json::from_str(&text).unwrap_or_default();

   let message = body
      .message
      .or(body.error_description)
      .or(body.error)
      .or_else(|| (!text.trim().is_empty()).then(|| text.trim().to_string()))
      .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());

   ApiError::Status { status: status.as_u16(), message }
}
