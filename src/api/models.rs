use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Branding {
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub colors:      Option<BrandingColors>,
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub favicon_url: Option<String>,
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub logo_url:    Option<String>,
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub font:        Option<BrandingFont>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandingColors {
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub primary:         Option<String>,
   /// Either a plain color or a gradient object.
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub page_background: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandingFont {
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandingTemplate {
   pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
   pub id:       String,
   pub name:     String,
   pub strategy: String,
   #[serde(default, skip_serializing_if = "Option::is_none")]
   pub options:  Option<Value>,
}

/// A bulk user import request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportJob {
   pub connection_id: String,
   pub users:         Vec<Map<String, Value>>,
   pub upsert:        bool,
}

/// Job record returned once an import has been queued.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Job {
   pub id:            String,
   #[serde(rename = "type", default)]
   pub kind:          Option<String>,
   #[serde(default)]
   pub status:        Option<String>,
   #[serde(default)]
   pub connection_id: Option<String>,
   #[serde(default)]
   pub created_at:    Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_branding_tolerates_missing_fields() {
      let branding: Branding = serde_json::from_str(r#"{"logo_url": "https://example.com/logo.png"}"#).unwrap();
      assert_eq!(branding.logo_url.as_deref(), Some("https://example.com/logo.png"));
      assert!(branding.colors.is_none());
   }

   #[test]
   fn test_job_reads_type_and_timestamp() {
      let job: Job = serde_json::from_str(
         r#"{
            "id": "job_abc",
            "type": "users_import",
            "status": "pending",
            "connection_id": "con_123",
            "created_at": "2024-05-01T10:00:00.000Z"
         }"#,
      )
      .unwrap();
      assert_eq!(job.kind.as_deref(), Some("users_import"));
      assert_eq!(job.status.as_deref(), Some("pending"));
      assert!(job.created_at.is_some());
   }
}
