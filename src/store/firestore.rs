use async_trait::async_trait;
use chrono::SecondsFormat;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::StatusCode;
use serde_json::{Map, Value, json};

use crate::config::Config;
use crate::error::AppError;
use crate::models::{Document, FieldValue};
use crate::store::{DocumentStore, Write};

/// Characters left as-is in a document path segment.
const PATH_SEGMENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Token the emulator accepts for admin access.
const EMULATOR_TOKEN: &str = "owner";

/// Firestore over its REST v1 API.
pub struct FirestoreStore {
    client: reqwest::Client,
    base_url: String,
    database_path: String,
    access_token: Option<String>,
}

impl FirestoreStore {
    pub fn new(
        base_url: &str,
        project: &str,
        database: &str,
        access_token: Option<String>,
    ) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("jobseed/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            database_path: format!("projects/{project}/databases/{database}"),
            access_token,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let project = config.project.as_deref().ok_or_else(|| {
            AppError::Config(
                "Firestore project is required (--project or GOOGLE_CLOUD_PROJECT)".to_string(),
            )
        })?;

        let token = match (&config.access_token, &config.emulator_host) {
            (Some(token), _) => Some(token.clone()),
            (None, Some(_)) => Some(EMULATOR_TOKEN.to_string()),
            (None, None) => {
                return Err(AppError::Config(
                    "An access token is required outside the emulator (--access-token or FIRESTORE_ACCESS_TOKEN)"
                        .to_string(),
                ));
            }
        };

        Self::new(&config.firestore_base_url(), project, &config.database, token)
    }

    /// Full resource name used inside request bodies.
    fn document_name(&self, collection: &str, id: &str) -> String {
        format!("{}/documents/{collection}/{id}", self.database_path)
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!(
            "{}/{}/documents/{}/{}",
            self.base_url,
            self.database_path,
            utf8_percent_encode(collection, PATH_SEGMENT_SET),
            utf8_percent_encode(id, PATH_SEGMENT_SET)
        )
    }

    fn commit_url(&self) -> String {
        format!("{}/{}/documents:commit", self.base_url, self.database_path)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn encode_write(&self, write: &Write) -> Value {
        match write {
            Write::Set {
                collection,
                id,
                document,
            } => json!({
                "update": {
                    "name": self.document_name(collection, id),
                    "fields": encode_fields(document),
                }
            }),
            Write::ArrayUnion {
                collection,
                id,
                fields,
            } => {
                let transforms: Vec<Value> = fields
                    .iter()
                    .map(|(path, values)| {
                        json!({
                            "fieldPath": path,
                            "appendMissingElements": {
                                "values": values.iter().map(encode_value).collect::<Vec<_>>(),
                            }
                        })
                    })
                    .collect();
                json!({
                    "transform": {
                        "document": self.document_name(collection, id),
                        "fieldTransforms": transforms,
                    },
                    "currentDocument": { "exists": true },
                })
            }
        }
    }
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    fn name(&self) -> &str {
        "firestore"
    }

    async fn commit(&self, writes: Vec<Write>) -> Result<(), AppError> {
        if writes.is_empty() {
            return Ok(());
        }

        let body = json!({
            "writes": writes.iter().map(|w| self.encode_write(w)).collect::<Vec<_>>(),
        });

        let resp = self
            .authorize(self.client.post(self.commit_url()))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(AppError::from_store_response(status.as_u16(), &text));
        }

        tracing::debug!("Firestore commit of {} writes accepted", writes.len());
        Ok(())
    }

    async fn exists(&self, collection: &str, id: &str) -> Result<bool, AppError> {
        let resp = self
            .authorize(self.client.get(self.document_url(collection, id)))
            .send()
            .await?;

        match resp.status() {
            StatusCode::NOT_FOUND => Ok(false),
            status if status.is_success() => Ok(true),
            status => {
                let text = resp.text().await.unwrap_or_default();
                Err(AppError::from_store_response(status.as_u16(), &text))
            }
        }
    }
}

/// Encode a document's fields as a Firestore `fields` map.
fn encode_fields(document: &Document) -> Value {
    let fields: Map<String, Value> = document
        .iter()
        .map(|(k, v)| (k.clone(), encode_value(v)))
        .collect();
    Value::Object(fields)
}

/// Encode a value in Firestore's typed JSON representation.
fn encode_value(value: &FieldValue) -> Value {
    match value {
        FieldValue::Null => json!({ "nullValue": null }),
        FieldValue::Bool(b) => json!({ "booleanValue": b }),
        // int64 travels as a decimal string
        FieldValue::Integer(n) => json!({ "integerValue": n.to_string() }),
        FieldValue::Double(f) => json!({ "doubleValue": f }),
        FieldValue::String(s) => json!({ "stringValue": s }),
        FieldValue::Timestamp(ts) => {
            json!({ "timestampValue": ts.to_rfc3339_opts(SecondsFormat::Micros, true) })
        }
        FieldValue::Array(values) => json!({
            "arrayValue": { "values": values.iter().map(encode_value).collect::<Vec<_>>() }
        }),
        FieldValue::Map(fields) => json!({
            "mapValue": { "fields": encode_fields(fields) }
        }),
    }
}
