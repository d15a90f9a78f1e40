use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Pack schema version written by [`Pack::new`].
pub const PACK_VERSION: u32 = 1;

/// The logical unit stored in a container: ordered prompts plus metadata.
///
/// Prompt order is display order. Duplicates are allowed; deduplication is the
/// caller's concern. Top-level fields written by other exporters (`title`,
/// `source`) are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pack {
    pub version: u32,
    /// Export time, epoch milliseconds.
    pub exported_at: i64,
    pub prompts: Vec<PromptRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Pack {
    /// Assemble a pack stamped with [`PACK_VERSION`] and the current UTC time.
    pub fn new(prompts: Vec<PromptRecord>) -> Self {
        Self::with_timestamp(chrono::Utc::now().timestamp_millis(), prompts)
    }

    pub fn with_timestamp(exported_at: i64, prompts: Vec<PromptRecord>) -> Self {
        Self {
            version: PACK_VERSION,
            exported_at,
            prompts,
            extra: Map::new(),
        }
    }
}

/// One prompt inside a pack.
///
/// Absent optional fields are omitted from the JSON. Fields this crate does
/// not know about (e.g. `url` from the browser extension) are kept in
/// `extra` and written back on re-encode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptRecord {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Creation time, epoch milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PromptRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            header: None,
            source: None,
            created_at: None,
            extra: Map::new(),
        }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_created_at(mut self, created_at: i64) -> Self {
        self.created_at = Some(created_at);
        self
    }
}
