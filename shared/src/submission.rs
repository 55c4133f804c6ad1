use chrono::{DateTime, NaiveDateTime};
use derive_more::Display;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use strum_macros::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[serde(transparent)]
pub struct SubmissionId(pub i64);

/// AI models accepted by the submission endpoint.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    StrumDisplay,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum AiModel {
    #[default]
    #[serde(rename = "GPT-5")]
    #[strum(serialize = "GPT-5")]
    Gpt5,
    Claude,
    #[serde(rename = "LLaMA")]
    #[strum(serialize = "LLaMA")]
    Llama,
    Gemini,
    Perplexity,
    Other,
}

/// A stored submission as returned by the public listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: SubmissionId,
    pub lumen_name: String,
    pub prompt_text: String,
    // Older rows may carry values outside `AiModel`, so this stays a string.
    pub ai_used: String,
    #[serde(default)]
    pub ai_agent: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_as_zero")]
    pub reward_amount: f64,
    #[serde(default)]
    pub screenshot_path: Option<String>,
    #[serde(default, deserialize_with = "deserialize_path_list")]
    pub additional_screenshots: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub timestamp: Option<NaiveDateTime>,
}

impl Submission {
    /// Primary artifact first, then any additional screenshots.
    pub fn media(&self) -> Vec<&str> {
        self.screenshot_path
            .iter()
            .map(String::as_str)
            .chain(self.additional_screenshots.iter().map(String::as_str))
            .filter(|path| !path.is_empty())
            .collect()
    }

    pub fn primary_kind(&self) -> Option<ArtifactKind> {
        self.screenshot_path.as_deref().map(ArtifactKind::classify)
    }

    pub fn agent(&self) -> Option<&str> {
        self.ai_agent.as_deref().filter(|agent| !agent.trim().is_empty())
    }

    /// One labelled entry per attached file, numbered by position in
    /// `media()`.
    pub fn downloads(&self) -> Vec<Download<'_>> {
        self.media()
            .into_iter()
            .enumerate()
            .map(|(index, path)| {
                let kind = ArtifactKind::classify(path);
                let label = match kind {
                    ArtifactKind::Image => format!("Screenshot {}", index + 1),
                    ArtifactKind::Project => "Project ZIP File".to_string(),
                    ArtifactKind::Other => format!("File {}", index + 1),
                };
                Download { kind, label, path }
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Download<'a> {
    pub kind: ArtifactKind,
    pub label: String,
    pub path: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
pub enum ArtifactKind {
    #[strum(serialize = "Screenshot")]
    Image,
    #[strum(serialize = "Project")]
    Project,
    #[strum(serialize = "File")]
    Other,
}

impl ArtifactKind {
    /// Classifies a server-relative artifact path, preferring the file
    /// extension over the naming prefix the server adds.
    pub fn classify(path: &str) -> Self {
        let lower = path.to_ascii_lowercase();
        let file_name = lower.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(&lower);

        match file_name.rsplit_once('.').map(|(_, ext)| ext) {
            Some("jpg" | "jpeg" | "png") => ArtifactKind::Image,
            Some("zip") => ArtifactKind::Project,
            _ if lower.contains("screenshot") => ArtifactKind::Image,
            _ if lower.contains("project") => ArtifactKind::Project,
            _ => ArtifactKind::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResponse {
    pub message: String,
    #[serde(default)]
    pub submission_id: Option<SubmissionId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub pages: u32,
    pub per_page: u32,
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPage {
    #[serde(default)]
    pub submissions: Vec<Submission>,
    pub pagination: Pagination,
}

/// Error envelope the backend uses for 4xx/5xx replies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Parses the timestamp formats the backend has been seen to emit: naive
/// ISO-8601 (with or without fractional seconds) and RFC 3339 with offset.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    let parsed = raw.as_deref().and_then(parse_timestamp);
    if parsed.is_none() {
        if let Some(raw) = raw {
            log::warn!("Unparseable submission timestamp: {}", raw);
        }
    }
    Ok(parsed)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PathList {
    List(Vec<String>),
    Joined(String),
    Other(IgnoredAny),
}

// Older rows store extra screenshots as one comma-joined string.
fn deserialize_path_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let paths = match PathList::deserialize(deserializer)? {
        PathList::List(paths) => paths,
        PathList::Joined(joined) => joined.split(',').map(str::to_string).collect(),
        PathList::Other(_) => Vec::new(),
    };
    Ok(paths
        .into_iter()
        .map(|path| path.trim().to_string())
        .filter(|path| !path.is_empty())
        .collect())
}

fn deserialize_null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}
