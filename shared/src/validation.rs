//! Client-side checks that mirror the submission endpoint's constraints.
//!
//! The server stays authoritative; these rules exist so an obviously bad
//! submission never leaves the browser.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter};

use crate::submission::AiModel;

pub const MIB: u64 = 1024 * 1024;
pub const MAX_SCREENSHOT_BYTES: u64 = 10 * MIB;
pub const MAX_PROJECT_BYTES: u64 = 50 * MIB;
pub const MAX_ADDITIONAL_SCREENSHOTS: usize = 10;
pub const MIN_REWARD: f64 = 0.01;

const SCREENSHOT_MIME_TYPES: &[&str] = &["image/jpeg", "image/png"];
const SCREENSHOT_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png"];
const PROJECT_MIME_TYPES: &[&str] = &["application/zip", "application/x-zip-compressed"];
const PROJECT_EXTENSIONS: &[&str] = &[".zip"];

/// Which kind of primary artifact the form is collecting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UploadKind {
    #[default]
    Screenshot,
    Project,
}

impl UploadKind {
    /// Multipart field name the server reads the primary file from.
    pub fn field_name(self) -> &'static str {
        match self {
            UploadKind::Screenshot => "screenshot",
            UploadKind::Project => "project",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UploadKind::Screenshot => "Screenshot",
            UploadKind::Project => "Project Folder (ZIP)",
        }
    }

    /// Value for the file input's `accept` attribute.
    pub fn accept(self) -> &'static str {
        match self {
            UploadKind::Screenshot => ".jpg,.jpeg,.png,image/jpeg,image/png",
            UploadKind::Project => ".zip,application/zip,application/x-zip-compressed",
        }
    }

    fn max_bytes(self) -> u64 {
        match self {
            UploadKind::Screenshot => MAX_SCREENSHOT_BYTES,
            UploadKind::Project => MAX_PROJECT_BYTES,
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            UploadKind::Screenshot => "PNG or JPG up to 10MB",
            UploadKind::Project => "ZIP archive up to 50MB",
        }
    }

    fn mime_types(self) -> &'static [&'static str] {
        match self {
            UploadKind::Screenshot => SCREENSHOT_MIME_TYPES,
            UploadKind::Project => PROJECT_MIME_TYPES,
        }
    }

    fn extensions(self) -> &'static [&'static str] {
        match self {
            UploadKind::Screenshot => SCREENSHOT_EXTENSIONS,
            UploadKind::Project => PROJECT_EXTENSIONS,
        }
    }

    fn mime_error(self) -> &'static str {
        match self {
            UploadKind::Screenshot => "Only .jpg, .jpeg, .png files are allowed for screenshots",
            UploadKind::Project => "Only .zip files are allowed for project uploads",
        }
    }

    fn extension_error(self) -> &'static str {
        match self {
            UploadKind::Screenshot => "File must have a valid extension (.jpg, .jpeg, .png)",
            UploadKind::Project => "File must have a .zip extension",
        }
    }

    fn size_error(self) -> &'static str {
        match self {
            UploadKind::Screenshot => "Screenshot size must be less than 10MB",
            UploadKind::Project => "Project file size must be less than 50MB",
        }
    }

    /// Returns the message for the first rule the file breaks, checking
    /// size, then extension, then mime type.
    pub fn check(self, file: &FileMeta) -> Option<&'static str> {
        if file.size > self.max_bytes() {
            return Some(self.size_error());
        }
        if !self.extensions().contains(&file.extension().as_str()) {
            return Some(self.extension_error());
        }
        if !self.mime_types().contains(&file.mime.as_str()) {
            return Some(self.mime_error());
        }
        None
    }
}

/// What the form knows about a picked file without reading its bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub mime: String,
    pub size: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }

    /// Lowercased text after the last dot, with the dot. A name without a
    /// dot yields the whole name, which never matches an allowed extension.
    pub fn extension(&self) -> String {
        let tail = self.name.rsplit('.').next().unwrap_or_default();
        format!(".{}", tail.to_lowercase())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Field {
    #[strum(serialize = "lumen_name")]
    LumenName,
    #[strum(serialize = "prompt_text")]
    PromptText,
    #[strum(serialize = "ai_agent")]
    AiAgent,
    #[strum(serialize = "reward_amount")]
    RewardAmount,
    #[strum(serialize = "file")]
    File,
    #[strum(serialize = "additional_screenshots")]
    AdditionalScreenshots,
    #[strum(serialize = "form")]
    Form,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn has(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Returns true when something was actually removed.
    pub fn clear(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

}

/// Raw form state as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmissionDraft {
    pub lumen_name: String,
    pub prompt_text: String,
    pub ai_used: AiModel,
    pub ai_agent: String,
    pub reward_amount: String,
    pub upload_kind: UploadKind,
    pub primary: Option<FileMeta>,
    pub additional: Vec<FileMeta>,
}

/// A draft that passed every client-side rule.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSubmission {
    pub lumen_name: String,
    pub prompt_text: String,
    pub ai_used: AiModel,
    pub ai_agent: String,
    pub reward_amount: f64,
    pub upload_kind: UploadKind,
}

impl ValidSubmission {
    /// Multipart text parts in the order the form sends them.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("lumen_name", self.lumen_name.clone()),
            ("prompt_text", self.prompt_text.clone()),
            ("ai_used", self.ai_used.to_string()),
            ("ai_agent", self.ai_agent.clone()),
            ("reward_amount", format!("{:.2}", self.reward_amount)),
        ]
    }
}

/// Parses a reward string. `None` covers empty, non-numeric, non-finite and
/// below-minimum input alike.
pub fn parse_reward(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount >= MIN_REWARD)
}

impl SubmissionDraft {
    pub fn validate(&self) -> Result<ValidSubmission, FieldErrors> {
        let mut errors = FieldErrors::new();

        let required = [
            (Field::LumenName, &self.lumen_name, "Lumen Name is required"),
            (Field::PromptText, &self.prompt_text, "Prompt Text is required"),
            (Field::AiAgent, &self.ai_agent, "AI Agent is required"),
        ];
        for (field, value, message) in required {
            if value.trim().is_empty() {
                errors.insert(field, message);
            }
        }

        let reward = if self.reward_amount.trim().is_empty() {
            errors.insert(Field::RewardAmount, "Reward Amount is required");
            None
        } else {
            let parsed = parse_reward(&self.reward_amount);
            if parsed.is_none() {
                errors.insert(Field::RewardAmount, "Reward Amount must be at least 0.01");
            }
            parsed
        };

        match &self.primary {
            None => errors.insert(Field::File, "File is required"),
            Some(file) => {
                if let Some(message) = self.upload_kind.check(file) {
                    errors.insert(Field::File, message);
                }
            }
        }

        if let Some(message) = self.check_additional() {
            errors.insert(Field::AdditionalScreenshots, message);
        }

        match reward {
            Some(reward_amount) if errors.is_empty() => Ok(ValidSubmission {
                lumen_name: self.lumen_name.trim().to_string(),
                prompt_text: self.prompt_text.trim().to_string(),
                ai_used: self.ai_used,
                ai_agent: self.ai_agent.trim().to_string(),
                reward_amount,
                upload_kind: self.upload_kind,
            }),
            _ => Err(errors),
        }
    }

    fn check_additional(&self) -> Option<String> {
        if self.additional.is_empty() {
            return None;
        }
        if self.upload_kind != UploadKind::Screenshot {
            return Some("Additional screenshots are only allowed in screenshot mode".to_string());
        }
        if self.additional.len() > MAX_ADDITIONAL_SCREENSHOTS {
            return Some(format!(
                "At most {} additional screenshots are allowed",
                MAX_ADDITIONAL_SCREENSHOTS
            ));
        }
        self.additional.iter().find_map(|file| {
            UploadKind::Screenshot
                .check(file)
                .map(|message| format!("{}: {}", file.name, message))
        })
    }

    /// Writes a text field. Returns false for fields that are not free text.
    pub fn set_text(&mut self, field: Field, value: String) -> bool {
        let slot = match field {
            Field::LumenName => &mut self.lumen_name,
            Field::PromptText => &mut self.prompt_text,
            Field::AiAgent => &mut self.ai_agent,
            Field::RewardAmount => &mut self.reward_amount,
            Field::File | Field::AdditionalScreenshots | Field::Form => return false,
        };
        *slot = value;
        true
    }

    /// Switches upload kind, dropping files picked for the other kind.
    /// Returns false when the kind was already selected.
    pub fn set_upload_kind(&mut self, kind: UploadKind) -> bool {
        if self.upload_kind == kind {
            return false;
        }
        self.upload_kind = kind;
        self.primary = None;
        self.additional.clear();
        true
    }

    /// Number of additional screenshots that can still be attached.
    pub fn additional_slots(&self) -> usize {
        MAX_ADDITIONAL_SCREENSHOTS.saturating_sub(self.additional.len())
    }

    /// Resets everything to a blank form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn png(size: u64) -> FileMeta {
        FileMeta::new("shot.png", "image/png", size)
    }

    fn zip(size: u64) -> FileMeta {
        FileMeta::new("site.zip", "application/zip", size)
    }

    fn filled() -> SubmissionDraft {
        SubmissionDraft {
            lumen_name: "  AI_Explorer_2025 ".into(),
            prompt_text: "Build a landing page".into(),
            ai_used: AiModel::Claude,
            ai_agent: "Cursor".into(),
            reward_amount: "5".into(),
            upload_kind: UploadKind::Screenshot,
            primary: Some(png(1024)),
            additional: Vec::new(),
        }
    }

    #[test]
    fn accepts_complete_screenshot_draft() {
        let valid = filled().validate().unwrap();

        assert_eq!(valid.lumen_name, "AI_Explorer_2025");
        assert_eq!(valid.reward_amount, 5.0);
        let fields = valid.text_fields();
        assert_eq!(fields[2], ("ai_used", "Claude".to_string()));
        assert_eq!(fields[4], ("reward_amount", "5.00".to_string()));
    }

    #[test]
    fn reports_every_missing_field() {
        let errors = SubmissionDraft::default().validate().unwrap_err();

        assert_eq!(errors.get(Field::LumenName), Some("Lumen Name is required"));
        assert_eq!(errors.get(Field::PromptText), Some("Prompt Text is required"));
        assert_eq!(errors.get(Field::AiAgent), Some("AI Agent is required"));
        assert_eq!(errors.get(Field::RewardAmount), Some("Reward Amount is required"));
        assert_eq!(errors.get(Field::File), Some("File is required"));
        assert_eq!(errors.len(), 5);
    }

    #[test]
    fn whitespace_only_fields_are_missing() {
        let mut draft = filled();
        draft.prompt_text = "   \n".into();
        let errors = draft.validate().unwrap_err();
        assert!(errors.has(Field::PromptText));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn rejects_small_or_non_numeric_rewards() {
        for raw in ["0", "0.001", "-3", "abc", "NaN", "inf"] {
            let mut draft = filled();
            draft.reward_amount = raw.into();
            let errors = draft.validate().unwrap_err();
            assert_eq!(
                errors.get(Field::RewardAmount),
                Some("Reward Amount must be at least 0.01"),
                "reward {:?}",
                raw
            );
        }

        let mut draft = filled();
        draft.reward_amount = "0.01".into();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn screenshot_mode_gates_type_extension_and_size() {
        let kind = UploadKind::Screenshot;

        assert_eq!(kind.check(&png(MAX_SCREENSHOT_BYTES)), None);
        assert_eq!(kind.check(&FileMeta::new("a.JPEG", "image/jpeg", 1)), None);
        assert_eq!(
            kind.check(&png(MAX_SCREENSHOT_BYTES + 1)),
            Some("Screenshot size must be less than 10MB")
        );
        assert_eq!(
            kind.check(&FileMeta::new("a.gif", "image/png", 1)),
            Some("File must have a valid extension (.jpg, .jpeg, .png)")
        );
        assert_eq!(
            kind.check(&FileMeta::new("a.png", "image/gif", 1)),
            Some("Only .jpg, .jpeg, .png files are allowed for screenshots")
        );
        assert_eq!(
            kind.check(&FileMeta::new("png", "image/png", 1)),
            Some("File must have a valid extension (.jpg, .jpeg, .png)")
        );
    }

    #[test]
    fn project_mode_gates_type_extension_and_size() {
        let kind = UploadKind::Project;

        assert_eq!(kind.check(&zip(MAX_PROJECT_BYTES)), None);
        assert_eq!(
            kind.check(&FileMeta::new("site.ZIP", "application/x-zip-compressed", 1)),
            None
        );
        assert_eq!(
            kind.check(&zip(MAX_PROJECT_BYTES + 1)),
            Some("Project file size must be less than 50MB")
        );
        assert_eq!(kind.check(&png(1)), Some("File must have a .zip extension"));
        assert_eq!(
            kind.check(&FileMeta::new("site.zip", "application/octet-stream", 1)),
            Some("Only .zip files are allowed for project uploads")
        );
    }

    #[test]
    fn size_error_takes_precedence() {
        let huge_gif = FileMeta::new("a.gif", "image/gif", MAX_SCREENSHOT_BYTES * 2);
        assert_eq!(
            UploadKind::Screenshot.check(&huge_gif),
            Some("Screenshot size must be less than 10MB")
        );
    }

    #[test]
    fn screenshot_is_rejected_in_project_mode() {
        let mut draft = filled();
        draft.upload_kind = UploadKind::Project;
        let errors = draft.validate().unwrap_err();
        assert_eq!(errors.get(Field::File), Some("File must have a .zip extension"));
    }

    #[test]
    fn additional_screenshots_follow_screenshot_rules() {
        let mut draft = filled();
        draft.additional = vec![png(10), FileMeta::new("notes.txt", "text/plain", 10)];
        let errors = draft.validate().unwrap_err();
        assert_eq!(
            errors.get(Field::AdditionalScreenshots),
            Some("notes.txt: File must have a valid extension (.jpg, .jpeg, .png)")
        );

        draft.additional = vec![png(10); MAX_ADDITIONAL_SCREENSHOTS + 1];
        assert!(draft.validate().unwrap_err().has(Field::AdditionalScreenshots));

        draft.additional = vec![png(10); MAX_ADDITIONAL_SCREENSHOTS];
        assert!(draft.validate().is_ok());
        assert_eq!(draft.additional_slots(), 0);
    }

    #[test]
    fn additional_screenshots_rejected_outside_screenshot_mode() {
        let mut draft = filled();
        draft.upload_kind = UploadKind::Project;
        draft.primary = Some(zip(10));
        draft.additional = vec![png(10)];
        let errors = draft.validate().unwrap_err();
        assert!(errors.has(Field::AdditionalScreenshots));
        assert!(!errors.has(Field::File));
    }

    #[test]
    fn switching_kind_drops_selected_files() {
        let mut draft = filled();
        draft.additional = vec![png(1)];

        assert!(!draft.set_upload_kind(UploadKind::Screenshot));
        assert!(draft.primary.is_some());

        assert!(draft.set_upload_kind(UploadKind::Project));
        assert!(draft.primary.is_none());
        assert!(draft.additional.is_empty());
        assert_eq!(draft.lumen_name, "  AI_Explorer_2025 ");
    }

    #[test]
    fn clearing_one_error_leaves_the_rest() {
        let mut errors = SubmissionDraft::default().validate().unwrap_err();
        assert!(errors.clear(Field::LumenName));
        assert!(!errors.clear(Field::LumenName));
        assert!(errors.has(Field::PromptText));
    }

    #[test]
    fn set_text_targets_only_text_fields() {
        let mut draft = SubmissionDraft::default();
        assert!(draft.set_text(Field::AiAgent, "Devin".into()));
        assert!(draft.set_text(Field::RewardAmount, "2.50".into()));
        assert!(!draft.set_text(Field::File, "x".into()));

        assert_eq!(draft.ai_agent, "Devin");
        assert_eq!(draft.reward_amount, "2.50");
    }

    #[test]
    fn upload_kind_field_names() {
        assert_eq!(UploadKind::Screenshot.field_name(), "screenshot");
        assert_eq!(UploadKind::Project.field_name(), "project");
        assert_eq!(UploadKind::Project.to_string(), "project");
    }

    proptest! {
        #[test]
        fn reward_accepted_iff_at_least_minimum(amount in -1000.0f64..1000.0) {
            let raw = format!("{}", amount);
            prop_assert_eq!(parse_reward(&raw).is_some(), amount >= MIN_REWARD);
        }

        #[test]
        fn extension_check_ignores_case(stem in "[a-z]{1,8}", upper in any::<bool>()) {
            let ext = if upper { "PNG" } else { "png" };
            let file = FileMeta::new(format!("{}.{}", stem, ext), "image/png", 1);
            prop_assert_eq!(UploadKind::Screenshot.check(&file), None);
        }
    }
}
