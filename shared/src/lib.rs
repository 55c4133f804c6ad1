pub mod config;
pub mod format;
pub mod gallery;
pub mod submission;
pub mod validation;

pub use gallery::{Carousel, GalleryQuery, GalleryState, GalleryStats, SortField, SortOrder, ViewMode};
pub use submission::{
    AiModel, ArtifactKind, Download, ErrorBody, Pagination, Submission, SubmissionId, SubmissionPage,
    SubmitResponse,
};
pub use validation::{Field, FieldErrors, FileMeta, SubmissionDraft, UploadKind, ValidSubmission};
