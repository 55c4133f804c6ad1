use std::cell::Cell;
use std::rc::Rc;

use gloo_file::File as GlooFile;
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::callback::Timeout;
use serde::de::DeserializeOwned;
use shared::config::{ApiConfig, LIST_TIMEOUT_MS, SUBMIT_TIMEOUT_MS};
use shared::{ErrorBody, GalleryQuery, SubmissionPage, SubmitResponse, ValidSubmission};
use web_sys::{AbortController, FormData};

use crate::error::ApiError;

/// Aborts the attached request once the timer fires. Dropping it cancels
/// the timer.
struct Deadline {
    controller: AbortController,
    expired: Rc<Cell<bool>>,
    _timer: Timeout,
}

impl Deadline {
    fn new(millis: u32) -> Result<Self, ApiError> {
        let controller = AbortController::new()?;
        let expired = Rc::new(Cell::new(false));

        let timer = {
            let controller = controller.clone();
            let expired = expired.clone();
            Timeout::new(millis, move || {
                expired.set(true);
                controller.abort();
            })
        };

        Ok(Self {
            controller,
            expired,
            _timer: timer,
        })
    }

    fn attach(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.abort_signal(Some(&self.controller.signal()))
    }

    async fn send(&self, request: Request) -> Result<Response, ApiError> {
        request.send().await.map_err(|e| {
            if self.expired.get() {
                ApiError::Timeout
            } else {
                gloo_console::error!(format!("Fetch error: {:?}", e));
                ApiError::Network(e.to_string())
            }
        })
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()));
    }

    let status = response.status();
    let status_text = response.status_text();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|body| body.error)
        .unwrap_or(status_text);

    log::error!("Request failed with status {}: {}", status, message);
    Err(ApiError::Server { status, message })
}

fn build_form_data(
    submission: &ValidSubmission,
    primary: &GlooFile,
    additional: &[GlooFile],
) -> Result<FormData, ApiError> {
    let form_data = FormData::new()?;
    for (name, value) in submission.text_fields() {
        form_data.append_with_str(name, &value)?;
    }
    form_data.append_with_blob_and_filename(
        submission.upload_kind.field_name(),
        primary.as_ref(),
        &primary.name(),
    )?;
    for file in additional {
        form_data.append_with_blob_and_filename("additional_screenshots", file.as_ref(), &file.name())?;
    }
    Ok(form_data)
}

/// Posts a validated submission as multipart form data.
pub async fn submit(
    config: &ApiConfig,
    submission: &ValidSubmission,
    primary: &GlooFile,
    additional: &[GlooFile],
) -> Result<SubmitResponse, ApiError> {
    let form_data = build_form_data(submission, primary, additional)?;
    let deadline = Deadline::new(SUBMIT_TIMEOUT_MS)?;

    let request = deadline
        .attach(Request::post(&config.submit_url()))
        .body(form_data)
        .map_err(|e| ApiError::Request(e.to_string()))?;

    log::info!(
        "Submitting {} with {} additional screenshot(s)",
        submission.upload_kind,
        additional.len()
    );
    let response = deadline.send(request).await?;
    read_json(response).await
}

/// Fetches one page of the public gallery.
pub async fn fetch_submissions(
    config: &ApiConfig,
    query: &GalleryQuery,
) -> Result<SubmissionPage, ApiError> {
    let deadline = Deadline::new(LIST_TIMEOUT_MS)?;
    let request = deadline
        .attach(Request::get(&config.submissions_url(query)))
        .build()
        .map_err(|e| ApiError::Request(e.to_string()))?;

    let response = deadline.send(request).await?;
    read_json(response).await
}
