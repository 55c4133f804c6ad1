use yew::prelude::*;
use super::form_page::{FormPage, Msg, ScreenshotData};
use crate::api;
use crate::components::utils::{file_meta, first_file, generate_id};
use crate::error::ApiError;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{Field, SubmitResponse, UploadKind};
use wasm_bindgen_futures::spawn_local;
use web_sys::DragEvent;

pub fn handle_update_text(model: &mut FormPage, field: Field, value: String) -> bool {
    if model.draft.set_text(field, value) {
        model.errors.clear(field);
        true
    } else {
        false
    }
}

pub fn handle_set_upload_kind(model: &mut FormPage, kind: UploadKind) -> bool {
    if !model.draft.set_upload_kind(kind) {
        return false;
    }

    model.primary_file = None;
    model.screenshots.clear();
    model.errors.clear(Field::File);
    model.errors.clear(Field::AdditionalScreenshots);
    true
}

pub fn handle_primary_selected(model: &mut FormPage, file: GlooFile) -> bool {
    log::info!("Selected {} ({} bytes)", file.name(), file.size());
    model.draft.primary = Some(file_meta(&file));
    model.primary_file = Some(file);
    model.errors.clear(Field::File);
    model.success = None;
    true
}

pub fn handle_screenshots_added(model: &mut FormPage, ctx: &Context<FormPage>, files: Vec<GlooFile>) -> bool {
    if model.draft.upload_kind != UploadKind::Screenshot {
        return false;
    }

    let available_slots = model.draft.additional_slots();
    if files.len() > available_slots {
        model.errors.insert(
            Field::AdditionalScreenshots,
            format!("Upload limit exceeded. You can only add {} more screenshots.", available_slots),
        );
        return true;
    }

    model.errors.clear(Field::AdditionalScreenshots);

    for file in files.into_iter() {
        let meta = file_meta(&file);
        if let Some(reason) = UploadKind::Screenshot.check(&meta) {
            log::warn!("Skipping additional screenshot {}: {}", meta.name, reason);
            model.errors.insert(Field::AdditionalScreenshots, format!("{}: {}", meta.name, reason));
            continue;
        }

        let id = generate_id();
        model.screenshots.push(ScreenshotData {
            id,
            file: file.clone(),
            preview_url: None,
        });
        model.draft.additional.push(meta);

        let preview_url = ObjectUrl::from(file);
        ctx.link().send_message(Msg::AddPreview(id, preview_url));
    }

    true
}

pub fn handle_add_preview(model: &mut FormPage, id: u64, url: ObjectUrl) -> bool {
    if let Some(screenshot) = model.screenshots.iter_mut().find(|s| s.id == id) {
        screenshot.preview_url = Some(url);
        true
    } else {
        false
    }
}

pub fn handle_remove_screenshot(model: &mut FormPage, id: u64) -> bool {
    let Some(index) = model.screenshots.iter().position(|s| s.id == id) else {
        return false;
    };

    model.screenshots.remove(index);
    model.draft.additional.remove(index);

    if model.screenshots.is_empty() {
        model.errors.clear(Field::AdditionalScreenshots);
    }
    true
}

pub fn handle_drop(model: &mut FormPage, ctx: &Context<FormPage>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    let dropped = event
        .data_transfer()
        .and_then(|data_transfer| data_transfer.files())
        .and_then(|file_list| first_file(&file_list));

    match dropped {
        Some(file) => ctx.link().send_message(Msg::PrimarySelected(file)),
        None => log::warn!("Drop event carried no files"),
    }

    true
}

pub fn handle_submit(model: &mut FormPage, ctx: &Context<FormPage>) -> bool {
    if model.loading {
        return false;
    }

    model.success = None;
    let valid = match model.draft.validate() {
        Ok(valid) => valid,
        Err(errors) => {
            log::warn!("Submission blocked by {} validation error(s)", errors.len());
            model.errors = errors;
            return true;
        }
    };

    let Some(primary) = model.primary_file.clone() else {
        model.errors.insert(Field::File, "File is required");
        return true;
    };

    model.errors.clear(Field::Form);
    model.loading = true;

    let additional: Vec<GlooFile> = model.screenshots.iter().map(|s| s.file.clone()).collect();
    let api = ctx.props().api.clone();
    let link = ctx.link().clone();

    spawn_local(async move {
        let result = api::submit(&api, &valid, &primary, &additional).await;
        link.send_message(Msg::Submitted(result));
    });

    true
}

pub fn handle_submitted(model: &mut FormPage, result: Result<SubmitResponse, ApiError>) -> bool {
    model.loading = false;

    match result {
        Ok(response) => {
            log::info!("Submission accepted: {:?}", response.submission_id);
            model.screenshots.clear();
            model.primary_file = None;
            model.draft.reset();
            model.errors = Default::default();
            model.success = Some(response.message);
        }
        Err(e) => {
            log::error!("Submission failed: {}", e);
            model.errors.insert(Field::Form, e.to_string());
        }
    }

    true
}
