use super::form_page::{FormPage, Msg};
use super::utils::{click_element, debounce, first_file, render_field_error};
use shared::format::{format_file_size, truncate_name};
use shared::{Field, UploadKind};
use strum::IntoEnumIterator;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

const PRIMARY_INPUT_ID: &str = "primary-file-input";

pub fn render_upload_section(model: &FormPage, ctx: &Context<FormPage>) -> Html {
    html! {
        <div class="upload-section">
            <label>{"Upload Type"}<span class="required">{" *"}</span></label>
            <p class="field-hint">{"Choose between uploading a screenshot or a complete project folder"}</p>
            { render_kind_toggle(model, ctx) }
            { render_file_input_area(model, ctx) }
            { render_field_error(model.errors.get(Field::File)) }
        </div>
    }
}

fn render_kind_toggle(model: &FormPage, ctx: &Context<FormPage>) -> Html {
    let link = ctx.link();

    html! {
        <div class="upload-kind-toggle">
            { for UploadKind::iter().map(|kind| {
                let selected = model.draft.upload_kind == kind;
                let icon = match kind {
                    UploadKind::Screenshot => "fa-solid fa-image",
                    UploadKind::Project => "fa-solid fa-file-zipper",
                };
                html! {
                    <button
                        type="button"
                        class={classes!("kind-btn", selected.then_some("selected"))}
                        onclick={link.callback(move |_| Msg::SetUploadKind(kind))}
                    >
                        <i class={icon}></i>{ format!(" {}", kind.label()) }
                    </button>
                }
            })}
        </div>
    }
}

fn render_file_input_area(model: &FormPage, ctx: &Context<FormPage>) -> Html {
    let link = ctx.link();
    let kind = model.draft.upload_kind;

    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let selected = input.files().as_ref().and_then(first_file);

        input.set_value("");

        selected.map(Msg::PrimarySelected)
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);
    let trigger_file_input = debounce(300, Callback::from(|_: ()| click_element(PRIMARY_INPUT_ID)));

    html! {
        <>
            <input
                type="file"
                id={PRIMARY_INPUT_ID}
                accept={kind.accept()}
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={trigger_file_input.reform(|_: MouseEvent| ())}
            >
                { render_selected_file(model) }
            </div>
        </>
    }
}

fn render_selected_file(model: &FormPage) -> Html {
    let kind = model.draft.upload_kind;

    match &model.draft.primary {
        Some(file) => html! {
            <div class="selected-file">
                <i class={if kind == UploadKind::Screenshot { "fa-solid fa-image" } else { "fa-solid fa-file-zipper" }}></i>
                <p title={file.name.clone()}>{ truncate_name(&file.name, 40) }</p>
                <p class="file-types">{ format_file_size(file.size) }{" · click or drop to replace"}</p>
            </div>
        },
        None => html! {
            <div class="upload-placeholder">
                <i class="fa-solid fa-cloud-arrow-up"></i>
                <p>{ format!("Drag & drop your {} here, or click to browse", kind.field_name()) }</p>
                <p class="file-types">{ kind.hint() }</p>
            </div>
        },
    }
}
