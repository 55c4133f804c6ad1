use super::form_page::{FormPage, Msg, ScreenshotData};
use super::utils::{click_element, debounce, extract_files, render_field_error};
use shared::format::truncate_name;
use shared::validation::MAX_ADDITIONAL_SCREENSHOTS;
use shared::{Field, UploadKind};
use web_sys::HtmlInputElement;
use yew::prelude::*;

const ADDITIONAL_INPUT_ID: &str = "additional-file-input";

pub fn render_additional_screenshots(model: &FormPage, ctx: &Context<FormPage>) -> Html {
    if model.draft.upload_kind != UploadKind::Screenshot {
        return html! {};
    }

    let link = ctx.link();
    let limit_reached = model.draft.additional_slots() == 0;

    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let files = input.files().as_ref().map(extract_files).unwrap_or_default();

        input.set_value("");

        (!files.is_empty()).then(|| Msg::ScreenshotsAdded(files))
    });

    let trigger_file_input = debounce(300, Callback::from(|_: ()| click_element(ADDITIONAL_INPUT_ID)));

    html! {
        <div id="preview-container" class="additional-screenshots">
            <label>{"Additional Screenshots"}</label>
            <p class="field-hint">
                { format!("Optional. Up to {} more PNG or JPG images of your project.", MAX_ADDITIONAL_SCREENSHOTS) }
            </p>

            <input
                type="file"
                id={ADDITIONAL_INPUT_ID}
                multiple=true
                accept={UploadKind::Screenshot.accept()}
                style="display: none;"
                onchange={handle_change}
            />

            {
                if limit_reached {
                    html! {
                        <p class="limit-reached">
                            { format!("You have reached the maximum of {} additional screenshots.", MAX_ADDITIONAL_SCREENSHOTS) }
                        </p>
                    }
                } else {
                    html! {
                        <button
                            type="button"
                            id="add-screenshots-button"
                            class="analyze-btn"
                            onclick={trigger_file_input.reform(|_: MouseEvent| ())}
                        >
                            <i class="fa-solid fa-upload"></i>{" Add Screenshots"}
                        </button>
                    }
                }
            }

            {
                if model.screenshots.is_empty() {
                    html! {}
                } else {
                    html! {
                        <>
                            <h3>{ format!("Previews: {} / {}", model.screenshots.len(), MAX_ADDITIONAL_SCREENSHOTS) }</h3>
                            <div id="image-previews">
                                { for model.screenshots.iter().map(|screenshot| render_preview_item(ctx, screenshot)) }
                            </div>
                        </>
                    }
                }
            }

            { render_field_error(model.errors.get(Field::AdditionalScreenshots)) }
        </div>
    }
}

fn render_preview_item(ctx: &Context<FormPage>, screenshot: &ScreenshotData) -> Html {
    let screenshot_id = screenshot.id;
    let link = ctx.link();
    let name = screenshot.file.name();

    html! {
        <div class="preview-item" key={screenshot_id.to_string()} title={name.clone()}>
            {
                if let Some(url) = &screenshot.preview_url {
                    html! { <img src={url.to_string()} alt={name.clone()} /> }
                } else {
                    html! { <div class="preview-placeholder preview-placeholder-centered">{"..."}</div> }
                }
            }
            <p class="preview-name">{ truncate_name(&name, 20) }</p>
            <button
                type="button"
                class="remove-btn"
                title="Remove this screenshot"
                onclick={link.callback(move |e: MouseEvent| {
                    e.stop_propagation();
                    Msg::RemoveScreenshot(screenshot_id)
                })}
            >
                <i class="fa-solid fa-times" style="font-size: 10px;"></i>
            </button>
        </div>
    }
}
