use std::rc::Rc;
use std::str::FromStr;

use gloo_file::{File as GlooFile, ObjectUrl};
use shared::config::ApiConfig;
use shared::{AiModel, Field, FieldErrors, SubmissionDraft, SubmitResponse, UploadKind};
use strum::IntoEnumIterator;
use web_sys::{DragEvent, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::handlers;
use super::preview_area::render_additional_screenshots;
use super::upload_section::render_upload_section;
use super::utils::{render_error_message, render_field_error, render_success_message};
use crate::error::ApiError;

#[derive(Clone)]
pub struct ScreenshotData {
    pub id: u64,
    pub file: GlooFile,
    pub preview_url: Option<ObjectUrl>,
}

#[derive(Properties, PartialEq)]
pub struct FormPageProps {
    pub api: Rc<ApiConfig>,
}

pub enum Msg {
    // Text and select inputs
    UpdateText(Field, String),
    SetAiModel(AiModel),

    // File operations
    SetUploadKind(UploadKind),
    PrimarySelected(GlooFile),
    ScreenshotsAdded(Vec<GlooFile>),
    AddPreview(u64, ObjectUrl),
    RemoveScreenshot(u64),

    // Drag and drop
    SetDragging(bool),
    HandleDrop(DragEvent),

    // Submission
    Submit,
    Submitted(Result<SubmitResponse, ApiError>),
}

pub struct FormPage {
    pub(crate) draft: SubmissionDraft,
    pub(crate) primary_file: Option<GlooFile>,
    pub(crate) screenshots: Vec<ScreenshotData>,
    pub(crate) errors: FieldErrors,
    pub(crate) success: Option<String>,
    pub(crate) loading: bool,
    pub(crate) is_dragging: bool,
}

impl Component for FormPage {
    type Message = Msg;
    type Properties = FormPageProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            draft: SubmissionDraft::default(),
            primary_file: None,
            screenshots: Vec::new(),
            errors: FieldErrors::new(),
            success: None,
            loading: false,
            is_dragging: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateText(field, value) => handlers::handle_update_text(self, field, value),
            Msg::SetAiModel(model) => {
                self.draft.ai_used = model;
                true
            }

            Msg::SetUploadKind(kind) => handlers::handle_set_upload_kind(self, kind),
            Msg::PrimarySelected(file) => handlers::handle_primary_selected(self, file),
            Msg::ScreenshotsAdded(files) => handlers::handle_screenshots_added(self, ctx, files),
            Msg::AddPreview(id, url) => handlers::handle_add_preview(self, id, url),
            Msg::RemoveScreenshot(id) => handlers::handle_remove_screenshot(self, id),

            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),

            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::Submitted(result) => handlers::handle_submitted(self, result),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="form-page">
                <div class="page-title">
                    <h2>{"Project Submission"}</h2>
                    <p class="subtitle">{"Share your AI-generated projects with the community"}</p>
                </div>

                { render_success_message(self.success.as_deref()) }
                { render_error_message(self.errors.get(Field::Form)) }

                <form class="submission-form" onsubmit={onsubmit} novalidate={true}>
                    <div class="form-grid">
                        { self.render_text_input(
                            ctx,
                            Field::LumenName,
                            "Lumen Name",
                            "Enter your unique identifier or username",
                            "e.g., AI_Explorer_2025",
                        ) }
                        { self.render_reward_input(ctx) }
                    </div>

                    { render_upload_section(self, ctx) }
                    { render_additional_screenshots(self, ctx) }

                    <div class="form-grid">
                        { self.render_ai_select(ctx) }
                        { self.render_text_input(
                            ctx,
                            Field::AiAgent,
                            "AI Agent",
                            "Which agent or tool drove the model",
                            "e.g., Cursor, Devin, Aider",
                        ) }
                    </div>

                    { self.render_prompt_input(ctx) }

                    <div class="button-container">
                        <button type="submit" class="analyze-btn submit-btn" disabled={self.loading}>
                            { if self.loading {
                                html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Submitting..."}</> }
                            } else {
                                html! { <><i class="fa-solid fa-paper-plane"></i>{" Submit Project"}</> }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        }
    }
}

// Rendering methods
impl FormPage {
    fn field_value(&self, field: Field) -> String {
        match field {
            Field::LumenName => self.draft.lumen_name.clone(),
            Field::PromptText => self.draft.prompt_text.clone(),
            Field::AiAgent => self.draft.ai_agent.clone(),
            Field::RewardAmount => self.draft.reward_amount.clone(),
            Field::File | Field::AdditionalScreenshots | Field::Form => String::new(),
        }
    }

    fn render_label(&self, field: Field, label: &str, hint: &str) -> Html {
        html! {
            <>
                <label for={field.to_string()}>
                    { label.to_string() }<span class="required">{" *"}</span>
                </label>
                <p class="field-hint">{ hint.to_string() }</p>
            </>
        }
    }

    fn render_text_input(
        &self,
        ctx: &Context<Self>,
        field: Field,
        label: &str,
        hint: &str,
        placeholder: &str,
    ) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateText(field, input.value())
        });

        html! {
            <div class="form-field">
                { self.render_label(field, label, hint) }
                <input
                    type="text"
                    id={field.to_string()}
                    name={field.to_string()}
                    class={classes!("text-input", self.errors.has(field).then_some("invalid"))}
                    value={self.field_value(field)}
                    placeholder={placeholder.to_string()}
                    {oninput}
                />
                { render_field_error(self.errors.get(field)) }
            </div>
        }
    }

    fn render_reward_input(&self, ctx: &Context<Self>) -> Html {
        let field = Field::RewardAmount;
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::UpdateText(field, input.value())
        });

        html! {
            <div class="form-field">
                { self.render_label(
                    field,
                    "Reward Amount",
                    "Enter the reward amount for this submission (minimum $0.01)",
                ) }
                <div class="currency-input">
                    <span class="currency-prefix">{"$"}</span>
                    <input
                        type="number"
                        id={field.to_string()}
                        name={field.to_string()}
                        step="0.01"
                        min="0.01"
                        class={classes!("text-input", self.errors.has(field).then_some("invalid"))}
                        value={self.draft.reward_amount.clone()}
                        placeholder="0.00"
                        {oninput}
                    />
                    <span class="currency-suffix">{"USD"}</span>
                </div>
                { render_field_error(self.errors.get(field)) }
            </div>
        }
    }

    fn render_ai_select(&self, ctx: &Context<Self>) -> Html {
        let onchange = ctx.link().callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            Msg::SetAiModel(AiModel::from_str(&select.value()).unwrap_or_default())
        });

        html! {
            <div class="form-field">
                <label for="ai_used">{"AI Used"}<span class="required">{" *"}</span></label>
                <p class="field-hint">{"Select the AI model that generated this project"}</p>
                <select id="ai_used" name="ai_used" class="select-input" {onchange}>
                    { for AiModel::iter().map(|model| html! {
                        <option value={model.to_string()} selected={model == self.draft.ai_used}>
                            { model.to_string() }
                        </option>
                    })}
                </select>
            </div>
        }
    }

    fn render_prompt_input(&self, ctx: &Context<Self>) -> Html {
        let field = Field::PromptText;
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            Msg::UpdateText(field, area.value())
        });

        html! {
            <div class="form-field">
                { self.render_label(field, "Prompt Text", "Paste the prompt that produced this project") }
                <textarea
                    id={field.to_string()}
                    name={field.to_string()}
                    rows="6"
                    class={classes!("text-input", self.errors.has(field).then_some("invalid"))}
                    value={self.draft.prompt_text.clone()}
                    placeholder="Describe what you asked the AI to build..."
                    {oninput}
                />
                { render_field_error(self.errors.get(field)) }
            </div>
        }
    }
}
