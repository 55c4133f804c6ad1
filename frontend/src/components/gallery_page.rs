use std::rc::Rc;

use shared::config::{ApiConfig, SEARCH_DEBOUNCE_MS};
use shared::gallery::FetchTicket;
use shared::{GalleryQuery, GalleryState, SortField, Submission, SubmissionId, SubmissionPage, ViewMode};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::details_modal::ProjectDetailsModal;
use super::gallery_controls::render_controls;
use super::results::{render_grid, render_pagination, render_stats, render_table};
use super::utils::{debounce, render_error_message, render_spinner};
use crate::api;
use crate::config;
use crate::error::ApiError;

#[derive(Properties, PartialEq)]
pub struct GalleryPageProps {
    pub api: Rc<ApiConfig>,
}

pub enum Msg {
    Loaded(FetchTicket, Result<SubmissionPage, ApiError>),

    // Query changes
    SearchTyped(String),
    ApplySearch(String),
    SetAiFilter(String),
    SetAgentFilter(String),
    SetPerPage(u32),
    Sort(SortField),
    PrevPage,
    NextPage,

    // View state
    SetViewMode(ViewMode),
    OpenDetails(SubmissionId),
    CloseDetails,
}

pub struct GalleryPage {
    pub(crate) state: GalleryState,
    pub(crate) view_mode: ViewMode,
    pub(crate) search_input: String,
    pub(crate) selected: Option<Submission>,
    apply_search: Callback<String>,
}

impl Component for GalleryPage {
    type Message = Msg;
    type Properties = GalleryPageProps;

    fn create(ctx: &Context<Self>) -> Self {
        // Kept on the component so re-renders don't drop a pending search.
        let apply_search = debounce(SEARCH_DEBOUNCE_MS, ctx.link().callback(Msg::ApplySearch));

        let mut page = Self {
            state: GalleryState::new(GalleryQuery::with_per_page(config::load_per_page())),
            view_mode: config::load_view_mode(),
            search_input: String::new(),
            selected: None,
            apply_search,
        };
        page.fetch(ctx);
        page
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(ticket, result) => self.handle_loaded(ticket, result),

            Msg::SearchTyped(value) => {
                self.search_input = value.clone();
                self.apply_search.emit(value);
                true
            }
            Msg::ApplySearch(value) => {
                let changed = self.state.query.set_search(&value);
                self.refetch_if(ctx, changed)
            }
            Msg::SetAiFilter(value) => {
                let changed = self.state.query.set_ai_filter(&value);
                self.refetch_if(ctx, changed)
            }
            Msg::SetAgentFilter(value) => {
                let changed = self.state.query.set_agent_filter(&value);
                self.refetch_if(ctx, changed)
            }
            Msg::SetPerPage(per_page) => {
                let changed = self.state.query.set_per_page(per_page);
                if changed {
                    config::store_per_page(self.state.query.per_page);
                }
                self.refetch_if(ctx, changed)
            }
            Msg::Sort(field) => {
                let changed = self.state.query.sort(field);
                self.refetch_if(ctx, changed)
            }
            Msg::PrevPage => {
                let changed = self.state.query.prev_page();
                self.refetch_if(ctx, changed)
            }
            Msg::NextPage => {
                let pages = self.state.pages;
                let changed = self.state.query.next_page(pages);
                self.refetch_if(ctx, changed)
            }

            Msg::SetViewMode(mode) => {
                if self.view_mode == mode {
                    return false;
                }
                self.view_mode = mode;
                config::store_view_mode(mode);
                true
            }
            Msg::OpenDetails(id) => {
                self.selected = self.state.submissions.iter().find(|s| s.id == id).cloned();
                self.selected.is_some()
            }
            Msg::CloseDetails => self.selected.take().is_some(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let api = ctx.props().api.clone();

        html! {
            <div class="gallery-page">
                <div class="page-title">
                    <h2>{"Project Gallery"}</h2>
                    <p class="subtitle">{"Explore AI-generated projects from our community"}</p>
                </div>

                { render_stats(&self.state.stats()) }
                { render_controls(self, ctx) }
                { render_error_message(self.state.error.as_deref()) }
                { self.render_listing(ctx) }

                {
                    if let Some(submission) = &self.selected {
                        html! {
                            <ProjectDetailsModal
                                key={submission.id.to_string()}
                                submission={submission.clone()}
                                api={api}
                                on_close={ctx.link().callback(|_| Msg::CloseDetails)}
                            />
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }
}

impl GalleryPage {
    fn fetch(&mut self, ctx: &Context<Self>) {
        let ticket = self.state.begin_fetch();
        let query = self.state.query.clone();
        let api = ctx.props().api.clone();
        let link = ctx.link().clone();

        log::info!("Fetching gallery page: {}", query.to_query_string());
        spawn_local(async move {
            let result = api::fetch_submissions(&api, &query).await;
            link.send_message(Msg::Loaded(ticket, result));
        });
    }

    fn refetch_if(&mut self, ctx: &Context<Self>, changed: bool) -> bool {
        if changed {
            self.fetch(ctx);
        }
        changed
    }

    fn handle_loaded(&mut self, ticket: FetchTicket, result: Result<SubmissionPage, ApiError>) -> bool {
        match result {
            Ok(page) => self.state.finish_ok(ticket, page),
            Err(e) => {
                log::error!("Error fetching submissions: {}", e);
                self.state.finish_err(ticket)
            }
        }
    }

    fn render_listing(&self, ctx: &Context<Self>) -> Html {
        let api = &ctx.props().api;

        if self.state.loading {
            return render_spinner("Loading projects...");
        }

        if self.state.submissions.is_empty() {
            return html! {
                <div class="empty-state">
                    <i class="fa-solid fa-folder-open fa-2x"></i>
                    <h3>{"No projects found"}</h3>
                    <p>{"Try adjusting your search or filter criteria"}</p>
                </div>
            };
        }

        let listing = match self.view_mode {
            ViewMode::Grid => render_grid(&self.state.submissions, api, ctx),
            ViewMode::Table => render_table(&self.state, api, ctx),
        };

        html! {
            <>
                { listing }
                { render_pagination(&self.state, ctx) }
            </>
        }
    }
}
