use super::gallery_page::{GalleryPage, Msg};
use shared::gallery::PER_PAGE_OPTIONS;
use shared::{SortField, ViewMode};
use std::str::FromStr;
use strum::IntoEnumIterator;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

fn select_value(e: &Event) -> String {
    let select: HtmlSelectElement = e.target_unchecked_into();
    select.value()
}

/// Search box, filters, page size, sort field and view toggle.
pub fn render_controls(model: &GalleryPage, ctx: &Context<GalleryPage>) -> Html {
    let link = ctx.link();
    let query = &model.state.query;

    let on_search = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SearchTyped(input.value())
    });
    let on_ai_filter = link.callback(|e: Event| Msg::SetAiFilter(select_value(&e)));
    let on_agent_filter = link.callback(|e: Event| Msg::SetAgentFilter(select_value(&e)));
    let on_per_page = link.batch_callback(|e: Event| select_value(&e).parse::<u32>().ok().map(Msg::SetPerPage));
    let on_sort = link.batch_callback(|e: Event| SortField::from_str(&select_value(&e)).ok().map(Msg::Sort));
    let active_field = query.sort_by;
    let on_toggle_order = link.callback(move |_: MouseEvent| Msg::Sort(active_field));

    let active_ai = query.ai_used.clone().unwrap_or_default();
    let active_agent = query.ai_agent.clone().unwrap_or_default();

    html! {
        <div class="gallery-controls">
            <div class="filter-grid">
                <div class="filter-field filter-search">
                    <label for="search">{"Search Projects"}</label>
                    <input
                        type="text"
                        id="search"
                        class="text-input"
                        placeholder="Search by Lumen Name, AI, or Agent..."
                        value={model.search_input.clone()}
                        oninput={on_search}
                    />
                </div>

                <div class="filter-field">
                    <label for="ai-filter">{"AI Model"}</label>
                    <select id="ai-filter" class="select-input" onchange={on_ai_filter}>
                        <option value="" selected={active_ai.is_empty()}>{"All AI Models"}</option>
                        { for model.state.ai_options().into_iter().map(|ai| html! {
                            <option value={ai.clone()} selected={ai == active_ai}>{ ai.clone() }</option>
                        })}
                    </select>
                </div>

                <div class="filter-field">
                    <label for="agent-filter">{"AI Agent"}</label>
                    <select id="agent-filter" class="select-input" onchange={on_agent_filter}>
                        <option value="" selected={active_agent.is_empty()}>{"All Agents"}</option>
                        { for model.state.agent_options().into_iter().map(|agent| html! {
                            <option value={agent.clone()} selected={agent == active_agent}>{ agent.clone() }</option>
                        })}
                    </select>
                </div>

                <div class="filter-field">
                    <label for="per-page">{"Items per page"}</label>
                    <select id="per-page" class="select-input" onchange={on_per_page}>
                        { for PER_PAGE_OPTIONS.iter().map(|size| html! {
                            <option value={size.to_string()} selected={*size == query.per_page}>{ size }</option>
                        })}
                    </select>
                </div>
            </div>

            <div class="sort-row">
                <div class="sort-field">
                    <span>{"Sort by: "}</span>
                    <select class="select-input" onchange={on_sort}>
                        { for SortField::iter().map(|field| html! {
                            <option value={field.to_string()} selected={field == query.sort_by}>
                                { field.label() }
                            </option>
                        })}
                    </select>
                    <button
                        class="link-btn"
                        title="Toggle sort direction"
                        onclick={on_toggle_order}
                    >
                        { query.sort_indicator(query.sort_by) }
                    </button>
                </div>

                <div class="view-toggle">
                    { render_view_button(model, ctx, ViewMode::Grid, "fa-solid fa-table-cells-large", "Grid view") }
                    { render_view_button(model, ctx, ViewMode::Table, "fa-solid fa-list", "Table view") }
                </div>
            </div>
        </div>
    }
}

fn render_view_button(model: &GalleryPage, ctx: &Context<GalleryPage>, mode: ViewMode, icon: &str, title: &str) -> Html {
    html! {
        <button
            class={classes!("view-btn", (model.view_mode == mode).then_some("active"))}
            title={title.to_string()}
            onclick={ctx.link().callback(move |_| Msg::SetViewMode(mode))}
        >
            <i class={icon.to_string()}></i>
        </button>
    }
}
