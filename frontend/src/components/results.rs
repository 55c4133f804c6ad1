use super::gallery_page::{GalleryPage, Msg};
use shared::config::ApiConfig;
use shared::format::{format_currency, format_date};
use shared::{GalleryState, GalleryStats, SortField, Submission};
use yew::prelude::*;

pub fn render_stats(stats: &GalleryStats) -> Html {
    let cards = [
        ("stat-card stat-total", "fa-solid fa-layer-group", "Total Submissions", stats.total_submissions.to_string()),
        ("stat-card stat-reward", "fa-solid fa-dollar-sign", "Avg. Reward", format_currency(stats.average_reward)),
        ("stat-card stat-ai", "fa-solid fa-robot", "Top AI", stats.top_ai.clone()),
    ];

    html! {
        <div class="stats-grid">
            { for cards.into_iter().map(|(class, icon, label, value)| html! {
                <div class={class}>
                    <i class={icon}></i>
                    <div>
                        <p class="stat-label">{ label }</p>
                        <p class="stat-value">{ value }</p>
                    </div>
                </div>
            })}
        </div>
    }
}

fn render_artifact_link(submission: &Submission, api: &ApiConfig) -> Html {
    match (&submission.screenshot_path, submission.primary_kind()) {
        (Some(path), Some(kind)) => html! {
            <a class="artifact-link" href={api.asset_url(path)} target="_blank" rel="noopener noreferrer">
                { kind.to_string() }
            </a>
        },
        _ => html! { <span class="muted">{"N/A"}</span> },
    }
}

pub fn render_grid(submissions: &[Submission], api: &ApiConfig, ctx: &Context<GalleryPage>) -> Html {
    let link = ctx.link();

    html! {
        <div class="submission-grid">
            { for submissions.iter().map(|submission| {
                let id = submission.id;
                html! {
                    <div class="submission-card" key={id.to_string()}>
                        <div class="card-header">
                            <h3 class="card-title">{ &submission.lumen_name }</h3>
                            <span class="badge">{ &submission.ai_used }</span>
                        </div>
                        <div class="card-meta">
                            <div>
                                <p class="card-reward">{ format_currency(submission.reward_amount) }</p>
                                <p class="card-date">{ format_date(submission.timestamp.as_ref()) }</p>
                            </div>
                            { render_artifact_link(submission, api) }
                        </div>
                        {
                            match submission.agent() {
                                Some(agent) => html! {
                                    <div class="card-agent">
                                        <span class="badge badge-agent">{ format!("Agent: {}", agent) }</span>
                                    </div>
                                },
                                None => html! {},
                            }
                        }
                        <p class="card-prompt">{ &submission.prompt_text }</p>
                        <button class="analyze-btn" onclick={link.callback(move |_| Msg::OpenDetails(id))}>
                            {"View Details"}
                        </button>
                    </div>
                }
            })}
        </div>
    }
}

fn render_sortable_header(state: &GalleryState, ctx: &Context<GalleryPage>, field: SortField, label: &str) -> Html {
    html! {
        <th class="sortable" onclick={ctx.link().callback(move |_| Msg::Sort(field))}>
            { label.to_string() }
            <span class="sort-indicator">{ state.query.sort_indicator(field) }</span>
        </th>
    }
}

pub fn render_table(state: &GalleryState, api: &ApiConfig, ctx: &Context<GalleryPage>) -> Html {
    let link = ctx.link();

    html! {
        <div class="table-container">
            <table class="submission-table">
                <thead>
                    <tr>
                        { render_sortable_header(state, ctx, SortField::LumenName, "Lumen Name") }
                        { render_sortable_header(state, ctx, SortField::AiUsed, "AI Model") }
                        <th>{"AI Agent"}</th>
                        { render_sortable_header(state, ctx, SortField::RewardAmount, "Reward") }
                        { render_sortable_header(state, ctx, SortField::Timestamp, "Date") }
                        <th>{"File"}</th>
                        <th>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for state.submissions.iter().map(|submission| {
                        let id = submission.id;
                        html! {
                            <tr key={id.to_string()}>
                                <td class="cell-name">{ &submission.lumen_name }</td>
                                <td><span class="badge">{ &submission.ai_used }</span></td>
                                <td>{ submission.agent().unwrap_or("N/A").to_string() }</td>
                                <td class="cell-reward">{ format_currency(submission.reward_amount) }</td>
                                <td>{ format_date(submission.timestamp.as_ref()) }</td>
                                <td>{ render_artifact_link(submission, api) }</td>
                                <td>
                                    <button class="link-btn" onclick={link.callback(move |_| Msg::OpenDetails(id))}>
                                        {"Details"}
                                    </button>
                                </td>
                            </tr>
                        }
                    })}
                </tbody>
            </table>
        </div>
    }
}

pub fn render_pagination(state: &GalleryState, ctx: &Context<GalleryPage>) -> Html {
    if state.pages <= 1 {
        return html! {};
    }

    let link = ctx.link();

    html! {
        <div class="pagination">
            <p>{ format!("Page {} of {}", state.query.page, state.pages) }</p>
            <div class="button-container">
                <button
                    class="analyze-btn"
                    onclick={link.callback(|_| Msg::PrevPage)}
                    disabled={!state.has_previous()}
                >
                    <i class="fa-solid fa-chevron-left"></i>{" Previous"}
                </button>
                <button
                    class="analyze-btn"
                    onclick={link.callback(|_| Msg::NextPage)}
                    disabled={!state.has_next()}
                >
                    {"Next "}<i class="fa-solid fa-chevron-right"></i>
                </button>
            </div>
        </div>
    }
}
