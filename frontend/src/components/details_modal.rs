use std::rc::Rc;

use gloo_events::EventListener;
use shared::config::ApiConfig;
use shared::format::{format_currency, format_datetime};
use shared::{ArtifactKind, Carousel, Submission};
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProjectDetailsModalProps {
    pub submission: Submission,
    pub api: Rc<ApiConfig>,
    pub on_close: Callback<()>,
}

#[function_component(ProjectDetailsModal)]
pub fn project_details_modal(props: &ProjectDetailsModalProps) -> Html {
    let submission = &props.submission;
    let media: Vec<String> = submission.media().into_iter().map(str::to_string).collect();
    let carousel = use_state(|| Carousel::new(media.len()));

    {
        let carousel = carousel.clone();
        use_effect_with((submission.id, media.len()), move |(_, len)| {
            let mut next = *carousel;
            if next.reset(*len) {
                carousel.set(next);
            }
        });
    }

    {
        let on_close = props.on_close.clone();
        use_effect_with(submission.id, move |_| {
            let listener = web_sys::window().and_then(|window| window.document()).map(|document| {
                EventListener::new(&document, "keydown", move |event| {
                    if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                        if event.key() == "Escape" {
                            on_close.emit(());
                        }
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());

    let step = |forward: bool| {
        let carousel = carousel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let mut next = *carousel;
            let moved = if forward { next.next() } else { next.prev() };
            if moved {
                carousel.set(next);
            }
        })
    };

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div class="modal-content" onclick={stop_propagation}>
                <div class="modal-header">
                    <div>
                        <h2>{ &submission.lumen_name }</h2>
                        <p class="subtitle">
                            { format!("Submitted on {}", format_datetime(submission.timestamp.as_ref())) }
                        </p>
                    </div>
                    <button class="modal-close" title="Close" onclick={on_close_button}>
                        <i class="fa-solid fa-xmark"></i>
                    </button>
                </div>

                <div class="modal-body">
                    { render_media(&media, *carousel, &props.api, step(false), step(true)) }
                    { render_thumbnails(&media, &carousel, &props.api) }
                    { render_metadata(submission) }

                    <div class="modal-section">
                        <h3>{"Prompt"}</h3>
                        <p class="prompt-text">{ &submission.prompt_text }</p>
                    </div>

                    { render_downloads(submission, &props.api) }
                </div>
            </div>
        </div>
    }
}

fn render_media(
    media: &[String],
    carousel: Carousel,
    api: &ApiConfig,
    on_prev: Callback<MouseEvent>,
    on_next: Callback<MouseEvent>,
) -> Html {
    let Some(current) = media.get(carousel.index) else {
        return html! {
            <div class="media-empty">
                <i class="fa-solid fa-image fa-2x"></i>
                <p>{"No files attached"}</p>
            </div>
        };
    };

    let url = api.asset_url(current);
    let body = match ArtifactKind::classify(current) {
        ArtifactKind::Image => html! {
            <img class="media-image" src={url} alt="Project screenshot" />
        },
        ArtifactKind::Project | ArtifactKind::Other => html! {
            <div class="media-download">
                <i class="fa-solid fa-file-zipper fa-3x"></i>
                <p>{"Project Archive"}</p>
                <a class="analyze-btn" href={url} download="" target="_blank" rel="noopener noreferrer">
                    <i class="fa-solid fa-download"></i>{" Download Project"}
                </a>
            </div>
        },
    };

    html! {
        <div class="media-viewer">
            { body }
            {
                if carousel.is_navigable() {
                    html! {
                        <>
                            <button class="carousel-arrow carousel-prev" title="Previous" onclick={on_prev}>
                                <i class="fa-solid fa-chevron-left"></i>
                            </button>
                            <button class="carousel-arrow carousel-next" title="Next" onclick={on_next}>
                                <i class="fa-solid fa-chevron-right"></i>
                            </button>
                            <span class="carousel-counter">{ carousel.counter() }</span>
                        </>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

fn render_thumbnails(media: &[String], carousel: &UseStateHandle<Carousel>, api: &ApiConfig) -> Html {
    if !carousel.is_navigable() {
        return html! {};
    }

    html! {
        <div class="thumbnail-strip">
            { for media.iter().enumerate().map(|(index, path)| {
                let handle = carousel.clone();
                let onclick = Callback::from(move |_: MouseEvent| {
                    let mut next = *handle;
                    if next.select(index) {
                        handle.set(next);
                    }
                });
                let thumb = match ArtifactKind::classify(path) {
                    ArtifactKind::Image => html! { <img src={api.asset_url(path)} alt={format!("Thumbnail {}", index + 1)} /> },
                    _ => html! { <i class="fa-solid fa-file-zipper"></i> },
                };
                html! {
                    <button
                        key={index}
                        class={classes!("thumbnail", (index == carousel.index).then_some("active"))}
                        {onclick}
                    >
                        { thumb }
                    </button>
                }
            })}
        </div>
    }
}

fn render_metadata(submission: &Submission) -> Html {
    let file_type = submission
        .primary_kind()
        .map(|kind| kind.to_string())
        .unwrap_or_else(|| "N/A".to_string());

    let cards = [
        ("fa-solid fa-robot", "AI Model", submission.ai_used.clone()),
        ("fa-solid fa-user-gear", "AI Agent", submission.agent().unwrap_or("N/A").to_string()),
        ("fa-solid fa-dollar-sign", "Reward", format_currency(submission.reward_amount)),
        ("fa-solid fa-file", "File Type", file_type),
    ];

    html! {
        <div class="metadata-grid">
            { for cards.into_iter().map(|(icon, label, value)| html! {
                <div class="metadata-card">
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

fn render_downloads(submission: &Submission, api: &ApiConfig) -> Html {
    let downloads = submission.downloads();
    if downloads.is_empty() {
        return html! {};
    }

    html! {
        <div class="modal-section">
            <h3>{"Download Files"}</h3>
            <div class="download-list">
                { for downloads.into_iter().map(|download| {
                    let icon = match download.kind {
                        ArtifactKind::Image => "fa-solid fa-image",
                        ArtifactKind::Project | ArtifactKind::Other => "fa-solid fa-file-lines",
                    };
                    html! {
                        <div class="download-item" key={download.path.to_string()}>
                            <span><i class={icon}></i>{ format!(" {}", download.label) }</span>
                            <a class="analyze-btn" href={api.asset_url(download.path)} download="">
                                {"Download"}
                            </a>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
