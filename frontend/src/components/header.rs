use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Form,
    Gallery,
}

impl Page {
    fn label(self) -> &'static str {
        match self {
            Page::Form => " Submit Project",
            Page::Gallery => " View All Projects",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Page::Form => "fa-solid fa-plus",
            Page::Gallery => "fa-solid fa-table-cells-large",
        }
    }
}

/// Renders the application header with page navigation
pub fn render_header(current: Page, on_navigate: &Callback<Page>) -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-file-lines"></i> {" Project Completion Tracker"}</h1>
            <nav class="app-nav">
                { for [Page::Form, Page::Gallery].into_iter().map(|page| {
                    let on_navigate = on_navigate.clone();
                    html! {
                        <button
                            class={classes!("nav-btn", (page == current).then_some("active"))}
                            onclick={Callback::from(move |_| on_navigate.emit(page))}
                        >
                            <i class={page.icon()}></i>{ page.label() }
                        </button>
                    }
                })}
            </nav>
        </header>
    }
}

pub fn render_footer() -> Html {
    html! {
        <footer class="app-footer">
            <p>{"© 2025 Project Completion Tracker. All rights reserved."}</p>
        </footer>
    }
}
