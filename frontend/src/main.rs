mod api;
mod components;
mod config;
mod error;

use std::rc::Rc;

use components::form_page::FormPage;
use components::gallery_page::GalleryPage;
use components::header::{render_footer, render_header, Page};
use shared::config::ApiConfig;
use yew::prelude::*;

enum Msg {
    Navigate(Page),
}

struct App {
    page: Page,
    api: Rc<ApiConfig>,
    on_navigate: Callback<Page>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            page: Page::Form,
            api: Rc::new(config::load_api_config()),
            on_navigate: ctx.link().callback(Msg::Navigate),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(page) => {
                if self.page == page {
                    return false;
                }
                log::info!("Navigating to {:?}", page);
                self.page = page;
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let content = match self.page {
            Page::Form => html! { <FormPage api={self.api.clone()} /> },
            Page::Gallery => html! { <GalleryPage api={self.api.clone()} /> },
        };

        html! {
            <div class="container">
                { render_header(self.page, &self.on_navigate) }
                <main class="main-content">
                    { content }
                </main>
                { render_footer() }
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<App>::new().render();
}
