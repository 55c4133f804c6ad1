use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use js_sys::Date;
use shared::FileMeta;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use wasm_bindgen::JsCast;
use web_sys::FileList;
use yew::prelude::*;

pub fn generate_id() -> u64 {
    static ID_COUNTER: AtomicU64 = AtomicU64::new(0);
    let now = Date::now() as u64;
    let count = ID_COUNTER.fetch_add(1, Ordering::SeqCst);
    now * 1000 + (count % 1000)
}

// Emits only the last value received within `duration` milliseconds.
pub fn debounce<IN: 'static>(duration: u32, callback: Callback<IN>) -> Callback<IN> {
    let timeout = Rc::new(RefCell::new(None::<Timeout>));

    Callback::from(move |value: IN| {
        let mut timeout_ref = timeout.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration, move || {
            inner_callback.emit(value);
        });

        *timeout_ref = Some(new_timeout);
    })
}

pub fn file_meta(file: &GlooFile) -> FileMeta {
    FileMeta::new(file.name(), file.raw_mime_type(), file.size())
}

pub fn extract_files(file_list: &FileList) -> Vec<GlooFile> {
    (0..file_list.length())
        .filter_map(|i| file_list.item(i))
        .map(GlooFile::from)
        .collect()
}

pub fn first_file(file_list: &FileList) -> Option<GlooFile> {
    file_list.item(0).map(GlooFile::from)
}

/// Opens the native picker behind a hidden file input.
pub fn click_element(id: &str) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));

    if let Some(element) = element {
        if let Ok(html_element) = element.dyn_into::<web_sys::HtmlElement>() {
            html_element.click();
        }
    }
}

pub fn render_error_message(error: Option<&str>) -> Html {
    if let Some(error_msg) = error {
        html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ error_msg }</p>
            </div>
        }
    } else {
        html! {}
    }
}

pub fn render_success_message(message: Option<&str>) -> Html {
    match message {
        Some(message) => html! {
            <div class="success-message">
                <i class="fa-solid fa-circle-check"></i>
                <p>{ message }</p>
            </div>
        },
        None => html! {},
    }
}

pub fn render_field_error(error: Option<&str>) -> Html {
    match error {
        Some(message) => html! { <p class="field-error">{ message }</p> },
        None => html! {},
    }
}

pub fn render_spinner(label: &str) -> Html {
    html! {
        <div class="loading-state">
            <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
            <p>{ label.to_string() }</p>
        </div>
    }
}
