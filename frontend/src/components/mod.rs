pub mod details_modal;
pub mod form_page;
pub mod gallery_controls;
pub mod gallery_page;
pub mod handlers;
pub mod header;
pub mod preview_area;
pub mod results;
pub mod upload_section;
pub mod utils;
