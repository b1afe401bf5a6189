pub mod error_popup;

pub use error_popup::render_error_popup;
