//! Application shell: logging setup plus the controller that rendering
//! surfaces (editor form, live preview, export buttons) program against.

pub mod controller;
pub mod logging;

pub use controller::QuoteApp;
