//! Server-rendered pages.
//!
//! Rendering is kept apart from data retrieval: handlers fetch an `Entry`,
//! views turn it into HTML.

mod entry_page;

pub use entry_page::{EntryPageRenderer, LogoImage, ViewError};
