//! Google Docs Read node — configuration form
//!
//! Structure:
//! - view.rs: GoogleDocsReadForm and its credential field component

mod view;

pub use view::{GoogleDocsReadForm, ServiceAccountJsonField};
