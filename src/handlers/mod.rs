//! Handlers Layer
//!
//! axum handlers that bridge HTTP requests to the item store.

mod asset_handler;
mod form_fields;
mod item_handler;

pub use asset_handler::*;
pub use form_fields::FormFields;
pub use item_handler::*;
