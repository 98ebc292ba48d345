//! Item Handlers
//!
//! Page rendering plus the two form posts. Add and toggle always redirect
//! back to the list; bad input is a silent no-op.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;
use todo_core::{Item, Repository};
use tracing::{debug, error, info};

use super::form_fields::FormFields;
use crate::view;
use crate::AppState;

/// Render the list
pub async fn index_handler(State(state): State<AppState>) -> Response {
    match state.items.list().await {
        Ok(items) => Html(view::render_index(&items, &state.viewer)).into_response(),
        Err(e) => {
            error!("Failed to list items: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to load items").into_response()
        }
    }
}

/// Current snapshot as JSON
pub async fn list_items_handler(State(state): State<AppState>) -> Response {
    match state.items.list().await {
        Ok(items) => Json(items).into_response(),
        Err(e) => {
            error!("Failed to list items: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "failed to load items").into_response()
        }
    }
}

/// Append the first submitted `todo` value, then go back to the list
pub async fn add_item_handler(
    State(state): State<AppState>,
    form: FormFields,
) -> Redirect {
    match state.items.append(Item::new(form.first("todo"))).await {
        Ok(item) => info!(text = %item.text(), "Added item"),
        Err(e) => error!("Failed to add item: {}", e),
    }

    Redirect::to("/")
}

/// Flip the item at the first submitted `index`, then go back to the list.
/// The index stays raw until the store parses it.
pub async fn toggle_item_handler(
    State(state): State<AppState>,
    form: FormFields,
) -> Redirect {
    let index = form.first("index");

    match state.items.toggle_raw(index).await {
        Ok(Some(item)) => info!(index = %index, done = item.done, "Toggled item"),
        Ok(None) => debug!(index = %index, "Toggle ignored"),
        Err(e) => error!("Failed to toggle item: {}", e),
    }

    Redirect::to("/")
}
