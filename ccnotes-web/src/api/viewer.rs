//! Public note viewer
//!
//! `/` and `/View` show the latest note, `/View/show_note/:id` one note, and
//! `/View/show_previous` the archive of all notes.

use axum::{
    extract::{Path, State},
    response::Html,
    routing::get,
    Router,
};
use ccnotes_common::db::Note;

use super::parse_id;
use crate::error::ApiResult;
use crate::view;
use crate::AppState;

/// GET / and GET /View
pub async fn home(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let page = match state.detail().render_home().await? {
        Some(note) => view::detail_page(&note),
        None => view::empty_home_page(),
    };
    Ok(Html(page))
}

/// GET /View/show_note/:id
pub async fn show_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Html<String>> {
    let id = parse_id(&id)?;
    let note = state.detail().render_detail(id).await?;
    Ok(Html(view::detail_page(&note)))
}

/// GET /View/show_previous
pub async fn show_previous(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let notes = state.listing::<Note>().render_archive().await?;
    Ok(Html(view::archive_page(&notes)))
}

pub fn viewer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/View", get(home))
        .route("/View/show_note/:id", get(show_note))
        .route("/View/show_previous", get(show_previous))
}
