//! Admin screens: listing, add, edit and remove for each managed entity
//!
//! Handlers are generic over [`Managed`]; [`admin_routes`] mounts one set per
//! entity under its path prefix.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use ccnotes_common::db::{Note, Series, Speaker};

use super::parse_id;
use crate::entity::Managed;
use crate::error::ApiResult;
use crate::form::{FormMode, SubmitOutcome};
use crate::{view, AppState, StoreProvider};

/// GET /{Entity}
pub async fn index<T>(State(state): State<AppState>) -> ApiResult<Html<String>>
where
    T: Managed,
    AppState: StoreProvider<T>,
{
    let listing = state.listing::<T>().render_index().await?;
    Ok(Html(view::index_page(&listing)))
}

/// GET /{Entity}/add
pub async fn add_form<T>(State(state): State<AppState>) -> ApiResult<Html<String>>
where
    T: Managed,
    AppState: StoreProvider<T>,
{
    let form = state.form::<T>().render_new().await?;
    Ok(Html(view::form_page(&form)))
}

/// POST /{Entity}/add
pub async fn add_submit<T>(
    State(state): State<AppState>,
    Form(input): Form<T::Input>,
) -> ApiResult<Response>
where
    T: Managed,
    AppState: StoreProvider<T>,
{
    submit::<T>(&state, FormMode::New, input).await
}

/// GET /{Entity}/edit/:id
pub async fn edit_form<T>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Html<String>>
where
    T: Managed,
    AppState: StoreProvider<T>,
{
    let id = parse_id(&id)?;
    let form = state.form::<T>().render_edit(id).await?;
    Ok(Html(view::form_page(&form)))
}

/// POST /{Entity}/edit/:id
pub async fn edit_submit<T>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(input): Form<T::Input>,
) -> ApiResult<Response>
where
    T: Managed,
    AppState: StoreProvider<T>,
{
    let id = parse_id(&id)?;
    submit::<T>(&state, FormMode::Edit(id), input).await
}

/// GET /{Entity}/remove/:id
pub async fn remove<T>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Redirect>
where
    T: Managed,
    AppState: StoreProvider<T>,
{
    let id = parse_id(&id)?;
    StoreProvider::<T>::store(&state).delete(id).await?;
    Ok(Redirect::to(T::PATH))
}

async fn submit<T>(state: &AppState, mode: FormMode, input: T::Input) -> ApiResult<Response>
where
    T: Managed,
    AppState: StoreProvider<T>,
{
    let response = match state.form::<T>().submit(mode, input).await? {
        SubmitOutcome::Saved { redirect, .. } => Redirect::to(&redirect).into_response(),
        SubmitOutcome::Invalid(form) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Html(view::form_page(&form)),
        )
            .into_response(),
    };
    Ok(response)
}

/// Listing, add, edit and remove routes for one entity
pub fn entity_routes<T>() -> Router<AppState>
where
    T: Managed,
    AppState: StoreProvider<T>,
{
    Router::new()
        .route(T::PATH, get(index::<T>))
        .route(
            &format!("{}/add", T::PATH),
            get(add_form::<T>).post(add_submit::<T>),
        )
        .route(
            &format!("{}/edit/:id", T::PATH),
            get(edit_form::<T>).post(edit_submit::<T>),
        )
        .route(&format!("{}/remove/:id", T::PATH), get(remove::<T>))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .merge(entity_routes::<Note>())
        .merge(entity_routes::<Series>())
        .merge(entity_routes::<Speaker>())
}
