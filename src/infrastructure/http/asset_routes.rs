//! Asset API routes
//!
//! One set of generic handlers serves every resource: query strings go
//! through the filter builder, bodies through the ingress translator, and
//! results through the egress views.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::application::dto::{Filter, QueryParams};
use crate::application::errors::{ApiError, ValidationError};
use crate::application::resource::Resource;
use crate::domain::value_objects::AssetId;
use crate::infrastructure::http::error::json_response;
use crate::infrastructure::state::{AppState, ServiceFor};

/// Query pairs in request order, so repeated keys are not collapsed
type QueryResult = Result<Query<Vec<(String, String)>>, QueryRejection>;

/// `/{collection}` and `/{collection}/{id}` routes for one resource
pub fn collection_routes<A>() -> Router<Arc<AppState>>
where
    A: Resource,
    AppState: ServiceFor<A>,
{
    let base = format!("/{}", A::COLLECTION);
    Router::new()
        .route(&base, get(list_assets::<A>).post(create_asset::<A>))
        .route(
            &format!("{base}/{{id}}"),
            get(get_asset::<A>)
                .put(update_asset::<A>)
                .delete(remove_asset::<A>),
        )
}

fn service<A>(state: &AppState) -> &crate::application::services::AssetService<A>
where
    A: Resource,
    AppState: ServiceFor<A>,
{
    <AppState as ServiceFor<A>>::service(state)
}

fn parse_id<A: Resource>(raw: &str) -> Result<A::Id, ValidationError> {
    <A::Id as AssetId>::parse(raw).map_err(|err| ValidationError::invalid_format("id", raw, err))
}

fn parse_change<A: Resource>(body: &[u8]) -> Result<A::Change, ValidationError> {
    let request: A::Request = serde_json::from_slice(body)
        .map_err(|err| ValidationError::MalformedBody(err.to_string()))?;
    A::translate(request)
}

/// List assets matching the query filter
pub async fn list_assets<A>(
    State(state): State<Arc<AppState>>,
    query: QueryResult,
) -> Result<Response, ApiError>
where
    A: Resource,
    AppState: ServiceFor<A>,
{
    let Query(pairs) = query.map_err(|err| ValidationError::MalformedQuery(err.body_text()))?;
    let params: QueryParams = pairs.into_iter().collect();

    let filter = Filter::<A::Scope>::from_query(&params)?;
    let assets = service::<A>(&state).list(&filter).await?;
    let views: Vec<A::View> = assets.iter().map(A::view).collect();
    json_response(StatusCode::OK, A::KIND, &views)
}

/// Get an asset by ID
pub async fn get_asset<A>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError>
where
    A: Resource,
    AppState: ServiceFor<A>,
{
    let id = parse_id::<A>(&id)?;
    let asset = service::<A>(&state).get(id).await?;
    json_response(StatusCode::OK, A::KIND, &asset.view())
}

/// Create an asset
pub async fn create_asset<A>(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, ApiError>
where
    A: Resource,
    AppState: ServiceFor<A>,
{
    let change = parse_change::<A>(&body)?;
    let asset = service::<A>(&state).create(change).await?;
    json_response(StatusCode::CREATED, A::KIND, &asset.view())
}

/// Replace an asset's fields
pub async fn update_asset<A>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Response, ApiError>
where
    A: Resource,
    AppState: ServiceFor<A>,
{
    let id = parse_id::<A>(&id)?;
    let change = parse_change::<A>(&body)?;
    let asset = service::<A>(&state).update(id, change).await?;
    json_response(StatusCode::OK, A::KIND, &asset.view())
}

/// Delete an asset
pub async fn remove_asset<A>(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError>
where
    A: Resource,
    AppState: ServiceFor<A>,
{
    let id = parse_id::<A>(&id)?;
    service::<A>(&state).remove(id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
