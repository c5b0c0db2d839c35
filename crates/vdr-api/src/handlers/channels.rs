//! Channel list handlers
//!
//! Endpoints for listing the recorder's channels.

use axum::{
    extract::{OriginalUri, State},
    http::Method,
};

use crate::channels::{ChannelsResponder, CHANNELS_PREFIX};
use crate::response::{ApiError, ApiResult, Document};
use crate::state::AppState;

/// List channels
///
/// GET /channels.json | /channels.html | /channels.xml
pub async fn list_channels(
    State(state): State<AppState>,
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> ApiResult<Document> {
    let mut body = Vec::new();
    let format = ChannelsResponder::new(state.channels()).reply(&mut body, &method, uri.path())?;

    Ok(Document {
        content_type: format.content_type(),
        body,
    })
}

/// Fallback for paths without a route
///
/// Paths such as `/channels.csv` match no route but still belong to the
/// channel list, which answers them with its own rejection.
pub async fn fallback(
    state: State<AppState>,
    method: Method,
    original_uri: OriginalUri,
) -> ApiResult<Document> {
    if original_uri.0.path().starts_with(CHANNELS_PREFIX) {
        list_channels(state, method, original_uri).await
    } else {
        Err(ApiError::not_found(original_uri.0.path()))
    }
}
