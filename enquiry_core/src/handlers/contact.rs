//! Contact form submission handler

use crate::{
    error::Result,
    extractors::ContactJson,
    models::{enquiry::EnquiryPayload, request::ContactResponse},
    AppState,
};
use axum::{extract::State, Json};
use tracing::info;

pub async fn handle_contact(
    State(state): State<AppState>,
    ContactJson(payload): ContactJson<EnquiryPayload>,
) -> Result<Json<ContactResponse>> {
    info!(
        "POST /api/contact - topic: {:?}, channel: {:?}",
        payload.topic, payload.channel
    );

    let outcome = state.enquiries.submit(payload).await?;
    tracing::debug!("Contact submission outcome: {:?}", outcome);

    Ok(Json(ContactResponse::success()))
}
