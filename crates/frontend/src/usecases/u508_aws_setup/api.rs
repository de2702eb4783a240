use contracts::usecases::u508_aws_setup::{
    parse_setup_response, SetupError, SetupRequest, SetupResponse, SETUP_ENDPOINT,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Send the setup form to the backend. Makes exactly one attempt.
pub async fn submit_setup(request: &SetupRequest) -> Result<SetupResponse, SetupError> {
    log::info!(
        "Submitting with application name: {}",
        request.application_name
    );

    let response = Request::post(&api_url(SETUP_ENDPOINT))
        .json(request)
        .map_err(|e| {
            log::error!("Failed to serialize request: {}", e);
            SetupError::Unknown
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("Failed to send request: {}", e);
            SetupError::Unknown
        })?;

    let status = response.status();
    log::debug!("Response status: {}", status);

    let body = response.text().await.map_err(|e| {
        log::error!("Failed to read response body: {}", e);
        SetupError::Unknown
    })?;
    log::debug!("Response body: {}", body);

    parse_setup_response(status, &body).inspect_err(|e| {
        log::error!("Setup request failed ({}): {:?}", status, e);
    })
}
