use serde::{Deserialize, Deserializer, Serialize};

use super::error::SetupError;

/// Successful reply of `POST /api/setup`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupResponse {
    /// Terraform output as plain text, empty when absent or `null`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub output: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Error reply of `POST /api/setup`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetupErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Interpret a raw `/api/setup` reply.
///
/// Any status in `200..=299` is success. Every failure maps to a
/// [`SetupError`] whose text can be shown to the user as-is.
pub fn parse_setup_response(status: u16, body: &str) -> Result<SetupResponse, SetupError> {
    if (200..300).contains(&status) {
        return serde_json::from_str::<SetupResponse>(body).map_err(|_| SetupError::Unknown);
    }

    let parsed: SetupErrorBody = serde_json::from_str(body).map_err(|_| SetupError::Unknown)?;
    match parsed.error {
        Some(message) if !message.is_empty() => Err(SetupError::Server(message)),
        _ => Err(SetupError::Rejected { status }),
    }
}
