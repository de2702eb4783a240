//! Form controller for the AWS setup page.
//!
//! Holds every field value and the last submission outcome. The view keeps a
//! single [`SetupForm`] inside an `RwSignal`, so all state transitions here are
//! plain methods that can be tested without a browser.

use contracts::usecases::u508_aws_setup::{AwsCredentials, SetupError, SetupRequest, SetupResponse};

/// Editable fields of the setup form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    ApplicationName,
    AccessKeyId,
    SecretAccessKey,
    Region,
    OpenApiSpec,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::ApplicationName,
        FormField::AccessKeyId,
        FormField::SecretAccessKey,
        FormField::Region,
        FormField::OpenApiSpec,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::ApplicationName => "Application Name:",
            FormField::AccessKeyId => "AWS Access Key ID:",
            FormField::SecretAccessKey => "AWS Secret Access Key:",
            FormField::Region => "AWS Region:",
            FormField::OpenApiSpec => "OpenAPI Specification (YAML):",
        }
    }

    /// DOM id of the control, also used by its `<label for=..>`
    pub fn dom_id(self) -> &'static str {
        match self {
            FormField::ApplicationName => "u508-application-name",
            FormField::AccessKeyId => "u508-access-key-id",
            FormField::SecretAccessKey => "u508-secret-access-key",
            FormField::Region => "u508-region",
            FormField::OpenApiSpec => "u508-openapi-spec",
        }
    }

    /// Rendered with the `required` attribute, so the browser blocks
    /// submission while the field is empty
    pub fn required(self) -> bool {
        match self {
            FormField::ApplicationName
            | FormField::AccessKeyId
            | FormField::SecretAccessKey
            | FormField::Region
            | FormField::OpenApiSpec => true,
        }
    }

    /// `type` attribute for `<input>` fields. `None` means multi-line textarea.
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            FormField::SecretAccessKey => Some("password"),
            FormField::OpenApiSpec => None,
            _ => Some("text"),
        }
    }
}

/// Values typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
    pub application_name: String,
    pub open_api_spec: String,
}

impl FormState {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::ApplicationName => &self.application_name,
            FormField::AccessKeyId => &self.access_key_id,
            FormField::SecretAccessKey => &self.secret_access_key,
            FormField::Region => &self.region,
            FormField::OpenApiSpec => &self.open_api_spec,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::ApplicationName => &mut self.application_name,
            FormField::AccessKeyId => &mut self.access_key_id,
            FormField::SecretAccessKey => &mut self.secret_access_key,
            FormField::Region => &mut self.region,
            FormField::OpenApiSpec => &mut self.open_api_spec,
        };
        *slot = value;
    }

    pub fn to_request(&self) -> SetupRequest {
        SetupRequest {
            aws_credentials: AwsCredentials {
                access_key_id: self.access_key_id.clone(),
                secret_access_key: self.secret_access_key.clone(),
                region: self.region.clone(),
            },
            application_name: self.application_name.clone(),
            open_api_spec: self.open_api_spec.clone(),
        }
    }
}

/// Outcome of the last finished submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Output(String),
    Error(String),
}

impl From<Result<SetupResponse, SetupError>> for SubmissionResult {
    fn from(result: Result<SetupResponse, SetupError>) -> Self {
        match result {
            Ok(response) => SubmissionResult::Output(response.output),
            Err(e) => SubmissionResult::Error(e.to_string()),
        }
    }
}

/// Identifies one submission attempt
pub type SubmitTicket = u64;

#[derive(Debug, Clone, Default)]
pub struct SetupForm {
    fields: FormState,
    result: Option<SubmissionResult>,
    last_ticket: SubmitTicket,
}

impl SetupForm {
    pub fn value(&self, field: FormField) -> &str {
        self.fields.value(field)
    }

    pub fn update_field(&mut self, field: FormField, value: String) {
        self.fields.set(field, value);
    }

    /// Starts a new attempt: clears the previous outcome and returns the
    /// ticket together with the payload to send.
    pub fn begin_submit(&mut self) -> (SubmitTicket, SetupRequest) {
        self.result = None;
        self.last_ticket += 1;
        (self.last_ticket, self.fields.to_request())
    }

    /// Records the outcome of an attempt. Returns `false` and changes nothing
    /// when a newer attempt has started since `ticket` was issued.
    pub fn finish(&mut self, ticket: SubmitTicket, outcome: impl Into<SubmissionResult>) -> bool {
        if ticket != self.last_ticket {
            return false;
        }
        self.result = Some(outcome.into());
        true
    }

    /// Text for the output region, empty when there is none
    pub fn output(&self) -> &str {
        match &self.result {
            Some(SubmissionResult::Output(text)) => text,
            _ => "",
        }
    }

    /// Text for the alert region, empty when there is none
    pub fn error(&self) -> &str {
        match &self.result {
            Some(SubmissionResult::Error(text)) => text,
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SetupForm {
        let mut form = SetupForm::default();
        form.update_field(FormField::ApplicationName, "petstore".to_string());
        form.update_field(FormField::AccessKeyId, "AKIAEXAMPLE".to_string());
        form.update_field(FormField::SecretAccessKey, "s3cr3t".to_string());
        form.update_field(FormField::Region, "us-east-1".to_string());
        form.update_field(FormField::OpenApiSpec, "openapi: 3.0.0".to_string());
        form
    }

    #[test]
    fn test_starts_empty() {
        let form = SetupForm::default();
        for field in FormField::ALL {
            assert_eq!(form.value(field), "");
        }
        assert_eq!(form.output(), "");
        assert_eq!(form.error(), "");
    }

    #[test]
    fn test_last_edit_wins() {
        let mut form = SetupForm::default();
        form.update_field(FormField::Region, "us-east-1".to_string());
        form.update_field(FormField::ApplicationName, "a".to_string());
        form.update_field(FormField::Region, "eu-central-1".to_string());
        form.update_field(FormField::Region, "eu-north-1".to_string());

        assert_eq!(form.value(FormField::Region), "eu-north-1");
        assert_eq!(form.value(FormField::ApplicationName), "a");
        assert_eq!(form.value(FormField::AccessKeyId), "");
    }

    #[test]
    fn test_payload_reflects_fields() {
        let mut form = filled();
        let (_, request) = form.begin_submit();
        assert_eq!(request.application_name, "petstore");
        assert_eq!(request.aws_credentials.access_key_id, "AKIAEXAMPLE");
        assert_eq!(request.aws_credentials.secret_access_key, "s3cr3t");
        assert_eq!(request.aws_credentials.region, "us-east-1");
        assert_eq!(request.open_api_spec, "openapi: 3.0.0");
    }

    #[test]
    fn test_success_shows_output_only() {
        let mut form = filled();
        let (ticket, _) = form.begin_submit();
        let applied = form.finish(
            ticket,
            Ok::<_, SetupError>(SetupResponse {
                output: "ok".to_string(),
            }),
        );
        assert!(applied);
        assert_eq!(form.output(), "ok");
        assert_eq!(form.error(), "");
    }

    #[test]
    fn test_server_error_shows_message_only() {
        let mut form = filled();
        let (ticket, _) = form.begin_submit();
        form.finish(
            ticket,
            Err::<SetupResponse, _>(SetupError::Server("bad region".to_string())),
        );
        assert_eq!(form.error(), "bad region");
        assert_eq!(form.output(), "");
    }

    #[test]
    fn test_unknown_error_shows_fallback() {
        let mut form = filled();
        let (ticket, _) = form.begin_submit();
        form.finish(ticket, Err::<SetupResponse, _>(SetupError::Unknown));
        assert_eq!(form.error(), "An unknown error occurred");
        assert_eq!(form.output(), "");
    }

    #[test]
    fn test_begin_submit_clears_previous_result() {
        let mut form = filled();
        let (ticket, _) = form.begin_submit();
        form.finish(ticket, SubmissionResult::Error("boom".to_string()));
        assert_eq!(form.error(), "boom");

        form.begin_submit();
        assert_eq!(form.error(), "");
        assert_eq!(form.output(), "");

        let (ticket, _) = form.begin_submit();
        form.finish(ticket, SubmissionResult::Output("applied".to_string()));
        form.begin_submit();
        assert_eq!(form.output(), "");
    }

    #[test]
    fn test_stale_outcome_is_dropped() {
        let mut form = filled();
        let (first, _) = form.begin_submit();
        let (second, _) = form.begin_submit();

        assert!(form.finish(second, SubmissionResult::Output("new".to_string())));
        assert!(!form.finish(first, SubmissionResult::Error("old".to_string())));
        assert_eq!(form.output(), "new");
        assert_eq!(form.error(), "");
    }

    #[test]
    fn test_fields_survive_submission() {
        let mut form = filled();
        let (ticket, _) = form.begin_submit();
        form.finish(ticket, SubmissionResult::Error("bad region".to_string()));
        assert_eq!(form.value(FormField::ApplicationName), "petstore");
        assert_eq!(form.value(FormField::Region), "us-east-1");
    }

    #[test]
    fn test_every_field_is_required() {
        assert!(FormField::ALL.iter().all(|field| field.required()));
    }

    #[test]
    fn test_only_secret_is_masked() {
        for field in FormField::ALL {
            let masked = field.input_type() == Some("password");
            assert_eq!(masked, field == FormField::SecretAccessKey);
        }
        assert_eq!(FormField::OpenApiSpec.input_type(), None);
    }
}
