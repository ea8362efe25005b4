use crate::error::{Error, ModelResult};
use error_stack::{ResultExt, report};
use reqwest::Response;
use tracing::error;

/// Reads the body of a response, failing on non-success statuses and empty bodies.
pub async fn read_response_body(response: Response) -> ModelResult<String> {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .change_context(Error::ReqwestError(
            "Failed to get text from response".to_string(),
        ))?;

    check_response_body(status, body)
}

pub fn check_response_body(status: u16, body: String) -> ModelResult<String> {
    match status {
        200..=299 => {
            if body.trim().is_empty() {
                return Err(report!(Error::EmptyBody)
                    .attach_printable(format!("Status {status} returned an empty body")));
            }
            Ok(body)
        }
        _ => {
            error!("Error Body: {}", &body);
            Err(report!(Error::ResponseError { status, body }))
        }
    }
}
