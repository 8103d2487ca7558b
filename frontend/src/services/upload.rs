//! Two-step upload: ask the import service for a pre-signed URL, then PUT
//! the file straight to it.

use gloo_net::http::Request;
use web_sys::File;

use crate::services::credentials::{authorization_header, CredentialProvider};
use crate::state::WidgetStore;
use crate::types::{DestinationRequest, UploadDestination, UploadError, UploadFile, UploadResult};

/// How an `upload` call ended, when it did not propagate an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadOutcome {
    /// No file selected, or an upload was already running.
    Skipped,
    /// File transferred to the pre-signed URL.
    Uploaded,
    /// Destination request failed; failure notification shown.
    Failed,
    /// Endpoint answered without a destination; nothing sent.
    NoDestination,
}

/// Network seam used by [`upload`].
#[allow(async_fn_in_trait)]
pub trait UploadTransport<F> {
    /// Perform the destination request and return the raw response body.
    ///
    /// Non-success statuses are errors.
    async fn fetch_destination(&self, request: &DestinationRequest) -> UploadResult<String>;

    /// PUT the whole file to `signed_url` and return the response status.
    async fn transfer(&self, signed_url: &str, file: &F) -> UploadResult<u16>;
}

/// Transport backed by the browser `fetch` API.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl UploadTransport<File> for BrowserTransport {
    async fn fetch_destination(&self, request: &DestinationRequest) -> UploadResult<String> {
        let mut builder = Request::get(&request.url)
            .query(request.query.iter().map(|(key, value)| (key.as_str(), value.as_str())));
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| UploadError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(UploadError::Status(response.status()));
        }

        response
            .text()
            .await
            .map_err(|e| UploadError::InvalidResponse(e.to_string()))
    }

    async fn transfer(&self, signed_url: &str, file: &File) -> UploadResult<u16> {
        let request = Request::put(signed_url)
            .body(file.clone())
            .map_err(|e| UploadError::Transfer(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| UploadError::Transfer(e.to_string()))?;

        Ok(response.status())
    }
}

/// `encodeURIComponent` as browsers implement it.
///
/// Everything except ASCII alphanumerics and `-_.!~*'()` is percent-encoded
/// as UTF-8.
pub fn encode_uri_component(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => encoded.push(byte as char),
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}

/// Build the destination request for `file_name`.
///
/// The name is encoded here and encoded again by the transport's query
/// serializer; the import service decodes twice.
pub fn destination_request(url: &str, file_name: &str, token: Option<&str>) -> DestinationRequest {
    DestinationRequest {
        url: url.to_string(),
        query: vec![("name".to_string(), encode_uri_component(file_name))],
        headers: vec![
            (
                "Content-type".to_string(),
                "application/x-www-form-urlencoded".to_string(),
            ),
            ("Authorization".to_string(), authorization_header(token)),
        ],
    }
}

/// Parse a destination response body.
///
/// An empty or `null` body means "no destination"; anything else must be a
/// `{ "signedURL": ... }` object.
pub fn parse_destination(body: &str) -> UploadResult<Option<UploadDestination>> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<UploadDestination>>(body)
        .map_err(|e| UploadError::InvalidResponse(e.to_string()))
}

async fn request_destination<F, T>(
    transport: &T,
    request: &DestinationRequest,
) -> UploadResult<Option<UploadDestination>>
where
    T: UploadTransport<F>,
{
    let body = transport.fetch_destination(request).await?;
    parse_destination(&body)
}

/// Upload the widget's selected file.
///
/// Destination-request failures become a failure notification. A failed
/// transfer is returned as `Err` with the notification untouched and the
/// file still selected; callers decide how to surface it.
pub async fn upload<F, S, T, C>(
    store: &S,
    transport: &T,
    credentials: &C,
    url: &str,
) -> UploadResult<UploadOutcome>
where
    F: UploadFile,
    S: WidgetStore<F>,
    T: UploadTransport<F>,
    C: CredentialProvider,
{
    log::info!("uploadFile to {}", url);
    let token = credentials.token();

    let Some(file) = store.modify(|state| state.begin_upload()).flatten() else {
        return Ok(UploadOutcome::Skipped);
    };
    let file_name = file.file_name();

    let request = destination_request(url, &file_name, token.as_deref());
    let destination = match request_destination::<F, T>(transport, &request).await {
        Ok(Some(destination)) => destination,
        Ok(None) => {
            log::warn!("No upload destination returned for {}", file_name);
            store.modify(|state| state.abandon());
            return Ok(UploadOutcome::NoDestination);
        }
        Err(e) => {
            log::error!("Destination request failed: {}", e);
            store.modify(|state| state.fail());
            return Ok(UploadOutcome::Failed);
        }
    };

    log::info!("File to upload: {}", file_name);
    log::info!("Uploading to: {}", destination.signed_url);

    match transport.transfer(&destination.signed_url, &file).await {
        Ok(status) => {
            log::info!("Result: {}", status);
            store.modify(|state| state.succeed());
            Ok(UploadOutcome::Uploaded)
        }
        Err(e) => {
            store.modify(|state| state.abandon());
            Err(e)
        }
    }
}
