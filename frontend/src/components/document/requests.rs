//! HTTP effects for the document workflow.
//!
//! Each function performs exactly one request and reduces the exchange to an
//! [`Outcome`]; deciding what the outcome means is left to the reducer in
//! `common::workflow`.

use gloo_console::error;
use gloo_net::http::{Request, Response};
use serde_json::Value;
use web_sys::{File, FormData};

use common::model::document::DocType;
use common::requests::{
    EligibilityRequest, FieldUpdatePayload, UPLOAD_DOC_TYPE_FIELD, UPLOAD_FILE_FIELD,
};
use common::responses::{classify, Outcome, RequestFailure};

/// `POST /documents/upload/` as multipart form data.
pub async fn upload(url: &str, file: &File, file_name: &str, doc_type: DocType) -> Outcome {
    let form = FormData::new().map_err(|_| build_failure("form data"))?;
    form.append_with_blob_and_filename(UPLOAD_FILE_FIELD, file, file_name)
        .map_err(|_| build_failure("file field"))?;
    form.append_with_str(UPLOAD_DOC_TYPE_FIELD, doc_type.as_str())
        .map_err(|_| build_failure("doc_type field"))?;

    let request = Request::post(url).body(form).map_err(transport)?;
    finish(request.send().await).await
}

/// `PATCH /documents/{id}/update-extracted/` with a sparse JSON body.
pub async fn update_extracted(url: &str, payload: &FieldUpdatePayload) -> Outcome {
    let request = Request::patch(url).json(payload).map_err(transport)?;
    finish(request.send().await).await
}

/// `POST /eligibility/check/`.
pub async fn check_eligibility(url: &str, body: &EligibilityRequest) -> Outcome {
    let request = Request::post(url).json(body).map_err(transport)?;
    finish(request.send().await).await
}

async fn finish(sent: Result<Response, gloo_net::Error>) -> Outcome {
    let response = sent.map_err(transport)?;
    let body = response.json::<Value>().await.ok();
    if !response.ok() {
        error!(format!(
            "{} {} answered {}",
            response.url(),
            response.status_text(),
            response.status()
        ));
    }
    classify(response.ok(), body)
}

fn transport(err: gloo_net::Error) -> RequestFailure {
    error!(format!("request failed: {}", err));
    RequestFailure::Unreachable
}

fn build_failure(part: &str) -> RequestFailure {
    error!(format!("could not build upload request: {}", part));
    RequestFailure::Unreachable
}
