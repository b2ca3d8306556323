//! Builders for handler inputs that axum normally extracts from a request.

use axum::{
    body::{to_bytes, Body},
    extract::{FromRequest, Multipart},
    http::{header::CONTENT_TYPE, Request},
    response::Response,
    Form,
};
use serde::de::DeserializeOwned;

const BOUNDARY: &str = "highlanders-test-boundary";

/// File part of a multipart body.
pub struct FilePart<'a> {
    pub field: &'a str,
    pub file_name: &'a str,
    pub content_type: &'a str,
    pub bytes: &'a [u8],
}

/// Builds a `Multipart` extractor from text fields and file parts.
pub async fn multipart(text: &[(&str, &str)], files: &[FilePart<'_>]) -> Multipart {
    let mut body = Vec::new();

    for (name, value) in text {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
    }

    for file in files {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                 Content-Type: {}\r\n\r\n",
                BOUNDARY, file.field, file.file_name, file.content_type
            )
            .as_bytes(),
        );
        body.extend_from_slice(file.bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    let request = Request::builder()
        .method("POST")
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap();

    Multipart::from_request(request, &()).await.unwrap()
}

/// Form body of a payment notification.
pub fn notification(item_name: &str, payment_status: &str) -> Form<Vec<(String, String)>> {
    Form(vec![
        ("m_payment_id".to_string(), "1".to_string()),
        ("pf_payment_id".to_string(), "1089250".to_string()),
        ("payment_status".to_string(), payment_status.to_string()),
        ("item_name".to_string(), item_name.to_string()),
        ("amount_gross".to_string(), "100.00".to_string()),
    ])
}

/// Deserializes a JSON response body.
pub async fn json_body<T: DeserializeOwned>(response: Response) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
