//! Request body extractor accepting JSON, URL-encoded or multipart forms.

use axum::body::Body;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::{HeaderValue, Method, header};
use axum::{Form, Json};
use serde::de::DeserializeOwned;
use url::form_urlencoded;

use crate::error::HttpError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const MULTIPART_CONTENT_TYPE: &str = "multipart/form-data";

/// Deserializes the body according to its `Content-Type`: URL-encoded and
/// multipart forms are read as forms, anything else as JSON. Every rejection
/// becomes a 400 `HttpError`.
///
/// Forms carry scalar fields only; list fields such as `students` need JSON.
/// File parts of a multipart body are skipped.
#[derive(Debug)]
pub struct JsonOrForm<T>(pub T);

impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with(FORM_CONTENT_TYPE) {
            let Form(value) = Form::<T>::from_request(req, state).await?;
            Ok(Self(value))
        } else if content_type.starts_with(MULTIPART_CONTENT_TYPE) {
            let method = req.method().clone();
            let multipart = Multipart::from_request(req, state).await?;
            let encoded = multipart_to_form(multipart).await?;
            let Form(value) = Form::<T>::from_request(form_request(method, encoded), state).await?;
            Ok(Self(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            Ok(Self(value))
        }
    }
}

/// Collect the named text parts of a multipart body as a URL-encoded form.
async fn multipart_to_form(mut multipart: Multipart) -> Result<String, HttpError> {
    let mut pairs = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let value = field.text().await?;
        pairs.push((name, value));
    }

    let mut form = form_urlencoded::Serializer::new(String::new());
    form.extend_pairs(pairs);
    Ok(form.finish())
}

/// Wrap an encoded form in a request the `Form` extractor reads as a body.
fn form_request(method: Method, encoded: String) -> Request {
    let mut req = Request::new(Body::from(encoded));
    *req.method_mut() = method;
    req.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(FORM_CONTENT_TYPE),
    );
    req
}
