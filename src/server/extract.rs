use super::types::GenerateForm;
use axum::{
    async_trait,
    extract::{Form, FromRequest, Multipart, Request},
    http::header,
};
use std::convert::Infallible;
use tracing::debug;

const FIELD: &str = "components";

/// The `components` form field, from either a url-encoded or a multipart body.
///
/// Anything unreadable (no body, other content types, a malformed form)
/// yields an empty string rather than a rejection.
#[derive(Debug, Default)]
pub struct Components(pub String);

#[async_trait]
impl<S> FromRequest<S> for Components
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("multipart/form-data"));

        let components = if is_multipart {
            match Multipart::from_request(req, state).await {
                Ok(multipart) => multipart_field(multipart).await,
                Err(rejection) => {
                    debug!("Unreadable multipart body: {}", rejection);
                    String::new()
                }
            }
        } else {
            match Form::<GenerateForm>::from_request(req, state).await {
                Ok(Form(form)) => form.components,
                Err(rejection) => {
                    debug!("Unreadable form body: {}", rejection);
                    String::new()
                }
            }
        };

        Ok(Self(components))
    }
}

async fn multipart_field(mut multipart: Multipart) -> String {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() == Some(FIELD) {
            return field.text().await.unwrap_or_default();
        }
    }
    String::new()
}
