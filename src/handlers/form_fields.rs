//! Form Fields
//!
//! Submitted form values as raw `(name, value)` pairs, in body order.
//! Accepts urlencoded and multipart bodies; anything unreadable yields no
//! fields, so handlers see missing fields as empty strings.

use std::convert::Infallible;

use axum::async_trait;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Form;
use tracing::debug;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormFields {
    pairs: Vec<(String, String)>,
}

impl FormFields {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// First value submitted under `name`, or `""` when the field is absent
    pub fn first(&self, name: &str) -> &str {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"))
}

async fn read_multipart(mut multipart: Multipart) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                debug!("Stopped reading multipart form: {}", e);
                break;
            }
        };
        // File uploads are not form values
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        match field.text().await {
            Ok(value) => pairs.push((name, value)),
            Err(e) => {
                debug!("Stopped reading multipart form: {}", e);
                break;
            }
        }
    }
    pairs
}

#[async_trait]
impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = if is_multipart(&req) {
            match Multipart::from_request(req, state).await {
                Ok(multipart) => read_multipart(multipart).await,
                Err(e) => {
                    debug!("Ignoring unreadable multipart form: {}", e);
                    Vec::new()
                }
            }
        } else {
            match Form::<Vec<(String, String)>>::from_request(req, state).await {
                Ok(Form(pairs)) => pairs,
                Err(e) => {
                    debug!("Ignoring unreadable form: {}", e);
                    Vec::new()
                }
            }
        };
        Ok(Self::new(pairs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        FormFields::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_first_value_wins() {
        let form = fields(&[("todo", "a"), ("todo", "b")]);
        assert_eq!(form.first("todo"), "a");
    }

    #[test]
    fn test_missing_field_is_empty() {
        let form = fields(&[("other", "x")]);
        assert_eq!(form.first("todo"), "");
        assert_eq!(FormFields::default().first("index"), "");
    }

    #[test]
    fn test_empty_value_is_kept() {
        let form = fields(&[("index", ""), ("index", "1")]);
        assert_eq!(form.first("index"), "");
    }
}
