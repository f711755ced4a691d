//! Request extractors for API routes
//!
//! Rejections are plain `ApiError`s so parse and validation failures share
//! the handlers' JSON error body.

use std::ops::Deref;

use axum::extract::{Form, FromRequest, FromRequestParts, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::api::types::ApiError;
use crate::domain::search::FormFields;

/// Flatten field errors into `field: message` pairs joined by `; `
fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: failed {}", e.code),
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

/// Query string deserialized into `T` and checked with `validator`
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

impl<T> Deref for ValidatedQuery<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, ApiError> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|r| ApiError::bad_request("QUERY_PARSE_ERROR", r.body_text()))?;
        value
            .validate()
            .map_err(|e| ApiError::bad_request("VALIDATION_ERROR", describe(&e)))?;
        Ok(Self(value))
    }
}

/// Raw search form fields
///
/// Reads the urlencoded body of a POST, or the query string of a GET, keeping
/// repeated keys such as `primary_type=Fire&primary_type=Water`.
#[derive(Debug)]
pub struct SearchForm(pub FormFields);

impl<S> FromRequest<S> for SearchForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, ApiError> {
        Form::<Vec<(String, String)>>::from_request(req, state)
            .await
            .map(|Form(pairs)| Self(FormFields::new(pairs)))
            .map_err(|r| ApiError::new(r.status(), "FORM_PARSE_ERROR", r.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, Request as HttpRequest, StatusCode, header};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct WordQuery {
        #[validate(length(max = 3, message = "too long"))]
        word: String,
    }

    fn parts(uri: &str) -> Parts {
        HttpRequest::builder()
            .uri(uri)
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    #[tokio::test]
    async fn test_validated_query_accepts_valid() {
        let query = ValidatedQuery::<WordQuery>::from_request_parts(&mut parts("/?word=abc"), &())
            .await
            .unwrap();
        assert_eq!(query.word, "abc");
    }

    #[tokio::test]
    async fn test_validated_query_names_failing_field() {
        let err = ValidatedQuery::<WordQuery>::from_request_parts(&mut parts("/?word=abcd"), &())
            .await
            .unwrap_err();
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_validated_query_missing_field_is_parse_error() {
        let err = ValidatedQuery::<WordQuery>::from_request_parts(&mut parts("/"), &())
            .await
            .unwrap_err();
        assert_eq!(err.code(), "QUERY_PARSE_ERROR");
    }

    #[tokio::test]
    async fn test_search_form_keeps_repeated_keys() {
        let req = HttpRequest::builder()
            .method(Method::POST)
            .uri("/results")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("primary_type=Fire&primary_type=Water&name=pika"))
            .unwrap();

        let SearchForm(form) = SearchForm::from_request(req, &()).await.unwrap();
        assert_eq!(form.all("primary_type"), vec!["Fire", "Water"]);
        assert_eq!(form.first("name"), Some("pika"));
    }

    #[tokio::test]
    async fn test_search_form_rejects_wrong_content_type() {
        let req = HttpRequest::builder()
            .method(Method::POST)
            .uri("/results")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();

        let err = SearchForm::from_request(req, &()).await.unwrap_err();
        assert_eq!(err.code(), "FORM_PARSE_ERROR");
        assert_eq!(err.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
