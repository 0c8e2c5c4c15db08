//! JSON body parsing helpers.

use salvo::Request;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::ApiError;

const MALFORMED_BODY: &str = "Request body must be a JSON object of string fields.";

pub(crate) trait RequestExt {
    /// `application/json` or any `application/*+json` media type.
    fn has_json_content_type(&self) -> bool;

    /// Parse the body as a JSON object, treating `null` as `{}`.
    async fn json_object<T: DeserializeOwned>(&mut self) -> Result<T, ApiError>;
}

impl RequestExt for Request {
    fn has_json_content_type(&self) -> bool {
        self.content_type().is_some_and(|mime| {
            mime.type_().as_str().eq_ignore_ascii_case("application")
                && (mime.subtype().as_str().eq_ignore_ascii_case("json")
                    || mime
                        .suffix()
                        .is_some_and(|suffix| suffix.as_str().eq_ignore_ascii_case("json")))
        })
    }

    async fn json_object<T: DeserializeOwned>(&mut self) -> Result<T, ApiError> {
        if !self.has_json_content_type() {
            return Err(ApiError::UnsupportedMediaType);
        }

        let payload = self.payload().await.map_err(|error| {
            debug!("failed to read request body: {error}");

            ApiError::MalformedBody(MALFORMED_BODY.to_string())
        })?;

        let value = match serde_json::from_slice::<Value>(payload) {
            Ok(Value::Null) => Value::Object(Map::new()),
            Ok(value @ Value::Object(_)) => value,
            Ok(_) => return Err(ApiError::MalformedBody(MALFORMED_BODY.to_string())),
            Err(error) => {
                debug!("request body is not JSON: {error}");

                return Err(ApiError::MalformedBody(MALFORMED_BODY.to_string()));
            }
        };

        serde_json::from_value(value).map_err(|error| {
            debug!("request body has unexpected field types: {error}");

            ApiError::MalformedBody(MALFORMED_BODY.to_string())
        })
    }
}
