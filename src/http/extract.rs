//! Request body decoding

use axum::{extract::rejection::JsonRejection, response::Json};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::AppError;

/// Decode a JSON body that must be an object. Derived struct deserializers
/// also accept arrays positionally, so those are rejected up front.
pub fn json_object<T: DeserializeOwned>(
    payload: Result<Json<Value>, JsonRejection>,
    message: &str,
) -> Result<T, AppError> {
    let invalid = || AppError::BadRequest(message.to_string());
    let Json(value) = payload.map_err(|_| invalid())?;
    if !value.is_object() {
        return Err(invalid());
    }
    serde_json::from_value(value).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Pair {
        a: u32,
        b: u32,
    }

    #[test]
    fn accepts_objects() {
        let pair: Pair = json_object(Ok(Json(json!({ "a": 1, "b": 2 }))), "bad").unwrap();
        assert_eq!((pair.a, pair.b), (1, 2));
    }

    #[test]
    fn rejects_arrays_and_scalars() {
        for body in [json!([1, 2]), json!(3), json!("a"), Value::Null] {
            let err = json_object::<Pair>(Ok(Json(body)), "bad").unwrap_err();
            assert!(matches!(err, AppError::BadRequest(msg) if msg == "bad"));
        }
    }
}
