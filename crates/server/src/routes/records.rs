use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};
use service::Record;

use crate::errors::ApiError;
use crate::routes::SharedStore;

/// List every record of the resource.
pub async fn list<R: Record>(State(store): State<SharedStore<R>>) -> Json<Vec<R>> {
    Json(store.list().await)
}

/// Fetch one record by id.
pub async fn get_one<R: Record>(
    State(store): State<SharedStore<R>>,
    Path(id): Path<String>,
) -> Result<Json<R>, ApiError> {
    let record = store.get(&id).await?;
    Ok(Json(record))
}

/// Create a record. The body is decoded as JSON whatever its content type;
/// any `id` it carries is replaced by the store.
pub async fn create<R: Record>(
    State(store): State<SharedStore<R>>,
    body: Bytes,
) -> Result<(StatusCode, Json<R>), ApiError> {
    let candidate: R = decode_candidate(&body)?;
    let created = store.insert(candidate).await;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Decode the first JSON value of `body` into a zero-valued record.
///
/// Bytes after the first value are ignored, `null` leaves the record at its
/// defaults, and object keys match field names case-insensitively.
pub fn decode_candidate<R: Record>(body: &[u8]) -> Result<R, ApiError> {
    let malformed = |e: serde_json::Error| ApiError::MalformedInput(e.to_string());

    let value = match serde_json::Deserializer::from_slice(body).into_iter::<Value>().next() {
        Some(value) => value.map_err(malformed)?,
        None => return Err(ApiError::MalformedInput("EOF".into())),
    };

    match value {
        Value::Null => Ok(R::default()),
        Value::Object(map) => serde_json::from_value(Value::Object(fold_keys(map))).map_err(malformed),
        other => serde_json::from_value(other).map_err(malformed),
    }
}

/// Lowercase object keys; a key already in lowercase wins over other spellings of it.
fn fold_keys(map: Map<String, Value>) -> Map<String, Value> {
    let (exact, other): (Vec<_>, Vec<_>) = map.into_iter().partition(|(k, _)| *k == k.to_lowercase());
    let mut folded: Map<String, Value> = exact.into_iter().collect();
    for (k, v) in other {
        folded.entry(k.to_lowercase()).or_insert(v);
    }
    folded
}

#[cfg(test)]
mod tests {
    use service::{Product, User};

    use super::*;

    fn decode<R: Record>(body: &str) -> Result<R, String> {
        decode_candidate::<R>(body.as_bytes()).map_err(|e| e.to_string())
    }

    #[test]
    fn null_body_is_a_zero_record() {
        assert_eq!(decode::<Product>("null"), Ok(Product::default()));
        assert_eq!(decode::<User>("  null\n"), Ok(User::default()));
    }

    #[test]
    fn trailing_bytes_after_first_value_are_ignored() {
        let p = decode::<Product>(r#"{"name":"a"} x"#);
        assert_eq!(p.map(|p| p.name), Ok("a".to_string()));
        let u = decode::<User>(r#"{"name":"b"}{"name":"c"}"#);
        assert_eq!(u.map(|u| u.name), Ok("b".to_string()));
    }

    #[test]
    fn keys_match_case_insensitively() {
        let p = decode::<Product>(r#"{"NAME":"Lamp","Price":12.5,"Description":"desk"}"#);
        assert_eq!(
            p,
            Ok(Product { id: String::new(), name: "Lamp".into(), description: "desk".into(), price: 12.5 })
        );
        let u = decode::<User>(r#"{"Name":"upper","name":"lower"}"#);
        assert_eq!(u.map(|u| u.name), Ok("lower".to_string()));
    }

    #[test]
    fn empty_and_malformed_bodies_are_rejected() {
        assert_eq!(decode::<Product>(""), Err("EOF".to_string()));
        assert_eq!(decode::<Product>("   "), Err("EOF".to_string()));
        assert!(decode::<Product>("not-json").is_err());
        assert!(decode::<Product>(r#"{"price":"free"}"#).is_err());
        assert!(decode::<Product>(r#"{"name":"a""#).is_err());
        assert!(decode::<User>("42").is_err());
    }
}
