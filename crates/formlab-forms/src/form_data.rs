//! Decoding of `application/x-www-form-urlencoded` bodies.
//!
//! Keys are field paths (`contact.channel`, `favoriteGames[0].id`), so a
//! flat body decodes into the same nested shape a JSON payload has. All
//! leaf values are strings; [`Schema::coerce`](crate::Schema::coerce)
//! converts them afterwards.
//!
//! List indices only order entries. Gaps are closed after decoding, so
//! `favoriteGames[3].id=g1` alone yields a one-entry list, the same as
//! `favoriteGames[0].id=g1`.

use serde_json::{Map, Value};

use crate::error::{FormError, Result};
use crate::path::{FieldPath, PathSegment};

/// Highest list position accepted in a form-data key.
pub const MAX_LIST_INDEX: usize = 1024;

/// Decodes an urlencoded body into a JSON object.
///
/// # Example
///
/// ```
/// use formlab_forms::decode_form_data;
/// use serde_json::json;
///
/// let value = decode_form_data("region=EU&favoriteGames%5B0%5D.id=g1").unwrap();
/// assert_eq!(value, json!({"region": "EU", "favoriteGames": [{"id": "g1"}]}));
/// ```
pub fn decode_form_data(body: &str) -> Result<Value> {
    let mut root = Value::Object(Map::new());

    for pair in body.split('&').filter(|pair| !pair.is_empty()) {
        let mut parts = pair.splitn(2, '=');
        let key = percent_decode(parts.next().unwrap_or_default())?;
        let value = percent_decode(parts.next().unwrap_or_default())?;
        let path = FieldPath::parse(&key)?;
        insert(&mut root, path.segments(), Value::String(value), &key)?;
    }

    compact(&mut root);
    Ok(root)
}

/// Drops the holes sparse indices left in lists, keeping index order.
///
/// Decoded leaves are always strings, so `Null` only ever marks a hole.
fn compact(value: &mut Value) {
    match value {
        Value::Array(items) => {
            items.retain(|item| !item.is_null());
            items.iter_mut().for_each(compact);
        }
        Value::Object(map) => map.values_mut().for_each(compact),
        _ => {}
    }
}

fn insert(target: &mut Value, segments: &[PathSegment], value: Value, key: &str) -> Result<()> {
    let Some((first, rest)) = segments.split_first() else {
        *target = value;
        return Ok(());
    };

    let conflict = || FormError::ParseError(format!("conflicting values for '{key}'"));

    match first {
        PathSegment::Key(name) => {
            if target.is_null() {
                *target = Value::Object(Map::new());
            }
            let Value::Object(map) = target else {
                return Err(conflict());
            };
            let slot = map.entry(name.clone()).or_insert(Value::Null);
            insert(slot, rest, value, key)
        }
        PathSegment::Index(index) => {
            if *index > MAX_LIST_INDEX {
                return Err(FormError::ParseError(format!(
                    "list index {index} in '{key}' exceeds {MAX_LIST_INDEX}"
                )));
            }
            if target.is_null() {
                *target = Value::Array(Vec::new());
            }
            let Value::Array(items) = target else {
                return Err(conflict());
            };
            if items.len() <= *index {
                items.resize(*index + 1, Value::Null);
            }
            match items.get_mut(*index) {
                Some(slot) => insert(slot, rest, value, key),
                None => Err(conflict()),
            }
        }
    }
}

fn percent_decode(s: &str) -> Result<String> {
    let mut bytes = Vec::with_capacity(s.len());
    let mut input = s.bytes();

    while let Some(b) = input.next() {
        match b {
            b'+' => bytes.push(b' '),
            b'%' => {
                let hi = input.next().and_then(hex_value);
                let lo = input.next().and_then(hex_value);
                match (hi, lo) {
                    (Some(hi), Some(lo)) => bytes.push((hi << 4) | lo),
                    _ => {
                        return Err(FormError::ParseError(format!(
                            "invalid percent-encoding in '{s}'"
                        )))
                    }
                }
            }
            other => bytes.push(other),
        }
    }

    String::from_utf8(bytes)
        .map_err(|_| FormError::ParseError(format!("'{s}' does not decode to UTF-8")))
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_nested_keys() {
        let value = decode_form_data(
            "email=a%40b.io&contact.channel=email&contact.marketingOptIn=on\
             &favoriteGames[1].id=g2&favoriteGames[0].id=g1&displayName=Jane+Doe",
        )
        .unwrap();
        assert_eq!(
            value,
            json!({
                "email": "a@b.io",
                "displayName": "Jane Doe",
                "contact": {"channel": "email", "marketingOptIn": "on"},
                "favoriteGames": [{"id": "g1"}, {"id": "g2"}],
            })
        );
    }

    #[test]
    fn test_sparse_indices_are_compacted() {
        let value =
            decode_form_data("favoriteGames[7].id=g2&favoriteGames[3].id=g1&tags[2]=x").unwrap();
        assert_eq!(
            value,
            json!({
                "favoriteGames": [{"id": "g1"}, {"id": "g2"}],
                "tags": ["x"],
            })
        );
    }

    #[test]
    fn test_percent_decoding_of_high_nibble() {
        let value = decode_form_data("a=%7E%41").unwrap();
        assert_eq!(value, json!({"a": "~A"}));
    }

    #[test]
    fn test_last_value_wins() {
        let value = decode_form_data("region=EU&region=US").unwrap();
        assert_eq!(value, json!({"region": "US"}));
    }

    #[test]
    fn test_utf8_values() {
        let value = decode_form_data("displayName=J%C3%BCrgen").unwrap();
        assert_eq!(value, json!({"displayName": "Jürgen"}));
    }

    #[test]
    fn test_conflicting_shapes() {
        assert!(matches!(
            decode_form_data("eu=1&eu.gdprConsent=on"),
            Err(FormError::ParseError(_))
        ));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(decode_form_data("a=%zz").is_err());
        assert!(decode_form_data("a..b=1").is_err());
        assert!(decode_form_data("list[5000].id=1").is_err());
    }
}
