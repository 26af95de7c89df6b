use std::fmt;

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::contract::ValidationError;
use crate::storage_keys::ITEM_ID_ATTRIBUTE;

pub const ITEMS_COLLECTION_PATH: &str = "/items";

/// Server-assigned item identifier. Minted once per create and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(String);

impl ItemId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemRoute {
    Create,
    Read { id: String },
    Unsupported,
}

/// Resolves the HTTP method and path to an item operation. The read id comes
/// from the `id` path parameter when the front door supplies one, otherwise
/// from the path segment after `/items/`.
pub fn resolve_item_route(method: &str, path: &str, path_id: Option<&str>) -> ItemRoute {
    if method.eq_ignore_ascii_case("POST") && path == ITEMS_COLLECTION_PATH {
        return ItemRoute::Create;
    }

    if method.eq_ignore_ascii_case("GET") {
        if let Some(segment) = path
            .strip_prefix(ITEMS_COLLECTION_PATH)
            .and_then(|rest| rest.strip_prefix('/'))
        {
            let id = path_id.unwrap_or(segment).trim();
            if !id.is_empty() && !id.contains('/') {
                return ItemRoute::Read { id: id.to_string() };
            }
        }
    }

    ItemRoute::Unsupported
}

/// Parses a create body and stamps it with `id`, replacing any client value.
pub fn prepare_new_item(body: &str, id: &ItemId) -> Result<Map<String, Value>, ValidationError> {
    let payload: Value = serde_json::from_str(body)
        .map_err(|error| ValidationError::new(format!("Malformed JSON body: {error}")))?;

    let Value::Object(mut item) = payload else {
        return Err(ValidationError::new("Request body must be a JSON object"));
    };

    item.insert(
        ITEM_ID_ATTRIBUTE.to_string(),
        Value::String(id.as_str().to_string()),
    );
    Ok(item)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        let first = ItemId::generate();
        let second = ItemId::generate();
        assert_ne!(first, second);
        assert_eq!(first.as_str().len(), 36);
    }

    #[test]
    fn routes_create_and_read() {
        assert_eq!(resolve_item_route("POST", "/items", None), ItemRoute::Create);
        assert_eq!(
            resolve_item_route("GET", "/items/abc", Some("abc")),
            ItemRoute::Read {
                id: "abc".to_string()
            }
        );
        assert_eq!(
            resolve_item_route("get", "/items/from-path", None),
            ItemRoute::Read {
                id: "from-path".to_string()
            }
        );
    }

    #[test]
    fn rejects_other_method_path_combinations() {
        assert_eq!(resolve_item_route("GET", "/items", None), ItemRoute::Unsupported);
        assert_eq!(resolve_item_route("GET", "/items/", None), ItemRoute::Unsupported);
        assert_eq!(resolve_item_route("POST", "/items/abc", None), ItemRoute::Unsupported);
        assert_eq!(resolve_item_route("DELETE", "/items/abc", None), ItemRoute::Unsupported);
        assert_eq!(resolve_item_route("GET", "/itemsabc", None), ItemRoute::Unsupported);
        assert_eq!(resolve_item_route("GET", "/items/a/b", None), ItemRoute::Unsupported);
    }

    #[test]
    fn prepare_new_item_overwrites_client_id() {
        let id = ItemId::generate();
        let item = prepare_new_item(r#"{"name":"widget","id":"client-chosen"}"#, &id)
            .expect("object body should be accepted");

        assert_eq!(item["id"], json!(id.as_str()));
        assert_eq!(item["name"], json!("widget"));
    }

    #[test]
    fn prepare_new_item_rejects_non_objects() {
        let id = ItemId::generate();
        let error = prepare_new_item("[1, 2]", &id).expect_err("array body should fail");
        assert_eq!(error.message(), "Request body must be a JSON object");

        let error = prepare_new_item("{not json", &id).expect_err("bad json should fail");
        assert!(error.message().starts_with("Malformed JSON body"));
    }
}
