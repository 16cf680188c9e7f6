mod id;


pub use id::{IdGenerator, UuidV4};

use serde_json::{Map, Value};
use tracing::debug;

/// A single item: field name to value, in insertion order
pub type Item = Map<String, Value>;

/// Field holding the item identifier
pub const UID_FIELD: &str = "uid";

/// Field holding the item gender
pub const GENDER_FIELD: &str = "gender";

/// Value used when an item carries no gender at all
pub const UNKNOWN_GENDER: &str = "unknown";

/// Standardize items: lowercase field names, add `uid` and `gender`
///
/// Returns new items and leaves the input untouched.
///
/// # Rules
/// - A cased field (e.g. `Name`) is stored under its lowercase name and
///   overwrites any lowercase field of the same name; among several cased
///   variants the last one wins
/// - A blank `uid` is replaced with a generated identifier
/// - A blank `gender` falls back to the original `Gender` field, then `"unknown"`
pub fn standardize<G: IdGenerator + ?Sized>(items: &[Item], ids: &mut G) -> Vec<Item> {
    let standardized: Vec<Item> = items
        .iter()
        .map(|item| standardize_item(item, &mut *ids))
        .collect();

    debug!(items = standardized.len(), "standardized items");

    standardized
}

/// Standardize a single item
pub fn standardize_item<G: IdGenerator + ?Sized>(item: &Item, ids: &mut G) -> Item {
    let mut out = Item::new();

    for (key, value) in item {
        let lower = key.to_lowercase();
        // Lowercase names only lose to a cased variant written earlier
        if *key != lower || !out.contains_key(&lower) {
            out.insert(lower, value.clone());
        }
    }

    if is_blank(out.get(UID_FIELD)) {
        out.insert(UID_FIELD.to_string(), Value::String(ids.new_id()));
    }

    if is_blank(out.get(GENDER_FIELD)) {
        let gender = item
            .get("Gender")
            .filter(|value| !is_blank(Some(*value)))
            .cloned()
            .unwrap_or_else(|| Value::String(UNKNOWN_GENDER.to_string()));
        out.insert(GENDER_FIELD.to_string(), gender);
    }

    out
}

/// Whether a field is missing or holds a falsy value
///
/// `null`, `false`, zero and the empty string all count as blank.
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(flag)) => !flag,
        Some(Value::Number(number)) => number.as_f64() == Some(0.0),
        Some(Value::String(text)) => text.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => false,
    }
}
