//! Typo detection for schema property keys
//!
//! A field spec only understands [`FIELD_SPEC_KEYS`]. A key such as
//! `"tooltp"` is silently ignored by everything downstream, so after loading
//! we look for keys that are close to, but not exactly, a known key.
//!
//! Detection works on the raw JSON document and is pure. Asking the user and
//! persisting the rewritten document is the caller's business.

use serde_json::{Map, Value};

use crate::schema::FIELD_SPEC_KEYS;

/// Minimum similarity ratio (0.0..=1.0) for a key to count as a typo.
pub const SIMILARITY_CUTOFF: f32 = 0.7;

/// A property key that looks like a misspelled known key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCorrection {
    pub category: String,
    pub field: String,
    pub found: String,
    pub suggested: &'static str,
}

impl KeyCorrection {
    /// `category.field.found`, for messages and logs.
    pub fn path(&self) -> String {
        format!("{}.{}.{}", self.category, self.field, self.found)
    }
}

/// Best close match for `key` among `valid`, or `None` when there is no
/// match above [`SIMILARITY_CUTOFF`] or the key is already exact.
pub fn closest_valid_key<'a>(key: &str, valid: &[&'a str]) -> Option<&'a str> {
    similar::get_close_matches(key, valid, 1, SIMILARITY_CUTOFF)
        .into_iter()
        .next()
        .filter(|candidate| *candidate != key)
}

/// Scan every field spec object of a schema document for misspelled keys.
///
/// Keys whose correction would overwrite an existing key in the same object
/// are not reported.
pub fn find_key_corrections(document: &Value) -> Vec<KeyCorrection> {
    let mut corrections = Vec::new();
    let Some(categories) = document.as_object() else {
        return corrections;
    };

    for (category, fields) in categories {
        let Some(fields) = fields.as_object() else {
            continue;
        };
        for (field, spec) in fields {
            let Some(spec) = spec.as_object() else {
                continue;
            };
            for key in spec.keys() {
                let Some(suggested) = closest_valid_key(key, &FIELD_SPEC_KEYS) else {
                    continue;
                };
                if spec.contains_key(suggested) {
                    tracing::warn!(
                        category = %category,
                        field = %field,
                        key = %key,
                        suggested,
                        "Possible typo not offered: target key already present"
                    );
                    continue;
                }
                corrections.push(KeyCorrection {
                    category: category.clone(),
                    field: field.clone(),
                    found: key.clone(),
                    suggested,
                });
            }
        }
    }

    corrections
}

fn spec_allows(spec: &Map<String, Value>, correction: &KeyCorrection) -> bool {
    spec.contains_key(&correction.found) && !spec.contains_key(correction.suggested)
}

/// Whether `correction` can still be applied to `document`: the misspelled
/// key is present and the corrected key is not taken yet.
pub fn correction_applies(document: &Value, correction: &KeyCorrection) -> bool {
    document
        .get(&correction.category)
        .and_then(|fields| fields.get(&correction.field))
        .and_then(Value::as_object)
        .is_some_and(|spec| spec_allows(spec, correction))
}

/// Rename the key in place, keeping its position. Returns `false` when the
/// document no longer has the key or the target key already exists.
pub fn apply_correction(document: &mut Value, correction: &KeyCorrection) -> bool {
    let Some(spec) = document
        .get_mut(&correction.category)
        .and_then(|fields| fields.get_mut(&correction.field))
        .and_then(Value::as_object_mut)
    else {
        return false;
    };

    if !spec_allows(spec, correction) {
        return false;
    }

    let old = std::mem::take(spec);
    *spec = old
        .into_iter()
        .map(|(key, value)| {
            if key == correction.found {
                (correction.suggested.to_string(), value)
            } else {
                (key, value)
            }
        })
        .collect::<Map<String, Value>>();
    true
}
