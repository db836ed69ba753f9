//! `$dotted.path` reference substitution over JSON documents.
//!
//! The UI spec references tokens and copy with strings like `"$copy.title"`
//! or `"$spacing.phoneWidth"`. Resolution happens eagerly at load time so a
//! broken spec fails the build instead of rendering garbage.

use serde_json::Value;

use crate::error::{CuelightError, CuelightResult};

/// Walks `value` structurally and substitutes every `$`-prefixed string with
/// the value found at that dotted key path inside `ctx`.
///
/// Objects and arrays recurse; non-reference scalars pass through unchanged.
/// An unresolvable path fails with an error naming the original reference.
pub fn resolve_refs(value: &Value, ctx: &Value) -> CuelightResult<Value> {
    match value {
        Value::String(s) if s.starts_with('$') => lookup_path(s, ctx).cloned(),
        Value::Array(items) => items
            .iter()
            .map(|v| resolve_refs(v, ctx))
            .collect::<CuelightResult<Vec<_>>>()
            .map(Value::Array),
        Value::Object(map) => {
            let mut out = serde_json::Map::with_capacity(map.len());
            for (k, v) in map {
                out.insert(k.clone(), resolve_refs(v, ctx)?);
            }
            Ok(Value::Object(out))
        }
        other => Ok(other.clone()),
    }
}

/// Ordered key-sequence traversal of `ctx` for one `$a.b.c` reference.
fn lookup_path<'a>(reference: &str, ctx: &'a Value) -> CuelightResult<&'a Value> {
    let mut acc = ctx;
    for key in reference[1..].split('.') {
        acc = acc
            .as_object()
            .and_then(|m| m.get(key))
            .ok_or_else(|| CuelightError::resolve(format!("unresolved ref: {reference}")))?;
    }
    Ok(acc)
}

/// Resolution context: tokens flattened to top-level keys, copy under `copy`.
pub fn merge_context(tokens: &Value, copy: &Value) -> Value {
    let mut ctx = serde_json::Map::new();
    if let Some(map) = tokens.as_object() {
        for (k, v) in map {
            ctx.insert(k.clone(), v.clone());
        }
    }
    ctx.insert("copy".to_string(), copy.clone());
    Value::Object(ctx)
}
