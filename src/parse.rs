use serde::Deserialize;
use serde_json::Value;

use crate::error::ValidationError;

/// The parts of an item record this crate reads. Everything else is ignored.
///
/// Both fields stay untyped: a title or relation of an unexpected shape must not
/// fail the whole record, `extract_children` decides what is usable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub primary_title: Option<Value>,
    #[serde(default)]
    pub relations: Option<Value>,
}

impl Item {
    pub fn title(&self) -> Option<&str> {
        self.primary_title.as_ref().and_then(Value::as_str)
    }
}

/// One page of a compound object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Child {
    pub pid: String,
    pub order: u64,
}

impl Child {
    /// Page number zero-padded to 4 digits, e.g. `0023.jpg`.
    pub fn file_name(&self) -> String {
        page_file_name(self.order)
    }

    /// `None` unless the entry has a non-empty string `pid` and an `order` that is a
    /// non-negative integer or a string holding one.
    fn from_part(part: &Value) -> Option<Child> {
        let pid = part.get("pid")?.as_str().filter(|pid| !pid.is_empty())?;
        let order = match part.get("order")? {
            Value::Number(n) => n.as_u64()?,
            Value::String(s) => s.trim().parse().ok()?,
            _ => return None,
        };
        Some(Child {
            pid: pid.to_string(),
            order,
        })
    }
}

#[inline]
pub fn page_file_name(order: u64) -> String {
    format!("{order:04}.jpg")
}

/// `null`, `false`, `0`, `""`, `[]` and `{}` carry nothing.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// Pulls the `(pid, order)` pairs out of `relations.hasPart`, keeping API order.
/// Entries without a usable pid or order are dropped.
pub fn extract_children(item: &Item) -> Result<Vec<Child>, ValidationError> {
    let relations = match &item.relations {
        Some(r) if !is_blank(r) => r,
        _ => return Err(ValidationError::NoRelations),
    };

    let parts = match relations.get("hasPart") {
        Some(Value::Array(parts)) if !parts.is_empty() => parts,
        _ => return Err(ValidationError::NoChildren),
    };

    let children: Vec<Child> = parts.iter().filter_map(Child::from_part).collect();

    if children.is_empty() {
        return Err(ValidationError::NoValidChildren);
    }
    Ok(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: Value) -> Item {
        serde_json::from_value(value).unwrap()
    }

    fn pairs(children: &[Child]) -> Vec<(&str, u64)> {
        children.iter().map(|c| (c.pid.as_str(), c.order)).collect()
    }

    #[test]
    fn null_order_entry_is_dropped() {
        let record = item(json!({
            "relations": {"hasPart": [
                {"pid": "a:1", "order": 1},
                {"pid": "a:2", "order": null},
                {"pid": "a:3", "order": 2}
            ]}
        }));
        let children = extract_children(&record).unwrap();
        assert_eq!(pairs(&children), vec![("a:1", 1), ("a:3", 2)]);
        assert_eq!(children.len(), 2);
    }

    #[test]
    fn api_order_is_kept() {
        let record = item(json!({
            "relations": {"hasPart": [
                {"pid": "a:9", "order": 9},
                {"pid": "a:1", "order": 1},
                {"pid": "a:0", "order": 0}
            ]}
        }));
        let children = extract_children(&record).unwrap();
        assert_eq!(pairs(&children), vec![("a:9", 9), ("a:1", 1), ("a:0", 0)]);
    }

    #[test]
    fn missing_or_empty_relations() {
        for record in [
            json!({}),
            json!({"relations": null}),
            json!({"relations": {}}),
            json!({"relations": []}),
            json!({"relations": ""}),
        ] {
            assert_eq!(
                extract_children(&item(record)).unwrap_err(),
                ValidationError::NoRelations
            );
        }
    }

    #[test]
    fn missing_or_empty_has_part() {
        for record in [
            json!({"relations": {"isPartOf": []}}),
            json!({"relations": {"hasPart": null}}),
            json!({"relations": {"hasPart": []}}),
            json!({"relations": {"hasPart": {}}}),
            json!({"relations": {"hasPart": ""}}),
            json!({"relations": {"hasPart": {"pid": "a:1", "order": 1}}}),
            json!({"relations": ["hasPart"]}),
        ] {
            assert_eq!(
                extract_children(&item(record)).unwrap_err(),
                ValidationError::NoChildren
            );
        }
    }

    #[test]
    fn no_entry_has_both_fields() {
        let record = item(json!({
            "relations": {"hasPart": [
                {"pid": "a:1"},
                {"order": 2},
                {"pid": "", "order": 3},
                {"pid": null, "order": 4},
                {"pid": 5, "order": 5},
                {"pid": "a:6", "order": -1},
                {"pid": "a:7", "order": 2.5},
                {"pid": "a:8", "order": "eight"},
                "a:9"
            ]}
        }));
        assert_eq!(
            extract_children(&record).unwrap_err(),
            ValidationError::NoValidChildren
        );
    }

    #[test]
    fn extra_fields_are_ignored() {
        let record = item(json!({
            "pid": "bdr:1",
            "primary_title": "A Book",
            "relations": {"hasPart": [
                {"pid": "bdr:2", "order": 1, "primary_title": "Page 1", "thumbnail": "x"}
            ]}
        }));
        assert_eq!(record.title(), Some("A Book"));
        assert_eq!(pairs(&extract_children(&record).unwrap()), vec![("bdr:2", 1)]);
    }

    #[test]
    fn odd_title_does_not_spoil_the_record() {
        let record: Item = serde_json::from_str(
            r#"{"primary_title": ["x"], "relations": {"hasPart": [{"order": 1, "pid": "a:1"}]}}"#,
        )
        .unwrap();
        assert_eq!(record.title(), None);
        assert_eq!(pairs(&extract_children(&record).unwrap()), vec![("a:1", 1)]);
    }

    #[test]
    fn badly_typed_entry_is_dropped_beside_good_ones() {
        let record = item(json!({
            "relations": {"hasPart": [
                {"pid": "a:1", "order": 1},
                {"pid": "a:2", "order": "2"},
                {"pid": "a:3", "order": 3.0},
                {"pid": "a:4", "order": -4},
                {"pid": 5, "order": 5},
                {"pid": "a:6", "order": " 6 "}
            ]}
        }));
        let children = extract_children(&record).unwrap();
        assert_eq!(pairs(&children), vec![("a:1", 1), ("a:2", 2), ("a:6", 6)]);
        assert_eq!(children[1].file_name(), "0002.jpg");
    }

    #[test]
    fn file_names_are_zero_padded() {
        assert_eq!(page_file_name(1), "0001.jpg");
        assert_eq!(page_file_name(23), "0023.jpg");
        assert_eq!(page_file_name(0), "0000.jpg");
        assert_eq!(page_file_name(12345), "12345.jpg");
        let child = Child {
            pid: "a:1".into(),
            order: 7,
        };
        assert_eq!(child.file_name(), "0007.jpg");
    }
}
