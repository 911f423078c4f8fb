use serde_json::Value;

use crate::model::document::FieldMap;
use crate::model::fields::input_text;

/// Working copy of the extracted payload.
///
/// Keys and values start out exactly as the backend sent them; edits store
/// the raw input text and are coerced only when a save payload is built.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EditBuffer {
    fields: FieldMap,
}

impl EditBuffer {
    pub fn from_committed(extracted: Option<&FieldMap>) -> Self {
        Self {
            fields: extracted.cloned().unwrap_or_default(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn set(&mut self, key: &str, value: String) {
        self.fields.insert(key.to_string(), Value::String(value));
    }

    pub fn as_map(&self) -> &FieldMap {
        &self.fields
    }

    /// Whether any entry reads differently from the committed payload.
    /// Comparison is on the rendered input text, so retyping `85.5` over a
    /// committed `85.5` is not a change.
    pub fn differs_from(&self, committed: Option<&FieldMap>) -> bool {
        let empty = FieldMap::new();
        let committed = committed.unwrap_or(&empty);
        self.fields
            .keys()
            .chain(committed.keys())
            .any(|key| input_text(self.fields.get(key)) != input_text(committed.get(key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> FieldMap {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn retyping_same_value_is_not_dirty() {
        let committed = map(json!({ "percentage": 85.5, "student_name": "A" }));
        let mut buffer = EditBuffer::from_committed(Some(&committed));
        buffer.set("percentage", "85.5".to_string());
        assert!(!buffer.differs_from(Some(&committed)));

        buffer.set("student_name", "B".to_string());
        assert!(buffer.differs_from(Some(&committed)));
    }

    #[test]
    fn new_empty_key_is_not_dirty() {
        let mut buffer = EditBuffer::from_committed(None);
        buffer.set("gpa", String::new());
        assert!(!buffer.differs_from(None));
        buffer.set("gpa", "9".to_string());
        assert!(buffer.differs_from(None));
    }
}
