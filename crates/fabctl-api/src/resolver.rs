// Resource resolution
//
// Turns human-readable names into controller-assigned identifiers by
// querying a kind's collection and filtering client-side. Uniqueness is
// enforced: zero matches and multiple matches are both errors.
//
// Dependency chains compose these calls: a child is never looked up by
// name alone once it has a parent scope, because names are only unique
// within their parent. The child's condition embeds the parent's
// resolved id as an additional filter field (e.g. a switch resolves by
// `name` + `logicNetworkId`).

use std::fmt;

use serde_json::{Map, Value};

use crate::error::Error;
use crate::registry::ResourceKind;
use crate::session::Session;

/// A field-equality filter over resource records.
///
/// Every named field must be present and exactly equal for a record to
/// match — no partial matching, no ordering semantics, no type coercion.
/// Conditions accumulate: start from a name and scope it with parent
/// identifiers via [`field`](Self::field).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Condition(Map<String, Value>);

impl Condition {
    /// An empty condition (matches every record).
    pub fn new() -> Self {
        Self::default()
    }

    /// The common case: filter by the record's `name` field.
    pub fn name(name: impl Into<String>) -> Self {
        Self::new().field("name", name.into())
    }

    /// Add one field-equality requirement, returning the accumulated
    /// condition.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `true` iff every field in the condition is present in `record`
    /// and exactly equal.
    pub fn matches(&self, record: &Value) -> bool {
        self.0
            .iter()
            .all(|(key, expected)| record.get(key) == Some(expected))
    }

    /// Keep exactly the records that match, preserving order.
    pub fn filter(&self, records: Vec<Value>) -> Vec<Value> {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

impl fmt::Display for Condition {
    /// Diagnostics print the searched name when one is present,
    /// otherwise the whole condition.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.get("name").and_then(Value::as_str) {
            Some(name) => f.write_str(name),
            None => f.write_str(&Value::Object(self.0.clone()).to_string()),
        }
    }
}

impl Session {
    /// Resolve a resource's id by its `name` field.
    pub async fn resolve_id_by_name(&self, kind: ResourceKind, name: &str) -> Result<String, Error> {
        self.resolve_id_by_condition(kind, &Condition::name(name)).await
    }

    /// Resolve a resource's id by an arbitrary condition.
    ///
    /// Queries the kind's collection, filters, then enforces the
    /// uniqueness rule: zero matches is [`Error::NotFound`], more than
    /// one is [`Error::Ambiguous`], exactly one yields that record's
    /// `id` field.
    pub async fn resolve_id_by_condition(
        &self,
        kind: ResourceKind,
        condition: &Condition,
    ) -> Result<String, Error> {
        let records = self.query(kind, Some(condition)).await?;

        match records.as_slice() {
            [] => Err(Error::NotFound {
                kind,
                what: condition.to_string(),
            }),
            [record] => record
                .get("id")
                .and_then(Value::as_str)
                .map(str::to_owned)
                .ok_or_else(|| Error::Deserialization {
                    message: format!("{kind} record has no 'id' field"),
                    body: record.to_string(),
                }),
            _ => Err(Error::Ambiguous {
                kind,
                what: condition.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Condition;

    #[test]
    fn matches_requires_every_field_exactly() {
        let condition = Condition::name("vpc1").field("tenantId", "t-1");

        assert!(condition.matches(&json!({"name": "vpc1", "tenantId": "t-1", "extra": 7})));
        assert!(!condition.matches(&json!({"name": "vpc1", "tenantId": "t-2"})));
        assert!(!condition.matches(&json!({"name": "vpc10", "tenantId": "t-1"})));
        // A missing field is a non-match, not an error.
        assert!(!condition.matches(&json!({"name": "vpc1"})));
    }

    #[test]
    fn no_partial_string_matching() {
        let condition = Condition::name("sw");
        assert!(!condition.matches(&json!({"name": "sw1"})));
        assert!(!condition.matches(&json!({"name": "switch"})));
        assert!(condition.matches(&json!({"name": "sw"})));
    }

    #[test]
    fn numeric_fields_compare_by_value() {
        let condition = Condition::new().field("vlan", 100);
        assert!(condition.matches(&json!({"vlan": 100})));
        assert!(!condition.matches(&json!({"vlan": 200})));
        // "100" (string) is not 100 (number).
        assert!(!condition.matches(&json!({"vlan": "100"})));
    }

    #[test]
    fn filter_is_exact_subset_in_order() {
        let records = vec![
            json!({"id": "a", "name": "sw1", "logicNetworkId": "n-1"}),
            json!({"id": "b", "name": "sw1", "logicNetworkId": "n-2"}),
            json!({"id": "c", "name": "sw2", "logicNetworkId": "n-1"}),
        ];

        let condition = Condition::name("sw1").field("logicNetworkId", "n-1");
        let filtered = condition.filter(records.clone());
        assert_eq!(filtered, vec![records[0].clone()]);

        let empty = Condition::new();
        assert_eq!(empty.filter(records.clone()), records);
    }

    #[test]
    fn display_prefers_the_name_field() {
        assert_eq!(Condition::name("vpc1").to_string(), "vpc1");

        let anonymous = Condition::new().field("cidr", "10.0.0.0/24");
        assert_eq!(anonymous.to_string(), r#"{"cidr":"10.0.0.0/24"}"#);
    }
}
