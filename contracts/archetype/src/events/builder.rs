use near_sdk::serde_json::{json, Map, Value};
use near_sdk::{env, AccountId};

use super::{PREFIX, STANDARD, VERSION};

/// NEP-297 `EVENT_JSON` emitter for archetype events.
pub(crate) struct EventBuilder {
    event: &'static str,
    data: Map<String, Value>,
}

impl EventBuilder {
    pub fn new(event: &'static str, action: &str, actor_id: &AccountId) -> Self {
        let mut data = Map::new();
        data.insert("action".into(), json!(action));
        data.insert("actor_id".into(), json!(actor_id));
        Self { event, data }
    }

    pub fn field<T: serde::Serialize>(mut self, name: &str, value: T) -> Self {
        self.data.insert(name.into(), json!(value));
        self
    }

    pub fn emit(self) {
        let payload = json!({
            "standard": STANDARD,
            "version": VERSION,
            "event": self.event,
            "data": [Value::Object(self.data)],
        });
        env::log_str(&format!("{}{}", PREFIX, payload));
    }
}

/// NEP-171 interop envelope (`standard: "nep171"`), used for mint events so
/// generic indexers pick up token issuance.
pub(crate) struct Nep171Event {
    event: &'static str,
    version: &'static str,
    data: Map<String, Value>,
}

impl Nep171Event {
    pub fn new(event: &'static str, version: &'static str) -> Self {
        Self {
            event,
            version,
            data: Map::new(),
        }
    }

    pub fn field<T: serde::Serialize>(mut self, name: &str, value: T) -> Self {
        self.data.insert(name.into(), json!(value));
        self
    }

    pub fn emit(self) {
        let payload = json!({
            "standard": "nep171",
            "version": self.version,
            "event": self.event,
            "data": [Value::Object(self.data)],
        });
        env::log_str(&format!("{}{}", PREFIX, payload));
    }
}
