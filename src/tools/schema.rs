// src/tools/schema.rs

use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};

use super::error::ToolError;

/// Primitive shape a parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    String,
    /// An array of strings.
    StringArray,
}

impl ParamType {
    fn describe(self) -> &'static str {
        match self {
            ParamType::String => "a string",
            ParamType::StringArray => "an array of strings",
        }
    }

    fn accepts(self, value: &Value) -> bool {
        match self {
            ParamType::String => value.is_string(),
            ParamType::StringArray => value
                .as_array()
                .map(|items| items.iter().all(Value::is_string))
                .unwrap_or(false),
        }
    }
}

/// One declared parameter of a tool.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamType,
    pub description: &'static str,
    pub required: bool,
    pub allowed: Option<&'static [&'static str]>,
    pub default: Option<Value>,
}

impl ParamSpec {
    pub fn required(name: &'static str, kind: ParamType, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
            required: true,
            allowed: None,
            default: None,
        }
    }

    pub fn optional(name: &'static str, kind: ParamType, description: &'static str) -> Self {
        Self {
            required: false,
            ..Self::required(name, kind, description)
        }
    }

    pub fn one_of(mut self, allowed: &'static [&'static str]) -> Self {
        self.allowed = Some(allowed);
        self
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    fn check(&self, value: &Value) -> Result<(), ToolError> {
        if !self.kind.accepts(value) {
            return Err(ToolError::wrong_type(self.name, self.kind.describe()));
        }
        if let (Some(allowed), Some(s)) = (self.allowed, value.as_str()) {
            if !allowed.contains(&s) {
                return Err(ToolError::not_allowed(self.name, s, allowed));
            }
        }
        Ok(())
    }

    fn to_json(&self) -> Value {
        let mut prop = Map::new();
        match self.kind {
            ParamType::String => {
                prop.insert("type".into(), json!("string"));
            }
            ParamType::StringArray => {
                prop.insert("type".into(), json!("array"));
                prop.insert("items".into(), json!({ "type": "string" }));
            }
        }
        if let Some(allowed) = self.allowed {
            prop.insert("enum".into(), json!(allowed));
        }
        if let Some(default) = &self.default {
            prop.insert("default".into(), default.clone());
        }
        prop.insert("description".into(), json!(self.description));
        Value::Object(prop)
    }
}

/// Declared arguments of a tool, in declaration order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InputSchema {
    params: Vec<ParamSpec>,
}

impl InputSchema {
    pub fn new(params: Vec<ParamSpec>) -> Self {
        Self { params }
    }

    pub fn param(&self, name: &str) -> Option<&ParamSpec> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn required_fields(&self) -> Vec<&'static str> {
        self.params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name)
            .collect()
    }

    /// Checks `args` against the declared parameters and returns the declared
    /// fields with defaults filled in. Undeclared fields are dropped.
    ///
    /// A `null` value counts as absent.
    pub fn validate(&self, args: &Map<String, Value>) -> Result<Map<String, Value>, ToolError> {
        let mut validated = Map::new();
        for param in &self.params {
            match args.get(param.name).filter(|v| !v.is_null()) {
                Some(value) => {
                    param.check(value)?;
                    validated.insert(param.name.to_string(), value.clone());
                }
                None if param.required => return Err(ToolError::missing(param.name)),
                None => {
                    if let Some(default) = &param.default {
                        validated.insert(param.name.to_string(), default.clone());
                    }
                }
            }
        }
        Ok(validated)
    }

    /// JSON Schema object as advertised in `tools/list`.
    pub fn to_json(&self) -> Value {
        let properties: Map<String, Value> = self
            .params
            .iter()
            .map(|p| (p.name.to_string(), p.to_json()))
            .collect();
        let mut schema = json!({
            "type": "object",
            "properties": properties,
        });
        let required = self.required_fields();
        if !required.is_empty() {
            schema["required"] = json!(required);
        }
        schema
    }
}

impl Serialize for InputSchema {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
