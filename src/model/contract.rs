//! Contract interfaces and script execution results

use serde::Serialize;
use serde_json::Value;

use super::Event;
use crate::decode::{DecodeError, Fields, FromNode};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
}

impl FromNode for AbiParameter {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            name: f.string("name")?,
            param_type: f.string("type")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiMethod {
    pub name: String,
    pub return_type: String,
    pub parameters: Vec<AbiParameter>,
}

impl FromNode for AbiMethod {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            name: f.string("name")?,
            return_type: f.string("returnType")?,
            parameters: f.list("parameters")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiContract {
    pub name: String,
    pub methods: Vec<AbiMethod>,
}

impl FromNode for AbiContract {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            name: f.string("name")?,
            methods: f.list("methods")?,
        })
    }
}

/// A deployed contract with its script and ABI
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub address: String,
    pub name: String,
    pub script: String,
    pub methods: Vec<AbiMethod>,
}

impl Contract {
    pub fn method(&self, name: &str) -> Option<&AbiMethod> {
        self.methods.iter().find(|m| m.name == name)
    }
}

impl FromNode for Contract {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            address: f.string("address")?,
            name: f.string("name")?,
            script: f.string("script")?,
            methods: f.list("methods")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Oracle {
    pub url: String,
    pub content: String,
}

impl FromNode for Oracle {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            url: f.string("url")?,
            content: f.string("content")?,
        })
    }
}

/// Outcome of a read-only script invocation
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Script {
    pub events: Vec<Event>,
    /// First value left on the stack, hex encoded
    pub result: String,
    pub results: Vec<String>,
    pub oracles: Vec<Oracle>,
}

impl FromNode for Script {
    fn from_node(node: &Value) -> Result<Self, DecodeError> {
        let f = Fields::of(node)?;
        Ok(Self {
            events: f.list("events")?,
            result: f.string("result")?,
            results: f.list("results")?,
            oracles: f.list("oracles")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EventKind;
    use serde_json::json;

    #[test]
    fn test_contract_methods_and_parameters() {
        let node = json!({
            "address": "S1",
            "name": "exchange",
            "script": "",
            "methods": [
                {
                    "name": "OpenOTCOrder",
                    "returnType": "None",
                    "parameters": [
                        { "name": "from", "type": "Object" },
                        { "name": "amount", "type": "Number" }
                    ]
                },
                { "name": "GetOTC", "returnType": "Array" }
            ]
        });

        let contract = Contract::from_node(&node).unwrap();
        let open = contract.method("OpenOTCOrder").unwrap();
        assert_eq!(open.parameters[1].param_type, "Number");
        assert!(contract.method("GetOTC").unwrap().parameters.is_empty());
    }

    #[test]
    fn test_script_results() {
        let node = json!({
            "events": [{ "address": "P1", "kind": "GasEscrow", "data": "" }],
            "result": "0401",
            "results": ["0401", "0402"],
            "oracles": [{ "url": "price://SOUL", "content": "0.5" }]
        });
        let script = Script::from_node(&node).unwrap();
        assert_eq!(script.events[0].kind, EventKind::GasEscrow);
        assert_eq!(script.results.len(), 2);
        assert_eq!(script.oracles[0].url, "price://SOUL");
    }
}
