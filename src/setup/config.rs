use std::{collections::HashMap, fs, path::Path};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

/// Convenience struct for reading the orchestrator's network file.
#[derive(Deserialize)]
struct NetworkFile {
    nodes: Vec<NodeDescriptor>,
}

/// A running network participant, as registered by the orchestrator.
#[derive(Clone, Debug, Deserialize)]
pub struct NodeDescriptor {
    /// The name the node was launched under.
    pub name: String,
    /// The node's state-query (JSON-RPC) endpoint.
    pub rpc_url: String,
}

/// Registry of the running network's nodes, keyed by name.
#[derive(Debug)]
pub struct NetworkInfo {
    nodes_by_name: HashMap<String, NodeDescriptor>,
}

impl NetworkInfo {
    /// Reads the registry from the network file the orchestrator wrote when
    /// it spawned the network.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("unable to read network file {}", path.display()))?;
        let network: NetworkFile = toml::from_str(&contents)?;

        Ok(Self {
            nodes_by_name: network
                .nodes
                .into_iter()
                .map(|node| (node.name.clone(), node))
                .collect(),
        })
    }

    /// Looks a node up by name. An unknown name is fatal to the caller.
    pub fn node(&self, name: &str) -> Result<&NodeDescriptor> {
        self.nodes_by_name
            .get(name)
            .ok_or_else(|| anyhow!("node {name:?} not found in the network"))
    }
}
