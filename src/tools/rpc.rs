use anyhow::Result;
use async_trait::async_trait;
use reqwest::{
    header::{ACCEPT, CONTENT_TYPE},
    Client, RequestBuilder,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    state::{MessagingStateSnapshot, MessagingStateSource},
    tools::constants::MESSAGING_STATE_METHOD,
};

const JSON_RPC_VERSION: &str = "2.0";

/// JSON-RPC client for a single node's state-query endpoint, held for the
/// lifetime of a wait.
pub struct StateClient {
    rpc_url: String,
    client: Client,
}

impl StateClient {
    pub fn new(rpc_url: &str) -> Self {
        Self {
            rpc_url: rpc_url.to_owned(),
            client: Client::new(),
        }
    }

    async fn query(&self, method: &str) -> Result<Value> {
        let response = self
            .build_json_request(&build_rpc_request(method))
            .send()
            .await?;
        let response: RpcResponse = response.error_for_status()?.json().await?;

        Ok(response.result)
    }

    fn build_json_request(&self, request: &impl Serialize) -> RequestBuilder {
        self.client
            .post(&self.rpc_url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(request)
    }
}

#[async_trait]
impl MessagingStateSource for StateClient {
    async fn messaging_state(&self) -> Result<Option<MessagingStateSnapshot>> {
        let result = self.query(MESSAGING_STATE_METHOD).await?;

        decode_messaging_state(result)
    }
}

/// Maps the node's answer onto the snapshot type. The node answers with
/// `null` until the chain has recorded a snapshot; anything else must decode.
fn decode_messaging_state(result: Value) -> Result<Option<MessagingStateSnapshot>> {
    if result.is_null() {
        return Ok(None);
    }

    Ok(Some(serde_json::from_value(result)?))
}

fn build_rpc_request(method: &str) -> RpcRequest {
    RpcRequest {
        jsonrpc: JSON_RPC_VERSION,
        id: String::from("1"),
        method: String::from(method),
        params: Vec::new(),
    }
}

#[derive(Serialize)]
struct RpcRequest {
    jsonrpc: &'static str,
    id: String,
    method: String,
    params: Vec<Value>,
}

#[derive(Deserialize)]
struct RpcResponse {
    result: Value,
}
