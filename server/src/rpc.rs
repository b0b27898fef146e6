//! Minimal JSON-RPC client for read-only contract calls

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

use crate::abi::{selector, Address, ReturnData};
use crate::error::ApiError;

/// Deadline for a single contract read; slower than this reports the
/// service (not the request) as unavailable.
pub const CALL_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Deserialize)]
struct RpcResponse {
    result: Option<String>,
    error: Option<RpcErrorBody>,
}

#[derive(Deserialize)]
struct RpcErrorBody {
    message: String,
}

/// `eth_call` a zero-argument view function and decode the return data
pub fn eth_call(rpc_url: &str, contract: Address, signature: &str) -> Result<ReturnData, ApiError> {
    let data = format!("0x{}", hex::encode(selector(signature)));
    let body = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "eth_call",
        "params": [
            { "to": contract.to_checksum(), "data": data },
            "latest"
        ],
    });

    let agent = ureq::AgentBuilder::new().timeout(CALL_TIMEOUT).build();
    let response = agent
        .post(rpc_url)
        .send_json(body)
        .map_err(classify_transport_error)?;
    let parsed: RpcResponse = response
        .into_json()
        .map_err(|e| ApiError::rpc(format!("malformed RPC response: {e}")))?;

    if let Some(err) = parsed.error {
        return Err(ApiError::rpc(format!("RPC error: {}", err.message)));
    }
    match parsed.result {
        Some(raw) => ReturnData::from_hex(&raw),
        None => Err(ApiError::rpc("RPC response missing result")),
    }
}

fn classify_transport_error(err: ureq::Error) -> ApiError {
    let detail = err.to_string();
    if detail.to_lowercase().contains("timed out") {
        ApiError::RpcTimeout
    } else {
        ApiError::rpc(detail)
    }
}
