//! Speed Scrabbler signature service
//!
//! A small HTTP server exposing `POST /api/generate-mint-signature`:
//! the off-game half of the reward claim flow. Configuration comes
//! from the environment; see `config.rs`.

mod abi;
mod config;
mod eip712;
mod error;
mod handler;
mod rpc;

use std::io::Read;

use scrabbler_core::mint::ErrorBody;
use tiny_http::{Header, Method, Request, Response, Server};

use crate::config::Config;
use crate::error::ApiError;

const MAX_BODY_BYTES: u64 = 16 * 1024;

fn main() {
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("startup failed: {}", err.log_detail());
            std::process::exit(1);
        }
    };
    log::info!(
        "signer address: {}",
        eip712::signer_address(&config.signing_key)
    );

    let addr = format!("0.0.0.0:{}", config.port);
    let server = match Server::http(&addr) {
        Ok(server) => server,
        Err(err) => {
            log::error!("failed to bind {addr}: {err}");
            std::process::exit(1);
        }
    };
    log::info!("listening on {addr}");

    for request in server.incoming_requests() {
        handle_request(&config, request);
    }
}

fn handle_request(config: &Config, mut request: Request) {
    let method = request.method().clone();
    let url = request.url().to_string();

    let response = match (&method, url.as_str()) {
        (Method::Post, "/api/generate-mint-signature") => {
            let mut body = String::new();
            let read = request
                .as_reader()
                .take(MAX_BODY_BYTES)
                .read_to_string(&mut body);
            match read {
                Ok(_) => match handler::generate_mint_signature(config, &body) {
                    Ok(signed) => json_response(200, &signed),
                    Err(err) => error_response(&err),
                },
                Err(_) => error_response(&ApiError::MissingFields),
            }
        }
        (Method::Options, "/api/generate-mint-signature") => {
            Response::from_string("").with_status_code(204)
        }
        _ => {
            log::debug!("no route for {method} {url}");
            json_response(
                404,
                &ErrorBody {
                    error: "Not found".to_string(),
                },
            )
        }
    };

    let response = with_common_headers(response);
    if let Err(err) = request.respond(response) {
        log::warn!("failed to send response: {err}");
    }
}

fn json_response<T: serde::Serialize>(status: u16, body: &T) -> Response<std::io::Cursor<Vec<u8>>> {
    let payload = serde_json::to_string(body).unwrap_or_else(|_| "{}".to_string());
    Response::from_string(payload).with_status_code(status)
}

fn error_response(err: &ApiError) -> Response<std::io::Cursor<Vec<u8>>> {
    log::warn!("request failed: {}", err.log_detail());
    let body = ErrorBody {
        error: err.to_string(),
    };
    json_response(err.status_code(), &body)
}

fn with_common_headers(
    mut response: Response<std::io::Cursor<Vec<u8>>>,
) -> Response<std::io::Cursor<Vec<u8>>> {
    for (name, value) in [
        ("Content-Type", "application/json"),
        ("Access-Control-Allow-Origin", "*"),
        ("Access-Control-Allow-Methods", "POST, OPTIONS"),
        ("Access-Control-Allow-Headers", "Content-Type"),
    ] {
        if let Ok(header) = Header::from_bytes(name.as_bytes(), value.as_bytes()) {
            response.add_header(header);
        }
    }
    response
}
