//! HTTP Lambda surface for the differential engine
//!
//! Accepts a JSON body of raw calculation strings and returns the breakdown.
//! Invalid inputs come back as 400 with a JSON error body.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use salary_differential::{compute, RawCalculation};
use serde_json::json;

async fn handle(event: Request) -> Result<Response<Body>, Error> {
    let raw: RawCalculation = match serde_json::from_slice(event.body().as_ref()) {
        Ok(raw) => raw,
        Err(err) => return bad_request(format!("invalid request body: {err}")),
    };

    let breakdown = match raw.normalize().and_then(|input| compute(&input)) {
        Ok(breakdown) => breakdown,
        Err(err) => return bad_request(err.to_string()),
    };

    let body = serde_json::to_string(&breakdown)?;
    Ok(Response::builder()
        .status(200)
        .header("content-type", "application/json")
        .body(Body::from(body))?)
}

fn bad_request(message: String) -> Result<Response<Body>, Error> {
    let body = json!({ "error": message }).to_string();
    Ok(Response::builder()
        .status(400)
        .header("content-type", "application/json")
        .body(Body::from(body))?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handle)).await
}
