use crate::Context;
use anyhow::Result;
use hyper::{header, Body, Request, Response, StatusCode};

pub(crate) async fn get(_context: &Context, _request: Request<Body>) -> Result<Response<Body>> {
	let body = serde_json::json!({ "status": "ok" });
	let response = Response::builder()
		.status(StatusCode::OK)
		.header(header::CONTENT_TYPE, "application/json")
		.body(Body::from(serde_json::to_string(&body)?))?;
	Ok(response)
}
