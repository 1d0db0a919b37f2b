use anyhow::Result;
use hyper::{Body, Method, Request, Response, StatusCode};
use std::sync::Arc;

mod api;

pub struct Options {
	pub host: std::net::IpAddr,
	pub port: u16,
}

pub struct Context {
	pub options: Options,
}

/// The whole backend surface: everything is computed wherever the report is consumed, so the server only answers liveness checks.
async fn handle(context: Arc<Context>, request: Request<Body>) -> Response<Body> {
	let method = request.method().clone();
	let uri = request.uri().clone();
	let path_and_query = uri.path_and_query().unwrap();
	let path = path_and_query.path();
	let path_components: Vec<_> = path.split('/').skip(1).collect();
	let result = match (&method, path_components.as_slice()) {
		(&Method::GET, &["health"]) => self::api::health::get(&context, request).await,
		_ => Ok(not_found()),
	};
	let response = match result {
		Ok(response) => response,
		Err(error) => {
			eprintln!("{}", error);
			Response::builder()
				.status(StatusCode::INTERNAL_SERVER_ERROR)
				.body(Body::from("internal server error"))
				.unwrap()
		}
	};
	eprintln!("{} {} {}", method, path, response.status());
	response
}

fn not_found() -> Response<Body> {
	Response::builder()
		.status(StatusCode::NOT_FOUND)
		.body(Body::from("not found"))
		.unwrap()
}

pub fn run(options: Options) -> Result<()> {
	tokio::runtime::Builder::new()
		.threaded_scheduler()
		.enable_all()
		.build()
		.unwrap()
		.block_on(run_impl(options))
}

async fn run_impl(options: Options) -> Result<()> {
	let host = options.host;
	let port = options.port;
	let context = Context { options };
	sieve_util::serve::serve(host, port, context, handle).await?;
	Ok(())
}
