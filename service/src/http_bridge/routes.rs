use crate::http_bridge::model::{ErrorBody, HealthStatus};
use crate::workflow::runner::Runner;
use anyhow::Context;
use hazardcore::models::RawAssessmentRequest;
use log::{error, info};
use std::convert::Infallible;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use warp::filters::body::BodyDeserializeError;
use warp::http::StatusCode;
use warp::reject::{LengthRequired, MethodNotAllowed, PayloadTooLarge, UnsupportedMediaType};
use warp::{Filter, Rejection, Reply};

const MAX_BODY_BYTES: u64 = 1024 * 1024;

/// All HTTP routes, with rejections turned into JSON error bodies.
pub fn routes(
    runner: Arc<Runner>,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let runner_filter = warp::any().map(move || runner.clone());

    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| warp::reply::json(&HealthStatus::ok()));

    let hazard = warp::path("hazard")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(runner_filter.clone())
        .map(
            |raw: RawAssessmentRequest, runner: Arc<Runner>| match runner.execute(raw) {
                Ok(response) => {
                    warp::reply::with_status(warp::reply::json(&response), StatusCode::OK)
                }
                Err(err) => warp::reply::with_status(
                    warp::reply::json(&ErrorBody::from(&err)),
                    StatusCode::UNPROCESSABLE_ENTITY,
                ),
            },
        );

    let metrics = warp::path("metrics")
        .and(warp::path::end())
        .and(warp::get())
        .and(runner_filter)
        .map(|runner: Arc<Runner>| warp::reply::json(&runner.metrics()));

    health.or(hazard).or(metrics).recover(handle_rejection)
}

async fn handle_rejection(rejection: Rejection) -> Result<impl Reply, Infallible> {
    let (status, body) = if rejection.is_not_found() {
        (StatusCode::NOT_FOUND, ErrorBody::new("not found"))
    } else if let Some(err) = rejection.find::<BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, ErrorBody::new(err.to_string()))
    } else if rejection.find::<PayloadTooLarge>().is_some() {
        (
            StatusCode::PAYLOAD_TOO_LARGE,
            ErrorBody::new("request body too large"),
        )
    } else if rejection.find::<LengthRequired>().is_some() {
        (
            StatusCode::LENGTH_REQUIRED,
            ErrorBody::new("content-length header required"),
        )
    } else if rejection.find::<UnsupportedMediaType>().is_some() {
        (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ErrorBody::new("expected application/json"),
        )
    } else if rejection.find::<MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            ErrorBody::new("method not allowed"),
        )
    } else {
        error!("unhandled rejection: {:?}", rejection);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            ErrorBody::new("internal error"),
        )
    };

    Ok(warp::reply::with_status(warp::reply::json(&body), status))
}

/// Serves the API on `address` until `shutdown` resolves.
pub async fn serve(
    runner: Arc<Runner>,
    address: SocketAddr,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let (bound, server) = warp::serve(routes(runner))
        .try_bind_with_graceful_shutdown(address, shutdown)
        .with_context(|| format!("binding HTTP listener on {address}"))?;
    info!("radar hazard service listening on http://{}", bound);
    server.await;
    info!("radar hazard service stopped");
    Ok(())
}
