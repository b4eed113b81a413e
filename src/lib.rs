use std::time::Duration;

use axum::{Router, error_handling::HandleErrorLayer};
use tower::{BoxError, ServiceBuilder, limit::GlobalConcurrencyLimitLayer};
use tower_http::{compression::CompressionLayer, limit::RequestBodyLimitLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod args;
pub mod errors;
pub mod routes;

use crate::{args::Args, errors::ResponseError, routes::message};

#[derive(OpenApi)]
#[openapi(
    paths(message::get_message),
    components(schemas(message::MessageResponse))
)]
pub struct ApiDoc;

pub fn app(args: &Args) -> Router {
    let mut app = routes::router();

    if args.docs {
        app = app.merge(
            SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()),
        );
    }

    with_guards(app, args)
}

// Every route draws from the same permit pool
fn with_guards(app: Router, args: &Args) -> Router {
    app.layer(CompressionLayer::new())
        .layer(RequestBodyLimitLayer::new(args.body_limit))
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_error))
                .load_shed()
                .layer(GlobalConcurrencyLimitLayer::new(args.concurrency_limit))
                .timeout(Duration::from_secs(args.timeout_secs)),
        )
}

async fn handle_error(error: BoxError) -> ResponseError {
    let error = ResponseError::from(error);
    log::warn!("request rejected: {error:?}");

    error
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use tokio::sync::Notify;
    use tower::ServiceExt;

    use super::*;

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn routes_share_one_permit_pool() {
        let entered = Arc::new(Notify::new());
        let release = Arc::new(Notify::new());

        let held = {
            let entered = entered.clone();
            let release = release.clone();
            move || async move {
                entered.notify_one();
                release.notified().await;
                "done"
            }
        };

        let args = Args {
            host: String::from("127.0.0.1"),
            port: 0,
            timeout_secs: 10,
            concurrency_limit: 1,
            body_limit: 1024,
            docs: false,
        };
        let app = with_guards(routes::router().route("/held", get(held)), &args);

        let in_flight = tokio::spawn(app.clone().oneshot(get_request("/held")));
        entered.notified().await;

        let shed = app.clone().oneshot(get_request("/api/message")).await.unwrap();
        assert_eq!(shed.status(), StatusCode::SERVICE_UNAVAILABLE);

        release.notify_one();
        let finished = in_flight.await.unwrap().unwrap();
        assert_eq!(finished.status(), StatusCode::OK);

        let served = app.oneshot(get_request("/api/message")).await.unwrap();
        assert_eq!(served.status(), StatusCode::OK);
    }
}
