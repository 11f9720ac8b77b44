//! Application factory - routes plus the middleware stack every request passes through.

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::{DefaultHeaders, from_fn};
use actix_web::{App, Error, web};
use tracing_actix_web::TracingLogger;

use crate::handlers;
use crate::observability;
use crate::state::AppState;

/// Build the application over `state`.
///
/// `TracingLogger` is outermost so the request ID it assigns is visible to
/// `propagate_request_id`.
pub fn build_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(security_headers())
        .wrap(cors())
        .wrap(from_fn(observability::propagate_request_id))
        .wrap(TracingLogger::default())
        .app_data(web::Data::new(state))
        .configure(handlers::configure_routes)
        .default_service(web::route().to(handlers::not_found))
}

/// Conservative browser security headers on every response.
fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("X-Frame-Options", "SAMEORIGIN"))
        .add(("Referrer-Policy", "no-referrer"))
}

fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
}
