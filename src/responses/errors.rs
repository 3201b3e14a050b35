use crate::errors::ServerError;
use crate::responses::html::html_with_status;
use crate::templates::pages::error_page;
use astra::{Body, Response};

/// Convert a ServerError into a proper HTML response page
pub fn error_response(err: ServerError) -> Response {
    let status = err.status();
    html_with_status(status, error_page(status, &err.to_string()))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
