use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use std::path::{Component, Path};

/// Serves a file below `root`. Anything that is not a plain relative path
/// (`..`, absolute, prefixed) is treated as missing.
pub fn asset_response(root: &Path, relative: &str) -> ResultResp {
    let relative = Path::new(relative);
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_)))
    {
        return Err(ServerError::NotFound);
    }

    let bytes = std::fs::read(root.join(relative)).map_err(|_| ServerError::NotFound)?;

    let content_type = match relative.extension().and_then(|e| e.to_str()) {
        Some("png") => mime::IMAGE_PNG,
        Some("jpg" | "jpeg") => mime::IMAGE_JPEG,
        Some("svg") => mime::IMAGE_SVG,
        _ => mime::APPLICATION_OCTET_STREAM,
    };

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type.as_ref())
        .header("Cache-Control", "public, max-age=86400")
        .body(Body::from(bytes))
        .map_err(|_| ServerError::InternalError)
}
