#![deny(clippy::all)]

use std::path::Path;

use angular_metadata_strip::{
    plan_source, source_type_for_path, strip_source, NullLogger, StripError, StripOptions,
};
use napi::{Error, Result, Status};
use napi_derive::napi;

fn to_napi_error(err: StripError) -> Error {
    Error::new(Status::GenericFailure, err.to_string())
}

/// Strip Angular decorator metadata from `source_code`. The file name only
/// selects the dialect and labels errors.
#[napi]
pub fn strip_angular_metadata(source_code: String, filename: String) -> Result<String> {
    let source_type = source_type_for_path(Path::new(&filename));
    strip_source(
        &filename,
        &source_code,
        source_type,
        &StripOptions::default(),
        &NullLogger::new(),
    )
    .map(|output| output.code)
    .map_err(to_napi_error)
}

/// The spans `stripAngularMetadata` would blank, as JSON:
/// `{"spans":[{"start":0,"end":10,"kind":"statement"}]}`.
///
/// Offsets are JavaScript string indices (UTF-16 units), so they can be used
/// with `String.prototype.slice` directly.
#[napi]
pub fn plan_angular_metadata_removals(source_code: String, filename: String) -> Result<String> {
    let source_type = source_type_for_path(Path::new(&filename));
    let plan = plan_source(
        &filename,
        &source_code,
        source_type,
        &StripOptions::default(),
        &NullLogger::new(),
    )
    .and_then(|plan| plan.to_utf16_offsets(&source_code))
    .map_err(to_napi_error)?;

    serde_json::to_string(&plan).map_err(|e| Error::new(Status::GenericFailure, e.to_string()))
}
