//! The API endpoint URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/expenses/{index}', use
//! [format_endpoint].

/// The tracker page, the app's only view.
pub const TRACKER_VIEW: &str = "/";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route for persisting a draft field as the user types.
pub const DRAFT_API: &str = "/api/draft";
/// The route for submitting the entry form and for clearing the whole log.
pub const EXPENSES_API: &str = "/api/expenses";
/// The route for deleting a single expense by its position in the log.
pub const DELETE_EXPENSE: &str = "/api/expenses/{index}";

/// Replace the parameter in `endpoint_path` with `index`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/expenses/{index}', '{index}' is
/// the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, index: usize) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        index,
        &endpoint_path[param_end..]
    )
}
