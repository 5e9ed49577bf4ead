//! The weekly expense tracker: the log of entries, the running total, and the
//! endpoints that manipulate them.

mod clear_endpoint;
mod core;
mod delete_endpoint;
mod draft_endpoint;
mod entry;
mod submit_endpoint;
mod tracker_page;

pub use clear_endpoint::clear_expenses_endpoint;
pub use delete_endpoint::delete_expense_endpoint;
pub use draft_endpoint::update_draft_endpoint;
pub use entry::{Entry, decode_log, encode_log};
pub use submit_endpoint::submit_expense_endpoint;
pub use tracker_page::get_tracker_page;
