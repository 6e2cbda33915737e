//! Search and pagination operations and module exports.

mod search_for_results;
pub use search_for_results::search_for_results;

mod change_page;
pub use change_page::{PageDirection, change_page, change_page_size};

mod render_page;
