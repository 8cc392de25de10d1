// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{
    collect_domains,
    load_domains_from_file,
    load_domains_from_source,
};
