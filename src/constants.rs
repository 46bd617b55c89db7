// Application constants
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// HTTP client defaults
pub const DEFAULT_HTTP_TIMEOUT: u64 = 10;

// Worker pool defaults
pub const DEFAULT_WORKER_THREADS: usize = 10;

// Paths that exist on a default WordPress install
pub const WORDPRESS_PATHS: &[&str] = &["/wp-content/", "/wp-includes/", "/wp-admin/"];
