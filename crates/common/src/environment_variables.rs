//! The list of environment variables used throughout the application.

// Database environment variables
pub const DB_URL: &str = "CATALOG_DATABASE_URL";
pub const DB_POOL: &str = "CATALOG_DATABASE_POOL_SIZE";
pub const RUN_MIGRATIONS: &str = "CATALOG_RUN_MIGRATIONS";
pub const GENRE_MATCH: &str = "CATALOG_GENRE_MATCH";

// Web API environment variables
pub const WEB_HOST: &str = "CATALOG_WEB_HOST";
pub const WEB_PORT: &str = "CATALOG_WEB_PORT";

// Browser environment variables
pub const BASE_URL: &str = "CATALOG_BASE_URL";

// Miscellaneous
pub const LOG_FILTER: &str = "CATALOG_LOG_FILTER";
pub const LOG_DIR: &str = "CATALOG_LOG_DIR";
