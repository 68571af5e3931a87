//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Pagination
// =============================================================================

/// Default number of items returned by list endpoints
pub const DEFAULT_PAGE_LIMIT: u64 = 100;

/// Maximum allowed items per request; larger limits are clamped
pub const MAX_PAGE_LIMIT: u64 = 100;

/// Default starting offset
pub const DEFAULT_PAGE_OFFSET: u64 = 0;

/// Largest offset the database driver can bind
pub const MAX_PAGE_OFFSET: u64 = i64::MAX as u64;

// =============================================================================
// Catalog field bounds
// =============================================================================

/// Maximum length of a book title
pub const MAX_TITLE_LENGTH: u64 = 50;

/// Maximum length of an author's first or second name
pub const MAX_NAME_LENGTH: u64 = 20;

/// Prices must be strictly greater than this value
pub const MIN_PRICE_EXCLUSIVE: f64 = -1.0;

/// Price stored when the client omits one
pub const DEFAULT_PRICE: f64 = 0.0;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Default database host
pub const DEFAULT_DB_HOST: &str = "localhost";

/// Default PostgreSQL port
pub const DEFAULT_DB_PORT: u16 = 5432;

/// Default database name (for development)
pub const DEFAULT_DB_NAME: &str = "library";

/// Default database user (for development)
pub const DEFAULT_DB_USER: &str = "postgres";

/// Default database password (for development)
pub const DEFAULT_DB_PASSWORD: &str = "password";

/// Database every PostgreSQL server carries, used to create the target one
pub const MAINTENANCE_DB_NAME: &str = "postgres";

/// Default size of the connection pool
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
