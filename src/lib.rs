//! # Class Management Service
//!
//! Backend for browsing subjects and their departments over a paginated,
//! filterable REST endpoint.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, types and repository traits
//! - **infrastructure**: External concerns (database, entities, migrations)
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Cross-cutting types (pagination, shutdown, pattern escaping)

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::init_database;

// Re-export API router
pub use interfaces::http::create_api_router;
