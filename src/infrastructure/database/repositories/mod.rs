//! SeaORM repository implementations

pub mod repository_provider;
pub mod subject_repository;

pub use repository_provider::SeaOrmRepositoryProvider;
pub use subject_repository::SeaOrmSubjectRepository;
