//! SeaORM entities

pub mod department;
pub mod subject;
