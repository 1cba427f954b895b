pub mod health;
pub mod subjects;
