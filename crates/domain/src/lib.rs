pub mod errors;
pub mod repositories;
pub mod value_objects;
