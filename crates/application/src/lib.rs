pub mod interfaces;
pub mod retry;
pub mod usecases;
