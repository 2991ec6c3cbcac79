pub mod gateway;
pub mod providers;
