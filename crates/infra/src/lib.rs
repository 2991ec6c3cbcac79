pub mod ecs;
pub mod gateway;
pub mod providers;
pub mod s3;
