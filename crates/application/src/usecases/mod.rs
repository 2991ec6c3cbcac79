pub mod gateway_launch;
pub mod meeting_probe;
pub mod task_launch;
