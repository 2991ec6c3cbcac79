pub mod object_store;
pub mod task_scheduler;
