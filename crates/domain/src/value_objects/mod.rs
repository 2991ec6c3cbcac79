pub mod enums;
pub mod executions;
pub mod launches;
pub mod recording_requests;
pub mod timelines;
