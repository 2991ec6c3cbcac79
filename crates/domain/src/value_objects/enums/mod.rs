pub mod launch_types;
pub mod platforms;
