pub mod launch;
pub mod record;
