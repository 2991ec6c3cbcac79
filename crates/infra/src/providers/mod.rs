pub mod google_meet;
pub mod teams;
pub mod zoom;
