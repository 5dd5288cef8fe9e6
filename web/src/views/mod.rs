pub mod admin;
pub mod auth;
pub mod home;
pub mod jobs;
pub mod knowledge;
pub mod mentorship;
pub mod not_found;
pub mod recruiter_dashboard;
pub mod saved;
pub mod student_dashboard;
