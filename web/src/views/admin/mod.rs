pub mod dashboard;
pub mod moderation;
pub mod uploads;
