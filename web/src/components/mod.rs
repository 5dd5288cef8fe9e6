pub mod capsule_card;
pub mod empty;
pub mod engage_button;
pub mod error;
pub mod job_card;
pub mod loading;
pub mod mentor_card;
pub mod navbar;
pub mod notifications;
pub mod stat_tile;
pub mod upload_row;

// Re-export commonly used components
pub use empty::EmptyState;
pub use error::ErrorPanel;
pub use loading::LoadingView;
pub use navbar::Navbar;
pub use notifications::NoticeStack;
