pub mod fetch;
pub mod optimistic;
pub mod poll;
