//! Port contracts for board state consumers.

mod subscriber;

pub use subscriber::Subscriber;
