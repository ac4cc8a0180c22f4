//! Appender implementations

pub mod discard;
pub mod fanout;
pub mod stream;
pub mod udp;

pub use discard::DiscardAppender;
pub use fanout::{stderr_error_observer, ErrorObserver, FanoutAppender};
pub use stream::StreamAppender;
pub use udp::UdpAppender;

// Re-export trait for convenience
pub use crate::core::Appender;
