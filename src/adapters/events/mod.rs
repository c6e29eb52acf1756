//! Event publisher adapters.
//!
//! - `RedisEventPublisher` - Redis pub/sub, used when a broker URL is configured
//! - `LoggingEventPublisher` - Logs events when no broker is configured
//! - `InMemoryEventBus` - Records events for tests

mod in_memory;
mod logging;
mod redis;

pub use in_memory::InMemoryEventBus;
pub use logging::LoggingEventPublisher;
pub use self::redis::RedisEventPublisher;
