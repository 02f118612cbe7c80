pub mod builders;

pub use builders::{small_pool, RawConfigBuilder};
