pub mod message;
pub mod tracing_init;
pub mod util;

pub use message::constants::SYMBOL_COUNT;
pub use message::{encode, Augmentation, EncodeError, MessageVariant};
