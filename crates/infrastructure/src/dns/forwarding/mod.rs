//! Wire-format query construction and response decoding.

pub mod message_builder;
pub mod record_type_map;
pub mod response_parser;

pub use message_builder::MessageBuilder;
pub use record_type_map::RecordTypeMapper;
pub use response_parser::{ParsedResponse, ResponseParser};
