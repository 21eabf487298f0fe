pub mod forwarding;
pub mod resolver;
pub mod transport;

pub use forwarding::{MessageBuilder, ParsedResponse, RecordTypeMapper, ResponseParser};
pub use resolver::UpstreamRecordResolver;
