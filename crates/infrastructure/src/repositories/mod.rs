pub mod record_sink;

pub use record_sink::{SqlRecordSink, SqlRecordSinkFactory};
