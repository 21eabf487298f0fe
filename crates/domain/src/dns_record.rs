mod answer;
mod record_type;

pub use answer::{Answer, AnswerData};
pub use record_type::RecordType;
