
pub use builders::AnswerBuilder;
