mod upstream;

pub use upstream::UpstreamRecordResolver;
