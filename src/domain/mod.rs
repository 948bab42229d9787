pub mod raw_span;

pub use raw_span::{RawSpan, TagValue};
