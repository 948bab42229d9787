//! Mixer `tracespan` handling
//!
//! - `converter` / `tags`: translate one inbound span into a collector span
//! - `assembler`: build one report per batch, failing fast
//! - `forwarder`: send reports through the `ReportClient` port (also the gRPC service)
//! - `receiver`: HTTP ingestion route

pub mod assembler;
pub mod converter;
pub mod forwarder;
pub mod receiver;
pub mod tags;

pub use assembler::{assemble, build_reporter};
pub use converter::translate_span;
pub use forwarder::SpanForwarder;
pub use receiver::{TraceSpanState, tracespan_routes};
