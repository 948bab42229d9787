pub mod collector;

pub use collector::GrpcCollectorClient;
