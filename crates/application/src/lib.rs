//! Ferrous Census Application Layer
//!
//! Ports for the resolver, the record sink and the domain source, and the
//! worker-pool pipeline that connects them.
pub mod pipeline;
pub mod ports;
