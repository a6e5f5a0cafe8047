//! Subnet arithmetic.
//!
//! This module contains the operations built on masks:
//! - `subnet` - network id, broadcast, host count, membership

mod subnet;

// Re-export public functions
pub use subnet::{
    broadcast_address, broadcast_bits, contains_bits, host_range, is_member, network_bits,
    network_id, next_subnet, next_subnet_bits, subnet_cardinality,
};
