//! Output formatting for addresses and reports.
//!
//! This module handles turning addresses back into text:
//! - `format` - dotted-decimal formatting
//! - [`report`] - summary of one address/prefix pair
//! - `terminal` - terminal table helpers

mod format;
pub mod report;
mod terminal;

pub use format::{format_ipv4, format_ipv4_into, format_octets};
pub use report::{Membership, SubnetReport};
pub use terminal::{format_member, format_row, pad_label};
