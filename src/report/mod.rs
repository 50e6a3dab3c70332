//! Report types for CallCheckr

mod result;

pub use result::{ChannelReport, PairReport};
