//! Identity

pub(crate) mod middleware;
