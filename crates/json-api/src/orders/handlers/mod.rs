//! Order Handlers

pub(crate) mod by_email;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod index;
