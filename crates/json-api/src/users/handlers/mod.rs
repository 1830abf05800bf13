//! User Handlers

pub(crate) mod admin_status;
pub(crate) mod create;
pub(crate) mod index;
pub(crate) mod promote;
pub(crate) mod upsert;
