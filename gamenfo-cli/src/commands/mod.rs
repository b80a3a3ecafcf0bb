pub(crate) mod config;
pub(crate) mod formats;
pub(crate) mod render;
