//! Frame capture through a headless browser.

pub(crate) mod capturer;
pub(crate) mod chrome;
pub(crate) mod surface;
