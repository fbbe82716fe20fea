#[cfg(feature = "csr")]
pub mod app;
pub mod carousel;
pub mod contact;
pub mod content;
pub mod relay;
pub mod site;
