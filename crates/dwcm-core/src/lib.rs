pub mod config;
pub mod logging;

// Core normalization modules
pub mod dictionary;
pub mod media;
pub mod mime;
pub mod typified;
pub mod url_parse;
