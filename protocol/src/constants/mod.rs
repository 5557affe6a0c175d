pub mod configs;
pub mod endpoints;
