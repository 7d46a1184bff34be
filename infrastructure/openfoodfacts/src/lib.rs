pub mod client;
pub mod product_catalog;
mod response;
