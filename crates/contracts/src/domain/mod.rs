pub mod a001_client;
pub mod a002_article;
pub mod a003_product;
pub mod common;
