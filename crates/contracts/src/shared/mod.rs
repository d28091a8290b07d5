pub mod list;
pub mod pricing;
pub mod search;
pub mod table;
