pub mod paginated_table;
pub mod pagination_controls;
pub mod search_input;
