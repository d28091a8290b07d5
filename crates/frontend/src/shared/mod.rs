pub mod api_utils;
pub mod components;
pub mod icons;
pub mod list_state;
pub mod modal_frame;
pub mod viewport;
