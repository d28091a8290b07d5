pub mod column;
pub mod pagination;
pub mod presenter;

pub use column::{CellValue, Column, ColumnSpec, TableRecord};
pub use pagination::{clamp_page, total_pages, Page, Pagination, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use presenter::{DetailLine, DisplayMode, TablePresenter, TableRow, COMPACT_BREAKPOINT_PX};
