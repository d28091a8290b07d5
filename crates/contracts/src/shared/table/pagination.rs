use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Варианты размера страницы для выпадающего списка
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Количество страниц: не меньше одной даже для пустого списка
pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    count.div_ceil(page_size).max(1)
}

/// Номер страницы (с 1) в допустимых границах
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Страница списка: только чтение, без копирования записей
#[derive(Debug, PartialEq)]
pub struct Page<'a, T> {
    /// Номер страницы, начиная с 1
    pub index: usize,
    pub size: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub items: &'a [T],
}

impl<T> Page<'_, T> {
    /// Для пустого списка страницы не показываются
    pub fn displayed_pages(&self) -> usize {
        if self.total_count == 0 {
            0
        } else {
            self.total_pages
        }
    }

    pub fn shows_controls(&self) -> bool {
        self.total_count > 0
    }
}

/// Состояние пагинации списка. Номер страницы всегда в `[1, total_pages]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
    total_count: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total_count: 0,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_count, self.page_size)
    }

    /// Размер коллекции изменился (например, после фильтрации):
    /// текущая страница прижимается к последней
    pub fn set_total(&mut self, count: usize) {
        self.total_count = count;
        self.page = clamp_page(self.page, self.total_pages());
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = clamp_page(page, self.total_pages());
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn next(&mut self) {
        if self.has_next() {
            self.page += 1;
        }
    }

    pub fn previous(&mut self) {
        if self.has_previous() {
            self.page -= 1;
        }
    }

    pub fn first(&mut self) {
        self.page = 1;
    }

    pub fn last(&mut self) {
        self.page = self.total_pages();
    }

    /// Новый размер страницы - возврат на первую страницу
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Диапазон индексов текущей страницы в коллекции из `total_count` записей
    pub fn range(&self) -> Range<usize> {
        let start = self
            .page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .min(self.total_count);
        let end = start.saturating_add(self.page_size).min(self.total_count);
        start..end
    }

    /// Пересчитать границы по коллекции и вернуть текущую страницу
    pub fn paginate<'a, T>(&mut self, records: &'a [T]) -> Page<'a, T> {
        self.set_total(records.len());
        Page {
            index: self.page,
            size: self.page_size,
            total_pages: self.total_pages(),
            total_count: self.total_count,
            items: &records[self.range()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(5, 0), 1);
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let records: Vec<u32> = (1..=25).collect();
        let mut p = Pagination::new(10);
        p.set_total(records.len());
        p.go_to(5);
        assert_eq!(p.page(), 3);

        let page = p.paginate(&records);
        assert_eq!(page.index, 3);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.items, &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn test_shrinking_collection_reclamps() {
        let records: Vec<u32> = (1..=25).collect();
        let mut p = Pagination::new(10);
        p.paginate(&records);
        p.last();
        assert_eq!(p.page(), 3);

        let filtered = &records[..3];
        let page = p.paginate(filtered);
        assert_eq!(page.index, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items, &[1, 2, 3]);
    }

    #[test]
    fn test_next_previous_are_noops_at_bounds() {
        let records: Vec<u32> = (1..=25).collect();
        let mut p = Pagination::new(10);
        p.paginate(&records);

        p.previous();
        assert_eq!(p.page(), 1);
        p.next();
        p.next();
        assert_eq!(p.page(), 3);
        assert!(!p.has_next());
        p.next();
        assert_eq!(p.page(), 3);
        p.previous();
        assert_eq!(p.page(), 2);
        p.first();
        assert!(!p.has_previous());
    }

    #[test]
    fn test_empty_collection() {
        let records: Vec<u32> = Vec::new();
        let mut p = Pagination::new(10);
        p.go_to(4);
        let page = p.paginate(&records);
        assert_eq!(page.index, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.displayed_pages(), 0);
        assert!(!page.shows_controls());
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let records: Vec<u32> = (1..=60).collect();
        let mut p = Pagination::default();
        p.paginate(&records);
        p.go_to(4);
        p.set_page_size(25);
        let page = p.paginate(&records);
        assert_eq!(page.index, 1);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 25);
        assert!(page.shows_controls());
    }

    #[test]
    fn test_range_stays_inside_collection() {
        let mut pagination = Pagination::new(usize::MAX);
        pagination.set_total(7);
        assert_eq!(pagination.range(), 0..7);

        pagination.set_page_size(3);
        pagination.set_total(7);
        pagination.last();
        assert_eq!(pagination.range(), 6..7);
    }
}
