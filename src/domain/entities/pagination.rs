use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: i64, page: u32, per_page: u32) -> Self {
        let pages = total_pages(total, per_page);
        Paginated {
            items,
            total,
            page,
            per_page,
            has_next: page < pages,
            has_prev: page > 1,
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            has_next: self.has_next,
            has_prev: self.has_prev,
        }
    }
}

fn total_pages(total: i64, per_page: u32) -> u32 {
    if per_page == 0 || total <= 0 {
        return 0;
    }
    ((total + per_page as i64 - 1) / per_page as i64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_of_several_pages_has_only_next() {
        let page = Paginated::new(vec![1, 2, 3], 25, 1, 10);
        assert!(page.has_next);
        assert!(!page.has_prev);
    }

    #[test]
    fn a_middle_page_has_both_neighbours() {
        let page = Paginated::new(vec![1], 25, 2, 10);
        assert!(page.has_next);
        assert!(page.has_prev);
    }

    #[test]
    fn the_last_page_has_only_prev() {
        let page = Paginated::new(vec![1], 25, 3, 10);
        assert!(!page.has_next);
        assert!(page.has_prev);
    }

    #[test]
    fn an_exact_multiple_does_not_invent_a_page() {
        let page = Paginated::new(vec![1], 20, 2, 10);
        assert!(!page.has_next);
    }

    #[test]
    fn an_empty_result_set_has_no_neighbours() {
        let page: Paginated<i32> = Paginated::new(Vec::new(), 0, 1, 10);
        assert!(!page.has_next);
        assert!(!page.has_prev);
    }

    #[test]
    fn map_preserves_the_page_shape() {
        let page = Paginated::new(vec![1, 2], 25, 2, 10).map(|n| n.to_string());
        assert_eq!(page.items, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(page.total, 25);
        assert_eq!(page.page, 2);
        assert!(page.has_next);
        assert!(page.has_prev);
    }
}
