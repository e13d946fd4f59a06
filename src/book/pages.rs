//! Page-by-page iteration over a snapshot of an address book.

use crate::models::Record;

/// Iterator over consecutive chunks of records.
///
/// Owns a snapshot taken when it was created, so later changes to the
/// book do not show up in an iteration already in progress.
#[derive(Debug, Clone)]
pub struct Pages {
    records: std::vec::IntoIter<Record>,
    page_size: usize,
}

impl Pages {
    pub(crate) fn new(records: Vec<Record>, page_size: usize) -> Self {
        Self {
            records: records.into_iter(),
            page_size: page_size.max(1),
        }
    }
}

impl Iterator for Pages {
    type Item = Vec<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let page: Vec<Record> = self.records.by_ref().take(self.page_size).collect();
        if page.is_empty() {
            None
        } else {
            Some(page)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pages = self.records.len().div_ceil(self.page_size);
        (pages, Some(pages))
    }
}

impl ExactSizeIterator for Pages {}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(n: usize) -> Vec<Record> {
        (0..n)
            .map(|i| Record::new(format!("Contact {}", i), None).unwrap())
            .collect()
    }

    #[test]
    fn test_pages_chunk_sizes() {
        let sizes: Vec<usize> = Pages::new(records(5), 2).map(|p| p.len()).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
    }

    #[test]
    fn test_pages_exact_multiple() {
        let pages = Pages::new(records(4), 2);
        assert_eq!(pages.len(), 2);
        assert_eq!(pages.count(), 2);
    }

    #[test]
    fn test_pages_empty() {
        assert_eq!(Pages::new(Vec::new(), 3).next(), None);
    }

    #[test]
    fn test_zero_page_size_is_one() {
        let sizes: Vec<usize> = Pages::new(records(3), 0).map(|p| p.len()).collect();
        assert_eq!(sizes, vec![1, 1, 1]);
    }
}
