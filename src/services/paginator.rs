use crate::domain::{page_file_name, FeedItem, Page};

/// How a feed is laid out on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// Pagination disabled, the whole collection is one unit
    Single(Vec<FeedItem>),
    Paged(Vec<Page>),
}

/// Number of pages needed for `count` items. An empty collection still gets
/// one (empty) page so every paginated feed has a first page to link to.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size).max(1)
}

/// Split `items` into pages of `page_size`. Page links are file names within
/// `namespace`, e.g. `feed_page_2.json`. A page size of 1 or less disables
/// pagination.
pub fn paginate(items: &[FeedItem], page_size: usize, namespace: &str) -> Layout {
    if page_size <= 1 {
        return Layout::Single(items.to_vec());
    }

    let total = total_pages(items.len(), page_size);
    let pages = (0..total)
        .map(|index| {
            let start = (index * page_size).min(items.len());
            let end = ((index + 1) * page_size).min(items.len());

            Page {
                items: items[start..end].to_vec(),
                current_page: index + 1,
                total_pages: total,
                next_page: (index + 1 < total).then(|| page_file_name(namespace, index + 2)),
                prev_page: (index > 0).then(|| page_file_name(namespace, index)),
            }
        })
        .collect();

    Layout::Paged(pages)
}
