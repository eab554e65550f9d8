//! Offset/limit pagination over upstream collections.

use std::future::Future;

use crate::{
    Res,
    types::{Fetched, Page, ReleaseKind, ReleasePage},
    upstream::Upstream,
    utils,
};

/// Fetches a collection page by page, stopping at `cap` items.
///
/// `fetch_page(offset, limit)` is called with offsets `0, page_size,
/// 2 * page_size, ...` until either
///
/// - a page comes back shorter than `page_size` or reports no further page
///   (the whole collection was read, `truncated = false`), or
/// - at least `cap` items were collected. The result is cut to exactly `cap`
///   items and `truncated` tells whether anything was left upstream.
///
/// The first failing page aborts the fetch; partial results are discarded.
pub async fn fetch_all<T, F, Fut>(page_size: u32, cap: usize, mut fetch_page: F) -> Res<Fetched<T>>
where
    F: FnMut(u32, u32) -> Fut,
    Fut: Future<Output = Res<Page<T>>>,
{
    let page_size = page_size.max(1);
    let mut items: Vec<T> = Vec::new();
    let mut offset: u32 = 0;

    if cap == 0 {
        return Ok(Fetched {
            items,
            truncated: false,
        });
    }

    loop {
        let page = fetch_page(offset, page_size).await?;
        let received = page.items.len();
        let exhausted = received < page_size as usize || !page.has_more;
        items.extend(page.items);

        if items.len() >= cap {
            let truncated = items.len() > cap || !exhausted;
            items.truncate(cap);
            return Ok(Fetched { items, truncated });
        }

        if exhausted {
            return Ok(Fetched {
                items,
                truncated: false,
            });
        }

        offset = offset.saturating_add(page_size);
    }
}

/// One 1-indexed UI page of an artist's releases of a single kind.
///
/// Each UI page is exactly one upstream page of `per_page` items. Page `0` is
/// read as page `1`; pages past the end come back empty.
pub async fn release_page(
    upstream: &dyn Upstream,
    artist_id: &str,
    kind: ReleaseKind,
    page: u32,
    per_page: u32,
    market: &str,
) -> Res<ReleasePage> {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let offset = (page - 1).saturating_mul(per_page);

    let upstream_page = upstream
        .get_artist_releases(artist_id, kind, offset, per_page, market)
        .await?;

    let total_items = upstream_page
        .total
        .unwrap_or(offset as u64 + upstream_page.items.len() as u64);
    let total_pages = utils::total_pages(total_items, per_page);

    let items = if page > total_pages {
        Vec::new()
    } else {
        upstream_page.items
    };

    Ok(ReleasePage {
        artist_id: artist_id.to_string(),
        kind,
        page,
        per_page,
        total_items,
        total_pages,
        items,
    })
}
