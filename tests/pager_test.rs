mod common;

use common::{FakeUpstream, release};
use tunenest::{
    management::pager::{fetch_all, release_page},
    types::{Page, ReleaseKind},
};

async fn fetch_numbers(total: usize, page_size: u32, cap: usize) -> (Vec<usize>, bool, u32) {
    let mut requests = 0;
    let fetched = fetch_all(page_size, cap, |offset, limit| {
        requests += 1;
        let start = (offset as usize).min(total);
        let end = (start + limit as usize).min(total);
        async move {
            Ok(Page {
                items: (start..end).collect::<Vec<usize>>(),
                total: Some(total as u64),
                has_more: end < total,
            })
        }
    })
    .await
    .unwrap();

    (fetched.items, fetched.truncated, requests)
}

#[tokio::test]
async fn test_fetch_all_single_short_page() {
    let (items, truncated, requests) = fetch_numbers(42, 100, 500).await;
    assert_eq!(items.len(), 42);
    assert!(!truncated);
    assert_eq!(requests, 1);
}

#[tokio::test]
async fn test_fetch_all_reads_every_page_in_order() {
    let (items, truncated, requests) = fetch_numbers(250, 100, 500).await;
    assert_eq!(items, (0..250).collect::<Vec<_>>());
    assert!(!truncated);
    assert_eq!(requests, 3);
}

#[tokio::test]
async fn test_fetch_all_exactly_at_cap_is_not_truncated() {
    let (items, truncated, requests) = fetch_numbers(500, 100, 500).await;
    assert_eq!(items.len(), 500);
    assert!(!truncated);
    assert_eq!(requests, 5);
}

#[tokio::test]
async fn test_fetch_all_one_over_cap_is_truncated() {
    let (items, truncated, requests) = fetch_numbers(501, 100, 500).await;
    assert_eq!(items.len(), 500);
    assert_eq!(items.last(), Some(&499));
    assert!(truncated);
    // the sixth page is never requested
    assert_eq!(requests, 5);
}

#[tokio::test]
async fn test_fetch_all_cap_inside_a_page() {
    let (items, truncated, _) = fetch_numbers(1000, 100, 150).await;
    assert_eq!(items.len(), 150);
    assert!(truncated);
}

#[tokio::test]
async fn test_fetch_all_empty_collection() {
    let (items, truncated, requests) = fetch_numbers(0, 100, 500).await;
    assert!(items.is_empty());
    assert!(!truncated);
    assert_eq!(requests, 1);
}

#[tokio::test]
async fn test_fetch_all_stops_on_first_error() {
    let mut requests = 0;
    let result = fetch_all(10, 100, |offset, _limit| {
        requests += 1;
        async move {
            if offset >= 10 {
                Err(tunenest::TuneNestError::transient("fake", "boom"))
            } else {
                Ok(Page {
                    items: vec![0u8; 10],
                    total: None,
                    has_more: true,
                })
            }
        }
    })
    .await;

    assert!(result.unwrap_err().is_transient());
    assert_eq!(requests, 2);
}

fn artist_with_releases(count: usize) -> FakeUpstream {
    FakeUpstream {
        releases: (0..count)
            .map(|i| release(&format!("r{i}"), &format!("Release {i}")))
            .collect(),
        ..FakeUpstream::default()
    }
}

#[tokio::test]
async fn test_release_page_math() {
    let upstream = artist_with_releases(95);

    let first = release_page(&upstream, "a1", ReleaseKind::Album, 1, 10, "US")
        .await
        .unwrap();
    assert_eq!(first.total_items, 95);
    assert_eq!(first.total_pages, 10);
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.items[0].id, "r0");

    let last = release_page(&upstream, "a1", ReleaseKind::Album, 10, 10, "US")
        .await
        .unwrap();
    assert_eq!(last.items.len(), 5);
    assert_eq!(last.items[0].id, "r90");

    let past_end = release_page(&upstream, "a1", ReleaseKind::Album, 11, 10, "US")
        .await
        .unwrap();
    assert!(past_end.items.is_empty());
    assert_eq!(past_end.total_pages, 10);

    assert_eq!(upstream.page_requests(), vec![(0, 10), (90, 10), (100, 10)]);
}

#[tokio::test]
async fn test_release_page_zero_reads_first_page() {
    let upstream = artist_with_releases(3);

    let page = release_page(&upstream, "a1", ReleaseKind::Single, 0, 10, "US")
        .await
        .unwrap();
    assert_eq!(page.page, 1);
    assert_eq!(page.kind, ReleaseKind::Single);
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn test_release_page_without_releases() {
    let upstream = artist_with_releases(0);

    let page = release_page(&upstream, "a1", ReleaseKind::Album, 1, 10, "US")
        .await
        .unwrap();
    assert_eq!(page.total_items, 0);
    assert_eq!(page.total_pages, 0);
    assert!(page.items.is_empty());
}
