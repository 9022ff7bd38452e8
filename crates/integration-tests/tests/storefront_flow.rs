//! End-to-end storefront flows against a live catalog server: pagination,
//! debounced search, filter resets, stale-response handling, and the cart.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::time::{Duration, Instant};

use partsbin_client::session::{PAGE_SIZE, SEARCH_DEBOUNCE};
use partsbin_client::{CatalogClient, CatalogFeed, ClientError, FeedPhase, Storefront};
use partsbin_core::{Part, PartId};
use partsbin_integration_tests::TestServer;
use rust_decimal::Decimal;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn feed_ids(parts: &[Part]) -> Vec<i32> {
    parts.iter().map(|p| p.id.as_i32()).collect()
}

// =============================================================================
// Pagination
// =============================================================================

#[tokio::test]
async fn test_open_loads_first_page() {
    let server = TestServer::spawn().await;
    let mut storefront = Storefront::new(&server.base_url).unwrap();

    storefront.open().await;

    let feed = storefront.feed();
    assert_eq!(*feed.phase(), FeedPhase::Loaded);
    assert_eq!(feed.parts().len(), PAGE_SIZE);
    assert_eq!(feed.total(), 15);
    assert!(feed.has_more());
}

#[tokio::test]
async fn test_load_more_walks_to_the_end() {
    let server = TestServer::spawn().await;
    let mut storefront = Storefront::new(&server.base_url).unwrap();

    storefront.open().await;
    storefront.load_more().await;

    let feed = storefront.feed();
    assert_eq!(feed_ids(feed.parts()), (1..=15).collect::<Vec<i32>>());
    assert!(!feed.has_more(), "second page was short");

    // Nothing left to fetch; this is a no-op
    storefront.load_more().await;
    assert_eq!(storefront.feed().parts().len(), 15);
}

// =============================================================================
// Debounced search
// =============================================================================

#[tokio::test]
async fn test_keystrokes_coalesce_into_one_search() {
    let server = TestServer::spawn().await;
    let mut storefront = Storefront::new(&server.base_url).unwrap();
    storefront.open().await;

    let t0 = Instant::now();
    storefront.search_input("o", t0);
    storefront.search_input("oi", t0 + ms(100));
    storefront.search_input("oil", t0 + ms(200));

    // 400ms in, but only 200ms since the last keystroke
    assert!(!storefront.tick(t0 + ms(400)).await);
    assert!(storefront.tick(t0 + ms(500)).await);

    let feed = storefront.feed();
    assert_eq!(*feed.phase(), FeedPhase::Loaded);
    assert_eq!(feed_ids(feed.parts()), vec![2, 6]);
    assert_eq!(feed.total(), 2);
    assert!(!feed.has_more());
}

#[tokio::test]
async fn test_settled_input_matching_active_search_is_dropped() {
    let server = TestServer::spawn().await;
    let mut storefront = Storefront::new(&server.base_url).unwrap();
    storefront.open().await;

    let t0 = Instant::now();
    storefront.search_input("oil", t0);
    assert!(storefront.tick(t0 + SEARCH_DEBOUNCE).await);

    // Retyping the same text settles without a refetch
    let t1 = t0 + ms(1000);
    storefront.search_input("oil", t1);
    assert!(!storefront.tick(t1 + SEARCH_DEBOUNCE).await);
    assert_eq!(*storefront.feed().phase(), FeedPhase::Loaded);
}

#[tokio::test]
async fn test_unmatched_search_shows_empty_state() {
    let server = TestServer::spawn().await;
    let mut storefront = Storefront::new(&server.base_url).unwrap();
    storefront.open().await;

    let t0 = Instant::now();
    storefront.search_input("carburetor", t0);
    assert!(storefront.tick(t0 + SEARCH_DEBOUNCE).await);

    let feed = storefront.feed();
    assert_eq!(*feed.phase(), FeedPhase::Empty);
    assert!(feed.parts().is_empty());
    assert_eq!(feed.total(), 0);
    assert!(!feed.has_more());
}

// =============================================================================
// Price filter
// =============================================================================

#[tokio::test]
async fn test_max_price_commit_resets_and_refetches() {
    let server = TestServer::spawn().await;
    let mut storefront = Storefront::new(&server.base_url).unwrap();
    storefront.open().await;

    let bound = Decimal::new(5000, 2);
    storefront.commit_max_price(Some(bound)).await;

    let feed = storefront.feed();
    assert_eq!(feed.total(), 7);
    assert_eq!(feed.parts().len(), 7);
    assert!(feed.parts().iter().all(|p| p.price <= bound));
    assert!(!feed.has_more());

    // Removing the bound restores the full catalog
    storefront.commit_max_price(None).await;
    assert_eq!(storefront.feed().total(), 15);
    assert_eq!(storefront.feed().parts().len(), PAGE_SIZE);
}

// =============================================================================
// Stale responses
// =============================================================================

#[tokio::test]
async fn test_pre_reset_response_cannot_clobber_newer_results() {
    let server = TestServer::spawn().await;
    let client = CatalogClient::new(&server.base_url).unwrap();
    let mut feed = CatalogFeed::new(PAGE_SIZE);

    // The unfiltered first page is requested, then the user types before
    // it lands
    let slow = feed.refresh();
    let fresh = feed.set_search("oil").unwrap();

    // The newer query's response applies
    let fresh_page = client.fetch_page(&fresh.query).await.unwrap();
    assert!(feed.complete(fresh.generation, fresh_page));

    // The older response arrives last and must be discarded
    let slow_page = client.fetch_page(&slow.query).await.unwrap();
    assert_eq!(slow_page.parts.len(), PAGE_SIZE);
    assert!(!feed.complete(slow.generation, slow_page));

    assert_eq!(feed_ids(feed.parts()), vec![2, 6]);
    assert_eq!(feed.total(), 2);
}

// =============================================================================
// Errors
// =============================================================================

#[tokio::test]
async fn test_unreachable_server_enters_error_phase() {
    // Nothing listens on port 1
    let mut storefront = Storefront::new("http://127.0.0.1:1").unwrap();
    storefront.open().await;

    assert!(matches!(storefront.feed().phase(), FeedPhase::Error(_)));
}

#[tokio::test]
async fn test_reopen_resets_rather_than_appends() {
    let server = TestServer::spawn().await;
    let mut storefront = Storefront::new(&server.base_url).unwrap();

    storefront.open().await;
    storefront.load_more().await;
    assert_eq!(storefront.feed().parts().len(), 15);

    // Reloading starts over at the first page instead of stacking pages
    storefront.open().await;
    assert_eq!(*storefront.feed().phase(), FeedPhase::Loaded);
    assert_eq!(storefront.feed().parts().len(), PAGE_SIZE);
    assert_eq!(feed_ids(storefront.feed().parts()), (1..=8).collect::<Vec<i32>>());
}

// =============================================================================
// Part detail and cart
// =============================================================================

#[tokio::test]
async fn test_view_part_returns_detail() {
    let server = TestServer::spawn().await;
    let storefront = Storefront::new(&server.base_url).unwrap();

    let part = storefront.view_part(PartId::new(5)).await.unwrap();
    assert_eq!(part.name, "Optima RedTop Battery");
    assert_eq!(part.price, Decimal::new(22999, 2));

    // Second view is served from the lookup cache
    let again = storefront.view_part(PartId::new(5)).await.unwrap();
    assert_eq!(again, part);
}

#[tokio::test]
async fn test_view_unknown_part_is_not_found() {
    let server = TestServer::spawn().await;
    let storefront = Storefront::new(&server.base_url).unwrap();

    let err = storefront.view_part(PartId::new(999)).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound(id) if id == PartId::new(999)));
}

#[tokio::test]
async fn test_cart_flow_through_checkout() {
    let server = TestServer::spawn().await;
    let mut storefront = Storefront::new(&server.base_url).unwrap();

    let brake_pads = storefront.view_part(PartId::new(1)).await.unwrap();
    let oil_filter = storefront.view_part(PartId::new(2)).await.unwrap();

    let cart = storefront.cart_mut();
    cart.add(&brake_pads);
    cart.add(&brake_pads);
    cart.add(&oil_filter);
    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.subtotal(), Decimal::new(19297, 2));

    cart.adjust_quantity(brake_pads.id, -1);
    cart.remove(oil_filter.id);
    assert_eq!(cart.item_count(), 1);

    let receipt = cart.checkout().unwrap();
    assert_eq!(receipt.item_count, 1);
    assert_eq!(receipt.total, Decimal::new(8999, 2));
    assert!(storefront.cart().is_empty());
}
