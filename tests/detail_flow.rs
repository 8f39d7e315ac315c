//! Detail screen driven end to end through `App` and an in-process catalog.

mod common;

use std::time::{Duration, Instant};

use common::fake_catalog::{Call, FakeCatalog};
use common::{make_app, sweets};
use shopfront::ui::app::Screen;
use shopfront::worker::{drain, FetchOutcome};

#[tokio::test]
async fn unknown_product_shows_not_found() {
    let api = FakeCatalog::new(sweets());
    let (mut app, mut rx) = make_app();

    app.open_product(999);
    drain(&mut app, &api, &mut rx).await;

    let view = app.detail_view(Instant::now());
    assert!(!view.loading);
    assert_eq!(view.error, Some("Product not found"));
    assert_eq!(view.product, None);
    assert_eq!(api.calls(), vec![Call::Product(999)]);
}

#[tokio::test]
async fn server_failure_shows_generic_message() {
    let api = FakeCatalog::new(sweets()).failing_product(1);
    let (mut app, mut rx) = make_app();

    app.open_product(1);
    drain(&mut app, &api, &mut rx).await;

    assert_eq!(
        app.detail_view(Instant::now()).error,
        Some("Failed to load product")
    );
}

#[tokio::test]
async fn add_to_cart_toast_lasts_exactly_three_seconds() {
    let api = FakeCatalog::new(sweets());
    let (mut app, mut rx) = make_app();
    app.open_product(2);
    drain(&mut app, &api, &mut rx).await;

    let detail_before = app.detail().clone();
    let quantity_before = app.store().quantity();
    let selected_before = app.store().selected_product().cloned();

    let t0 = Instant::now();
    app.add_to_cart(t0);
    assert_eq!(app.detail_view(t0).toast, Some("Added to cart"));

    app.on_tick(t0 + Duration::from_millis(2999));
    assert_eq!(
        app.detail_view(t0 + Duration::from_millis(2999)).toast,
        Some("Added to cart")
    );

    app.on_tick(t0 + Duration::from_millis(3000));
    assert_eq!(app.detail_view(t0 + Duration::from_millis(3000)).toast, None);

    // Nothing but toast visibility changed.
    assert_eq!(app.detail(), &detail_before);
    assert_eq!(app.store().quantity(), quantity_before);
    assert_eq!(app.store().selected_product().cloned(), selected_before);
    assert_eq!(api.calls(), vec![Call::Product(2)]);
}

#[tokio::test]
async fn quantity_controls_clamp_at_one_and_reset_on_next_product() {
    let api = FakeCatalog::new(sweets());
    let (mut app, mut rx) = make_app();
    app.open_product(1);
    drain(&mut app, &api, &mut rx).await;

    app.decrement_quantity();
    assert_eq!(app.store().quantity().get(), 1);
    app.increment_quantity();
    app.increment_quantity();
    assert_eq!(app.detail_view(Instant::now()).quantity.get(), 3);

    app.open_product(3);
    assert_eq!(app.store().quantity().get(), 1);
    drain(&mut app, &api, &mut rx).await;
    let view = app.detail_view(Instant::now());
    assert_eq!(view.product.map(|p| p.title.as_str()), Some("Jelly Donut"));
    assert_eq!(view.quantity.get(), 1);
}

#[tokio::test]
async fn actions_before_load_are_ignored() {
    let (mut app, _rx) = make_app();
    app.open_product(1);

    app.increment_quantity();
    app.add_to_cart(Instant::now());

    let view = app.detail_view(Instant::now());
    assert!(view.loading);
    assert_eq!(view.quantity.get(), 1);
    assert_eq!(view.toast, None);
}

#[tokio::test]
async fn late_result_for_previous_product_is_dropped() {
    let (mut app, mut rx) = make_app();
    app.open_product(1);
    app.open_product(3);
    let _ = rx.try_recv();
    let _ = rx.try_recv();

    app.on_fetched(FetchOutcome::Product {
        id: 3,
        generation: 2,
        result: Ok(sweets()[2].clone()),
    });
    app.on_fetched(FetchOutcome::Product {
        id: 1,
        generation: 1,
        result: Ok(sweets()[0].clone()),
    });

    let view = app.detail_view(Instant::now());
    assert_eq!(view.product.map(|p| p.id), Some(3));
}

#[tokio::test]
async fn back_returns_to_a_refreshed_listing() {
    let api = FakeCatalog::new(sweets());
    let (mut app, mut rx) = make_app();
    app.open_product(1);
    drain(&mut app, &api, &mut rx).await;

    let t0 = Instant::now();
    app.add_to_cart(t0);
    app.back();
    drain(&mut app, &api, &mut rx).await;

    assert_eq!(app.screen(), Screen::Listing);
    assert_eq!(app.listing_view().products.len(), 3);
    assert_eq!(api.calls(), vec![Call::Product(1), Call::All]);

    // The toast does not follow the user back.
    app.open_product(1);
    assert_eq!(app.detail_view(t0).toast, None);
}
