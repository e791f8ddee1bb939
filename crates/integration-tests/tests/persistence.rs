//! Durability of the file backend and recovery from damaged records.

#![allow(clippy::unwrap_used)]

use flora_core::{Email, ProductId, UserId};
use flora_integration_tests::TestContext;
use flora_storefront::models::User;
use flora_storefront::storage::keys;
use flora_storefront::{Storage, UnavailableStore};

#[test]
fn test_state_survives_reopen() {
    let ctx = TestContext::new().unwrap();
    ctx.add("4", 2);
    ctx.storage.toggle_wishlist(&ProductId::new("7"));
    ctx.storage.record_search("tulips");
    ctx.storage.set_user(Some(&User {
        id: UserId::new("1"),
        name: "Ivan Ivanov".to_string(),
        email: Email::parse("ivan@example.com").unwrap(),
        phone: None,
        location: None,
    }));

    let reopened = ctx.reopen().unwrap();
    assert_eq!(reopened.cart(), ctx.storage.cart());
    assert_eq!(reopened.wishlist(), vec![ProductId::new("7")]);
    assert_eq!(reopened.recent_searches(), vec!["tulips".to_string()]);
    assert_eq!(reopened.user().unwrap().name, "Ivan Ivanov");
}

#[test]
fn test_catalog_seeding_is_idempotent() {
    let ctx = TestContext::new().unwrap();
    let first = ctx.storage.products();
    assert_eq!(first.len(), 36);
    let seeded = std::fs::read_to_string(ctx.path().join("flowers_products.json")).unwrap();

    let second = ctx.reopen().unwrap().products();
    assert_eq!(first, second);
    let after = std::fs::read_to_string(ctx.path().join("flowers_products.json")).unwrap();
    assert_eq!(seeded, after);
}

#[test]
fn test_stored_catalog_is_never_reseeded() {
    let ctx = TestContext::new().unwrap();
    let mut catalog = ctx.storage.products();
    catalog.truncate(2);
    ctx.storage.set(keys::PRODUCTS, &catalog);

    assert_eq!(ctx.reopen().unwrap().products(), catalog);
}

#[test]
fn test_damaged_records_read_as_defaults() {
    let ctx = TestContext::new().unwrap();
    ctx.add("1", 1);
    std::fs::write(ctx.path().join("flowers_cart.json"), "{not json").unwrap();
    std::fs::write(ctx.path().join("flowers_wishlist.json"), "42").unwrap();

    assert!(ctx.storage.cart().is_empty());
    assert!(ctx.storage.wishlist().is_empty());

    // The next write replaces the damaged record.
    ctx.add("2", 1);
    assert_eq!(ctx.reopen().unwrap().cart().len(), 1);
}

#[test]
fn test_damaged_catalog_is_reseeded() {
    let ctx = TestContext::new().unwrap();
    std::fs::write(ctx.path().join("flowers_products.json"), "[{\"id\":").unwrap();
    assert_eq!(ctx.storage.products().len(), 36);
}

#[test]
fn test_unavailable_storage_degrades_to_defaults() {
    let storage = Storage::new(UnavailableStore);
    assert_eq!(storage.products().len(), 36);

    let product = storage.product(&ProductId::new("1")).unwrap();
    storage.add_to_cart(flora_storefront::models::CartItem::new(product, 1));
    assert!(storage.toggle_wishlist(&ProductId::new("1")));

    assert!(storage.cart().is_empty());
    assert!(storage.wishlist().is_empty());
    assert!(storage.orders().is_empty());
}
