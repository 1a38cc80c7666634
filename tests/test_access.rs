use chrono::Utc;
use rust_decimal::Decimal;
use store_ratings_be::access::{AccessDecision, DenyReason, can_delete_rating, can_submit_rating};
use store_ratings_be::models::{Caller, Rating, Role, Store};

fn test_store(owner_id: i64) -> Store {
    Store {
        id: 10,
        name: "Corner Grocery and General Supplies".into(),
        email: "corner@example.com".into(),
        address: None,
        owner_id,
        average_rating: Decimal::new(0, 2),
        total_ratings: 0,
        created_at: Utc::now(),
    }
}

fn test_rating(user_id: i64) -> Rating {
    Rating {
        id: 7,
        user_id,
        store_id: 10,
        rating: 4,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn caller(id: i64, role: Role) -> Caller {
    Caller { id, role }
}

#[test]
fn test_user_can_rate_store_they_do_not_own() {
    let store = test_store(1);
    let c = caller(2, Role::User);
    assert_eq!(can_submit_rating(Some(&c), &store), AccessDecision::Allow);
}

#[test]
fn test_store_owner_can_rate_other_stores() {
    let store = test_store(1);
    let c = caller(2, Role::StoreOwner);
    assert_eq!(can_submit_rating(Some(&c), &store), AccessDecision::Allow);
}

#[test]
fn test_admin_can_rate_store_they_do_not_own() {
    let store = test_store(1);
    let c = caller(2, Role::Admin);
    assert_eq!(can_submit_rating(Some(&c), &store), AccessDecision::Allow);
}

#[test]
fn test_owner_cannot_rate_own_store() {
    let store = test_store(1);
    let c = caller(1, Role::StoreOwner);
    assert_eq!(
        can_submit_rating(Some(&c), &store),
        AccessDecision::Deny(DenyReason::SelfRatingForbidden)
    );
}

#[test]
fn test_unauthenticated_caller_cannot_submit() {
    let store = test_store(1);
    assert_eq!(
        can_submit_rating(None, &store),
        AccessDecision::Deny(DenyReason::Unauthenticated)
    );
}

#[test]
fn test_author_can_delete_own_rating() {
    let rating = test_rating(2);
    let c = caller(2, Role::User);
    assert_eq!(can_delete_rating(Some(&c), &rating), AccessDecision::Allow);
}

#[test]
fn test_admin_can_delete_any_rating() {
    let rating = test_rating(2);
    let c = caller(99, Role::Admin);
    assert_eq!(can_delete_rating(Some(&c), &rating), AccessDecision::Allow);
}

#[test]
fn test_other_user_cannot_delete_rating() {
    let rating = test_rating(2);
    let c = caller(3, Role::User);
    assert_eq!(
        can_delete_rating(Some(&c), &rating),
        AccessDecision::Deny(DenyReason::ForbiddenNotOwner)
    );
}

#[test]
fn test_store_owner_cannot_delete_other_users_rating() {
    let rating = test_rating(2);
    let c = caller(3, Role::StoreOwner);
    assert_eq!(
        can_delete_rating(Some(&c), &rating),
        AccessDecision::Deny(DenyReason::ForbiddenNotOwner)
    );
}

#[test]
fn test_unauthenticated_caller_cannot_delete() {
    let rating = test_rating(2);
    assert_eq!(
        can_delete_rating(None, &rating),
        AccessDecision::Deny(DenyReason::Unauthenticated)
    );
}

#[test]
fn test_deny_reason_codes() {
    assert_eq!(DenyReason::SelfRatingForbidden.code(), "self-rating-forbidden");
    assert_eq!(DenyReason::Unauthenticated.code(), "unauthenticated");
    assert_eq!(DenyReason::ForbiddenNotOwner.code(), "forbidden-not-owner");
}
