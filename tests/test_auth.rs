use store_ratings_be::auth::{AuthClaims, generate_jwt};
use store_ratings_be::models::{Caller, Role};

fn set_test_secret() {
    // SAFETY: tests in this binary only ever write the same value.
    unsafe { std::env::set_var("JWT_SECRET", "test-secret") };
}

#[test]
fn test_token_round_trip_yields_same_caller() {
    set_test_secret();

    let token = generate_jwt(42, Role::StoreOwner).unwrap();
    let claims = AuthClaims::from_token(&token).unwrap();
    let caller = claims.caller().unwrap();

    assert_eq!(
        caller,
        Caller {
            id: 42,
            role: Role::StoreOwner
        }
    );
}

#[test]
fn test_round_trip_preserves_each_role() {
    set_test_secret();

    for role in [Role::Admin, Role::User, Role::StoreOwner] {
        let token = generate_jwt(7, role).unwrap();
        let caller = AuthClaims::from_token(&token).unwrap().caller().unwrap();
        assert_eq!(caller.role, role);
    }
}

#[test]
fn test_garbage_token_rejected() {
    set_test_secret();

    assert!(AuthClaims::from_token("not-a-token").is_err());
}
