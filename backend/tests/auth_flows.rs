//! End-to-end auth flows over the real in-memory adapters and Argon2.

use std::sync::Arc;

use relief_backend::domain::ports::{SessionStore, UserStore};
use relief_backend::domain::{
    AuthService, Credentials, Redirect, RegisterError, RegistrationRequest, Role, USER_ID_KEY,
};
use relief_backend::outbound::crypto::Argon2Hasher;
use relief_backend::outbound::memory::{InMemorySessionStore, InMemoryUserStore};

fn make_service() -> (AuthService<InMemoryUserStore, Argon2Hasher>, Arc<InMemoryUserStore>) {
    let users = Arc::new(InMemoryUserStore::new());
    let service = AuthService::new(Arc::clone(&users), Arc::new(Argon2Hasher::new()));
    (service, users)
}

#[tokio::test]
async fn register_login_and_reach_the_user_home() {
    let (service, users) = make_service();
    let session = InMemorySessionStore::new();

    let candidate = RegistrationRequest::new("Test User", "test@example.com", "password123");
    let registered = service.register(candidate).await.expect("registration");
    assert_eq!(registered.role, Role::User);
    assert_ne!(
        registered.password_hash, "password123",
        "plaintext must never be stored"
    );

    // The store now resolves the account by email and id.
    let found = users
        .find_by_email("test@example.com")
        .await
        .expect("lookup")
        .expect("present");
    assert_eq!(found.id, registered.id);

    let creds = Credentials::try_from_parts("test@example.com", "password123").expect("creds");
    let success = service.login(&creds, &session).await.expect("login");
    assert_eq!(success.user_id, registered.id);
    assert_eq!(success.redirect, Redirect::UserHome);

    assert_eq!(
        service.user_home(&session).await.expect("route"),
        Redirect::UserHome
    );
    assert!(service.require_session(&session).await.expect("check"));
}

#[tokio::test]
async fn duplicate_email_registration_keeps_exactly_one_record() {
    let (service, users) = make_service();

    let first = RegistrationRequest::new("Test User", "existing@example.com", "password");
    service.register(first).await.expect("first registration");

    let second = RegistrationRequest::new("Another", "existing@example.com", "password");
    let err = service.register(second).await.expect_err("duplicate");
    assert!(matches!(err, RegisterError::Conflict { field: "Email" }));
    assert_eq!(users.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_registrations_for_one_email_yield_one_success() {
    let (service, users) = make_service();

    let request = |name: &str| RegistrationRequest::new(name, "race@example.com", "password123");
    let left = {
        let service = service.clone();
        let candidate = request("First Racer");
        tokio::spawn(async move { service.register(candidate).await })
    };
    let right = {
        let service = service.clone();
        let candidate = request("Second Racer");
        tokio::spawn(async move { service.register(candidate).await })
    };

    let outcomes = [
        left.await.expect("task"),
        right.await.expect("task"),
    ];
    let successes = outcomes.iter().filter(|outcome| outcome.is_ok()).count();
    assert_eq!(successes, 1, "exactly one registration may win");
    for outcome in outcomes.iter().filter(|outcome| outcome.is_err()) {
        assert!(matches!(
            outcome.as_ref().expect_err("loser"),
            RegisterError::Conflict { field: "Email" }
        ));
    }
    assert_eq!(users.len(), 1);
}

#[tokio::test]
async fn both_login_failure_causes_are_indistinguishable() {
    let (service, _users) = make_service();
    let session = InMemorySessionStore::new();

    let candidate = RegistrationRequest::new("Login User", "login@test.com", "secret123");
    service.register(candidate).await.expect("registration");

    let wrong_password = service
        .login(
            &Credentials::try_from_parts("login@test.com", "badpassword").expect("creds"),
            &session,
        )
        .await
        .expect_err("wrong password");
    let unknown_email = service
        .login(
            &Credentials::try_from_parts("wrong@test.com", "badpassword").expect("creds"),
            &session,
        )
        .await
        .expect_err("unknown email");

    assert_eq!(wrong_password.to_string(), "Invalid login credentials");
    assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    assert!(
        session.get(USER_ID_KEY).await.expect("read").is_none(),
        "failed logins must not establish identity"
    );
}

#[tokio::test]
async fn admin_accounts_land_on_the_admin_home() {
    let (service, _users) = make_service();
    let session = InMemorySessionStore::new();

    let candidate = RegistrationRequest::new("Admin User", "admin@test.com", "secret123")
        .with_role(Role::Admin)
        .with_phone("0812345678");
    service.register(candidate).await.expect("registration");

    let creds = Credentials::try_from_parts("admin@test.com", "secret123").expect("creds");
    let success = service.login(&creds, &session).await.expect("login");
    assert_eq!(success.redirect, Redirect::AdminHome);
}

#[tokio::test]
async fn anonymous_user_home_redirects_to_login() {
    let (service, _users) = make_service();
    let session = InMemorySessionStore::new();

    assert_eq!(
        service.user_home(&session).await.expect("route"),
        Redirect::Login
    );
}
