//! Registration service tests

mod support;

use std::sync::Arc;

use ignitecall_core::{RegistrationError, RegistrationService};
use ignitecall_domain::{IgniteCallError, RegisterUserInput};
use support::repositories::MockUserRepository;

fn input(username: &str, name: &str) -> RegisterUserInput {
    RegisterUserInput { username: username.to_string(), name: name.to_string() }
}

#[tokio::test]
async fn registers_lowercased_user() {
    let users = MockUserRepository::new();
    let service = RegistrationService::new(Arc::new(users.clone()));

    let user = service.register(input("Maria-Souza", "Maria Souza")).await.unwrap();

    assert_eq!(user.username, "maria-souza");
    assert_eq!(user.name, "Maria Souza");
    assert!(user.email.is_none());
    assert_eq!(service.find(&user.id).await.unwrap(), Some(user));
}

#[tokio::test]
async fn duplicate_username_conflicts() {
    let users = MockUserRepository::new();
    let service = RegistrationService::new(Arc::new(users.clone()));
    service.register(input("maria", "Maria")).await.unwrap();

    let err = service.register(input("MARIA", "Outra Maria")).await.unwrap_err();

    match err {
        RegistrationError::Domain(IgniteCallError::Conflict(message)) => {
            assert_eq!(message, "Username already taken.");
        }
        other => panic!("expected conflict, got {other:?}"),
    }
    assert_eq!(users.user_count(), 1);
}

#[tokio::test]
async fn invalid_form_is_not_persisted() {
    let users = MockUserRepository::new();
    let service = RegistrationService::new(Arc::new(users.clone()));

    let err = service.register(input("jo", "Jo")).await.unwrap_err();

    let RegistrationError::Invalid(errors) = err else {
        panic!("expected validation failure");
    };
    assert_eq!(errors.error_count(), 2);
    assert_eq!(users.user_count(), 0);
}
