use learnhub::middleware::auth::AuthUser;
use learnhub::middleware::role::{check_any_role, check_role};
use learnhub::modules::users::model::{Identity, UserRole};
use uuid::Uuid;

fn create_test_auth_user(role: UserRole) -> AuthUser {
    AuthUser(Identity {
        id: Uuid::new_v4(),
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        role,
    })
}

#[test]
fn test_check_role_exact_match() {
    let auth_user = create_test_auth_user(UserRole::Admin);
    assert!(check_role(&auth_user, UserRole::Admin).is_ok());

    let auth_user = create_test_auth_user(UserRole::Instructor);
    assert!(check_role(&auth_user, UserRole::Instructor).is_ok());

    let auth_user = create_test_auth_user(UserRole::Student);
    assert!(check_role(&auth_user, UserRole::Student).is_ok());
}

#[test]
fn test_check_role_no_match() {
    let auth_user = create_test_auth_user(UserRole::Student);
    assert!(check_role(&auth_user, UserRole::Admin).is_err());

    let auth_user = create_test_auth_user(UserRole::Instructor);
    assert!(check_role(&auth_user, UserRole::Admin).is_err());

    let auth_user = create_test_auth_user(UserRole::Admin);
    assert!(check_role(&auth_user, UserRole::Student).is_err());
}

#[test]
fn test_check_any_role_single_match() {
    let auth_user = create_test_auth_user(UserRole::Admin);
    assert!(check_any_role(&auth_user, &[UserRole::Admin]).is_ok());
}

#[test]
fn test_check_any_role_multiple_match() {
    let allowed = [UserRole::Instructor, UserRole::Admin];

    let auth_user = create_test_auth_user(UserRole::Instructor);
    assert!(check_any_role(&auth_user, &allowed).is_ok());

    let auth_user = create_test_auth_user(UserRole::Admin);
    assert!(check_any_role(&auth_user, &allowed).is_ok());
}

#[test]
fn test_check_any_role_no_match() {
    let allowed = [UserRole::Instructor, UserRole::Admin];
    let auth_user = create_test_auth_user(UserRole::Student);
    assert!(check_any_role(&auth_user, &allowed).is_err());
}

#[test]
fn test_check_any_role_empty_list_denies() {
    let auth_user = create_test_auth_user(UserRole::Admin);
    assert!(check_any_role(&auth_user, &[]).is_err());
}

#[test]
fn test_rejection_enumerates_allowed_roles() {
    let auth_user = create_test_auth_user(UserRole::Student);
    let err = check_any_role(&auth_user, &[UserRole::Instructor, UserRole::Admin]).unwrap_err();

    let message = err.to_string();
    assert!(message.contains("instructor"));
    assert!(message.contains("admin"));
}
