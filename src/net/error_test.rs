use super::*;

#[test]
fn check_status_accepts_success_range() {
    assert_eq!(check_status(200), Ok(()));
    assert_eq!(check_status(201), Ok(()));
    assert_eq!(check_status(204), Ok(()));
}

#[test]
fn check_status_classifies_unauthorized_and_not_found() {
    assert_eq!(check_status(401), Err(ApiError::Unauthorized));
    assert_eq!(check_status(404), Err(ApiError::NotFound));
}

#[test]
fn check_status_lumps_other_failures() {
    assert_eq!(check_status(400), Err(ApiError::Status(400)));
    assert_eq!(check_status(403), Err(ApiError::Status(403)));
    assert_eq!(check_status(500), Err(ApiError::Status(500)));
    assert_eq!(check_status(302), Err(ApiError::Status(302)));
}

#[test]
fn only_unauthorized_ends_session() {
    assert!(ApiError::Unauthorized.ends_session());
    assert!(!ApiError::NotFound.ends_session());
    assert!(!ApiError::Status(500).ends_session());
    assert!(!ApiError::NotAuthenticated.ends_session());
}

#[test]
fn login_message_distinguishes_wrong_credentials() {
    assert_eq!(ApiError::Unauthorized.login_message(), "Wrong credentials");
    assert_eq!(
        ApiError::Request("offline".to_owned()).login_message(),
        "An unknown error occurred, please try again later"
    );
    assert_eq!(ApiError::NotFound.login_message(), "An unknown error occurred, please try again later");
}

#[test]
fn session_error_converts_to_not_authenticated() {
    assert_eq!(ApiError::from(SessionError::NotAuthenticated), ApiError::NotAuthenticated);
}
