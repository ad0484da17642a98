use super::*;

#[test]
fn check_status_accepts_2xx() {
    assert_eq!(check_status(200), Ok(()));
    assert_eq!(check_status(204), Ok(()));
}

#[test]
fn check_status_rejects_client_and_server_errors() {
    assert_eq!(check_status(400), Err(SiteError::Status(400)));
    assert_eq!(check_status(503), Err(SiteError::Status(503)));
    assert_eq!(check_status(302), Err(SiteError::Status(302)));
}

#[test]
fn status_error_names_the_code() {
    let err = check_status(500).expect_err("500 is a failure");
    assert_eq!(err.to_string(), "unexpected response status 500");
}
