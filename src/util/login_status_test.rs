use super::*;
use crate::net::types::Comment;
use futures::executor::block_on;

struct FixedLogin(Result<LoginState, ApiError>);

impl Backend for FixedLogin {
    async fn list_comments(&self, _limit: u32) -> Result<Vec<Comment>, ApiError> {
        Ok(Vec::new())
    }

    async fn submit_comment(&self, _text: &str) -> Result<(), ApiError> {
        Ok(())
    }

    async fn delete_comments(&self) -> Result<(), ApiError> {
        Ok(())
    }

    async fn like_comment(&self, _id: i64) -> Result<(), ApiError> {
        Ok(())
    }

    async fn login_state(&self) -> Result<LoginState, ApiError> {
        self.0.clone()
    }
}

#[test]
fn check_login_passes_status_through() {
    let status = LoginState { is_logged_in: true, action_url: "/out".to_owned() };
    let backend = FixedLogin(Ok(status.clone()));
    assert_eq!(block_on(check_login(&backend)), Ok(status));
}

#[test]
fn check_login_result_drives_controls() {
    let backend = FixedLogin(Ok(LoginState { is_logged_in: false, action_url: "/in".to_owned() }));
    let mut view = LoginViewState::default();
    view.begin();
    view.finish(block_on(check_login(&backend)));
    let controls = view.controls().expect("controls after a successful check");
    assert!(!controls.delete_all);
    assert!(!controls.submit_form);
}

#[test]
fn check_login_propagates_errors() {
    let backend = FixedLogin(Err(ApiError::Status(500)));
    assert_eq!(block_on(check_login(&backend)), Err(ApiError::Status(500)));
}
