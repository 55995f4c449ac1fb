use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};

/// Body of `POST /auth/login`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub name: String,
    pub email: String,
}

impl LoginRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }
}

/// What the login form does next
#[derive(Clone, PartialEq, Debug)]
pub enum LoginOutcome {
    /// 2xx: cookie set, go to the results view
    Accepted,
    /// Non-2xx: stay on the login view
    Rejected,
    /// Request never completed: tell the user
    Failed(ApiError),
}

impl LoginOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, LoginOutcome::Accepted)
    }
}

impl From<ApiResult<bool>> for LoginOutcome {
    fn from(result: ApiResult<bool>) -> Self {
        match result {
            Ok(true) => LoginOutcome::Accepted,
            Ok(false) => LoginOutcome::Rejected,
            Err(e) => LoginOutcome::Failed(e),
        }
    }
}
