use async_trait::async_trait;
use serde_json::json;

use crate::domain::auth::{AuthResponse, ChangePasswordRequest, LoginRequest, RegisterRequest};
use crate::repository::errors::RepositoryResult;
use crate::repository::{AuthGateway, RestRepository};

#[async_trait]
impl AuthGateway for RestRepository {
    async fn login(&self, request: &LoginRequest) -> RepositoryResult<AuthResponse> {
        self.api.post_json("/api/auth/login", request).await
    }

    async fn register(&self, request: &RegisterRequest) -> RepositoryResult<AuthResponse> {
        self.api.post_json("/api/auth/register", request).await
    }

    async fn forgot_password(&self, email: &str) -> RepositoryResult<()> {
        self.api
            .post_unit("/api/auth/forgot-password", Some(&json!({ "email": email })))
            .await
    }

    async fn change_password(&self, request: &ChangePasswordRequest) -> RepositoryResult<()> {
        self.api
            .post_unit("/api/auth/change-password", Some(request))
            .await
    }
}
