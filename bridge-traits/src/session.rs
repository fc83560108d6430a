//! Session collaborator backed by the hosted backend service.

use serde::{Deserialize, Serialize};

use crate::{error::Result, platform::PlatformSendSync};

/// Authenticated account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: Option<String>,
}

/// Public profile row attached to an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UserProfile {
    pub full_name: Option<String>,
}

/// Identity and sign-out as exposed by the backend client.
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
pub trait SessionProvider: PlatformSendSync {
    /// The signed-in account, if any.
    fn current_user(&self) -> Option<SessionUser>;

    /// The signed-in account's profile, once loaded.
    fn profile(&self) -> Option<UserProfile>;

    async fn sign_out(&self) -> Result<()>;
}
