use serde::{Deserialize, Serialize};

/// Claims carried by the admin access token. The portal has a single admin
/// role; holding a valid token is holding admin rights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub iat: usize,
    pub exp: usize,
}
