use serde::{Deserialize, Serialize};

/// Claims embedded in a teacher access token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // teacher username
    pub exp: usize,
    pub iat: usize,
}

/// Teacher identity carried by the request, if any. The username still has to
/// resolve to a registered teacher before it authorizes anything.
#[derive(Debug, Clone, Default)]
pub struct TeacherCredential(pub Option<String>);
