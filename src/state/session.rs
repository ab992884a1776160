//! Persisted login session: the token/role/display-name triple.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session lives in browser `localStorage` under the individual
//! keys `token`, `role`, `realName` plus a combined `userInfo` JSON
//! blob. It is written by login, cleared by logout and by the HTTP
//! client's 401 handling, and read fresh by every outgoing request and
//! every navigation-guard evaluation. Readers must tolerate the blob
//! being absent, malformed, or superseded by the individual keys, and
//! a malformed blob is purged rather than surfaced as an error.
//!
//! All writes happen in a single synchronous pass so no reader can
//! observe a half-cleared session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(any(test, feature = "csr"))]
use serde::{Deserialize, Serialize};

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";
pub const REAL_NAME_KEY: &str = "realName";
pub const USER_INFO_KEY: &str = "userInfo";

/// A visitor's role within the portal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Student,
    Teacher,
}

impl Role {
    /// Parse a stored role string, case-folded and trimmed.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "student" => Some(Self::Student),
            "teacher" => Some(Self::Teacher),
            _ => None,
        }
    }

    /// Default landing route for this role.
    pub fn home_path(self) -> &'static str {
        match self {
            Self::Student => crate::routes::STUDENT_HOME_PATH,
            Self::Teacher => crate::routes::TEACHER_HOME_PATH,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
        }
    }
}

/// The persisted session exactly as stored (raw strings, no
/// normalization applied).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub role: String,
    pub real_name: String,
}

impl Session {
    /// Whether a usable token is present (whitespace-only counts as
    /// absent).
    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }

    /// Role after normalization, with the stale-role invariant applied:
    /// without a token the stored role grants nothing.
    pub fn effective_role(&self) -> Option<Role> {
        if !self.has_token() {
            return None;
        }
        Role::parse(&self.role)
    }
}

/// Shape of the combined `userInfo` blob. Every field is optional so a
/// partially written blob still merges.
#[cfg(any(test, feature = "csr"))]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct StoredBlob {
    token: Option<String>,
    role: Option<String>,
    real_name: Option<String>,
}

/// Merge the combined blob with the individually keyed values.
///
/// Blob fields win; individual keys fill whatever the blob left empty.
/// Returns the merged session and whether the blob was malformed and
/// should be purged from storage.
#[cfg(any(test, feature = "csr"))]
fn merge_stored(
    blob: Option<&str>,
    token: Option<String>,
    role: Option<String>,
    real_name: Option<String>,
) -> (Session, bool) {
    let (mut session, purge_blob) = match blob {
        None => (Session::default(), false),
        Some(raw) => match serde_json::from_str::<StoredBlob>(raw) {
            Ok(parsed) => (
                Session {
                    token: parsed.token.unwrap_or_default(),
                    role: parsed.role.unwrap_or_default(),
                    real_name: parsed.real_name.unwrap_or_default(),
                },
                false,
            ),
            Err(_) => (Session::default(), true),
        },
    };
    if session.token.is_empty() {
        session.token = token.unwrap_or_default();
    }
    if session.role.is_empty() {
        session.role = role.unwrap_or_default();
    }
    if session.real_name.is_empty() {
        session.real_name = real_name.unwrap_or_default();
    }
    (session, purge_blob)
}

/// Read the session from storage, merging the blob with the individual
/// keys. A malformed blob is purged and the remaining keys are used.
/// Outside the browser this returns the empty session.
pub fn load() -> Session {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = local_storage() else {
            return Session::default();
        };
        let read = |key: &str| storage.get_item(key).ok().flatten();
        let blob = read(USER_INFO_KEY);
        let (session, purge_blob) = merge_stored(
            blob.as_deref(),
            read(TOKEN_KEY),
            read(ROLE_KEY),
            read(REAL_NAME_KEY),
        );
        if purge_blob {
            leptos::logging::warn!("discarding malformed userInfo blob");
            let _ = storage.remove_item(USER_INFO_KEY);
        }
        session
    }
    #[cfg(not(feature = "csr"))]
    {
        Session::default()
    }
}

/// Persist a successful login. Writes the individual keys and the
/// combined blob in one synchronous pass.
pub fn save_login(token: &str, role: &str, real_name: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, token);
        let _ = storage.set_item(ROLE_KEY, role);
        let _ = storage.set_item(REAL_NAME_KEY, real_name);
        let blob = StoredBlob {
            token: Some(token.to_owned()),
            role: Some(role.to_owned()),
            real_name: Some(real_name.to_owned()),
        };
        if let Ok(raw) = serde_json::to_string(&blob) {
            let _ = storage.set_item(USER_INFO_KEY, &raw);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, role, real_name);
    }
}

/// Remove every session key in one synchronous pass. Used by logout and
/// by the HTTP client when the server reports an expired session.
pub fn clear() {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        for key in [TOKEN_KEY, ROLE_KEY, REAL_NAME_KEY, USER_INFO_KEY] {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}
