use crate::domain::ports::Storage;
use crate::utils::error::{FolioError, Result};

/// Storage key marking an authenticated admin session.
pub const SESSION_KEY: &str = "admin_session";

/// Password gate in front of the editing commands.
///
/// This is a UI convenience, not access control: the secret lives in local
/// configuration and anyone with access to the data directory can write the
/// session marker. Real protection would need a server-side check.
pub struct AccessGate<S: Storage> {
    secret: String,
    storage: S,
    authenticated: bool,
    auth_error: bool,
}

impl<S: Storage> AccessGate<S> {
    /// Pick up a session left by an earlier successful login.
    pub async fn restore(secret: impl Into<String>, storage: S) -> Result<Self> {
        let authenticated = matches!(
            storage.read_file(SESSION_KEY).await?,
            Some(bytes) if bytes == b"true"
        );
        if authenticated {
            tracing::debug!("Restored admin session");
        }

        Ok(Self {
            secret: secret.into(),
            storage,
            authenticated,
            auth_error: false,
        })
    }

    pub async fn login(&mut self, attempt: &str) -> Result<()> {
        if attempt != self.secret {
            tracing::warn!("Admin login rejected");
            self.auth_error = true;
            return Err(FolioError::AuthenticationFailed);
        }

        self.storage.write_file(SESSION_KEY, b"true").await?;
        self.authenticated = true;
        self.auth_error = false;
        tracing::info!("Admin session started");
        Ok(())
    }

    pub async fn logout(&mut self) -> Result<()> {
        self.storage.remove_file(SESSION_KEY).await?;
        self.authenticated = false;
        tracing::info!("Admin session ended");
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Whether the last login attempt failed.
    pub fn has_error(&self) -> bool {
        self.auth_error
    }

    pub fn require(&self) -> Result<()> {
        if self.authenticated {
            Ok(())
        } else {
            Err(FolioError::AuthenticationRequired)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::MemoryStorage;

    #[tokio::test]
    async fn test_wrong_password_stays_locked() {
        let storage = MemoryStorage::new();
        let mut gate = AccessGate::restore("s3cret", storage.clone()).await.unwrap();

        let result = gate.login("guess").await;

        assert!(matches!(result, Err(FolioError::AuthenticationFailed)));
        assert!(!gate.is_authenticated());
        assert!(gate.has_error());
        assert!(matches!(gate.require(), Err(FolioError::AuthenticationRequired)));
        assert_eq!(storage.get_file(SESSION_KEY).await, None);
    }

    #[tokio::test]
    async fn test_login_persists_session_until_logout() {
        let storage = MemoryStorage::new();
        let mut gate = AccessGate::restore("s3cret", storage.clone()).await.unwrap();
        gate.login("wrong").await.unwrap_err();
        gate.login("s3cret").await.unwrap();

        assert!(gate.is_authenticated());
        assert!(!gate.has_error());

        let restored = AccessGate::restore("s3cret", storage.clone()).await.unwrap();
        assert!(restored.require().is_ok());

        gate.logout().await.unwrap();
        let after_logout = AccessGate::restore("s3cret", storage).await.unwrap();
        assert!(!after_logout.is_authenticated());
    }

    #[tokio::test]
    async fn test_compare_is_exact() {
        let mut gate = AccessGate::restore("Admin", MemoryStorage::new()).await.unwrap();
        assert!(gate.login("admin").await.is_err());
        assert!(gate.login("Admin ").await.is_err());
        assert!(gate.login("Admin").await.is_ok());
    }
}
