//! `auth` command handlers.

use crate::{
    auth::{Credentials, Session, TokenStore},
    error::Result,
};

/// Run the one-time authorization flow and cache the token.
pub async fn handle_login() -> Result<()> {
    let session = Session::new(Credentials::from_env()?);
    session.authorize().await?;

    println!(
        "✓ Authorization complete; token cached at {}",
        session.store().path().display()
    );
    Ok(())
}

/// Report the state of the cached token.
pub fn handle_status() -> Result<()> {
    let store = TokenStore::new();

    match store.load() {
        Some(token) if !token.is_expired() => {
            println!("✓ Cached token is valid (expires at unix {})", token.expires_at);
        }
        Some(_) => {
            println!("Cached token is expired; it will be refreshed on the next request");
        }
        None => {
            println!("No cached token; run `yahoo-fbb auth login`");
        }
    }

    Ok(())
}
