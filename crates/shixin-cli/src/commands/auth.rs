use clap::Subcommand;
use shixin_core::advice::{keyring_store, stored_api_key, API_KEY_ENV, API_KEY_KEYRING_ENTRY};

#[derive(Subcommand)]
pub enum AuthAction {
    /// Store the Gemini API key in the OS keyring
    Login {
        /// API key for the Gemini API
        #[arg(long)]
        api_key: String,
    },
    /// Remove the stored API key
    Logout,
    /// Check whether a credential is available
    Status,
}

pub fn run(action: AuthAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AuthAction::Login { api_key } => {
            let api_key = api_key.trim();
            if api_key.is_empty() {
                return Err("--api-key must not be empty".into());
            }
            keyring_store::set(API_KEY_KEYRING_ENTRY, api_key)?;
            println!("Gemini credential stored");
        }
        AuthAction::Logout => {
            keyring_store::delete(API_KEY_KEYRING_ENTRY)?;
            println!("Gemini credential removed");
        }
        AuthAction::Status => {
            let from_env = std::env::var(API_KEY_ENV)
                .map(|v| !v.trim().is_empty())
                .unwrap_or(false);
            if from_env {
                println!("authenticated (environment)");
            } else if stored_api_key().is_some() {
                println!("authenticated (keyring)");
            } else {
                println!("not authenticated");
            }
        }
    }
    Ok(())
}
