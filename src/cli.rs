use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the OAuth client secret file downloaded from the provider.
    #[clap(long, default_value = "client_secret.json")]
    pub client_secret: PathBuf,

    /// Path to the cached token file (created on first successful consent).
    #[clap(long, default_value = "token.json")]
    pub token_cache: PathBuf,

    /// Sender address; also used as the authenticated Gmail user.
    #[clap(long)]
    pub from: String,

    /// Recipient address.
    #[clap(long)]
    pub to: String,

    /// Display name for the Sender header, as in "Name <from>".
    #[clap(long)]
    pub sender: Option<String>,

    /// Subject line.
    #[clap(long, default_value = "")]
    pub subject: String,

    /// HTML body of the message.
    #[clap(long, default_value = "")]
    pub body: String,

    /// Delete the cached token file and exit.
    #[clap(long)]
    pub clear_token: bool,
}

pub fn handle_token_clear(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = std::fs::remove_file(path) {
        eprintln!("Failed to delete cached token {}: {}", path.display(), e);
    } else {
        println!("Cached token removed. Exiting.");
    }
    Ok(())
}
