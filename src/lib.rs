pub mod cli;
pub mod gmail_api;
pub mod message;
pub mod output;
pub mod token_cache;

use cli::Cli;
use gmail_api::auth::{load_client_secret, obtain_token, StdinCodeProvider};
use message::EmailMessage;
use token_cache::TokenCache;

/// Run the one-shot send: load credentials, acquire a token (cached or
/// interactive), compose and encode the message, submit it, and print the
/// result and error lines.
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if cli.clear_token {
        return cli::handle_token_clear(&cli.token_cache);
    }

    let secret = load_client_secret(&cli.client_secret).await?;
    let cache = TokenCache::new(&cli.token_cache);
    let client = reqwest::Client::new();

    let token = obtain_token(&client, &secret, &cache, &StdinCodeProvider).await?;

    let email = EmailMessage::build(
        &cli.from,
        cli.sender.as_deref(),
        &cli.to,
        &cli.subject,
        &cli.body,
    );

    let (result, error) =
        gmail_api::send_message(&client, &token.access_token, &cli.from, &email.encoded()).await;

    // The send outcome is data, not a crash: both lines always print, even
    // when one of them is empty.
    println!("{}", output::render(&result));
    println!("{}", output::render(&error));

    Ok(())
}
