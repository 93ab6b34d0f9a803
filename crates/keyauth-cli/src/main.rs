// keyauth CLI - client for the API key service

use clap::{Parser, Subcommand};
use colored::Colorize;
use keyauth_core::{authorization_value, parse_authorization};
use serde::Deserialize;
use std::io::{self, Write};

const DEFAULT_API_URL: &str = "http://localhost:3000";

#[derive(Parser)]
#[command(name = "keyauth")]
#[command(version = "0.1.0")]
#[command(about = "API key authentication client", long_about = None)]
struct Cli {
    /// API server URL
    #[arg(short, long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// API key for authentication (or set KEYAUTH_API_KEY env var)
    #[arg(short = 'k', long, env = "KEYAUTH_API_KEY")]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check server health
    Status,

    /// Show how the server sees your API key
    Whoami,

    /// Extract the key from a raw Authorization header value
    Extract {
        /// Header value, e.g. "ApiKey my-key"
        value: String,
    },

    /// Print the Authorization header for a key
    Header {
        /// API key
        key: String,
    },
}

#[derive(Deserialize)]
struct WhoamiResponse {
    authenticated: bool,
    key_hint: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Build client with optional API key header
    let mut headers = reqwest::header::HeaderMap::new();
    if let Some(ref key) = cli.api_key {
        headers.insert(
            reqwest::header::AUTHORIZATION,
            reqwest::header::HeaderValue::from_str(&authorization_value(key))?,
        );
    }
    let client = reqwest::Client::builder()
        .default_headers(headers)
        .build()?;

    match cli.command {
        Commands::Status => {
            check_status(&client, &cli.api_url).await?;
        }
        Commands::Whoami => {
            if !whoami(&client, &cli.api_url).await? {
                std::process::exit(1);
            }
        }
        Commands::Extract { value } => {
            if !extract(&value) {
                std::process::exit(1);
            }
        }
        Commands::Header { key } => {
            println!("Authorization: {}", authorization_value(&key));
        }
    }

    Ok(())
}

async fn check_status(
    client: &reqwest::Client,
    api_url: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    print!("  API Server ({})... ", api_url);
    io::stdout().flush()?;

    match client.get(format!("{}/health", api_url)).send().await {
        Ok(resp) if resp.status().is_success() => {
            println!("{}", "✓ Running".green());
        }
        Ok(resp) => {
            println!("{} ({})", "✗ Error".red(), resp.status());
        }
        Err(e) => {
            println!("{} ({})", "✗ Down".red(), e);
        }
    }

    Ok(())
}

// returns false when the server rejected the request
async fn whoami(
    client: &reqwest::Client,
    api_url: &str,
) -> Result<bool, Box<dyn std::error::Error>> {
    let response = client
        .get(format!("{}/api/whoami", api_url))
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let error = response.text().await?;
        println!("{} {} {}", "Error:".red().bold(), status, error);
        return Ok(false);
    }

    let result: WhoamiResponse = response.json().await?;

    if result.authenticated {
        println!("{}", "Authenticated".green().bold());
    } else {
        println!("{}", "Authentication disabled on server".yellow());
    }
    if let Some(hint) = result.key_hint {
        println!("{} {}", "Key:".dimmed(), hint.cyan());
    }

    Ok(true)
}

// returns false when no key could be extracted
fn extract(value: &str) -> bool {
    match parse_authorization(value) {
        Some(key) => {
            println!("{}", key);
            true
        }
        None => {
            eprintln!("{}", "No API key found in header value".red());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_extract_command() {
        let cli = Cli::try_parse_from(["keyauth", "extract", "ApiKey abc"]).unwrap();

        match cli.command {
            Commands::Extract { value } => assert_eq!(value, "ApiKey abc"),
            _ => panic!("expected extract command"),
        }
        assert_eq!(cli.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_parse_api_key_flag() {
        let cli = Cli::try_parse_from(["keyauth", "-k", "secret", "whoami"]).unwrap();

        assert_eq!(cli.api_key.as_deref(), Some("secret"));
        assert!(matches!(cli.command, Commands::Whoami));
    }

    // answers a single request with a canned HTTP response
    async fn serve_once(response: &'static str) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_whoami_rejected_reports_failure() {
        let api_url = serve_once(
            "HTTP/1.1 401 Unauthorized\r\ncontent-type: application/json\r\ncontent-length: 38\r\nconnection: close\r\n\r\n{\"error\":\"Invalid API key\",\"code\":401}",
        )
        .await;
        let client = reqwest::Client::new();

        assert!(!whoami(&client, &api_url).await.unwrap());
    }

    #[tokio::test]
    async fn test_whoami_authenticated() {
        let api_url = serve_once(
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: 44\r\nconnection: close\r\n\r\n{\"authenticated\":true,\"key_hint\":\"****-123\"}",
        )
        .await;
        let client = reqwest::Client::new();

        assert!(whoami(&client, &api_url).await.unwrap());
    }

    #[test]
    fn test_extract() {
        assert!(extract("ApiKey my-secret-key-123"));
        assert!(extract("ApiKey "));
        assert!(!extract("Bearer token123"));
        assert!(!extract("ApiKey"));
    }
}
