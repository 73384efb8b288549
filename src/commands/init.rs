use std::io::{self, Write};

use url::Url;

use crate::config::Config;
use crate::error::{RedmineError, Result};

pub fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        print!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("Redmine CLI Configuration");
    println!("=========================\n");

    let name = prompt("Server display name (e.g., Work) [optional]: ")?;

    let url = prompt("Server base URL (e.g., https://redmine.example.com): ")?;
    if url.is_empty() {
        return Err(RedmineError::MissingBaseUrl);
    }
    Url::parse(&url).map_err(|_| RedmineError::InvalidUrl(url.clone()))?;

    let api_key = prompt("API key (My account -> API access key on your server): ")?;
    if api_key.is_empty() {
        return Err(RedmineError::MissingApiKey);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut config_content = String::new();
    if !name.is_empty() {
        config_content.push_str(&format!("name = \"{name}\"\n"));
    }
    config_content.push_str(&format!("url = \"{url}\"\n"));
    config_content.push_str(&format!("api_key = \"{api_key}\"\n"));

    std::fs::write(&config_path, config_content)?;

    println!("\nConfig saved to {}", config_path.display());
    println!("You can now use 'redmine' commands!");

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
