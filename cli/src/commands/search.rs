//! Search the user directory

use anyhow::{Context, Result};
use colored::Colorize;

use crate::api::ApiClient;

pub async fn run(api_url: &str, query: &str) -> Result<()> {
    println!("{}", format!("Searching for '{query}'...").cyan());

    let api = ApiClient::new(api_url);
    let users = api
        .search_users(query)
        .await
        .context("Directory lookup failed")?;

    println!();

    if users.is_empty() {
        println!("{}", "No users matched.".yellow());
        return Ok(());
    }

    println!(
        "{}",
        format!("Found {} user(s):", users.len()).green().bold()
    );
    println!();

    for user in &users {
        let wallet = if user.identity_key.is_some() {
            "wallet linked".green()
        } else {
            "no wallet yet".dimmed()
        };

        println!(
            "  {} {} ({}) [{}]",
            format!("#{}", user.id).yellow(),
            user.username,
            user.display_name,
            wallet
        );
    }

    println!();
    println!(
        "{}",
        "Only users with a linked wallet can receive a crush.".dimmed()
    );

    Ok(())
}
