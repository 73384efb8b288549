use crate::client::RedmineClient;
use crate::error::Result;
use crate::output;
use crate::types::FilterOptions;

/// Fetches the issue list and prints the distinct status/priority names
/// present, i.e. the values that are useful as `--status`/`--priority`
/// arguments right now.
pub async fn list(client: &RedmineClient, limit: u32) -> Result<()> {
    let issues = client.fetch_assigned_issues(limit).await?;
    let options = FilterOptions::derive(&issues);

    output::print_item(&options, |options| {
        if options.statuses.is_empty() && options.priorities.is_empty() {
            println!("No open issues assigned to you.");
            return;
        }

        println!("Statuses:");
        for status in &options.statuses {
            println!("  {}", output::status_colored(status));
        }

        println!("\nPriorities:");
        if options.priorities.is_empty() {
            println!("  (none set)");
        }
        for priority in &options.priorities {
            println!("  {}", output::priority_colored(priority));
        }
    });

    Ok(())
}
