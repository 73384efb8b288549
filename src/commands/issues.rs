use tabled::Tabled;

use crate::cli::IssueListArgs;
use crate::client::RedmineClient;
use crate::error::Result;
use crate::output;
use crate::types::{FilterState, Issue};

#[derive(Tabled)]
struct IssueRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Subject")]
    subject: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Priority")]
    priority: String,
    #[tabled(rename = "Project")]
    project: String,
}

impl From<&Issue> for IssueRow {
    fn from(issue: &Issue) -> Self {
        Self {
            id: issue.id,
            subject: output::truncate(&issue.subject, 50),
            status: output::status_colored(&issue.status.name),
            priority: issue
                .priority
                .as_ref()
                .map(|p| output::priority_colored(&p.name))
                .unwrap_or_default(),
            project: issue.project.name.clone(),
        }
    }
}

pub async fn list(client: &RedmineClient, args: IssueListArgs) -> Result<()> {
    let issues = client.fetch_assigned_issues(args.limit).await?;
    let filter = FilterState::from_selections(args.statuses, args.priorities);
    let visible = filter.apply(&issues);

    if visible.is_empty() {
        output::print_message(if filter.is_empty() {
            "No open issues assigned to you."
        } else {
            "No issues match the selected filters."
        });
        return Ok(());
    }

    output::print_table(&visible, |issue| IssueRow::from(*issue));

    Ok(())
}

pub async fn view(client: &RedmineClient, id: u64) -> Result<()> {
    let detail = client.fetch_issue_detail(id).await?;

    output::print_item(&detail, |detail| {
        println!("#{} - {}", detail.id, detail.subject);
        println!();

        if let Some(description) = detail.description.as_deref().filter(|d| !d.is_empty()) {
            println!("{description}");
            println!();
        }

        println!("Status:   {}", output::status_colored(&detail.status.name));
        println!("Project:  {}", detail.project.name);
        println!("Web:      {}", client.issue_web_url(detail.id));
    });

    Ok(())
}

pub fn open(client: &RedmineClient, id: u64) -> Result<()> {
    let url = client.issue_web_url(id);
    webbrowser::open(&url)?;
    output::print_message(&format!("Opened {url}"));

    Ok(())
}
