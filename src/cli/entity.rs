//! Command handlers shared by organizations and users
//!
//! `list`, `get` and `delete` mount the same views the interactive screen
//! uses and render their final state in the requested output format.

use colored::Colorize;
use dialoguer::Confirm;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::{CommandContext, OutputFormat};
use crate::client::models::EntityId;
use crate::error::{Error, Result};
use crate::output::progress::Spinner;
use crate::output::{Formattable, json, pretty};
use crate::views::{
    Card, DeleteOutcome, DetailStatus, DetailView, EntityList, ListStatus, Resource,
    SubmitOutcome,
};

/// Terminal rendering of a [`Resource`].
pub trait Presenter: Resource {
    /// Table row for one entity
    type Row: Tabled + Serialize + for<'a> From<&'a Self::Entity>;

    /// Read-only detail screen
    fn render_detail(entity: &Self::Entity) -> String;
}

/// Turn a form submission into a command result.
pub fn submitted(outcome: SubmitOutcome) -> Result<()> {
    match outcome {
        SubmitOutcome::Succeeded => Ok(()),
        SubmitOutcome::Invalid(errors) => Err(Error::Validation(errors)),
        SubmitOutcome::Failed(message) => Err(Error::View(message)),
    }
}

/// Mount a list on `page` and wait for it to settle.
pub async fn load_list<R: Presenter>(
    ctx: &CommandContext,
    resource: R,
    page: u32,
) -> Result<EntityList<R>> {
    let list = {
        let _spinner = Spinner::new(format!("Loading {}...", R::PLURAL));
        EntityList::mount(resource, ctx.api.clone(), page).await
    };

    match list.status() {
        ListStatus::Failed(message) => Err(Error::View(message.clone())),
        _ => Ok(list),
    }
}

/// Mount a detail view for a raw route id and wait for it to settle.
pub async fn load_detail<R: Presenter>(
    ctx: &CommandContext,
    resource: R,
    raw_id: &str,
) -> Result<DetailView<R>> {
    let route = raw_id.to_string();
    let view = {
        let _spinner = Spinner::new(format!("Loading {}...", R::SINGULAR));
        DetailView::open(resource, ctx.api.clone(), async move { route }).await
    };

    match view.status() {
        DetailStatus::Failed(message) => Err(Error::View(message.clone())),
        _ => Ok(view),
    }
}

/// Render one page of a list.
pub fn render_list<R: Presenter>(list: &EntityList<R>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Pretty => Ok(pretty::format_cards(
            &list.cards(),
            list.pagination(),
            list.total_items(),
        )),
        OutputFormat::Table => {
            let rows: Vec<R::Row> = list.items().iter().map(R::Row::from).collect();
            let mut out = rows.format(format)?;
            if let Some(control) = list.pagination() {
                out.push_str(&format!("\n{}", control.label()));
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let (current_page, total_pages) = list
                .pagination()
                .map(|c| (c.current_page(), c.total_pages()))
                .unwrap_or((list.page(), 0));
            let page = crate::client::Page::new(
                list.items().to_vec(),
                current_page,
                total_pages,
                list.total_items(),
            );
            Ok(json::format_json(&page)?)
        }
    }
}

/// Run `<resource> list`
pub async fn list<R: Presenter>(ctx: &CommandContext, resource: R, page: u32) -> Result<()> {
    let list = load_list(ctx, resource, page).await?;
    println!("{}", render_list(&list, ctx.format)?);
    list.unmount();
    Ok(())
}

/// Run `<resource> get`
pub async fn get<R: Presenter>(ctx: &CommandContext, resource: R, raw_id: &str) -> Result<()> {
    let view = load_detail(ctx, resource, raw_id).await?;
    let Some(entity) = view.entity() else {
        return Err(Error::View(format!("{} not loaded", R::TITLE)));
    };

    match ctx.format {
        OutputFormat::Json => println!("{}", json::format_json(entity)?),
        OutputFormat::Table => {
            let rows = vec![R::Row::from(entity)];
            rows.print(ctx.format)?;
        }
        OutputFormat::Pretty => println!("{}", R::render_detail(entity)),
    }
    Ok(())
}

/// Run `<resource> delete`
///
/// Shows the card, asks for confirmation unless `yes`, then issues exactly
/// one DELETE.
pub async fn delete<R: Presenter>(
    ctx: &CommandContext,
    resource: R,
    raw_id: &str,
    yes: bool,
) -> Result<()> {
    let view = load_detail(ctx, resource.clone(), raw_id).await?;
    let Some(entity) = view.entity() else {
        return Err(Error::View(format!("{} not loaded", R::TITLE)));
    };
    let mut card = Card::new(resource, entity);

    card.request_delete();
    if !yes {
        eprintln!("{} {}", "⚠".yellow(), card.title().bold());
        for line in card.lines() {
            eprintln!("  {}", line);
        }
        eprintln!();

        let confirm = Confirm::new()
            .with_prompt(card.confirm_prompt())
            .default(false)
            .interact()?;

        if !confirm {
            card.cancel_delete();
            eprintln!("Cancelled.");
            return Ok(());
        }
    }

    match card
        .confirm_delete(ctx.api.as_ref(), &ctx.notifier, |_| {})
        .await
    {
        DeleteOutcome::Deleted(id) => {
            if ctx.format == OutputFormat::Json {
                print_deleted(id)?;
            }
            Ok(())
        }
        DeleteOutcome::Failed(message) => Err(Error::View(message)),
        DeleteOutcome::NotConfirming => Ok(()),
    }
}

fn print_deleted(id: EntityId) -> Result<()> {
    let data = serde_json::json!({ "deleted": true, "id": id });
    println!("{}", json::format_json(&data)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::client::MockDashboardClient;
    use crate::client::fixtures::{organizations, users};
    use crate::error::ApiError;
    use crate::views::{FieldErrors, Organizations, Users};

    fn context(mock: MockDashboardClient, format: OutputFormat) -> CommandContext {
        CommandContext::with_api(Arc::new(mock), format)
    }

    #[test]
    fn test_submitted_maps_outcomes() {
        assert!(submitted(SubmitOutcome::Succeeded).is_ok());

        let mut errors = FieldErrors::new();
        errors.push("email", "Invalid email address");
        assert!(matches!(
            submitted(SubmitOutcome::Invalid(errors)),
            Err(Error::Validation(_))
        ));

        let err = submitted(SubmitOutcome::Failed("Failed to update user: taken".into()))
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to update user: taken");
    }

    #[tokio::test]
    async fn test_render_list_pretty_and_table() {
        let mock = MockDashboardClient::new()
            .with_users(users(1, 25))
            .await;
        let ctx = context(mock, OutputFormat::Pretty);

        let list = load_list(&ctx, Users, 1).await.unwrap();
        let pretty = render_list(&list, OutputFormat::Pretty).unwrap();
        assert!(pretty.contains("user1@example.com"));
        assert!(pretty.contains("Page 1 of 3"));

        let table = render_list(&list, OutputFormat::Table).unwrap();
        assert!(table.contains("EMAIL"));
        assert!(table.ends_with("Page 1 of 3"));
    }

    #[tokio::test]
    async fn test_render_list_json_carries_page_meta() {
        let mock = MockDashboardClient::new()
            .with_organizations(organizations(1, 12))
            .await;
        let ctx = context(mock, OutputFormat::Json);

        let list = load_list(&ctx, Organizations, 2).await.unwrap();
        let out = render_list(&list, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["data"]["currentPage"], 2);
        assert_eq!(value["data"]["totalPages"], 2);
        assert_eq!(value["data"]["data"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_load_list_failure_message() {
        let mock = MockDashboardClient::new()
            .with_error(ApiError::ServerError("boom".into()))
            .await;
        let ctx = context(mock, OutputFormat::Pretty);

        let err = load_list(&ctx, Users, 1).await.err().unwrap();
        assert_eq!(
            err.to_string(),
            "Failed to fetch users. Please try again later."
        );
    }

    #[tokio::test]
    async fn test_load_detail_invalid_id() {
        let ctx = context(MockDashboardClient::new(), OutputFormat::Pretty);

        let err = load_detail(&ctx, Organizations, "abc").await.err().unwrap();
        assert_eq!(err.to_string(), "Invalid organization id: abc");
    }

    #[tokio::test]
    async fn test_delete_with_yes_issues_one_request() {
        let mock = Arc::new(
            MockDashboardClient::new()
                .with_organizations(organizations(5, 1))
                .await,
        );
        let ctx = CommandContext::with_api(mock.clone(), OutputFormat::Pretty);

        delete(&ctx, Organizations, "5", true).await.unwrap();

        assert_eq!(mock.call_counts().await.delete_organization, 1);
        assert!(mock.organizations().await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_entity_sends_no_delete() {
        let mock = Arc::new(
            MockDashboardClient::new()
                .with_users(users(3, 1))
                .await,
        );
        let ctx = CommandContext::with_api(mock.clone(), OutputFormat::Pretty);

        let err = delete(&ctx, Users, "99", true).await.err().unwrap();

        assert_eq!(err.to_string(), "Failed to fetch user. Please try again later.");
        assert_eq!(mock.call_counts().await.delete_user, 0);
        assert_eq!(mock.users().await.len(), 1);
    }
}
