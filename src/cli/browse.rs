//! Interactive list/detail screens
//!
//! `org browse` and `user browse` keep one list mounted for the whole
//! session. Every action goes through the same views the one-shot commands
//! use; the list is unmounted when the session ends.

use colored::Colorize;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};
use log::debug;

use crate::cli::CommandContext;
use crate::cli::entity::Presenter;
use crate::client::models::{EntityId, Facility};
use crate::error::{Error, Result};
use crate::output::pretty;
use crate::output::progress::Spinner;
use crate::views::form::{OrganizationForm, UserEditForm, UserForm};
use crate::views::{
    Card, CreateDialog, DeleteOutcome, DetailStatus, DetailView, EntityList, ListStatus,
    Organizations, PaginationControl, SubmitOutcome, Users,
};

/// Prompts that fill a resource's forms.
pub trait Interactive: Presenter {
    fn fill_create(form: &mut Self::CreateForm) -> Result<()>;

    fn fill_edit(form: &mut Self::EditForm) -> Result<()>;
}

/// Actions offered under the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListAction {
    Next,
    Previous,
    View,
    Create,
    Delete,
    Refresh,
    Quit,
}

impl ListAction {
    fn label(self) -> &'static str {
        match self {
            ListAction::Next => "Next page",
            ListAction::Previous => "Previous page",
            ListAction::View => "View",
            ListAction::Create => "Create",
            ListAction::Delete => "Delete",
            ListAction::Refresh => "Refresh",
            ListAction::Quit => "Quit",
        }
    }
}

/// Actions available for the current list state. Disabled pagination
/// buttons are left out.
fn list_actions(pagination: Option<PaginationControl>, has_items: bool) -> Vec<ListAction> {
    let mut actions = Vec::new();
    if let Some(control) = pagination {
        if !control.next_disabled() {
            actions.push(ListAction::Next);
        }
        if !control.previous_disabled() {
            actions.push(ListAction::Previous);
        }
    }
    if has_items {
        actions.push(ListAction::View);
    }
    actions.push(ListAction::Create);
    if has_items {
        actions.push(ListAction::Delete);
    }
    actions.push(ListAction::Refresh);
    actions.push(ListAction::Quit);
    actions
}

/// Run `<resource> browse`
pub async fn run<R: Interactive>(ctx: &CommandContext, resource: R, page: u32) -> Result<()> {
    let mut list = EntityList::new(resource.clone(), ctx.api.clone(), page);
    refresh(&mut list).await;

    let mut dialog = CreateDialog::new(resource);
    let result = session(ctx, &mut list, &mut dialog).await;

    list.unmount();
    result
}

async fn refresh<R: Interactive>(list: &mut EntityList<R>) {
    let _spinner = Spinner::new(format!("Loading {}...", R::PLURAL));
    list.refresh().await;
}

async fn session<R: Interactive>(
    ctx: &CommandContext,
    list: &mut EntityList<R>,
    dialog: &mut CreateDialog<R>,
) -> Result<()> {
    loop {
        println!();
        match list.status() {
            ListStatus::Ready => println!(
                "{}",
                pretty::format_cards(&list.cards(), list.pagination(), list.total_items())
            ),
            ListStatus::Failed(message) => println!("{}", message.red()),
            ListStatus::Loading => println!("Loading {}...", R::PLURAL),
        }
        println!();

        let actions = list_actions(list.pagination(), !list.items().is_empty());
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
        let Some(choice) = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(R::TITLE)
            .items(&labels)
            .default(0)
            .interact_opt()?
        else {
            return Ok(());
        };

        match actions[choice] {
            ListAction::Next => {
                let _spinner = Spinner::new(format!("Loading {}...", R::PLURAL));
                list.next().await;
            }
            ListAction::Previous => {
                let _spinner = Spinner::new(format!("Loading {}...", R::PLURAL));
                list.previous().await;
            }
            ListAction::Refresh => refresh(list).await,
            ListAction::View => {
                let cards = list.cards();
                if let Some(card) = pick_card(&cards, "View which?")? {
                    detail(ctx, list.resource().clone(), card.id()).await?;
                    refresh(list).await;
                }
            }
            ListAction::Create => create(ctx, list, dialog).await?,
            ListAction::Delete => {
                let cards = list.cards();
                if let Some(card) = pick_card(&cards, "Delete which?")? {
                    delete(ctx, list, card.clone()).await?;
                }
            }
            ListAction::Quit => return Ok(()),
        }
    }
}

fn pick_card<'a, R: Interactive>(cards: &'a [Card<R>], prompt: &str) -> Result<Option<&'a Card<R>>> {
    let labels: Vec<String> = cards
        .iter()
        .map(|card| format!("{}  #{}", card.title(), card.id()))
        .collect();
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact_opt()?;
    Ok(choice.and_then(|i| cards.get(i)))
}

async fn delete<R: Interactive>(
    ctx: &CommandContext,
    list: &mut EntityList<R>,
    mut card: Card<R>,
) -> Result<()> {
    card.request_delete();
    let confirm = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(card.confirm_prompt())
        .default(false)
        .interact()?;
    if !confirm {
        card.cancel_delete();
        return Ok(());
    }

    let outcome = card
        .confirm_delete(ctx.api.as_ref(), &ctx.notifier, |id| list.on_deleted(id))
        .await;
    if let DeleteOutcome::Failed(message) = outcome {
        debug!("Delete left the list unchanged: {}", message);
    }
    Ok(())
}

async fn create<R: Interactive>(
    ctx: &CommandContext,
    list: &mut EntityList<R>,
    dialog: &mut CreateDialog<R>,
) -> Result<()> {
    dialog.open(ctx.api.as_ref()).await;

    loop {
        R::fill_create(dialog.form_mut())?;

        let outcome = dialog
            .submit(ctx.api.as_ref(), &ctx.notifier, || list.on_created())
            .await;
        match outcome {
            SubmitOutcome::Succeeded => return Ok(()),
            SubmitOutcome::Invalid(errors) => eprintln!("{}\n{}", "Please fix:".red(), errors),
            SubmitOutcome::Failed(message) => eprintln!("{}", message.red()),
        }

        if !try_again("Try again?")? {
            dialog.close();
            return Ok(());
        }
    }
}

async fn detail<R: Interactive>(ctx: &CommandContext, resource: R, id: EntityId) -> Result<()> {
    let mut view = {
        let _spinner = Spinner::new(format!("Loading {}...", R::SINGULAR));
        DetailView::open(resource, ctx.api.clone(), async move { id.to_string() }).await
    };

    loop {
        if let DetailStatus::Failed(message) = view.status() {
            eprintln!("{}", message.red());
            break;
        }
        if let Some(entity) = view.entity() {
            println!("\n{}\n", R::render_detail(entity));
        }

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(R::TITLE)
            .items(&["Edit", "Back"][..])
            .default(0)
            .interact_opt()?;
        if choice != Some(0) {
            break;
        }

        if !view.begin_edit().await {
            continue;
        }
        loop {
            if let Some(form) = view.form_mut() {
                R::fill_edit(form)?;
            }
            match view.submit(&ctx.notifier).await {
                SubmitOutcome::Succeeded => break,
                SubmitOutcome::Invalid(errors) => {
                    eprintln!("{}\n{}", "Please fix:".red(), errors)
                }
                SubmitOutcome::Failed(message) => eprintln!("{}", message.red()),
            }
            if !try_again("Keep editing?")? {
                view.cancel_edit();
                break;
            }
        }
    }

    debug!("Returning to {}", view.back());
    Ok(())
}

fn try_again(prompt: &str) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(true)
        .interact()?)
}

fn text(prompt: &str, initial: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?)
}

fn facility_label(catalog: &[Facility], id: EntityId) -> String {
    match catalog.iter().find(|f| f.id == id) {
        Some(facility) => format!("{} (#{})", facility.name, id),
        None => format!("#{}", id),
    }
}

/// Pick a facility from the catalogue, or type an ID when it is empty.
fn pick_facility(catalog: &[Facility], current: Option<EntityId>) -> Result<Option<EntityId>> {
    if catalog.is_empty() {
        let initial = current.map(|id| id.to_string()).unwrap_or_default();
        let raw = text("Facility ID", &initial)?;
        return Ok(raw.trim().parse().ok());
    }

    let labels: Vec<String> = catalog.iter().map(|f| facility_label(catalog, f.id)).collect();
    let default = current
        .and_then(|id| catalog.iter().position(|f| f.id == id))
        .unwrap_or(0);
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Facility")
        .items(&labels)
        .default(default)
        .interact_opt()?;
    Ok(choice.and_then(|i| catalog.get(i)).map(|f| f.id).or(current))
}

fn pick_row(prompt: &str, labels: &[String]) -> Result<Option<usize>> {
    Ok(Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .items(labels)
        .default(0)
        .interact_opt()?)
}

fn fill_organization(form: &mut OrganizationForm) -> Result<()> {
    form.name = text("Organization name", &form.name)?;

    loop {
        let names: Vec<String> = form.facilities.iter().map(|row| row.name.clone()).collect();
        let rows = names.len();
        let mut items: Vec<String> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let shown = if name.is_empty() { "<empty>" } else { name };
                format!("Facility {}: {}", i + 1, shown)
            })
            .collect();
        items.push("Add facility".to_string());
        let can_remove = form.facilities.can_remove();
        if can_remove {
            items.push("Remove facility".to_string());
        }
        items.push("Done".to_string());

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Facilities")
            .items(&items)
            .default(0)
            .interact()?;

        if choice < rows {
            if let Some(row) = form.facilities.get_mut(choice) {
                row.name = text("Facility name", &row.name)?;
            }
        } else if choice == rows {
            let name = text("Facility name", "")?;
            form.add_facility(name);
        } else if can_remove && choice == rows + 1 {
            if let Some(index) = pick_row("Remove which facility?", &names)? {
                form.facilities
                    .remove(index)
                    .map_err(|e| Error::View(e.to_string()))?;
            }
        } else {
            break;
        }
    }

    if form.external_locked() {
        eprintln!("{}", "PCC identifiers cannot be changed after creation.".dimmed());
    } else {
        form.pcc_org_id = text("PCC Org ID (optional)", &form.pcc_org_id)?;
        form.pcc_org_uuid = text("PCC Org UUID (optional)", &form.pcc_org_uuid)?;
    }
    Ok(())
}

impl Interactive for Organizations {
    fn fill_create(form: &mut OrganizationForm) -> Result<()> {
        fill_organization(form)
    }

    fn fill_edit(form: &mut OrganizationForm) -> Result<()> {
        fill_organization(form)
    }
}

impl Interactive for Users {
    fn fill_create(form: &mut UserForm) -> Result<()> {
        form.email = text("Email", &form.email)?;
        let catalog = form.catalog().to_vec();
        form.facility = pick_facility(&catalog, form.facility)?;
        Ok(())
    }

    fn fill_edit(form: &mut UserEditForm) -> Result<()> {
        form.email = text("Email", &form.email)?;
        let catalog = form.catalog().to_vec();

        loop {
            let labels: Vec<String> = form
                .facilities
                .iter()
                .map(|id| facility_label(&catalog, *id))
                .collect();
            eprintln!("Assigned: {}", labels.join(", "));

            let mut items = vec!["Assign facility"];
            let can_remove = form.facilities.can_remove();
            if can_remove {
                items.push("Unassign facility");
            }
            items.push("Done");

            let choice = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Facilities")
                .items(&items)
                .default(items.len() - 1)
                .interact()?;

            match items[choice] {
                "Assign facility" => {
                    if let Some(id) = pick_facility(&catalog, None)? {
                        form.add_facility(id);
                    }
                }
                "Unassign facility" => {
                    if let Some(index) = pick_row("Unassign which facility?", &labels)? {
                        form.facilities
                            .remove(index)
                            .map_err(|e| Error::View(e.to_string()))?;
                    }
                }
                _ => break,
            }
        }
        Ok(())
    }
}
