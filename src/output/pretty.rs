//! Human-oriented rendering of cards and detail screens

use colored::Colorize;

use crate::client::models::{Facility, Organization, User};
use crate::views::{Card, PaginationControl, Resource};

use super::table::or_not_set;

/// Render a list page as cards followed by the pagination label.
pub fn format_cards<R: Resource>(
    cards: &[Card<R>],
    pagination: Option<PaginationControl>,
    total_items: u64,
) -> String {
    let mut out = String::new();

    if cards.is_empty() {
        out.push_str(&format!("No {} found.\n", R::PLURAL));
    }

    for card in cards {
        out.push_str(&format!(
            "{}  {}\n",
            card.title().bold(),
            format!("#{}", card.id()).dimmed()
        ));
        for line in card.lines() {
            out.push_str(&format!("  {}\n", line));
        }
        out.push('\n');
    }

    if let Some(control) = pagination {
        out.push_str(&format!(
            "{}  {}",
            control.label(),
            format!("({} {})", total_items, R::PLURAL).dimmed()
        ));
    }

    out.trim_end().to_string()
}

fn facility_lines(out: &mut String, facilities: &[Facility]) {
    out.push_str(&format!("{}\n", "Facilities".bold()));
    if facilities.is_empty() {
        out.push_str("  No Facility\n");
    }
    for facility in facilities {
        out.push_str(&format!(
            "  - {} {}\n",
            facility.name,
            format!("#{}", facility.id).dimmed()
        ));
    }
}

/// Read-only organization screen
pub fn format_organization(org: &Organization) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", org.name.bold()));
    out.push_str(&format!("ID:           {}\n", org.id));
    out.push_str(&format!(
        "PCC Org ID:   {}\n",
        or_not_set(org.pcc_org_id.as_deref())
    ));
    out.push_str(&format!(
        "PCC Org UUID: {}\n\n",
        or_not_set(org.pcc_org_uuid.as_deref())
    ));
    facility_lines(&mut out, &org.facilities);
    out.trim_end().to_string()
}

/// Read-only user screen
pub fn format_user(user: &User) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", user.email.bold()));
    out.push_str(&format!("ID:    {}\n", user.id));
    out.push_str(&format!("Email: {}\n\n", user.email));
    facility_lines(&mut out, &user.facilities);
    out.trim_end().to_string()
}
