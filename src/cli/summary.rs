//! Role-specific snapshot summaries.
//!
//! The dashboards of the original render a slice of state per role; the
//! console renders the same slices as text. Pure functions over a snapshot,
//! no dispatch.

use std::fmt::Write;

use iperform_models::{Role, SchoolState, User};

/// Renders the signed-in user's view of the current state.
pub fn role_summary(user: &User, state: &SchoolState) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "── {} · {} ({})",
        state.school_profile.name, user.name, user.role
    );

    match &user.role {
        Role::Principal => principal(&mut out, state),
        Role::Dos => dos(&mut out, state),
        Role::Dod => dod(&mut out, state),
        Role::Teacher => teacher(&mut out, state, user),
        Role::Student => student(&mut out, state, user),
        Role::Librarian => librarian(&mut out, state),
        Role::Bursar => bursar(&mut out, state),
        Role::Secretary => secretary(&mut out, state),
        Role::StockKeeper => stock_keeper(&mut out, state),
        Role::HeadBoy | Role::HeadGirl => prefect(&mut out, state),
        Role::Parent => parent(&mut out, state, user),
        Role::Unrecognized(label) => {
            let _ = writeln!(
                out,
                "The role '{}' is not recognized by the system. Log out and try again.",
                label
            );
        }
    }
    out
}

fn principal(out: &mut String, state: &SchoolState) {
    let fees: f64 = state.fee_accounts.iter().map(|a| a.total_fees).sum();
    let paid: f64 = state.fee_accounts.iter().map(|a| a.amount_paid).sum();
    let open_conduct = state
        .conduct_events
        .iter()
        .filter(|e| e.status == "sent_out")
        .count();
    let _ = writeln!(
        out,
        "{} students · {} teachers · {} classes",
        state.students.len(),
        state.teachers.len(),
        state.classes.len()
    );
    let _ = writeln!(
        out,
        "Fees: {:.0} collected of {:.0} · {} open conduct cases · {} announcements",
        paid,
        fees,
        open_conduct,
        state.announcements.len()
    );
}

fn dos(out: &mut String, state: &SchoolState) {
    let active_classes = state
        .classes
        .iter()
        .filter(|c| c.status == "Active")
        .count();
    let _ = writeln!(
        out,
        "{} active classes · {} teachers · {} students on roll",
        active_classes,
        state.teachers.len(),
        state.students.len()
    );
    let _ = writeln!(
        out,
        "{} marks recorded · {} notes · {} test papers shared",
        state.marks.len(),
        state.notes.len(),
        state.tests.len()
    );
}

fn dod(out: &mut String, state: &SchoolState) {
    let out_now = state
        .conduct_events
        .iter()
        .filter(|e| e.status == "sent_out")
        .count();
    let _ = writeln!(
        out,
        "{} conduct events ({} currently out) · {} permissions issued",
        state.conduct_events.len(),
        out_now,
        state.permissions.len()
    );
    let _ = writeln!(
        out,
        "{} dining seats assigned · {} dormitory allocations",
        state.dining_hall_seating.len(),
        state.dormitory_allocation.len()
    );
}

fn teacher(out: &mut String, state: &SchoolState, user: &User) {
    let classes = state
        .teachers
        .iter()
        .find(|t| t.username == user.username)
        .map(|t| t.classes.join(", "))
        .unwrap_or_default();
    let my_marks = state
        .marks
        .iter()
        .filter(|m| m.uploaded_by == user.name)
        .count();
    let _ = writeln!(
        out,
        "Classes: {}",
        if classes.is_empty() { "-" } else { classes.as_str() }
    );
    let _ = writeln!(
        out,
        "{} marks uploaded by you · {} registers recorded · {} conduct events",
        my_marks,
        state.attendances.len(),
        state.conduct_events.len()
    );
}

fn student(out: &mut String, state: &SchoolState, user: &User) {
    let sid = user.student_id.as_deref().unwrap_or("");
    let my_marks: Vec<&iperform_models::academics::Mark> = state
        .marks
        .iter()
        .filter(|m| m.student_id == sid)
        .collect();
    let conduct: f64 = state
        .conduct_marks
        .iter()
        .filter(|c| c.student_id == sid)
        .map(|c| c.score)
        .sum();
    let balance: f64 = state
        .fee_accounts
        .iter()
        .filter(|a| a.student_id == sid)
        .map(|a| a.balance)
        .sum();
    let _ = writeln!(
        out,
        "{} marks on record · conduct score {:+.0} · fee balance {:.0}",
        my_marks.len(),
        conduct,
        balance
    );
    if let Some(best) = my_marks
        .iter()
        .max_by(|a, b| a.mark.total_cmp(&b.mark))
    {
        let _ = writeln!(out, "Best subject: {} ({:.0})", best.subject, best.mark);
    }
}

fn librarian(out: &mut String, state: &SchoolState) {
    let available = state.books.iter().filter(|b| b.is_available).count();
    let on_loan = state
        .borrowed_books
        .iter()
        .filter(|b| b.returned_at.is_none())
        .count();
    let unpaid: f64 = state
        .fines
        .iter()
        .filter(|f| !f.is_paid)
        .map(|f| f.amount)
        .sum();
    let _ = writeln!(
        out,
        "{} titles ({} available) · {} on loan · {:.0} in unpaid fines",
        state.books.len(),
        available,
        on_loan,
        unpaid
    );
}

fn bursar(out: &mut String, state: &SchoolState) {
    let fees: f64 = state.fee_accounts.iter().map(|a| a.total_fees).sum();
    let paid: f64 = state.fee_accounts.iter().map(|a| a.amount_paid).sum();
    let expenses: f64 = state.expenses.iter().map(|e| e.amount).sum();
    let unpaid_accounts = state
        .fee_accounts
        .iter()
        .filter(|a| a.status != "Paid")
        .count();
    let _ = writeln!(
        out,
        "Collected {:.0} of {:.0} · {} accounts outstanding",
        paid, fees, unpaid_accounts
    );
    let _ = writeln!(
        out,
        "{} payments on file · {:.0} recorded expenses",
        state.payments.len(),
        expenses
    );
}

fn secretary(out: &mut String, state: &SchoolState) {
    let _ = writeln!(
        out,
        "{} announcements · {} messages · {} group messages",
        state.announcements.len(),
        state.messages.len(),
        state.group_messages.len()
    );
}

fn stock_keeper(out: &mut String, state: &SchoolState) {
    let low = state.stock_items.iter().filter(|i| i.quantity < 10).count();
    let _ = writeln!(
        out,
        "{} stock lines · {} running low",
        state.stock_items.len(),
        low
    );
}

fn prefect(out: &mut String, state: &SchoolState) {
    let out_now = state
        .conduct_events
        .iter()
        .filter(|e| e.status == "sent_out")
        .count();
    let _ = writeln!(
        out,
        "{} students out of class · {} active permissions · {} announcements",
        out_now,
        state.permissions.len(),
        state.announcements.len()
    );
}

fn parent(out: &mut String, state: &SchoolState, user: &User) {
    let children: Vec<&str> = state
        .students
        .iter()
        .filter(|s| s.parent_id == user.username)
        .map(|s| s.name.as_str())
        .collect();
    let unread = state
        .messages
        .iter()
        .filter(|m| m.recipient_id.as_deref() == Some(user.username.as_str()) && !m.read)
        .count();
    let _ = writeln!(
        out,
        "Children: {}",
        if children.is_empty() {
            "-".to_string()
        } else {
            children.join(", ")
        }
    );
    let _ = writeln!(out, "{} unread messages", unread);
}

#[cfg(test)]
mod tests {
    use super::*;
    use iperform_gateway::fallback_state;

    #[test]
    fn test_every_fallback_user_gets_a_summary() {
        let state = fallback_state(None);
        for user in &state.users {
            let text = role_summary(user, &state);
            assert!(text.contains(&state.school_profile.name));
            assert!(text.lines().count() >= 2, "thin summary for {}", user.username);
        }
    }

    #[test]
    fn test_unrecognized_role_is_reported() {
        let state = fallback_state(None);
        let user = User {
            username: "x".to_string(),
            name: "X".to_string(),
            role: Role::Unrecognized("janitor".to_string()),
            ..User::default()
        };
        let text = role_summary(&user, &state);
        assert!(text.contains("not recognized"));
    }
}
