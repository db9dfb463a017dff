//! The built-in demo dataset.
//!
//! When the first generation request cannot be completed (no key, no
//! network, unparseable reply) the session still has lost nothing, so the
//! gateway substitutes this dataset instead of surfacing an error. The
//! profile `code` marks the document's origin so the UI and the tests can
//! tell a fallback session from a generated one.

use chrono::Utc;
use iperform_models::academics::{Class, Mark, Student, Teacher};
use iperform_models::finance::FeeAccount;
use iperform_models::library::Book;
use iperform_models::messaging::Announcement;
use iperform_models::profile::SchoolProfile;
use iperform_models::roles::Role;
use iperform_models::state::SchoolState;
use iperform_models::users::User;

use crate::seed::SeedRequest;

/// Profile code marking a fallback issued for a named registration.
pub const FALLBACK_CODE: &str = "FALLBACK";

fn demo_user(username: &str, password: &str, role: Role, name: &str) -> User {
    User {
        username: username.to_string(),
        password: Some(password.to_string()),
        role,
        name: name.to_string(),
        ..User::default()
    }
}

fn demo_student_user(
    username: &str,
    password: &str,
    role: Role,
    name: &str,
    student_id: &str,
    class: &str,
    parent_id: &str,
) -> User {
    User {
        student_id: Some(student_id.to_string()),
        class: Some(class.to_string()),
        parent_id: Some(parent_id.to_string()),
        ..demo_user(username, password, role, name)
    }
}

/// Builds the demo State. With a seed, the profile name follows the
/// requested school and the code is set to [`FALLBACK_CODE`] to signal that
/// generation did not happen.
pub fn fallback_state(seed: Option<&SeedRequest>) -> SchoolState {
    let now = Utc::now().to_rfc3339();

    let school_profile = match seed {
        Some(seed) => SchoolProfile {
            name: seed.school_name.clone(),
            code: FALLBACK_CODE.to_string(),
            address: "123 Education Lane".to_string(),
            motto: "Excellence in Everything".to_string(),
            ..SchoolProfile::default()
        },
        None => SchoolProfile {
            name: "I Perform Demo School".to_string(),
            code: "IPERF".to_string(),
            address: "123 Education Lane".to_string(),
            motto: "Excellence in Everything".to_string(),
            ..SchoolProfile::default()
        },
    };

    let users = vec![
        demo_user("principal", "prin123", Role::Principal, "Dr. Principal"),
        demo_user("dos", "dos123", Role::Dos, "Mr. Academic"),
        demo_user("dod", "dod123", Role::Dod, "Mrs. Discipline"),
        demo_user("bursar", "bur123", Role::Bursar, "Mr. Finance"),
        demo_user("librarian", "lib123", Role::Librarian, "Ms. Reader"),
        demo_user("teacher1", "012", Role::Teacher, "Mr. Smith"),
        demo_student_user(
            "student1",
            "123",
            Role::Student,
            "John Student",
            "S001",
            "S4",
            "parent1",
        ),
        demo_student_user(
            "head_boy",
            "hb123",
            Role::HeadBoy,
            "James Prefect",
            "S002",
            "S6",
            "parent2",
        ),
        demo_student_user(
            "head_girl",
            "hg123",
            Role::HeadGirl,
            "Jane Prefect",
            "S003",
            "S6",
            "parent3",
        ),
        demo_user("parent1", "parent123", Role::Parent, "Mr. StudentParent"),
    ];

    let classes = ["S1", "S4", "S6"]
        .iter()
        .enumerate()
        .map(|(idx, name)| Class {
            id: idx as i64 + 1,
            name: (*name).to_string(),
            status: "Active".to_string(),
            created_at: now.clone(),
            ..Class::default()
        })
        .collect();

    let teachers = vec![Teacher {
        id: 1,
        username: "teacher1".to_string(),
        name: "Mr. Smith".to_string(),
        phone: "0700000000".to_string(),
        classes: vec!["S1".to_string(), "S4".to_string()],
        created_at: now.clone(),
        ..Teacher::default()
    }];

    let students = vec![
        Student {
            id: 1,
            username: "student1".to_string(),
            name: "John Student".to_string(),
            student_id: "S001".to_string(),
            class: "S4".to_string(),
            gender: "Male".to_string(),
            parent_id: "parent1".to_string(),
            created_at: now.clone(),
            ..Student::default()
        },
        Student {
            id: 2,
            username: "head_boy".to_string(),
            name: "James Prefect".to_string(),
            student_id: "S002".to_string(),
            class: "S6".to_string(),
            gender: "Male".to_string(),
            parent_id: "parent2".to_string(),
            created_at: now.clone(),
            ..Student::default()
        },
        Student {
            id: 3,
            username: "head_girl".to_string(),
            name: "Jane Prefect".to_string(),
            student_id: "S003".to_string(),
            class: "S6".to_string(),
            gender: "Female".to_string(),
            parent_id: "parent3".to_string(),
            created_at: now.clone(),
            ..Student::default()
        },
    ];

    let marks = vec![Mark {
        id: 1,
        student_name: "John Student".to_string(),
        student_id: "S001".to_string(),
        class_name: "S4".to_string(),
        subject: "Math".to_string(),
        mark: 85.0,
        uploaded_by: "Mr. Smith".to_string(),
        uploaded_at: now.clone(),
        ..Mark::default()
    }];

    let announcements = vec![Announcement {
        id: 1,
        text: "Welcome to the system. This is built-in demo data because the \
               AI service was unreachable."
            .to_string(),
        posted_by: "System".to_string(),
        posted_at: now.clone(),
        role: "principal".to_string(),
        ..Announcement::default()
    }];

    let books = vec![
        Book {
            id: 1,
            book_id: "B001".to_string(),
            title: "Calculus I".to_string(),
            author: "Newton".to_string(),
            is_available: true,
            ..Book::default()
        },
        Book {
            id: 2,
            book_id: "B002".to_string(),
            title: "Biology Basics".to_string(),
            author: "Darwin".to_string(),
            is_available: true,
            ..Book::default()
        },
    ];

    let fee_accounts = vec![FeeAccount {
        id: 1,
        student_id: "S001".to_string(),
        student_name: "John Student".to_string(),
        class_name: "S4".to_string(),
        term: "Term 1".to_string(),
        total_fees: 50000.0,
        amount_paid: 30000.0,
        balance: 20000.0,
        status: "Partial".to_string(),
        ..FeeAccount::default()
    }];

    SchoolState {
        school_profile,
        users,
        classes,
        teachers,
        students,
        marks,
        announcements,
        books,
        fee_accounts,
        ..SchoolState::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_dataset_has_a_principal() {
        let state = fallback_state(None);
        assert!(state.users.iter().any(|u| u.role == Role::Principal));
        assert_eq!(state.school_profile.code, "IPERF");
        assert!(!state.school_profile.name.is_empty());
    }

    #[test]
    fn test_seeded_fallback_is_marked() {
        let seed = SeedRequest::named("Hill College");
        let state = fallback_state(Some(&seed));
        assert_eq!(state.school_profile.name, "Hill College");
        assert_eq!(state.school_profile.code, FALLBACK_CODE);
    }

    #[test]
    fn test_fee_balance_is_consistent() {
        let state = fallback_state(None);
        let account = &state.fee_accounts[0];
        assert_eq!(account.balance, account.total_fees - account.amount_paid);
    }
}
