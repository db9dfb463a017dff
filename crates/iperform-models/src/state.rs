//! The State document.
//!
//! [`SchoolState`] is the whole application database: one aggregate holding
//! every named collection. It is created by the gateway's materialize
//! operation, wholly replaced (never patched) by every successful mutation,
//! and discarded at the end of the session. The store owns the single live
//! value; everything else reads snapshots.
//!
//! There is deliberately no `Deserialize` impl on the aggregate: the only
//! way to build a `SchoolState` from external JSON is
//! [`crate::sanitize::sanitize`], which guarantees the invariants documented
//! there.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::academics::{Attendance, Class, ConductMark, Mark, Note, Student, Teacher, TestPaper};
use crate::discipline::{ConductEvent, DiningHallSeat, DormitoryAllocation, PermissionSlip};
use crate::finance::{Expense, FeeAccount, Payment};
use crate::library::{Book, BorrowedBook, Fine, LibrarianNote};
use crate::messaging::{Announcement, GroupMessage, Message};
use crate::profile::SchoolProfile;
use crate::stock::StockItem;
use crate::users::User;

/// Wire names of every collection field, in document order. Kept next to the
/// struct so the sanitizer and the tests that assert the never-null-
/// collections invariant stay in sync with it.
pub const COLLECTION_FIELDS: [&'static str; 24] = [
    "users",
    "classes",
    "teachers",
    "students",
    "marks",
    "conductMarks",
    "notes",
    "tests",
    "announcements",
    "conductEvents",
    "permissions",
    "attendances",
    "books",
    "borrowedBooks",
    "fines",
    "librarianNotes",
    "feeAccounts",
    "payments",
    "expenses",
    "stockItems",
    "diningHallSeating",
    "dormitoryAllocation",
    "messages",
    "groupMessages",
];

/// The complete school database.
///
/// `Default` is an empty but structurally valid document: every collection
/// present (and empty) and the placeholder profile in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolState {
    pub school_profile: SchoolProfile,
    pub users: Vec<User>,
    pub classes: Vec<Class>,
    pub teachers: Vec<Teacher>,
    pub students: Vec<Student>,
    pub marks: Vec<Mark>,
    pub conduct_marks: Vec<ConductMark>,
    pub notes: Vec<Note>,
    pub tests: Vec<TestPaper>,
    pub announcements: Vec<Announcement>,
    pub conduct_events: Vec<ConductEvent>,
    pub permissions: Vec<PermissionSlip>,
    pub attendances: Vec<Attendance>,
    pub books: Vec<Book>,
    pub borrowed_books: Vec<BorrowedBook>,
    pub fines: Vec<Fine>,
    pub librarian_notes: Vec<LibrarianNote>,
    pub fee_accounts: Vec<FeeAccount>,
    pub payments: Vec<Payment>,
    pub expenses: Vec<Expense>,
    pub stock_items: Vec<StockItem>,
    pub dining_hall_seating: Vec<DiningHallSeat>,
    pub dormitory_allocation: Vec<DormitoryAllocation>,
    pub messages: Vec<Message>,
    pub group_messages: Vec<GroupMessage>,
    /// Unknown top-level fields, preserved so the full document travels back
    /// to the inference service unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SchoolState {
    /// Looks up a user by username, case-insensitively and ignoring
    /// surrounding whitespace, the way the login screen matches.
    pub fn find_user(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.matches_username(username))
    }
}
