//! In-memory representation of a generated seed batch.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A synthetic user record.
///
/// Users are created in a batch at generation time and are immutable
/// afterwards. The database assigns the numeric `"UserId"` at insert time;
/// `user_uid` is the opaque identifier carried by the record itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "UserUid")]
    pub user_uid: Uuid,
    #[serde(rename = "FirstName")]
    pub first_name: String,
    #[serde(rename = "LastName")]
    pub last_name: String,
    #[serde(rename = "CreationDate")]
    pub creation_date: NaiveDate,
    #[serde(rename = "DOB")]
    pub dob: NaiveDate,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "StartWeight")]
    pub start_weight: f64,
}

/// A synthetic weight-log record.
///
/// `user_index` is the position of the owning user in the batch's user
/// list. Association is by this stable index rather than by comparing user
/// records, so the link survives copying and serialization. The database
/// sink maps the index to the real `"UserId"` assigned at insert time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    #[serde(rename = "LogDate")]
    pub log_date: NaiveDate,
    #[serde(rename = "Value")]
    pub value: f64,
    #[serde(rename = "UserId")]
    pub user_index: usize,
}

/// A generated batch: the user list plus the flattened weight list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MockData {
    #[serde(rename = "Users")]
    pub users: Vec<User>,
    #[serde(rename = "Weights")]
    pub weights: Vec<WeightEntry>,
}

impl MockData {
    /// Iterate the weight entries owned by the user at `user_index`.
    pub fn weights_for(&self, user_index: usize) -> impl Iterator<Item = &WeightEntry> {
        self.weights
            .iter()
            .filter(move |w| w.user_index == user_index)
    }

    /// Whether every weight entry's back-reference resolves to a user in
    /// this batch.
    pub fn is_consistent(&self) -> bool {
        self.weights.iter().all(|w| w.user_index < self.users.len())
    }
}
