use serde::{Deserialize, Deserializer, Serialize};

/// Plain acknowledgement body (`{"message": "..."}`).
#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub mod user {
    use super::*;

    /// Request body shared by registration and login.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct Credentials {
        pub username: Option<String>,
        pub password: Option<String>,
    }

    /// Returned by registration and login.
    ///
    /// `user_id` is the only handle the client keeps for later calls.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct UserSession {
        pub message: String,
        pub user_id: i32,
    }
}

pub mod expense {
    use super::*;

    /// Amount as sent by a client.
    ///
    /// Both `12.5` and `"12.5"` are accepted on the wire; the engine decides
    /// whether the text form is numeric.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    #[serde(untagged)]
    pub enum AmountValue {
        Number(f64),
        Text(String),
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub user_id: Option<i32>,
        /// Calendar date, `YYYY-MM-DD`.
        pub date: Option<String>,
        pub category: Option<String>,
        pub amount: Option<AmountValue>,
        pub description: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseCreated {
        pub message: String,
        pub id: i32,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: i32,
        pub date: String,
        pub category: String,
        pub amount: f64,
        pub description: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseListResponse {
        pub expenses: Vec<ExpenseView>,
    }

    /// Partial update. Absent keys keep the stored value.
    ///
    /// `description` distinguishes an absent key (keep) from an explicit
    /// `null` (clear).
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct ExpenseUpdate {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub date: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub category: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub amount: Option<AmountValue>,
        #[serde(
            default,
            deserialize_with = "super::present",
            skip_serializing_if = "Option::is_none"
        )]
        pub description: Option<Option<String>>,
    }

    impl ExpenseUpdate {
        pub fn is_empty(&self) -> bool {
            self.date.is_none()
                && self.category.is_none()
                && self.amount.is_none()
                && self.description.is_none()
        }
    }
}

pub mod stats {
    use super::*;

    /// Per-category totals, index-aligned.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct ChartData {
        pub categories: Vec<String>,
        pub amounts: Vec<f64>,
    }
}

/// Wraps any present value (including `null`) into `Some`, so that a missing
/// key stays `None` through `#[serde(default)]`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
