//! Per-category aggregation behind the analytics view.
//!
//! Categories are grouped by their exact stored string and listed in the
//! order they are first seen during a single pass over the input.

use std::collections::HashMap;

use crate::{EngineError, Expense, ResultEngine};

/// Sum of all amounts for one category.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Non-empty list of category totals.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    totals: Vec<CategoryTotal>,
}

impl Summary {
    /// Rebuild a summary from index-aligned sequences, as sent on the wire.
    pub fn from_parts(categories: Vec<String>, amounts: Vec<f64>) -> ResultEngine<Self> {
        if categories.len() != amounts.len() {
            return Err(EngineError::InvalidSummary(format!(
                "{} categories but {} amounts",
                categories.len(),
                amounts.len()
            )));
        }
        if categories.is_empty() {
            return Err(EngineError::NoData);
        }

        let totals = categories
            .into_iter()
            .zip(amounts)
            .map(|(category, amount)| CategoryTotal { category, amount })
            .collect();
        Ok(Self { totals })
    }

    pub fn totals(&self) -> &[CategoryTotal] {
        &self.totals
    }

    /// Split into the `(categories, amounts)` pair used by charts.
    pub fn into_parts(self) -> (Vec<String>, Vec<f64>) {
        self.totals
            .into_iter()
            .map(|total| (total.category, total.amount))
            .unzip()
    }

    pub fn total_spent(&self) -> f64 {
        self.totals.iter().map(|total| total.amount).sum()
    }

    /// Category with the largest total. Ties go to the first one listed.
    pub fn biggest_category(&self) -> &CategoryTotal {
        let mut biggest = &self.totals[0];
        for total in &self.totals[1..] {
            if total.amount > biggest.amount {
                biggest = total;
            }
        }
        biggest
    }
}

/// Group `expenses` by category and sum their amounts.
///
/// An empty input is [`EngineError::NoData`], never an empty summary.
pub fn summarize<'a, I>(expenses: I) -> ResultEngine<Summary>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for expense in expenses {
        match index.get(expense.category.as_str()) {
            Some(&position) => totals[position].amount += expense.amount,
            None => {
                index.insert(expense.category.as_str(), totals.len());
                totals.push(CategoryTotal {
                    category: expense.category.clone(),
                    amount: expense.amount,
                });
            }
        }
    }

    if totals.is_empty() {
        return Err(EngineError::NoData);
    }
    Ok(Summary { totals })
}
