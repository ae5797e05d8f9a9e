//! Plain-text and CSV renderings of expenses and summaries.

use std::io::Write;

use api_types::expense::ExpenseView;
use engine::Summary;
use serde::Serialize;

use crate::error::Result;

const BAR_WIDTH: usize = 30;

pub fn expense_table(expenses: &[ExpenseView], currency: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>5}  {:<10}  {:<15}  {:>12}  {}\n",
        "ID", "Date", "Category", "Amount", "Description"
    ));
    for expense in expenses {
        out.push_str(&format!(
            "{:>5}  {:<10}  {:<15}  {:>12}  {}\n",
            expense.id,
            expense.date,
            expense.category,
            format!("{currency}{:.2}", expense.amount),
            expense.description.as_deref().unwrap_or("")
        ));
    }
    out.push_str(&format!("{} items\n", expenses.len()));
    out
}

fn share(amount: f64, total: f64) -> f64 {
    if total == 0.0 { 0.0 } else { amount / total * 100.0 }
}

pub fn summary_table(summary: &Summary, currency: &str) -> String {
    let total = summary.total_spent();
    let peak = summary
        .totals()
        .iter()
        .map(|t| t.amount.abs())
        .fold(0.0_f64, f64::max);

    let mut out = String::new();
    for entry in summary.totals() {
        let width = if peak == 0.0 {
            0
        } else {
            ((entry.amount.max(0.0) / peak) * BAR_WIDTH as f64).round() as usize
        };
        out.push_str(&format!(
            "{:<15} {:>12} {:>6.1}%  {}\n",
            entry.category,
            format!("{currency}{:.2}", entry.amount),
            share(entry.amount, total),
            "█".repeat(width)
        ));
    }

    let biggest = summary.biggest_category();
    out.push_str(&format!("Total Spent: {currency}{total:.2}\n"));
    out.push_str(&format!(
        "Biggest Category: {} ({currency}{:.2})\n",
        biggest.category, biggest.amount
    ));
    out
}

#[derive(Serialize)]
struct SummaryRow<'a> {
    category: &'a str,
    amount: f64,
    share: f64,
}

pub fn write_summary_csv<W: Write>(summary: &Summary, writer: W) -> Result<()> {
    let total = summary.total_spent();
    let mut writer = csv::Writer::from_writer(writer);
    for entry in summary.totals() {
        writer.serialize(SummaryRow {
            category: &entry.category,
            amount: entry.amount,
            share: (share(entry.amount, total) * 100.0).round() / 100.0,
        })?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> Summary {
        Summary::from_parts(
            vec!["Food".to_string(), "Transport".to_string()],
            vec![150.0, 50.0],
        )
        .unwrap()
    }

    #[test]
    fn expense_table_counts_items() {
        let expenses = vec![
            ExpenseView {
                id: 1,
                date: "2024-03-09".to_string(),
                category: "Food".to_string(),
                amount: 12.5,
                description: Some("lunch".to_string()),
            },
            ExpenseView {
                id: 2,
                date: "2024-03-10".to_string(),
                category: "Bills".to_string(),
                amount: 40.0,
                description: None,
            },
        ];

        let table = expense_table(&expenses, "$");
        assert!(table.contains("$12.50"));
        assert!(table.contains("lunch"));
        assert!(table.ends_with("2 items\n"));
        assert!(expense_table(&[], "$").ends_with("0 items\n"));
    }

    #[test]
    fn summary_table_reports_total_and_biggest() {
        let table = summary_table(&summary(), "₹");
        assert!(table.contains("75.0%"));
        assert!(table.contains("25.0%"));
        assert!(table.contains("Total Spent: ₹200.00"));
        assert!(table.contains("Biggest Category: Food (₹150.00)"));
    }

    #[test]
    fn summary_csv_keeps_category_order() {
        let mut buffer = Vec::new();
        write_summary_csv(&summary(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec!["category,amount,share", "Food,150.0,75.0", "Transport,50.0,25.0"]
        );
    }
}
