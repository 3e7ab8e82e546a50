//! Expense display formatting

use super::report::format_amount;
use crate::models::Expense;

/// Format a list of expenses as a table with a total row
pub fn format_expense_list(expenses: &[Expense], symbol: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let desc_width = expenses
        .iter()
        .map(|e| e.description.len())
        .max()
        .unwrap_or(11)
        .max(11);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<10}  {:>12}  {:<desc_width$}  {}\n",
        "Date",
        "Amount",
        "Description",
        "ID",
        desc_width = desc_width,
    ));
    output.push_str(&format!(
        "{:-<10}  {:->12}  {:-<desc_width$}  {:-<36}\n",
        "",
        "",
        "",
        "",
        desc_width = desc_width,
    ));

    for expense in expenses {
        output.push_str(&format!(
            "{:<10}  {:>12}  {:<desc_width$}  {}\n",
            expense.date,
            format_amount(expense.amount, symbol),
            expense.description,
            expense.id,
            desc_width = desc_width,
        ));
    }

    let total = expenses.iter().fold(0.0, |acc, e| acc + e.amount);
    output.push_str(&format!(
        "{:<10}  {:>12}\n",
        "TOTAL",
        format_amount(total, symbol)
    ));

    output
}
