//! Budget list formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::{Budget, Category};

use super::report::truncate;

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format budget records as a table, naming each category
pub fn format_budget_table(
    budgets: &[Budget],
    categories: &[Category],
    settings: &Settings,
) -> String {
    if budgets.is_empty() {
        return "No budgets found.\n".to_string();
    }

    let rows: Vec<BudgetRow> = budgets
        .iter()
        .map(|budget| {
            let category = categories
                .iter()
                .find(|c| c.id == budget.category_id)
                .map(|c| truncate(&c.name, 20))
                .unwrap_or_else(|| format!("(unknown #{})", budget.category_id));
            BudgetRow {
                id: budget.id.to_string(),
                month: budget.month.to_string(),
                category,
                amount: settings.format_money(budget.amount),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let mut output = table.to_string();
    output.push('\n');
    output.push_str(&format!("{} budget(s)\n", budgets.len()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetId, BudgetMonth, CategoryId, Money, NewBudget, NewCategory};

    #[test]
    fn test_table_names_categories() {
        let march = BudgetMonth::new(2024, 3).unwrap();
        let food = Category::from_draft(CategoryId::new(1), NewCategory::expense("Food"));
        let budgets = vec![
            Budget::from_draft(
                BudgetId::new(4),
                NewBudget::new(food.id, Money::from_dollars(400), march),
            ),
            Budget::from_draft(
                BudgetId::new(5),
                NewBudget::new(CategoryId::new(9), Money::from_dollars(20), march),
            ),
        ];

        let output = format_budget_table(&budgets, &[food], &Settings::default());
        assert!(output.contains("Food"));
        assert!(output.contains("$400.00"));
        assert!(output.contains("2024-03"));
        assert!(output.contains("(unknown #9)"));
        assert!(output.contains("2 budget(s)"));
    }
}
