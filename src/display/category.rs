//! Category display formatting

use crate::models::{Category, FlowType};

/// Format categories grouped by flow type, expense first
pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();

    for (title, flow_type) in [("Expense", FlowType::Expense), ("Income", FlowType::Income)] {
        let group: Vec<&Category> = categories
            .iter()
            .filter(|c| c.flow_type == flow_type)
            .collect();
        if group.is_empty() {
            continue;
        }

        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&format!("{} categories\n", title));
        output.push_str(&format!(
            "{:>4}  {:<width$}  {}\n",
            "ID",
            "Name",
            "Icon",
            width = name_width
        ));
        output.push_str(&format!(
            "{:->4}  {:-<width$}  {:-<12}\n",
            "",
            "",
            "",
            width = name_width
        ));

        for category in group {
            output.push_str(&format!(
                "{:>4}  {:<width$}  {}\n",
                category.id,
                category.name,
                category.icon,
                width = name_width
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, NewCategory};

    #[test]
    fn test_grouped_by_type() {
        let categories = vec![
            Category::from_draft(CategoryId::new(1), NewCategory::income("Salary")),
            Category::from_draft(
                CategoryId::new(2),
                NewCategory::expense("Food").with_style("Utensils", "text-orange-500"),
            ),
        ];
        let output = format_category_list(&categories);

        let expense_at = output.find("Expense categories").unwrap();
        let income_at = output.find("Income categories").unwrap();
        assert!(expense_at < income_at);
        assert!(output.contains("Utensils"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(format_category_list(&[]), "No categories found.\n");
    }
}
