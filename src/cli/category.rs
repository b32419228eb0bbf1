//! CLI command for listing categories

use crate::display::format_category_list;
use crate::error::FinanceResult;
use crate::storage::Storage;

/// List all categories, grouped by type
pub fn handle_categories_command(storage: &Storage) -> FinanceResult<()> {
    let categories = storage.categories.get_all()?;
    print!("{}", format_category_list(&categories));
    Ok(())
}
