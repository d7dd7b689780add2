use crate::cli::commands::open_store;
use crate::cli::commands::totals::print_summary;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::view::{available_categories, available_priorities, view};
use crate::errors::AppResult;
use crate::models::task::TaskRecord;
use crate::models::view::{Filters, SortConfig, SortDirection, StatusFilter};
use crate::ui::messages::header;
use crate::utils::colors::color_for_status;
use crate::utils::table::{Cell, Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        status,
        priority,
        category,
        sort,
        desc,
    } = cmd
    {
        let filters = Filters {
            status: status.parse::<StatusFilter>()?,
            priority: priority.clone(),
            category: category.clone(),
        };
        let mut sort = sort
            .iter()
            .fold(SortConfig::default(), |current, key| current.toggled(*key));
        if *desc {
            sort.direction = SortDirection::Descending;
        }

        let (_pool, store) = open_store(cfg)?;
        let records = store.records();
        let rows = view(records, &filters, &sort);

        let table = build_table(&rows);
        let title = match records.first() {
            Some(first) => format!("📋 Must do today ({})", first.date),
            None => "📋 Must do today".to_string(),
        };

        println!();
        header(title, &cfg.separator_char, table.line_width());
        print!("{}", table.render());
        println!("{}", cfg.separator_char.repeat(table.line_width()));

        print_summary(records);
        println!("Priorities: {}", available_priorities(records).join(", "));
        println!("Categories: {}", available_categories(records).join(", "));
    }
    Ok(())
}

fn build_table(rows: &[&TaskRecord]) -> Table {
    let mut table = Table::new(vec![
        Column::new("ID", 3),
        Column::new("Date", 10),
        Column::new("Activity", 40),
        Column::new("Prio", 8),
        Column::new("Status", 11),
        Column::new("Plan", 5),
        Column::new("P.Start", 7),
        Column::new("P.End", 7),
        Column::new("A.Start", 7),
        Column::new("A.End", 7),
        Column::new("Act", 5),
        Column::new("Category", 20),
    ]);

    for t in rows {
        let status = t.status();
        let status_cell = if t.has_activity() {
            Cell::colored(status.as_str(), color_for_status(status))
        } else {
            Cell::plain("")
        };

        table.add_row(vec![
            Cell::plain(t.id.to_string()),
            Cell::plain(t.date.clone()),
            Cell::plain(t.activity.clone()),
            Cell::plain(t.priority.clone()),
            status_cell,
            Cell::plain(t.planned_duration.clone()),
            Cell::plain(t.planned_start.clone()),
            Cell::plain(t.planned_end.clone()),
            Cell::plain(t.actual_start.clone()),
            Cell::plain(t.actual_end.clone()),
            Cell::plain(t.actual_duration.clone()),
            Cell::plain(t.project_category.clone()),
        ]);
    }

    table
}
