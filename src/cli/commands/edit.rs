use crate::cli::commands::{log_op, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::field::{EditableField, FieldUpdate};
use crate::ui::messages::success;
use crate::utils::time::now_hhmm;

/// Handle `set`, `done`, `start` and `stop`: each edits a single cell.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (id, field, raw) = match cmd {
        Commands::Set { id, field, value } => (*id, *field, value.clone()),
        Commands::Done { id, undo } => (*id, EditableField::Done, (!undo).to_string()),
        Commands::Start { id, time } => (
            *id,
            EditableField::ActualStart,
            time.clone().unwrap_or_else(now_hhmm),
        ),
        Commands::Stop { id, time } => (
            *id,
            EditableField::ActualEnd,
            time.clone().unwrap_or_else(now_hhmm),
        ),
        _ => return Ok(()),
    };

    let update = FieldUpdate::parse(field, &raw)?;

    let (pool, mut store) = open_store(cfg)?;
    if !store.update_field(id, update) {
        return Err(AppError::TaskNotFound(id));
    }
    store.save(&pool.conn);

    log_op(
        &pool.conn,
        "set",
        &format!("#{id} {}", field.as_str()),
        &format!("{} = '{}'", field.as_str(), raw.trim()),
    );

    if let Some(t) = store.get(id) {
        let mut msg = format!("Task #{id}: {} set", field.as_str());
        match field {
            EditableField::PlannedStart | EditableField::PlannedEnd if !t.planned_duration.is_empty() => {
                msg.push_str(&format!(" (planned {} min)", t.planned_duration));
            }
            EditableField::ActualStart | EditableField::ActualEnd if !t.actual_duration.is_empty() => {
                msg.push_str(&format!(" (actual {} min)", t.actual_duration));
            }
            _ => {}
        }
        success(format!("{msg}, status: {}", t.status()));
    }

    Ok(())
}
