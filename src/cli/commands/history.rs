use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::views::ViewLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::model::history_rows;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{RESET, color_for_status, paint};
use crate::utils::date::resolve_date;
use crate::utils::formatting::truncate;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History {
        employee,
        days,
        as_of,
        json,
    } = cmd
    {
        let offset = cfg.offset()?;
        let as_of = resolve_date(as_of.as_ref(), &offset)?;
        let days = days.unwrap_or(cfg.default_lookback_days);

        let pool = DbPool::new(&cfg.database)?;
        let summaries = ViewLogic::history(&pool, offset, employee, days, as_of)?;
        let rows = history_rows(&summaries, &offset);

        if *json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }

        if rows.is_empty() {
            warning(format!(
                "No events for {} in the last {} days (up to {}).",
                employee, days, as_of
            ));
            return Ok(());
        }

        header(format!("History of {} ({} days up to {})", employee, days, as_of));

        let mut table = Table::new([
            "DATE", "IN", "OUT", "HOURS", "STATUS", "FIRST", "LAST", "PLACES",
        ]);
        for (row, summary) in rows.iter().zip(&summaries) {
            table.add_row(vec![
                row.fecha.clone(),
                row.entradas.to_string(),
                row.salidas.to_string(),
                paint(&row.horas, RESET),
                paint(&row.status, color_for_status(summary.status)),
                row.primer_registro.clone(),
                row.ultimo_registro.clone(),
                truncate(&row.lugares.join(", "), 60),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
