use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::views::ViewLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::model::map_markers;
use crate::ui::messages::{header, warning};
use crate::utils::colors::{color_for_majority, paint};
use crate::utils::date::resolve_date;
use crate::utils::formatting::truncate;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Map { date, json } = cmd {
        let offset = cfg.offset()?;
        let date = resolve_date(date.as_ref(), &offset)?;

        let pool = DbPool::new(&cfg.database)?;
        let clusters = ViewLogic::map(&pool, offset, date)?;
        let markers = map_markers(&clusters, &offset);

        if *json {
            println!("{}", serde_json::to_string_pretty(&markers)?);
            return Ok(());
        }

        if markers.is_empty() {
            warning(format!("No events with valid coordinates on {}.", date));
            return Ok(());
        }

        header(format!("Map markers for {} ({} clusters)", date, markers.len()));

        let mut table = Table::new(["#", "LAT", "LNG", "COUNT", "MAJORITY", "EMPLOYEES"]);
        for (i, (marker, cluster)) in markers.iter().zip(&clusters).enumerate() {
            let who: Vec<String> = marker
                .members
                .iter()
                .map(|m| format!("{} ({})", m.cedula, m.entradasalida))
                .collect();
            table.add_row(vec![
                (i + 1).to_string(),
                format!("{:.6}", marker.lat),
                format!("{:.6}", marker.lng),
                marker.count.to_string(),
                paint(&marker.majority_kind, color_for_majority(cluster.majority_kind)),
                truncate(&who.join(", "), 60),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
