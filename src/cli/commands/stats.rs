use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::views::ViewLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};
use crate::utils::date::resolve_date;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { date, json } = cmd {
        let offset = cfg.offset()?;
        let date = resolve_date(date.as_ref(), &offset)?;

        let pool = DbPool::new(&cfg.database)?;
        let stats = ViewLogic::stats(&pool, offset, date)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
            return Ok(());
        }

        if stats.total_registros == 0 {
            warning(format!("No events on {}.", date));
            return Ok(());
        }

        header(format!("Statistics for {}", date));
        println!("Events      : {}", stats.total_registros);
        println!("Check-ins   : {}", stats.entradas);
        println!("Check-outs  : {}", stats.salidas);
        println!("Employees   : {}", stats.auxiliares_activos);
        println!("Places      : {}", stats.ubicaciones);
        println!();

        let mut hours = Table::new(["HOUR", "EVENTS", "IN", "OUT"]);
        for h in &stats.registros_por_hora {
            hours.add_row(vec![
                format!("{:02}:00", h.hora),
                h.cantidad.to_string(),
                h.entradas.to_string(),
                h.salidas.to_string(),
            ]);
        }
        print!("{}", hours.render());
        println!();

        let mut places = Table::new(["PLACE", "VISITS", "EMPLOYEES"]);
        for p in &stats.lugares_mas_visitados {
            places.add_row(vec![
                p.lugar.clone(),
                p.visitas.to_string(),
                p.auxiliares_unicos.to_string(),
            ]);
        }
        print!("{}", places.render());
    }
    Ok(())
}
