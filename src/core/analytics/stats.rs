use super::TOP_PLACES_LIMIT;
use crate::models::daily_stats::{DailyStats, HourlyCount, PlaceVisits};
use crate::models::event::Event;
use chrono::{FixedOffset, NaiveDate, Timelike};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Dashboard statistics for one snapshot date.
pub fn daily_stats(date: NaiveDate, events: &[Event], offset: &FixedOffset) -> DailyStats {
    let entradas = events.iter().filter(|e| e.kind.is_check_in()).count();

    let employees: HashSet<&str> = events.iter().map(|e| e.employee_id.as_str()).collect();
    let places: HashSet<&str> = events.iter().map(|e| e.place.as_str()).collect();

    DailyStats {
        fecha: date,
        total_registros: events.len(),
        entradas,
        salidas: events.len() - entradas,
        auxiliares_activos: employees.len(),
        ubicaciones: places.len(),
        registros_por_hora: hourly_breakdown(events, offset),
        lugares_mas_visitados: top_places(events, TOP_PLACES_LIMIT),
    }
}

fn hourly_breakdown(events: &[Event], offset: &FixedOffset) -> Vec<HourlyCount> {
    let mut by_hour: BTreeMap<u32, HourlyCount> = BTreeMap::new();

    for ev in events {
        let hora = ev.timestamp.with_timezone(offset).hour();
        let slot = by_hour.entry(hora).or_insert(HourlyCount {
            hora,
            cantidad: 0,
            entradas: 0,
            salidas: 0,
        });
        slot.cantidad += 1;
        if ev.kind.is_check_in() {
            slot.entradas += 1;
        } else {
            slot.salidas += 1;
        }
    }

    by_hour.into_values().collect()
}

/// Most visited places, visits descending then name ascending.
fn top_places(events: &[Event], limit: usize) -> Vec<PlaceVisits> {
    let mut visits: HashMap<&str, (usize, HashSet<&str>)> = HashMap::new();
    for ev in events {
        let entry = visits.entry(ev.place.as_str()).or_default();
        entry.0 += 1;
        entry.1.insert(ev.employee_id.as_str());
    }

    let mut out: Vec<PlaceVisits> = visits
        .into_iter()
        .map(|(lugar, (visitas, who))| PlaceVisits {
            lugar: lugar.to_string(),
            visitas,
            auxiliares_unicos: who.len(),
        })
        .collect();

    out.sort_by(|a, b| b.visitas.cmp(&a.visitas).then_with(|| a.lugar.cmp(&b.lugar)));
    out.truncate(limit);
    out
}
