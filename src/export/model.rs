// src/export/model.rs

use crate::models::cluster::Cluster;
use crate::models::event::Event;
use crate::models::session_summary::DailySessionSummary;
use crate::utils::time::{format_hours, format_local};
use chrono::FixedOffset;
use serde::Serialize;

/// One row of the history panel.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct HistoryRow {
    pub fecha: String,
    pub entradas: usize,
    pub salidas: usize,
    pub horas: String,
    pub lugares: Vec<String>,
    pub status: String,
    pub primer_registro: String,
    pub ultimo_registro: String,
}

impl HistoryRow {
    pub fn from_summary(s: &DailySessionSummary, offset: &FixedOffset) -> Self {
        Self {
            fecha: s.date.format("%Y-%m-%d").to_string(),
            entradas: s.check_in_count,
            salidas: s.check_out_count,
            horas: format_hours(s.worked_duration.as_ref()),
            lugares: s.visited_places.clone(),
            status: s.status.as_str().to_string(),
            primer_registro: format_local(&s.first_event, offset),
            ultimo_registro: format_local(&s.last_event, offset),
        }
    }
}

/// Event summary shown inside a map marker.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MarkerMember {
    pub cedula: String,
    pub entradasalida: String,
    pub lugar: String,
    pub tiempo: String,
}

impl MarkerMember {
    pub fn from_event(ev: &Event, offset: &FixedOffset) -> Self {
        Self {
            cedula: ev.employee_id.clone(),
            entradasalida: ev.kind.to_db_str().to_string(),
            lugar: ev.place.clone(),
            tiempo: format_local(&ev.timestamp, offset),
        }
    }
}

/// One marker of the live map.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MapMarker {
    pub lat: f64,
    pub lng: f64,
    pub count: usize,
    #[serde(rename = "majorityKind")]
    pub majority_kind: String,
    pub members: Vec<MarkerMember>,
}

impl MapMarker {
    pub fn from_cluster(c: &Cluster, offset: &FixedOffset) -> Self {
        Self {
            lat: c.centroid.lat,
            lng: c.centroid.lon,
            count: c.members.len(),
            majority_kind: c.majority_kind.as_str().to_string(),
            members: c
                .members
                .iter()
                .map(|ev| MarkerMember::from_event(ev, offset))
                .collect(),
        }
    }
}

/// Flat CSV row for the map view: one line per member.
#[derive(Serialize, Clone, Debug)]
pub struct MapCsvRow {
    pub cluster: usize,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "majorityKind")]
    pub majority_kind: String,
    pub cedula: String,
    pub entradasalida: String,
    pub lugar: String,
    pub tiempo: String,
}

/// Flat CSV row for the history view; places joined with `;`.
#[derive(Serialize, Clone, Debug)]
pub struct HistoryCsvRow {
    pub fecha: String,
    pub entradas: usize,
    pub salidas: usize,
    pub horas: String,
    pub lugares: String,
    pub status: String,
    pub primer_registro: String,
    pub ultimo_registro: String,
}

pub fn history_rows(summaries: &[DailySessionSummary], offset: &FixedOffset) -> Vec<HistoryRow> {
    summaries
        .iter()
        .map(|s| HistoryRow::from_summary(s, offset))
        .collect()
}

pub fn map_markers(clusters: &[Cluster], offset: &FixedOffset) -> Vec<MapMarker> {
    clusters
        .iter()
        .map(|c| MapMarker::from_cluster(c, offset))
        .collect()
}

pub(crate) fn history_csv_rows(rows: &[HistoryRow]) -> Vec<HistoryCsvRow> {
    rows.iter()
        .map(|r| HistoryCsvRow {
            fecha: r.fecha.clone(),
            entradas: r.entradas,
            salidas: r.salidas,
            horas: r.horas.clone(),
            lugares: r.lugares.join(";"),
            status: r.status.clone(),
            primer_registro: r.primer_registro.clone(),
            ultimo_registro: r.ultimo_registro.clone(),
        })
        .collect()
}

pub(crate) fn map_csv_rows(markers: &[MapMarker]) -> Vec<MapCsvRow> {
    markers
        .iter()
        .enumerate()
        .flat_map(|(i, m)| {
            m.members.iter().map(move |mem| MapCsvRow {
                cluster: i + 1,
                lat: m.lat,
                lng: m.lng,
                majority_kind: m.majority_kind.clone(),
                cedula: mem.cedula.clone(),
                entradasalida: mem.entradasalida.clone(),
                lugar: mem.lugar.clone(),
                tiempo: mem.tiempo.clone(),
            })
        })
        .collect()
}
