use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyCount {
    pub hora: u32,
    pub cantidad: usize,
    pub entradas: usize,
    pub salidas: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceVisits {
    pub lugar: String,
    pub visitas: usize,
    pub auxiliares_unicos: usize,
}

/// System-wide statistics for one snapshot date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyStats {
    pub fecha: NaiveDate,
    pub total_registros: usize,
    pub entradas: usize,
    pub salidas: usize,
    pub auxiliares_activos: usize,
    pub ubicaciones: usize,
    pub registros_por_hora: Vec<HourlyCount>,
    pub lugares_mas_visitados: Vec<PlaceVisits>,
}
