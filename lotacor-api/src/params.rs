use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel accepted by the API for "no filter" on lota and species.
pub const ALL: &str = "all";

pub const DEFAULT_REPORT_TYPE: &str = "DPI";
pub const DEFAULT_ISLAND: &str = "7";
pub const DEFAULT_START_DATE: &str = "2025-01-16";
pub const DEFAULT_FINAL_DATE: &str = "2025-01-20";

/// Lota (auction facility) choices offered by the selector, as (value, label).
pub const LOTA_OPTIONS: &[(&str, &str)] = &[
    (ALL, "Todas as Lotas"),
    ("34", "Ponta Delgada"),
    ("PCL", "Pescado Comercializado por Lota"),
];

/// Island choices offered by the selector, as (value, label).
pub const ISLAND_OPTIONS: &[(&str, &str)] = &[("7", "São Jorge"), ("1", "Other")];

/// The query record bound to the filter form and posted to the API.
///
/// Every field is a plain string and is sent verbatim. Field order matches
/// the order of the form-encoded body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParameters {
    /// Report type code (see [`ReportType`]), never checked against the list
    #[serde(rename = "type")]
    pub report_type: String,
    /// Lota identifier or "all"
    pub lota_id: String,
    /// FAO species code or "all"
    pub fao: String,
    /// Island code
    pub ilha_id: String,
    pub start_date: String,
    pub final_date: String,
    /// Single-day override, empty when unused
    pub day_date: String,
}

impl Default for QueryParameters {
    fn default() -> Self {
        Self {
            report_type: DEFAULT_REPORT_TYPE.to_string(),
            lota_id: ALL.to_string(),
            fao: ALL.to_string(),
            ilha_id: DEFAULT_ISLAND.to_string(),
            start_date: DEFAULT_START_DATE.to_string(),
            final_date: DEFAULT_FINAL_DATE.to_string(),
            day_date: String::new(),
        }
    }
}

impl QueryParameters {
    /// Current value of a single field.
    pub fn get(&self, field: QueryField) -> &str {
        match field {
            QueryField::ReportType => &self.report_type,
            QueryField::LotaId => &self.lota_id,
            QueryField::Fao => &self.fao,
            QueryField::IlhaId => &self.ilha_id,
            QueryField::StartDate => &self.start_date,
            QueryField::FinalDate => &self.final_date,
            QueryField::DayDate => &self.day_date,
        }
    }

    /// Replace a single field, leaving the others untouched.
    pub fn set(&mut self, field: QueryField, value: impl Into<String>) {
        let value = value.into();
        match field {
            QueryField::ReportType => self.report_type = value,
            QueryField::LotaId => self.lota_id = value,
            QueryField::Fao => self.fao = value,
            QueryField::IlhaId => self.ilha_id = value,
            QueryField::StartDate => self.start_date = value,
            QueryField::FinalDate => self.final_date = value,
            QueryField::DayDate => self.day_date = value,
        }
    }

    /// The (wire name, value) pairs in body order.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        QueryField::ALL
            .iter()
            .map(|field| (field.wire_name(), self.get(*field)))
            .collect()
    }
}

/// One editable field of [`QueryParameters`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryField {
    ReportType,
    LotaId,
    Fao,
    IlhaId,
    StartDate,
    FinalDate,
    DayDate,
}

impl QueryField {
    pub const ALL: [QueryField; 7] = [
        QueryField::ReportType,
        QueryField::LotaId,
        QueryField::Fao,
        QueryField::IlhaId,
        QueryField::StartDate,
        QueryField::FinalDate,
        QueryField::DayDate,
    ];

    /// Name of the field in the form-encoded request body.
    pub fn wire_name(self) -> &'static str {
        match self {
            QueryField::ReportType => "type",
            QueryField::LotaId => "lota_id",
            QueryField::Fao => "fao",
            QueryField::IlhaId => "ilha_id",
            QueryField::StartDate => "start_date",
            QueryField::FinalDate => "final_date",
            QueryField::DayDate => "day_date",
        }
    }
}

impl fmt::Display for QueryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for QueryField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QueryField::ALL
            .into_iter()
            .find(|field| field.wire_name() == s)
            .ok_or_else(|| format!("unknown query field: {}", s))
    }
}

/// Report ("mapa") codes understood by the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportType {
    Pml,
    Pmr,
    Dpl,
    Dpi,
    Dna,
    Ppv,
    Pca,
    Pci,
    Pcl,
}

impl ReportType {
    pub const ALL: [ReportType; 9] = [
        ReportType::Pml,
        ReportType::Pmr,
        ReportType::Dpl,
        ReportType::Dpi,
        ReportType::Dna,
        ReportType::Ppv,
        ReportType::Pca,
        ReportType::Pci,
        ReportType::Pcl,
    ];

    pub fn code(self) -> &'static str {
        match self {
            ReportType::Pml => "PML",
            ReportType::Pmr => "PMR",
            ReportType::Dpl => "DPL",
            ReportType::Dpi => "DPI",
            ReportType::Dna => "DNA",
            ReportType::Ppv => "PPV",
            ReportType::Pca => "PCA",
            ReportType::Pci => "PCI",
            ReportType::Pcl => "PCL",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ReportType::Pml => "Preço médio por Lota",
            ReportType::Pmr => "Preço médio nos Açores",
            ReportType::Dpl => "Descargas por Lota",
            ReportType::Dpi => "Descargas por Ilha",
            ReportType::Dna => "Descargas nos Açores",
            ReportType::Ppv => "Pescado para venda",
            ReportType::Pca => "Pescado Comercializado nos Açores",
            ReportType::Pci => "Pescado Comercializado por Ilha",
            ReportType::Pcl => "Pescado Comercializado por Lota",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ReportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportType::ALL
            .into_iter()
            .find(|report| report.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown report type: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_initial_form() {
        let params = QueryParameters::default();
        assert_eq!(params.report_type, "DPI");
        assert_eq!(params.lota_id, "all");
        assert_eq!(params.fao, "all");
        assert_eq!(params.ilha_id, "7");
        assert_eq!(params.start_date, "2025-01-16");
        assert_eq!(params.final_date, "2025-01-20");
        assert_eq!(params.day_date, "");
    }

    #[test]
    fn set_touches_only_one_field() {
        let mut params = QueryParameters::default();
        params.set(QueryField::Fao, "2");
        params.set(QueryField::IlhaId, "1");
        params.set(QueryField::Fao, "3");

        let expected = QueryParameters {
            fao: "3".to_string(),
            ilha_id: "1".to_string(),
            ..QueryParameters::default()
        };
        assert_eq!(params, expected);
    }

    #[test]
    fn pairs_follow_wire_order() {
        let params = QueryParameters::default();
        let names: Vec<&str> = params.pairs().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec!["type", "lota_id", "fao", "ilha_id", "start_date", "final_date", "day_date"]
        );
    }

    #[test]
    fn field_names_round_trip_through_from_str() {
        for field in QueryField::ALL {
            assert_eq!(field.wire_name().parse::<QueryField>(), Ok(field));
        }
        assert!("lot".parse::<QueryField>().is_err());
    }

    #[test]
    fn report_type_lookup_is_case_insensitive() {
        assert_eq!("dpi".parse::<ReportType>(), Ok(ReportType::Dpi));
        assert_eq!(ReportType::Pcl.label(), "Pescado Comercializado por Lota");
        assert!("XYZ".parse::<ReportType>().is_err());
    }
}
