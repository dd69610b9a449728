use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Delivery window of a record.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    Morning,
    Evening,
}

impl Shift {
    pub fn label(self) -> &'static str {
        match self {
            Shift::Morning => "morning",
            Shift::Evening => "evening",
        }
    }

    pub fn tamil_label(self) -> &'static str {
        match self {
            Shift::Morning => "காலை",
            Shift::Evening => "மாலை",
        }
    }
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One delivery.
/// - `quantity`: milliliters delivered
/// - `amount`: currency charged
/// - `phone`: identifies the customer across records
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Record {
    pub id: i64,
    pub date: String,
    pub time: String,
    pub shift: Shift,
    pub name: String,
    pub phone: String,
    pub quantity: f64,
    pub amount: f64,
}

/// Create payload; id and timestamps are assigned by the service.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct NewRecord {
    pub shift: Shift,
    pub name: String,
    pub phone: String,
    pub quantity: f64,
    pub amount: f64,
}

/// Update payload. Absent fields keep their stored value; `id` cannot be patched.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct RecordPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shift: Option<Shift>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}

impl RecordPatch {
    pub fn apply_to(self, rec: &mut Record) {
        if let Some(v) = self.date { rec.date = v; }
        if let Some(v) = self.time { rec.time = v; }
        if let Some(v) = self.shift { rec.shift = v; }
        if let Some(v) = self.name { rec.name = v; }
        if let Some(v) = self.phone { rec.phone = v; }
        if let Some(v) = self.quantity { rec.quantity = v; }
        if let Some(v) = self.amount { rec.amount = v; }
    }
}

/// Persisted file shape: `{"records": [...]}`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    pub records: Vec<Record>,
}

impl Collection {
    pub fn find(&self, id: i64) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn max_id(&self) -> Option<i64> {
        self.records.iter().map(|r| r.id).max()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct Customer {
    pub name: String,
    pub phone: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total_records: usize,
    pub total_quantity: f64,
    pub total_amount: f64,
    pub morning_records: usize,
    pub evening_records: usize,
    pub unique_customers: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub name: String,
    pub phone: String,
    pub total_visits: usize,
    pub total_quantity: f64,
    pub total_amount: f64,
    pub records: Vec<Record>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct MessagePair {
    pub english: String,
    pub tamil: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: &'static str,
    pub content: String,
}

/// Inclusive `date` window; applied only when both bounds are present.
/// Bounds compare as strings, which orders correctly for `YYYY-MM-DD`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct DateRange {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self { start_date: Some(start.into()), end_date: Some(end.into()) }
    }

    /// Both bounds, ignoring blank values (an empty form field means "no bound").
    pub fn bounds(&self) -> Option<(&str, &str)> {
        match (non_blank(&self.start_date), non_blank(&self.end_date)) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    pub fn contains(&self, date: &str) -> bool {
        match self.bounds() {
            Some((start, end)) => start <= date && date <= end,
            None => true,
        }
    }
}

fn non_blank(v: &Option<String>) -> Option<&str> {
    v.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
