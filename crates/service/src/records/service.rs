use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Local, Utc};
use tokio::sync::Mutex;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::records::domain::{
    Attendance, Collection, CsvExport, Customer, DateRange, MessagePair, NewRecord, Record, RecordPatch, Shift,
    Stats,
};
use crate::records::{csv, message};
use crate::storage::RecordStore;

/// Business operations over the delivery record collection.
///
/// Every call re-reads the full collection from the store. Mutations hold
/// `write_lock` across their load-modify-save round trip so writers inside
/// one process cannot overwrite each other's changes.
pub struct RecordService {
    store: Arc<dyn RecordStore>,
    write_lock: Mutex<()>,
}

impl RecordService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store, write_lock: Mutex::new(()) }
    }

    pub async fn list(&self) -> Result<Vec<Record>, ServiceError> {
        Ok(self.store.load().await?.records)
    }

    pub async fn get(&self, id: i64) -> Result<Record, ServiceError> {
        self.store
            .load()
            .await?
            .find(id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("record"))
    }

    #[instrument(skip(self, input), fields(phone = %input.phone, shift = %input.shift))]
    pub async fn create(&self, input: NewRecord) -> Result<Record, ServiceError> {
        let _guard = self.write_lock.lock().await;
        let mut col = self.store.load().await?;

        let now = Local::now();
        let rec = Record {
            id: next_id(&col, Utc::now().timestamp_millis()),
            date: now.format("%Y-%m-%d").to_string(),
            time: now.format("%H:%M:%S").to_string(),
            shift: input.shift,
            name: input.name,
            phone: input.phone,
            quantity: input.quantity,
            amount: input.amount,
        };
        col.records.push(rec.clone());
        self.store.save(&col).await?;
        info!(id = rec.id, "record created");
        Ok(rec)
    }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: RecordPatch) -> Result<Record, ServiceError> {
        let _guard = self.write_lock.lock().await;
        let mut col = self.store.load().await?;

        let rec = col
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| ServiceError::not_found("record"))?;
        patch.apply_to(rec);
        let updated = rec.clone();

        self.store.save(&col).await?;
        info!(id, "record updated");
        Ok(updated)
    }

    /// Remove every record with `id`; returns how many were dropped (zero is fine).
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<usize, ServiceError> {
        let _guard = self.write_lock.lock().await;
        let mut col = self.store.load().await?;

        let before = col.records.len();
        col.records.retain(|r| r.id != id);
        let removed = before - col.records.len();

        self.store.save(&col).await?;
        info!(id, removed, "record delete");
        Ok(removed)
    }

    pub async fn stats(&self, range: &DateRange) -> Result<Stats, ServiceError> {
        let col = self.store.load().await?;
        Ok(compute_stats(col.records.iter().filter(|r| range.contains(&r.date))))
    }

    pub async fn attendance(&self, phone: &str) -> Result<Attendance, ServiceError> {
        let col = self.store.load().await?;
        let records: Vec<Record> = col.records.into_iter().filter(|r| r.phone == phone).collect();
        let first = records
            .first()
            .ok_or_else(|| ServiceError::NotFound(format!("no records for phone {phone}")))?;

        Ok(Attendance {
            name: first.name.clone(),
            phone: phone.to_string(),
            total_visits: records.len(),
            total_quantity: records.iter().map(|r| r.quantity).sum(),
            total_amount: records.iter().map(|r| r.amount).sum(),
            records,
        })
    }

    /// Distinct customers in first-seen order, named after their first record.
    pub async fn customers(&self) -> Result<Vec<Customer>, ServiceError> {
        let col = self.store.load().await?;
        let mut seen = HashSet::new();
        Ok(col
            .records
            .into_iter()
            .filter(|r| seen.insert(r.phone.clone()))
            .map(|r| Customer { name: r.name, phone: r.phone })
            .collect())
    }

    pub async fn export_csv(&self) -> Result<CsvExport, ServiceError> {
        let col = self.store.load().await?;
        Ok(CsvExport { filename: csv::CSV_FILENAME, content: csv::render(&col.records) })
    }

    pub async fn message(&self, id: i64) -> Result<MessagePair, ServiceError> {
        let col = self.store.load().await?;
        let rec = col.find(id).ok_or_else(|| ServiceError::not_found("record"))?;
        Ok(message::render(rec))
    }
}

/// Creation-time id that stays unique even when the clock stalls or goes backwards.
fn next_id(col: &Collection, now_millis: i64) -> i64 {
    match col.max_id() {
        Some(max) if max >= now_millis => max + 1,
        _ => now_millis,
    }
}

fn compute_stats<'a>(records: impl Iterator<Item = &'a Record>) -> Stats {
    let mut stats = Stats::default();
    let mut phones = HashSet::new();
    for r in records {
        stats.total_records += 1;
        stats.total_quantity += r.quantity;
        stats.total_amount += r.amount;
        match r.shift {
            Shift::Morning => stats.morning_records += 1,
            Shift::Evening => stats.evening_records += 1,
        }
        phones.insert(r.phone.as_str());
    }
    stats.unique_customers = phones.len();
    stats
}
