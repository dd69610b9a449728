//! CSV rendering of the record collection.

use super::domain::Record;

pub const CSV_FILENAME: &str = "milk_records.csv";
pub const CSV_HEADER: &str = "Date,Time,Shift,Name,Phone,Quantity(ml),Amount(currency)";

/// Header line followed by one line per record, in the given order.
pub fn render(records: &[Record]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADER.to_string());
    lines.extend(records.iter().map(render_row));
    lines.join("\n")
}

fn render_row(rec: &Record) -> String {
    [
        escape(&rec.date),
        escape(&rec.time),
        rec.shift.label().to_string(),
        escape(&rec.name),
        escape(&rec.phone),
        rec.quantity.to_string(),
        rec.amount.to_string(),
    ]
    .join(",")
}

/// Quote a field only when it would otherwise break the row.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::domain::Shift;

    fn rec(name: &str, quantity: f64, amount: f64) -> Record {
        Record {
            id: 1,
            date: "2024-05-01".into(),
            time: "18:05:09".into(),
            shift: Shift::Evening,
            name: name.into(),
            phone: "98400".into(),
            quantity,
            amount,
        }
    }

    #[test]
    fn empty_collection_is_header_only() {
        assert_eq!(render(&[]), CSV_HEADER);
    }

    #[test]
    fn plain_fields_are_raw() {
        let out = render(&[rec("Lakshmi", 1500.0, 60.5)]);
        assert_eq!(
            out,
            "Date,Time,Shift,Name,Phone,Quantity(ml),Amount(currency)\n2024-05-01,18:05:09,evening,Lakshmi,98400,1500,60.5"
        );
    }

    #[test]
    fn commas_and_quotes_are_quoted() {
        let out = render(&[rec("Raja, Jr. \"RJ\"", 250.0, 10.0)]);
        let row = out.lines().nth(1).unwrap_or_default();
        assert_eq!(row, "2024-05-01,18:05:09,evening,\"Raja, Jr. \"\"RJ\"\"\",98400,250,10");
    }
}
