//! Customer notification templates (English and Tamil).

use super::domain::{MessagePair, Record};

/// Milliliters to liters, two decimals.
pub fn liters(quantity_ml: f64) -> String {
    format!("{:.2}", quantity_ml / 1000.0)
}

pub fn render(rec: &Record) -> MessagePair {
    let liters = liters(rec.quantity);
    let english = format!(
        "Dear {}, your {} milk delivery today: {} liters, amount ₹{}. Thank you!",
        rec.name,
        rec.shift.label(),
        liters,
        rec.amount
    );
    let tamil = format!(
        "அன்புள்ள {}, இன்றைய {} பால் விநியோகம்: {} லிட்டர், தொகை ₹{}. நன்றி!",
        rec.name,
        rec.shift.tamil_label(),
        liters,
        rec.amount
    );
    MessagePair { english, tamil }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::domain::Shift;

    #[test]
    fn liters_rounds_to_two_places() {
        assert_eq!(liters(1500.0), "1.50");
        assert_eq!(liters(250.0), "0.25");
        assert_eq!(liters(0.0), "0.00");
        assert_eq!(liters(1234.0), "1.23");
    }

    #[test]
    fn both_languages_carry_the_same_figures() {
        let rec = Record {
            id: 7,
            date: "2024-05-01".into(),
            time: "18:00:00".into(),
            shift: Shift::Evening,
            name: "Meena".into(),
            phone: "1".into(),
            quantity: 2000.0,
            amount: 80.0,
        };
        let msg = render(&rec);
        assert_eq!(
            msg.english,
            "Dear Meena, your evening milk delivery today: 2.00 liters, amount ₹80. Thank you!"
        );
        assert!(msg.tamil.contains("Meena"));
        assert!(msg.tamil.contains("மாலை"));
        assert!(msg.tamil.contains("2.00"));
        assert!(msg.tamil.contains("₹80"));
    }
}
