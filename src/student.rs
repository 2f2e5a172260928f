//! Student transfer record, persisted entity, and the mapping between them.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fields exposed to and accepted from clients. Every field may be absent in a request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub gpa: Option<f64>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    pub balance: Option<Decimal>,
}

impl StudentRecord {
    /// Copy with the balance defaulted to zero and any client-chosen id cleared.
    /// Ids are assigned by the store only.
    pub fn for_create(&self) -> Self {
        Self {
            id: None,
            balance: Some(balance_or_zero(self.balance)),
            ..self.clone()
        }
    }
}

/// A row of the students table.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: Option<String>,
    pub major: Option<String>,
    pub gpa: Option<f64>,
    pub birth_date: Option<NaiveDate>,
    pub balance: Option<Decimal>,
}

impl Student {
    /// Partial overwrite: a non-empty name and any present balance replace the stored
    /// values; everything else is left as is.
    pub fn apply_update(&mut self, input: &StudentRecord) {
        if let Some(name) = input.name.as_deref().filter(|n| !n.is_empty()) {
            self.name = Some(name.to_string());
        }
        if let Some(balance) = input.balance {
            self.balance = Some(balance);
        }
    }
}

impl From<Student> for StudentRecord {
    fn from(s: Student) -> Self {
        StudentRecord {
            id: Some(s.id),
            name: s.name,
            major: s.major,
            gpa: s.gpa,
            birth_date: s.birth_date,
            balance: Some(balance_or_zero(s.balance)),
        }
    }
}

pub fn balance_or_zero(balance: Option<Decimal>) -> Decimal {
    balance.unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    fn stored() -> Student {
        Student {
            id: 7,
            name: Some("Siti".into()),
            major: Some("Physics".into()),
            gpa: Some(3.4),
            birth_date: NaiveDate::from_ymd_opt(2001, 4, 12),
            balance: Some(Decimal::new(1500, 0)),
        }
    }

    #[test]
    fn mapping_defaults_absent_balance_to_zero() {
        let mut s = stored();
        s.balance = None;
        let record = StudentRecord::from(s);
        assert_eq!(record.balance, Some(Decimal::ZERO));
        assert_eq!(record.id, Some(7));
        assert_eq!(record.major.as_deref(), Some("Physics"));
    }

    #[test]
    fn empty_name_does_not_overwrite() {
        let mut s = stored();
        s.apply_update(&StudentRecord {
            name: Some(String::new()),
            balance: Some(Decimal::new(5, 0)),
            ..Default::default()
        });
        assert_eq!(s.name.as_deref(), Some("Siti"));
        assert_eq!(s.balance, Some(Decimal::new(5, 0)));
    }

    #[test]
    fn absent_balance_is_kept_on_update() {
        let mut s = stored();
        s.apply_update(&StudentRecord {
            name: Some("Ada".into()),
            major: Some("History".into()),
            ..Default::default()
        });
        assert_eq!(s.name.as_deref(), Some("Ada"));
        assert_eq!(s.balance, Some(Decimal::new(1500, 0)));
        // only name and balance are ever overwritten
        assert_eq!(s.major.as_deref(), Some("Physics"));
    }

    #[test]
    fn zero_balance_overwrites() {
        let mut s = stored();
        s.apply_update(&StudentRecord {
            balance: Some(Decimal::ZERO),
            ..Default::default()
        });
        assert_eq!(s.balance, Some(Decimal::ZERO));
    }

    #[test]
    fn for_create_clears_id_and_normalizes_balance() {
        let input = StudentRecord {
            id: Some(99),
            name: Some("Budi".into()),
            ..Default::default()
        };
        let prepared = input.for_create();
        assert_eq!(prepared.id, None);
        assert_eq!(prepared.balance, Some(Decimal::ZERO));
        assert_eq!(prepared.name.as_deref(), Some("Budi"));
    }

    #[test]
    fn record_json_uses_camel_case_and_numeric_balance() {
        let record: StudentRecord = serde_json::from_value(json!({
            "name": "Budi",
            "birthDate": "2000-01-31",
            "balance": 12.5
        }))
        .unwrap();
        assert_eq!(record.birth_date, NaiveDate::from_ymd_opt(2000, 1, 31));
        assert_eq!(record.balance, Some(Decimal::new(125, 1)));

        let out = serde_json::to_value(&record).unwrap();
        assert_eq!(out["birthDate"], "2000-01-31");
        assert_eq!(out["balance"], 12.5);
    }

    #[test]
    fn balance_keeps_every_digit_through_json() {
        let record: StudentRecord =
            serde_json::from_str(r#"{"name":"Budi","balance":12345678901234567.89}"#).unwrap();
        assert_eq!(record.balance, Some(Decimal::from_str("12345678901234567.89").unwrap()));

        let out = serde_json::to_string(&record).unwrap();
        assert!(out.contains(r#""balance":12345678901234567.89"#), "{out}");
    }

    #[test]
    fn missing_fields_deserialize_as_absent() {
        let record: StudentRecord = serde_json::from_value(json!({})).unwrap();
        assert_eq!(record, StudentRecord::default());
    }
}
