use serde::{Deserialize, Deserializer, Serialize};

/// A superhero entry as served by the directory backend.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    // the backend may send null for any optional field
    #[serde(rename = "poderes", default, deserialize_with = "null_as_default")]
    pub powers: Vec<String>,
    // the backend stores age as either a string or a number
    #[serde(rename = "edad", default, deserialize_with = "display_string")]
    pub age: String,
    #[serde(rename = "liga", default, deserialize_with = "null_as_default")]
    pub league: String,
    #[serde(rename = "activo", default, deserialize_with = "null_as_default")]
    pub active: bool,
}

impl Record {
    pub fn powers_joined(&self) -> String {
        self.powers.join(", ")
    }

    pub fn active_label(&self) -> &'static str {
        if self.active { "Sí" } else { "No" }
    }

    pub fn has_power(&self, power: &str) -> bool {
        let wanted = power.trim().to_lowercase();
        self.powers.iter().any(|p| p.trim().to_lowercase() == wanted)
    }
}

fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

fn display_string<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(d)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_field_names() {
        let body = r#"[{"_id":"1","nombre":"Test","poderes":["Flight"],"edad":"30","liga":"X","activo":true}]"#;
        let records: Vec<Record> = serde_json::from_str(body).unwrap();
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.id, "1");
        assert_eq!(r.name, "Test");
        assert_eq!(r.powers, vec!["Flight".to_string()]);
        assert_eq!(r.age, "30");
        assert_eq!(r.league, "X");
        assert!(r.active);
    }

    #[test]
    fn numeric_age_becomes_display_string() {
        let body = r#"{"_id":"7","nombre":"Num","edad":42,"activo":false}"#;
        let r: Record = serde_json::from_str(body).unwrap();
        assert_eq!(r.age, "42");
        assert!(r.powers.is_empty());
        assert_eq!(r.league, "");
    }

    #[test]
    fn null_fields_decode_as_empty() {
        let body = r#"[
            {"_id":"1","nombre":"Nulo","poderes":null,"edad":null,"liga":null,"activo":null},
            {"_id":"2","nombre":"Completo","poderes":["Vuelo"],"edad":"30","liga":"X","activo":true}
        ]"#;
        let records: Vec<Record> = serde_json::from_str(body).unwrap();
        assert_eq!(records.len(), 2);
        let r = &records[0];
        assert_eq!(r.name, "Nulo");
        assert!(r.powers.is_empty());
        assert_eq!(r.age, "");
        assert_eq!(r.league, "");
        assert!(!r.active);
        assert_eq!(records[1].powers, vec!["Vuelo".to_string()]);
    }

    #[test]
    fn wrong_types_are_still_rejected() {
        let body = r#"{"_id":"7","nombre":"Num","liga":5}"#;
        assert!(serde_json::from_str::<Record>(body).is_err());
    }

    #[test]
    fn rejects_non_scalar_age() {
        let body = r#"{"_id":"7","nombre":"Num","edad":[1]}"#;
        assert!(serde_json::from_str::<Record>(body).is_err());
    }

    #[test]
    fn display_helpers() {
        let r = Record {
            powers: vec!["Vuelo".to_string(), "Super Fuerza".to_string()],
            active: true,
            ..Record::default()
        };
        assert_eq!(r.powers_joined(), "Vuelo, Super Fuerza");
        assert_eq!(r.active_label(), "Sí");
        assert!(r.has_power("super fuerza"));
        assert!(!r.has_power("Telepatía"));
        let idle = Record::default();
        assert_eq!(idle.active_label(), "No");
        assert_eq!(idle.powers_joined(), "");
    }
}
