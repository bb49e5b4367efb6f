use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// What the contact form sends to `POST /api/contact`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(rename = "consultationType", skip_serializing_if = "Option::is_none")]
    pub consultation_type: Option<String>,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Testimonial {
    #[serde(alias = "_id", deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    pub text: String,
    pub rating: u8,
}

impl Testimonial {
    /// Rating as a star count, clamped into 1..=5.
    pub fn stars(&self) -> usize {
        usize::from(self.rating.clamp(1, 5))
    }

    /// "Sarah Johnson" -> "SJ"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(3)
            .collect()
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Server acknowledgement for the contact and newsletter POSTs.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: Value,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub id: Option<Value>,
}

impl Ack {
    /// JavaScript truthiness of the `success` field.
    pub fn is_accepted(&self) -> bool {
        match &self.success {
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) => true,
            Value::Null => false,
        }
    }
}
