use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use storeapi_core::{DomainError, DomainResult, Entity, ValueObject};

/// Shortest accepted item name (after trimming).
pub const NAME_MIN_LEN: usize = 3;

/// Longest accepted item name (after trimming).
pub const NAME_MAX_LEN: usize = 15;

/// Item name: trimmed, ASCII alphanumeric, 3 to 15 characters.
///
/// The only way to obtain one is [`ItemName::parse`], so a stored item can
/// never carry a name that breaks the pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ItemName(String);

impl ItemName {
    /// Trim `raw` and validate it against the name pattern.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let name = raw.trim();

        if name.is_empty() {
            return Err(DomainError::validation(
                "\"name\" is not allowed to be empty",
            ));
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(DomainError::validation(
                "\"name\" must only contain alpha-numeric characters",
            ));
        }
        // ASCII only past this point, so byte length == char count.
        if name.len() < NAME_MIN_LEN {
            return Err(DomainError::validation(format!(
                "\"name\" length must be at least {NAME_MIN_LEN} characters long"
            )));
        }
        if name.len() > NAME_MAX_LEN {
            return Err(DomainError::validation(format!(
                "\"name\" length must be less than or equal to {NAME_MAX_LEN} characters long"
            )));
        }

        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ItemName {}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Item quantity: a positive integer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    pub const MIN: u64 = 1;

    /// Largest integer a JSON client can hold in a double without losing precision.
    pub const MAX: u64 = (1 << 53) - 1;

    pub fn new(value: u64) -> DomainResult<Self> {
        if value < Self::MIN {
            return Err(below_minimum());
        }
        if value > Self::MAX {
            return Err(DomainError::invalid_amount("\"amount\" must be a safe number"));
        }
        Ok(Self(value))
    }

    /// Validate a raw JSON value as an amount.
    ///
    /// No coercion: strings are rejected even if they hold digits. A float
    /// with no fractional part (`2.0`) is accepted as the integer it denotes.
    pub fn from_json(value: &Value) -> DomainResult<Self> {
        let Value::Number(n) = value else {
            return Err(DomainError::invalid_amount("\"amount\" must be a number"));
        };

        if let Some(v) = n.as_u64() {
            return Self::new(v);
        }
        if n.as_i64().is_some() {
            return Err(below_minimum());
        }

        match n.as_f64() {
            Some(f) if f.fract() != 0.0 => {
                Err(DomainError::invalid_amount("\"amount\" must be an integer"))
            }
            Some(f) if f < Self::MIN as f64 => Err(below_minimum()),
            Some(f) if f <= Self::MAX as f64 => Self::new(f as u64),
            _ => Err(DomainError::invalid_amount("\"amount\" must be a safe number")),
        }
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl ValueObject for Amount {}

fn below_minimum() -> DomainError {
    DomainError::invalid_amount(format!(
        "\"amount\" must be greater than or equal to {}",
        Amount::MIN
    ))
}

/// A stored item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    name: ItemName,
    amount: Amount,
}

impl Item {
    pub fn new(name: ItemName, amount: Amount) -> Self {
        Self { name, amount }
    }

    pub fn name(&self) -> &ItemName {
        &self.name
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// Names are immutable once stored; only the amount changes.
    pub(crate) fn set_amount(&mut self, amount: Amount) {
        self.amount = amount;
    }
}

impl Entity for Item {
    type Id = ItemName;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

/// Candidate item as received from a client, before validation.
///
/// Deserializes from a JSON object only, and only `name` and `amount` are
/// recognized; any other key or shape fails deserialization. Field types are
/// left open so that a wrong type surfaces as a domain validation error with a
/// field-specific message.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct ItemPayload {
    pub name: Option<Value>,
    pub amount: Option<Value>,
}

impl TryFrom<Map<String, Value>> for ItemPayload {
    type Error = DomainError;

    fn try_from(mut fields: Map<String, Value>) -> Result<Self, Self::Error> {
        if let Some(key) = fields.keys().find(|k| !matches!(k.as_str(), "name" | "amount")) {
            return Err(DomainError::validation(format!("\"{key}\" is not allowed")));
        }

        Ok(Self {
            name: fields.remove("name"),
            amount: fields.remove("amount"),
        })
    }
}

impl ItemPayload {
    /// Build a well-typed payload (tests, seed construction).
    pub fn new(name: impl Into<String>, amount: u64) -> Self {
        Self {
            name: Some(Value::String(name.into())),
            amount: Some(Value::from(amount)),
        }
    }

    /// Parse an arbitrary JSON value in strict mode.
    pub fn from_json(value: Value) -> DomainResult<Self> {
        serde_json::from_value(value).map_err(|e| DomainError::validation(e.to_string()))
    }

    /// Validated, trimmed name.
    pub fn name(&self) -> DomainResult<ItemName> {
        match &self.name {
            None | Some(Value::Null) => Err(DomainError::validation("\"name\" is required")),
            Some(Value::String(raw)) => ItemName::parse(raw),
            Some(_) => Err(DomainError::validation("\"name\" must be a string")),
        }
    }

    /// Validated amount.
    pub fn amount(&self) -> DomainResult<Amount> {
        match &self.amount {
            None | Some(Value::Null) => {
                Err(DomainError::invalid_amount("\"amount\" is required"))
            }
            Some(value) => Amount::from_json(value),
        }
    }

    /// Validate both fields into an [`Item`], without any store lookup.
    pub fn to_item(&self) -> DomainResult<Item> {
        Ok(Item::new(self.name()?, self.amount()?))
    }
}
