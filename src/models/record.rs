use chrono::NaiveDate;
use serde::{ Deserialize, Deserializer, Serialize, Serializer };
use serde_json::{ Map, Value };
use std::fmt;

use crate::implementations::dates;

/// One tracked license, in the on-disk shape of the inventory file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftwareRecord {
    #[serde(rename = "nome", default, deserialize_with = "lenient_string")]
    pub name: String,

    #[serde(rename = "validade", default)]
    pub expiration: Expiration,

    #[serde(rename = "numero_licencas", default, deserialize_with = "lenient_string")]
    pub license_count: String,

    /// Free-form, often an activation URL
    #[serde(rename = "ativacao", default, deserialize_with = "lenient_string")]
    pub activation_info: String,

    #[serde(rename = "usuario", default, deserialize_with = "lenient_string")]
    pub username: String,

    #[serde(rename = "renovacao", default)]
    pub renew: RenewalFlag,

    /// Keys this version does not know about, written back untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// When a license stops being valid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expiration {
    Date(NaiveDate),
    /// Never expires. Holds the token as it was stored, in whatever letter case.
    Lifetime(String),
    /// Legacy or invalid text, kept verbatim
    Unparsed(String),
}

impl Expiration {
    pub fn lifetime() -> Self {
        Expiration::Lifetime(dates::LIFETIME_TOKEN.to_string())
    }

    /// Interpret a stored `validade` value.
    pub fn from_stored(raw: &str) -> Self {
        if dates::is_lifetime(raw) {
            return Expiration::Lifetime(raw.to_string());
        }
        match dates::parse_canonical(raw) {
            Ok(date) => Expiration::Date(date),
            Err(_) => Expiration::Unparsed(raw.to_string()),
        }
    }

    /// Interpret user input, which may use either date format or the lifetime token.
    pub fn from_input(raw: &str) -> crate::errors::AgendaResult<Self> {
        if dates::is_lifetime(raw.trim()) {
            return Ok(Expiration::lifetime());
        }
        dates::parse_any(raw).map(Expiration::Date)
    }

    pub fn to_stored(&self) -> String {
        match self {
            Expiration::Date(date) => dates::format_canonical(*date),
            Expiration::Lifetime(raw) | Expiration::Unparsed(raw) => raw.clone(),
        }
    }

    /// Text shown to users and used to pre-fill edits
    pub fn to_display(&self) -> String {
        match self {
            Expiration::Date(date) => dates::format_display(*date),
            Expiration::Lifetime(_) => dates::LIFETIME_LABEL.to_string(),
            Expiration::Unparsed(raw) => raw.clone(),
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Expiration::Date(date) => Some(*date),
            _ => None,
        }
    }
}

impl Default for Expiration {
    fn default() -> Self {
        Expiration::Unparsed(String::new())
    }
}

impl Serialize for Expiration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_stored())
    }
}

impl<'de> Deserialize<'de> for Expiration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient_string(deserializer).map(|raw| Expiration::from_stored(&raw))
    }
}

/// Whether a license is expected to be renewed.
///
/// Alerts fire for everything except `DoNotRenew`, while the renew checkbox
/// shows as checked only for `Renew`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenewalFlag {
    /// Stored as `sim`
    Renew,
    /// Stored as `nao` in any letter case, kept as written
    DoNotRenew(String),
    /// Anything else, kept verbatim
    Unspecified(String),
}

impl RenewalFlag {
    pub const RENEW: &'static str = "sim";
    pub const DO_NOT_RENEW: &'static str = "nao";

    pub fn do_not_renew() -> Self {
        RenewalFlag::DoNotRenew(Self::DO_NOT_RENEW.to_string())
    }

    pub fn parse(raw: &str) -> Self {
        if raw == Self::RENEW {
            RenewalFlag::Renew
        } else if raw.to_lowercase() == Self::DO_NOT_RENEW {
            RenewalFlag::DoNotRenew(raw.to_string())
        } else {
            RenewalFlag::Unspecified(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RenewalFlag::Renew => Self::RENEW,
            RenewalFlag::DoNotRenew(raw) | RenewalFlag::Unspecified(raw) => raw,
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, RenewalFlag::Renew)
    }

    pub fn wants_alerts(&self) -> bool {
        !matches!(self, RenewalFlag::DoNotRenew(_))
    }

    /// Flip the checkbox. An unchecked unspecified flag becomes `Renew`.
    pub fn toggled(&self) -> Self {
        match self {
            RenewalFlag::Renew => Self::do_not_renew(),
            _ => RenewalFlag::Renew,
        }
    }
}

impl Default for RenewalFlag {
    fn default() -> Self {
        RenewalFlag::Unspecified(String::new())
    }
}

impl fmt::Display for RenewalFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for RenewalFlag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RenewalFlag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient_string(deserializer).map(|raw| RenewalFlag::parse(&raw))
    }
}

/// Accept strings, numbers, booleans and null where text is expected.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

/// Field values for an add or edit, before validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub name: Option<String>,
    pub expiration: Option<String>,
    pub license_count: Option<String>,
    pub activation_info: Option<String>,
    pub username: Option<String>,
    pub renew: Option<String>,
}

impl RecordDraft {
    /// Pre-filled from an existing record, date in display format
    pub fn from_record(record: &SoftwareRecord) -> Self {
        let expiration = match &record.expiration {
            Expiration::Lifetime(_) => dates::LIFETIME_TOKEN.to_string(),
            other => other.to_display(),
        };
        Self {
            name: Some(record.name.clone()),
            expiration: Some(expiration),
            license_count: Some(record.license_count.clone()),
            activation_info: Some(record.activation_info.clone()),
            username: Some(record.username.clone()),
            renew: Some(record.renew.as_str().to_string()),
        }
    }

    /// Validate every field and build a new record, or fail without side effects.
    pub fn validate(&self) -> crate::errors::AgendaResult<SoftwareRecord> {
        self.build(None)
    }

    /// Validate a replacement for `current`. A blank license count or renew
    /// flag keeps the current value, since legacy records may have neither.
    pub fn validate_update(
        &self,
        current: &SoftwareRecord
    ) -> crate::errors::AgendaResult<SoftwareRecord> {
        self.build(Some(current))
    }

    fn build(&self, current: Option<&SoftwareRecord>) -> crate::errors::AgendaResult<SoftwareRecord> {
        use crate::errors::AgendaError;

        let name = required_non_empty(&self.name, "name")?;
        let expiration_raw = required_non_empty(&self.expiration, "expiration")?;
        let license_count = match current {
            Some(current) if is_blank(&self.license_count) => current.license_count.clone(),
            _ => required_non_empty(&self.license_count, "license count")?,
        };
        let activation_info = self
            .activation_info
            .clone()
            .ok_or(AgendaError::MissingRequiredField("activation info"))?;
        let username = self
            .username
            .clone()
            .ok_or(AgendaError::MissingRequiredField("username"))?;
        let renew = match current {
            Some(current) if is_blank(&self.renew) => current.renew.clone(),
            _ => RenewalFlag::parse(required_non_empty(&self.renew, "renew")?.trim()),
        };

        let expiration = Expiration::from_input(&expiration_raw)?;

        Ok(SoftwareRecord {
            name,
            expiration,
            license_count,
            activation_info,
            username,
            renew,
            extra: Map::new(),
        })
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

fn required_non_empty(
    value: &Option<String>,
    field: &'static str
) -> crate::errors::AgendaResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.clone()),
        _ => Err(crate::errors::AgendaError::MissingRequiredField(field)),
    }
}
