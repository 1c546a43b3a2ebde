use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hash {input:?}: {reason}")]
pub struct HashParseError {
    pub input: String,
    pub reason: String,
}

/// Primary key of every generated entity.
///
/// Rendered as the canonical lower-case hyphenated UUID string, e.g.
/// `67e55044-10b1-426f-9247-bb680e5fe0c8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash(Uuid);

impl Hash {
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Draw a fresh version-4 identifier from the given random source.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let bytes: [u8; 16] = rng.gen();
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Lenient scalar decode: anything that is not a well-formed UUID string
    /// becomes `None` instead of an error.
    pub fn decode(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

impl std::fmt::Display for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl std::str::FromStr for Hash {
    type Err = HashParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self).map_err(|e| HashParseError {
            input: s.to_string(),
            reason: e.to_string(),
        })
    }
}

impl From<Uuid> for Hash {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

/// The `UUID` scalar type represents an ID Object.
#[Scalar(name = "UUID")]
impl ScalarType for Hash {
    fn parse(value: Value) -> InputValueResult<Self> {
        // GraphQL inputs must produce a concrete value, so a failed decode
        // is reported by the executor as an input error for that argument.
        Hash::decode(&value).ok_or_else(|| InputValueError::expected_type(value))
    }

    fn is_valid(value: &Value) -> bool {
        Hash::decode(value).is_some()
    }

    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
