//! Host-supplied invocation parameters.

use std::fmt::{Display, Formatter};

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ValidationError;
use crate::provider::de::lenient_string;
use crate::query::{QueryBuilder, QueryParams};

/// Decode host params, unwrapping a single-object array (`[{...}]`).
///
/// Any other array carries no named fields and decodes as `{}`, so the
/// use case reports its missing-input message.
pub fn parse_params<T: DeserializeOwned>(value: Value) -> Result<T, ValidationError> {
    let value = match value {
        Value::Array(mut items) if items.len() == 1 && items[0].is_object() => items.remove(0),
        Value::Array(_) | Value::Null => Value::Object(Default::default()),
        other => other,
    };

    serde_json::from_value(value).map_err(|error| ValidationError::InvalidParams {
        reason: error.to_string(),
    })
}

/// Page size accepted by the listing endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "u64")]
pub enum PageLimit {
    Fifty,
    Hundred,
}

impl PageLimit {
    pub const fn as_u64(self) -> u64 {
        match self {
            Self::Fifty => 50,
            Self::Hundred => 100,
        }
    }
}

impl TryFrom<u64> for PageLimit {
    type Error = ValidationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            50 => Ok(Self::Fifty),
            100 => Ok(Self::Hundred),
            other => Err(ValidationError::InvalidLimit { value: other }),
        }
    }
}

impl Display for PageLimit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u64())
    }
}

/// OAB registration category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OabKind {
    Advogado,
    Suplementar,
    Estagiario,
    ConsultorEstrangeiro,
}

impl OabKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Advogado => "ADVOGADO",
            Self::Suplementar => "SUPLEMENTAR",
            Self::Estagiario => "ESTAGIARIO",
            Self::ConsultorEstrangeiro => "CONSULTOR_ESTRANGEIRO",
        }
    }
}

impl Display for OabKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

/// Proceeding status filter for lawyer listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusFilter {
    Ativo,
    Inativo,
}

impl Display for StatusFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Ativo => "ATIVO",
            Self::Inativo => "INATIVO",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProceedingLookupParams {
    #[serde(rename = "numeroProcesso", default, deserialize_with = "lenient_string")]
    pub case_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MovementsParams {
    #[serde(rename = "numeroProcesso", default, deserialize_with = "lenient_string")]
    pub case_number: Option<String>,
    #[serde(default)]
    pub limit: Option<PageLimit>,
}

impl QueryParams for MovementsParams {
    fn to_query(&self) -> QueryBuilder {
        QueryBuilder::new().push_opt("limit", self.limit)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LawyerProceedingsParams {
    #[serde(rename = "oabEstado", default, deserialize_with = "lenient_string")]
    pub oab_state: Option<String>,
    #[serde(rename = "oabNumero", default, deserialize_with = "lenient_string")]
    pub oab_number: Option<String>,
    #[serde(rename = "oabTipo", default)]
    pub oab_kind: Option<OabKind>,
    #[serde(rename = "ordem", default)]
    pub order: Option<SortOrder>,
    #[serde(default)]
    pub limit: Option<PageLimit>,
    #[serde(rename = "tribunais", default)]
    pub courts: Option<Vec<String>>,
    #[serde(default)]
    pub status: Option<StatusFilter>,
    #[serde(rename = "dataMinima", default)]
    pub min_date: Option<String>,
    #[serde(rename = "dataMaxima", default)]
    pub max_date: Option<String>,
}

impl LawyerProceedingsParams {
    /// Check the required OAB fields and pair them with the optional filters.
    pub fn validate(&self) -> Result<LawyerProceedingsQuery<'_>, ValidationError> {
        fn present(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|v| !v.is_empty())
        }

        match (present(&self.oab_state), present(&self.oab_number)) {
            (Some(state), Some(number)) => Ok(LawyerProceedingsQuery {
                state,
                number,
                params: self,
            }),
            _ => Err(ValidationError::OabRequired),
        }
    }
}

/// Validated lawyer search; renders required fields before the optional ones.
#[derive(Debug, Clone, Copy)]
pub struct LawyerProceedingsQuery<'a> {
    pub state: &'a str,
    pub number: &'a str,
    params: &'a LawyerProceedingsParams,
}

impl QueryParams for LawyerProceedingsQuery<'_> {
    fn to_query(&self) -> QueryBuilder {
        let params = self.params;
        QueryBuilder::new()
            .push("oab_estado", self.state)
            .push("oab_numero", self.number)
            .push_opt("oab_tipo", params.oab_kind)
            .push_opt("ordem", params.order)
            .push_opt("limit", params.limit)
            .push_each("tribunais", params.courts.iter().flatten())
            .push_opt("status", params.status)
            .push_opt("data_minima", params.min_date.as_deref())
            .push_opt("data_maxima", params.max_date.as_deref())
    }
}
