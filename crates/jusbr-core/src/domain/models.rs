use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{MovementDate, UtcDateTime};

/// Side of the proceeding a party stands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyRole {
    Autor,
    Reu,
}

impl PartyRole {
    /// `ATIVO` is the plaintiff side; every other polarity is the defendant side.
    pub fn from_polarity(polarity: &str) -> Self {
        if polarity == "ATIVO" {
            Self::Autor
        } else {
            Self::Reu
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Autor => "autor",
            Self::Reu => "reu",
        }
    }
}

impl Display for PartyRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Procedural situation reported in a source cover.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProceedingStatus {
    #[default]
    Ativo,
    Inativo,
    Arquivado,
    Suspenso,
    Baixado,
    Other(String),
}

impl ProceedingStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_uppercase().as_str() {
            "ATIVO" => Self::Ativo,
            "INATIVO" => Self::Inativo,
            "ARQUIVADO" => Self::Arquivado,
            "SUSPENSO" => Self::Suspenso,
            "BAIXADO" => Self::Baixado,
            _ => Self::Other(raw.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Ativo => "ATIVO",
            Self::Inativo => "INATIVO",
            Self::Arquivado => "ARQUIVADO",
            Self::Suspenso => "SUSPENSO",
            Self::Baixado => "BAIXADO",
            Self::Other(raw) => raw,
        }
    }
}

impl Display for ProceedingStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ProceedingStatus {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<ProceedingStatus> for String {
    fn from(value: ProceedingStatus) -> Self {
        value.as_str().to_owned()
    }
}

/// Lawyer representing a party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attorney {
    #[serde(rename = "nome")]
    pub name: String,
    /// `"<number>/<state>"`, or empty when the provider lists no registration.
    #[serde(rename = "oab")]
    pub registration: String,
    #[serde(rename = "documento")]
    pub document: String,
}

/// Litigant on one side of a proceeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Party {
    #[serde(rename = "tipo")]
    pub role: PartyRole,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "documento")]
    pub document: String,
    #[serde(rename = "advogados")]
    pub attorneys: Vec<Attorney>,
}

impl Party {
    /// Deduplication identity.
    pub fn identity(&self) -> (&str, PartyRole) {
        (self.name.as_str(), self.role)
    }
}

/// Court record a movement was published in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MovementSource {
    pub id: Option<u64>,
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "tipo")]
    pub kind: Option<String>,
    #[serde(rename = "sigla")]
    pub abbreviation: Option<String>,
    #[serde(rename = "grau")]
    pub degree: Option<u32>,
    #[serde(rename = "grauFormatado")]
    pub degree_label: Option<String>,
}

/// Single docket entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Movement {
    #[serde(rename = "data")]
    pub date: MovementDate,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "tipo")]
    pub kind: String,
    /// The provider never attaches documents to movements.
    #[serde(rename = "documentos")]
    pub documents: Vec<String>,
    #[serde(rename = "fonte")]
    pub source: MovementSource,
}

/// Canonical proceeding record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Proceeding {
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "tribunal")]
    pub court: String,
    #[serde(rename = "vara")]
    pub division: String,
    #[serde(rename = "classe")]
    pub class: String,
    #[serde(rename = "assunto")]
    pub subject: String,
    #[serde(rename = "dataDistribuicao")]
    pub distributed_at: UtcDateTime,
    #[serde(rename = "valorCausa")]
    pub claim_value: f64,
    pub status: ProceedingStatus,
    #[serde(rename = "partes")]
    pub parties: Vec<Party>,
    #[serde(rename = "movimentacoes")]
    pub movements: Vec<Movement>,
}
