use serde::Deserialize;
use serde_json::Value;

use super::de::{lenient_object, lenient_string, lenient_u32, lenient_u64, lenient_vec};

/// Proceeding as returned by the CNJ lookup and inside lawyer listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProceedingItem {
    #[serde(rename = "numero_cnj", default, deserialize_with = "lenient_string")]
    pub case_number: Option<String>,
    #[serde(rename = "unidade_origem", default, deserialize_with = "lenient_object")]
    pub origin_unit: Option<OriginUnit>,
    #[serde(rename = "estado_origem", default, deserialize_with = "lenient_object")]
    pub origin_state: Option<OriginState>,
    #[serde(rename = "data_inicio", default, deserialize_with = "lenient_string")]
    pub started_at: Option<String>,
    #[serde(rename = "fontes", default, deserialize_with = "lenient_vec")]
    pub sources: Vec<SourceRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OriginUnit {
    #[serde(rename = "tribunal_sigla", default, deserialize_with = "lenient_string")]
    pub court_abbreviation: Option<String>,
    #[serde(rename = "nome", default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OriginState {
    #[serde(rename = "sigla", default, deserialize_with = "lenient_string")]
    pub abbreviation: Option<String>,
}

/// Per-court record ("fonte") contributing cover data and participants.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceRecord {
    #[serde(rename = "capa", default, deserialize_with = "lenient_object")]
    pub cover: Option<Cover>,
    #[serde(rename = "envolvidos", default, deserialize_with = "lenient_vec")]
    pub involved: Vec<InvolvedEntry>,
}

/// Summary block ("capa") of a source record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Cover {
    #[serde(rename = "classe", default, deserialize_with = "lenient_string")]
    pub class: Option<String>,
    #[serde(rename = "assunto", default, deserialize_with = "lenient_string")]
    pub subject: Option<String>,
    #[serde(rename = "data_distribuicao", default, deserialize_with = "lenient_string")]
    pub distributed_at: Option<String>,
    #[serde(rename = "valor_causa", default, deserialize_with = "lenient_object")]
    pub claim_value: Option<ClaimValue>,
    #[serde(rename = "situacao", default, deserialize_with = "lenient_string")]
    pub situation: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClaimValue {
    #[serde(rename = "valor", default, deserialize_with = "lenient_string")]
    pub amount: Option<String>,
}

/// Case participant ("envolvido"); judges and rapporteurs included.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvolvedEntry {
    #[serde(rename = "nome", default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(rename = "nome_normalizado", default, deserialize_with = "lenient_string")]
    pub normalized_name: Option<String>,
    #[serde(rename = "polo", default, deserialize_with = "lenient_string")]
    pub polarity: Option<String>,
    #[serde(rename = "tipo", default, deserialize_with = "lenient_string")]
    pub kind: Option<String>,
    #[serde(rename = "cpf", default, deserialize_with = "lenient_string")]
    pub cpf: Option<String>,
    #[serde(rename = "cnpj", default, deserialize_with = "lenient_string")]
    pub cnpj: Option<String>,
    #[serde(rename = "advogados", default, deserialize_with = "lenient_vec")]
    pub attorneys: Vec<AttorneyEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttorneyEntry {
    #[serde(rename = "nome", default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(rename = "nome_normalizado", default, deserialize_with = "lenient_string")]
    pub normalized_name: Option<String>,
    #[serde(rename = "cpf", default, deserialize_with = "lenient_string")]
    pub cpf: Option<String>,
    #[serde(rename = "oabs", default, deserialize_with = "lenient_vec")]
    pub registrations: Vec<OabEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OabEntry {
    #[serde(rename = "numero", default, deserialize_with = "lenient_string")]
    pub number: Option<String>,
    #[serde(rename = "uf", default, deserialize_with = "lenient_string")]
    pub state: Option<String>,
}

/// Docket entry ("movimentação").
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovementItem {
    #[serde(rename = "data", default, deserialize_with = "lenient_string")]
    pub date: Option<String>,
    #[serde(rename = "conteudo", default, deserialize_with = "lenient_string")]
    pub content: Option<String>,
    #[serde(rename = "tipo", default, deserialize_with = "lenient_string")]
    pub kind: Option<String>,
    #[serde(rename = "fonte", default, deserialize_with = "lenient_object")]
    pub source: Option<MovementSourceItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovementSourceItem {
    #[serde(rename = "fonte_id", default, deserialize_with = "lenient_u64")]
    pub id: Option<u64>,
    #[serde(rename = "nome", default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(rename = "tipo", default, deserialize_with = "lenient_string")]
    pub kind: Option<String>,
    #[serde(rename = "sigla", default, deserialize_with = "lenient_string")]
    pub abbreviation: Option<String>,
    #[serde(rename = "grau", default, deserialize_with = "lenient_u32")]
    pub degree: Option<u32>,
    #[serde(rename = "grau_formatado", default, deserialize_with = "lenient_string")]
    pub degree_label: Option<String>,
}

/// Page returned by `/advogado/processos`.
///
/// `items` is required; a body without it is a decode failure.
#[derive(Debug, Clone, Deserialize)]
pub struct LawyerProceedingsPage {
    #[serde(rename = "advogado_encontrado", default)]
    pub lawyer: Option<Value>,
    pub items: Vec<ProceedingItem>,
    #[serde(default)]
    pub links: Option<Value>,
    #[serde(default)]
    pub paginator: Option<Value>,
}

/// Page returned by `/processos/numero_cnj/{n}/movimentacoes`.
#[derive(Debug, Clone, Deserialize)]
pub struct MovementsPage {
    pub items: Vec<MovementItem>,
    #[serde(default)]
    pub links: Option<Value>,
    #[serde(default)]
    pub paginator: Option<Value>,
}
