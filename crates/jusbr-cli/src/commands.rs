//! Subcommand to use-case params mapping.
//!
//! Every subcommand is lowered to the raw JSON params a host would send, so
//! the typed subcommands and `run` share one validation path.

use jusbr_core::UseCase;
use serde_json::{json, Map, Value};

use crate::cli::{AdvogadoArgs, Command};
use crate::error::CliError;

pub fn invocation(command: &Command) -> Result<(UseCase, Value), CliError> {
    Ok(match command {
        Command::Processo(args) => (
            UseCase::LookupProceeding,
            json!({ "numeroProcesso": args.numero }),
        ),
        Command::Advogado(args) => (UseCase::LawyerProceedings, lawyer_params(args)),
        Command::Movimentacoes(args) => {
            let mut params = Map::new();
            params.insert("numeroProcesso".into(), json!(args.numero));
            insert_opt(&mut params, "limit", args.limit);
            (UseCase::ProceedingMovements, Value::Object(params))
        }
        Command::Run(args) => {
            let use_case = args.use_case.parse::<UseCase>()?;
            let params = serde_json::from_str(&args.params).map_err(CliError::Params)?;
            (use_case, params)
        }
    })
}

fn lawyer_params(args: &AdvogadoArgs) -> Value {
    let mut params = Map::new();
    params.insert("oabEstado".into(), json!(args.estado));
    params.insert("oabNumero".into(), json!(args.numero));
    insert_opt(&mut params, "oabTipo", args.tipo.as_deref());
    insert_opt(&mut params, "ordem", args.ordem.as_deref());
    insert_opt(&mut params, "limit", args.limit);
    if !args.tribunais.is_empty() {
        params.insert("tribunais".into(), json!(args.tribunais));
    }
    insert_opt(&mut params, "status", args.status.as_deref());
    insert_opt(&mut params, "dataMinima", args.data_minima.as_deref());
    insert_opt(&mut params, "dataMaxima", args.data_maxima.as_deref());
    Value::Object(params)
}

fn insert_opt<V: Into<Value>>(params: &mut Map<String, Value>, key: &str, value: Option<V>) {
    if let Some(value) = value {
        params.insert(key.to_owned(), value.into());
    }
}
