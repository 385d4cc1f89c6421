//! Behavior-driven tests for the host-invocable use cases
//!
//! These tests drive each use case through a scripted transport and assert
//! on what the host observes: the report it receives and the request that
//! left the process.

use std::sync::{Arc, Mutex};

use jusbr_core::config::{BASE_URL_VAR, TOKEN_VAR, TOKEN_VAR_FALLBACK};
use jusbr_core::use_cases::{lawyer, lookup, movements};
use jusbr_core::{
    dispatch, Host, HttpClient, HttpError, HttpRequest, HttpResponse, LawyerProceedingsParams,
    MovementsParams, PageLimit, ProceedingLookupParams, Report, ResultSink, StaticEnvironment,
    UseCase,
};
use serde_json::{json, Value};
use std::future::Future;
use std::pin::Pin;

// =============================================================================
// Test doubles
// =============================================================================

struct RecordingHttpClient {
    response: Result<HttpResponse, HttpError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingHttpClient {
    fn responding(status: u16, body: Value) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(HttpResponse::new(status, body.to_string())),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Err(HttpError::new(message)),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("request log").clone()
    }
}

impl HttpClient for RecordingHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests.lock().expect("request log").push(request);
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}

#[derive(Default)]
struct CollectingSink {
    reports: Mutex<Vec<Report>>,
}

impl CollectingSink {
    fn single(&self) -> Report {
        let reports = self.reports.lock().expect("report log");
        assert_eq!(reports.len(), 1, "every invocation reports exactly once");
        reports[0].clone()
    }
}

impl ResultSink for CollectingSink {
    fn report(&self, report: Report) {
        self.reports.lock().expect("report log").push(report);
    }
}

fn token_env() -> StaticEnvironment {
    StaticEnvironment::new().with_var(TOKEN_VAR, "test-token")
}

fn host_with(
    env: StaticEnvironment,
    http: &Arc<RecordingHttpClient>,
) -> (Host, Arc<CollectingSink>) {
    let sink = Arc::new(CollectingSink::default());
    let host = Host::new(Arc::new(env), sink.clone(), http.clone());
    (host, sink)
}

fn lookup_params(number: &str) -> ProceedingLookupParams {
    ProceedingLookupParams {
        case_number: Some(number.to_owned()),
    }
}

fn lawyer_params(state: &str, number: &str) -> LawyerProceedingsParams {
    LawyerProceedingsParams {
        oab_state: Some(state.to_owned()),
        oab_number: Some(number.to_owned()),
        ..LawyerProceedingsParams::default()
    }
}

fn detail_body() -> Value {
    json!({
        "numero_cnj": "0000001-23.2020.8.26.0100",
        "unidade_origem": {"tribunal_sigla": "TJSP", "nome": "1ª Vara Cível"},
        "data_inicio": "2020-02-01",
        "fontes": [{
            "capa": {
                "classe": "Procedimento Comum",
                "assunto": "Indenização",
                "data_distribuicao": "2020-01-15",
                "valor_causa": {"valor": "15000.50"},
                "situacao": "Ativo"
            },
            "envolvidos": [
                {"nome": "Maria Silva", "polo": "ATIVO", "cpf": "111.111.111-11",
                 "advogados": [{"nome": "Dr. João", "oabs": [{"numero": "123456", "uf": "SP"}]}]},
                {"nome": "Empresa X", "polo": "PASSIVO", "cnpj": "00.000.000/0001-00"},
                {"nome": "Juiz Y", "polo": "ATIVO", "tipo": "JUIZ"}
            ]
        }]
    })
}

// =============================================================================
// Input validation happens before any network traffic
// =============================================================================

#[tokio::test]
async fn when_case_number_is_empty_lookup_fails_without_request() {
    // Given: A configured host
    let http = RecordingHttpClient::responding(200, json!({}));
    let (host, sink) = host_with(token_env(), &http);

    // When: The host asks for a proceeding with an empty number
    lookup::run(&host, &lookup_params("")).await;

    // Then: The failure is reported and no request leaves the process
    let report = sink.single();
    assert!(!report.success);
    assert_eq!(report.data, None);
    assert_eq!(report.error.as_deref(), Some("numeroProcesso vazio"));
    assert!(http.requests().is_empty());
}

#[tokio::test]
async fn when_movements_case_number_missing_then_required_message_is_reported() {
    let http = RecordingHttpClient::responding(200, json!({"items": []}));
    let (host, sink) = host_with(token_env(), &http);

    movements::run(&host, &MovementsParams::default()).await;

    let report = sink.single();
    assert_eq!(
        report.error.as_deref(),
        Some("É necessário informar o número do processo")
    );
    assert!(http.requests().is_empty());
}

#[tokio::test]
async fn when_oab_number_missing_lawyer_search_fails_without_request() {
    let http = RecordingHttpClient::responding(200, json!({"items": []}));
    let (host, sink) = host_with(token_env(), &http);

    lawyer::run(&host, &lawyer_params("SP", "")).await;

    let report = sink.single();
    assert_eq!(
        report.error.as_deref(),
        Some("É necessário informar estado e número da OAB")
    );
    assert!(http.requests().is_empty());
}

#[tokio::test]
async fn when_oab_state_is_absent_lawyer_search_fails_without_request() {
    // Given: Params carrying only the OAB number
    let http = RecordingHttpClient::responding(200, json!({"items": []}));
    let (host, sink) = host_with(token_env(), &http);

    // When: The host dispatches the lawyer search
    dispatch(&host, UseCase::LawyerProceedings, json!({"oabNumero": "123456"})).await;

    // Then: The OAB validation message is reported and nothing is requested
    let report = sink.single();
    assert!(!report.success);
    assert_eq!(
        report.error.as_deref(),
        Some("É necessário informar estado e número da OAB")
    );
    assert!(http.requests().is_empty());
}

#[tokio::test]
async fn when_params_are_a_bare_array_lookup_fails_without_request() {
    let http = RecordingHttpClient::responding(200, detail_body());
    let (host, sink) = host_with(token_env(), &http);

    dispatch(&host, UseCase::LookupProceeding, json!(["0000001-23.2020.8.26.0100"])).await;

    let report = sink.single();
    assert!(!report.success);
    assert_eq!(report.error.as_deref(), Some("numeroProcesso vazio"));
    assert!(http.requests().is_empty());
}

#[tokio::test]
async fn when_token_is_not_configured_no_request_is_made() {
    // Given: An environment without any token
    let http = RecordingHttpClient::responding(200, detail_body());
    let (host, sink) = host_with(StaticEnvironment::new(), &http);

    // When: A valid lookup is invoked
    lookup::run(&host, &lookup_params("0000001-23.2020.8.26.0100")).await;

    // Then: The configuration failure is reported before any network call
    assert_eq!(
        sink.single().error.as_deref(),
        Some("Token do Escavador não configurado")
    );
    assert!(http.requests().is_empty());
}

// =============================================================================
// Provider status classification
// =============================================================================

#[tokio::test]
async fn when_provider_returns_404_message_depends_on_subject() {
    let http = RecordingHttpClient::responding(404, json!({"error": "not found"}));
    let (host, sink) = host_with(token_env(), &http);
    lookup::run(&host, &lookup_params("123")).await;
    assert_eq!(sink.single().error.as_deref(), Some("Processo não encontrado"));

    let http = RecordingHttpClient::responding(404, json!({}));
    let (host, sink) = host_with(token_env(), &http);
    lawyer::run(&host, &lawyer_params("SP", "1")).await;
    assert_eq!(sink.single().error.as_deref(), Some("Advogado não encontrado"));

    let http = RecordingHttpClient::responding(404, json!({}));
    let (host, sink) = host_with(token_env(), &http);
    let params = MovementsParams {
        case_number: Some(String::from("123")),
        limit: None,
    };
    movements::run(&host, &params).await;
    assert_eq!(sink.single().error.as_deref(), Some("Processo não encontrado"));
}

#[tokio::test]
async fn when_provider_rejects_credentials_or_credit_user_sees_portuguese_message() {
    let cases = [
        (401, "Token de acesso inválido ou expirado"),
        (402, "Você não possui saldo em crédito da API"),
        (500, "Falha HTTP 500"),
        (429, "Falha HTTP 429"),
    ];

    for (status, expected) in cases {
        let http = RecordingHttpClient::responding(status, json!({}));
        let (host, sink) = host_with(token_env(), &http);

        lookup::run(&host, &lookup_params("123")).await;

        let report = sink.single();
        assert!(!report.success, "status {status} must fail");
        assert_eq!(report.error.as_deref(), Some(expected));
        assert_eq!(http.requests().len(), 1, "no retries for status {status}");
    }
}

#[tokio::test]
async fn when_transport_fails_the_error_is_reported_once() {
    let http = RecordingHttpClient::failing("connection failed: refused");
    let (host, sink) = host_with(token_env(), &http);

    lookup::run(&host, &lookup_params("123")).await;

    let report = sink.single();
    assert!(!report.success);
    assert!(report
        .error
        .as_deref()
        .is_some_and(|message| message.contains("connection failed")));
    assert_eq!(http.requests().len(), 1);
}

#[tokio::test]
async fn when_listing_body_lacks_items_it_is_a_decode_failure() {
    let http = RecordingHttpClient::responding(200, json!({"paginator": {}}));
    let (host, sink) = host_with(token_env(), &http);

    lawyer::run(&host, &lawyer_params("SP", "1")).await;

    let report = sink.single();
    assert!(!report.success);
    assert!(report.data.is_none());
}

// =============================================================================
// Successful invocations
// =============================================================================

#[tokio::test]
async fn when_lookup_succeeds_host_receives_normalized_proceeding() {
    // Given: A provider returning a populated detail record
    let http = RecordingHttpClient::responding(200, detail_body());
    let (host, sink) = host_with(token_env(), &http);

    // When: The lookup runs
    lookup::run(&host, &lookup_params("0000001-23.2020.8.26.0100")).await;

    // Then: The payload carries the canonical record
    let report = sink.single();
    assert!(report.success);
    let proceeding = &report.data.expect("payload")["processo"];
    assert_eq!(proceeding["numero"], "0000001-23.2020.8.26.0100");
    assert_eq!(proceeding["tribunal"], "TJSP");
    assert_eq!(proceeding["vara"], "1ª Vara Cível");
    assert_eq!(proceeding["classe"], "Procedimento Comum");
    assert_eq!(proceeding["assunto"], "Indenização");
    assert_eq!(proceeding["dataDistribuicao"], "2020-01-15T00:00:00Z");
    assert_eq!(proceeding["valorCausa"], 15000.5);
    assert_eq!(proceeding["status"], "ATIVO");
    assert_eq!(proceeding["movimentacoes"], json!([]));

    // And: The judge is excluded and company documents are not used
    let parties = proceeding["partes"].as_array().expect("parties");
    assert_eq!(parties.len(), 2);
    assert_eq!(parties[0]["tipo"], "autor");
    assert_eq!(parties[0]["documento"], "111.111.111-11");
    assert_eq!(parties[0]["advogados"][0]["oab"], "123456/SP");
    assert_eq!(parties[1]["tipo"], "reu");
    assert_eq!(parties[1]["documento"], "");
}

#[tokio::test]
async fn when_lookup_runs_request_targets_encoded_number_with_provider_headers() {
    let http = RecordingHttpClient::responding(200, detail_body());
    let (host, _sink) = host_with(token_env(), &http);

    lookup::run(&host, &lookup_params("0000001-23.2020.8.26.0100")).await;

    let requests = http.requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(
        request.url,
        "https://api.escavador.com/api/v2/processos/numero_cnj/0000001-23.2020.8.26.0100"
    );
    assert_eq!(request.header("authorization"), Some("Bearer test-token"));
    assert_eq!(request.header("accept"), Some("application/json"));
    assert_eq!(request.header("x-requested-with"), Some("XMLHttpRequest"));
}

#[tokio::test]
async fn when_claim_value_is_a_scalar_it_defaults_to_zero() {
    // Given: A detail whose cover carries the claim value as a bare string
    let body = json!({
        "numero_cnj": "777",
        "fontes": [{"capa": {"classe": "Monitória", "valor_causa": "1500.00"}}]
    });
    let http = RecordingHttpClient::responding(200, body);
    let (host, sink) = host_with(token_env(), &http);

    // When: The lookup runs
    lookup::run(&host, &lookup_params("777")).await;

    // Then: The lookup still succeeds with a zero claim value
    let report = sink.single();
    assert!(report.success, "unexpected failure: {:?}", report.error);
    let data = report.data.expect("payload");
    assert_eq!(data["processo"]["valorCausa"], 0.0);
    assert_eq!(data["processo"]["classe"], "Monitória");
}

#[tokio::test]
async fn when_detail_has_no_number_the_requested_one_is_used() {
    let http = RecordingHttpClient::responding(200, json!({"fontes": []}));
    let (host, sink) = host_with(token_env(), &http);

    lookup::run(&host, &lookup_params("555")).await;

    let data = sink.single().data.expect("payload");
    assert_eq!(data["processo"]["numero"], "555");
    assert_eq!(data["processo"]["tribunal"], "Desconhecido");
    assert_eq!(data["processo"]["classe"], "Sem classe");
    assert_eq!(data["processo"]["valorCausa"], 0.0);
}

#[tokio::test]
async fn when_lawyer_search_succeeds_listing_is_normalized_with_passthrough_fields() {
    // Given: A page with one proceeding whose party only has a CNPJ
    let body = json!({
        "advogado_encontrado": {"nome": "Dr. João", "quantidade_processos": 1},
        "items": [{
            "numero_cnj": "111",
            "estado_origem": {"sigla": "SP"},
            "fontes": [{"envolvidos": [
                {"nome": "Empresa X", "polo": "PASSIVO", "cnpj": "00.000.000/0001-00"}
            ]}]
        }],
        "links": {"next": "https://api.escavador.com/api/v2/advogado/processos?cursor=abc"},
        "paginator": {"per_page": 50}
    });
    let http = RecordingHttpClient::responding(200, body);
    let (host, sink) = host_with(token_env(), &http);

    // When: The lawyer search runs
    lawyer::run(&host, &lawyer_params("SP", "123456")).await;

    // Then: The listing is normalized and provider fields pass through
    let data = sink.single().data.expect("payload");
    assert_eq!(data["advogadoEncontrado"]["nome"], "Dr. João");
    assert_eq!(data["totalProcessos"], 1);
    assert_eq!(data["processos"][0]["tribunal"], "SP");
    assert_eq!(data["processos"][0]["vara"], "Desconhecida");
    assert_eq!(data["processos"][0]["partes"][0]["documento"], "00.000.000/0001-00");
    assert_eq!(data["paginator"]["per_page"], 50);
    assert!(data["links"]["next"].is_string());

    // And: The query string carries the OAB fields
    assert_eq!(
        http.requests()[0].url,
        "https://api.escavador.com/api/v2/advogado/processos?oab_estado=SP&oab_numero=123456"
    );
}

#[tokio::test]
async fn when_movements_succeed_page_is_mapped_in_order() {
    let body = json!({
        "items": [
            {"data": "2021-03-04", "conteudo": "Juntada de petição", "tipo": "ANDAMENTO",
             "fonte": {"fonte_id": 7, "nome": "TJSP", "sigla": "TJSP", "grau": 1}},
            {"data": "not a date"}
        ],
        "links": null,
        "paginator": {"per_page": 100}
    });
    let http = RecordingHttpClient::responding(200, body);
    let (host, sink) = host_with(token_env(), &http);
    let params = MovementsParams {
        case_number: Some(String::from("0000001-23.2020.8.26.0100")),
        limit: Some(PageLimit::Hundred),
    };

    movements::run(&host, &params).await;

    let data = sink.single().data.expect("payload");
    assert_eq!(data["numeroProcesso"], "0000001-23.2020.8.26.0100");
    assert_eq!(data["totalMovimentacoes"], 2);
    assert_eq!(data["movimentacoes"][0]["descricao"], "Juntada de petição");
    assert_eq!(data["movimentacoes"][0]["fonte"]["grau"], 1);
    assert_eq!(data["movimentacoes"][1]["data"], Value::Null);
    assert_eq!(data["movimentacoes"][1]["descricao"], "Movimentação sem descrição");
    assert_eq!(data["movimentacoes"][1]["tipo"], "ANDAMENTO");
    assert_eq!(
        http.requests()[0].url,
        concat!(
            "https://api.escavador.com/api/v2/processos/numero_cnj/",
            "0000001-23.2020.8.26.0100/movimentacoes?limit=100"
        )
    );
}

// =============================================================================
// Host configuration
// =============================================================================

#[tokio::test]
async fn when_base_url_is_overridden_requests_go_there() {
    let env = StaticEnvironment::new()
        .with_var(TOKEN_VAR_FALLBACK, "fallback-token")
        .with_var(BASE_URL_VAR, "http://env.test/api/");
    let http = RecordingHttpClient::responding(200, detail_body());
    let sink = Arc::new(CollectingSink::default());

    let host = Host::new(Arc::new(env.clone()), sink.clone(), http.clone());
    lookup::run(&host, &lookup_params("1")).await;
    let host = Host::new(Arc::new(env), sink.clone(), http.clone())
        .with_base_url("http://override.test/v2/");
    lookup::run(&host, &lookup_params("2")).await;

    let requests = http.requests();
    assert_eq!(requests[0].url, "http://env.test/api/processos/numero_cnj/1");
    assert_eq!(requests[1].url, "http://override.test/v2/processos/numero_cnj/2");
    assert_eq!(requests[0].header("authorization"), Some("Bearer fallback-token"));
}

// =============================================================================
// Dispatch from raw params
// =============================================================================

#[tokio::test]
async fn when_params_arrive_wrapped_in_array_dispatch_unwraps_them() {
    let http = RecordingHttpClient::responding(200, detail_body());
    let (host, sink) = host_with(token_env(), &http);

    dispatch(
        &host,
        UseCase::LookupProceeding,
        json!([{"numeroProcesso": "0000001-23.2020.8.26.0100"}]),
    )
    .await;

    assert!(sink.single().success);
    assert_eq!(http.requests().len(), 1);
}

#[tokio::test]
async fn when_dispatch_receives_unsupported_limit_it_reports_failure() {
    let http = RecordingHttpClient::responding(200, json!({"items": []}));
    let (host, sink) = host_with(token_env(), &http);

    dispatch(
        &host,
        UseCase::ProceedingMovements,
        json!({"numeroProcesso": "123", "limit": 20}),
    )
    .await;

    let report = sink.single();
    assert!(!report.success);
    assert!(report.error.is_some());
    assert!(http.requests().is_empty());
}
