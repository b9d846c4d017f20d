//! Integration tests for the query endpoint: wire contract, status codes,
//! and validation short-circuiting, driven through the router with
//! deterministic probes.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_oracle::{create_router, AppState};
use domain_oracle_lib::{
    DnsProber, DnsRecordType, DnsSignal, DomainOracle, DomainQuery, RdapProber, Registration,
    WhoisProber,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

struct FixedDns {
    signal: DnsSignal,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl DnsProber for FixedDns {
    async fn probe(&self, _domain: &DomainQuery) -> DnsSignal {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.signal.clone()
    }
}

struct FixedRdap {
    answer: Registration,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl RdapProber for FixedRdap {
    async fn probe(&self, _domain: &DomainQuery) -> Registration {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer
    }
}

struct FixedWhois {
    answer: Registration,
}

#[async_trait]
impl WhoisProber for FixedWhois {
    async fn probe(&self, _domain: &DomainQuery) -> Registration {
        self.answer
    }
}

struct Harness {
    state: AppState,
    dns_calls: Arc<AtomicUsize>,
    rdap_calls: Arc<AtomicUsize>,
}

fn harness(dns: DnsSignal, rdap: Registration, whois: Option<Registration>) -> Harness {
    let dns_calls = Arc::new(AtomicUsize::new(0));
    let rdap_calls = Arc::new(AtomicUsize::new(0));

    let oracle = DomainOracle::with_probes(
        Arc::new(FixedDns {
            signal: dns,
            calls: dns_calls.clone(),
        }),
        Arc::new(FixedRdap {
            answer: rdap,
            calls: rdap_calls.clone(),
        }),
        whois.map(|answer| Arc::new(FixedWhois { answer }) as Arc<dyn WhoisProber>),
    );

    Harness {
        state: AppState {
            oracle: Arc::new(oracle),
        },
        dns_calls,
        rdap_calls,
    }
}

async fn get(state: AppState, uri: &str) -> (StatusCode, Value) {
    let response = create_router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn invalid_domain_returns_400_without_probing() {
    let h = harness(DnsSignal::empty(), Registration::Unknown, None);

    let (status, body) = get(h.state.clone(), "/domains/check?domain=-bad.com").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["domain"], json!("-bad.com"));
    assert_eq!(body["available"], json!(false));
    assert_eq!(body["source"], json!("validation"));
    assert_eq!(body["message"], json!("Format domain tidak valid"));
    assert!(body.get("checks").is_none());

    let (status, _) = get(h.state.clone(), "/domains/check?domain=not%20a%20domain").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = get(h.state.clone(), "/domains/check?domain=a").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(h.dns_calls.load(Ordering::SeqCst), 0);
    assert_eq!(h.rdap_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn registered_domain_reports_unavailable_with_provenance() {
    let h = harness(
        DnsSignal::with_records(vec![DnsRecordType::A, DnsRecordType::Mx, DnsRecordType::Ns]),
        Registration::Registered,
        None,
    );

    let (status, body) = get(h.state, "/domains/check?domain=google.com").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["domain"], json!("google.com"));
    assert_eq!(body["available"], json!(false));
    assert_eq!(body["source"], json!("DNS (A, MX, NS), RDAP"));
    assert_eq!(body["checks"]["dns"]["hasRecords"], json!(true));
    assert_eq!(body["checks"]["dns"]["recordTypes"], json!(["A", "MX", "NS"]));
    assert_eq!(body["checks"]["rdap"]["registered"], json!(true));
    assert_eq!(body["checks"]["whois"], json!(null));
}

#[tokio::test]
async fn available_domain_reports_corroborating_sources() {
    let h = harness(DnsSignal::empty(), Registration::Unregistered, None);

    let (status, body) = get(
        h.state,
        "/domains/check?domain=zzqqxx123unregistered.example",
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available"], json!(true));
    assert_eq!(body["source"], json!("RDAP (not found), DNS (no records)"));
    assert!(body["message"].as_str().unwrap().starts_with('✅'));
    assert_eq!(body["checks"]["dns"]["hasRecords"], json!(false));
    assert_eq!(body["checks"]["rdap"]["registered"], json!(false));
}

#[tokio::test]
async fn whois_signal_appears_when_configured() {
    let h = harness(
        DnsSignal::empty(),
        Registration::Unknown,
        Some(Registration::Registered),
    );

    let (status, body) = get(h.state, "/domains/check?domain=parked.example").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available"], json!(false));
    assert_eq!(body["source"], json!("WHOIS"));
    assert_eq!(body["checks"]["whois"]["registered"], json!(true));
    assert_eq!(body["checks"]["rdap"], json!(null));
}

#[tokio::test]
async fn normalization_is_reflected_in_response() {
    let h = harness(
        DnsSignal::with_records(vec![DnsRecordType::Ns]),
        Registration::Unknown,
        None,
    );

    let (status, body) = get(h.state, "/domains/check?domain=ExAmPle.COM").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["domain"], json!("example.com"));
}

#[tokio::test]
async fn repeated_queries_yield_identical_bodies() {
    let h = harness(DnsSignal::empty(), Registration::Unregistered, None);

    let (_, first) = get(h.state.clone(), "/domains/check?domain=repeat.example").await;
    let (_, second) = get(h.state, "/domains/check?domain=repeat.example").await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn missing_domain_parameter_is_a_client_error() {
    let h = harness(DnsSignal::empty(), Registration::Unknown, None);

    let response = create_router(h.state)
        .oneshot(
            Request::builder()
                .uri("/domains/check")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(h.dns_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let h = harness(DnsSignal::empty(), Registration::Unknown, None);

    let (status, body) = get(h.state, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
    assert!(body["version"].is_string());
}
