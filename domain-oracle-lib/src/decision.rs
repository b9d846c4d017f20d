//! Decision engine: reconcile the probe signals into one verdict.
//!
//! Positive evidence is OR-combined: a single probe saying "registered" is
//! conclusive, because registries essentially never false-positive a DNS
//! delegation or an RDAP hit. The "available" conclusion is the fallback
//! when nothing contradicts it, annotated with every probe that positively
//! corroborated availability so the verdict stays auditable even though the
//! individual probes are unreliable.
//!
//! Known conflation, preserved deliberately: when every probe is
//! inconclusive and DNS has no records, the verdict is still "available"
//! rather than a distinct "unknown". Callers treat the verdict as advisory.

use crate::types::{DnsSignal, DomainQuery, Registration, Verdict};

/// Combine the three probe signals into an availability verdict.
///
/// Pure function: no I/O, no failure mode. `whois` is `None` when the WHOIS
/// probe is not configured; absent evidence never overrides positive
/// evidence from another probe.
pub fn decide(
    domain: &DomainQuery,
    dns: &DnsSignal,
    rdap: Registration,
    whois: Option<Registration>,
) -> Verdict {
    let mut sources = Vec::new();

    // Every positive "registered" signal is recorded; any one of them
    // decides the verdict.
    if dns.exists() {
        let types = dns
            .record_types
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        sources.push(format!("DNS ({})", types));
    }
    if rdap == Registration::Registered {
        sources.push("RDAP".to_string());
    }
    if whois == Some(Registration::Registered) {
        sources.push("WHOIS".to_string());
    }

    if !sources.is_empty() {
        return Verdict {
            domain: domain.as_str().to_string(),
            available: false,
            message: format!("❌ Domain {} sudah terdaftar", domain),
            sources,
        };
    }

    // Fallback to available, annotated with every probe that corroborates.
    if rdap == Registration::Unregistered {
        sources.push("RDAP (not found)".to_string());
    }
    if whois == Some(Registration::Unregistered) {
        sources.push("WHOIS (available)".to_string());
    }
    if !dns.exists() {
        sources.push("DNS (no records)".to_string());
    }

    Verdict {
        domain: domain.as_str().to_string(),
        available: true,
        message: format!("✅ Domain {} tersedia!", domain),
        sources,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DnsRecordType;

    fn query(domain: &str) -> DomainQuery {
        DomainQuery::parse(domain).unwrap()
    }

    #[test]
    fn test_dns_records_mean_registered() {
        let dns = DnsSignal::with_records(vec![
            DnsRecordType::A,
            DnsRecordType::Mx,
            DnsRecordType::Ns,
        ]);
        let verdict = decide(&query("google.com"), &dns, Registration::Unknown, None);

        assert!(!verdict.available);
        assert_eq!(verdict.sources, vec!["DNS (A, MX, NS)"]);
        assert!(verdict.message.starts_with('❌'));
    }

    #[test]
    fn test_dns_wins_regardless_of_other_signals() {
        let dns = DnsSignal::with_records(vec![DnsRecordType::Soa]);
        let verdict = decide(
            &query("example.com"),
            &dns,
            Registration::Unregistered,
            Some(Registration::Unregistered),
        );

        assert!(!verdict.available);
        assert_eq!(verdict.sources, vec!["DNS (SOA)"]);
    }

    #[test]
    fn test_rdap_registered_without_dns() {
        let verdict = decide(
            &query("parked.example"),
            &DnsSignal::empty(),
            Registration::Registered,
            None,
        );

        assert!(!verdict.available);
        assert_eq!(verdict.sources, vec!["RDAP"]);
    }

    #[test]
    fn test_whois_registered_without_dns_and_rdap() {
        let verdict = decide(
            &query("parked.example"),
            &DnsSignal::empty(),
            Registration::Unknown,
            Some(Registration::Registered),
        );

        assert!(!verdict.available);
        assert_eq!(verdict.sources, vec!["WHOIS"]);
    }

    #[test]
    fn test_all_positive_signals_accumulate() {
        let dns = DnsSignal::with_records(vec![DnsRecordType::A]);
        let verdict = decide(
            &query("taken.com"),
            &dns,
            Registration::Registered,
            Some(Registration::Registered),
        );

        assert!(!verdict.available);
        assert_eq!(verdict.sources, vec!["DNS (A)", "RDAP", "WHOIS"]);
    }

    #[test]
    fn test_available_with_corroboration() {
        let verdict = decide(
            &query("zzqqxx123unregistered.example"),
            &DnsSignal::empty(),
            Registration::Unregistered,
            None,
        );

        assert!(verdict.available);
        assert_eq!(verdict.sources, vec!["RDAP (not found)", "DNS (no records)"]);
        assert!(verdict.message.starts_with('✅'));
    }

    #[test]
    fn test_available_with_whois_corroboration() {
        let verdict = decide(
            &query("free.example"),
            &DnsSignal::empty(),
            Registration::Unregistered,
            Some(Registration::Unregistered),
        );

        assert!(verdict.available);
        assert_eq!(
            verdict.sources,
            vec!["RDAP (not found)", "WHOIS (available)", "DNS (no records)"]
        );
    }

    // Characterization test, not a desired property: all-inconclusive still
    // reports "available" with only the DNS annotation. The engine does not
    // surface a distinct "could not determine" state.
    #[test]
    fn test_all_inconclusive_falls_back_to_available() {
        let verdict = decide(
            &query("murky.example"),
            &DnsSignal::empty(),
            Registration::Unknown,
            None,
        );

        assert!(verdict.available);
        assert_eq!(verdict.sources, vec!["DNS (no records)"]);
    }

    #[test]
    fn test_unknown_whois_adds_nothing() {
        let verdict = decide(
            &query("murky.example"),
            &DnsSignal::empty(),
            Registration::Unregistered,
            Some(Registration::Unknown),
        );

        assert!(verdict.available);
        assert_eq!(verdict.sources, vec!["RDAP (not found)", "DNS (no records)"]);
    }

    #[test]
    fn test_decide_is_deterministic() {
        let dns = DnsSignal::with_records(vec![DnsRecordType::A, DnsRecordType::Ns]);
        let first = decide(&query("repeat.com"), &dns, Registration::Registered, None);
        let second = decide(&query("repeat.com"), &dns, Registration::Registered, None);
        assert_eq!(first, second);
    }
}
