//! Active-registration classifier
//!
//! Pure function over extracted records: the first record in document order
//! whose status carries an active-status phrase decides the verdict.

use crate::types::{CaseRecord, SearchOutcome, VerificationResult};

/// Status phrases (lowercase) that mark a registration as active, in priority order
pub const ACTIVE_STATUSES: [&str; 2] = ["registro de marca em vigor", "alto renome"];

/// Status reported when the search returned no records
pub const NO_PROCESS_FOUND: &str = "Nenhum processo encontrado.";

/// Status reported when no record carries an active status
pub const NO_ACTIVE_REGISTRATION: &str = "Nenhum registro ativo encontrado.";

/// Outcome of classifying a list of records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub has_active_registration: bool,
    pub status: String,
    pub holder: Option<String>,
    pub mark: Option<String>,
}

impl Verdict {
    fn inactive(status: &str) -> Self {
        Self {
            has_active_registration: false,
            status: status.to_string(),
            holder: None,
            mark: None,
        }
    }
}

/// Classifies records; never fails and performs no I/O
pub fn classify(records: &[CaseRecord]) -> Verdict {
    if records.is_empty() {
        return Verdict::inactive(NO_PROCESS_FOUND);
    }

    records
        .iter()
        .find(|record| is_active_status(&record.status))
        .map(|record| Verdict {
            has_active_registration: true,
            status: record.status.clone(),
            holder: Some(record.holder.clone()),
            mark: Some(record.mark.clone()),
        })
        .unwrap_or_else(|| Verdict::inactive(NO_ACTIVE_REGISTRATION))
}

/// Whether a status text contains one of [`ACTIVE_STATUSES`], ignoring case
pub fn is_active_status(status: &str) -> bool {
    let status = status.to_lowercase();
    ACTIVE_STATUSES
        .iter()
        .any(|phrase| status.contains(phrase))
}

/// Builds the per-brand result from a search outcome
pub fn verify_outcome(queried_brand: &str, outcome: &SearchOutcome) -> VerificationResult {
    let verdict = classify(&outcome.records);

    VerificationResult {
        queried_brand: queried_brand.to_string(),
        has_active_registration: verdict.has_active_registration,
        status: verdict.status,
        matched_holder: verdict.holder,
        matched_mark: verdict.mark,
        total_matches: outcome.total_reported,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(status: &str, holder: &str, mark: &str) -> CaseRecord {
        CaseRecord {
            status: status.to_string(),
            holder: holder.to_string(),
            mark: mark.to_string(),
            ..CaseRecord::default()
        }
    }

    #[test]
    fn test_classify_empty() {
        let verdict = classify(&[]);
        assert!(!verdict.has_active_registration);
        assert_eq!(verdict.status, NO_PROCESS_FOUND);
        assert_eq!(verdict.holder, None);
        assert_eq!(verdict.mark, None);
    }

    #[test]
    fn test_classify_registration_in_force() {
        let verdict = classify(&[record("Registro de Marca em vigor", "ACME", "ACME")]);
        assert!(verdict.has_active_registration);
        assert_eq!(verdict.status, "Registro de Marca em vigor");
        assert_eq!(verdict.holder.as_deref(), Some("ACME"));
        assert_eq!(verdict.mark.as_deref(), Some("ACME"));
    }

    #[test]
    fn test_classify_extinct() {
        let verdict = classify(&[record("Extinto", "ACME", "ACME")]);
        assert!(!verdict.has_active_registration);
        assert_eq!(verdict.status, NO_ACTIVE_REGISTRATION);
    }

    #[test]
    fn test_classify_well_known_mark() {
        let verdict = classify(&[
            record("Arquivado", "OTHER", "OTHER"),
            record("ALTO RENOME", "FAMOUS SA", "FAMOUS"),
        ]);
        assert!(verdict.has_active_registration);
        assert_eq!(verdict.holder.as_deref(), Some("FAMOUS SA"));
    }

    #[test]
    fn test_classify_first_match_wins() {
        // Document order decides, not phrase priority
        let verdict = classify(&[
            record("Alto renome", "FIRST", "FIRST"),
            record("Registro de marca em vigor", "SECOND", "SECOND"),
        ]);
        assert_eq!(verdict.holder.as_deref(), Some("FIRST"));
    }

    #[test]
    fn test_classify_phrase_inside_longer_status() {
        let verdict = classify(&[record(
            "Registro de marca em vigor - prorrogação",
            "ACME",
            "ACME",
        )]);
        assert!(verdict.has_active_registration);
    }

    #[test]
    fn test_verify_outcome_carries_brand_and_total() {
        let outcome = SearchOutcome {
            records: vec![record("Registro de marca em vigor", "ACME LTDA", "ACME")],
            total_reported: 4,
            no_results_notice: false,
        };

        let result = verify_outcome("acme", &outcome);
        assert_eq!(result.queried_brand, "acme");
        assert!(result.has_active_registration);
        assert_eq!(result.matched_holder.as_deref(), Some("ACME LTDA"));
        assert_eq!(result.matched_mark.as_deref(), Some("ACME"));
        assert_eq!(result.total_matches, 4);
    }

    fn any_status() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("Registro de marca em vigor".to_string()),
            Just("Alto Renome".to_string()),
            Just("Extinto".to_string()),
            Just("Arquivado".to_string()),
            "[a-zA-Z ]{0,20}",
        ]
    }

    proptest! {
        #[test]
        fn prop_classify_is_deterministic(
            rows in prop::collection::vec((any_status(), "[A-Z]{1,8}"), 0..20)
        ) {
            let records: Vec<CaseRecord> = rows
                .iter()
                .map(|(status, holder)| record(status, holder, holder))
                .collect();

            prop_assert_eq!(classify(&records), classify(&records));
        }

        #[test]
        fn prop_active_iff_some_status_matches(
            statuses in prop::collection::vec(any_status(), 0..20)
        ) {
            let records: Vec<CaseRecord> = statuses.iter().map(|s| record(s, "H", "M")).collect();
            let verdict = classify(&records);

            prop_assert_eq!(
                verdict.has_active_registration,
                statuses.iter().any(|s| is_active_status(s))
            );
        }
    }
}
