//! Search filtering over the loaded directory.
//!
//! A full pass on every call — the UI shell decides when to recompute,
//! this module only decides what the recomputed value is. Collection
//! sizes are clinic-scale, so no incremental diffing.

use serde::Serialize;

use super::loader::PatientCollection;
use crate::models::Patient;

/// Derived, disposable projection of the collection against a query.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FilteredView {
    pub patients: Vec<Patient>,
    /// Entries that could not be read as records at load time, surfaced
    /// so the UI can show an advisory note instead of silently hiding them.
    pub unreadable: u32,
}

/// Case-insensitive substring match on given name, family name, and
/// patient identifier; a record matches if any of the three contains the
/// query. The empty query matches everything, order preserved.
pub fn filter_patients(collection: &PatientCollection, query: &str) -> FilteredView {
    let needle = query.to_lowercase();
    let patients = collection
        .patients
        .iter()
        .filter(|p| matches_query(p, &needle))
        .cloned()
        .collect();

    FilteredView {
        patients,
        unreadable: collection.unreadable,
    }
}

fn matches_query(patient: &Patient, needle: &str) -> bool {
    [&patient.firstname, &patient.lastname, &patient.pid]
        .into_iter()
        .any(|field| field.as_deref().unwrap_or("").to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient(pid: &str, first: &str, last: &str) -> Patient {
        Patient {
            id: Some(uuid::Uuid::new_v4().to_string()),
            pid: Some(pid.to_string()),
            firstname: Some(first.to_string()),
            lastname: Some(last.to_string()),
            ..Default::default()
        }
    }

    fn collection(patients: Vec<Patient>) -> PatientCollection {
        PatientCollection {
            patients,
            unreadable: 0,
        }
    }

    #[test]
    fn empty_query_is_identity() {
        let c = collection(vec![
            patient("P2", "Bo", "Ng"),
            patient("P1", "Ann", "Lee"),
            Patient::default(),
        ]);
        let view = filter_patients(&c, "");
        assert_eq!(view.patients, c.patients);
    }

    #[test]
    fn matches_given_name_case_insensitively() {
        let c = collection(vec![patient("P1", "Ann", "Lee"), patient("P2", "Bo", "Ng")]);
        let view = filter_patients(&c, "an");
        assert_eq!(view.patients.len(), 1);
        assert_eq!(view.patients[0].pid.as_deref(), Some("P1"));

        let view = filter_patients(&c, "ANN");
        assert_eq!(view.patients.len(), 1);
    }

    #[test]
    fn matches_family_name_and_pid_independently() {
        let c = collection(vec![patient("P1", "Ann", "Lee"), patient("P2", "Bo", "Ng")]);

        let by_last = filter_patients(&c, "ng");
        assert_eq!(by_last.patients.len(), 1);
        assert_eq!(by_last.patients[0].pid.as_deref(), Some("P2"));

        let by_pid = filter_patients(&c, "p1");
        assert_eq!(by_pid.patients.len(), 1);
        assert_eq!(by_pid.patients[0].firstname.as_deref(), Some("Ann"));
    }

    #[test]
    fn every_match_contains_the_query_somewhere() {
        let c = collection(vec![
            patient("P1", "Ann", "Lee"),
            patient("P2", "Bo", "Ng"),
            patient("AN-3", "Cy", "Orr"),
        ]);
        let view = filter_patients(&c, "an");
        assert_eq!(view.patients.len(), 2);
        for p in &view.patients {
            let hit = [&p.firstname, &p.lastname, &p.pid]
                .into_iter()
                .any(|f| f.as_deref().unwrap_or("").to_lowercase().contains("an"));
            assert!(hit, "record {:?} should contain the query", p.pid);
        }
    }

    #[test]
    fn records_with_absent_fields_compare_as_empty() {
        let c = collection(vec![Patient::default(), patient("P1", "Ann", "Lee")]);
        // Absent fields never match a non-empty query...
        let view = filter_patients(&c, "ann");
        assert_eq!(view.patients.len(), 1);
        // ...but the empty query keeps them.
        let view = filter_patients(&c, "");
        assert_eq!(view.patients.len(), 2);
    }

    #[test]
    fn no_match_yields_empty_view() {
        let c = collection(vec![patient("P1", "Ann", "Lee")]);
        let view = filter_patients(&c, "zz");
        assert!(view.patients.is_empty());
    }

    #[test]
    fn unreadable_count_rides_along() {
        let c = PatientCollection {
            patients: vec![patient("P1", "Ann", "Lee")],
            unreadable: 3,
        };
        let view = filter_patients(&c, "zz");
        assert!(view.patients.is_empty());
        assert_eq!(view.unreadable, 3);
    }

    #[test]
    fn filter_does_not_mutate_the_collection() {
        let c = collection(vec![patient("P1", "Ann", "Lee"), patient("P2", "Bo", "Ng")]);
        let before = c.patients.clone();
        let _ = filter_patients(&c, "ann");
        assert_eq!(c.patients, before);
    }
}
