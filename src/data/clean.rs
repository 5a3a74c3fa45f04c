use super::model::{Dataset, RawRecord};

// ---------------------------------------------------------------------------
// Cleaning: drop incomplete rows, order by age
// ---------------------------------------------------------------------------

/// Keep rows with both fields present, then stable-sort by age ascending.
///
/// Ties keep their input order. An all-incomplete input yields an empty
/// dataset; that is reported later, when a range is asked for.
pub fn clean_and_sort(raw: &[RawRecord]) -> Dataset {
    let mut records: Vec<_> = raw.iter().filter_map(RawRecord::complete).collect();
    records.sort_by(|a, b| a.age.total_cmp(&b.age));

    log::debug!(
        "kept {} of {} rows after dropping incomplete records",
        records.len(),
        raw.len()
    );
    Dataset { records }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn raw(age: Option<f64>, dt: Option<f64>) -> RawRecord {
        RawRecord { age, dt }
    }

    fn reclean(dataset: &Dataset) -> Dataset {
        let raw: Vec<RawRecord> = dataset
            .records
            .iter()
            .map(|r| RawRecord {
                age: Some(r.age),
                dt: Some(r.dt),
            })
            .collect();
        clean_and_sort(&raw)
    }

    #[test]
    fn drops_incomplete_and_sorts_by_age() {
        let input = vec![
            raw(Some(10.0), Some(0.5)),
            raw(Some(5.0), Some(-2.0)),
            raw(Some(20.0), None),
            raw(None, Some(3.0)),
        ];
        let ds = clean_and_sort(&input);
        assert_eq!(
            ds.records,
            vec![Record { age: 5.0, dt: -2.0 }, Record { age: 10.0, dt: 0.5 }]
        );
    }

    #[test]
    fn output_is_complete_and_ordered() {
        let input: Vec<RawRecord> = (0..50)
            .map(|i| {
                let age = ((i * 37) % 50) as f64;
                let dt = if i % 7 == 0 { None } else { Some(i as f64 - 25.0) };
                raw(Some(age), dt)
            })
            .collect();
        let ds = clean_and_sort(&input);
        assert_eq!(ds.len(), input.iter().filter(|r| r.dt.is_some()).count());
        assert!(ds.records.windows(2).all(|w| w[0].age <= w[1].age));
        assert!(ds.records.iter().all(|r| !r.age.is_nan() && !r.dt.is_nan()));
    }

    #[test]
    fn equal_ages_keep_input_order() {
        let input = vec![
            raw(Some(3.0), Some(1.0)),
            raw(Some(1.0), Some(9.0)),
            raw(Some(3.0), Some(2.0)),
        ];
        let ds = clean_and_sort(&input);
        let dts: Vec<f64> = ds.values().collect();
        assert_eq!(dts, vec![9.0, 1.0, 2.0]);
    }

    #[test]
    fn cleaning_twice_changes_nothing() {
        let input = vec![
            raw(Some(800.0), Some(-8.7)),
            raw(None, None),
            raw(Some(-50.0), Some(0.2)),
            raw(Some(12.0), Some(-1.1)),
        ];
        let once = clean_and_sort(&input);
        let twice = reclean(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn all_incomplete_gives_empty_dataset() {
        let input = vec![raw(None, Some(1.0)), raw(Some(2.0), None)];
        assert!(clean_and_sort(&input).is_empty());
    }
}
