use crate::models::Snapshot;
use crate::services::PreferenceTable;

/// Reorder models by descending preference weight
///
/// Does nothing while the table is empty. Otherwise every model name is
/// seeded into the table at weight 0 before sorting, so ranking leaves the
/// table covering the whole snapshot. The sort is stable: equal weights
/// keep their incoming order.
pub fn rank(snapshot: &mut Snapshot, table: &mut PreferenceTable) {
    if table.is_empty() {
        return;
    }

    for model in &snapshot.car_models {
        table.ensure(&model.name);
    }

    snapshot
        .car_models
        .sort_by(|a, b| table.weight(&b.name).total_cmp(&table.weight(&a.name)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CarModel;

    fn snapshot(names: &[&str]) -> Snapshot {
        Snapshot {
            car_models: names
                .iter()
                .enumerate()
                .map(|(i, name)| CarModel {
                    id: i as i64,
                    name: name.to_string(),
                    ..CarModel::default()
                })
                .collect(),
            ..Snapshot::default()
        }
    }

    fn names(snapshot: &Snapshot) -> Vec<&str> {
        snapshot.car_models.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn test_empty_table_is_noop() {
        let mut snap = snapshot(&["C", "A", "B"]);
        let mut table = PreferenceTable::new();

        rank(&mut snap, &mut table);

        assert_eq!(names(&snap), vec!["C", "A", "B"]);
        assert!(table.is_empty());
    }

    #[test]
    fn test_sorts_descending_by_weight() {
        let mut snap = snapshot(&["A", "B", "C"]);
        let mut table = PreferenceTable::new();
        table.increment("C", 2.0);
        table.increment("B", 0.5);

        rank(&mut snap, &mut table);

        assert_eq!(names(&snap), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_ties_keep_original_order() {
        let mut snap = snapshot(&["D", "A", "C", "B", "E"]);
        let mut table = PreferenceTable::new();
        table.increment("E", 1.0);
        table.increment("C", 0.5);
        table.increment("B", 0.5);

        rank(&mut snap, &mut table);

        assert_eq!(names(&snap), vec!["E", "C", "B", "D", "A"]);
    }

    #[test]
    fn test_non_finite_record_weights_rank_as_zero() {
        let mut table = PreferenceTable::parse("X,NaN\nA,1\nY,inf\nB,2\nZ,-inf");
        let mut snap = snapshot(&["X", "A", "Y", "B", "Z", "C"]);

        rank(&mut snap, &mut table);

        assert_eq!(names(&snap), vec!["B", "A", "X", "Y", "Z", "C"]);
        assert_eq!(table.get("X"), Some(0.0));
        assert_eq!(table.get("Y"), Some(0.0));
    }

    #[test]
    fn test_seeds_unseen_names_at_zero() {
        let mut snap = snapshot(&["A", "B"]);
        let mut table = PreferenceTable::new();
        table.increment("Other", 1.0);

        rank(&mut snap, &mut table);

        assert_eq!(table.get("A"), Some(0.0));
        assert_eq!(table.get("B"), Some(0.0));
        assert_eq!(table.len(), 3);
    }
}
