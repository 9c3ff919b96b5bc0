use dbscan1d::cluster::{ClusterItem, Dbscan1d, Label};
use proptest::prelude::*;

fn items(values: &[f64]) -> Vec<ClusterItem<usize>> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| ClusterItem::new(v, i))
        .collect()
}

fn neighborhood_size(values: &[f64], i: usize, epsilon: f64) -> usize {
    values
        .iter()
        .filter(|&&v| (values[i] - v).abs() <= epsilon)
        .count()
}

proptest! {
    #[test]
    fn prop_every_item_labeled(
        values in prop::collection::vec(-100.0f64..100.0, 0..60),
        epsilon in 0.0f64..5.0,
        min_cluster_size in 0usize..6
    ) {
        let mut data = items(&values);
        let mut engine = Dbscan1d::new(epsilon, min_cluster_size).engine(&mut data);
        prop_assert!(engine.run());

        for (i, item) in data.iter().enumerate() {
            prop_assert!(!item.is_unclassified());
            prop_assert_eq!(item.payload, i);
            prop_assert_eq!(item.value, values[i]);
        }
    }

    #[test]
    fn prop_deterministic(
        values in prop::collection::vec(-20.0f64..20.0, 0..60),
        epsilon in 0.0f64..3.0,
        min_cluster_size in 1usize..5
    ) {
        let dbscan = Dbscan1d::new(epsilon, min_cluster_size);
        let mut a = items(&values);
        let mut b = items(&values);
        let stats_a = dbscan.engine(&mut a).try_run().unwrap();
        let stats_b = dbscan.engine(&mut b).try_run().unwrap();

        prop_assert_eq!(stats_a, stats_b);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_sparse_items_are_noise(
        values in prop::collection::vec(-20.0f64..20.0, 1..60),
        epsilon in 0.0f64..3.0,
        min_cluster_size in 1usize..6
    ) {
        let mut data = items(&values);
        prop_assert!(Dbscan1d::new(epsilon, min_cluster_size).engine(&mut data).run());

        for (i, item) in data.iter().enumerate() {
            if neighborhood_size(&values, i, epsilon) < min_cluster_size {
                prop_assert_eq!(item.label, Label::Noise);
            }
        }
    }

    #[test]
    fn prop_equal_values_share_label(
        base in prop::collection::vec(-10.0f64..10.0, 1..30),
        dup in 0usize..30,
        epsilon in 0.0f64..2.0,
        min_cluster_size in 1usize..5
    ) {
        // Equal values have identical neighborhoods, so nothing can tell them apart.
        let mut values = base.clone();
        let copied = dup % base.len();
        values.push(base[copied]);

        let mut data = items(&values);
        prop_assert!(Dbscan1d::new(epsilon, min_cluster_size).engine(&mut data).run());
        prop_assert_eq!(data[copied].label, data[values.len() - 1].label);
    }

    #[test]
    fn prop_cluster_ids_below_seed_count(
        values in prop::collection::vec(-50.0f64..50.0, 0..60),
        epsilon in 0.0f64..4.0,
        min_cluster_size in 0usize..5
    ) {
        let mut data = items(&values);
        let stats = Dbscan1d::new(epsilon, min_cluster_size).engine(&mut data).try_run().unwrap();

        prop_assert!(stats.clusters <= stats.seeds);
        for item in &data {
            if let Some(id) = item.cluster_id() {
                prop_assert!(id < stats.seeds);
            }
        }
    }
}
