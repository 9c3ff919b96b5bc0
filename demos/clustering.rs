//! DBSCAN over a handful of sensor readings, with payloads carried through.

use dbscan1d::{group_by_cluster, noise_indices, ClusterItem, Dbscan1d, Label};

fn main() {
    let readings = [
        ("probe-a", 1.00),
        ("probe-b", 1.10),
        ("probe-c", 1.20),
        ("probe-d", 5.00),
        ("probe-e", 5.10),
        ("probe-f", 10.0),
    ];

    let mut items: Vec<ClusterItem<&str>> = readings
        .iter()
        .map(|&(name, value)| ClusterItem::new(value, name))
        .collect();

    let mut engine = Dbscan1d::new(0.3, 2).engine(&mut items);
    let stats = match engine.try_run() {
        Ok(stats) => stats,
        Err(err) => {
            eprintln!("clustering failed: {err}");
            return;
        }
    };

    println!("=== DBSCAN (eps=0.3, min_cluster_size=2) ===");
    for item in &items {
        let tag = match item.label {
            Label::Cluster(id) => format!("cluster {}", id),
            Label::Noise => "NOISE".to_string(),
            Label::Unclassified => "unclassified".to_string(),
        };
        println!("  {:8} {:5.2} => {}", item.payload, item.value, tag);
    }

    println!(
        "\n{} seeds, {} clusters, {} noise",
        stats.seeds, stats.clusters, stats.noise
    );
    for (id, members) in group_by_cluster(&items) {
        let names: Vec<&str> = members.iter().map(|&i| items[i].payload).collect();
        println!("  cluster {}: {}", id, names.join(", "));
    }
    let noise: Vec<&str> = noise_indices(&items).iter().map(|&i| items[i].payload).collect();
    println!("  noise: {}", noise.join(", "));
}
