use dendra::{Dataset, HierarchicalMiner, Linkage, Vector};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Minimal end-to-end: rows -> dataset -> mined dendrogram -> record.
    //
    // Two obvious groups in 2D plus one outlier, mined to full depth so the
    // final level collapses everything into a single cluster.
    let rows: Vec<Vector> = [
        // Group A (near (0,0))
        [0.0, 0.0],
        [0.1, 0.0],
        [0.0, 0.1],
        // Group B (near (10,10))
        [10.0, 10.0],
        [10.1, 10.0],
        // Outlier
        [5.0, -5.0],
    ]
    .iter()
    .map(|r| Vector::from_components(r.to_vec()))
    .collect();

    let data = Dataset::from_rows(rows)?;
    println!("dataset ({} examples, dim {}):", data.len(), data.dim());
    print!("{data}");

    let miner = HierarchicalMiner::build(&data, data.len(), Linkage::Average)?;
    println!("\ndendrogram (index form):");
    print!("{}", miner.render());

    println!("dendrogram (data form):");
    print!("{}", miner.render_with(&data)?);

    // Round-trip through the record store; the restored miner renders
    // exactly the same text.
    let path = miner.persist("agglomerate_demo")?;
    let restored = HierarchicalMiner::restore("agglomerate_demo")?;
    assert_eq!(restored.render(), miner.render());
    println!("persisted to {path:?} and restored identically");

    Ok(())
}
