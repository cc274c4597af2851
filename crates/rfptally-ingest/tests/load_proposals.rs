use rfptally_ingest::{find_proposal_files, load_proposal};
use rfptally_types::{Count, ItemSpec, Slot};
use std::fs;
use std::path::PathBuf;

fn sample(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/samples")
        .join(name)
}

#[test]
fn loads_a_full_proposal() {
    let proposal = load_proposal(&sample("aurora.yaml")).unwrap();

    assert_eq!(proposal.rfp_no, "RFP-2031");
    assert_eq!(proposal.lead_org, "Aurora Compute");
    assert_eq!(proposal.total_price, Some(3.4));
    assert_eq!(proposal.storage_stack, "ceph");

    match &proposal.tier1 {
        Slot::List(items) => {
            assert_eq!(items.len(), 2);
            assert_eq!(
                items[0],
                Slot::Item(ItemSpec {
                    label: Some("b200_8way".to_string()),
                    count: Some(Count::Int(12)),
                    gpu_count: Some(8),
                })
            );
        }
        other => panic!("expected a list tier, got {:?}", other),
    }

    assert_eq!(proposal.tier2, Slot::Text("h200_4way (×14,10)".to_string()));
    assert_eq!(proposal.hot_storage, Slot::Text("14PiB".to_string()));
}

#[test]
fn loads_a_sparse_proposal() {
    let proposal = load_proposal(&sample("borealis.yaml")).unwrap();

    // a numeric rfp_no is carried as its string form
    assert_eq!(proposal.rfp_no, "2207");
    assert!(matches!(proposal.tier1, Slot::Item(_)));
    assert_eq!(proposal.tier2, Slot::Empty);
    assert_eq!(proposal.cold_storage, Slot::Empty);

    match &proposal.hot_storage {
        Slot::Item(item) => {
            assert_eq!(item.count, Some(Count::Text("21PiB".to_string())));
        }
        other => panic!("expected an item, got {:?}", other),
    }
}

#[test]
fn tolerates_messy_shapes() {
    let proposal = load_proposal(&sample("cascade.yaml")).unwrap();

    // a numeric scalar tier is not a recognized shape
    assert_eq!(proposal.tier1, Slot::Empty);
    assert_eq!(
        proposal.tier2,
        Slot::List(vec![
            Slot::Text("rtx6000_8way (×20,15)".to_string()),
            Slot::Text("notes only, no counts".to_string()),
        ])
    );
    assert_eq!(proposal.compute_nodes, Slot::Text("still negotiating".to_string()));
    assert_eq!(proposal.total_price, None);
}

#[test]
fn missing_rfp_section_maps_to_an_empty_proposal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stub.yaml");
    fs::write(&path, "notes: not a proposal\n").unwrap();

    let proposal = load_proposal(&path).unwrap();
    assert_eq!(proposal.rfp_no, "");
    assert!(proposal.tier1.is_empty());
    assert_eq!(proposal.total_price, None);
}

#[test]
fn invalid_yaml_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yaml");
    fs::write(&path, "rfp: [unclosed\n").unwrap();

    assert!(load_proposal(&path).is_err());
}

#[test]
fn discovery_finds_proposal_files_sorted() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("b.yaml"), "rfp: {}\n").unwrap();
    fs::write(dir.path().join("nested/a.yml"), "rfp: {}\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "not yaml\n").unwrap();

    let files = find_proposal_files(dir.path()).unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(files.len(), 2);
    assert!(names.contains(&"a.yml".to_string()));
    assert!(names.contains(&"b.yaml".to_string()));
}
