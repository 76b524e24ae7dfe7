// Integration tests for cinematch: the full catalog -> indexer ->
// artifacts -> session pipeline.
use cinematch::prelude::*;
use std::io::Write;

const CATALOG: &str = "title,genres,keywords,overview\n\
    A,action,car chase,a thief steals a car\n\
    B,action,car chase,a thief steals a diamond\n\
    C,romance,wedding,two people fall in love\n\
    D,action,heist,a crew plans a heist\n";

fn write_catalog(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_index_persist_load_recommend() {
    let catalog = write_catalog(CATALOG);
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path());

    let (table, matrix) = Indexer::new().run(catalog.path(), &store).unwrap();
    assert_eq!(table.len(), 4);
    assert_eq!(matrix.dim(), 4);

    let session = Session::load(&store).unwrap();
    let recs = session.recommend("a", 2).unwrap();

    // B shares the action/car-chase/thief vocabulary with A; C shares
    // nothing and ranks behind both B and D.
    assert_eq!(recs[0].title, "B");
    let all = session.recommend("A", 10).unwrap();
    assert_eq!(all.last().unwrap().title, "C");
    assert!(all.iter().all(|r| r.title != "A"));
}

#[test]
fn test_round_trip_preserves_order_and_scores() {
    let catalog = write_catalog(CATALOG);
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path());

    let (table, matrix) = Indexer::new().run(catalog.path(), &store).unwrap();
    let (loaded_table, loaded_matrix) = store.load().unwrap();

    let titles: Vec<&str> = table.iter().map(|r| r.title.as_str()).collect();
    let loaded_titles: Vec<&str> = loaded_table.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, loaded_titles);

    for i in 0..matrix.dim() {
        for j in 0..matrix.dim() {
            assert!((matrix.get(i, j) - loaded_matrix.get(i, j)).abs() < 1e-9);
        }
    }
}

#[test]
fn test_reindex_replaces_pair_atomically() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path());

    let catalog_a = write_catalog(CATALOG);
    Indexer::new().run(catalog_a.path(), &store).unwrap();

    let catalog_b = write_catalog(
        "title,genres,keywords,overview\n\
         X,scifi,space,a crew explores a planet\n\
         Y,scifi,space,a crew repairs a station\n",
    );
    Indexer::new().run(catalog_b.path(), &store).unwrap();

    // A fresh session sees only the new pair.
    let session = Session::load(&store).unwrap();
    assert_eq!(session.len(), 2);
    assert!(session.recommend("A", 5).is_none());
    assert!(session.recommend("X", 5).is_some());
}

#[test]
fn test_load_without_artifacts_fails() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path());
    match Session::load(&store) {
        Err(Error::ArtifactMissing(_)) => {}
        other => panic!("expected ArtifactMissing, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_failed_index_leaves_prior_artifacts() {
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path());

    let catalog = write_catalog(CATALOG);
    Indexer::new().run(catalog.path(), &store).unwrap();

    // Second run against a broken source fails before persistence.
    let broken = write_catalog("title,genres,overview\nA,action,a heist\n");
    assert!(Indexer::new().run(broken.path(), &store).is_err());

    // The original pair still loads.
    let session = Session::load(&store).unwrap();
    assert_eq!(session.len(), 4);
}

#[test]
fn test_selectable_titles_sorted_unique() {
    let catalog = write_catalog(
        "title,genres,keywords,overview\n\
         B,action,car,a car chase\n\
         A,action,car,a car chase\n\
         B,drama,loss,a quiet story\n",
    );
    let dir = tempfile::tempdir().unwrap();
    let store = ArtifactStore::new(dir.path());
    Indexer::new().run(catalog.path(), &store).unwrap();

    let session = Session::load(&store).unwrap();
    assert_eq!(session.selectable_titles(), vec!["A", "B"]);
}
