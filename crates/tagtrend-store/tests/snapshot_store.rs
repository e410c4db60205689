//! Filesystem tests for the snapshot repository and cumulative table.
//!
//! Each test builds its own tags directory under a `tempfile::TempDir`.

use std::fs;
use std::path::Path;

use tagtrend_core::{Category, SnapshotId, SnapshotRow};
use tagtrend_store::{
    build_cumulative, list_snapshots, load_table, write_cumulative, write_snapshot, SnapshotStore,
    TagFilter,
};

fn row(name: &str, category: i64, post_count: u64, aliases: &[&str]) -> SnapshotRow {
    SnapshotRow {
        name: name.to_owned(),
        category,
        post_count,
        aliases: aliases.iter().map(|a| (*a).to_owned()).collect(),
    }
}

fn write_raw(dir: &Path, name: &str, body: &str) {
    fs::write(dir.join(name), body).unwrap();
}

#[test]
fn list_snapshots_returns_empty_for_missing_directory() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(list_snapshots(&tmp.path().join("tags")).is_empty());
}

#[test]
fn list_snapshots_returns_empty_for_empty_directory() {
    let tmp = tempfile::tempdir().unwrap();
    assert!(list_snapshots(tmp.path()).is_empty());
}

#[test]
fn list_snapshots_sorts_and_ignores_other_files() {
    let tmp = tempfile::tempdir().unwrap();
    write_raw(tmp.path(), "danbooru-2024-01-08.csv", "");
    write_raw(tmp.path(), "danbooru-2024-01-01.csv", "");
    write_raw(tmp.path(), "notes.txt", "");
    fs::create_dir(tmp.path().join("archive.csv")).unwrap();

    let ids = list_snapshots(tmp.path());
    let names: Vec<&str> = ids.iter().map(SnapshotId::as_str).collect();
    assert_eq!(names, ["danbooru-2024-01-01.csv", "danbooru-2024-01-08.csv"]);
}

#[test]
fn load_table_missing_file_is_empty() {
    let tmp = tempfile::tempdir().unwrap();
    let table = load_table(
        tmp.path(),
        &SnapshotId::new("danbooru-2024-01-01.csv"),
        TagFilter::Unfiltered,
    );
    assert!(table.is_empty());
}

#[test]
fn written_snapshot_loads_back_with_aliases_quoted() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("tags");
    let id = SnapshotId::new("danbooru-2024-01-01.csv");
    let rows = vec![
        row("hakurei_reimu", 4, 90_000, &["reimu", "hakurei"]),
        row("touhou", 3, 800_000, &[]),
    ];

    let path = write_snapshot(&dir, &id, &rows).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text,
        "hakurei_reimu,4,90000,\"reimu,hakurei\"\ntouhou,3,800000,\n"
    );

    let table = load_table(&dir, &id, TagFilter::Unfiltered);
    assert_eq!(table.len(), 2);
    assert_eq!(table.get("touhou"), Some(&800_000));
}

#[test]
fn store_scopes_tables_by_category_and_allow_list() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("tags");
    fs::create_dir(&dir).unwrap();
    write_raw(
        &dir,
        "danbooru-2024-01-01.csv",
        "1girl,0,5000000,\nhakurei_reimu,4,90000,\nhatsune_miku,4,100000,\nzun,1,3000,\n",
    );
    let allow_path = tmp.path().join("touhous.txt");
    fs::write(&allow_path, "hakurei_reimu\n\nzun\n").unwrap();

    let store = SnapshotStore::open(&dir, &allow_path);
    let id = SnapshotId::new("danbooru-2024-01-01.csv");

    assert_eq!(store.table(&id, Category::All).len(), 4);
    assert_eq!(store.table(&id, Category::Character).len(), 2);
    assert_eq!(store.table(&id, Category::Artist).len(), 1);
    assert!(store.table(&id, Category::Series).is_empty());

    let touhou = store.table(&id, Category::AllowListed);
    assert_eq!(touhou.len(), 2);
    assert!(touhou.contains_key("zun"));
}

#[test]
fn store_without_allow_list_has_empty_allow_listed_bucket() {
    let tmp = tempfile::tempdir().unwrap();
    write_raw(tmp.path(), "danbooru-2024-01-01.csv", "hakurei_reimu,4,90000,\n");

    let store = SnapshotStore::open(tmp.path(), &tmp.path().join("missing.txt"));
    let id = SnapshotId::new("danbooru-2024-01-01.csv");
    assert!(store.table(&id, Category::AllowListed).is_empty());
    assert_eq!(store.table(&id, Category::All).len(), 1);
}

#[test]
fn cumulative_table_has_one_column_per_snapshot() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("tags");
    fs::create_dir(&dir).unwrap();
    write_raw(&dir, "danbooru-2024-01-01.csv", "a,0,10\nb,0,20\n");
    write_raw(&dir, "danbooru-2024-01-02.csv", "a,0,11\nc,1,5\n");

    let table = build_cumulative(&dir);
    assert_eq!(
        table.columns,
        ["danbooru-2024-01-01", "danbooru-2024-01-02"]
    );
    assert_eq!(table.rows["a"], vec![Some(10), Some(11)]);
    assert_eq!(table.rows["b"], vec![Some(20), None]);
    assert_eq!(table.rows["c"], vec![None, Some(5)]);

    let out = tmp.path().join("out").join("wide.csv");
    let written = write_cumulative(&dir, &out).unwrap();
    assert_eq!(written, 3);
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "tag,danbooru-2024-01-01,danbooru-2024-01-02\na,10,11\nb,20,\nc,,5\n"
    );
}
