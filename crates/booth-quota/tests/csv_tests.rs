use booth_quota::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[tokio::test]
async fn test_load_fixtures_csv() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "type,quantity").unwrap();
    writeln!(file, "Display Counter (Large),3").unwrap();
    writeln!(file, "Power Drop (15 Amp), 2").unwrap();
    writeln!(file, "Shelving Unit (4ft),many").unwrap();
    writeln!(file, "orphan").unwrap();

    let fixtures = load_fixtures_csv(file.path()).await.unwrap();
    assert_eq!(fixtures.len(), 3);
    assert_eq!(fixtures.rows()[1], FixtureAllocation::new("Power Drop (15 Amp)", 2));
    assert_eq!(fixtures.rows()[2].quantity, 0);
    assert_eq!(fixtures.total(), 5);
}

#[tokio::test]
async fn test_load_fixtures_csv_missing_file() {
    let result = load_fixtures_csv("/definitely/not/here.csv").await;
    assert!(matches!(result, Err(QuotaError::Io(_))));
}
