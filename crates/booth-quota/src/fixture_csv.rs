use crate::fixtures::{FixtureAllocation, FixtureList};
use crate::types::Result;
use std::path::Path;

/// Load fixture rows from a CSV file with a `type,quantity` header.
///
/// Rows with fewer than two columns are skipped. A quantity that does not
/// parse counts as 0, the same as clearing the field in the booking form.
pub async fn load_fixtures_csv(path: impl AsRef<Path>) -> Result<FixtureList> {
    let path = path.as_ref().to_owned();

    let contents = tokio::fs::read_to_string(&path).await?;

    let fixtures = tokio::task::spawn_blocking(move || {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(contents.as_bytes());
        let mut rows = Vec::new();

        for result in reader.records() {
            let record = result?;
            if record.len() >= 2 {
                rows.push(FixtureAllocation {
                    fixture_type: record[0].trim().to_string(),
                    quantity: record[1].trim().parse().unwrap_or(0),
                });
            }
        }
        Ok::<_, crate::types::QuotaError>(FixtureList::from(rows))
    })
    .await??;

    log::debug!(
        "Loaded {} fixture rows from {}",
        fixtures.len(),
        path.display()
    );
    Ok(fixtures)
}
