//! Row to export record mapping.

use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use adprep_model::{
    ExportRecord, MatchKey, OverrideSet, Progress, Row, SkippedRow, export_columns as out,
    source_columns as src, split_file_name,
};

use crate::index::AssetIndex;
use crate::transforms::{
    file_type, language, normalize_year, resolve, total_run_time, video_expiration, video_focus,
    video_type,
};

pub const ASSET_TYPE: &str = "Final Creative Materials";
pub const ASSET_SUB_TYPE: &str = "Ad Video";
pub const ASSET_STATUS: &str = "Final";
pub const USAGE_RIGHTS: &str = "Approved for External Usage";
pub const USER_STATUS: &str = "Please review metadata";
pub const INITIATIVE: &str = "Promos";

/// Builds the export record for one row whose asset file is `filename`.
///
/// Override values win over the row's own column for the Wrike link, year,
/// sub-initiative and location type. Columns without a rule stay blank.
pub fn map_row(row: &Row, overrides: &OverrideSet, filename: &str) -> ExportRecord {
    let (_, extension) = split_file_name(filename);
    let ad_name = row.value(src::AD_NAME);
    let spot_running = row.value(src::SPOT_RUNNING);

    ExportRecord::builder()
        .set(out::FILENAME, filename)
        .set(out::FILE_TYPE, file_type(extension))
        .set(out::ASSET_TYPE, ASSET_TYPE)
        .set(out::ASSET_SUB_TYPE, ASSET_SUB_TYPE)
        .set(out::ASSET_STATUS, ASSET_STATUS)
        .set(out::USAGE_RIGHTS, USAGE_RIGHTS)
        .set(out::USER_STATUS, USER_STATUS)
        .set(out::INITIATIVE, INITIATIVE)
        .set(out::VIDEO_TYPE, video_type(ad_name))
        .set(
            out::WRIKE_LINK,
            resolve(overrides.wrike_link(), row.value(src::WRIKE_LINK)),
        )
        .set(
            out::YEAR,
            normalize_year(resolve(overrides.year(), row.value(src::YEAR))),
        )
        .set(
            out::SUB_INITIATIVE,
            resolve(overrides.sub_initiative(), row.value(src::SUB_INITIATIVE)),
        )
        .set(
            out::LOCATION_TYPE,
            resolve(overrides.location_type(), row.value(src::LOCATION_TYPE)),
        )
        .set(out::DELIVERABLE, row.value(src::PLACEMENT))
        .set(out::SPOT_RUNNING, spot_running)
        .set(out::VIDEO_EXPIRATION, video_expiration(spot_running))
        .set(out::AD_ID, row.ad_id())
        .set(out::LEAD_OFFER_MESSAGE, row.value(src::LEAD_OFFER_MESSAGE))
        .set(
            out::LEAD_FINANCE_MESSAGE,
            row.value(src::LEAD_FINANCE_MESSAGE),
        )
        .set(out::VIDEO_FOCUS, video_focus(ad_name))
        .set(out::VIDEO_OBJECTIVE, row.value(src::OBJECTIVE))
        .set(out::TOTAL_RUN_TIME, total_run_time(row.value(src::TRT)))
        .set(out::LANGUAGE, language(ad_name))
        .build()
}

/// A row whose renamed asset file was not found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingAsset {
    pub line: usize,
    /// Stem that was looked up.
    pub key: MatchKey,
}

/// Records produced by [`map_rows`] and the rows left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingOutcome {
    pub records: Vec<ExportRecord>,
    pub missing: Vec<MissingAsset>,
    pub skipped: Vec<SkippedRow>,
}

impl MappingOutcome {
    /// Total rows accounted for.
    pub fn row_count(&self) -> usize {
        self.records.len() + self.missing.len() + self.skipped.len()
    }
}

/// Maps every row that has a renamed asset in `assets`.
///
/// Rows are processed in order and `on_progress` is called once per row.
/// A row is skipped when its Description or AD ID is blank, and reported
/// missing when no file's stem equals its match key.
pub fn map_rows(
    rows: &[Row],
    overrides: &OverrideSet,
    assets: &AssetIndex,
    mut on_progress: impl FnMut(Progress),
) -> MappingOutcome {
    let total = rows.len();
    let span = info_span!("map_rows", rows = total, assets = assets.len());
    let _guard = span.enter();

    let mut outcome = MappingOutcome::default();
    for (idx, row) in rows.iter().enumerate() {
        on_progress(Progress::new(idx + 1, total));
        let line = row.line();

        let Some(key) = row.match_key() else {
            warn!(line, "missing Description or AD ID, skipping row");
            outcome.skipped.push(SkippedRow { line });
            continue;
        };
        let Some(entry) = assets.locate(&key) else {
            warn!(line, key = %key, "no asset file found");
            outcome.missing.push(MissingAsset { line, key });
            continue;
        };

        let filename = entry.file_name();
        debug!(line, file = %filename, "mapped row");
        outcome.records.push(map_row(row, overrides, &filename));
    }

    info!(
        records = outcome.records.len(),
        missing = outcome.missing.len(),
        skipped = outcome.skipped.len(),
        "mapping complete"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use adprep_model::EXPORT_COLUMN_COUNT;

    fn row(cells: &[(&str, &str)]) -> Row {
        Row::new(
            2,
            cells
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_constants_and_blank_columns() {
        let record = map_row(&row(&[]), &OverrideSet::default(), "clip-1.mp4");

        assert_eq!(record.values().len(), EXPORT_COLUMN_COUNT);
        assert_eq!(record.filename(), "clip-1.mp4");
        assert_eq!(record.get("Asset Type"), Some(ASSET_TYPE));
        assert_eq!(record.get("Initiative"), Some("Promos"));
        assert_eq!(record.get("Video Type"), Some("Live Action"));
        assert_eq!(record.get("Language"), Some("English"));
        assert_eq!(record.get("File Type"), Some("MP4"));
        assert_eq!(record.get("Product SKU"), Some(""));
        assert_eq!(record.get("Year"), Some(""));
    }

    #[test]
    fn test_override_takes_precedence() {
        let r = row(&[("Year", "2023.0"), ("Sub-Initiative", "Spring")]);
        let overrides = OverrideSet::default().with_year("2025.0");

        let record = map_row(&r, &overrides, "a-1.mov");

        assert_eq!(record.get("Year"), Some("2025"));
        assert_eq!(record.get("Sub-Initiative"), Some("Spring"));
    }

    #[test]
    fn test_unknown_extension_leaves_file_type_blank() {
        let record = map_row(&row(&[]), &OverrideSet::default(), "a-1.prproj");
        assert_eq!(record.get("File Type"), Some(""));
        let record = map_row(&row(&[]), &OverrideSet::default(), "a-1");
        assert_eq!(record.get("File Type"), Some(""));
    }
}
