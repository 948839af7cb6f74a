//! Fixed-schema export record.
//!
//! The column order of [`EXPORT_COLUMNS`] is a stable contract: downstream
//! importers rely on it, and every record carries every column even when
//! the value is blank.

/// Number of columns in the export schema.
pub const EXPORT_COLUMN_COUNT: usize = 121;

/// Export header in output order.
pub const EXPORT_COLUMNS: [&str; EXPORT_COLUMN_COUNT] = [
    "filename",
    "name",
    "description",
    "Asset Type",
    "Asset Sub-Type",
    "Deliverable",
    "Product SKU",
    "Product SKU Position",
    "Asset Status",
    "Usage Rights",
    "tags",
    "File Type",
    "STEP Path",
    "Link to Wrike Project",
    "Sync to Site",
    "Generic Dimension Diagram With Measurements",
    "Admin Status",
    "Product Status",
    "Product Category",
    "Product Sub-Category",
    "Product Collection",
    "Component SKUs",
    "Stock Level (only relevant for Inline products)",
    "Restock Date (only relevant for Inline products)",
    "Link to Print Materials",
    "Link to Lifestyle Images",
    "Link to Store Images",
    "Initiative",
    "Sub-Initiative",
    "Print Tracking Code",
    "Print Tracking - Start Date",
    "Print Tracking - End Date",
    "Year",
    "Video Expiration",
    "Audio Licensing Expiration",
    "Ad ID",
    "Lead Offer Message",
    "Lead Finance Message",
    "Video Focus",
    "Video Objective",
    "Video Type",
    "Total Run Time (TRT)",
    "Spot Running (MM/DD/YYYY)",
    "Language",
    "Season",
    "Holiday/Special Occasion",
    "Talent",
    "Sunset Date (MM/DD/YYYY)",
    "Location Name",
    "Store Code",
    "Location Status",
    "Location Address",
    "Location Town",
    "Location State",
    "Location Zip Code",
    "Location Phone Number",
    "Location Type",
    "Location",
    "Inactive Product",
    "Partner",
    "Notes",
    "Sign Facade Color",
    "Sign Location",
    "Sign Color",
    "Sign Text",
    "Reviewed products in lifestyle",
    "Reviewed Studio Uploads",
    "Featured SKU",
    "Image Type",
    "scratchpad",
    "3D Model Source Files Acquired",
    "Visible to",
    "BynderTest",
    "dim_Length",
    "Bynder Report",
    "Dimensions",
    "dim_Height",
    "Figmage doc id",
    "dim_Width",
    "Figmage image extension",
    "Figmage node id",
    "Figmage page id",
    "Performance Metric",
    "DNUCampaign",
    "DNUFeatures",
    "DNUMaterials",
    "DNUStyle",
    "DNUPattern",
    "DNUPackage SKUs",
    "DNUSign Size",
    "DNUDistribution Channel",
    "Dim diagram re-cropped",
    "Embedded Instructions (for updating existing metadata based on automations)",
    "Mattress Size",
    "Asset Identifier",
    "Sync Batch",
    "Marked for Deletion from Site",
    "scene7 folder",
    "Variant Type",
    "Source",
    "PSA Image Type",
    "Rights Notes",
    "Workflow",
    "Workflow Status",
    "Product Name (STEP)",
    "Vendor Code",
    "Family Code",
    "Hero SKU",
    "Product Color",
    "Dropped",
    "Visible on Website",
    "Sales Channel",
    "Associated Materials Status",
    "Product in Studio",
    "DNU_PromoUpdate2",
    "Additional Files Upload Scratchpad",
    "Bump",
    "Carousel Dimensions Diagram Audit",
    "User Status",
    "Reviewed for Site Content Refresh",
    "Image Type Pre-Classification",
];

/// Export columns populated by the mapper.
pub mod export_columns {
    pub const FILENAME: &str = "filename";
    pub const ASSET_TYPE: &str = "Asset Type";
    pub const ASSET_SUB_TYPE: &str = "Asset Sub-Type";
    pub const DELIVERABLE: &str = "Deliverable";
    pub const ASSET_STATUS: &str = "Asset Status";
    pub const USAGE_RIGHTS: &str = "Usage Rights";
    pub const FILE_TYPE: &str = "File Type";
    pub const WRIKE_LINK: &str = "Link to Wrike Project";
    pub const INITIATIVE: &str = "Initiative";
    pub const SUB_INITIATIVE: &str = "Sub-Initiative";
    pub const YEAR: &str = "Year";
    pub const VIDEO_EXPIRATION: &str = "Video Expiration";
    pub const AD_ID: &str = "Ad ID";
    pub const LEAD_OFFER_MESSAGE: &str = "Lead Offer Message";
    pub const LEAD_FINANCE_MESSAGE: &str = "Lead Finance Message";
    pub const VIDEO_FOCUS: &str = "Video Focus";
    pub const VIDEO_OBJECTIVE: &str = "Video Objective";
    pub const VIDEO_TYPE: &str = "Video Type";
    pub const TOTAL_RUN_TIME: &str = "Total Run Time (TRT)";
    pub const SPOT_RUNNING: &str = "Spot Running (MM/DD/YYYY)";
    pub const LANGUAGE: &str = "Language";
    pub const LOCATION_TYPE: &str = "Location Type";
    pub const USER_STATUS: &str = "User Status";
}

/// Position of a column in the export schema.
pub fn export_column_index(column: &str) -> Option<usize> {
    EXPORT_COLUMNS.iter().position(|name| *name == column)
}

/// One output row describing a reconciled asset.
///
/// Built through [`ExportRecordBuilder`]; immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRecord {
    values: Vec<String>,
}

impl ExportRecord {
    /// Starts a record with every column blank.
    pub fn builder() -> ExportRecordBuilder {
        ExportRecordBuilder {
            values: vec![String::new(); EXPORT_COLUMN_COUNT],
        }
    }

    /// Value of a column; `None` if the column is not part of the schema.
    pub fn get(&self, column: &str) -> Option<&str> {
        export_column_index(column).map(|idx| self.values[idx].as_str())
    }

    /// Values in schema order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// `(column, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        EXPORT_COLUMNS
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }

    /// The matched asset filename.
    pub fn filename(&self) -> &str {
        &self.values[0]
    }
}

/// Accumulates column values for an [`ExportRecord`].
#[derive(Debug, Clone)]
pub struct ExportRecordBuilder {
    values: Vec<String>,
}

impl ExportRecordBuilder {
    /// Sets a column value.
    ///
    /// Columns outside the schema are ignored; debug builds assert instead.
    #[must_use]
    pub fn set(mut self, column: &str, value: impl Into<String>) -> Self {
        match export_column_index(column) {
            Some(idx) => self.values[idx] = value.into(),
            None => debug_assert!(false, "unknown export column: {column}"),
        }
        self
    }

    pub fn build(self) -> ExportRecord {
        ExportRecord {
            values: self.values,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    #[test]
    fn test_schema_columns_are_unique() {
        let unique: BTreeSet<&str> = EXPORT_COLUMNS.iter().copied().collect();
        assert_eq!(unique.len(), EXPORT_COLUMN_COUNT);
    }

    #[test]
    fn test_schema_order_is_stable() {
        assert_eq!(EXPORT_COLUMNS[0], "filename");
        assert_eq!(EXPORT_COLUMNS[3], "Asset Type");
        assert_eq!(EXPORT_COLUMNS[EXPORT_COLUMN_COUNT - 1], "Image Type Pre-Classification");
    }

    #[test]
    fn test_populated_columns_exist_in_schema() {
        for column in [
            export_columns::FILENAME,
            export_columns::ASSET_TYPE,
            export_columns::ASSET_SUB_TYPE,
            export_columns::DELIVERABLE,
            export_columns::ASSET_STATUS,
            export_columns::USAGE_RIGHTS,
            export_columns::FILE_TYPE,
            export_columns::WRIKE_LINK,
            export_columns::INITIATIVE,
            export_columns::SUB_INITIATIVE,
            export_columns::YEAR,
            export_columns::VIDEO_EXPIRATION,
            export_columns::AD_ID,
            export_columns::LEAD_OFFER_MESSAGE,
            export_columns::LEAD_FINANCE_MESSAGE,
            export_columns::VIDEO_FOCUS,
            export_columns::VIDEO_OBJECTIVE,
            export_columns::VIDEO_TYPE,
            export_columns::TOTAL_RUN_TIME,
            export_columns::SPOT_RUNNING,
            export_columns::LANGUAGE,
            export_columns::LOCATION_TYPE,
            export_columns::USER_STATUS,
        ] {
            assert!(export_column_index(column).is_some(), "{column}");
        }
    }

    #[test]
    fn test_builder_defaults_to_blank() {
        let record = ExportRecord::builder()
            .set(export_columns::FILENAME, "clipA-99.mp4")
            .build();
        assert_eq!(record.filename(), "clipA-99.mp4");
        assert_eq!(record.values().len(), EXPORT_COLUMN_COUNT);
        assert_eq!(record.get("Talent"), Some(""));
        assert_eq!(record.get("Not A Column"), None);
        assert_eq!(record.iter().count(), EXPORT_COLUMN_COUNT);
    }
}
