//! Export file tests.

use adprep_model::ExportRecord;
use adprep_output::{OutputError, write_export};
use tempfile::TempDir;

fn record(filename: &str, year: &str) -> ExportRecord {
    ExportRecord::builder()
        .set("filename", filename)
        .set("Asset Type", "Final Creative Materials")
        .set("Year", year)
        .build()
}

#[test]
fn test_header_matches_export_schema() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("export.csv");

    write_export(&path, &[]).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let header = content.lines().next().unwrap();
    insta::assert_snapshot!(header, @"filename;name;description;Asset Type;Asset Sub-Type;Deliverable;Product SKU;Product SKU Position;Asset Status;Usage Rights;tags;File Type;STEP Path;Link to Wrike Project;Sync to Site;Generic Dimension Diagram With Measurements;Admin Status;Product Status;Product Category;Product Sub-Category;Product Collection;Component SKUs;Stock Level (only relevant for Inline products);Restock Date (only relevant for Inline products);Link to Print Materials;Link to Lifestyle Images;Link to Store Images;Initiative;Sub-Initiative;Print Tracking Code;Print Tracking - Start Date;Print Tracking - End Date;Year;Video Expiration;Audio Licensing Expiration;Ad ID;Lead Offer Message;Lead Finance Message;Video Focus;Video Objective;Video Type;Total Run Time (TRT);Spot Running (MM/DD/YYYY);Language;Season;Holiday/Special Occasion;Talent;Sunset Date (MM/DD/YYYY);Location Name;Store Code;Location Status;Location Address;Location Town;Location State;Location Zip Code;Location Phone Number;Location Type;Location;Inactive Product;Partner;Notes;Sign Facade Color;Sign Location;Sign Color;Sign Text;Reviewed products in lifestyle;Reviewed Studio Uploads;Featured SKU;Image Type;scratchpad;3D Model Source Files Acquired;Visible to;BynderTest;dim_Length;Bynder Report;Dimensions;dim_Height;Figmage doc id;dim_Width;Figmage image extension;Figmage node id;Figmage page id;Performance Metric;DNUCampaign;DNUFeatures;DNUMaterials;DNUStyle;DNUPattern;DNUPackage SKUs;DNUSign Size;DNUDistribution Channel;Dim diagram re-cropped;Embedded Instructions (for updating existing metadata based on automations);Mattress Size;Asset Identifier;Sync Batch;Marked for Deletion from Site;scene7 folder;Variant Type;Source;PSA Image Type;Rights Notes;Workflow;Workflow Status;Product Name (STEP);Vendor Code;Family Code;Hero SKU;Product Color;Dropped;Visible on Website;Sales Channel;Associated Materials Status;Product in Studio;DNU_PromoUpdate2;Additional Files Upload Scratchpad;Bump;Carousel Dimensions Diagram Audit;User Status;Reviewed for Site Content Refresh;Image Type Pre-Classification");
}

#[test]
fn test_one_line_per_record_in_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("export.csv");

    write_export(&path, &[record("b-2.mp4", "2024"), record("a-1.mov", "")]).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);

    let first: Vec<&str> = lines[1].split(';').collect();
    assert_eq!(first.len(), 121);
    assert_eq!(first[0], "b-2.mp4");
    assert_eq!(first[3], "Final Creative Materials");
    assert_eq!(first[32], "2024");
    assert!(lines[2].starts_with("a-1.mov;"));
}

#[test]
fn test_existing_file_is_replaced() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("export.csv");
    std::fs::write(&path, "stale\nstale\nstale\nstale\n").unwrap();

    write_export(&path, &[record("a-1.mp4", "")]).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content.lines().count(), 2);
    assert!(!content.contains("stale"));
}

#[test]
fn test_unwritable_destination_is_an_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, "x").unwrap();

    let err = write_export(&blocker.join("export.csv"), &[]).unwrap_err();
    assert!(matches!(err, OutputError::CreateDir { .. }));
}
