mod common;

use common::fixtures::*;
use common::{export, GeneratedPdf, TestResult};
use geoexport::{ExportPipelineBuilder, ExportRequest, NoopObserver, PageGeometry};
use serde_json::json;

#[test]
fn test_page_size_a4() -> TestResult {
    let _ = env_logger::builder().is_test(true).try_init();

    let city = mixed_city();
    let pipeline = ExportPipelineBuilder::new().build()?;
    let (_, pdf) = export(
        &pipeline,
        &ExportRequest::new(&city.features).with_viewport(madrid_bounds()),
    )?;

    // A4 dimensions: 595.28 x 841.89 points
    let (w, h) = pdf.page_size()?;
    assert!((w - 595.28).abs() < 0.01);
    assert!((h - 841.89).abs() < 0.01);
    Ok(())
}

#[test]
fn test_custom_page_size() -> TestResult {
    let city = mixed_city();
    let pipeline = ExportPipelineBuilder::new()
        .with_page(PageGeometry::new(842.0, 595.0, 20.0))
        .build()?;
    let (_, pdf) = export(
        &pipeline,
        &ExportRequest::new(&city.features).with_viewport(madrid_bounds()),
    )?;
    let (w, h) = pdf.page_size()?;
    assert!((w - 842.0).abs() < 0.01);
    assert!((h - 595.0).abs() < 0.01);
    Ok(())
}

#[test]
fn test_points_stay_inside_the_margins() -> TestResult {
    let city = mixed_city();
    let pipeline = ExportPipelineBuilder::new().build()?;
    let (_, pdf) = export(
        &pipeline,
        &ExportRequest::new(&city.features).with_viewport(madrid_bounds()),
    )?;

    let page = PageGeometry::a4();
    for op in pdf.operations()? {
        if op.operator == "m" || op.operator == "l" {
            let x = op.operands[0].as_float()? as f64;
            let y = op.operands[1].as_float()? as f64;
            assert!(x >= page.margin - 0.01 && x <= page.width - page.margin + 0.01);
            assert!(y >= page.margin - 0.01 && y <= page.height - page.margin + 0.01);
        }
    }
    Ok(())
}

#[test]
fn test_style_operands_are_unit_rgb() -> TestResult {
    let city = collection(vec![line_feature(
        json!([[-3.70, 40.41], [-3.69, 40.42]]),
        json!({ "highway": "residential" }),
    )]);
    let pipeline = ExportPipelineBuilder::new().build()?;
    let (_, pdf) = export(
        &pipeline,
        &ExportRequest::new(&city.features).with_viewport(madrid_bounds()),
    )?;

    let ops = pdf.operations()?;
    assert_eq!(ops[0].operator, "w");
    assert!((ops[0].operands[0].as_float()? - 0.8).abs() < 5e-3);
    assert_eq!(ops[1].operator, "RG");
    // #1e293b
    let rgb: Vec<f32> = ops[1]
        .operands
        .iter()
        .map(|o| o.as_float())
        .collect::<Result<_, _>>()?;
    assert!((rgb[0] - 30.0 / 255.0).abs() < 5e-3);
    assert!((rgb[1] - 41.0 / 255.0).abs() < 5e-3);
    assert!((rgb[2] - 59.0 / 255.0).abs() < 5e-3);
    // Streets never set a fill.
    assert!(ops.iter().all(|o| o.operator != "rg"));
    Ok(())
}

#[test]
fn test_document_title_is_written() -> TestResult {
    let city = mixed_city();
    let pipeline = ExportPipelineBuilder::new().with_title("Madrid centro").build()?;
    let (_, pdf) = export(
        &pipeline,
        &ExportRequest::new(&city.features).with_viewport(madrid_bounds()),
    )?;

    let info_id = pdf.doc.trailer.get(b"Info")?.as_reference()?;
    let info = pdf.doc.get_object(info_id)?.as_dict()?;
    assert_eq!(info.get(b"Title")?.as_str()?, b"Madrid centro");
    assert!(info.get(b"CreationDate")?.as_str()?.starts_with(b"D:"));
    Ok(())
}

#[test]
fn test_empty_collection_still_produces_a_page() -> TestResult {
    let pipeline = ExportPipelineBuilder::new().build()?;
    let artifact = pipeline.export_pdf(
        &ExportRequest::new(&[]).with_viewport(madrid_bounds()),
        &mut NoopObserver,
    )?;
    let pdf = GeneratedPdf::from_bytes(artifact.bytes)?;
    assert_eq!(pdf.page_count(), 1);
    assert!(pdf.operations()?.is_empty());
    Ok(())
}

#[test]
fn test_artifact_saves_into_directory() -> TestResult {
    let city = mixed_city();
    let pipeline = ExportPipelineBuilder::new()
        .with_artifact_prefix("Madrid Centro")
        .build()?;
    let (artifact, _) = export(
        &pipeline,
        &ExportRequest::new(&city.features).with_viewport(madrid_bounds()),
    )?;
    assert!(artifact.file_name.starts_with("madrid_centro_"));

    let dir = tempfile::tempdir()?;
    let path = artifact.save_in(dir.path().join("exports"))?;
    assert!(path.starts_with(dir.path()));
    assert_eq!(std::fs::read(&path)?, artifact.bytes);
    Ok(())
}
