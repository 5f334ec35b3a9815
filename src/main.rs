use anyhow::{Context, Result};
use sgear_mats_to_xlsx::{
    catalog::{builtin_catalog, load_catalog},
    cli::Cli,
    pipeline::{build_display_table, EXAMPLE_MATERIAL_ID},
    reader::load_materials,
    writer::{write_workbook, Sheet, WORKBOOK_FILENAME},
};
use std::collections::HashSet;
use std::fs;
use std::time::Instant;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    let start = Instant::now();

    // Resolve the view catalog
    let catalog = match &cli.views {
        Some(path) => load_catalog(path)?,
        None => builtin_catalog(),
    };

    let materials = load_materials(&cli.input)?;
    let excluded = HashSet::from([EXAMPLE_MATERIAL_ID]);

    // Build every view before touching the output path
    println!("Building {} views from {:?}...", catalog.views.len(), cli.input);
    let mut sheets = Vec::with_capacity(catalog.views.len());
    for view in &catalog.views {
        let table = build_display_table(&materials, view, &excluded)?;
        sheets.push(Sheet {
            name: view.name.clone(),
            table,
        });
    }
    let record_count = sheets.first().map_or(0, |sheet| sheet.table.record_count());

    fs::create_dir_all(&cli.output)
        .with_context(|| format!("failed to create output directory {:?}", cli.output))?;
    let workbook_path = cli.output.join(WORKBOOK_FILENAME);
    write_workbook(&workbook_path, &sheets)?;

    let elapsed = start.elapsed();
    println!(
        "\nCreated {:?} ({} materials, {} sheets) in {:.1}s",
        workbook_path,
        record_count,
        sheets.len(),
        elapsed.as_secs_f64()
    );

    Ok(())
}
