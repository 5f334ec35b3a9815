//! XLSX rendering for display tables

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook};
use std::path::Path;

use crate::error::ExportError;
use crate::pipeline::{Cell, DisplayTable};
use crate::style::{band_style, classify_row, header_style, BorderWeight, CellStyle, RowBand};

/// Name of the workbook written into the output directory
pub const WORKBOOK_FILENAME: &str = "materials.xlsx";

/// Width units added to every auto-sized column
const COLUMN_PADDING: f64 = 2.0;

/// One worksheet's worth of content
pub struct Sheet {
    pub name: String,
    pub table: DisplayTable,
}

/// Renders display tables into an in-memory workbook
pub struct XlsxWriter {
    workbook: Workbook,
}

impl XlsxWriter {
    pub fn new() -> Self {
        Self {
            workbook: Workbook::new(),
        }
    }

    /// Render one view as a worksheet: styled header row, data and
    /// separator rows, frozen header/identity panes, auto-sized columns.
    pub fn write_view(&mut self, name: &str, table: &DisplayTable) -> Result<(), ExportError> {
        let worksheet = self.workbook.add_worksheet();
        worksheet.set_name(name)?;

        // One format per column for the header and for each row band,
        // instead of one per cell
        let header_formats: Vec<Format> = (0..table.width())
            .map(|col| to_format(&header_style(table, col)))
            .collect();
        let body_formats: Vec<Format> = (0..table.width())
            .map(|col| to_format(&band_style(table, RowBand::TierBody, col)))
            .collect();
        let tier_end_formats: Vec<Format> = (0..table.width())
            .map(|col| to_format(&band_style(table, RowBand::TierEnd, col)))
            .collect();
        let separator_formats: Vec<Format> = (0..table.width())
            .map(|col| to_format(&band_style(table, RowBand::Separator, col)))
            .collect();

        let mut widths: Vec<usize> = table
            .fields
            .iter()
            .map(|field| field.name.chars().count())
            .collect();

        for (col_idx, field) in table.fields.iter().enumerate() {
            worksheet.write_string_with_format(
                0,
                col_idx as u16,
                &field.name,
                &header_formats[col_idx],
            )?;
        }

        for (row_idx, row) in table.rows.iter().enumerate() {
            let formats = match classify_row(table, row_idx) {
                RowBand::Separator => &separator_formats,
                RowBand::TierEnd => &tier_end_formats,
                RowBand::TierBody => &body_formats,
            };

            let excel_row = (row_idx + 1) as u32;
            for (col_idx, cell) in row.cells.iter().enumerate() {
                let format = &formats[col_idx];
                let col = col_idx as u16;
                match cell {
                    // Blanks still carry the format so fills and borders paint
                    Cell::Empty => {
                        worksheet.write_blank(excel_row, col, format)?;
                    }
                    Cell::Number(value) => {
                        worksheet.write_number_with_format(excel_row, col, *value, format)?;
                    }
                    Cell::Text(text) => {
                        worksheet.write_string_with_format(excel_row, col, text, format)?;
                    }
                }
                widths[col_idx] = widths[col_idx].max(cell.display_width());
            }
        }

        for (col_idx, &width) in widths.iter().enumerate() {
            worksheet.set_column_width(col_idx as u16, width as f64 + COLUMN_PADDING)?;
        }

        // Header row and identity column stay visible while scrolling
        worksheet.set_freeze_panes(1, 1)?;

        Ok(())
    }

    /// Flush the workbook to disk. Nothing touches the path before this.
    pub fn save(mut self, path: &Path) -> Result<(), ExportError> {
        self.workbook.save(path)?;
        Ok(())
    }
}

impl Default for XlsxWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Write one workbook with a worksheet per sheet, in order.
///
/// The workbook is buffered in memory; the output file is only created by
/// the final save, after every view has rendered.
pub fn write_workbook(path: &Path, sheets: &[Sheet]) -> Result<(), ExportError> {
    let mut writer = XlsxWriter::new();
    for sheet in sheets {
        writer.write_view(&sheet.name, &sheet.table)?;
    }
    writer.save(path)
}

/// Turn a computed cell style into a concrete workbook format
fn to_format(style: &CellStyle) -> Format {
    let mut format = Format::new();

    if let Some(color) = &style.background {
        format = format.set_background_color(color.as_str());
    }
    if let Some(weight) = style.bottom {
        format = format.set_border_bottom(to_border(weight));
    }
    if let Some(weight) = style.right {
        format = format.set_border_right(to_border(weight));
    }
    if style.bold {
        format = format.set_bold();
    }
    if style.centered {
        format = format.set_align(FormatAlign::Center);
    }

    format
}

fn to_border(weight: BorderWeight) -> FormatBorder {
    match weight {
        BorderWeight::Dotted => FormatBorder::Dotted,
        BorderWeight::Medium => FormatBorder::Medium,
    }
}
