//! Pure style classification for display tables
//!
//! Every function here depends only on (display table, row index, column
//! index). The writer turns the resulting styles into concrete workbook
//! formats; nothing in this module touches the xlsx library.

use crate::pipeline::DisplayTable;

/// Fill behind separator rows
pub const SEPARATOR_FILL: &str = "#404040";

/// Border weights used by the workbook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderWeight {
    Dotted,
    Medium,
}

/// Styling band of one display row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowBand {
    /// All-empty category separator
    Separator,
    /// Last record of its tier run
    TierEnd,
    /// Any other record
    TierBody,
}

/// Visual attributes of one cell
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellStyle {
    pub background: Option<String>,
    pub bottom: Option<BorderWeight>,
    pub right: Option<BorderWeight>,
    pub bold: bool,
    pub centered: bool,
}

/// Classify a row from itself and its successor.
///
/// A record is a tier end when it is the last row, when a separator follows,
/// or when the next record has a different tier. A category change without a
/// separator in between cannot occur in a well-formed display table.
pub fn classify_row(table: &DisplayTable, row_idx: usize) -> RowBand {
    let Some(key) = &table.rows[row_idx].key else {
        return RowBand::Separator;
    };

    match table.rows.get(row_idx + 1).and_then(|next| next.key.as_ref()) {
        None => RowBand::TierEnd,
        Some(next_key) if !key.same_tier(next_key) => RowBand::TierEnd,
        Some(_) => RowBand::TierBody,
    }
}

/// Style of a data cell in the given band.
///
/// Rules compose additively: the column fill and the first-column anchor
/// border come first, then the band adds its bottom border. The separator
/// band overrides the background only; column borders still apply.
pub fn band_style(table: &DisplayTable, band: RowBand, col_idx: usize) -> CellStyle {
    let mut style = CellStyle {
        background: Some(table.fields[col_idx].color.clone()),
        ..CellStyle::default()
    };
    if col_idx == 0 {
        style.right = Some(BorderWeight::Medium);
    }

    match band {
        RowBand::Separator => style.background = Some(SEPARATOR_FILL.to_string()),
        RowBand::TierEnd => style.bottom = Some(BorderWeight::Medium),
        RowBand::TierBody => style.bottom = Some(BorderWeight::Dotted),
    }

    style
}

/// Style of a data cell
pub fn cell_style(table: &DisplayTable, row_idx: usize, col_idx: usize) -> CellStyle {
    band_style(table, classify_row(table, row_idx), col_idx)
}

/// Style of a header cell: field fill, bold, centered, underlined by a
/// medium border; the first column keeps its anchor border here too.
pub fn header_style(table: &DisplayTable, col_idx: usize) -> CellStyle {
    CellStyle {
        background: Some(table.fields[col_idx].color.clone()),
        bottom: Some(BorderWeight::Medium),
        right: (col_idx == 0).then_some(BorderWeight::Medium),
        bold: true,
        centered: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Field, ViewSpec};
    use crate::pipeline::build_display_table;
    use crate::reader::MaterialTable;
    use std::collections::HashSet;

    fn sample_table() -> DisplayTable {
        // Sorted output: gem t3 | metal t2, metal t2, metal t3 | wood t1
        let tsv = "ID\tParent\tType\tTier\tName\tDurability\n\
            d\t\tgem\t3\tDiamond\t1561\n\
            i\t\tmetal\t2\tIron\t250\n\
            s\t\tmetal\t2\tSilver\t64\n\
            p\t\tmetal\t3\tPlatinum\t380\n\
            w\t\twood\t1\tWood\t59\n";
        let table = MaterialTable::from_reader(tsv.as_bytes()).unwrap();
        let view = ViewSpec {
            name: "Test".to_string(),
            fields: vec![
                Field::new("Name", "#D9D9D9"),
                Field::new("Durability", "#C6EFCE"),
            ],
        };
        build_display_table(&table, &view, &HashSet::new()).unwrap()
    }

    #[test]
    fn test_row_bands() {
        let table = sample_table();
        // Rows: Diamond, <sep>, Iron, Silver, Platinum, <sep>, Wood
        let bands: Vec<RowBand> = (0..table.rows.len())
            .map(|idx| classify_row(&table, idx))
            .collect();
        assert_eq!(
            bands,
            [
                RowBand::TierEnd,   // Diamond: separator follows
                RowBand::Separator,
                RowBand::TierBody,  // Iron: Silver shares tier 2
                RowBand::TierEnd,   // Silver: Platinum is tier 3
                RowBand::TierEnd,   // Platinum: separator follows
                RowBand::Separator,
                RowBand::TierEnd,   // Wood: last row
            ]
        );
    }

    #[test]
    fn test_column_fill_and_anchor_border() {
        let table = sample_table();
        let first = cell_style(&table, 2, 0);
        assert_eq!(first.background.as_deref(), Some("#D9D9D9"));
        assert_eq!(first.right, Some(BorderWeight::Medium));

        let second = cell_style(&table, 2, 1);
        assert_eq!(second.background.as_deref(), Some("#C6EFCE"));
        assert_eq!(second.right, None);
    }

    #[test]
    fn test_tier_borders() {
        let table = sample_table();
        assert_eq!(cell_style(&table, 2, 1).bottom, Some(BorderWeight::Dotted));
        assert_eq!(cell_style(&table, 3, 1).bottom, Some(BorderWeight::Medium));
    }

    #[test]
    fn test_separator_overrides_background_only() {
        let table = sample_table();
        let style = cell_style(&table, 1, 0);
        assert_eq!(style.background.as_deref(), Some(SEPARATOR_FILL));
        // The anchor border composes through the override
        assert_eq!(style.right, Some(BorderWeight::Medium));
        assert_eq!(style.bottom, None);
    }

    #[test]
    fn test_header_style() {
        let table = sample_table();
        let style = header_style(&table, 0);
        assert!(style.bold);
        assert!(style.centered);
        assert_eq!(style.background.as_deref(), Some("#D9D9D9"));
        assert_eq!(style.bottom, Some(BorderWeight::Medium));
        assert_eq!(style.right, Some(BorderWeight::Medium));

        assert_eq!(header_style(&table, 1).right, None);
    }
}
