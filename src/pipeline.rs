//! The transform pipeline: filter, project, sort, and group material rows
//!
//! Every stage is pure. The display table for a view is fully built in
//! memory before the workbook is ever opened, so a failure here leaves no
//! partial output behind.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::catalog::{Field, ViewSpec};
use crate::error::ExportError;
use crate::reader::{MaterialTable, COL_ID, COL_PARENT, COL_TIER, COL_TYPE};

/// The template entry Silent Gear ships in every dump
pub const EXAMPLE_MATERIAL_ID: &str = "silentgear:example";

/// One typed cell of a display row
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Number(f64),
    Text(String),
}

impl Cell {
    /// Type a raw TSV value: blank becomes Empty, a finite number becomes
    /// Number, anything else stays Text.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Cell::Number(value),
            _ => Cell::Text(raw.to_string()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Width in characters of the text Excel's General format would show,
    /// used for column auto-sizing.
    pub fn display_width(&self) -> usize {
        match self {
            Cell::Empty => 0,
            Cell::Number(value) => format_number(*value).len(),
            Cell::Text(text) => text.chars().count(),
        }
    }
}

/// Render a number the way Excel's General format does: integral values
/// without a decimal point.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Tier value: ordered numerically when it parses, as text otherwise
#[derive(Debug, Clone, PartialEq)]
pub struct Tier {
    raw: String,
    numeric: Option<f64>,
}

impl Tier {
    pub fn parse(raw: &str) -> Self {
        let numeric = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite());
        Self {
            raw: raw.trim().to_string(),
            numeric,
        }
    }

    /// Numeric tiers order numerically and before non-numeric ones;
    /// non-numeric tiers fall back to text order.
    pub fn cmp(&self, other: &Tier) -> Ordering {
        match (self.numeric, other.numeric) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.raw.cmp(&other.raw),
        }
    }
}

/// Sort/group key captured from the source record during projection.
///
/// Kept alongside the projected cells so grouping and border classification
/// work even for views that do not select the Type or Tier column.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupKey {
    pub category: String,
    pub tier: Tier,
}

impl GroupKey {
    pub fn cmp(&self, other: &GroupKey) -> Ordering {
        self.category
            .cmp(&other.category)
            .then_with(|| self.tier.cmp(&other.tier))
    }

    pub fn same_tier(&self, other: &GroupKey) -> bool {
        self.tier.cmp(&other.tier) == Ordering::Equal
    }
}

/// A projected record: one row of cells plus the key it sorts and groups by
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedRow {
    pub cells: Vec<Cell>,
    pub key: GroupKey,
}

/// One display row: a record, or an all-empty separator between categories
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRow {
    pub cells: Vec<Cell>,
    /// None marks a separator row
    pub key: Option<GroupKey>,
}

impl DisplayRow {
    fn separator(width: usize) -> Self {
        Self {
            cells: vec![Cell::Empty; width],
            key: None,
        }
    }

    pub fn is_separator(&self) -> bool {
        self.key.is_none()
    }
}

/// A view's worksheet content: its fields plus the ordered display rows
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayTable {
    pub fields: Vec<Field>,
    pub rows: Vec<DisplayRow>,
}

impl DisplayTable {
    pub fn width(&self) -> usize {
        self.fields.len()
    }

    /// Number of material rows, separators excluded
    pub fn record_count(&self) -> usize {
        self.rows.iter().filter(|row| !row.is_separator()).count()
    }
}

/// Keep only root materials: drop every record with a parent reference and
/// every record whose ID is excluded. Returns indices into the source rows.
pub fn filter_materials(
    table: &MaterialTable,
    excluded_ids: &HashSet<&str>,
) -> Result<Vec<usize>, ExportError> {
    let id_col = table.require_column(COL_ID)?;
    let parent_col = table.require_column(COL_PARENT)?;

    let kept = table
        .rows()
        .iter()
        .enumerate()
        .filter(|(_, row)| {
            row[parent_col].trim().is_empty() && !excluded_ids.contains(row[id_col].trim())
        })
        .map(|(idx, _)| idx)
        .collect();

    Ok(kept)
}

/// Select the view's fields in catalog order, typing each cell and capturing
/// the group key from the structural Type/Tier columns.
pub fn project_columns(
    table: &MaterialTable,
    kept: &[usize],
    view: &ViewSpec,
) -> Result<Vec<ProjectedRow>, ExportError> {
    let mut field_cols = Vec::with_capacity(view.fields.len());
    for field in &view.fields {
        let col = table
            .column(&field.name)
            .ok_or_else(|| ExportError::MissingColumn {
                view: view.name.clone(),
                column: field.name.clone(),
            })?;
        field_cols.push(col);
    }

    let type_col = table.require_column(COL_TYPE)?;
    let tier_col = table.require_column(COL_TIER)?;

    let rows = kept
        .iter()
        .map(|&idx| {
            let row = &table.rows()[idx];
            ProjectedRow {
                cells: field_cols
                    .iter()
                    .map(|&col| Cell::from_raw(&row[col]))
                    .collect(),
                key: GroupKey {
                    category: row[type_col].trim().to_string(),
                    tier: Tier::parse(&row[tier_col]),
                },
            }
        })
        .collect();

    Ok(rows)
}

/// Stable sort by (category, tier) ascending. Records with equal keys keep
/// their post-filter relative order, so repeated runs are deterministic.
pub fn sort_materials(rows: &mut [ProjectedRow]) {
    rows.sort_by(|a, b| a.key.cmp(&b.key));
}

/// Insert one separator row after each maximal category run, except after
/// the final run. Single forward pass with one-element lookahead.
pub fn insert_separators(rows: Vec<ProjectedRow>, width: usize) -> Vec<DisplayRow> {
    let mut out = Vec::with_capacity(rows.len() + rows.len() / 4);
    let mut iter = rows.into_iter().peekable();

    while let Some(row) = iter.next() {
        let run_ends = iter
            .peek()
            .is_some_and(|next| next.key.category != row.key.category);

        out.push(DisplayRow {
            cells: row.cells,
            key: Some(row.key),
        });
        if run_ends {
            out.push(DisplayRow::separator(width));
        }
    }

    out
}

/// Run the full pipeline for one view
pub fn build_display_table(
    table: &MaterialTable,
    view: &ViewSpec,
    excluded_ids: &HashSet<&str>,
) -> Result<DisplayTable, ExportError> {
    let kept = filter_materials(table, excluded_ids)?;
    let mut rows = project_columns(table, &kept, view)?;
    sort_materials(&mut rows);
    let rows = insert_separators(rows, view.fields.len());

    Ok(DisplayTable {
        fields: view.fields.clone(),
        rows,
    })
}
