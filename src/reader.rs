//! TSV ingestion for Silent Gear material dumps

use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::ExportError;

/// Identifier column, unique per material
pub const COL_ID: &str = "ID";
/// Parent reference column, empty for root materials
pub const COL_PARENT: &str = "Parent";
/// Category column ("Type" in the dump)
pub const COL_TYPE: &str = "Type";
/// Ordinal rank column
pub const COL_TIER: &str = "Tier";

/// In-memory source table: header names in file order plus raw string rows
#[derive(Debug)]
pub struct MaterialTable {
    headers: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<String>>,
}

impl MaterialTable {
    /// Build a table, padding short rows to header width.
    ///
    /// Rows longer than the header keep their extra cells; they are simply
    /// never selected by a view.
    pub fn new(headers: Vec<String>, mut rows: Vec<Vec<String>>) -> Self {
        let index = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| (name.clone(), idx))
            .collect();

        let width = headers.len();
        for row in &mut rows {
            if row.len() < width {
                row.resize(width, String::new());
            }
        }

        Self {
            headers,
            index,
            rows,
        }
    }

    /// Parse a tab-separated dump from any reader
    pub fn from_reader<R: Read>(input: R) -> Result<Self, ExportError> {
        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .flexible(true)
            .from_reader(input);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self::new(headers, rows))
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Position of a named column, if present
    pub fn column(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Position of a structural column that every dump must carry
    pub fn require_column(&self, name: &str) -> Result<usize, ExportError> {
        self.column(name)
            .ok_or_else(|| ExportError::MissingRequiredColumn(name.to_string()))
    }
}

/// Load a material dump from disk
pub fn load_materials(path: &Path) -> Result<MaterialTable, ExportError> {
    if !path.exists() {
        return Err(ExportError::InputNotFound(path.to_path_buf()));
    }

    let file = File::open(path)?;
    MaterialTable::from_reader(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "ID\tParent\tType\tTier\tName\n\
        silentgear:iron\t\tmetal\t2\tIron\n\
        silentgear:diamond\t\tgem\t3\tDiamond\n";

    #[test]
    fn test_parse_sample_dump() {
        let table = MaterialTable::from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.headers(), &["ID", "Parent", "Type", "Tier", "Name"]);
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0][4], "Iron");
        assert_eq!(table.column("Tier"), Some(3));
        assert_eq!(table.column("Harvest Speed"), None);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let input = "ID\tParent\tType\tTier\nsilentgear:flint\t\tstone\n";
        let table = MaterialTable::from_reader(input.as_bytes()).unwrap();
        assert_eq!(table.rows()[0].len(), 4);
        assert_eq!(table.rows()[0][3], "");
    }

    #[test]
    fn test_require_column_reports_missing() {
        let table = MaterialTable::from_reader("ID\tParent\na\t\n".as_bytes()).unwrap();
        let err = table.require_column(COL_TIER).unwrap_err();
        assert!(matches!(err, ExportError::MissingRequiredColumn(ref name) if name == "Tier"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_materials(Path::new("/nonexistent/material_export.tsv")).unwrap_err();
        assert!(matches!(err, ExportError::InputNotFound(_)));
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let table = load_materials(file.path()).unwrap();
        assert_eq!(table.rows().len(), 2);
    }
}
