//! View catalog types: which columns each worksheet shows, in what colors

use serde::Deserialize;
use std::collections::HashSet;

/// Excel refuses worksheet names longer than this
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// One projected column: its source header name and its display fill
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Field {
    pub name: String,
    /// `#RRGGBB` fill for this column and its header cell
    pub color: String,
}

impl Field {
    pub fn new(name: &str, color: &str) -> Self {
        Self {
            name: name.to_string(),
            color: color.to_string(),
        }
    }
}

/// A named worksheet: an ordered list of fields (the display order)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ViewSpec {
    pub name: String,
    pub fields: Vec<Field>,
}

/// The full set of views, in worksheet order.
///
/// Loaded once at startup (built-in or from a JSON file) and never mutated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ViewCatalog {
    pub views: Vec<ViewSpec>,
}

impl ViewCatalog {
    /// Check structural rules, reporting the first violation
    pub fn validate(&self) -> Result<(), String> {
        if self.views.is_empty() {
            return Err("catalog defines no views".to_string());
        }

        let mut view_names: HashSet<&str> = HashSet::new();
        for view in &self.views {
            if view.name.trim().is_empty() {
                return Err("view with an empty name".to_string());
            }
            if view.name.len() > MAX_SHEET_NAME_LEN {
                return Err(format!(
                    "view name '{}' is longer than {} characters",
                    view.name, MAX_SHEET_NAME_LEN
                ));
            }
            if !view_names.insert(view.name.as_str()) {
                return Err(format!("view '{}' is defined twice", view.name));
            }
            if view.fields.is_empty() {
                return Err(format!("view '{}' has no fields", view.name));
            }

            let mut field_names: HashSet<&str> = HashSet::new();
            for field in &view.fields {
                if !field_names.insert(field.name.as_str()) {
                    return Err(format!(
                        "view '{}' lists field '{}' twice",
                        view.name, field.name
                    ));
                }
                if !is_hex_color(&field.color) {
                    return Err(format!(
                        "view '{}' field '{}' has color '{}', expected #RRGGBB",
                        view.name, field.name, field.color
                    ));
                }
            }
        }

        Ok(())
    }
}

fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}
