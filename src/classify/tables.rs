//! Built-in classification tables
//!
//! One table per dimension, built on first use and shared for the life of the process.

use std::sync::OnceLock;

use crate::error::ClassifyError;
use crate::models::{ClassificationEntry, ClassificationTable, ColorToken, Dimension};

/// (code, label, color) rows in ascending rank order, followed by the fallback row
type Rows = (&'static [(&'static str, &'static str, ColorToken)], (&'static str, ColorToken));

static PRIORITY_ROWS: Rows = (
    &[
        ("lowest", "Muy baja", ColorToken::Rgb(0x08, 0x91, 0xb2)),
        ("low", "Baja", ColorToken::Rgb(0x16, 0xa3, 0x4a)),
        ("medium", "Media", ColorToken::Rgb(0xca, 0x8a, 0x04)),
        ("high", "Alta", ColorToken::Rgb(0xea, 0x58, 0x0c)),
        ("highest", "Muy alta", ColorToken::Rgb(0xdc, 0x26, 0x26)),
    ],
    ("Sin Prioridad", ColorToken::Rgb(0x6b, 0x72, 0x80)),
);

static SPRINT_STATUS_ROWS: Rows = (
    &[
        ("planning", "Planificación", ColorToken::Rgb(0x3b, 0x82, 0xf6)),
        ("active", "Activo", ColorToken::Rgb(0x10, 0xb9, 0x81)),
        ("completed", "Completado", ColorToken::Rgb(0x64, 0x74, 0x8b)),
        ("cancelled", "Cancelado", ColorToken::Rgb(0xef, 0x44, 0x44)),
    ],
    ("Desconocido", ColorToken::Rgb(0x8b, 0x5c, 0xf6)),
);

static TASK_STATUS_ROWS: Rows = (
    &[
        ("todo", "Por hacer", ColorToken::Rgb(0x64, 0x74, 0x8b)),
        ("in_progress", "En progreso", ColorToken::Rgb(0x25, 0x63, 0xeb)),
        ("in_review", "En revisión", ColorToken::Rgb(0xca, 0x8a, 0x04)),
        ("blocked", "Bloqueado", ColorToken::Rgb(0xdc, 0x26, 0x26)),
        ("done", "Completada", ColorToken::Rgb(0x16, 0xa3, 0x4a)),
    ],
    ("Desconocido", ColorToken::Rgb(0x8b, 0x5c, 0xf6)),
);

static TASK_TYPE_ROWS: Rows = (
    &[
        ("epic", "Épica", ColorToken::Rgb(0x7c, 0x3a, 0xed)),
        ("feature", "Funcionalidad", ColorToken::Rgb(0x08, 0x91, 0xb2)),
        ("story", "Historia", ColorToken::Rgb(0x16, 0xa3, 0x4a)),
        ("task", "Tarea", ColorToken::Rgb(0x25, 0x63, 0xeb)),
        ("bug", "Error", ColorToken::Rgb(0xdc, 0x26, 0x26)),
    ],
    ("Otro", ColorToken::Rgb(0x6b, 0x72, 0x80)),
);

fn rows_for(dimension: Dimension) -> &'static Rows {
    match dimension {
        Dimension::Priority => &PRIORITY_ROWS,
        Dimension::SprintStatus => &SPRINT_STATUS_ROWS,
        Dimension::TaskStatus => &TASK_STATUS_ROWS,
        Dimension::TaskType => &TASK_TYPE_ROWS,
    }
}

/// Construct a fresh (unshared) table for a dimension.
///
/// Ranks are assigned from row order; the fallback ranks after every real code.
pub fn construct_table(dimension: Dimension) -> Result<ClassificationTable, ClassifyError> {
    let (rows, (fallback_label, fallback_color)) = rows_for(dimension);
    let entries = rows
        .iter()
        .enumerate()
        .map(|(rank, (code, label, color))| ClassificationEntry::new(code, label, color.clone(), rank as u32))
        .collect();
    let fallback = ClassificationEntry::new(
        crate::models::FALLBACK_CODE,
        fallback_label,
        fallback_color.clone(),
        rows.len() as u32,
    );
    let table = ClassificationTable::new(dimension, entries, fallback, dimension.default_code())?;
    log::debug!("Built {} table with {} entries", dimension, table.len());
    Ok(table)
}

/// Shared built-in table for a dimension.
///
/// Panics if a built-in table fails validation; that is a defect in the rows above,
/// never a consequence of input data.
pub fn build_table(dimension: Dimension) -> &'static ClassificationTable {
    static PRIORITY: OnceLock<ClassificationTable> = OnceLock::new();
    static SPRINT_STATUS: OnceLock<ClassificationTable> = OnceLock::new();
    static TASK_STATUS: OnceLock<ClassificationTable> = OnceLock::new();
    static TASK_TYPE: OnceLock<ClassificationTable> = OnceLock::new();

    let cell = match dimension {
        Dimension::Priority => &PRIORITY,
        Dimension::SprintStatus => &SPRINT_STATUS,
        Dimension::TaskStatus => &TASK_STATUS,
        Dimension::TaskType => &TASK_TYPE,
    };
    cell.get_or_init(|| {
        construct_table(dimension)
            .unwrap_or_else(|e| panic!("built-in {} table is invalid: {}", dimension, e))
    })
}

/// Shared built-in table for a dimension given by name
pub fn build_table_named(name: &str) -> Result<&'static ClassificationTable, ClassifyError> {
    let dimension: Dimension = name.parse()?;
    Ok(build_table(dimension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_builtin_tables_validate() {
        for dimension in Dimension::ALL {
            let table = construct_table(dimension).unwrap();
            assert_eq!(table.dimension(), dimension);
            assert!(table.fallback().is_fallback());
            // Fallback sorts last
            assert_eq!(table.entries().last().unwrap().code, "unknown");
        }
    }

    #[test]
    fn test_build_table_is_shared() {
        let a = build_table(Dimension::Priority);
        let b = build_table(Dimension::Priority);
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_priority_table_contents() {
        let table = build_table(Dimension::Priority);
        let codes: Vec<&str> = table.entries().iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, vec!["lowest", "low", "medium", "high", "highest", "unknown"]);
        assert_eq!(table.default_code(), Some("low"));
        assert_eq!(table.fallback().label, "Sin Prioridad");
    }

    #[test]
    fn test_sprint_status_fallback_color() {
        let table = build_table(Dimension::SprintStatus);
        assert_eq!(table.fallback().color.to_hex(), "#8b5cf6");
        assert_eq!(table.default_code(), None);
    }

    #[test]
    fn test_build_table_named() {
        assert_eq!(build_table_named("task-type").unwrap().dimension(), Dimension::TaskType);
        assert_eq!(
            build_table_named("severity").unwrap_err(),
            ClassifyError::UnknownDimension("severity".to_string())
        );
    }

    #[test]
    fn test_builtin_tables_race_safely() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| build_table(Dimension::TaskStatus) as *const ClassificationTable as usize))
            .collect();
        let addrs: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(addrs.windows(2).all(|w| w[0] == w[1]));
    }
}
