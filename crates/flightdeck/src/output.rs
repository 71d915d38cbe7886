//! Rendering for `--output`.
//!
//! Lists and single records share the JSON and YAML encoders; they differ
//! only in how the table and plain views are produced.

use std::io::{self, IsTerminal, Write};

use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, OutputFormat};
use crate::error::CliError;

/// Whether ANSI colour should be emitted on stdout.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal(),
    }
}

/// Structured encoding of `data`, or `None` for the text formats.
fn encode<T: Serialize + ?Sized>(
    format: &OutputFormat,
    data: &T,
) -> Option<Result<String, CliError>> {
    let encoded = match format {
        OutputFormat::Json => serde_json::to_string_pretty(data).map_err(CliError::from),
        OutputFormat::JsonCompact => serde_json::to_string(data).map_err(CliError::from),
        OutputFormat::Yaml => serde_yaml::to_string(data).map_err(CliError::from),
        OutputFormat::Table | OutputFormat::Plain => return None,
    };
    Some(encoded)
}

/// Render a collection. `to_row` builds the table view; `id_fn` gives the
/// one-per-line key for `plain`.
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: Serialize,
    R: Tabled,
{
    if let Some(encoded) = encode(format, data) {
        return encoded;
    }
    if *format == OutputFormat::Plain {
        let ids: Vec<String> = data.iter().map(id_fn).collect();
        return Ok(ids.join("\n"));
    }
    let rows: Vec<R> = data.iter().map(to_row).collect();
    Ok(Table::new(rows).with(Style::rounded()).to_string())
}

/// Render one record. `detail_fn` produces the free-form table view.
pub fn render_single<T>(
    format: &OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: Serialize,
{
    if let Some(encoded) = encode(format, data) {
        return encoded;
    }
    Ok(if *format == OutputFormat::Plain {
        id_fn(data)
    } else {
        detail_fn(data)
    })
}

/// Write `rendered` to stdout unless quiet or empty.
pub fn print_output(rendered: &str, quiet: bool) {
    if quiet || rendered.is_empty() {
        return;
    }
    // A closed pipe (`| head`) is not an error worth reporting.
    let _ = writeln!(io::stdout().lock(), "{rendered}");
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Gate {
        code: &'static str,
    }

    #[derive(Tabled)]
    struct GateRow {
        #[tabled(rename = "Gate")]
        code: String,
    }

    fn render(format: &OutputFormat) -> String {
        let gates = [Gate { code: "A1" }, Gate { code: "B2" }];
        render_list(
            format,
            &gates,
            |g| GateRow {
                code: g.code.into(),
            },
            |g| g.code.into(),
        )
        .unwrap()
    }

    #[test]
    fn plain_is_one_id_per_line() {
        assert_eq!(render(&OutputFormat::Plain), "A1\nB2");
    }

    #[test]
    fn compact_json_is_single_line() {
        assert_eq!(
            render(&OutputFormat::JsonCompact),
            r#"[{"code":"A1"},{"code":"B2"}]"#
        );
    }

    #[test]
    fn table_has_header_and_rows() {
        let out = render(&OutputFormat::Table);
        assert!(out.contains("Gate"));
        assert!(out.contains("A1"));
        assert!(out.contains("B2"));
    }

    #[test]
    fn yaml_lists_items() {
        assert!(render(&OutputFormat::Yaml).contains("- code: A1"));
    }

    #[test]
    fn single_uses_detail_for_table_and_id_for_plain() {
        let gate = Gate { code: "C7" };
        let detail = |g: &Gate| format!("gate {}", g.code);
        let id = |g: &Gate| g.code.to_owned();

        assert_eq!(
            render_single(&OutputFormat::Table, &gate, detail, id).unwrap(),
            "gate C7"
        );
        assert_eq!(
            render_single(&OutputFormat::Plain, &gate, detail, id).unwrap(),
            "C7"
        );
    }
}
