//! Output formatting: table, JSON, YAML, plain.
//!
//! Renders data in the format selected by `--output`. Table uses `tabled`,
//! structured formats use serde, plain emits one identifier per line.

use std::io::{self, Write};

use tabled::{Table, Tabled, settings::Style};

use crate::cli::OutputFormat;
use crate::error::CliError;

// ── Render dispatchers ───────────────────────────────────────────────

/// Render a list of serde-serializable + tabled items in the chosen format.
///
/// - `table`: uses the `Tabled` derive to build a pretty table
/// - `json` / `json-compact`: serializes the original data via serde
/// - `yaml`: serializes via serde_yaml
/// - `plain`: calls `id_fn` on each item to emit one identifier per line
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    to_row: impl FnMut(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            Ok(render_table(&rows))
        }
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => Ok(data.iter().map(&id_fn).collect::<Vec<_>>().join("\n")),
    }
}

/// Render a single serde-serializable item in the chosen format.
///
/// Table rendering uses `detail_fn`, which returns field/value pairs shown
/// as a two-column table.
pub fn render_single<T>(
    format: &OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> Vec<(&'static str, String)>,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Table => Ok(render_detail(detail_fn(data))),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => Ok(id_fn(data)),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_table<R: Tabled>(rows: &[R]) -> String {
    Table::new(rows).with(Style::rounded()).to_string()
}

#[derive(Tabled)]
struct DetailRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

fn render_detail(pairs: Vec<(&'static str, String)>) -> String {
    let rows: Vec<DetailRow> = pairs
        .into_iter()
        .map(|(field, value)| DetailRow { field, value })
        .collect();
    render_table(&rows)
}

fn render_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> Result<String, CliError> {
    let rendered = if compact {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    rendered.map_err(|e| CliError::Render(e.to_string()))
}

fn render_yaml<T: serde::Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    serde_yaml::to_string(data).map_err(|e| CliError::Render(e.to_string()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[derive(serde::Serialize)]
    struct Peer {
        domain: String,
    }

    #[derive(Tabled)]
    struct PeerRow {
        #[tabled(rename = "Domain")]
        domain: String,
    }

    fn peers() -> Vec<Peer> {
        vec![
            Peer {
                domain: "mastodon.social".into(),
            },
            Peer {
                domain: "mstdn.jp".into(),
            },
        ]
    }

    fn row(p: &Peer) -> PeerRow {
        PeerRow {
            domain: p.domain.clone(),
        }
    }

    #[test]
    fn plain_is_one_per_line() {
        let out = render_list(&OutputFormat::Plain, &peers(), row, |p| p.domain.clone()).unwrap();
        assert_eq!(out, "mastodon.social\nmstdn.jp");
    }

    #[test]
    fn compact_json() {
        let out =
            render_list(&OutputFormat::JsonCompact, &peers(), row, |p| p.domain.clone()).unwrap();
        assert_eq!(
            out,
            r#"[{"domain":"mastodon.social"},{"domain":"mstdn.jp"}]"#
        );
    }

    #[test]
    fn table_has_header_and_rows() {
        let out = render_list(&OutputFormat::Table, &peers(), row, |p| p.domain.clone()).unwrap();
        assert!(out.contains("Domain"));
        assert!(out.contains("mstdn.jp"));
    }

    #[test]
    fn detail_table() {
        let peer = Peer {
            domain: "mstdn.jp".into(),
        };
        let out = render_single(
            &OutputFormat::Table,
            &peer,
            |p| vec![("Domain", p.domain.clone())],
            |p| p.domain.clone(),
        )
        .unwrap();
        assert!(out.contains("Field"));
        assert!(out.contains("mstdn.jp"));
    }
}
