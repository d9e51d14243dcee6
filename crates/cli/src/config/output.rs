use prettytable::{
    format::{FormatBuilder, LinePosition, LineSeparator, TableFormat},
    row, Cell, Table,
};
use serde::Serialize;
use serde_json::{Map, Value};

/// Output format.
#[derive(
    clap::ValueEnum,
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Table.
    #[default]
    Table,
    /// JSON.
    Json,
}

impl OutputFormat {
    /// Display a serializable item.
    pub fn display_one(&self, item: impl Serialize) -> eyre::Result<String> {
        let map = to_map(item)?;
        match self {
            Self::Json => Ok(serde_json::to_string_pretty(&map)?),
            Self::Table => {
                let mut flat = Map::new();
                flatten_json(&map, None, &mut flat);
                let mut table = Table::new();
                table.set_format(table_format());
                table.set_titles(row!["Key", "Value"]);
                for (k, v) in &flat {
                    table.add_row(row![k, json_value_to_cell(v)]);
                }
                Ok(table.to_string())
            }
        }
    }
}

fn to_map(item: impl Serialize) -> eyre::Result<Map<String, Value>> {
    let Value::Object(map) = serde_json::to_value(item)? else {
        eyre::bail!("internal: only map-like structures are supported");
    };
    Ok(map)
}

fn table_format() -> TableFormat {
    FormatBuilder::new()
        .padding(0, 2)
        .separator(LinePosition::Title, LineSeparator::new('-', '+', '+', '+'))
        .build()
}

fn json_value_to_cell(value: &Value) -> Cell {
    let content = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "".to_string(),
        other => other.to_string(),
    };

    Cell::new(&content)
}

/// Flatten a nested JSON object into a flat map with `.`-joined keys.
fn flatten_json(map: &Map<String, Value>, prefix: Option<String>, out: &mut Map<String, Value>) {
    for (key, value) in map {
        let full_key = match &prefix {
            Some(p) => format!("{p}.{key}"),
            None => key.to_string(),
        };

        match value {
            Value::Object(obj) => flatten_json(obj, Some(full_key), out),
            _ => {
                out.insert(full_key, value.clone());
            }
        }
    }
}
