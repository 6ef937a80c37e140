use serde::Serialize;

use crate::cli::OutputFormat;

pub mod table;

pub use table::Tabular;

/// Render a response to a string in the requested format.
pub fn render<T>(value: &T, format: OutputFormat) -> anyhow::Result<String>
where
    T: Serialize + Tabular + ?Sized,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(table::render_table(value)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a response in the requested format.
pub fn output<T>(value: &T, format: OutputFormat) -> anyhow::Result<()>
where
    T: Serialize + Tabular + ?Sized,
{
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}
