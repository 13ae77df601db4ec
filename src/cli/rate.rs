use super::ui;
use crate::client::ExchangeClient;
use crate::core::ExchangeError;
use anyhow::Result;

/// Renders the last stored rate as a table followed by its two-line summary.
pub fn render_rate(client: &ExchangeClient) -> Result<String, ExchangeError> {
    let result = client.last_result()?;

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Pair"),
        ui::header_cell("Rate"),
        ui::header_cell("Date"),
    ]);
    table.add_row(vec![
        format!("{}/{}", result.from, result.to),
        format!("{:.6}", result.rate),
        result.date.clone(),
    ]);
    table.add_row(vec![
        format!("{}/{}", result.to, result.from),
        format!("{:.6}", result.inverse_rate),
        result.date.clone(),
    ]);

    Ok(format!(
        "{}\n\n{}\n\n{}",
        ui::style_text(&format!("{} → {}", result.from, result.to), ui::StyleType::Title),
        table,
        client.last_result_summary()?
    ))
}

pub async fn run(client: &mut ExchangeClient, from: &str, to: &str) -> Result<()> {
    client.get_rate(from, to).await?;
    println!("{}", render_rate(client)?);
    Ok(())
}
