use super::ui;
use crate::client::ExchangeClient;
use crate::core::ExchangeError;
use comfy_table::Cell;

/// Renders the catalog as a table of code, name and numeric code.
pub fn render_catalog(client: &ExchangeClient) -> Result<String, ExchangeError> {
    if client.catalog().is_empty() {
        return Err(ExchangeError::EmptyCatalog);
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Code"),
        ui::header_cell("Name"),
        ui::header_cell("Numeric"),
    ]);
    for currency in client.catalog().iter() {
        table.add_row(vec![
            Cell::new(&currency.code),
            Cell::new(&currency.name),
            Cell::new(&currency.numeric_code),
        ]);
    }

    Ok(format!(
        "{}\n\n{}\n\n{} currencies",
        ui::style_text("Known currencies", ui::StyleType::Title),
        table,
        client.catalog().len()
    ))
}

pub fn display_catalog(client: &ExchangeClient) -> Result<(), ExchangeError> {
    println!("{}", render_catalog(client)?);
    Ok(())
}

pub fn check(client: &ExchangeClient, code: &str) -> String {
    let code = code.to_uppercase();
    if !client.code_exists(&code) {
        return ui::style_text(
            &format!("{code} is not a known currency"),
            ui::StyleType::Error,
        );
    }

    let name = client
        .catalog()
        .get(&code)
        .map_or("", |currency| currency.name.as_str());
    format!("{} : {}", ui::style_text(&code, ui::StyleType::Value), name)
}
