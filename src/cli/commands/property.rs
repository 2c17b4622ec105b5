use anyhow::{ anyhow, Result };
use chrono::Utc;

use calcestate::errors::CalcEstateError;
use calcestate::implementations::property_store::PropertyStore;
use calcestate::models::property::{ COLOR_PALETTE, DEFAULT_COLOR };
use calcestate::traits::storage::KeyValueStorage;

use crate::cli::ui;

pub fn list<S: KeyValueStorage>(store: &PropertyStore<S>, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(store.properties())?);
        return Ok(());
    }

    ui::print_header("Properties");
    if store.properties().is_empty() {
        ui::print_info("No properties yet. Create one with `calcestate property create <name>`.");
        return Ok(());
    }
    let now = Utc::now().timestamp_millis();
    for property in store.properties() {
        ui::print_property_line(property, now);
    }
    Ok(())
}

pub fn show<S: KeyValueStorage>(store: &PropertyStore<S>, id: &str, json: bool) -> Result<()> {
    let property = store.get(id).ok_or_else(|| CalcEstateError::PropertyNotFound(id.to_string()))?;
    if json {
        println!("{}", serde_json::to_string_pretty(property)?);
    } else {
        ui::print_property_detail(property, Utc::now().timestamp_millis());
    }
    Ok(())
}

pub async fn create<S: KeyValueStorage>(
    store: &mut PropertyStore<S>,
    name: &str,
    color: Option<&str>
) -> Result<()> {
    let color = resolve_color(color.unwrap_or(DEFAULT_COLOR))?;
    let property = store.create_property(name, &color).await?;
    ui::print_success(&format!("Created {} ({})", property.name, property.id));
    Ok(())
}

pub async fn update<S: KeyValueStorage>(
    store: &mut PropertyStore<S>,
    id: &str,
    name: Option<&str>,
    color: Option<&str>
) -> Result<()> {
    let current = store.get(id).ok_or_else(|| CalcEstateError::PropertyNotFound(id.to_string()))?;
    let name = name.map(str::to_string).unwrap_or_else(|| current.name.clone());
    let color = match color {
        Some(c) => resolve_color(c)?,
        None => current.color.clone(),
    };
    store.update_property(id, &name, &color).await?;
    ui::print_success(&format!("Updated {}", name));
    Ok(())
}

pub async fn delete<S: KeyValueStorage>(
    store: &mut PropertyStore<S>,
    id: &str,
    skip_confirm: bool
) -> Result<()> {
    let property = store.get(id).ok_or_else(|| CalcEstateError::PropertyNotFound(id.to_string()))?;
    let name = property.name.clone();

    if !skip_confirm {
        let prompt = format!(
            "Delete {} and its {} field(s)?",
            name,
            property.data_fields.len()
        );
        if !ui::confirm_action(&prompt)? {
            ui::print_info("Nothing deleted");
            return Ok(());
        }
    }

    store.delete_property(id).await;
    ui::print_success(&format!("Deleted {}", name));
    Ok(())
}

/// Accept either a palette number (1-8) or a hex color
fn resolve_color(color: &str) -> Result<String> {
    if let Ok(index) = color.parse::<usize>() {
        return COLOR_PALETTE.get(index.wrapping_sub(1))
            .map(|c| c.to_string())
            .ok_or_else(|| anyhow!("Palette colors are numbered 1-{}", COLOR_PALETTE.len()));
    }
    Ok(color.to_uppercase())
}
