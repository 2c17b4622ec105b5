use std::collections::HashMap;

use anyhow::{ anyhow, Result };
use log::debug;

use calcestate::catalog;
use calcestate::errors::CalcEstateError;
use calcestate::formulas;
use calcestate::implementations::property_store::PropertyStore;
use calcestate::models::inputs::{
    parse_assignment,
    parse_number_input,
    parse_series_input,
    InputValue,
    RatioInputs,
};
use calcestate::models::ratio::{ RatioDefinition, ResultRating };
use calcestate::traits::storage::KeyValueStorage;

use crate::cli::ui;

/// Calculator command
pub async fn execute<S: KeyValueStorage>(
    store: &mut PropertyStore<S>,
    ratio_id: u32,
    assignments: &[String],
    interactive: bool,
    save_to: Option<&str>,
    json: bool
) -> Result<()> {
    let ratio = catalog::find(ratio_id).ok_or(CalcEstateError::UnknownRatio(ratio_id))?;

    let mut entered: HashMap<String, String> = HashMap::new();
    for arg in assignments {
        let (name, value) = parse_assignment(arg)?;
        if !ratio.inputs.contains(&name.as_str()) {
            return Err(
                anyhow!(
                    "{} does not take an input named {:?}; expected one of: {}",
                    ratio.title,
                    name,
                    ratio.inputs.join(", ")
                )
            );
        }
        entered.insert(name, value);
    }

    if interactive {
        ui::print_header(ratio.title);
        ui::print_result("Formula", ratio.formula);
        for name in ratio.inputs {
            if entered.contains_key(*name) {
                continue;
            }
            let mut prompt = ui::format_input_label(name);
            if ratio.is_series_input(name) {
                prompt.push_str(" (comma-separated)");
            }
            entered.insert(name.to_string(), ui::prompt_input(&prompt)?);
        }
    }

    let inputs = build_inputs(ratio, &entered);
    let result = formulas::evaluate(ratio.id, &inputs);
    debug!("Ratio {} evaluated to {}", ratio.id, result);

    if json {
        let value = if result.is_finite() { Some(result) } else { None };
        let payload = serde_json::json!({
            "id": ratio.id,
            "title": ratio.title,
            "result": value,
            "formatted": ratio.format_result(result),
            "rating": ResultRating::for_result(ratio.id, result).to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        ui::print_calculation(ratio, result);
        if result.is_nan() {
            ui::print_warning("One or more inputs could not be read as a number");
        }
    }

    let target = match save_to {
        Some(id) => Some(id.to_string()),
        None if interactive => choose_property(store, result)?,
        None => None,
    };

    if let Some(property_id) = target {
        let field = store.save_ratio_result(&property_id, ratio, result).await?;
        let name = store
            .get(&property_id)
            .map(|p| p.name.clone())
            .unwrap_or(property_id);
        ui::print_success(&format!("Saved {} = {} to {}", field.label, field.value, name));
    }

    Ok(())
}

/// Every catalog input gets a value: entries left blank count as 0
fn build_inputs(ratio: &RatioDefinition, entered: &HashMap<String, String>) -> RatioInputs {
    let mut inputs = RatioInputs::new();
    for name in ratio.inputs {
        let text = entered.get(*name).map(String::as_str).unwrap_or("");
        let value = if ratio.is_series_input(name) {
            InputValue::Series(parse_series_input(text))
        } else {
            InputValue::Number(parse_number_input(text))
        };
        inputs.set(name, value);
    }
    inputs
}

fn choose_property<S: KeyValueStorage>(
    store: &PropertyStore<S>,
    result: f64
) -> Result<Option<String>> {
    if result == 0.0 || !result.is_finite() || store.properties().is_empty() {
        return Ok(None);
    }
    if !ui::confirm_action("Save this result to a property?")? {
        return Ok(None);
    }
    let choice = ui::select_property(store.properties())?;
    Ok(choice.map(|i| store.properties()[i].id.clone()))
}
