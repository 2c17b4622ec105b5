use anyhow::Result;

use calcestate::implementations::property_store::PropertyStore;
use calcestate::models::property::FieldType;
use calcestate::traits::storage::KeyValueStorage;

use crate::cli::ui;

pub async fn add<S: KeyValueStorage>(
    store: &mut PropertyStore<S>,
    property_id: &str,
    label: &str,
    value: &str,
    field_type: &str
) -> Result<()> {
    let field_type: FieldType = field_type.parse()?;
    let field = store.add_field(property_id, label, value, field_type).await?;
    ui::print_success(&format!("Added {} ({})", field.label, field.id));
    Ok(())
}

pub async fn delete<S: KeyValueStorage>(
    store: &mut PropertyStore<S>,
    property_id: &str,
    field_id: &str
) -> Result<()> {
    store.delete_field(property_id, field_id).await?;
    ui::print_success(&format!("Deleted field {}", field_id));
    Ok(())
}
