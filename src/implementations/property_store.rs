use chrono::Utc;
use log::{ debug, error, info, warn };

use crate::errors::{ CalcEstateError, CalcResult };
use crate::models::property::{ validate_color, DataField, FieldType, Property };
use crate::models::ratio::RatioDefinition;
use crate::traits::storage::KeyValueStorage;

/// Storage key of the properties document
pub const PROPERTIES_KEY: &str = "@calcestate_properties";

/// Owner of the property collection.
///
/// The full list is loaded once when the store is opened. Every mutation goes
/// through [`PropertyStore::replace`], which rewrites the whole persisted
/// document; there is no partial persistence. A failed write is logged and the
/// in-memory list stays authoritative for the rest of the session.
pub struct PropertyStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    properties: Vec<Property>,
}

impl<S: KeyValueStorage> PropertyStore<S> {
    /// Open the store under the default key and load the persisted list
    pub async fn open(storage: S) -> Self {
        Self::open_with_key(storage, PROPERTIES_KEY).await
    }

    pub async fn open_with_key(storage: S, key: &str) -> Self {
        let mut store = Self {
            storage,
            key: key.to_string(),
            properties: Vec::new(),
        };
        store.properties = store.load().await;
        info!("Loaded {} properties from {}", store.properties.len(), store.key);
        store
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn get(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Read the persisted list. Absent or unreadable documents load as empty.
    pub async fn load(&self) -> Vec<Property> {
        let json = match self.storage.get_item(&self.key).await {
            Ok(Some(json)) => json,
            Ok(None) => {
                return Vec::new();
            }
            Err(e) => {
                warn!("Error loading properties: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Property>>(&json) {
            Ok(properties) => properties,
            Err(e) => {
                warn!("Error loading properties, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Write `properties` in full. Returns whether the write landed; failures are only logged.
    pub async fn save(&self, properties: &[Property]) -> bool {
        let json = match serde_json::to_string(properties) {
            Ok(json) => json,
            Err(e) => {
                error!("Error saving properties: {}", e);
                return false;
            }
        };
        match self.storage.set_item(&self.key, &json).await {
            Ok(()) => {
                debug!("Saved {} properties", properties.len());
                true
            }
            Err(e) => {
                error!("Error saving properties: {}", e);
                false
            }
        }
    }

    /// Apply `transform` to the current list, persist the result and adopt it.
    /// Returns whether the persisted copy was updated.
    pub async fn replace<F>(&mut self, transform: F) -> bool
        where F: FnOnce(Vec<Property>) -> Vec<Property>
    {
        let updated = transform(std::mem::take(&mut self.properties));
        let persisted = self.save(&updated).await;
        self.properties = updated;
        persisted
    }

    /// Create a property and insert it at the front of the list
    pub async fn create_property(&mut self, name: &str, color: &str) -> CalcResult<Property> {
        require_non_blank(name, "Property name")?;
        validate_color(color)?;

        let now = Utc::now().timestamp_millis();
        let property = Property {
            id: self.next_property_id(now),
            name: name.to_string(),
            color: color.to_string(),
            created_at: now,
            data_fields: Vec::new(),
        };

        info!("Creating property {} ({})", property.name, property.id);
        let created = property.clone();
        self.replace(move |mut properties| {
            properties.insert(0, created);
            properties
        }).await;
        Ok(property)
    }

    /// Rename and recolor a property in place
    pub async fn update_property(&mut self, id: &str, name: &str, color: &str) -> CalcResult<()> {
        require_non_blank(name, "Property name")?;
        validate_color(color)?;
        self.require_property(id)?;

        info!("Updating property {}", id);
        self.replace(|properties| {
            properties
                .into_iter()
                .map(|mut p| {
                    if p.id == id {
                        p.name = name.to_string();
                        p.color = color.to_string();
                    }
                    p
                })
                .collect()
        }).await;
        Ok(())
    }

    /// Remove the property with `id`. Returns false if there was none.
    pub async fn delete_property(&mut self, id: &str) -> bool {
        if self.get(id).is_none() {
            debug!("Delete requested for unknown property {}", id);
            return false;
        }
        info!("Deleting property {}", id);
        self.replace(|properties| {
            properties
                .into_iter()
                .filter(|p| p.id != id)
                .collect()
        }).await;
        true
    }

    /// Append a data field to a property
    pub async fn add_field(
        &mut self,
        property_id: &str,
        label: &str,
        value: &str,
        field_type: FieldType
    ) -> CalcResult<DataField> {
        require_non_blank(label, "Field label")?;
        field_type.validate(value)?;
        let property = self.require_property(property_id)?;

        let field = DataField {
            id: next_field_id(property, Utc::now().timestamp_millis()),
            label: label.to_string(),
            value: value.to_string(),
            field_type,
        };

        debug!("Adding field {} to property {}", field.id, property_id);
        self.append_field(property_id, field.clone()).await;
        Ok(field)
    }

    /// Remove one field from a property
    pub async fn delete_field(&mut self, property_id: &str, field_id: &str) -> CalcResult<()> {
        let property = self.require_property(property_id)?;
        if property.field(field_id).is_none() {
            return Err(CalcEstateError::FieldNotFound {
                property_id: property_id.to_string(),
                field_id: field_id.to_string(),
            });
        }

        debug!("Deleting field {} from property {}", field_id, property_id);
        self.replace(|properties| {
            properties
                .into_iter()
                .map(|mut p| {
                    if p.id == property_id {
                        p.data_fields.retain(|f| f.id != field_id);
                    }
                    p
                })
                .collect()
        }).await;
        Ok(())
    }

    /// Save a calculator result onto a property as a number field.
    /// Zero and NaN results are refused: there is nothing meaningful to save.
    pub async fn save_ratio_result(
        &mut self,
        property_id: &str,
        ratio: &RatioDefinition,
        result: f64
    ) -> CalcResult<DataField> {
        if result == 0.0 || !result.is_finite() {
            return Err(
                CalcEstateError::InvalidInput(format!("No result to save for {}", ratio.title))
            );
        }
        let property = self.require_property(property_id)?;

        let field = DataField {
            id: next_field_id(property, Utc::now().timestamp_millis()),
            label: ratio.result_label(),
            value: format!("{:.2}", result),
            field_type: FieldType::Number,
        };

        info!("Saving {} to property {}", field.label, property_id);
        self.append_field(property_id, field.clone()).await;
        Ok(field)
    }

    async fn append_field(&mut self, property_id: &str, field: DataField) {
        self.replace(move |properties| {
            properties
                .into_iter()
                .map(|mut p| {
                    if p.id == property_id {
                        p.data_fields.push(field.clone());
                    }
                    p
                })
                .collect()
        }).await;
    }

    fn require_property(&self, id: &str) -> CalcResult<&Property> {
        self.get(id).ok_or_else(|| CalcEstateError::PropertyNotFound(id.to_string()))
    }

    // Timestamp ids collide when two are made within one millisecond; bump until free.
    fn next_property_id(&self, now_millis: i64) -> String {
        let mut candidate = now_millis;
        while self.get(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        candidate.to_string()
    }
}

fn next_field_id(property: &Property, now_millis: i64) -> String {
    let mut candidate = now_millis;
    loop {
        let id = format!("{}-{}", property.id, candidate);
        if property.field(&id).is_none() {
            return id;
        }
        candidate += 1;
    }
}

fn require_non_blank(value: &str, what: &str) -> CalcResult<()> {
    if value.trim().is_empty() {
        Err(CalcEstateError::InvalidInput(format!("{} must not be empty", what)))
    } else {
        Ok(())
    }
}
