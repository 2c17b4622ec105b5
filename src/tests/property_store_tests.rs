#[cfg(test)]
mod tests {
    use tokio::test;

    use crate::errors::CalcEstateError;
    use crate::implementations::catalog;
    use crate::implementations::memory_storage::MemoryStorage;
    use crate::implementations::property_store::{ PropertyStore, PROPERTIES_KEY };
    use crate::models::property::{ DataField, FieldType, Property };
    use crate::tests::{ setup, ReadOnlyStorage, UnreadableStorage };
    use crate::traits::storage::KeyValueStorage;

    fn sample_property(id: &str, name: &str, fields: usize) -> Property {
        Property {
            id: id.to_string(),
            name: name.to_string(),
            color: "#10B981".to_string(),
            created_at: 1_700_000_000_000,
            data_fields: (0..fields)
                .map(|i| DataField {
                    id: format!("{}-{}", id, 1_700_000_000_100 + (i as i64)),
                    label: format!("Field {}", i),
                    value: format!("{}", i * 10),
                    field_type: FieldType::Number,
                })
                .collect(),
        }
    }

    async fn store_with(properties: &[Property]) -> PropertyStore<MemoryStorage> {
        let json = serde_json::to_string(properties).unwrap();
        PropertyStore::open(MemoryStorage::with_item(PROPERTIES_KEY, &json)).await
    }

    #[test]
    async fn opens_empty_when_nothing_is_stored() {
        setup();
        let store = PropertyStore::open(MemoryStorage::new()).await;
        assert!(store.properties().is_empty());
    }

    #[test]
    async fn load_after_save_round_trips() {
        setup();
        let store = PropertyStore::open(MemoryStorage::new()).await;
        let properties = vec![
            sample_property("1", "Duplex", 2),
            sample_property("2", "Condo", 0),
            sample_property("3", "Cabin", 1)
        ];

        assert!(store.save(&properties).await);
        assert_eq!(store.load().await, properties);
    }

    #[test]
    async fn corrupt_document_loads_as_empty() {
        setup();
        let storage = MemoryStorage::with_item(PROPERTIES_KEY, "{not json");
        let store = PropertyStore::open(storage).await;
        assert!(store.properties().is_empty());
    }

    #[test]
    async fn unreadable_storage_loads_as_empty() {
        setup();
        let store = PropertyStore::open(UnreadableStorage).await;
        assert!(store.properties().is_empty());
    }

    #[test]
    async fn reads_documents_written_by_earlier_sessions() {
        let legacy =
            r##"[{"id":"1700000000000","name":"Duplex","color":"#EF4444","createdAt":1700000000000,"dataFields":[{"id":"1700000000000-1700000000500","label":"Gross Rental Yield Result","value":"6.00","type":"number"},{"id":"1700000000000-1700000000900","label":"Has garage","value":"true","type":"boolean"}]}]"##;
        let store = PropertyStore::open(MemoryStorage::with_item(PROPERTIES_KEY, legacy)).await;

        let property = store.get("1700000000000").expect("legacy property loaded");
        assert_eq!(property.name, "Duplex");
        assert_eq!(property.data_fields.len(), 2);
        assert_eq!(property.data_fields[1].field_type, FieldType::Boolean);

        // Writing it back keeps the exact document shape
        assert!(store.save(store.properties()).await);
        let written = store.storage().get_item(PROPERTIES_KEY).await.unwrap().unwrap();
        let written: serde_json::Value = serde_json::from_str(&written).unwrap();
        let original: serde_json::Value = serde_json::from_str(legacy).unwrap();
        assert_eq!(written, original);
    }

    #[test]
    async fn replace_persists_and_adopts_the_result() {
        let mut store = store_with(&[sample_property("1", "Duplex", 0)]).await;

        let persisted = store.replace(|mut properties| {
            properties.push(sample_property("2", "Condo", 0));
            properties
        }).await;

        assert!(persisted);
        assert_eq!(store.properties().len(), 2);
        assert_eq!(store.load().await, store.properties().to_vec());
    }

    #[test]
    async fn failed_write_keeps_in_memory_state() {
        setup();
        let json = serde_json::to_string(&[sample_property("1", "Duplex", 0)]).unwrap();
        let mut store = PropertyStore::open(ReadOnlyStorage { contents: Some(json) }).await;

        let persisted = store.replace(|properties| {
            properties
                .into_iter()
                .map(|mut p| {
                    p.name = "Renamed".to_string();
                    p
                })
                .collect()
        }).await;

        assert!(!persisted);
        assert_eq!(store.properties()[0].name, "Renamed");

        let created = store.create_property("Condo", "#EF4444").await;
        assert!(created.is_ok());
        assert_eq!(store.properties().len(), 2);
    }

    #[test]
    async fn create_property_prepends_and_persists() {
        let mut store = store_with(&[sample_property("1", "Duplex", 0)]).await;

        let created = store.create_property("Beach House", "#F59E0B").await.unwrap();

        assert_eq!(store.properties()[0], created);
        assert_eq!(store.properties()[1].id, "1");
        assert_eq!(created.id, created.created_at.to_string());
        assert!(created.data_fields.is_empty());
        assert_eq!(store.load().await, store.properties().to_vec());
    }

    #[test]
    async fn property_ids_stay_unique_when_created_back_to_back() {
        let mut store = PropertyStore::open(MemoryStorage::new()).await;
        for i in 0..20 {
            store.create_property(&format!("Unit {}", i), "#6366F1").await.unwrap();
        }

        let mut ids: Vec<&str> = store
            .properties()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    async fn create_property_rejects_blank_name_and_bad_color() {
        let mut store = PropertyStore::open(MemoryStorage::new()).await;

        let blank = store.create_property("   ", "#6366F1").await;
        assert!(matches!(blank, Err(CalcEstateError::InvalidInput(_))));

        let bad_color = store.create_property("Duplex", "blue").await;
        assert!(matches!(bad_color, Err(CalcEstateError::InvalidInput(_))));

        assert!(store.properties().is_empty());
    }

    #[test]
    async fn update_property_renames_and_recolors_in_place() {
        let mut store = store_with(
            &[sample_property("1", "Duplex", 1), sample_property("2", "Condo", 0)]
        ).await;

        store.update_property("2", "Downtown Condo", "#EC4899").await.unwrap();

        let updated = store.get("2").unwrap();
        assert_eq!(updated.name, "Downtown Condo");
        assert_eq!(updated.color, "#EC4899");
        assert_eq!(store.properties()[1].id, "2");
        assert_eq!(store.get("1").unwrap(), &sample_property("1", "Duplex", 1));

        let missing = store.update_property("9", "Ghost", "#EC4899").await;
        assert!(matches!(missing, Err(CalcEstateError::PropertyNotFound(_))));
    }

    #[test]
    async fn delete_property_removes_exactly_the_matching_entry() {
        let mut store = store_with(
            &[
                sample_property("1", "Duplex", 0),
                sample_property("2", "Condo", 2),
                sample_property("3", "Cabin", 0),
                sample_property("4", "Loft", 1),
            ]
        ).await;

        assert!(store.delete_property("2").await);

        let ids: Vec<&str> = store
            .properties()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3", "4"]);
        assert_eq!(store.load().await.len(), 3);

        assert!(!store.delete_property("2").await);
        assert_eq!(store.properties().len(), 3);
    }

    #[test]
    async fn add_field_appends_and_leaves_other_properties_alone() {
        let before = vec![
            sample_property("1", "Duplex", 2),
            sample_property("2", "Condo", 1)
        ];
        let mut store = store_with(&before).await;

        let field = store.add_field("1", "Purchase date", "2023-06-15", FieldType::Date).await.unwrap();

        let property = store.get("1").unwrap();
        assert_eq!(property.data_fields.len(), 3);
        assert_eq!(&property.data_fields[..2], &before[0].data_fields[..]);
        assert_eq!(property.data_fields[2], field);
        assert!(field.id.starts_with("1-"));
        assert_eq!(store.get("2").unwrap(), &before[1]);
        assert_eq!(store.load().await, store.properties().to_vec());
    }

    #[test]
    async fn field_ids_stay_unique_within_a_property() {
        let mut store = store_with(&[sample_property("1", "Duplex", 0)]).await;
        for i in 0..10 {
            store.add_field("1", &format!("Note {}", i), "x", FieldType::Text).await.unwrap();
        }

        let property = store.get("1").unwrap();
        let mut ids: Vec<&str> = property.data_fields
            .iter()
            .map(|f| f.id.as_str())
            .collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    async fn add_field_validates_label_value_and_property() {
        let mut store = store_with(&[sample_property("1", "Duplex", 0)]).await;

        let blank_label = store.add_field("1", " ", "3", FieldType::Number).await;
        assert!(matches!(blank_label, Err(CalcEstateError::InvalidInput(_))));

        let not_a_number = store.add_field("1", "Bedrooms", "three", FieldType::Number).await;
        assert!(matches!(not_a_number, Err(CalcEstateError::InvalidFieldValue { .. })));

        for text in ["NaN", "inf", "Infinity"] {
            let non_finite = store.add_field("1", "Bedrooms", text, FieldType::Number).await;
            assert!(
                matches!(non_finite, Err(CalcEstateError::InvalidFieldValue { .. })),
                "{} accepted",
                text
            );
        }

        let not_a_bool = store.add_field("1", "Pool", "yes", FieldType::Boolean).await;
        assert!(matches!(not_a_bool, Err(CalcEstateError::InvalidFieldValue { .. })));

        let missing = store.add_field("7", "Bedrooms", "3", FieldType::Number).await;
        assert!(matches!(missing, Err(CalcEstateError::PropertyNotFound(_))));

        assert!(store.get("1").unwrap().data_fields.is_empty());
    }

    #[test]
    async fn delete_field_keeps_remaining_order() {
        let mut store = store_with(&[sample_property("1", "Duplex", 4)]).await;
        let doomed = store.get("1").unwrap().data_fields[1].id.clone();

        store.delete_field("1", &doomed).await.unwrap();

        let labels: Vec<&str> = store
            .get("1")
            .unwrap()
            .data_fields.iter()
            .map(|f| f.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Field 0", "Field 2", "Field 3"]);

        let again = store.delete_field("1", &doomed).await;
        assert!(matches!(again, Err(CalcEstateError::FieldNotFound { .. })));
    }

    #[test]
    async fn save_ratio_result_appends_a_number_field() {
        let mut store = store_with(&[sample_property("1", "Duplex", 1)]).await;
        let ratio = catalog::find(1).unwrap();

        let field = store.save_ratio_result("1", ratio, 6.0).await.unwrap();

        assert_eq!(field.label, "Gross Rental Yield Result");
        assert_eq!(field.value, "6.00");
        assert_eq!(field.field_type, FieldType::Number);
        assert_eq!(store.get("1").unwrap().data_fields.last(), Some(&field));
    }

    #[test]
    async fn save_ratio_result_refuses_empty_results() {
        let mut store = store_with(&[sample_property("1", "Duplex", 0)]).await;
        let ratio = catalog::find(3).unwrap();

        assert!(store.save_ratio_result("1", ratio, 0.0).await.is_err());
        assert!(store.save_ratio_result("1", ratio, f64::NAN).await.is_err());
        assert!(store.get("1").unwrap().data_fields.is_empty());
    }

    #[test]
    async fn persisted_document_uses_camel_case_keys() {
        let mut store = PropertyStore::open(MemoryStorage::new()).await;
        let property = store.create_property("Duplex", "#6366F1").await.unwrap();
        store.add_field(&property.id, "Rent", "1500", FieldType::Number).await.unwrap();

        let json = store.storage().get_item(PROPERTIES_KEY).await.unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let first = &value[0];

        assert!(first.get("createdAt").is_some());
        assert!(first.get("dataFields").is_some());
        assert!(first.get("created_at").is_none());
        assert_eq!(first["dataFields"][0]["type"], "number");
        assert_eq!(first["dataFields"][0]["value"], "1500");
    }
}
