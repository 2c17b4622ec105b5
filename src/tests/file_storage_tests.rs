#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use crate::implementations::favorites::FavoritesStore;
    use crate::implementations::file_storage::JsonFileStorage;
    use crate::implementations::property_store::{ PropertyStore, PROPERTIES_KEY };
    use crate::models::property::FieldType;
    use crate::tests::setup;
    use crate::traits::storage::KeyValueStorage;

    #[test]
    fn keys_map_to_sanitized_json_files() {
        let storage = JsonFileStorage::new("/data");
        assert!(storage.path_for(PROPERTIES_KEY).ends_with("calcestate_properties.json"));
        assert!(storage.path_for("likedRatios").ends_with("likedRatios.json"));
        assert!(storage.path_for("a/b c").ends_with("a_b_c.json"));
        assert!(storage.path_for("@@").ends_with("default.json"));
    }

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let storage = JsonFileStorage::new(dir.path());
        assert_eq!(storage.get_item("nothing").await.unwrap(), None);
        assert!(storage.remove_item("nothing").await.is_ok());
    }

    #[tokio::test]
    async fn set_creates_the_data_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("nested").join("data");
        let storage = JsonFileStorage::new(&nested);

        storage.set_item("likedRatios", "[1,2]").await.unwrap();

        assert!(nested.join("likedRatios.json").exists());
        assert_eq!(storage.get_item("likedRatios").await.unwrap().as_deref(), Some("[1,2]"));

        storage.remove_item("likedRatios").await.unwrap();
        assert_eq!(storage.get_item("likedRatios").await.unwrap(), None);
    }

    #[tokio::test]
    async fn stores_survive_reopening() {
        setup();
        let dir = TempDir::new().unwrap();

        let property_id = {
            let mut store = PropertyStore::open(JsonFileStorage::new(dir.path())).await;
            let property = store.create_property("Duplex", "#8B5CF6").await.unwrap();
            store.add_field(&property.id, "Units", "2", FieldType::Number).await.unwrap();

            let mut favorites = FavoritesStore::open(JsonFileStorage::new(dir.path())).await;
            favorites.toggle(9).await.unwrap();
            property.id
        };

        let reopened = PropertyStore::open(JsonFileStorage::new(dir.path())).await;
        let property = reopened.get(&property_id).expect("property persisted");
        assert_eq!(property.name, "Duplex");
        assert_eq!(property.data_fields[0].label, "Units");

        let favorites = FavoritesStore::open(JsonFileStorage::new(dir.path())).await;
        assert_eq!(favorites.liked(), vec![9]);
    }

    #[tokio::test]
    async fn unwritable_directory_is_reported_by_storage_but_not_by_the_store() {
        setup();
        let dir = TempDir::new().unwrap();
        // A regular file where the data directory should be
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        let storage = JsonFileStorage::new(&blocker);

        assert!(storage.set_item(PROPERTIES_KEY, "[]").await.is_err());

        let mut store = PropertyStore::open(storage).await;
        let created = store.create_property("Duplex", "#6366F1").await.unwrap();
        assert_eq!(store.properties()[0].id, created.id);
    }
}
