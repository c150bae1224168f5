use labkit_core::{KeyValueStore, MemoryKeyValueStore, Route, RouteAddress, UserProfile};

#[test]
fn profile_roundtrips_through_the_store() {
    let mut store = MemoryKeyValueStore::new();
    let profile = UserProfile {
        phone: "+7 900 123-45-67".to_string(),
        first_name: "Иван".to_string(),
        last_name: "Петров".to_string(),
    };
    profile.save(&mut store);

    assert_eq!(UserProfile::load(&store), profile);
}

#[test]
fn missing_keys_load_as_empty_unregistered_profile() {
    let store = MemoryKeyValueStore::new();
    let profile = UserProfile::load(&store);
    assert_eq!(profile, UserProfile::default());
    assert!(!profile.is_registered());
}

#[test]
fn registration_requires_all_three_fields() {
    let mut profile = UserProfile {
        phone: "+7 900 000-00-00".to_string(),
        first_name: "Анна".to_string(),
        last_name: "Иванова".to_string(),
    };
    assert!(profile.is_registered());

    profile.last_name.clear();
    assert!(!profile.is_registered());
}

#[test]
fn saving_again_overwrites_previous_values() {
    let mut store = MemoryKeyValueStore::new();
    UserProfile {
        phone: "1".to_string(),
        first_name: "a".to_string(),
        last_name: "b".to_string(),
    }
    .save(&mut store);

    let updated = UserProfile {
        phone: "2".to_string(),
        first_name: "a".to_string(),
        last_name: "b".to_string(),
    };
    updated.save(&mut store);

    assert_eq!(UserProfile::load(&store), updated);
}

#[test]
fn route_roundtrips_and_reports_completeness() {
    let mut store = MemoryKeyValueStore::new();
    let route = Route {
        start: RouteAddress {
            street: "Ленина".to_string(),
            house: "10".to_string(),
            apartment: "5".to_string(),
        },
        end: RouteAddress {
            street: "Мира".to_string(),
            house: "3".to_string(),
            apartment: "12".to_string(),
        },
    };
    assert!(route.is_complete());
    route.save(&mut store);

    assert_eq!(Route::load(&store), route);
}

#[test]
fn route_without_streets_is_incomplete() {
    let route = Route::default();
    assert!(!route.is_complete());
}

#[test]
fn route_summary_uses_the_original_wording() {
    let route = Route {
        start: RouteAddress {
            street: "Ленина".to_string(),
            house: "10".to_string(),
            apartment: "5".to_string(),
        },
        end: RouteAddress {
            street: "Мира".to_string(),
            house: "3".to_string(),
            apartment: "12".to_string(),
        },
    };
    assert_eq!(
        route.summary(),
        "От: Ленина, д. 10, кв. 5\nДо: Мира, д. 3, кв. 12"
    );
}

#[test]
fn profile_and_route_share_one_store_without_key_collisions() {
    let mut store = MemoryKeyValueStore::new();
    UserProfile {
        phone: "p".to_string(),
        first_name: "f".to_string(),
        last_name: "l".to_string(),
    }
    .save(&mut store);
    Route {
        start: RouteAddress {
            street: "s".to_string(),
            ..RouteAddress::default()
        },
        end: RouteAddress {
            street: "e".to_string(),
            ..RouteAddress::default()
        },
    }
    .save(&mut store);

    assert_eq!(store.len(), 9);
    assert!(UserProfile::load(&store).is_registered());
    assert!(Route::load(&store).is_complete());
    assert_eq!(store.get("phone").as_deref(), Some("p"));
}
