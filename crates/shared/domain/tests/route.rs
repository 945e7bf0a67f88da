use shelf_domain::route::{ContentKey, RouteDescriptor, RouteEntry};

#[test]
fn descriptor_borrows_static_entry() {
    let entry = RouteEntry::new(2, "/perfil", "Perfil", "profile");
    let descriptor = RouteDescriptor::from(entry);

    assert_eq!(descriptor.id, 2);
    assert_eq!(descriptor.path, "/perfil");
    assert_eq!(descriptor.name, "Perfil");
    assert_eq!(descriptor.content, ContentKey::from("profile"));
}

#[test]
fn content_key_is_transparent_in_json() {
    let key = ContentKey::from("stock".to_owned());
    assert_eq!(key.to_string(), "stock");
    assert_eq!(serde_json::to_value(&key).expect("serialize"), serde_json::json!("stock"));
}
