use super::*;

#[test]
fn initial_is_first_character_of_name() {
    let user = User { name: "Demo User".into(), ..User::default() };
    assert_eq!(user.initial(), "D");
    assert_eq!(User::default().initial(), "");
}

#[test]
fn user_omits_absent_optional_fields() {
    let user = User { id: "1".into(), name: "Demo User".into(), ..User::default() };
    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("phone").is_none());
    assert!(json.get("provider").is_none());
    assert_eq!(json["is_new_user"], false);
}

#[test]
fn user_deserializes_without_optional_fields() {
    let user: User =
        serde_json::from_str(r#"{"id":"1","name":"A","email":"a@b.c","avatar":""}"#).unwrap();
    assert_eq!(user.phone, None);
    assert!(!user.is_new_user);
}

#[test]
fn provider_labels() {
    let labels: Vec<_> = OAuthProvider::ALL.iter().map(|p| p.label()).collect();
    assert_eq!(labels, ["Google", "Facebook"]);
}
