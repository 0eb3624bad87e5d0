use pretty_assertions::assert_eq;
use quarry::stmt::{Row, Value};
use tests::*;

#[derive(Debug, quarry::Model)]
struct Item {
    #[key]
    #[auto]
    id: i32,

    r#type: String,
}

#[tokio::test]
async fn raw_identifier_field_uses_plain_name() {
    let (db, mut log) = setup(models!(Item));
    let repo = db.repository::<Item>();

    repo.insert(&Item {
        id: 0,
        r#type: "bolt".to_string(),
    })
    .await
    .unwrap();

    let stmt = log.pop_statement();
    assert_eq!(stmt.text, "INSERT Item (type) VALUES (@type)");
    assert_eq!(stmt.param("@type"), Some(&Value::from("bolt")));

    log.respond_rows([Row::new().with("id", 1).with("type", "bolt")]);
    let items = repo
        .get_many(Some(Item::fields().r#type().eq("bolt")))
        .await
        .unwrap();

    assert_eq!(
        log.pop_statement().text,
        "SELECT * FROM Item WHERE type = 'bolt'"
    );
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].r#type, "bolt");
}
