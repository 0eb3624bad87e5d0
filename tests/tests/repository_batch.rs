use pretty_assertions::assert_eq;
use quarry::stmt::Value;
use tests::*;

#[derive(Debug, Clone, quarry::Model)]
struct Item {
    #[key]
    #[auto]
    id: i64,

    label: String,

    price: f64,
}

fn items() -> Vec<Item> {
    vec![
        Item {
            id: 1,
            label: "bolt".to_string(),
            price: 0.25,
        },
        Item {
            id: 2,
            label: "nut".to_string(),
            price: 0.1,
        },
    ]
}

#[tokio::test]
async fn insert_many_is_one_round_trip() {
    let (db, mut log) = setup(models!(Item));

    let count = db.repository::<Item>().insert_many(&items()).await.unwrap();
    assert_eq!(count, 2);
    assert_eq!(log.len(), 1);

    let stmt = log.pop_statement();
    assert_eq!(
        stmt.text,
        "INSERT Item (label, price) VALUES (@label_0, @price_0);\n\
         INSERT Item (label, price) VALUES (@label_1, @price_1)"
    );
    assert_eq!(
        stmt.param_names().collect::<Vec<_>>(),
        ["@label_0", "@price_0", "@label_1", "@price_1"]
    );
    assert_eq!(stmt.param("@label_1"), Some(&Value::from("nut")));
}

#[tokio::test]
async fn update_many_and_delete_many() {
    let (db, mut log) = setup(models!(Item));
    let repo = db.repository::<Item>();

    assert_eq!(repo.update_many(&items()).await.unwrap(), 2);
    assert_eq!(
        log.pop_statement().text,
        "UPDATE Item SET label = @label_0, price = @price_0 WHERE id = @id_0;\n\
         UPDATE Item SET label = @label_1, price = @price_1 WHERE id = @id_1"
    );

    assert_eq!(repo.delete_many(&items()).await.unwrap(), 2);
    let stmt = log.pop_statement();
    assert_eq!(
        stmt.text,
        "DELETE FROM Item WHERE id = @id_0;\nDELETE FROM Item WHERE id = @id_1"
    );
    assert_eq!(stmt.param("@id_1"), Some(&Value::I64(2)));
}

#[tokio::test]
async fn empty_batches_skip_the_connection() {
    let (db, log) = setup(models!(Item));
    let repo = db.repository::<Item>();

    assert_eq!(repo.insert_many(&[]).await.unwrap(), 0);
    assert_eq!(repo.update_many(&[]).await.unwrap(), 0);
    assert_eq!(repo.delete_many(&[]).await.unwrap(), 0);

    assert!(log.is_empty());
}

#[tokio::test]
async fn batch_count_comes_from_the_connection() {
    let (db, log) = setup(models!(Item));
    log.respond(quarry::driver::Response::count(1));

    let count = db.repository::<Item>().delete_many(&items()).await.unwrap();

    assert_eq!(count, 1);
    assert_eq!(log.count(|op| op.is_execute()), 1);
}
