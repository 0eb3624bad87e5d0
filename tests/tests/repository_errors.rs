use quarry::{
    driver::Response,
    stmt::{Expr, GeneratedStatement, Row},
    Error,
};
use tests::*;

#[derive(Debug, Clone, quarry::Model)]
struct Log {
    message: String,
}

#[derive(Debug, Clone, quarry::Model)]
struct User {
    #[key]
    id: i32,

    name: Option<String>,
}

#[tokio::test]
async fn keyless_update_and_delete_are_refused() {
    let (db, log) = setup(models!(Log));
    let repo = db.repository::<Log>();
    let log_entry = Log {
        message: "hello".to_string(),
    };

    let err = repo.update(&log_entry).await.unwrap_err();
    assert!(err.is_no_key_defined());
    assert!(err.to_string().contains("update()"));

    assert!(repo.delete(&log_entry).await.unwrap_err().is_no_key_defined());
    assert!(repo
        .update_many(&[log_entry.clone()])
        .await
        .unwrap_err()
        .is_no_key_defined());

    assert!(log.is_empty());
}

#[tokio::test]
async fn keyless_empty_batches_are_no_ops() {
    let (db, log) = setup(models!(Log));
    let repo = db.repository::<Log>();

    assert_eq!(repo.update_many(&[]).await.unwrap(), 0);
    assert_eq!(repo.delete_many(&[]).await.unwrap(), 0);

    assert!(log.is_empty());
}

#[tokio::test]
async fn keyless_insert_and_select_are_allowed() {
    let (db, log) = setup(models!(Log));
    let repo = db.repository::<Log>();

    repo.insert(&Log {
        message: "hello".to_string(),
    })
    .await
    .unwrap();
    repo.get_many(None).await.unwrap();

    assert!(log.has_execute());
    assert!(log.has_query());
}

#[tokio::test]
async fn update_with_nothing_to_set() {
    let (db, log) = setup(models!(User));

    let err = db
        .repository::<User>()
        .update(&User { id: 1, name: None })
        .await
        .unwrap_err();

    assert!(err.is_invalid_statement());
    assert!(log.is_empty());
}

#[tokio::test]
async fn connection_errors_are_returned_unchanged() {
    let (db, log) = setup(models!(User));
    log.fail(Error::driver_operation_failed(std::io::Error::new(
        std::io::ErrorKind::ConnectionReset,
        "connection reset",
    )));

    let err = db
        .repository::<User>()
        .insert(&User {
            id: 1,
            name: Some("a".to_string()),
        })
        .await
        .unwrap_err();

    assert!(err.is_driver_operation_failed());
    assert_eq!(err.to_string(), "connection reset");
}

#[tokio::test]
async fn unexpected_response_shape() {
    let (db, log) = setup(models!(User));
    log.respond(Response::count(1));

    let err = db.repository::<User>().get_many(None).await.unwrap_err();
    assert!(err.is_invalid_result());
}

#[tokio::test]
async fn unknown_field_in_filter() {
    let (db, log) = setup(models!(User));

    let err = db
        .repository::<User>()
        .get_many(Some(Expr::eq(Expr::field("email"), "x")))
        .await
        .unwrap_err();

    assert!(err.is_unknown_field());
    assert!(log.is_empty());
}

#[tokio::test]
async fn load_reports_type_conversion() {
    let (db, log) = setup(models!(User));
    log.respond_rows([Row::new().with("id", "not a number")]);

    let err = db
        .repository::<User>()
        .get_many_sql(GeneratedStatement::new("SELECT * FROM User"))
        .await
        .unwrap_err();

    assert!(err.is_type_conversion());
    assert!(err.to_string().starts_with("loading `id`"));
}
