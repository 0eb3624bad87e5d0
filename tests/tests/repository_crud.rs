use pretty_assertions::assert_eq;
use quarry::{
    driver::Operation,
    stmt::{Row, Value},
};
use tests::*;

#[derive(Debug, Clone, PartialEq, quarry::Model)]
#[table = "ORT_Test"]
struct Test {
    #[key]
    #[auto]
    my_property: i32,

    #[column("[Name]")]
    name: String,

    age: i32,

    pyh: Option<i32>,
}

fn sam() -> Test {
    Test {
        my_property: 0,
        name: "sam".to_string(),
        age: 30,
        pyh: None,
    }
}

fn row(id: i32, name: &str, age: i32) -> Row {
    Row::new()
        .with("my_property", id)
        .with("[Name]", name)
        .with("age", age)
        .with("pyh", Value::Null)
}

#[tokio::test]
async fn insert_skips_auto_key_and_nulls() {
    let (db, mut log) = setup(models!(Test));

    let count = db.repository::<Test>().insert(&sam()).await.unwrap();
    assert_eq!(count, 1);

    let stmt = log.pop_statement();
    assert_eq!(
        stmt.text,
        "INSERT ORT_Test ([Name], age) VALUES (@name, @age)"
    );
    assert_eq!(stmt.param("@name"), Some(&Value::from("sam")));
    assert_eq!(stmt.param("@age"), Some(&Value::I32(30)));
    assert!(log.is_empty());
}

#[tokio::test]
async fn get_many_on_empty_table() {
    let (db, mut log) = setup(models!(Test));

    let all = db.repository::<Test>().get_many(None).await.unwrap();
    assert!(all.is_empty());

    let (operation, _) = log.pop().unwrap();
    assert!(operation.is_query());
    assert_eq!(operation.statement().text, "SELECT * FROM ORT_Test WHERE 0=0");
}

#[tokio::test]
async fn get_one_with_typed_filter() {
    let (db, mut log) = setup(models!(Test));
    log.respond_rows([row(1, "sam", 30), row(2, "sue", 41)]);

    let found = db
        .repository::<Test>()
        .get_one(Test::fields().name().starts_with("s"))
        .await
        .unwrap();

    assert_eq!(
        found,
        Some(Test {
            my_property: 1,
            ..sam()
        })
    );
    assert_eq!(
        log.pop_statement().text,
        "SELECT * FROM ORT_Test WHERE ([Name] LIKE 's%')"
    );
}

#[tokio::test]
async fn get_one_without_rows() {
    let (db, _log) = setup(models!(Test));

    let found = db
        .repository::<Test>()
        .get_one(Test::fields().age().gt(100))
        .await
        .unwrap();

    assert_eq!(found, None);
}

#[tokio::test]
async fn exists() {
    let (db, mut log) = setup(models!(Test));
    let repo = db.repository::<Test>();

    assert!(!repo.exists(Test::fields().pyh().is_null()).await.unwrap());
    assert_eq!(
        log.pop_statement().text,
        "SELECT * FROM ORT_Test WHERE pyh IS NULL"
    );

    log.respond_rows([row(1, "sam", 30)]);
    assert!(repo.exists(Test::fields().my_property().eq(1)).await.unwrap());
    assert_eq!(
        log.pop_statement().text,
        "SELECT * FROM ORT_Test WHERE my_property = 1"
    );
}

#[tokio::test]
async fn update_by_key() {
    let (db, mut log) = setup(models!(Test));

    let mut test = sam();
    test.my_property = 7;
    test.pyh = Some(2);

    db.repository::<Test>().update(&test).await.unwrap();

    let stmt = log.pop_statement();
    assert_eq!(
        stmt.text,
        "UPDATE ORT_Test SET [Name] = @name, age = @age, pyh = @pyh WHERE my_property = @my_property"
    );
    assert_eq!(stmt.param("@my_property"), Some(&Value::I32(7)));
    assert_eq!(stmt.param("@pyh"), Some(&Value::I32(2)));
}

#[tokio::test]
async fn delete_by_key() {
    let (db, mut log) = setup(models!(Test));

    let mut test = sam();
    test.my_property = 7;

    db.repository::<Test>().delete(&test).await.unwrap();

    let stmt = log.pop_statement();
    assert_eq!(
        stmt.text,
        "DELETE FROM ORT_Test WHERE my_property = @my_property"
    );
    assert_eq!(stmt.params.len(), 1);
}

#[tokio::test]
async fn delete_where_predicate() {
    let (db, mut log) = setup(models!(Test));
    log.respond(quarry::driver::Response::count(3));

    let filter = Test::fields()
        .age()
        .lt(18)
        .or(Test::fields().name().ends_with("x"));
    let count = db.repository::<Test>().delete_where(filter).await.unwrap();

    assert_eq!(count, 3);

    let (operation, _) = log.pop().unwrap();
    assert!(matches!(operation, Operation::Execute(_)));
    assert_eq!(
        operation.statement().text,
        "DELETE FROM ORT_Test WHERE age < 18 OR ([Name] LIKE '%x')"
    );
    assert!(operation.statement().params.is_empty());
}

#[tokio::test]
async fn in_list_filter() {
    let (db, mut log) = setup(models!(Test));

    db.repository::<Test>()
        .get_many(Some(Test::fields().age().in_list([1, 2, 3])))
        .await
        .unwrap();

    assert_eq!(
        log.pop_statement().text,
        "SELECT * FROM ORT_Test WHERE (age IN (1,2,3))"
    );
}

#[tokio::test]
async fn get_many_sql_loads_every_row() {
    let (db, mut log) = setup(models!(Test));
    log.respond_rows([row(1, "sam", 30), row(2, "sue", 41)]);

    let stmt = quarry::stmt::GeneratedStatement::new("SELECT * FROM ORT_Test WHERE age > @min")
        .bind("@min", 18);
    let all = db.repository::<Test>().get_many_sql(stmt).await.unwrap();

    assert_eq!(
        all.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
        ["sam", "sue"]
    );

    let stmt = log.pop_statement();
    assert_eq!(stmt.param("@min"), Some(&Value::I32(18)));
}

#[tokio::test]
async fn get_field_reads_first_row() {
    let (db, log) = setup(models!(Test));
    let repo = db.repository::<Test>();
    let stmt = || quarry::stmt::GeneratedStatement::new("SELECT age FROM ORT_Test");

    log.respond_rows([Row::new().with("age", 30), Row::new().with("age", 41)]);
    assert_eq!(
        repo.get_field(stmt(), "age").await.unwrap(),
        Some(Value::I32(30))
    );

    assert_eq!(repo.get_field(stmt(), "age").await.unwrap(), None);

    log.respond_rows([Row::new().with("age", 30)]);
    assert_eq!(
        repo.get_field(stmt(), "missing").await.unwrap(),
        Some(Value::Null)
    );

    assert_eq!(log.len(), 3);
}
