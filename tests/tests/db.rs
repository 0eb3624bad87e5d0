use pretty_assertions::assert_eq;
use quarry::{
    driver::Response,
    schema::{self, EntityMapping, Field},
    statement::{SelectParts, SelectStrategy},
    stmt::{GeneratedStatement, Row, Value},
    Db, StatementFactory,
};
use tests::*;

#[derive(Debug, quarry::Model)]
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

#[derive(Debug, quarry::Model)]
struct Clash {
    #[key]
    id: i32,

    #[column("shared")]
    first: String,

    #[column("shared")]
    second: String,
}

#[test]
fn derived_mapping_matches_builder() {
    let expected = EntityMapping::builder("Test")
        .table("ORT_Test")
        .field(Field::new("my_property").key().auto_increment())
        .field(Field::new("name").column("[Name]"))
        .field(Field::new("age"))
        .field(Field::new("pyh"))
        .build()
        .unwrap();

    assert_eq!(*schema::resolve::<Test>().unwrap(), expected);
}

#[test]
fn build_rejects_invalid_models() {
    let mut builder = Db::builder();
    builder.register::<Test>().register::<Clash>();

    let err = builder.build(LoggingConnection::new()).unwrap_err();
    assert!(err.is_invalid_schema());
}

#[tokio::test]
async fn raw_statements() {
    let (db, mut log) = setup(models!(Test));

    log.respond(Response::count(4));
    let stmt = GeneratedStatement::new("UPDATE ORT_Test SET age = age + 1");
    assert_eq!(db.exec(stmt).await.unwrap(), 4);

    log.respond(Response::scalar(12));
    let stmt = GeneratedStatement::new("SELECT COUNT(*) FROM ORT_Test");
    assert_eq!(db.scalar(stmt).await.unwrap(), Value::I32(12));

    let stmt = GeneratedStatement::new("SELECT MAX(age) FROM ORT_Test");
    assert_eq!(db.scalar(stmt).await.unwrap(), Value::Null);

    log.respond_rows([Row::new().with("age", 1)]);
    let stmt = GeneratedStatement::new("SELECT age FROM ORT_Test");
    assert_eq!(db.query(stmt).await.unwrap().len(), 1);

    let kinds: Vec<_> = std::iter::from_fn(|| log.pop())
        .map(|(op, _)| op.kind_name())
        .collect();
    assert_eq!(kinds, ["execute", "scalar", "scalar", "query"]);
}

#[derive(Debug)]
struct SelectTop(usize);

impl SelectStrategy for SelectTop {
    fn render(&self, parts: &SelectParts<'_>) -> String {
        let predicate = parts.predicate.as_deref().unwrap_or("0=0");
        format!(
            "SELECT TOP {} * FROM {} WHERE {predicate}",
            self.0, parts.table
        )
    }
}

#[tokio::test]
async fn custom_statement_factory() {
    let mut builder = models!(Test);
    builder.statement_factory(StatementFactory::new().with_select(SelectTop(10)));
    let (db, mut log) = setup(builder);

    db.repository::<Test>()
        .get_many(Some(Test::fields().age().ge(21)))
        .await
        .unwrap();

    assert_eq!(
        log.pop_statement().text,
        "SELECT TOP 10 * FROM ORT_Test WHERE age >= 21"
    );
}

#[tokio::test]
async fn clones_share_the_connection() {
    let (db, log) = setup(models!(Test));
    let other = db.clone();

    let a = tokio::spawn(async move {
        other
            .exec(GeneratedStatement::new("DELETE FROM ORT_Test"))
            .await
    });
    db.exec(GeneratedStatement::new("DELETE FROM ORT_Test"))
        .await
        .unwrap();
    a.await.unwrap().unwrap();

    assert_eq!(log.len(), 2);
}
