mod exec_log;
pub use exec_log::ExecLog;

mod logging_connection;
pub use logging_connection::{DriverOp, LoggingConnection};

use quarry::{db::Builder, Db};

#[macro_export]
macro_rules! models {
    (
        $( $model:ident ),*
    ) => {{
        let mut builder = quarry::Db::builder();
        $( builder.register::<$model>(); )*
        builder
    }};
}

/// Build a database over a fresh recording connection.
pub fn setup(mut builder: Builder) -> (Db, ExecLog) {
    init_logging();

    let connection = LoggingConnection::new();
    let log = connection.log();
    let db = builder.build(connection).unwrap();

    (db, log)
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
