//! Default connection factory
//!
//! The factory is process-wide, so the whole lifecycle is one test.

use plinth_domain::ports::DataProvider;
use plinth_providers::connection::{
    ConnectionFactory, default_connection_factory, install_default_connection_factory,
};
use plinth_providers::{MySqlDataProvider, SqlServerDataProvider};

#[test]
fn test_connection_factory_lifecycle() {
    let mysql = MySqlDataProvider::new("Server=db;Database=site");
    mysql.init_connection_factory().unwrap();

    let installed = default_connection_factory().unwrap();
    assert_eq!(installed.provider(), "mysql");
    assert_eq!(installed.connection_string(), "Server=db;Database=site");

    // Same factory again is a no-op
    assert!(!install_default_connection_factory(ConnectionFactory::new(
        "mysql",
        "Server=db;Database=site"
    )));

    SqlServerDataProvider::new("Data Source=.;")
        .init_database()
        .unwrap();
    assert_eq!(default_connection_factory().unwrap().provider(), "sqlserver");
}
