fn main() -> dbconnector::Result<()> {
    dbconnector::logging::init();

    let host = "";
    let user = "";
    let password = "";
    let database = "";

    if let Some(conn) = dbconnector::connect(host, user, password, database)? {
        conn.close();
    }

    Ok(())
}
