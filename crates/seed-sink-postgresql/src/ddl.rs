//! DDL statement builders for the two seed tables.

/// Generate the CREATE TABLE statement for `"Users"`.
pub fn create_users_table() -> String {
    r#"CREATE TABLE IF NOT EXISTS "Users" (
    "UserId" SERIAL PRIMARY KEY,
    "UserUid" UUID NOT NULL,
    "FirstName" TEXT NOT NULL,
    "LastName" TEXT NOT NULL,
    "CreationDate" DATE NOT NULL,
    "DOB" DATE NOT NULL,
    "Email" TEXT NOT NULL,
    "Phone" TEXT NOT NULL,
    "StartWeight" DOUBLE PRECISION NOT NULL
)"#
    .to_string()
}

/// Generate the CREATE TABLE statement for `"Weights"`.
///
/// `"UserId"` is a foreign key into `"Users"`, populated post-insert from
/// the id the database assigned to the owning user.
pub fn create_weights_table() -> String {
    r#"CREATE TABLE IF NOT EXISTS "Weights" (
    "WeightId" SERIAL PRIMARY KEY,
    "LogDate" DATE NOT NULL,
    "Value" DOUBLE PRECISION NOT NULL,
    "UserId" INTEGER NOT NULL REFERENCES "Users" ("UserId")
)"#
    .to_string()
}

/// Generate DROP TABLE statements in dependency order.
pub fn drop_tables() -> Vec<String> {
    vec![
        "DROP TABLE IF EXISTS \"Weights\"".to_string(),
        "DROP TABLE IF EXISTS \"Users\"".to_string(),
    ]
}
