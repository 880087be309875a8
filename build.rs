//! Build script for embedded migrations.
//!
//! `sqlx::migrate!` embeds data/sql/sqlite at compile time, but cargo does not
//! know about that directory. Rebuild whenever a migration is added or edited.

fn main() {
    println!("cargo:rerun-if-changed=data/sql/sqlite");
}
