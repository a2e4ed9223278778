//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `checkplus_core` wiring end to
//!   end against a throwaway in-memory store.
//! - Keep output deterministic for quick local sanity checks.

use checkplus_core::db::open_db_in_memory;
use checkplus_core::session::manager::{DEMO_EMAIL, DEMO_PASSWORD};
use checkplus_core::{ChecklistService, ListId, PostItService, SessionManager, SqliteKvStore};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    println!("checkplus_core ping={}", checkplus_core::ping());
    println!("checkplus_core version={}", checkplus_core::core_version());

    let conn = open_db_in_memory()?;
    let store = SqliteKvStore::new(&conn);
    let mut session = SessionManager::new(store)?;
    session.ensure_demo_user()?;
    let user = session.login(DEMO_EMAIL, DEMO_PASSWORD)?;
    println!("demo login ok user_id={}", user.id);

    let lists = ChecklistService::new(&session).load()?;
    let postits = PostItService::new(&session).load()?;
    println!(
        "seed lists={} shopping_items={} postits={}",
        lists.len(),
        lists.get(&ListId::Shopping).map_or(0, |list| list.items.len()),
        postits.len()
    );

    Ok(())
}
