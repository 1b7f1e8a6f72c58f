//! Multi-turn example for fichat-rs
//!
//! Two conversations run through one `SessionStore`; each keeps its own
//! category.

use fichat_rs::prelude::*;
use std::sync::Arc;

fn main() -> Result<()> {
    let router = Router::with_defaults(Arc::new(FiTable::load()?));
    let store = SessionStore::new(router);

    let alice = store.open();
    let bob = store.open();

    let script = [
        (alice, "hello"),
        (bob, "highest"),
        (alice, "province"),
        (alice, "cebu"),
        (bob, "switch"),
        (alice, "continue"),
        (bob, "city"),
        (alice, "iloilo"),
        (bob, "bagio city"),
        (alice, "exit"),
        (bob, "exit"),
    ];

    for (id, text) in script {
        let who = if id == alice { "alice" } else { "bob" };
        println!("[{who}] > {text}");
        println!("{}\n", store.converse(id, text)?);
    }

    Ok(())
}
