//! Custom hooks for the application

use crate::auth::use_auth;
use jobboard_session::NotificationStore;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Unread notification count, fetched once each time a token is established
#[hook]
pub fn use_unread_count() -> u64 {
    let auth = use_auth();
    let store = use_memo((), |_| NotificationStore::new());
    let count = use_state_eq(|| 0_u64);

    let token = auth.session.token.clone();
    let manager = auth.manager.clone();
    {
        let count = count.clone();
        use_effect_with(token, move |token| {
            if token.is_none() {
                count.set(0);
                return;
            }

            let session = manager.session_client();
            spawn_local(async move {
                store.fetch_unread_count(session.as_ref()).await;
                count.set(store.unread_count());
            });
        });
    }

    *count
}
