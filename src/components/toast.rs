//! Toast host rendering transient notifications.
//!
//! Each notice auto-dismisses after a few seconds in the browser and
//! can be dismissed early with a click.

use leptos::prelude::*;

use crate::state::notify::{NoticeKind, NotifyState};

#[cfg(feature = "web")]
const DISMISS_AFTER_SECS: u64 = 3;

#[component]
pub fn ToastHost() -> impl IntoView {
    let notices = expect_context::<RwSignal<NotifyState>>();

    #[cfg(feature = "web")]
    {
        let scheduled = RwSignal::new(std::collections::HashSet::<u64>::new());
        Effect::new(move || {
            let ids: Vec<u64> = notices.get().items().iter().map(|n| n.id).collect();
            for id in ids {
                if scheduled.get_untracked().contains(&id) {
                    continue;
                }
                scheduled.update(|set| {
                    set.insert(id);
                });
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_secs(DISMISS_AFTER_SECS)).await;
                    notices.update(|state| state.dismiss(id));
                });
            }
        });
    }

    view! {
        <div class="toast-host">
            {move || {
                notices
                    .get()
                    .items()
                    .iter()
                    .map(|notice| {
                        let class = match notice.kind {
                            NoticeKind::Success => "toast toast--success",
                            NoticeKind::Error => "toast toast--error",
                        };
                        let id = notice.id;
                        view! {
                            <div class=class on:click=move |_| notices.update(|state| state.dismiss(id))>
                                {notice.text.clone()}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
