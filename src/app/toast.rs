use std::time::Duration;

use leptos::prelude::*;

use crate::contact::Notice;

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

/// Page-wide slot for the current notification.
///
/// Every toast gets a fresh id from a counter that only grows, so a timer
/// left over from an earlier toast never closes a later one.
#[derive(Clone, Copy)]
pub struct Toaster {
    slot: RwSignal<Option<(u64, Notice)>>,
    next_id: StoredValue<u64>,
}

impl Default for Toaster {
    fn default() -> Self {
        Self {
            slot: RwSignal::new(None),
            next_id: StoredValue::new(0),
        }
    }
}

impl Toaster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&self, notice: Notice) {
        let id = self.post(notice);
        let toaster = *self;
        set_timeout(move || toaster.expire(id), TOAST_LIFETIME);
    }

    fn post(&self, notice: Notice) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        self.slot.set(Some((id, notice)));
        id
    }

    /// Clears the slot only if toast `id` is still the one showing.
    fn expire(&self, id: u64) {
        if self.current_id() == Some(id) {
            self.slot.set(None);
        }
    }

    fn current_id(&self) -> Option<u64> {
        self.slot.get_untracked().map(|(id, _)| id)
    }

    pub fn dismiss(&self) {
        self.slot.set(None);
    }
}

#[component]
pub fn Toast() -> impl IntoView {
    let toaster = expect_context::<Toaster>();
    move || {
        toaster.slot.get().map(|(_, notice)| {
            view! {
                <div
                    role="status"
                    class="fixed bottom-6 right-6 z-50 glass-card p-4 max-w-sm toast-enter"
                >
                    <div class="flex items-start justify-between gap-4">
                        <div>
                            <p class="font-semibold text-foreground">{notice.title}</p>
                            <p class="text-sm text-muted-foreground">{notice.description}</p>
                        </div>
                        <button
                            class="text-muted-foreground hover:text-foreground"
                            aria-label="Dismiss notification"
                            on:click=move |_| toaster.dismiss()
                        >
                            "×"
                        </button>
                    </div>
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_keep_growing_after_dismiss() {
        let toaster = Toaster::new();
        let first = toaster.post(Notice::SENT);
        toaster.dismiss();
        let second = toaster.post(Notice::SENT);
        assert_ne!(first, second);
        assert_eq!(toaster.current_id(), Some(second));
    }

    #[test]
    fn stale_timer_leaves_newer_toast_alone() {
        let toaster = Toaster::new();
        let first = toaster.post(Notice::SENT);
        toaster.dismiss();
        let second = toaster.post(Notice::SENT);

        toaster.expire(first);
        assert_eq!(toaster.current_id(), Some(second));

        toaster.expire(second);
        assert_eq!(toaster.current_id(), None);
    }

    #[test]
    fn replacing_a_toast_outlives_the_old_timer() {
        let toaster = Toaster::new();
        let first = toaster.post(Notice::SENT);
        let second = toaster.post(Notice::SENT);
        toaster.expire(first);
        assert_eq!(toaster.current_id(), Some(second));
    }
}
