//! Dioxus hooks binding `ModalLifecycle` to the runtime.
//!
//! Timers are spawned tasks sleeping on the Tokio timer; cancelling a timer
//! cancels its task. The Escape listener is a `keydown` handler installed on
//! the document with `document::eval` that streams key names back through
//! `dioxus.send`.
//!
//! A Tokio runtime must be entered on the UI thread (see the demo binary).

use dioxus::core::Task;
use dioxus::prelude::*;

use crate::config::ModalSettings;
use crate::dismissal::{key_from_dom_name, ClickTarget, DismissReason};
use crate::lifecycle::{ModalHost, ModalLifecycle};
use crate::presentation::ModalInstanceId;
use crate::scroll_lock::ScrollLockRegistry;
use crate::visibility::{FadeDuration, PendingTimer, Phase, TimerId, DEFAULT_ENTRANCE_DELAY};

/// Tasks owned by one modal instance.
#[derive(Default)]
struct HostTasks {
    timer: Option<(TimerId, Task)>,
    escape: Option<Task>,
}

/// `ModalHost` backed by Dioxus tasks and document evals.
#[derive(Clone, Copy)]
struct DioxusHost {
    instance: ModalInstanceId,
    lifecycle: Signal<ModalLifecycle>,
    tasks: Signal<HostTasks>,
    on_close: EventHandler<()>,
    on_dismiss: Option<EventHandler<DismissReason>>,
}

impl DioxusHost {
    /// Forward a close request to the caller. The open intent only changes
    /// when the caller re-renders with `is_open: false`.
    fn request_close(&self, reason: DismissReason) {
        tracing::info!(%reason, modal = %self.instance.dom_id(), "modal close requested");
        if let Some(on_dismiss) = self.on_dismiss {
            on_dismiss.call(reason);
        }
        self.on_close.call(());
    }
}

impl ModalHost for DioxusHost {
    fn schedule_timer(&mut self, timer: PendingTimer) {
        let mut host = *self;
        let mut lifecycle = self.lifecycle;
        let task = spawn(async move {
            tokio::time::sleep(timer.delay).await;
            lifecycle.write().timer_fired(timer.id, &mut host);
        });
        if let Some((previous, task)) = self.tasks.write().timer.replace((timer.id, task)) {
            tracing::trace!(timer = %previous, "replacing modal timer task");
            task.cancel();
        }
    }

    fn cancel_timer(&mut self, id: TimerId) {
        let mut tasks = self.tasks.write();
        if tasks.timer.as_ref().is_some_and(|(pending, _)| *pending == id) {
            if let Some((_, task)) = tasks.timer.take() {
                task.cancel();
            }
        }
    }

    fn attach_escape_listener(&mut self) {
        if self.tasks.peek().escape.is_some() {
            return;
        }
        let mut listener = document::eval(&escape_listener_script(self.instance));
        let host = *self;
        let task = spawn(async move {
            loop {
                let name = match listener.recv::<String>().await {
                    Ok(name) => name,
                    Err(err) => {
                        tracing::debug!(
                            modal = %host.instance.dom_id(),
                            ?err,
                            "escape listener stopped"
                        );
                        break;
                    }
                };
                let key = key_from_dom_name(&name);
                let reason = host.lifecycle.peek().route_key(&key);
                if let Some(reason) = reason {
                    host.request_close(reason);
                }
            }
        });
        self.tasks.write().escape = Some(task);
    }

    fn detach_escape_listener(&mut self) {
        let Some(task) = self.tasks.write().escape.take() else {
            return;
        };
        task.cancel();
        // Fire and forget: the page may already be gone.
        let _detach = document::eval(&escape_detach_script(self.instance));
        tracing::trace!(modal = %self.instance.dom_id(), "escape listener detached");
    }
}

/// Handle returned by [`use_modal_lifecycle`].
#[derive(Clone, Copy)]
pub struct ModalController {
    host: DioxusHost,
}

impl ModalController {
    #[must_use]
    pub fn instance(&self) -> ModalInstanceId {
        self.host.instance
    }

    /// Current phase. Subscribes the calling component to phase changes.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.host.lifecycle.read().phase()
    }

    /// Report a click observed by the overlay handler.
    pub fn overlay_clicked(&self, target: ClickTarget) {
        let reason = self.host.lifecycle.peek().route_click(target);
        if let Some(reason) = reason {
            self.host.request_close(reason);
        }
    }

    pub fn dismiss_button_pressed(&self) {
        let reason = self.host.lifecycle.peek().route_dismiss_button();
        self.host.request_close(reason);
    }
}

/// Drive a modal instance from the caller's open intent and fade length.
///
/// Reads [`ModalSettings`] from context, when provided, for the entrance
/// delay. Everything the instance holds is released when the calling
/// component is dropped.
pub fn use_modal_lifecycle(
    is_open: bool,
    fade_duration_ms: u64,
    on_close: EventHandler<()>,
    on_dismiss: Option<EventHandler<DismissReason>>,
) -> ModalController {
    let instance = use_hook(ModalInstanceId::next);
    let entrance_delay = try_use_context::<ModalSettings>()
        .map_or(DEFAULT_ENTRANCE_DELAY, |settings| settings.entrance_delay());

    let lifecycle = use_signal(|| {
        ModalLifecycle::new(
            FadeDuration::from_millis(fade_duration_ms),
            ScrollLockRegistry::global(),
        )
        .with_entrance_delay(entrance_delay)
    });
    let tasks = use_signal(HostTasks::default);

    let host = DioxusHost {
        instance,
        lifecycle,
        tasks,
        on_close,
        on_dismiss,
    };

    use_effect(use_reactive(
        (&is_open, &fade_duration_ms),
        move |(is_open, fade_duration_ms)| {
            let mut host = host;
            let mut lifecycle = host.lifecycle;
            let mut state = lifecycle.write();
            state.set_fade_duration(FadeDuration::from_millis(fade_duration_ms));
            state.set_open(is_open, &mut host);
        },
    ));

    use_drop(move || {
        let mut host = host;
        let mut lifecycle = host.lifecycle;
        // The signal may already be gone during scope teardown; the scroll
        // guard inside it releases on drop either way.
        match lifecycle.try_write() {
            Ok(mut state) => state.teardown(&mut host),
            Err(err) => tracing::debug!(?err, "modal state already dropped"),
        };
    });

    ModalController { host }
}

fn escape_listener_script(instance: ModalInstanceId) -> String {
    let id = instance.dom_id();
    format!(
        r#"
        const registry = window.__fadeModalEscape || (window.__fadeModalEscape = {{}});
        if (registry["{id}"]) {{
            document.removeEventListener("keydown", registry["{id}"]);
        }}
        const handler = (event) => {{
            if (event.key === "Escape" || event.key === "Esc") {{
                dioxus.send(event.key);
            }}
        }};
        registry["{id}"] = handler;
        document.addEventListener("keydown", handler);
        "#
    )
}

fn escape_detach_script(instance: ModalInstanceId) -> String {
    let id = instance.dom_id();
    format!(
        r#"
        const registry = window.__fadeModalEscape;
        if (registry && registry["{id}"]) {{
            document.removeEventListener("keydown", registry["{id}"]);
            delete registry["{id}"];
        }}
        "#
    )
}
