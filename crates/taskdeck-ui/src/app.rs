use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use taskdeck_core::form::TaskDraft;
use taskdeck_core::query::TaskQuery;
use taskdeck_core::task::{Task, find_task};
use yew::{Callback, Html, UseStateHandle, function_component, html, use_effect_with, use_mut_ref, use_state};

use crate::api;
use crate::components::{FilterBar, NoticeToast, TaskCards, TaskModal};

#[derive(Clone, PartialEq)]
pub struct ModalState {
    pub mode: ModalMode,
    pub draft: TaskDraft,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    Create,
    Edit(i64),
}

#[derive(Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl NoticeKind {
    pub fn as_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

const NOTICE_VISIBLE_MS: u32 = 3_000;

/// Shows a transient toast for a fixed duration. The sequence cell makes
/// the delayed clear a no-op once a newer notice has replaced this one.
fn show_notice(
    notice: UseStateHandle<Option<Notice>>,
    seq: Rc<RefCell<u64>>,
    kind: NoticeKind,
    text: String,
) {
    let current = {
        let mut value = seq.borrow_mut();
        *value = value.wrapping_add(1);
        *value
    };
    notice.set(Some(Notice { kind, text }));

    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(NOTICE_VISIBLE_MS).await;
        if *seq.borrow() == current {
            notice.set(None);
        }
    });
}

#[function_component(App)]
pub fn app() -> Html {
    let tasks = use_state(Vec::<Task>::new);
    let status_filter = use_state(String::new);
    let priority_filter = use_state(String::new);
    let refresh_tick = use_state(|| 0_u64);
    let modal = use_state(|| None::<ModalState>);
    let modal_busy = use_state(|| false);
    let notice = use_state(|| None::<Notice>);
    let notice_seq = use_mut_ref(|| 0_u64);

    {
        let tasks = tasks.clone();
        let notice = notice.clone();
        let notice_seq = notice_seq.clone();

        use_effect_with(
            ((*status_filter).clone(), (*priority_filter).clone(), *refresh_tick),
            move |(status, priority, tick)| {
                let query = TaskQuery::from_select_values(status, priority);
                let tick = *tick;

                wasm_bindgen_futures::spawn_local(async move {
                    tracing::info!(query = %query.query_string(), tick, "loading task list");

                    match api::list_tasks(&query).await {
                        Ok(list) => {
                            tracing::debug!(total = list.len(), "task list loaded");
                            tasks.set(list);
                        }
                        Err(err) => {
                            tracing::error!(error = %err, "task list load failed");
                            show_notice(
                                notice,
                                notice_seq,
                                NoticeKind::Error,
                                format!("Ошибка загрузки задач: {err}"),
                            );
                            tasks.set(Vec::new());
                        }
                    }
                });

                || ()
            },
        );
    }

    let on_status_filter = {
        let status_filter = status_filter.clone();
        Callback::from(move |value: String| {
            status_filter.set(value);
        })
    };

    let on_priority_filter = {
        let priority_filter = priority_filter.clone();
        Callback::from(move |value: String| {
            priority_filter.set(value);
        })
    };

    let on_refresh = {
        let refresh_tick = refresh_tick.clone();
        Callback::from(move |_| {
            refresh_tick.set((*refresh_tick).saturating_add(1));
        })
    };

    let on_create_click = {
        let modal = modal.clone();
        let modal_busy = modal_busy.clone();
        Callback::from(move |_| {
            modal_busy.set(false);
            modal.set(Some(ModalState {
                mode: ModalMode::Create,
                draft: TaskDraft::default(),
            }));
            tracing::debug!("opened create modal");
        })
    };

    let on_edit = {
        let tasks = tasks.clone();
        let modal = modal.clone();
        let modal_busy = modal_busy.clone();
        Callback::from(move |id: i64| {
            let Some(task) = find_task(&tasks, id) else {
                tracing::debug!(id, "edit requested for unknown task");
                return;
            };

            modal_busy.set(false);
            modal.set(Some(ModalState {
                mode: ModalMode::Edit(id),
                draft: TaskDraft::from_task(task),
            }));
            tracing::debug!(id, "opened edit modal");
        })
    };

    let on_delete = {
        let refresh_tick = refresh_tick.clone();
        let notice = notice.clone();
        let notice_seq = notice_seq.clone();
        Callback::from(move |id: i64| {
            let confirmed = web_sys::window()
                .map(|window| {
                    window
                        .confirm_with_message("Вы уверены, что хотите удалить эту задачу?")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                tracing::debug!(id, "delete cancelled");
                return;
            }

            let refresh_tick = refresh_tick.clone();
            let notice = notice.clone();
            let notice_seq = notice_seq.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::delete_task(id).await {
                    Ok(()) => {
                        show_notice(
                            notice,
                            notice_seq,
                            NoticeKind::Success,
                            "Задача удалена успешно".to_string(),
                        );
                        refresh_tick.set((*refresh_tick).saturating_add(1));
                    }
                    Err(err) => {
                        tracing::error!(error = %err, id, "delete failed");
                        show_notice(
                            notice,
                            notice_seq,
                            NoticeKind::Error,
                            format!("Ошибка удаления: {err}"),
                        );
                    }
                }
            });
        })
    };

    let on_modal_update = {
        let modal = modal.clone();
        Callback::from(move |state: ModalState| {
            modal.set(Some(state));
        })
    };

    let on_modal_close = {
        let modal = modal.clone();
        Callback::from(move |_| {
            modal.set(None);
        })
    };

    let on_modal_submit = {
        let modal = modal.clone();
        let modal_busy = modal_busy.clone();
        let refresh_tick = refresh_tick.clone();
        let notice = notice.clone();
        let notice_seq = notice_seq.clone();
        Callback::from(move |_| {
            let Some(state) = (*modal).clone() else {
                return;
            };
            if *modal_busy {
                tracing::debug!("ignored duplicate submit while busy");
                return;
            }

            let payload = match state.draft.validate() {
                Ok(payload) => payload,
                Err(err) => {
                    show_notice(
                        notice.clone(),
                        notice_seq.clone(),
                        NoticeKind::Error,
                        err.to_string(),
                    );
                    return;
                }
            };

            modal_busy.set(true);

            let modal = modal.clone();
            let modal_busy = modal_busy.clone();
            let refresh_tick = refresh_tick.clone();
            let notice = notice.clone();
            let notice_seq = notice_seq.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = match state.mode {
                    ModalMode::Create => api::create_task(&payload).await,
                    ModalMode::Edit(id) => api::update_task(id, &payload).await,
                };

                match result {
                    Ok(()) => {
                        let text = match state.mode {
                            ModalMode::Create => "Задача создана успешно",
                            ModalMode::Edit(_) => "Задача обновлена успешно",
                        };
                        show_notice(notice, notice_seq, NoticeKind::Success, text.to_string());
                        modal.set(None);
                        refresh_tick.set((*refresh_tick).saturating_add(1));
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "save failed");
                        show_notice(
                            notice,
                            notice_seq,
                            NoticeKind::Error,
                            format!("Ошибка: {err}"),
                        );
                    }
                }

                modal_busy.set(false);
            });
        })
    };

    html! {
        <div class="container">
            <header class="header">
                <h1>{ "Менеджер задач" }</h1>
            </header>

            <FilterBar
                status={(*status_filter).clone()}
                priority={(*priority_filter).clone()}
                on_status={on_status_filter}
                on_priority={on_priority_filter}
                on_refresh={on_refresh}
                on_create={on_create_click}
            />

            <TaskCards
                tasks={(*tasks).clone()}
                on_edit={on_edit}
                on_delete={on_delete}
            />

            {
                if let Some(state) = (*modal).clone() {
                    html! {
                        <TaskModal
                            state={state}
                            busy={*modal_busy}
                            on_update={on_modal_update}
                            on_submit={on_modal_submit}
                            on_close={on_modal_close}
                        />
                    }
                } else {
                    html! {}
                }
            }

            <NoticeToast notice={(*notice).clone()} />
        </div>
    }
}
