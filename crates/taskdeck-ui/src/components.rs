use taskdeck_core::task::{Task, TaskPriority, TaskStatus};
use web_sys::{Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, InputEvent, MouseEvent, SubmitEvent};
use yew::{Callback, Html, Properties, TargetCast, classes, function_component, html};

use crate::app::{ModalMode, ModalState, Notice};

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub status: String,
    pub priority: String,
    pub on_status: Callback<String>,
    pub on_priority: Callback<String>,
    pub on_refresh: Callback<()>,
    pub on_create: Callback<()>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let on_status_change = {
        let on_status = props.on_status.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_status.emit(select.value());
        })
    };

    let on_priority_change = {
        let on_priority = props.on_priority.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_priority.emit(select.value());
        })
    };

    let on_refresh_click = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };

    let on_create_click = {
        let on_create = props.on_create.clone();
        Callback::from(move |_: MouseEvent| on_create.emit(()))
    };

    html! {
        <div class="filters">
            <select id="statusFilter" onchange={on_status_change}>
                <option value="" selected={props.status.is_empty()}>{ "Все статусы" }</option>
                {
                    for TaskStatus::all().into_iter().map(|status| html! {
                        <option
                            value={status.as_str().to_string()}
                            selected={props.status == status.as_str()}
                        >
                            { status.label().to_string() }
                        </option>
                    })
                }
            </select>

            <select id="priorityFilter" onchange={on_priority_change}>
                <option value="" selected={props.priority.is_empty()}>{ "Все приоритеты" }</option>
                {
                    for TaskPriority::all().into_iter().map(|priority| html! {
                        <option
                            value={priority.as_str().to_string()}
                            selected={props.priority == priority.as_str()}
                        >
                            { priority.label().to_string() }
                        </option>
                    })
                }
            </select>

            <button class="btn btn-secondary" onclick={on_refresh_click}>{ "Обновить" }</button>
            <button class="btn btn-primary" onclick={on_create_click}>{ "Новая задача" }</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TaskCardsProps {
    pub tasks: Vec<Task>,
    pub on_edit: Callback<i64>,
    pub on_delete: Callback<i64>,
}

#[function_component(TaskCards)]
pub fn task_cards(props: &TaskCardsProps) -> Html {
    if props.tasks.is_empty() {
        return html! {
            <div id="tasksContainer" class="tasks-container">
                <div class="empty-state">
                    <h3>{ "Нет задач" }</h3>
                    <p>{ "Создайте первую задачу, чтобы начать работу" }</p>
                </div>
            </div>
        };
    }

    html! {
        <div id="tasksContainer" class="tasks-container">
            {
                for props.tasks.iter().map(|task| {
                    let id = task.id;
                    let on_edit = props.on_edit.clone();
                    let on_delete = props.on_delete.clone();

                    html! {
                        <div class="task-card">
                            <div class="task-header">
                                <div>
                                    <div class="task-title">{ &task.title }</div>
                                    <div class="task-description">{ &task.description }</div>
                                </div>
                            </div>
                            <div class="task-meta">
                                <span class="badge badge-status">{ task.status.label().to_string() }</span>
                                <span class={classes!("badge", "badge-priority", task.priority.as_str().to_string())}>
                                    { task.priority.label().to_string() }
                                </span>
                                <small class="task-created">{ task.created_label() }</small>
                            </div>
                            <div class="task-actions">
                                <button
                                    class="btn btn-primary btn-sm"
                                    onclick={move |_| on_edit.emit(id)}
                                >
                                    { "Изменить" }
                                </button>
                                <button
                                    class="btn btn-danger btn-sm"
                                    onclick={move |_| on_delete.emit(id)}
                                >
                                    { "Удалить" }
                                </button>
                            </div>
                        </div>
                    }
                })
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TaskModalProps {
    pub state: ModalState,
    pub busy: bool,
    pub on_update: Callback<ModalState>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(TaskModal)]
pub fn task_modal(props: &TaskModalProps) -> Html {
    let state = props.state.clone();

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop_inner_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    let on_title_input = {
        let on_update = props.on_update.clone();
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = state.clone();
            next.draft.title = input.value();
            on_update.emit(next);
        })
    };

    let on_description_input = {
        let on_update = props.on_update.clone();
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = state.clone();
            next.draft.description = area.value();
            on_update.emit(next);
        })
    };

    let on_status_change = {
        let on_update = props.on_update.clone();
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = state.clone();
            next.draft.status = TaskStatus::from(select.value());
            on_update.emit(next);
        })
    };

    let on_priority_change = {
        let on_update = props.on_update.clone();
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = state.clone();
            next.draft.priority = TaskPriority::from(select.value());
            on_update.emit(next);
        })
    };

    let on_form_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_cancel_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div id="taskModal" class="modal-backdrop" onclick={on_backdrop_click}>
            <div class="modal" onclick={stop_inner_click}>
                <div class="modal-header">
                    <h2 id="modalTitle">
                        {
                            match state.mode {
                                ModalMode::Create => "Новая задача",
                                ModalMode::Edit(_) => "Редактировать задачу",
                            }
                        }
                    </h2>
                    <span class="close" onclick={on_close_click}>{ "×" }</span>
                </div>

                <form id="taskForm" onsubmit={on_form_submit}>
                    <div class="form-group">
                        <label for="taskTitle">{ "Название" }</label>
                        <input
                            id="taskTitle"
                            type="text"
                            value={state.draft.title.clone()}
                            oninput={on_title_input}
                        />
                    </div>

                    <div class="form-group">
                        <label for="taskDescription">{ "Описание" }</label>
                        <textarea
                            id="taskDescription"
                            value={state.draft.description.clone()}
                            oninput={on_description_input}
                        />
                    </div>

                    <div class="form-group">
                        <label for="taskStatus">{ "Статус" }</label>
                        <select id="taskStatus" onchange={on_status_change}>
                            {
                                for TaskStatus::all().into_iter().map(|status| html! {
                                    <option
                                        value={status.as_str().to_string()}
                                        selected={state.draft.status == status}
                                    >
                                        { status.label().to_string() }
                                    </option>
                                })
                            }
                        </select>
                    </div>

                    <div class="form-group">
                        <label for="taskPriority">{ "Приоритет" }</label>
                        <select id="taskPriority" onchange={on_priority_change}>
                            {
                                for TaskPriority::all().into_iter().map(|priority| html! {
                                    <option
                                        value={priority.as_str().to_string()}
                                        selected={state.draft.priority == priority}
                                    >
                                        { priority.label().to_string() }
                                    </option>
                                })
                            }
                        </select>
                    </div>

                    <div class="form-actions">
                        <button type="button" class="btn btn-secondary" onclick={on_cancel_click}>
                            { "Отмена" }
                        </button>
                        <button type="submit" class="btn btn-primary" disabled={props.busy}>
                            { "Сохранить" }
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeToastProps {
    pub notice: Option<Notice>,
}

#[function_component(NoticeToast)]
pub fn notice_toast(props: &NoticeToastProps) -> Html {
    let Some(notice) = &props.notice else {
        return html! {};
    };

    html! {
        <div class={classes!("notification", notice.kind.as_class(), "show")}>
            { &notice.text }
        </div>
    }
}
