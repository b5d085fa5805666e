use gloo::net::http::{Request, Response};
use taskdeck_core::protocol::{ApiError, Envelope, TaskPayload, ack_from_envelope, tasks_from_envelope};
use taskdeck_core::query::TaskQuery;
use taskdeck_core::task::Task;

pub const TASKS_ENDPOINT: &str = "/api/tasks";

fn network_error(err: gloo::net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

async fn read_envelope(response: Response) -> Result<Envelope, ApiError> {
    let body = response.text().await.map_err(network_error)?;
    Envelope::parse(&body)
}

pub async fn list_tasks(query: &TaskQuery) -> Result<Vec<Task>, ApiError> {
    let url = query.list_url(TASKS_ENDPOINT);
    let response = Request::get(&url).send().await.map_err(network_error)?;
    let envelope = read_envelope(response).await?;
    tasks_from_envelope(&envelope)
}

pub async fn create_task(payload: &TaskPayload) -> Result<(), ApiError> {
    let response = Request::post(TASKS_ENDPOINT)
        .json(payload)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    ack_from_envelope(&read_envelope(response).await?)
}

pub async fn update_task(id: i64, payload: &TaskPayload) -> Result<(), ApiError> {
    let url = format!("{TASKS_ENDPOINT}/{id}");
    let response = Request::put(&url)
        .json(payload)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    ack_from_envelope(&read_envelope(response).await?)
}

pub async fn delete_task(id: i64) -> Result<(), ApiError> {
    let url = format!("{TASKS_ENDPOINT}/{id}");
    let response = Request::delete(&url).send().await.map_err(network_error)?;
    ack_from_envelope(&read_envelope(response).await?)
}
