use gloo::net::http::{
  Request,
  RequestBuilder,
  Response
};
use serde::de::DeserializeOwned;
use tasklist_shared::{
  ApiError,
  Prompter,
  Task,
  TaskApi,
  TaskCreate,
  TaskEndpoints,
  TaskId,
  TaskListConfig
};

/// `TaskApi` over the browser's fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpTaskApi {
  endpoints: TaskEndpoints
}

impl HttpTaskApi {
  pub fn new(
    config: &TaskListConfig
  ) -> Self {
    Self {
      endpoints: config.endpoints()
    }
  }
}

async fn send(
  request: Result<Request, gloo::net::Error>
) -> Result<Response, ApiError> {
  let request = request.map_err(|e| {
    ApiError::Encode(e.to_string())
  })?;
  let response =
    request.send().await.map_err(|e| {
      ApiError::Transport(e.to_string())
    })?;
  tracing::debug!(
    status = response.status(),
    url = %response.url(),
    "task API responded"
  );
  ApiError::check_status(
    response.status()
  )?;
  Ok(response)
}

async fn send_json<T>(
  request: Result<Request, gloo::net::Error>
) -> Result<T, ApiError>
where
  T: DeserializeOwned
{
  send(request)
    .await?
    .json::<T>()
    .await
    .map_err(|e| {
      ApiError::Decode(e.to_string())
    })
}

fn bare(
  builder: RequestBuilder
) -> Result<Request, gloo::net::Error> {
  builder.build()
}

impl TaskApi for HttpTaskApi {
  async fn list_tasks(
    &self
  ) -> Result<Vec<Task>, ApiError> {
    send_json(bare(Request::get(
      self.endpoints.collection()
    )))
    .await
  }

  async fn get_task(
    &self,
    id: &TaskId
  ) -> Result<Task, ApiError> {
    send_json(bare(Request::get(
      &self.endpoints.item(id)
    )))
    .await
  }

  async fn create_task(
    &self,
    task: &TaskCreate
  ) -> Result<Task, ApiError> {
    send_json(
      Request::post(
        self.endpoints.collection()
      )
      .json(task)
    )
    .await
  }

  async fn update_task(
    &self,
    task: &Task
  ) -> Result<(), ApiError> {
    send(
      Request::put(
        &self.endpoints.item(&task.id)
      )
      .json(task)
    )
    .await
    .map(|_| ())
  }

  async fn delete_task(
    &self,
    id: &TaskId
  ) -> Result<(), ApiError> {
    send(bare(Request::delete(
      &self.endpoints.item(id)
    )))
    .await
    .map(|_| ())
  }
}

/// Native `alert` / `confirm` dialogs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserPrompter;

impl Prompter for BrowserPrompter {
  fn alert(&self, message: &str) {
    gloo::dialogs::alert(message);
  }

  fn confirm(&self, message: &str) -> bool {
    gloo::dialogs::confirm(message)
  }
}
