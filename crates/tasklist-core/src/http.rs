use std::time::Duration;

use anyhow::Context;
use reqwest::{
  Client,
  RequestBuilder,
  Response
};
use serde::de::DeserializeOwned;
use tasklist_shared::{
  ApiError,
  Task,
  TaskApi,
  TaskCreate,
  TaskEndpoints,
  TaskId,
  TaskListConfig
};
use tracing::{
  debug,
  instrument
};

/// `TaskApi` over reqwest for the terminal frontend.
#[derive(Debug, Clone)]
pub struct HttpTaskApi {
  client:    Client,
  endpoints: TaskEndpoints
}

impl HttpTaskApi {
  pub fn new(
    config: &TaskListConfig
  ) -> anyhow::Result<Self> {
    let mut builder = Client::builder();
    if let Some(secs) = config.timeout_secs
    {
      builder = builder
        .timeout(Duration::from_secs(secs));
    }
    let client =
      builder.build().context(
        "failed building HTTP client \
         for task API"
      )?;

    Ok(Self {
      client,
      endpoints: config.endpoints()
    })
  }

  pub fn endpoints(
    &self
  ) -> &TaskEndpoints {
    &self.endpoints
  }

  async fn send(
    &self,
    request: RequestBuilder
  ) -> Result<Response, ApiError> {
    let response = request
      .send()
      .await
      .map_err(|err| {
        ApiError::Transport(
          err.to_string()
        )
      })?;
    let status = response.status();
    debug!(
      status = status.as_u16(),
      url = %response.url(),
      "task API responded"
    );
    ApiError::check_status(
      status.as_u16()
    )?;
    Ok(response)
  }

  async fn send_json<T>(
    &self,
    request: RequestBuilder
  ) -> Result<T, ApiError>
  where
    T: DeserializeOwned
  {
    self
      .send(request)
      .await?
      .json::<T>()
      .await
      .map_err(|err| {
        ApiError::Decode(err.to_string())
      })
  }
}

impl TaskApi for HttpTaskApi {
  #[instrument(skip(self))]
  async fn list_tasks(
    &self
  ) -> Result<Vec<Task>, ApiError> {
    self
      .send_json(self.client.get(
        self.endpoints.collection()
      ))
      .await
  }

  #[instrument(skip(self))]
  async fn get_task(
    &self,
    id: &TaskId
  ) -> Result<Task, ApiError> {
    self
      .send_json(
        self
          .client
          .get(self.endpoints.item(id))
      )
      .await
  }

  #[instrument(skip(self, task))]
  async fn create_task(
    &self,
    task: &TaskCreate
  ) -> Result<Task, ApiError> {
    self
      .send_json(
        self
          .client
          .post(
            self.endpoints.collection()
          )
          .json(task)
      )
      .await
  }

  #[instrument(skip(self, task), fields(id = %task.id))]
  async fn update_task(
    &self,
    task: &Task
  ) -> Result<(), ApiError> {
    self
      .send(
        self
          .client
          .put(
            self.endpoints.item(&task.id)
          )
          .json(task)
      )
      .await
      .map(|_| ())
  }

  #[instrument(skip(self))]
  async fn delete_task(
    &self,
    id: &TaskId
  ) -> Result<(), ApiError> {
    self
      .send(
        self
          .client
          .delete(self.endpoints.item(id))
      )
      .await
      .map(|_| ())
  }
}
