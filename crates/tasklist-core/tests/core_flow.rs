use std::io::Cursor;

use mockito::Matcher;
use serde_json::json;
use tasklist_core::cli::{Command, EditArgs};
use tasklist_core::commands::dispatch;
use tasklist_core::http::HttpTaskApi;
use tasklist_core::render::Renderer;
use tasklist_core::terminal::TerminalPrompter;
use tasklist_shared::{
    ApiError, ListStatus, TaskApi, TaskCreate, TaskId, TaskListConfig, TaskListController,
};

type TestPrompter = TerminalPrompter<Cursor<Vec<u8>>, Vec<u8>>;

fn prompter(input: &str) -> TestPrompter {
    TerminalPrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
}

fn api_for(server: &mockito::ServerGuard) -> HttpTaskApi {
    let config = TaskListConfig::with_base_url(format!("{}/api/tasks/", server.url()));
    HttpTaskApi::new(&config).expect("http client")
}

#[tokio::test]
async fn http_client_speaks_the_task_routes() {
    let mut server = mockito::Server::new_async().await;

    let list = server
        .mock("GET", "/api/tasks")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":1,"title":"a","description":"b","completed":false}]"#)
        .create_async()
        .await;
    let create = server
        .mock("POST", "/api/tasks")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"title": "Buy milk", "description": "2%"})))
        .with_status(201)
        .with_body(r#"{"id":2,"title":"Buy milk","description":"2%","completed":false}"#)
        .create_async()
        .await;
    let update = server
        .mock("PUT", "/api/tasks/2")
        .match_body(Matcher::Json(json!({
            "id": 2,
            "title": "Buy milk",
            "description": "2%",
            "completed": true
        })))
        .with_status(204)
        .create_async()
        .await;
    let delete = server
        .mock("DELETE", "/api/tasks/2")
        .with_status(200)
        .create_async()
        .await;

    let api = api_for(&server);

    let tasks = api.list_tasks().await.expect("list");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, TaskId::Number(1));

    let created = api
        .create_task(&TaskCreate {
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
        })
        .await
        .expect("create");
    assert_eq!(created.id, TaskId::Number(2));

    let mut done = created.clone();
    done.completed = true;
    api.update_task(&done).await.expect("update ignores empty body");
    api.delete_task(&created.id).await.expect("delete");

    list.assert_async().await;
    create.assert_async().await;
    update.assert_async().await;
    delete.assert_async().await;
}

#[tokio::test]
async fn non_2xx_and_bad_bodies_are_failures() {
    let mut server = mockito::Server::new_async().await;
    let _missing = server
        .mock("GET", "/api/tasks/9")
        .with_status(404)
        .create_async()
        .await;
    let _garbage = server
        .mock("GET", "/api/tasks")
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let api = api_for(&server);

    assert_eq!(
        api.get_task(&TaskId::Number(9)).await,
        Err(ApiError::Status(404))
    );
    assert!(matches!(api.list_tasks().await, Err(ApiError::Decode(_))));
}

#[tokio::test]
async fn declined_delete_never_reaches_the_server() {
    let mut server = mockito::Server::new_async().await;
    let delete = server
        .mock("DELETE", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let controller = TaskListController::new(api_for(&server), prompter("n\n"));
    let state = dispatch(
        &controller,
        &Renderer::plain(),
        Command::Delete {
            id: TaskId::Number(3),
            yes: false,
        },
    )
    .await
    .expect("cancel is not an error");

    assert_eq!(state.list_status, ListStatus::NotLoaded);
    delete.assert_async().await;
}

#[tokio::test]
async fn edit_command_puts_changed_fields_and_reloads() {
    let mut server = mockito::Server::new_async().await;
    let get = server
        .mock("GET", "/api/tasks/4")
        .with_status(200)
        .with_body(r#"{"id":4,"title":"laundry","description":"whites","completed":false}"#)
        .create_async()
        .await;
    let put = server
        .mock("PUT", "/api/tasks/4")
        .match_body(Matcher::Json(json!({
            "id": 4,
            "title": "laundry",
            "description": "whites",
            "completed": true
        })))
        .with_status(200)
        .with_body(r#"{"id":4,"title":"laundry","description":"whites","completed":true}"#)
        .expect(1)
        .create_async()
        .await;
    let list = server
        .mock("GET", "/api/tasks")
        .with_status(200)
        .with_body(r#"[{"id":4,"title":"laundry","description":"whites","completed":true}]"#)
        .create_async()
        .await;

    let controller = TaskListController::new(api_for(&server), prompter(""));
    let state = dispatch(
        &controller,
        &Renderer::plain(),
        Command::Edit(EditArgs {
            id: TaskId::Number(4),
            title: None,
            description: None,
            completed: true,
            pending: false,
        }),
    )
    .await
    .expect("edit");

    get.assert_async().await;
    put.assert_async().await;
    list.assert_async().await;
    assert!(!state.is_modal_open());
    assert!(state.tasks[0].completed);
}

#[tokio::test]
async fn failed_add_alerts_on_the_terminal() {
    let mut server = mockito::Server::new_async().await;
    let _create = server
        .mock("POST", "/api/tasks")
        .with_status(500)
        .create_async()
        .await;

    let controller = TaskListController::new(api_for(&server), prompter(""));
    let err = dispatch(
        &controller,
        &Renderer::plain(),
        Command::Add {
            title: "x".to_string(),
            description: String::new(),
        },
    )
    .await
    .expect_err("server error");

    assert!(format!("{err:#}").contains("status: 500"));
    assert!(tasklist_core::already_alerted(&err));
}
