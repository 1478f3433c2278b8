#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use axum_test::TestServer;
use chrono::Utc;
use clap::Parser;
use jsonwebtoken::{EncodingKey, Header, encode};
use larder_api::{
    application::http::server::{app_state::AppState, http_server::router},
    args::Args,
};
use larder_core::{application::build_service, domain::common::LarderConfig, entity::recipes};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, Transaction};
use serde_json::{Value, json};
use test_context::AsyncTestContext;
use tokio::{net::TcpListener, task::JoinHandle};
use uuid::Uuid;

pub const JWT_SECRET: &str = "larder-test-secret";

#[derive(Clone)]
struct FakeCompletion {
    reply: Arc<Mutex<(StatusCode, Value)>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

async fn chat_completions(
    State(fake): State<FakeCompletion>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if let Some(prompt) = body["messages"][0]["content"].as_str() {
        fake.prompts.lock().unwrap().push(prompt.to_string());
    }

    let (status, reply) = fake.reply.lock().unwrap().clone();
    (status, Json(reply))
}

/// Fake OpenAI-compatible completion service plus helpers to build the API
/// around it.
pub struct LarderContext {
    fake: FakeCompletion,
    completion_url: String,
    handle: JoinHandle<()>,
}

impl AsyncTestContext for LarderContext {
    async fn setup() -> Self {
        let fake = FakeCompletion {
            reply: Arc::new(Mutex::new((StatusCode::OK, json!({ "choices": [] })))),
            prompts: Arc::new(Mutex::new(Vec::new())),
        };

        let app = Router::new()
            .route("/v1/chat/completions", post(chat_completions))
            .with_state(fake.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            fake,
            completion_url: format!("http://{}/v1", addr),
            handle,
        }
    }

    async fn teardown(self) {
        self.handle.abort();
    }
}

impl LarderContext {
    pub fn reply_with_content(&self, content: &str) {
        *self.fake.reply.lock().unwrap() = (
            StatusCode::OK,
            json!({
                "choices": [
                    { "message": { "role": "assistant", "content": content } }
                ]
            }),
        );
    }

    pub fn reply_with_status(&self, status: StatusCode) {
        *self.fake.reply.lock().unwrap() =
            (status, json!({ "error": { "message": "upstream failure" } }));
    }

    pub fn prompts(&self) -> Vec<String> {
        self.fake.prompts.lock().unwrap().clone()
    }

    pub fn args(&self, extra: &[&str]) -> Args {
        let mut argv = vec![
            "larder-api",
            "--llm-api-key",
            "sk-test",
            "--llm-base-url",
            self.completion_url.as_str(),
            "--auth-jwt-secret",
            JWT_SECRET,
        ];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    pub fn server_with_args(&self, db: Arc<DatabaseConnection>, args: Args) -> TestServer {
        let config = LarderConfig::from(args.clone());
        let service = build_service(db, &config).unwrap();
        let app = router(AppState::new(Arc::new(args), service)).unwrap();

        TestServer::new(app).unwrap()
    }

    pub fn server(&self, db: Arc<DatabaseConnection>) -> TestServer {
        self.server_with_args(db, self.args(&[]))
    }
}

pub fn token_for(sub: &str, email: Option<&str>) -> String {
    let claims = json!({
        "sub": sub,
        "email": email,
        "iat": Utc::now().timestamp(),
        "exp": Utc::now().timestamp() + 3600,
    });

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
    )
    .unwrap()
}

pub fn recipe_row(owner: &str, title: &str, ingredients: &[&str]) -> recipes::Model {
    recipes::Model {
        id: Uuid::now_v7(),
        owner_id: owner.to_string(),
        title: title.to_string(),
        ingredients: json!(ingredients),
        instructions: "Mix and cook.".to_string(),
        created_at: Utc::now().into(),
    }
}

pub fn mock_db(mock: MockDatabase) -> Arc<DatabaseConnection> {
    Arc::new(mock.into_connection())
}

pub fn empty_db() -> Arc<DatabaseConnection> {
    mock_db(MockDatabase::new(DatabaseBackend::Postgres))
}

/// Statements the service ran. Dropping the server releases the last other
/// handle on the mock connection.
pub fn transaction_log(server: TestServer, db: Arc<DatabaseConnection>) -> Vec<Transaction> {
    drop(server);

    Arc::try_unwrap(db)
        .ok()
        .expect("the test server should be the only other connection holder")
        .into_transaction_log()
}
