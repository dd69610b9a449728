use std::net::SocketAddr;

use configs::{AppConfig, ServerConfig, StorageConfig};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use uuid::Uuid;

struct TestApp {
    base_url: String,
    data_file: std::path::PathBuf,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let data_file = std::env::temp_dir()
        .join(format!("ledger_e2e_{}", Uuid::new_v4()))
        .join("records.json");
    let cfg = AppConfig {
        server: ServerConfig::default(),
        storage: StorageConfig {
            data_file: data_file.to_string_lossy().into_owned(),
            frontend_dir: "/nonexistent-frontend".into(),
        },
    };
    let app = server::startup::build_app(&cfg).await?;

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url, data_file })
}

#[tokio::test]
async fn e2e_record_lifecycle_persists_file() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.post(format!("{}/api/records", app.base_url))
        .json(&json!({"shift": "evening", "name": "Devi", "phone": "9444", "quantity": 1000, "amount": 42}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<serde_json::Value>().await?;
    let id = created["id"].as_i64().ok_or_else(|| anyhow::anyhow!("created record has no id"))?;

    let res = c.put(format!("{}/api/records/{}", app.base_url, id))
        .json(&json!({"amount": 45}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    // the file on disk has the documented shape
    let raw = tokio::fs::read_to_string(&app.data_file).await?;
    let persisted: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(persisted["records"][0]["id"], id);
    assert_eq!(persisted["records"][0]["amount"], 45.0);
    assert_eq!(persisted["records"][0]["shift"], "evening");

    let res = c.delete(format!("{}/api/records/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.get(format!("{}/api/records", app.base_url)).send().await?;
    assert_eq!(res.json::<serde_json::Value>().await?, json!([]));

    if let Some(dir) = app.data_file.parent() {
        let _ = tokio::fs::remove_dir_all(dir).await;
    }
    Ok(())
}

#[tokio::test]
async fn e2e_cors_preflight_allowed() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, format!("{}/api/records", app.base_url))
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "POST")
        .send().await?;
    assert!(res.status().is_success());
    assert!(res.headers().get("access-control-allow-origin").is_some());
    Ok(())
}
