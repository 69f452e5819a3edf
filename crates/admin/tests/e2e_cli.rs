use std::net::TcpListener;
use std::process::{Child, Command, Output, Stdio};
use std::time::Duration;

use serial_test::serial;

const DEMO_METRICS_JSON: &str = concat!(
    r#"[{"label":"Messages (24h)","value":"128,420","sublabel":"+12% vs yesterday"},"#,
    r#"{"label":"Delivery Rate","value":"98.7%","sublabel":"p95 latency 62ms"},"#,
    r#"{"label":"Active Tenants","value":"84","sublabel":"5 enterprise"}]"#
);

fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_hsnp-admin")
}

fn command() -> Command {
    let mut cmd = Command::new(bin());
    cmd.env("HSNP_CONFIG", "/nonexistent/hsnp/config.toml")
        .env_remove("HSNP_LISTEN_ADDR")
        .env_remove("HSNP_METRICS_URL")
        .env_remove("HSNP_FETCH_TIMEOUT")
        .env_remove("HSNP_DASHBOARD_WAIT")
        .env_remove("OTEL_EXPORTER_OTLP_ENDPOINT");
    cmd
}

fn spawn_server() -> (Child, u16) {
    let port = free_port();
    let child = command()
        .arg("serve")
        .arg("--listen-addr")
        .arg(format!("127.0.0.1:{port}"))
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    (child, port)
}

async fn wait_http_ready(port: u16, child: &mut Child) {
    let client = reqwest::Client::new();
    let mut ready = false;
    for _ in 0..100 {
        assert!(child.try_wait().unwrap().is_none(), "hsnp-admin exited early");
        if client
            .get(format!("http://127.0.0.1:{port}/healthz"))
            .send()
            .await
            .is_ok()
        {
            ready = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    assert!(ready, "admin server not ready");
}

fn json_lines(output: &Output) -> Vec<serde_json::Value> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
#[serial]
async fn e2e_demo_metrics_endpoint_is_stable() {
    let (mut child, port) = spawn_server();
    wait_http_ready(port, &mut child).await;

    let client = reqwest::Client::new();
    for _ in 0..3 {
        let resp = client
            .get(format!("http://127.0.0.1:{port}/api/demo-metrics"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        assert_eq!(resp.text().await.unwrap(), DEMO_METRICS_JSON);
    }

    let page = client
        .get(format!("http://127.0.0.1:{port}/templates"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(page.contains("Welcome Email"));

    let _ = child.kill();
    let _ = child.wait();
}

#[tokio::test]
#[serial]
async fn e2e_dashboard_renders_fallback_then_live_records() {
    let (mut child, port) = spawn_server();
    wait_http_ready(port, &mut child).await;

    let output = command()
        .arg("--json")
        .arg("dashboard")
        .arg("--url")
        .arg(format!("http://127.0.0.1:{port}/api/demo-metrics"))
        .arg("--wait")
        .arg("5s")
        .output()
        .unwrap();
    assert!(output.status.success());

    let renders = json_lines(&output);
    assert_eq!(renders.len(), 2);
    let expected: serde_json::Value = serde_json::from_str(DEMO_METRICS_JSON).unwrap();
    assert_eq!(renders[0], expected);
    assert_eq!(renders[1], expected);

    let _ = child.kill();
    let _ = child.wait();
}

#[tokio::test]
#[serial]
async fn e2e_dashboard_keeps_fallback_when_source_is_down() {
    let port = free_port();
    let output = command()
        .arg("--json")
        .arg("dashboard")
        .arg("--url")
        .arg(format!("http://127.0.0.1:{port}/api/demo-metrics"))
        .arg("--wait")
        .arg("2s")
        .output()
        .unwrap();
    assert!(output.status.success());

    let renders = json_lines(&output);
    assert_eq!(renders.len(), 1);
    assert_eq!(renders[0][1]["label"], "Delivery Rate");
}

#[test]
fn tenants_command_prints_table() {
    let output = command().arg("tenants").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("NAME"));
    assert!(stdout.contains("Northwind"));
}

#[test]
fn templates_command_prints_json() {
    let output = command().arg("--json").arg("templates").output().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 3);
    assert_eq!(value[0]["channel"], "Email");
}
