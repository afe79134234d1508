//! JSON-lines batch worker.
//!
//! Reads line-delimited JSON requests from stdin, dispatches to wdsum_core,
//! writes JSON responses to stdout.

use std::io::{self, BufRead, Write};

use clap::Parser;
use serde::{Deserialize, Serialize};
use wdsum_core::{OffsetStrategy, WindowOptions};

#[derive(Parser)]
#[command(name = "wdsum-worker", about = "wdsum JSON-lines batch worker")]
struct Args {
    /// Enable verbose logging to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Deserialize)]
struct Request {
    id: u64,
    method: String,
    #[serde(default)]
    params: serde_json::Value,
}

#[derive(Serialize)]
struct Response {
    id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Parameters of `max_window_sum`.  `window` defaults to `ceil(N/2)`.
#[derive(Deserialize)]
struct MaxWindowSumParams {
    digits: String,
    #[serde(default)]
    window: Option<i64>,
    #[serde(default)]
    strategy: OffsetStrategy,
    #[serde(default)]
    parallel: bool,
}

fn max_window_sum(params: &serde_json::Value) -> Result<serde_json::Value, String> {
    let params: MaxWindowSumParams =
        serde_json::from_value(params.clone()).map_err(|e| format!("invalid params: {e}"))?;

    let options = WindowOptions {
        strategy: params.strategy,
        parallel: params.parallel,
    };
    let report = wdsum_core::max_window_digit_sum_report(&params.digits, params.window, options)
        .map_err(|e| e.to_string())?;
    serde_json::to_value(report).map_err(|e| e.to_string())
}

fn dispatch(method: &str, params: &serde_json::Value) -> Result<serde_json::Value, String> {
    match method {
        "max_window_sum" => max_window_sum(params),
        "ping" => Ok(serde_json::Value::String("pong".to_owned())),
        _ => Err(format!("unknown method: {method}")),
    }
}

/// Turn one input line into its response line, or `None` for blank lines.
fn handle_line(line: &str) -> Option<String> {
    if line.trim().is_empty() {
        return None;
    }

    let resp = match serde_json::from_str::<Request>(line) {
        Ok(req) => match dispatch(&req.method, &req.params) {
            Ok(result) => Response {
                id: req.id,
                result: Some(result),
                error: None,
            },
            Err(error) => {
                log::debug!("request {} ({}) failed: {error}", req.id, req.method);
                Response {
                    id: req.id,
                    result: None,
                    error: Some(error),
                }
            }
        },
        // Parse error -- use id=0 since we can't extract it.
        Err(e) => Response {
            id: 0,
            result: None,
            error: Some(format!("invalid JSON: {e}")),
        },
    };

    Some(serde_json::to_string(&resp).unwrap_or_else(|_| {
        format!(
            r#"{{"id":{},"error":"response serialization failed"}}"#,
            resp.id
        )
    }))
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .target(env_logger::Target::Stderr)
        .init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    log::info!("wdsum-worker: ready");

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                log::error!("wdsum-worker: stdin read error: {e}");
                break;
            }
        };

        if let Some(json) = handle_line(&line) {
            let _ = writeln!(stdout, "{json}");
            let _ = stdout.flush();
        }
    }

    log::info!("wdsum-worker: stdin closed, exiting");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> serde_json::Value {
        serde_json::from_str(&handle_line(line).unwrap()).unwrap()
    }

    #[test]
    fn test_ping() {
        let resp = parse(r#"{"id":7,"method":"ping"}"#);
        assert_eq!(resp["id"], 7);
        assert_eq!(resp["result"], "pong");
        assert!(resp.get("error").is_none());
    }

    #[test]
    fn test_max_window_sum() {
        let resp = parse(
            r#"{"id":1,"method":"max_window_sum","params":{"digits":"09121","window":3}}"#,
        );
        assert_eq!(resp["result"]["max_sum"], 12);
        assert_eq!(resp["result"]["strategy"], "counted");
    }

    #[test]
    fn test_max_window_sum_default_window_filtered() {
        let resp = parse(
            r#"{"id":2,"method":"max_window_sum","params":{"digits":"09121","strategy":"filtered","parallel":true}}"#,
        );
        assert_eq!(resp["result"]["window"], 3);
        assert_eq!(resp["result"]["max_sum"], 12);
        assert_eq!(resp["result"]["strategy"], "filtered");
    }

    #[test]
    fn test_max_window_sum_error() {
        let resp = parse(
            r#"{"id":3,"method":"max_window_sum","params":{"digits":"12","window":3}}"#,
        );
        assert_eq!(resp["id"], 3);
        assert!(resp.get("result").is_none());
        assert!(resp["error"].as_str().unwrap().starts_with("NoValidWindow"));
    }

    #[test]
    fn test_strategy_name_is_case_sensitive() {
        let resp = parse(
            r#"{"id":6,"method":"max_window_sum","params":{"digits":"09121","strategy":"Filtered"}}"#,
        );
        assert!(resp["error"].as_str().unwrap().starts_with("invalid params"));
    }

    #[test]
    fn test_missing_params() {
        let resp = parse(r#"{"id":4,"method":"max_window_sum"}"#);
        assert!(resp["error"].as_str().unwrap().starts_with("invalid params"));
    }

    #[test]
    fn test_unknown_method() {
        let resp = parse(r#"{"id":5,"method":"nope"}"#);
        assert_eq!(resp["error"], "unknown method: nope");
    }

    #[test]
    fn test_invalid_json_and_blank_lines() {
        let resp = parse("{not json");
        assert_eq!(resp["id"], 0);
        assert!(resp["error"].as_str().unwrap().starts_with("invalid JSON"));
        assert!(handle_line("   ").is_none());
    }
}
