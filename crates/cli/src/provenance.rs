//! `<stem>.provenance.json` sidecars for `compute --out`.
//!
//! A sidecar records which engine build produced a response, which raw
//! request produced it, and a summary of the result, so a saved response can
//! be reproduced without opening the coordinate buffers.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

const SIDECAR_SUFFIX: &str = ".provenance.json";

/// Engine identity: crate version plus the source revision it was built from.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Engine {
    pub name: &'static str,
    pub version: &'static str,
    pub code_rev: String,
    pub parallel: bool,
}

impl Engine {
    pub fn current() -> Self {
        Self {
            name: "sacks",
            version: sacks::VERSION,
            code_rev: code_rev(),
            parallel: cfg!(feature = "parallel"),
        }
    }
}

/// Request parameters and result summary recorded next to a response.
pub struct Payload {
    pub params: Value,
    pub summary: Value,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            summary: Value::Null,
        }
    }

    pub fn with_summary(mut self, summary: Value) -> Self {
        self.summary = summary;
        self
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar<'a> {
    engine: Engine,
    callsite: Callsite,
    params: &'a Value,
    summary: &'a Value,
    response: String,
}

/// Write the sidecar for `response` and return its path.
#[track_caller]
pub fn write_sidecar(response: &Path, payload: Payload) -> Result<PathBuf> {
    let location = Location::caller();
    let path = sidecar_path(response);
    let doc = Sidecar {
        engine: Engine::current(),
        callsite: Callsite {
            file: location.file(),
            line: location.line(),
        },
        params: &payload.params,
        summary: &payload.summary,
        response: response.display().to_string(),
    };
    let bytes = serde_json::to_vec_pretty(&doc)?;
    fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `dir/run.json` → `dir/run.provenance.json`; a bare `run` gets the same.
fn sidecar_path(response: &Path) -> PathBuf {
    let mut name = response
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "response".into());
    name.push(SIDECAR_SUFFIX);
    response.with_file_name(name)
}

/// Source revision: `SACKS_CODE_REV` at build time, then at run time, then
/// `git describe`, else `"unknown"`.
fn code_rev() -> String {
    let from_env = option_env!("SACKS_CODE_REV")
        .map(str::to_owned)
        .or_else(|| std::env::var("SACKS_CODE_REV").ok())
        .filter(|rev| !rev.is_empty());
    from_env
        .or_else(git_describe)
        .unwrap_or_else(|| "unknown".to_owned())
}

fn git_describe() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    let rev = rev.trim();
    (!rev.is_empty()).then(|| rev.to_owned())
}
