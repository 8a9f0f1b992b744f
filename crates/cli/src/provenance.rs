use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact: the settings that went in and a short summary of what came out.
pub struct Payload {
    pub tag: Option<String>,
    pub params: Value,
    pub summary: Value,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            tag: None,
            params,
            summary: Value::Null,
        }
    }

    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
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

/// Sidecar document written next to every artifact.
#[derive(Serialize)]
pub struct Provenance {
    code_rev: String,
    version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    callsite: Option<Callsite>,
    tag: Option<String>,
    params: Value,
    summary: Value,
    outputs: Vec<String>,
}

impl Provenance {
    /// Provenance block with no artifact, as printed by `cli report`.
    pub fn bare(tag: Option<String>) -> Self {
        Self {
            code_rev: current_git_rev(),
            version: inscribed::VERSION,
            callsite: None,
            tag,
            params: Value::Null,
            summary: Value::Null,
            outputs: Vec::new(),
        }
    }
}

/// Write `<stem>.provenance.json` next to `artifact`; returns the sidecar path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let sidecar = sidecar_path(artifact);
    if let Some(parent) = sidecar.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    let caller = Location::caller();
    let doc = Provenance {
        callsite: Some(Callsite {
            file: caller.file(),
            line: caller.line(),
        }),
        params: payload.params,
        summary: payload.summary,
        outputs: vec![artifact.to_string_lossy().into_owned()],
        ..Provenance::bare(payload.tag)
    };
    fs::write(&sidecar, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", sidecar.display()))?;
    Ok(sidecar)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "artifact".into());
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit hash from `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
pub fn current_git_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .or_else(|| {
            let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            if !output.status.success() {
                return None;
            }
            String::from_utf8(output.stdout)
                .ok()
                .map(|s| s.trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
