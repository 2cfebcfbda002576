// Copyright 2025 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::catalog::DocumentKind;
use crate::types::error::SchemaYamlSnafu;
use crate::wire::Format;
use snafu::ResultExt;
use std::pin::Pin;
use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;
use tracing_subscriber::EnvFilter;

pub mod catalog;
pub mod types;
pub mod wire;


/// Logs go to stderr so stdout stays a clean payload.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();
}

async fn output(file: Option<String>) -> std::io::Result<Pin<Box<dyn AsyncWrite + Send>>> {
    let writer: Pin<Box<dyn AsyncWrite + Send>> = if let Some(file) = file {
        Box::pin(
            tokio::fs::OpenOptions::new()
                .create(true)
                .truncate(true)
                .write(true)
                .open(file)
                .await?,
        )
    } else {
        Box::pin(tokio::io::stdout())
    };

    Ok(writer)
}

async fn input(file: Option<String>) -> std::io::Result<String> {
    match file {
        Some(file) => tokio::fs::read_to_string(file).await,
        None => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            Ok(buf)
        }
    }
}

/// Writes the JSON Schema of `kind` as YAML.
pub async fn schema(kind: DocumentKind, file: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = output(file).await?;

    let yaml = serde_yaml_ng::to_string(&kind.schema()).context(SchemaYamlSnafu)?;
    writer.write_all(yaml.as_bytes()).await?;
    writer.flush().await?;

    Ok(())
}

/// Re-encodes a `kind` payload from one wire format into another.
pub async fn convert(
    kind: DocumentKind,
    from: Format,
    to: Format,
    pretty: bool,
    input_file: Option<String>,
    file: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let payload = input(input_file).await?;
    let converted = kind.transcode(payload.trim(), from, to, pretty)?;
    info!(%kind, %from, %to, pretty, bytes = converted.len(), "converted document");

    let mut writer = output(file).await?;
    writer.write_all(converted.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;

    Ok(())
}

pub async fn kinds(file: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = output(file).await?;
    for kind in DocumentKind::all() {
        writer.write_all(format!("{kind}\n").as_bytes()).await?;
    }
    writer.flush().await?;

    Ok(())
}
