// Copyright 2024 RustFS Team
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

use clap::{Parser, Subcommand};
use cmapi::catalog::DocumentKind;
use cmapi::wire::Format;
use shadow_rs::shadow;

shadow!(build);

#[derive(Parser)]
#[command(name = "cmapi")]
#[command(about = "Cluster-management API model CLI", long_about = None)]
#[command(version = build::PKG_VERSION, long_version = build::CLAP_LONG_VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Output the JSON Schema of a document kind in YAML
    Schema {
        /// Document kind, e.g. commandList
        #[arg(short, long)]
        kind: DocumentKind,

        /// Optional output path. If not set, the output will be written to stdout.
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Convert a payload between JSON and XML
    Convert {
        /// Document kind, e.g. commandList
        #[arg(short, long)]
        kind: DocumentKind,

        #[arg(long, default_value = "json")]
        from: Format,

        #[arg(long, default_value = "xml")]
        to: Format,

        /// Indent the output
        #[arg(long)]
        pretty: bool,

        /// Optional input path. If not set, the payload is read from stdin.
        #[arg(short, long)]
        input: Option<String>,

        /// Optional output path. If not set, the output will be written to stdout.
        #[arg(short, long)]
        file: Option<String>,
    },

    /// List the known document kinds
    Kinds {
        #[arg(short, long)]
        file: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    cmapi::init_tracing();

    match cli.command {
        Commands::Schema { kind, file } => cmapi::schema(kind, file).await?,
        Commands::Convert {
            kind,
            from,
            to,
            pretty,
            input,
            file,
        } => cmapi::convert(kind, from, to, pretty, input, file).await?,
        Commands::Kinds { file } => cmapi::kinds(file).await?,
    }

    Ok(())
}
