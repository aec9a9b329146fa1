// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Parser;
use std::{env, sync::Arc};
use visionflow_gateway::api::http_server::{start_server, AppState};
use visionflow_gateway::config::GatewayConfig;
use visionflow_gateway::version;

#[derive(Parser, Debug)]
#[command(name = "visionflow-gateway", about = "VisionFlow AI demo backend")]
struct Args {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 8000)]
    port: u16,

    /// Host address to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    println!("🚀 Starting VisionFlow Gateway...\n");
    println!("📦 BUILD VERSION: {}", version::VERSION);
    println!("📅 Build Date: {}", version::BUILD_DATE);
    println!();

    let mut config = GatewayConfig::from_env();
    config.port = args.port;
    config.host = args.host;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid configuration: {}", e))?;

    println!("🎬 Demo mode: all generation requests return {}", config.sample_video_url);
    println!("🌐 Endpoints:");
    println!("   POST /api/generate-text-video");
    println!("   POST /api/generate-image-video");
    println!("   GET  /test");
    println!();

    let state = AppState::new(Arc::new(config));
    start_server(state).await
}
